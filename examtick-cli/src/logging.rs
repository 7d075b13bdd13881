//! Logger setup
//!
//! Log lines go to stderr so stdout only carries countdowns.

use chrono::{SecondsFormat, Utc};
use log::LevelFilter;

use crate::errors::CliError;

/// Install the global logger; `debug` lowers the level to `Debug`
pub fn setup_logger(debug: bool) -> Result<(), CliError> {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
