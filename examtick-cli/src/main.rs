//! examtick: exam countdowns in the terminal

use std::process::ExitCode;

use chrono::Utc;
use clap::Parser;
use examtick_common::{ClockFormat, Exam, PressureMode, RefreshCadence};
use log::{debug, error, info, warn};

use examtick_cli::args::Args;
use examtick_cli::config::Settings;
use examtick_cli::constants::*;
use examtick_cli::errors::CliError;
use examtick_cli::logging::setup_logger;
use examtick_cli::render::{RenderOptions, render_exams};
use examtick_cli::source::{adhoc_exam, load_exams};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = setup_logger(args.debug) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }
    debug!("{}{}", MSG_BANNER, env!("CARGO_PKG_VERSION"));

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), CliError> {
    let settings_path = args.config.clone().or_else(Settings::default_path);
    let mut settings = match &settings_path {
        Some(path) => Settings::load_from(path)?,
        None => {
            warn!("{MSG_NO_CONFIG_DIR}");
            Settings::default()
        }
    };

    // Flags override saved preferences
    let mode = args.mode.unwrap_or(settings.default_pressure_mode);
    let clock = if args.use_24_hour_time {
        ClockFormat::TwentyFourHour
    } else {
        settings.clock_format()
    };

    if args.save {
        settings.default_pressure_mode = mode;
        settings.use_24_hour_time = clock == ClockFormat::TwentyFourHour;
        if let Some(path) = &settings_path {
            settings.save_to(path)?;
            info!("{}{}", MSG_SETTINGS_SAVED, path.display());
        } else {
            warn!("{MSG_NO_CONFIG_DIR}");
        }
    }

    let exams = collect_exams(&args, mode)?;
    let options = RenderOptions {
        clock,
        include_archived: args.all,
    };

    if !args.watch {
        print_exams(&exams, options);
        return Ok(());
    }

    let cadence = if args.detail {
        RefreshCadence::Detail
    } else {
        RefreshCadence::Card
    };
    info!("{}{:?}", MSG_WATCHING, cadence.interval());

    let mut ticker = tokio::time::interval(cadence.interval());
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    let mut first = true;
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                if !first {
                    println!();
                }
                first = false;
                print_exams(&exams, options);
            }
            _ = &mut shutdown => {
                info!("{MSG_STOPPED}");
                break;
            }
        }
    }

    Ok(())
}

fn collect_exams(args: &Args, mode: PressureMode) -> Result<Vec<Exam>, CliError> {
    if let Some(path) = &args.file {
        let exams = load_exams(path)?;
        debug!("{}{}", MSG_LOADED_EXAMS, exams.len());
        return Ok(exams);
    }

    // The argument group guarantees one of --file / --at
    match args.at {
        Some(at) => Ok(vec![adhoc_exam(&args.title, at, mode, Utc::now())?]),
        None => Ok(Vec::new()),
    }
}

fn print_exams(exams: &[Exam], options: RenderOptions) {
    for line in render_exams(exams, Utc::now(), options) {
        println!("{line}");
    }
}
