//! Messages and file names used by the CLI

/// Directory under the platform config dir holding examtick files
pub const APP_DIR_NAME: &str = "examtick";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Shown when there are no active exams
pub const MSG_NO_EXAMS: &str = "No exams yet";

/// Header printed above archived exams
pub const MSG_ARCHIVED_HEADER: &str = "Archived";

/// Marker for the next upcoming exam
pub const NEXT_MARKER: &str = "*";

pub const MSG_BANNER: &str = "examtick v";
pub const MSG_LOADED_EXAMS: &str = "Loaded exam records: ";
pub const MSG_SETTINGS_SAVED: &str = "Saved settings to ";
pub const MSG_SETTINGS_DEFAULTS: &str = "No settings file, using defaults: ";
pub const MSG_NO_CONFIG_DIR: &str = "No config directory on this platform, using default settings";
pub const MSG_WATCHING: &str = "Refreshing every ";
pub const MSG_STOPPED: &str = "Stopped";
