//! Pressure mode selection
//!
//! The pressure mode controls how urgent a countdown looks: how coarse or
//! fine its resolution is as the exam approaches. The lowercase form is used
//! on the wire and in stored records, the capitalized form for display.
//!
//! Stored records may carry a mode this build does not know. `StoredMode`
//! keeps that raw value so the record still loads and can be shown with the
//! plain day-count fallback.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display urgency for a countdown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PressureMode {
    /// Days only
    #[default]
    #[serde(alias = "Calm")]
    Calm,

    /// Days and hours
    #[serde(alias = "Realistic")]
    Realistic,

    /// Adaptive resolution that gets finer as the deadline nears
    #[serde(alias = "Brutal")]
    Brutal,
}

impl PressureMode {
    /// All modes, in the order a selector lists them
    pub const ALL: [PressureMode; 3] = [Self::Calm, Self::Realistic, Self::Brutal];

    /// Lowercase form used in stored records and requests
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Calm => "calm",
            Self::Realistic => "realistic",
            Self::Brutal => "brutal",
        }
    }

    /// Capitalized form shown to users
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Calm => "Calm",
            Self::Realistic => "Realistic",
            Self::Brutal => "Brutal",
        }
    }

    /// One-line summary of what the mode shows
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Calm => "Shows days only",
            Self::Realistic => "Shows days and hours",
            Self::Brutal => "Adaptive countdown",
        }
    }

    /// Sample countdown label for the mode
    #[must_use]
    pub fn example(&self) -> &'static str {
        match self {
            Self::Calm => "5 days left",
            Self::Realistic => "5 days 12 hours left",
            Self::Brutal => "132 hours left",
        }
    }

    /// Parse either form, ignoring case and surrounding whitespace
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "calm" => Some(Self::Calm),
            "realistic" => Some(Self::Realistic),
            "brutal" => Some(Self::Brutal),
            _ => None,
        }
    }
}

impl fmt::Display for PressureMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error returned when a string names no pressure mode
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pressure mode '{0}' (expected calm, realistic or brutal)")]
pub struct ParsePressureModeError(pub String);

impl FromStr for PressureMode {
    type Err = ParsePressureModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParsePressureModeError(s.to_string()))
    }
}

impl From<PressureMode> for String {
    fn from(mode: PressureMode) -> Self {
        mode.as_str().to_string()
    }
}

/// Pressure mode as read from a stored record
///
/// Unrecognized values are kept verbatim instead of failing the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoredMode {
    Known(PressureMode),
    Unrecognized(String),
}

impl StoredMode {
    /// The recognized mode, if any
    #[must_use]
    pub fn known(&self) -> Option<PressureMode> {
        match self {
            Self::Known(mode) => Some(*mode),
            Self::Unrecognized(_) => None,
        }
    }

    /// Stored form: lowercase for known modes, verbatim otherwise
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(mode) => mode.as_str(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl Default for StoredMode {
    fn default() -> Self {
        Self::Known(PressureMode::default())
    }
}

impl fmt::Display for StoredMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(mode) => fmt::Display::fmt(mode, f),
            Self::Unrecognized(raw) => f.write_str(raw),
        }
    }
}

impl From<PressureMode> for StoredMode {
    fn from(mode: PressureMode) -> Self {
        Self::Known(mode)
    }
}

impl From<String> for StoredMode {
    fn from(raw: String) -> Self {
        match PressureMode::parse(&raw) {
            Some(mode) => Self::Known(mode),
            None => Self::Unrecognized(raw),
        }
    }
}

impl From<StoredMode> for String {
    fn from(mode: StoredMode) -> Self {
        match mode {
            StoredMode::Known(mode) => mode.into(),
            StoredMode::Unrecognized(raw) => raw,
        }
    }
}

impl PartialEq<PressureMode> for StoredMode {
    fn eq(&self, other: &PressureMode) -> bool {
        self.known() == Some(*other)
    }
}
