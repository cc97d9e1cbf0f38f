//! Console modes, priority thresholds, and the visibility policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::record::{kinds, LogRecord};

/// Named priority thresholds
///
/// Priorities run from 1 (low) to 5 (critical); 3 is the default for
/// records that do not set one. Priority 4 and up counts as critical for
/// errors, priority 1 marks a "verbose error".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityLevels {
    pub low: u8,
    pub normal: u8,
    pub high: u8,
    pub critical: u8,
}

/// The fixed thresholds used by [`should_show`]
pub const PRIORITY_LEVELS: PriorityLevels = PriorityLevels {
    low: 1,
    normal: 3,
    high: 4,
    critical: 5,
};

/// Console display mode; decides which records are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Verbose,
    #[default]
    Normal,
    Sparse,
    Concise,
    Error,
    Progress,
    Silent,
}

impl Mode {
    /// All modes, from most to least talkative
    pub const ALL: [Mode; 7] = [
        Mode::Verbose,
        Mode::Normal,
        Mode::Sparse,
        Mode::Concise,
        Mode::Error,
        Mode::Progress,
        Mode::Silent,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Mode::Verbose => "verbose",
            Mode::Normal => "normal",
            Mode::Sparse => "sparse",
            Mode::Concise => "concise",
            Mode::Error => "error",
            Mode::Progress => "progress",
            Mode::Silent => "silent",
        }
    }

    /// One-line description for help output
    pub fn description(&self) -> &'static str {
        match self {
            Mode::Verbose => "Every message is displayed",
            Mode::Normal => "All except low priority and verbose messages",
            Mode::Sparse => "Only high priority messages and non-verbose errors",
            Mode::Concise => "Same as sparse, without section headers",
            Mode::Error => "Only errors, and all errors",
            Mode::Progress => "Progress messages and non-verbose errors only",
            Mode::Silent => "No messages at all",
        }
    }

    /// Whether `start_section` prints a header block in this mode
    pub fn shows_section_headers(&self) -> bool {
        *self != Mode::Concise
    }

    /// Visibility of a record with the given type and priority
    pub fn allows(&self, kind: &str, priority: u8) -> bool {
        let levels = PRIORITY_LEVELS;
        match self {
            Mode::Verbose => true,
            Mode::Normal => kind != kinds::VERBOSE && priority > levels.low,
            Mode::Sparse | Mode::Concise => kind != kinds::VERBOSE && priority >= levels.high,
            Mode::Error => kind == kinds::ERROR,
            Mode::Progress => {
                kind == kinds::PROGRESS || (kind == kinds::ERROR && priority > levels.low)
            }
            Mode::Silent => false,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::unknown_mode(s))
    }
}

/// Whether `record` is printed under `mode`
pub fn should_show(mode: Mode, record: &LogRecord) -> bool {
    mode.allows(record.kind(), record.priority())
}

/// When the active section name is prefixed to a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ShowSections {
    /// Header block printed when a section starts; lines are unlabelled
    #[default]
    OnChange,
    /// Only the first visible line of a section is labelled
    FirstLog,
    /// Every line is labelled; no header block
    LogOnly,
    /// Header block and every line labelled
    Always,
    Never,
}

impl ShowSections {
    pub const ALL: [ShowSections; 5] = [
        ShowSections::OnChange,
        ShowSections::FirstLog,
        ShowSections::LogOnly,
        ShowSections::Always,
        ShowSections::Never,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShowSections::OnChange => "onChange",
            ShowSections::FirstLog => "firstLog",
            ShowSections::LogOnly => "logOnly",
            ShowSections::Always => "always",
            ShowSections::Never => "never",
        }
    }

    /// Whether starting a section prints a header block
    pub fn prints_header(&self) -> bool {
        matches!(self, ShowSections::OnChange | ShowSections::Always)
    }

    /// Whether log lines are considered for a section label at all
    pub fn labels_lines(&self) -> bool {
        matches!(
            self,
            ShowSections::Always | ShowSections::LogOnly | ShowSections::FirstLog
        )
    }
}

impl fmt::Display for ShowSections {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ShowSections {
    type Err = Error;

    /// Accepts the camelCase names plus kebab/snake spellings
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect();
        ShowSections::ALL
            .into_iter()
            .find(|opt| opt.name().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| Error::unknown_show_sections(s))
    }
}
