//! Configuration for the read-aloud pipeline.
//!
//! Every stage after line grouping can be switched off independently, which is
//! mostly useful for diagnosing which stage mangled a page.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Maximum edit distance for two lines to count as the same header/footer line.
pub const MAX_LINE_DISTANCE: usize = 3;

/// Number of recently seen pages remembered for header/footer comparison.
pub const HISTORY_CAPACITY: usize = 3;

/// Logging detail level for the pipeline.
///
/// Libraries only emit through the `log` facade; binaries use this to pick the
/// `env_logger` filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Only critical errors are logged
    Error,
    /// Warnings and errors are logged
    Warn,
    /// General information (default level)
    #[default]
    Info,
    /// Detailed debug information, including trim decisions
    Debug,
    /// Very detailed trace information (per-page line counts)
    Trace,
}

impl LogLevel {
    /// Corresponding `log` filter.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Header/footer trimmer policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrimmerConfig {
    /// Lines within this many edits of each other are considered repeats.
    pub max_line_distance: usize,
    /// How many earlier pages are kept for comparison.
    pub history_capacity: usize,
}

impl Default for TrimmerConfig {
    fn default() -> Self {
        Self {
            max_line_distance: MAX_LINE_DISTANCE,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

/// Read-aloud pipeline configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadAloudConfig {
    /// Header/footer trimmer policy.
    pub trimmer: TrimmerConfig,
    /// Strip running headers/footers repeated across pages.
    pub trim_header_footer: bool,
    /// Merge wrapped and hyphenated lines into paragraphs.
    pub reflow_paragraphs: bool,
    /// Remove bracketed citation markers such as `[12]`.
    pub strip_annotations: bool,
    /// Logging verbosity for binaries.
    pub log_level: LogLevel,
}

impl Default for ReadAloudConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadAloudConfig {
    /// Create configuration with every stage enabled.
    pub fn new() -> Self {
        Self {
            trimmer: TrimmerConfig::default(),
            trim_header_footer: true,
            reflow_paragraphs: true,
            strip_annotations: true,
            log_level: LogLevel::Info,
        }
    }

    /// Enable or disable header/footer trimming.
    pub fn with_trim_header_footer(mut self, enable: bool) -> Self {
        self.trim_header_footer = enable;
        self
    }

    /// Enable or disable paragraph reflow.
    pub fn with_reflow_paragraphs(mut self, enable: bool) -> Self {
        self.reflow_paragraphs = enable;
        self
    }

    /// Enable or disable citation marker removal.
    pub fn with_strip_annotations(mut self, enable: bool) -> Self {
        self.strip_annotations = enable;
        self
    }

    /// Set the trimmer policy.
    pub fn with_trimmer(mut self, trimmer: TrimmerConfig) -> Self {
        self.trimmer = trimmer;
        self
    }

    /// Set the logging level.
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }

    /// Check that the configuration can run.
    pub fn validate(&self) -> Result<()> {
        if self.trimmer.history_capacity == 0 {
            return Err(Error::InvalidConfig(
                "trimmer history capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
