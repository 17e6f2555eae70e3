//! Output configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which serialized form(s) to print.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Nested record form.
    #[default]
    Json,
    /// Flattened `name,text,location` lines.
    Lines,
    /// Nested form followed by the flattened form.
    Both,
}

impl OutputFormat {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Lines => "lines",
            Self::Both => "both",
        }
    }

    #[must_use]
    pub const fn includes_json(self) -> bool {
        matches!(self, Self::Json | Self::Both)
    }

    #[must_use]
    pub const fn includes_lines(self) -> bool {
        matches!(self, Self::Lines | Self::Both)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

const fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Default output form when `--format` is not given.
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent the nested JSON form.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}
