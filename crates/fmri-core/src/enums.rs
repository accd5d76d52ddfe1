//! Issue classifications.
//!
//! Serialized values are the labels printed in reports (`missing`, `no TR`,
//! `unreadable`), so CSV, Markdown, and JSON output agree.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What is wrong with the file or directory named by an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Problem {
    /// A required file or directory is absent.
    #[serde(rename = "missing")]
    Missing,
    /// The metadata companion exists but lacks the required timing key.
    #[serde(rename = "no TR")]
    NoTr,
    /// The metadata companion exists but could not be read or parsed.
    #[serde(rename = "unreadable")]
    Unreadable,
}

impl Problem {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NoTr => "no TR",
            Self::Unreadable => "unreadable",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
