//! Output rendering: native Unicode or hexadecimal numeric character
//! references.

use std::fmt;
use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Hebrew script as-is.
    #[default]
    Unicode,
    /// Every non-ASCII codepoint as `&#xHEX;`.
    Html,
}

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("unknown output format {0:?} (expected \"unicode\" or \"html\")")]
    UnknownFormat(String),
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Unicode => "unicode",
            OutputFormat::Html => "html",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unicode" => Ok(OutputFormat::Unicode),
            "html" => Ok(OutputFormat::Html),
            other => Err(FormatError::UnknownFormat(other.to_string())),
        }
    }
}

/// Apply `format` to already-substituted text.
pub fn render(text: String, format: OutputFormat) -> String {
    match format {
        OutputFormat::Unicode => text,
        OutputFormat::Html => html_entities(&text),
    }
}

/// Replace each codepoint above U+007F with a lowercase hex reference.
///
/// Works per codepoint, so a letter followed by a combining mark becomes two
/// references.
pub fn html_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 4);
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            write!(out, "&#x{:x};", c as u32).ok();
        }
    }
    out
}
