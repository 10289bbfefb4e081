//! Cover letter tone selection.
//!
//! Parsing is lenient: any value that is not a known tone falls back to
//! `Professional`, so a stale or mistyped selector never fails a request.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum Tone {
    #[default]
    Professional,
    Concise,
    Confident,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Concise, Tone::Confident];

    /// Exact-name lookup; anything unrecognized is `Professional`.
    pub fn parse_lenient(raw: &str) -> Self {
        match raw {
            "Concise" => Tone::Concise,
            "Confident" => Tone::Confident,
            _ => Tone::Professional,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Concise => "Concise",
            Tone::Confident => "Confident",
        }
    }
}

impl From<String> for Tone {
    fn from(raw: String) -> Self {
        Tone::parse_lenient(&raw)
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
