use std::fmt;

use serde::{Deserialize, Serialize};

/// An electrode of the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Domain {
    Negative,
    Positive,
}

impl Domain {
    /// Returns the domain name in lowercase, for use mid-sentence.
    #[must_use]
    pub fn lowercase(self) -> &'static str {
        match self {
            Domain::Negative => "negative",
            Domain::Positive => "positive",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Domain::Negative => f.write_str("Negative"),
            Domain::Positive => f.write_str("Positive"),
        }
    }
}
