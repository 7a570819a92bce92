use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A subject a teacher can be assigned to teach.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Subject {
    Math,
    Economics,
    Programming,
}

impl Subject {
    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Economics => "Economics",
            Subject::Programming => "Programming",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Subject {
    type Err = String;

    // Case-insensitive, matching the wire representation.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "math" => Ok(Subject::Math),
            "economics" => Ok(Subject::Economics),
            "programming" => Ok(Subject::Programming),
            other => Err(format!("unknown subject: {other}")),
        }
    }
}
