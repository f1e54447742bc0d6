use serde::{Deserialize, Serialize};
use std::fmt;

/// A decimal amount exactly as the backend sent it.
///
/// Prices travel as strings so that no precision is lost on the way to the
/// screen. The client never does arithmetic on them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(pub String);

impl Price {
    pub fn new(raw: impl Into<String>) -> Self {
        Price(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format for a product card, e.g. `$12.50`.
    pub fn display(&self) -> String {
        format!("${}", self.0.trim())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Price {
    fn from(raw: &str) -> Self {
        Price(raw.to_string())
    }
}
