//! Item version numbers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The version of an item to read. `Latest` selects the highest numbered
/// version present in the requested language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Version {
    /// The highest numbered version available.
    Latest,
    /// A specific version, 1-based.
    Number(u32),
}

impl Version {
    /// Returns the version number, or `None` for `Latest`.
    #[must_use]
    pub fn number(&self) -> Option<u32> {
        match self {
            Version::Latest => None,
            Version::Number(n) => Some(*n),
        }
    }
}

impl Default for Version {
    fn default() -> Self {
        Version::Latest
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Version::Latest => write!(f, "latest"),
            Version::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_has_no_number() {
        assert_eq!(Version::Latest.number(), None);
        assert_eq!(Version::Number(3).number(), Some(3));
    }

    #[test]
    fn default_is_latest() {
        assert_eq!(Version::default(), Version::Latest);
    }
}
