//! Product version triples and the comparison policies families resolve with

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::DialectError;

/// A reported server version
///
/// Ordering is lexicographic over (major, minor, revision), so revision only
/// decides between two versions with identical major and minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Version with minor and revision zero
    pub const fn major(major: u32) -> Self {
        Self::new(major, 0, 0)
    }

    /// Project this version onto the fields a policy compares
    pub fn truncate(self, policy: VersionMatch) -> Self {
        match policy {
            VersionMatch::Full => self,
            VersionMatch::MajorMinor => Self::new(self.major, self.minor, 0),
            VersionMatch::MajorOnly => Self::major(self.major),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}

impl FromStr for Version {
    type Err = DialectError;

    /// Parses `"16"`, `"10.5"` or `"11.1.4"`; extra components are ignored
    /// and a non-numeric suffix on a component (`"8.0.36-log"`) is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || DialectError::InvalidVersion(s.to_string());
        let mut parts = s.trim().split('.');
        let mut next = |required: bool| -> Result<u32, DialectError> {
            match parts.next() {
                Some(part) => {
                    let digits: String = part.chars().take_while(char::is_ascii_digit).collect();
                    digits.parse().map_err(|_| invalid())
                }
                None if required => Err(invalid()),
                None => Ok(0),
            }
        };
        let major = next(true)?;
        let minor = next(false)?;
        let revision = next(false)?;
        Ok(Self::new(major, minor, revision))
    }
}

/// Which version components a family compares when picking a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionMatch {
    /// Major, minor and revision
    #[default]
    Full,
    /// Revision is ignored
    MajorMinor,
    /// Any minor within a major resolves to that major's profile
    MajorOnly,
}
