//! The client key that scopes a wash-history query.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

use crate::error::FetchError;

/// A client identifier, normalised to a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(u64);

impl SubjectId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Parses optional user input.
    ///
    /// Blank input means no client is selected and yields `Ok(None)`.
    pub fn parse_optional(input: &str) -> Result<Option<Self>, FetchError> {
        if input.trim().is_empty() {
            return Ok(None);
        }
        input.parse().map(Some)
    }
}

impl fmt::Display for SubjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SubjectId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for SubjectId {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| FetchError::InvalidSubject(s.to_string()))
    }
}

impl TryFrom<&str> for SubjectId {
    type Error = FetchError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
