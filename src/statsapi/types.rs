//! Identifier types for the MLB Stats API.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;


/// Type-safe wrapper for MLB game identifiers (game pk).
///
/// The pk is treated as an opaque token and inserted into request paths
/// verbatim, with no encoding or validation. Callers are responsible for
/// supplying already-safe values.
///
/// # Examples
///
/// ```rust
/// use mlb_stats::GamePk;
///
/// let pk = GamePk::new("529572");
/// assert_eq!(pk.as_str(), "529572");
/// assert_eq!(pk.to_string(), "529572");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GamePk(pub String);

impl GamePk {
    /// Create a new GamePk from any string-like value.
    pub fn new(pk: impl Into<String>) -> Self {
        Self(pk.into())
    }

    /// Get the underlying identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GamePk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GamePk {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

/// A calendar date in `yyyy-mm-dd` form for schedule queries.
///
/// Passed verbatim as a query value; no validation or encoding is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApiDate(pub String);

impl ApiDate {
    pub fn new(date: impl Into<String>) -> Self {
        Self(date.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ApiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiDate {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}
