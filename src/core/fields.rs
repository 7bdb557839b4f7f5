//! Field-filter serialization for the `fields=` query parameter.
//!
//! The Stats API accepts a `fields` parameter listing the JSON fields to
//! return, comma-separated, e.g. `fields=gameData,teams,name`. The filter
//! preserves the caller's ordering and performs no encoding: field names are
//! joined with literal commas exactly as supplied.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered list of field names for server-side response trimming.
///
/// An empty filter renders as the empty string, and an operation given an
/// empty filter still sends an explicit `fields=` parameter. The parameter is
/// only omitted when no filter is passed at all.
///
/// # Examples
///
/// ```rust
/// use mlb_stats::FieldFilter;
///
/// let filter = FieldFilter::new(["gameData", "teams", "name"]);
/// assert_eq!(filter.to_string(), "gameData,teams,name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldFilter(Vec<String>);

impl FieldFilter {
    /// Build a filter from any sequence of field names, preserving order.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The field names in the order they were supplied.
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

impl fmt::Display for FieldFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(","))
    }
}

impl<S: Into<String>> FromIterator<S> for FieldFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
