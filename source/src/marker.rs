//! Opaque continuation marker for the remote source's cursor pagination.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A resumption cursor returned by the remote source.
///
/// The engine never parses a marker; it only threads it through sequential
/// continuation steps. Absence of a marker means the source is exhausted
/// for the queried range and direction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker(String);

impl Marker {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
