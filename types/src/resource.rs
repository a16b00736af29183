//! Client resource id — caller-supplied idempotency key.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a submission before (or without) a ledger-assigned hash.
///
/// Supplied by the caller when a transaction is submitted; the only handle
/// on a local-origin record that never reached a validated ledger.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientResourceId(String);

impl ClientResourceId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ClientResourceId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}
