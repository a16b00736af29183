//! Ledger index type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A monotonically increasing integer identifying a finalized ledger
/// version. A transaction is bound to exactly one ledger index once
/// validated; until then it has none.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LedgerIndex(u64);

impl LedgerIndex {
    pub fn new(index: u64) -> Self {
        Self(index)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LedgerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
