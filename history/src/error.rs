//! History engine error taxonomy.
//!
//! All four kinds propagate unchanged to the caller: the engine performs no
//! retries and never returns partial results on error.

use thiserror::Error;

use ledgerfeed_source::{SourceError, StoreError};

#[derive(Debug, Error)]
pub enum HistoryError {
    /// The remote transaction source call failed.
    #[error("transaction source error: {0}")]
    Source(#[from] SourceError),

    /// The local failure store call failed.
    #[error("local failure store error: {0}")]
    Store(#[from] StoreError),

    /// A requested base transaction does not exist in either source.
    #[error("transaction not found: {0}")]
    NotFound(String),

    /// A base transaction could not be located inside its own computed
    /// neighbor window. Signals a bug or a gap in the remote source's
    /// retained history; never silently recovered from.
    #[error("inconsistent history: {0}")]
    InconsistentHistory(String),
}
