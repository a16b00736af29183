//! Remote ledger history source trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Marker, SourceError};
use ledgerfeed_types::{AccountId, LedgerIndex, TransactionRecord};

/// Parameters for one page of an account-history query.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceQuery {
    pub account: AccountId,
    /// Inclusive lower ledger bound; `None` = unbounded.
    pub ledger_index_min: Option<LedgerIndex>,
    /// Inclusive upper ledger bound; `None` = unbounded.
    pub ledger_index_max: Option<LedgerIndex>,
    /// Maximum number of records the source should return for this page.
    pub limit: usize,
    /// `true` returns records ascending by ledger index, `false` descending.
    pub forward: bool,
    /// `None` starts a fresh query; otherwise resumes a prior one.
    pub marker: Option<Marker>,
}

/// One page of remote history.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SourcePage {
    pub transactions: Vec<TransactionRecord>,
    /// Cursor for the next page; `None` when the source is exhausted.
    pub next_marker: Option<Marker>,
}

/// Cursor-paginated query over the remote ledger's account history.
///
/// Every returned record is validated and remote-origin, carrying a hash,
/// a ledger index and the authoritative result code. Connection lifecycle
/// (handshake, reconnection, timeouts) belongs to the implementation.
#[async_trait]
pub trait TransactionSource: Send + Sync {
    async fn query(&self, query: SourceQuery) -> Result<SourcePage, SourceError>;
}
