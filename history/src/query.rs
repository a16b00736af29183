//! Query specification and page types for the history engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use ledgerfeed_source::Marker;
use ledgerfeed_types::{AccountId, LedgerIndex, TransactionRecord, TxType};

/// Default page size when the caller does not care.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Maximum allowed page size.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Direction of a transaction relative to the queried account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// The queried account is the sender.
    Outgoing,
    /// The queried account is the receiver (and not also the sender).
    Incoming,
}

/// Parameters for one logical page fetch.
///
/// An immutable value object per request. The engine keeps loop-local
/// copies of `offset` and `marker` while it chases continuations; the spec
/// itself is never mutated and never shared across concurrent requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuerySpec {
    /// The account whose history is queried (the filter perspective).
    pub account: AccountId,
    /// Keep only transactions where this account is on either side.
    pub counterparty: Option<AccountId>,
    /// Inclusive lower ledger bound; `None` = unbounded.
    pub ledger_index_min: Option<LedgerIndex>,
    /// Inclusive upper ledger bound; `None` = unbounded.
    pub ledger_index_max: Option<LedgerIndex>,
    /// Keep only these transaction types; empty = all.
    pub types: BTreeSet<TxType>,
    /// Drop failed and unvalidated transactions.
    pub exclude_failed: bool,
    /// Newest-first ordering.
    pub descending: bool,
    /// Keep only transactions flowing this way relative to `account`.
    pub direction: Option<Direction>,
    /// Page size cap.
    pub max: usize,
    /// Desired minimum number of records before the engine stops chasing
    /// continuations. Exhaustion below this is success, not an error.
    pub min: usize,
    /// Number of leading records to skip (after filter and sort).
    pub offset: usize,
    /// Resume cursor from a prior page.
    pub marker: Option<Marker>,
}

impl QuerySpec {
    /// A spec with no filters and default page bounds.
    pub fn for_account(account: AccountId) -> Self {
        Self {
            account,
            counterparty: None,
            ledger_index_min: None,
            ledger_index_max: None,
            types: BTreeSet::new(),
            exclude_failed: false,
            descending: false,
            direction: None,
            max: DEFAULT_PAGE_SIZE,
            min: DEFAULT_PAGE_SIZE,
            offset: 0,
            marker: None,
        }
    }

    /// Resolve the effective page size, clamped to [1, MAX_PAGE_SIZE].
    pub fn effective_max(&self) -> usize {
        self.max.clamp(1, MAX_PAGE_SIZE)
    }
}

/// One fully merged, filtered, sorted and bounded page of history.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Page {
    pub records: Vec<TransactionRecord>,
    /// Cursor left over when the engine stopped; `None` means the remote
    /// source was exhausted for the queried range.
    pub marker: Option<Marker>,
}
