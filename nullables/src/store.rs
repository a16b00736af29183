//! Nullable local failure store.

use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};

use ledgerfeed_source::{LocalFailureStore, StoreError};
use ledgerfeed_types::{AccountId, LedgerIndex, TransactionRecord, TxType};

/// An in-memory failure store serving scripted failed-local records.
///
/// Filters by account, type set and ledger range like a real store. A
/// record with no ledger index cannot be proven inside any bounded range,
/// so it is only returned when both bounds are unbounded.
pub struct NullFailureStore {
    records: Vec<TransactionRecord>,
    fail: bool,
    queries: AtomicUsize,
}

impl NullFailureStore {
    /// A store holding the given failed-local records.
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records,
            fail: false,
            queries: AtomicUsize::new(0),
        }
    }

    /// An empty store.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// A store whose every query fails.
    pub fn failing() -> Self {
        Self {
            records: Vec::new(),
            fail: true,
            queries: AtomicUsize::new(0),
        }
    }

    /// Number of queries served so far. Lets tests assert that
    /// exclude_failed fetches never consult the store.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocalFailureStore for NullFailureStore {
    async fn query(
        &self,
        account: &AccountId,
        types: &BTreeSet<TxType>,
        ledger_index_min: Option<LedgerIndex>,
        ledger_index_max: Option<LedgerIndex>,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);

        if self.fail {
            return Err(StoreError::Unavailable("injected failure".into()));
        }

        Ok(self
            .records
            .iter()
            .filter(|record| {
                if record.account != *account {
                    return false;
                }
                if !types.is_empty() && !types.contains(&record.tx_type) {
                    return false;
                }
                match record.ledger_index {
                    Some(ledger) => {
                        ledger_index_min.is_none_or(|min| ledger >= min)
                            && ledger_index_max.is_none_or(|max| ledger <= max)
                    }
                    None => ledger_index_min.is_none() && ledger_index_max.is_none(),
                }
            })
            .cloned()
            .collect())
    }
}
