//! Local failure store trait.

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::StoreError;
use ledgerfeed_types::{AccountId, LedgerIndex, TransactionRecord, TxType};

/// Query over locally recorded transactions that failed and are not
/// expected to ever appear in the remote ledger history.
///
/// Unlike the remote source this query is not paginated; implementations
/// must keep results cheap and bounded by the ledger-index range. Every
/// returned record is local-origin and carries a `client_resource_id`; it
/// may lack a hash if the network never accepted it.
#[async_trait]
pub trait LocalFailureStore: Send + Sync {
    async fn query(
        &self,
        account: &AccountId,
        types: &BTreeSet<TxType>,
        ledger_index_min: Option<LedgerIndex>,
        ledger_index_max: Option<LedgerIndex>,
    ) -> Result<Vec<TransactionRecord>, StoreError>;
}
