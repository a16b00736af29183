//! Neighbor resolution — the transactions immediately before and after a
//! given one, for building notification feeds.

use serde::{Deserialize, Serialize};

use crate::engine::HistoryEngine;
use crate::error::HistoryError;
use crate::query::{QuerySpec, MAX_PAGE_SIZE};
use crate::{merge, sort};
use ledgerfeed_source::{LocalFailureStore, TransactionSource};
use ledgerfeed_types::{ClientResourceId, Origin, TransactionRecord, TxHash};

/// How a neighbor is identified to the caller: by network hash for
/// remote-confirmed transactions, by idempotency key for local-only ones.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NeighborId {
    Hash(TxHash),
    ClientResource(ClientResourceId),
}

impl NeighborId {
    fn for_record(record: &TransactionRecord) -> Option<NeighborId> {
        match record.origin {
            Origin::Remote => record.hash.map(NeighborId::Hash),
            Origin::Local => record
                .client_resource_id
                .clone()
                .map(NeighborId::ClientResource),
        }
    }
}

/// The transactions adjacent to a base transaction in its account's
/// merged, ascending history. `None` at either end of the history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub previous: Option<NeighborId>,
    pub next: Option<NeighborId>,
}

impl<S, F> HistoryEngine<S, F>
where
    S: TransactionSource,
    F: LocalFailureStore,
{
    /// Locate the transactions immediately before and after `base` in its
    /// account's history.
    ///
    /// Fetches a bounded window around the base's ledger: everything in
    /// that ledger is counted first, then one descending window ending at
    /// it and one ascending window starting at it, each one larger than
    /// the count in case the ledger holds more same-account transactions
    /// than anticipated. The base must already be validated (bound to a
    /// ledger); otherwise there is no position to navigate from.
    pub async fn resolve_neighbors(
        &self,
        base: &TransactionRecord,
    ) -> Result<Neighbors, HistoryError> {
        let ledger = base.ledger_index.ok_or_else(|| {
            HistoryError::NotFound(format!(
                "transaction for account {} is not bound to a validated ledger",
                base.account
            ))
        })?;

        let in_ledger = {
            let mut spec = unfiltered_spec(base);
            spec.ledger_index_min = Some(ledger);
            spec.ledger_index_max = Some(ledger);
            self.fetch_page(&spec).await?.records.len()
        };
        let window = in_ledger + 1;

        // Candidates at or before the base.
        let before = {
            let mut spec = unfiltered_spec(base);
            spec.ledger_index_max = Some(ledger);
            spec.descending = true;
            spec.max = window;
            spec.min = window;
            self.fetch_page(&spec).await?.records
        };
        // Candidates at or after the base.
        let after = {
            let mut spec = unfiltered_spec(base);
            spec.ledger_index_min = Some(ledger);
            spec.max = window;
            spec.min = window;
            self.fetch_page(&spec).await?.records
        };

        // The before window arrived newest-first; restore ascending order,
        // otherwise equal-key ties survive the stable sort reversed and the
        // base lands at the wrong index.
        let mut candidates = before;
        candidates.reverse();
        candidates.extend(after);
        candidates.push(base.clone());
        let mut candidates = merge::dedup_accumulated(candidates);
        sort::sort_records(&mut candidates, false);

        let index = candidates
            .iter()
            .position(|record| record.same_identity(base))
            .ok_or_else(|| {
                tracing::warn!(
                    account = %base.account,
                    ledger = %ledger,
                    window,
                    "base transaction missing from its own neighbor window"
                );
                HistoryError::InconsistentHistory(format!(
                    "transaction in ledger {ledger} not found in its neighbor window"
                ))
            })?;

        let previous = index
            .checked_sub(1)
            .and_then(|i| NeighborId::for_record(&candidates[i]));
        let next = candidates
            .get(index + 1)
            .and_then(NeighborId::for_record);

        Ok(Neighbors { previous, next })
    }
}

/// A spec covering every transaction of the base's account — neighbor
/// windows must see failed and local records too. Page bounds are pinned
/// to the hard cap: unbounded within the windowed ledger range.
fn unfiltered_spec(base: &TransactionRecord) -> QuerySpec {
    let mut spec = QuerySpec::for_account(base.account.clone());
    spec.max = MAX_PAGE_SIZE;
    spec.min = MAX_PAGE_SIZE;
    spec
}
