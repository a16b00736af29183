//! Pagination engine — orchestrates fetch → merge → filter → sort → slice.

use crate::error::HistoryError;
use crate::query::{Page, QuerySpec, DEFAULT_PAGE_SIZE};
use crate::{filter, merge, sort};
use ledgerfeed_source::{LocalFailureStore, SourceQuery, TransactionSource};
use ledgerfeed_types::{TransactionRecord, TxType};

/// Over-fetch factor applied to the remote limit when filtering by a type
/// subset, to compensate for post-filter attrition. An efficiency
/// heuristic, not a contract; tune freely.
const OVERFETCH_MULTIPLIER: usize = 2;

/// Reconciles the remote ledger history and the local failure store into
/// ordered, deduplicated, bounded pages.
///
/// Stateless apart from the injected collaborators; every call owns its
/// own accumulator, so independent requests run fully in parallel.
pub struct HistoryEngine<S, F> {
    source: S,
    failures: F,
}

impl<S, F> HistoryEngine<S, F>
where
    S: TransactionSource,
    F: LocalFailureStore,
{
    pub fn new(source: S, failures: F) -> Self {
        Self { source, failures }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn failures(&self) -> &F {
        &self.failures
    }

    /// Fetch one page of account history.
    ///
    /// Chases the remote source's continuation marker sequentially until
    /// at least `spec.min` records survive merge/filter/sort, or the
    /// source is exhausted — in which case whatever accumulated is
    /// returned, even below `min`. A failure from either collaborator
    /// aborts the whole fetch; no partial results on error.
    pub async fn fetch_page(&self, spec: &QuerySpec) -> Result<Page, HistoryError> {
        let predicates = filter::predicates_for(spec);
        let limit = remote_limit(spec);
        let page_cap = spec.effective_max();

        // Continuation state threaded through each step: the accumulator,
        // the remaining offset and the current marker. Owned exclusively
        // by this call, never shared.
        let mut accumulated: Vec<TransactionRecord> = Vec::new();
        let mut offset = spec.offset;
        let mut marker = spec.marker.clone();
        let mut step = 0usize;

        loop {
            let remote = async {
                self.source
                    .query(SourceQuery {
                        account: spec.account.clone(),
                        ledger_index_min: spec.ledger_index_min,
                        ledger_index_max: spec.ledger_index_max,
                        limit,
                        forward: !spec.descending,
                        marker: marker.clone(),
                    })
                    .await
                    .map_err(HistoryError::from)
            };
            // Failed locals can never satisfy an exclude_failed query, so
            // the store is not consulted at all in that case.
            let local = async {
                if spec.exclude_failed {
                    Ok(Vec::new())
                } else {
                    self.failures
                        .query(
                            &spec.account,
                            &spec.types,
                            spec.ledger_index_min,
                            spec.ledger_index_max,
                        )
                        .await
                        .map_err(HistoryError::from)
                }
            };
            let (remote_page, local_records) = tokio::try_join!(remote, local)?;
            marker = remote_page.next_marker;

            let combined = merge::merge_sources(remote_page.transactions, local_records);
            let fresh = filter::apply(combined, &predicates);

            // The local store is re-queried on every step, so dedup the
            // prepended whole, then sort it: a record kept from an earlier
            // step (a local failure, say) must land at its position in the
            // full accumulation, not where its step left it. The sort is
            // stable, so records already in order stay put.
            let mut records = std::mem::take(&mut accumulated);
            records.extend(fresh);
            let mut records = merge::dedup_accumulated(records);
            sort::sort_records(&mut records, spec.descending);

            if offset > 0 {
                let dropped = offset.min(records.len());
                records.drain(..dropped);
                offset -= dropped;
            }
            records.truncate(page_cap);

            tracing::debug!(
                step,
                accumulated = records.len(),
                exhausted = marker.is_none(),
                "history page continuation step"
            );

            if records.len() >= spec.min || marker.is_none() {
                return Ok(Page { records, marker });
            }
            accumulated = records;
            step += 1;
        }
    }
}

/// Derive the per-step limit for the remote source call.
///
/// Filtering by a strict non-empty subset of the type universe thins the
/// raw page; over-fetch so fewer continuation round-trips are needed.
fn remote_limit(spec: &QuerySpec) -> usize {
    let strict_subset = !spec.types.is_empty() && spec.types.len() < TxType::ALL.len();
    if strict_subset {
        OVERFETCH_MULTIPLIER * spec.effective_max().max(DEFAULT_PAGE_SIZE)
    } else {
        spec.effective_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerfeed_types::AccountId;

    #[test]
    fn test_remote_limit_without_type_filter() {
        let spec = QuerySpec::for_account(AccountId::new("rAlice"));
        assert_eq!(remote_limit(&spec), spec.effective_max());
    }

    #[test]
    fn test_remote_limit_overfetches_for_type_subset() {
        let mut spec = QuerySpec::for_account(AccountId::new("rAlice"));
        spec.types = [TxType::Payment].into_iter().collect();
        spec.max = 10;
        assert_eq!(remote_limit(&spec), OVERFETCH_MULTIPLIER * DEFAULT_PAGE_SIZE);

        spec.max = 400;
        assert_eq!(remote_limit(&spec), OVERFETCH_MULTIPLIER * 400);
    }

    #[test]
    fn test_remote_limit_full_universe_is_not_a_subset() {
        let mut spec = QuerySpec::for_account(AccountId::new("rAlice"));
        spec.types = TxType::ALL.into_iter().collect();
        assert_eq!(remote_limit(&spec), spec.effective_max());
    }
}
