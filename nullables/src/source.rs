//! Nullable remote transaction source.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use ledgerfeed_source::{
    Marker, SourceError, SourcePage, SourceQuery, TransactionSource,
};
use ledgerfeed_types::TransactionRecord;

/// An in-memory remote source serving a scripted account history.
///
/// Seeded with validated records, it honors the full query contract:
/// ledger-range bounds, direction, per-page limits and continuation
/// markers (encoded as decimal offsets into the ordered result set — the
/// engine must treat them as opaque either way). Thread-safe for use with
/// tokio's multi-threaded runtime.
pub struct NullTransactionSource {
    history: Vec<TransactionRecord>,
    /// Upper bound on records per page, below any requested limit. Lets
    /// tests force the engine through continuation steps.
    page_size: usize,
    fail: bool,
    queries: AtomicUsize,
    last_query: Mutex<Option<SourceQuery>>,
}

impl NullTransactionSource {
    /// A source holding the given validated history.
    pub fn new(history: Vec<TransactionRecord>) -> Self {
        Self {
            history,
            page_size: usize::MAX,
            fail: false,
            queries: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Cap every page at `page_size` records regardless of the requested
    /// limit, forcing pagination.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// A source whose every query fails.
    pub fn failing() -> Self {
        Self {
            history: Vec::new(),
            page_size: usize::MAX,
            fail: true,
            queries: AtomicUsize::new(0),
            last_query: Mutex::new(None),
        }
    }

    /// Number of queries served so far.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    /// The most recent query received, for asserting on request shaping.
    pub fn last_query(&self) -> Option<SourceQuery> {
        self.last_query.lock().unwrap().clone()
    }
}

#[async_trait]
impl TransactionSource for NullTransactionSource {
    async fn query(&self, query: SourceQuery) -> Result<SourcePage, SourceError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        *self.last_query.lock().unwrap() = Some(query.clone());

        if self.fail {
            return Err(SourceError::Network("injected failure".into()));
        }

        let mut matching: Vec<TransactionRecord> = self
            .history
            .iter()
            .filter(|record| {
                if record.account != query.account {
                    return false;
                }
                let Some(ledger) = record.ledger_index else {
                    return false;
                };
                if let Some(min) = query.ledger_index_min {
                    if ledger < min {
                        return false;
                    }
                }
                if let Some(max) = query.ledger_index_max {
                    if ledger > max {
                        return false;
                    }
                }
                true
            })
            .cloned()
            .collect();

        matching.sort_by_key(|record| (record.ledger_index, record.timestamp));
        if !query.forward {
            matching.reverse();
        }

        let start = match &query.marker {
            Some(marker) => marker
                .as_str()
                .parse::<usize>()
                .map_err(|_| SourceError::Malformed(format!("bad marker: {marker}")))?,
            None => 0,
        };
        let take = query.limit.min(self.page_size);
        let end = (start + take).min(matching.len());
        let transactions = matching[start.min(matching.len())..end].to_vec();
        let next_marker = if end < matching.len() {
            Some(Marker::new(end.to_string()))
        } else {
            None
        };

        Ok(SourcePage {
            transactions,
            next_marker,
        })
    }
}
