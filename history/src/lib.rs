//! Account-history engine: one ordered, deduplicated, filtered feed over
//! two heterogeneous partial sources.
//!
//! The remote ledger query is authoritative but cursor-paginated; the local
//! failure store holds only transactions that failed and were never written
//! to a validated ledger. [`HistoryEngine`] reconciles both into bounded
//! pages (fetch → merge → filter → sort → slice, continuing until a minimum
//! count is met or the remote source is exhausted) and resolves the
//! transactions immediately before/after a given one for notification
//! feeds.

pub mod engine;
pub mod error;
pub mod filter;
pub mod merge;
pub mod neighbors;
pub mod query;
pub mod sort;

pub use engine::HistoryEngine;
pub use error::HistoryError;
pub use neighbors::{NeighborId, Neighbors};
pub use query::{Direction, Page, QuerySpec, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
