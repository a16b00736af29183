//! Abstract transaction-source traits for the ledgerfeed engine.
//!
//! The history engine reconciles two heterogeneous, partial sources: the
//! authoritative cursor-paginated remote ledger query, and a local store of
//! failed submissions that never reached a validated ledger. Both are
//! consumed through the traits defined here; adapters (RPC clients, SQL
//! stores, in-memory nullables for testing) implement them.

pub mod error;
pub mod local;
pub mod marker;
pub mod remote;

pub use error::{SourceError, StoreError};
pub use local::LocalFailureStore;
pub use marker::Marker;
pub use remote::{SourcePage, SourceQuery, TransactionSource};
