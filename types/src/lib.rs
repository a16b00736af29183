//! Fundamental types for the ledgerfeed workspace.
//!
//! This crate defines the value types shared across every other crate:
//! account identifiers, transaction hashes, ledger indexes, timestamps,
//! and the transaction record that the history engine operates on.

pub mod account;
pub mod hash;
pub mod ledger;
pub mod record;
pub mod resource;
pub mod time;

pub use account::AccountId;
pub use hash::TxHash;
pub use ledger::LedgerIndex;
pub use record::{Origin, ResultCode, TransactionRecord, TxType};
pub use resource::ClientResourceId;
pub use time::Timestamp;
