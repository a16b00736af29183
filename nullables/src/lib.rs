//! Nullable source implementations for deterministic testing.
//!
//! The history engine's two collaborators (remote ledger query, local
//! failure store) are abstracted behind traits. This crate provides
//! in-memory implementations that:
//! - serve a scripted history through the real trait contracts
//!   (ledger-range bounds, direction, limits, continuation markers)
//! - can be told to fail, for abort-path testing
//! - count their queries, so tests can assert a collaborator was skipped
//!
//! Usage: swap real adapters for nullables in tests.

pub mod source;
pub mod store;

pub use source::NullTransactionSource;
pub use store::NullFailureStore;
