//! Shared utilities for the ledgerfeed workspace.

pub mod logging;

pub use logging::init_tracing;
