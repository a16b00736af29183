//! The transaction record the history engine operates on.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AccountId, ClientResourceId, LedgerIndex, Timestamp, TxHash};

/// The kind of a ledger transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TxType {
    Payment,
    OfferCreate,
    OfferCancel,
    TrustSet,
    AccountSet,
    EscrowCreate,
}

impl TxType {
    /// The full universe of transaction types. Filtering by a strict
    /// subset of this triggers the engine's over-fetch heuristic.
    pub const ALL: [TxType; 6] = [
        TxType::Payment,
        TxType::OfferCreate,
        TxType::OfferCancel,
        TxType::TrustSet,
        TxType::AccountSet,
        TxType::EscrowCreate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Payment => "payment",
            TxType::OfferCreate => "offer_create",
            TxType::OfferCancel => "offer_cancel",
            TxType::TrustSet => "trust_set",
            TxType::AccountSet => "account_set",
            TxType::EscrowCreate => "escrow_create",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The engine-level result of a transaction.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultCode {
    /// Applied successfully to a ledger.
    Success,
    /// Rejected; carries the network's result code string.
    Failed(String),
}

impl ResultCode {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::Failed(code) => write!(f, "failed({code})"),
        }
    }
}

/// Where a record was sourced from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// The authoritative remote ledger history.
    Remote,
    /// The local record of a failed, never-validated submission.
    Local,
}

/// A single account-history transaction, as seen by the history engine.
///
/// Identity for dedup purposes is `hash` when present. A record with no
/// hash was never accepted by the network and is only reachable through
/// the local failure store, keyed by its `client_resource_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub hash: Option<TxHash>,
    pub account: AccountId,
    pub destination: Option<AccountId>,
    pub tx_type: TxType,
    /// `None` until the transaction lands in a validated ledger.
    pub ledger_index: Option<LedgerIndex>,
    pub timestamp: Timestamp,
    pub result: ResultCode,
    pub validated: bool,
    pub origin: Origin,
    /// Present for local-origin records.
    pub client_resource_id: Option<ClientResourceId>,
}

impl TransactionRecord {
    /// Whether two records refer to the same submission: same hash, or
    /// same client resource id when either side has no hash.
    pub fn same_identity(&self, other: &TransactionRecord) -> bool {
        match (self.hash, other.hash) {
            (Some(a), Some(b)) => a == b,
            _ => match (&self.client_resource_id, &other.client_resource_id) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(hash: Option<u8>, cri: Option<&str>) -> TransactionRecord {
        TransactionRecord {
            hash: hash.map(|b| TxHash::new([b; 32])),
            account: AccountId::new("rAlice"),
            destination: None,
            tx_type: TxType::Payment,
            ledger_index: Some(LedgerIndex::new(1)),
            timestamp: Timestamp::new(100),
            result: ResultCode::Success,
            validated: true,
            origin: Origin::Remote,
            client_resource_id: cri.map(ClientResourceId::from),
        }
    }

    #[test]
    fn test_same_identity_by_hash() {
        assert!(record(Some(1), None).same_identity(&record(Some(1), None)));
        assert!(!record(Some(1), None).same_identity(&record(Some(2), None)));
    }

    #[test]
    fn test_same_identity_falls_back_to_resource_id() {
        assert!(record(None, Some("cr1")).same_identity(&record(Some(1), Some("cr1"))));
        assert!(!record(None, Some("cr1")).same_identity(&record(None, Some("cr2"))));
    }

    #[test]
    fn test_no_identity_without_hash_or_resource_id() {
        assert!(!record(None, None).same_identity(&record(None, None)));
    }
}
