//! Merger/Deduper — combines remote- and local-origin records into one set
//! unique by hash.

use std::collections::{HashMap, HashSet};

use ledgerfeed_types::{ClientResourceId, TransactionRecord, TxHash};

/// Merge remote- and local-origin records, unique by hash.
///
/// When both sides carry the same hash the remote copy wins: it has the
/// authoritative ledger metadata. Only the local record's
/// `client_resource_id` survives into the merged record. Any disagreement
/// on result code or validated flag resolves silently in the remote copy's
/// favor (assumption carried over from the source system).
///
/// Records with no hash were never accepted by the network, cannot collide
/// with remote history, and always survive. No ordering guarantee.
pub fn merge_sources(
    remote: Vec<TransactionRecord>,
    local: Vec<TransactionRecord>,
) -> Vec<TransactionRecord> {
    let mut merged = remote;
    let mut by_hash: HashMap<TxHash, usize> = merged
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.hash.map(|h| (h, i)))
        .collect();

    for record in local {
        match record.hash.and_then(|h| by_hash.get(&h).copied()) {
            Some(i) => {
                if merged[i].client_resource_id.is_none() {
                    merged[i].client_resource_id = record.client_resource_id;
                }
            }
            None => {
                if let Some(h) = record.hash {
                    by_hash.insert(h, merged.len());
                }
                merged.push(record);
            }
        }
    }

    merged
}

/// Drop repeat occurrences of a record, keeping the first.
///
/// Identity is the hash, falling back to the client resource id for
/// hashless records; a record with neither is always kept. Used when a
/// previous continuation step's accumulation is prepended to a freshly
/// merged batch — the local store is re-queried on every step, so its
/// records would otherwise appear once per step.
pub fn dedup_accumulated(records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
    let mut seen_hashes: HashSet<TxHash> = HashSet::new();
    let mut seen_ids: HashSet<ClientResourceId> = HashSet::new();

    records
        .into_iter()
        .filter(|record| match record.hash {
            Some(h) => seen_hashes.insert(h),
            None => match &record.client_resource_id {
                Some(id) => seen_ids.insert(id.clone()),
                None => true,
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerfeed_types::{
        AccountId, LedgerIndex, Origin, ResultCode, Timestamp, TxType,
    };

    fn remote_record(hash: u8) -> TransactionRecord {
        TransactionRecord {
            hash: Some(TxHash::new([hash; 32])),
            account: AccountId::new("rAlice"),
            destination: Some(AccountId::new("rBob")),
            tx_type: TxType::Payment,
            ledger_index: Some(LedgerIndex::new(10)),
            timestamp: Timestamp::new(100),
            result: ResultCode::Success,
            validated: true,
            origin: Origin::Remote,
            client_resource_id: None,
        }
    }

    fn local_record(hash: Option<u8>, cri: &str) -> TransactionRecord {
        TransactionRecord {
            hash: hash.map(|b| TxHash::new([b; 32])),
            account: AccountId::new("rAlice"),
            destination: Some(AccountId::new("rBob")),
            tx_type: TxType::Payment,
            ledger_index: None,
            timestamp: Timestamp::new(90),
            result: ResultCode::Failed("tecPATH_DRY".into()),
            validated: false,
            origin: Origin::Local,
            client_resource_id: Some(ClientResourceId::from(cri)),
        }
    }

    #[test]
    fn test_remote_wins_on_shared_hash() {
        let merged = merge_sources(vec![remote_record(1)], vec![local_record(Some(1), "cr1")]);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].origin, Origin::Remote);
        assert!(merged[0].result.is_success());
        // idempotency key is inherited from the discarded local copy
        assert_eq!(
            merged[0].client_resource_id,
            Some(ClientResourceId::from("cr1"))
        );
    }

    #[test]
    fn test_hashless_local_records_survive() {
        let merged = merge_sources(vec![remote_record(1)], vec![local_record(None, "cr1")]);
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_disjoint_hashes_all_survive() {
        let merged = merge_sources(
            vec![remote_record(1), remote_record(2)],
            vec![local_record(Some(3), "cr3")],
        );
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn test_dedup_accumulated_keeps_first_occurrence() {
        let records = vec![
            remote_record(1),
            local_record(None, "cr1"),
            remote_record(1),
            local_record(None, "cr1"),
        ];
        let deduped = dedup_accumulated(records);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_dedup_accumulated_keeps_identityless_records() {
        let mut record = local_record(None, "cr1");
        record.client_resource_id = None;
        let deduped = dedup_accumulated(vec![record.clone(), record]);
        assert_eq!(deduped.len(), 2);
    }
}
