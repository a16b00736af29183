//! Property tests for the pure kernels: merge/dedup and the stable sorter.

use proptest::prelude::*;
use std::collections::HashSet;

use ledgerfeed_history::{merge, sort};
use ledgerfeed_types::{
    AccountId, ClientResourceId, LedgerIndex, Origin, ResultCode, Timestamp, TransactionRecord,
    TxHash, TxType,
};

fn record(
    hash: Option<u8>,
    ledger: Option<u64>,
    ts: u64,
    origin: Origin,
    tag: usize,
) -> TransactionRecord {
    TransactionRecord {
        hash: hash.map(|b| TxHash::new([b; 32])),
        account: AccountId::new("rAlice"),
        destination: None,
        tx_type: TxType::Payment,
        ledger_index: ledger.map(LedgerIndex::new),
        timestamp: Timestamp::new(ts),
        result: ResultCode::Success,
        validated: ledger.is_some(),
        origin,
        client_resource_id: Some(ClientResourceId::new(format!("tag-{tag}"))),
    }
}

fn remote_batch(hashes: Vec<u8>) -> Vec<TransactionRecord> {
    hashes
        .into_iter()
        .enumerate()
        .map(|(i, h)| record(Some(h), Some(10), 100, Origin::Remote, i))
        .collect()
}

fn local_batch(hashes: Vec<Option<u8>>) -> Vec<TransactionRecord> {
    hashes
        .into_iter()
        .enumerate()
        .map(|(i, h)| record(h, None, 90, Origin::Local, 1000 + i))
        .collect()
}

proptest! {
    /// The merged output contains at most one record per hash.
    #[test]
    fn merge_output_unique_by_hash(
        remote in prop::collection::vec(0u8..16, 0..12),
        local in prop::collection::vec(prop::option::of(0u8..16), 0..12),
    ) {
        let merged = merge::merge_sources(remote_batch(remote), local_batch(local));
        let mut seen = HashSet::new();
        for record in &merged {
            if let Some(h) = record.hash {
                prop_assert!(seen.insert(h), "duplicate hash in merged output");
            }
        }
    }

    /// A hash present in both inputs always resolves to the remote copy.
    #[test]
    fn merge_prefers_remote_copy(
        shared in 0u8..16,
        remote_extra in prop::collection::vec(16u8..32, 0..6),
        local_extra in prop::collection::vec(prop::option::of(32u8..48), 0..6),
    ) {
        let mut remote = remote_batch(remote_extra);
        remote.push(record(Some(shared), Some(10), 100, Origin::Remote, 99));
        let mut local = local_batch(local_extra);
        local.push(record(Some(shared), None, 90, Origin::Local, 999));

        let merged = merge::merge_sources(remote, local);
        let survivor = merged
            .iter()
            .find(|r| r.hash == Some(TxHash::new([shared; 32])))
            .expect("shared hash must survive");
        prop_assert_eq!(survivor.origin, Origin::Remote);
    }

    /// Hashless local records always survive the merge.
    #[test]
    fn merge_keeps_hashless_locals(
        remote in prop::collection::vec(0u8..16, 0..12),
        hashless in 1usize..8,
    ) {
        let local = local_batch(vec![None; hashless]);
        let merged = merge::merge_sources(remote_batch(remote), local);
        let survivors = merged.iter().filter(|r| r.hash.is_none()).count();
        prop_assert_eq!(survivors, hashless);
    }

    /// Sorting is ordered by (ledger, timestamp) and stable on equal keys,
    /// ascending and descending alike.
    #[test]
    fn sort_is_ordered_and_stable(
        keys in prop::collection::vec((prop::option::of(0u64..3), 0u64..3), 0..24),
        descending in any::<bool>(),
    ) {
        let mut records: Vec<TransactionRecord> = keys
            .into_iter()
            .enumerate()
            .map(|(i, (ledger, ts))| record(None, ledger, ts, Origin::Remote, i))
            .collect();
        sort::sort_records(&mut records, descending);

        for pair in records.windows(2) {
            let ordering = sort::compare(&pair[0], &pair[1]);
            if descending {
                prop_assert!(ordering != std::cmp::Ordering::Less);
            } else {
                prop_assert!(ordering != std::cmp::Ordering::Greater);
            }
            // equal keys keep their original input order (tags ascend)
            if ordering == std::cmp::Ordering::Equal {
                let a = pair[0].client_resource_id.as_ref().unwrap().as_str().to_owned();
                let b = pair[1].client_resource_id.as_ref().unwrap().as_str().to_owned();
                let a: usize = a.trim_start_matches("tag-").parse().unwrap();
                let b: usize = b.trim_start_matches("tag-").parse().unwrap();
                prop_assert!(a < b, "stability violated: {} before {}", a, b);
            }
        }
    }

    /// Dedup keeps the first occurrence and never grows the input.
    #[test]
    fn dedup_keeps_first_occurrence(
        hashes in prop::collection::vec(0u8..8, 0..24),
    ) {
        let records: Vec<TransactionRecord> = hashes
            .iter()
            .enumerate()
            .map(|(i, &h)| record(Some(h), Some(10), 100, Origin::Remote, i))
            .collect();
        let deduped = merge::dedup_accumulated(records.clone());

        let distinct: HashSet<u8> = hashes.iter().copied().collect();
        prop_assert_eq!(deduped.len(), distinct.len());

        // the survivor for each hash is its earliest occurrence
        for record in &deduped {
            let h = record.hash.unwrap();
            let first = records.iter().find(|r| r.hash == Some(h)).unwrap();
            prop_assert_eq!(record.client_resource_id.clone(), first.client_resource_id.clone());
        }
    }
}
