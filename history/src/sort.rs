//! Total order over transaction records.
//!
//! Key: `(ledger_index, timestamp)`. Records not yet bound to a ledger
//! sort after every validated one (missing index treated as infinity),
//! ordered by timestamp among themselves. Equal keys keep their relative
//! input order — the sort is stable in both directions, which is why a
//! descending sort inverts the comparator instead of reversing afterwards.

use std::cmp::Ordering;

use ledgerfeed_types::TransactionRecord;

fn sort_key(record: &TransactionRecord) -> (u64, u64) {
    let ledger = record
        .ledger_index
        .map_or(u64::MAX, |index| index.as_u64());
    (ledger, record.timestamp.as_secs())
}

/// Compare two records by `(ledger_index, timestamp)`, ascending.
pub fn compare(a: &TransactionRecord, b: &TransactionRecord) -> Ordering {
    sort_key(a).cmp(&sort_key(b))
}

/// Stable in-place sort; O(n log n) over one page's working set.
pub fn sort_records(records: &mut [TransactionRecord], descending: bool) {
    records.sort_by(|a, b| {
        let ordering = compare(a, b);
        if descending {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
