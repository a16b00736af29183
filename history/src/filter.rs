//! Composable record predicates.
//!
//! Each active `QuerySpec` filter becomes one tagged predicate; predicates
//! are AND-combined in a fixed order. New filters slot in here without
//! touching merge or sort logic.

use std::collections::BTreeSet;

use crate::query::{Direction, QuerySpec};
use ledgerfeed_types::{AccountId, TransactionRecord, TxType};

/// A single filter predicate, tagged by kind.
#[derive(Clone, Debug)]
pub enum Predicate {
    /// Keep only successful, validated transactions.
    ExcludeFailed,
    /// Keep only transactions of these types.
    TypeSubset(BTreeSet<TxType>),
    /// Keep only transactions with this account on either side.
    Counterparty(AccountId),
    /// Keep only transactions flowing a given way relative to the
    /// perspective account.
    Direction {
        direction: Direction,
        perspective: AccountId,
    },
}

impl Predicate {
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        match self {
            Predicate::ExcludeFailed => record.result.is_success() && record.validated,
            Predicate::TypeSubset(types) => types.contains(&record.tx_type),
            Predicate::Counterparty(counterparty) => {
                record.account == *counterparty
                    || record.destination.as_ref() == Some(counterparty)
            }
            Predicate::Direction {
                direction,
                perspective,
            } => match direction {
                Direction::Outgoing => record.account == *perspective,
                Direction::Incoming => {
                    record.destination.as_ref() == Some(perspective)
                        && record.account != *perspective
                }
            },
        }
    }
}

/// Build the ordered predicate list for a query spec.
pub fn predicates_for(spec: &QuerySpec) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if spec.exclude_failed {
        predicates.push(Predicate::ExcludeFailed);
    }
    if !spec.types.is_empty() {
        predicates.push(Predicate::TypeSubset(spec.types.clone()));
    }
    if let Some(counterparty) = &spec.counterparty {
        predicates.push(Predicate::Counterparty(counterparty.clone()));
    }
    if let Some(direction) = spec.direction {
        predicates.push(Predicate::Direction {
            direction,
            perspective: spec.account.clone(),
        });
    }
    predicates
}

/// Keep the records matching every predicate. Pure; preserves input order.
pub fn apply(
    records: Vec<TransactionRecord>,
    predicates: &[Predicate],
) -> Vec<TransactionRecord> {
    records
        .into_iter()
        .filter(|record| predicates.iter().all(|p| p.matches(record)))
        .collect()
}
