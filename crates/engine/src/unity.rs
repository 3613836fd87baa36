use std::collections::BTreeMap;

use crate::model::{OutOfUnityTract, OwnershipRecord, UnityReport};

/// Check that every tract's ownership shares sum to 1.0.
///
/// TAAMS guarantees exact unity; drift beyond floating-point summation is a
/// pull defect, not noise to absorb. Shares are summed per tract and rounded
/// to 6 decimal places before the comparison, and the rounded total must be
/// exactly 1.0 — there is no wider epsilon band.
///
/// Pure check: the record set is never mutated or filtered.
pub fn check_unity(records: &[OwnershipRecord]) -> UnityReport {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for record in records {
        *totals.entry(record.tract_ref.as_str()).or_insert(0.0) += record.share;
    }

    let violations = totals
        .into_iter()
        .filter_map(|(tract_ref, total)| {
            let share_total = round6(total);
            (share_total != 1.0).then(|| OutOfUnityTract {
                tract_ref: tract_ref.to_string(),
                share_total,
            })
        })
        .collect();

    UnityReport { violations }
}

pub(crate) fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
