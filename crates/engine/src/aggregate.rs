use std::collections::BTreeMap;

use ordered_float::OrderedFloat;

use crate::model::{InterestKey, OwnershipRecord, TractInterest};

/// Collapse per-owner stakes into one row per (tract, acres, ownership,
/// entity) combination, summing shares.
///
/// Multiple owners of the same category on the same tract merge into one
/// row; distinct categories on the same tract stay separate, so a tract can
/// still carry both a trust row and a fee row.
pub fn combine_owners(records: &[OwnershipRecord]) -> Vec<TractInterest> {
    let mut groups: BTreeMap<InterestKey, (f64, usize)> = BTreeMap::new();

    for record in records {
        let key = InterestKey {
            tract_ref: record.tract_ref.clone(),
            acres: OrderedFloat(record.acres),
            ownership_type: record.ownership_type.clone(),
            entity_type: record.entity_type.clone(),
        };
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += record.share;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(key, (share, owner_count))| TractInterest {
            tract_ref: key.tract_ref,
            acres: key.acres.into_inner(),
            ownership_type: key.ownership_type,
            entity_type: key.entity_type,
            share,
            owner_count,
        })
        .collect()
}
