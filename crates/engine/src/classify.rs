use std::collections::{BTreeMap, BTreeSet};

use ordered_float::OrderedFloat;

use crate::aggregate::combine_owners;
use crate::config::CategoryConfig;
use crate::model::{
    CategorizedTracts, OwnershipCategory, OwnershipRecord, TenureClass, TractInterest, TrustTract,
};

/// Tract references holding at least one combined tribal-entity stake that
/// covers the whole interest.
///
/// Candidacy is by tract reference, not row identity: the candidate rows
/// come from the owner aggregation, the final trust rows from a coarser
/// grouping, so the two sets of rows never line up directly.
fn tribal_candidates<'a>(
    combined: &'a [TractInterest],
    categories: &CategoryConfig,
) -> BTreeSet<&'a str> {
    combined
        .iter()
        .filter(|row| categories.is_tribal_entity(&row.entity_type) && row.share == 1.0)
        .map(|row| row.tract_ref.as_str())
        .collect()
}

/// Partition an extract into trust rows annotated tribal or allotted.
///
/// Trust rows are grouped by (tract, acres, ownership label) because a tract
/// can hold trust interest through several entity types that must merge into
/// one trust total, and each row is tagged with its tenure class in the same
/// pass. A trust tract with no whole tribal stake is allotted by default;
/// tracts matching no recognized ownership category are excluded outright,
/// which is not an error condition.
pub fn categorize(records: &[OwnershipRecord], categories: &CategoryConfig) -> CategorizedTracts {
    let combined = combine_owners(records);
    let candidates = tribal_candidates(&combined, categories);

    let mut trust_groups: BTreeMap<(String, OrderedFloat<f64>, String), f64> = BTreeMap::new();
    for row in &combined {
        if categories.ownership_category(&row.ownership_type) != Some(OwnershipCategory::Trust) {
            continue;
        }
        // Typed replacement for the missing-value drop: a non-finite acres
        // or share cannot participate in any total.
        if !row.acres.is_finite() || !row.share.is_finite() {
            continue;
        }
        let key = (
            row.tract_ref.clone(),
            OrderedFloat(row.acres),
            row.ownership_type.clone(),
        );
        *trust_groups.entry(key).or_insert(0.0) += row.share;
    }

    let trust = trust_groups
        .into_iter()
        .map(|((tract_ref, acres, ownership_type), share)| {
            let class = if candidates.contains(tract_ref.as_str()) {
                TenureClass::Tribal
            } else {
                TenureClass::Allotted
            };
            TrustTract {
                tract_ref,
                acres: acres.into_inner(),
                ownership_type,
                share,
                class,
            }
        })
        .collect();

    CategorizedTracts { trust }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn rec(tract_ref: &str, acres: f64, entity: &str, share: f64, ownership: &str) -> OwnershipRecord {
        OwnershipRecord {
            tract_ref: tract_ref.into(),
            acres,
            entity_type: entity.into(),
            share,
            ownership_type: ownership.into(),
        }
    }

    fn categories() -> CategoryConfig {
        CategoryConfig::default()
    }

    #[test]
    fn wholly_tribal_trust_tract_is_tribal() {
        let records = vec![rec("1001", 100.0, "TRBE", 1.0, "T-Trust")];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].class, TenureClass::Tribal);
        assert_eq!(tracts.trust[0].acres, 100.0);
    }

    #[test]
    fn individual_trust_tract_is_allotted() {
        let records = vec![
            rec("1002", 50.0, "INDV", 0.5, "Trust"),
            rec("1002", 50.0, "INDV", 0.5, "Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].class, TenureClass::Allotted);
        assert_eq!(tracts.trust[0].share, 1.0);
    }

    #[test]
    fn partial_tribal_stake_is_allotted() {
        // Tribal entity holds 0.6 — not the whole interest, so no candidacy.
        let records = vec![
            rec("1003", 40.0, "TRBE", 0.6, "Trust"),
            rec("1003", 40.0, "INDV", 0.4, "Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].class, TenureClass::Allotted);
        assert_eq!(tracts.trust[0].share, 1.0);
    }

    #[test]
    fn entity_types_merge_into_one_trust_row() {
        let records = vec![
            rec("1004", 60.0, "INDV", 0.7, "Trust"),
            rec("1004", 60.0, "NONI", 0.3, "Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].share, 1.0);
    }

    #[test]
    fn fee_only_tract_is_excluded() {
        let records = vec![
            rec("1005", 20.0, "INDV", 1.0, "Fee"),
            rec("1006", 30.0, "INDV", 1.0, "Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].tract_ref, "1006");
    }

    #[test]
    fn unrecognized_label_is_excluded_not_an_error() {
        let records = vec![rec("1007", 20.0, "INDV", 1.0, "Life Estate")];
        let tracts = categorize(&records, &categories());
        assert!(tracts.trust.is_empty());
    }

    #[test]
    fn tribal_and_allotted_partition_the_trust_set() {
        let records = vec![
            rec("1001", 100.0, "TRBE", 1.0, "T-Trust"),
            rec("1002", 50.0, "INDV", 0.5, "Trust"),
            rec("1002", 50.0, "INDV", 0.5, "Trust"),
            rec("1003", 40.0, "TRBE", 0.6, "Trust"),
            rec("1003", 40.0, "INDV", 0.4, "Trust"),
            rec("1005", 20.0, "INDV", 1.0, "Fee"),
        ];
        let tracts = categorize(&records, &categories());

        let tribal: BTreeSet<&str> = tracts.tribal().map(|t| t.tract_ref.as_str()).collect();
        let allotted: BTreeSet<&str> = tracts.allotted().map(|t| t.tract_ref.as_str()).collect();
        let all: BTreeSet<&str> = tracts.trust.iter().map(|t| t.tract_ref.as_str()).collect();

        assert!(tribal.is_disjoint(&allotted));
        let union: BTreeSet<&str> = tribal.union(&allotted).copied().collect();
        assert_eq!(union, all);
    }

    #[test]
    fn tribal_fee_stake_still_marks_the_trust_row() {
        // The whole-interest tribal stake sits on the fee row; candidacy is
        // by tract reference, so the tract's trust row is still tribal.
        let records = vec![
            rec("1008", 80.0, "TRBE", 1.0, "Fee"),
            rec("1008", 80.0, "INDV", 1.0, "Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 1);
        assert_eq!(tracts.trust[0].class, TenureClass::Tribal);
    }

    #[test]
    fn distinct_trust_labels_keep_separate_rows() {
        let records = vec![
            rec("1009", 70.0, "INDV", 0.5, "Trust"),
            rec("1009", 70.0, "INDV", 0.5, "T-Trust"),
        ];
        let tracts = categorize(&records, &categories());
        assert_eq!(tracts.trust.len(), 2);
    }
}
