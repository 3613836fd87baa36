use crate::model::{AcreageSummary, CategorizedTracts, TenureClass};

/// Reduce the classified tracts to the one-row acreage rollup.
///
/// Trust interest is the unweighted mean of the aggregated share across
/// trust rows: average per-tract trust completeness, not acreage-weighted.
/// An extract with no trust tracts yields 0.0 rather than dividing by zero.
pub fn summarize(tracts: &CategorizedTracts) -> AcreageSummary {
    let mut tribal_acres = 0.0;
    let mut allotted_acres = 0.0;
    let mut trust_acres = 0.0;
    let mut share_total = 0.0;

    for row in &tracts.trust {
        trust_acres += row.acres;
        share_total += row.share;
        match row.class {
            TenureClass::Tribal => tribal_acres += row.acres,
            TenureClass::Allotted => allotted_acres += row.acres,
        }
    }

    let trust_interest = if tracts.trust.is_empty() {
        0.0
    } else {
        share_total / tracts.trust.len() as f64
    };

    AcreageSummary {
        tribal_acres,
        allotted_acres,
        trust_acres,
        trust_interest,
    }
}
