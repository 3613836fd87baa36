use ordered_float::OrderedFloat;
use serde::Serialize;

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A single per-owner interest row from a surface-inventory extract.
///
/// Owner id and sequence number exist only in the source file; they
/// distinguish rows before aggregation and are dropped at extraction.
#[derive(Debug, Clone)]
pub struct OwnershipRecord {
    pub tract_ref: String,
    pub acres: f64,
    pub entity_type: String,
    pub share: f64,
    pub ownership_type: String,
}

/// Pre-loaded records plus the extract's administrative scope code.
#[derive(Debug, Clone)]
pub struct Extract {
    pub records: Vec<OwnershipRecord>,
    pub lac: String,
}

// ---------------------------------------------------------------------------
// Aggregation
// ---------------------------------------------------------------------------

/// Aggregate key = (tract, acres, ownership label, entity label).
/// Acres is constant within a tract; keeping it in the key carries it
/// through the grouping unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InterestKey {
    pub tract_ref: String,
    pub acres: OrderedFloat<f64>,
    pub ownership_type: String,
    pub entity_type: String,
}

/// Owner stakes sharing the same (tract, acres, ownership, entity).
#[derive(Debug, Clone, Serialize)]
pub struct TractInterest {
    pub tract_ref: String,
    pub acres: f64,
    pub ownership_type: String,
    pub entity_type: String,
    pub share: f64,
    pub owner_count: usize,
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Recognized ownership-type category under the configured label mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OwnershipCategory {
    Trust,
    Fee,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureClass {
    Tribal,
    Allotted,
}

impl std::fmt::Display for TenureClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tribal => write!(f, "tribal"),
            Self::Allotted => write!(f, "allotted"),
        }
    }
}

/// One trust-status row per (tract, acres, ownership label), shares summed
/// across entity types, annotated with its tenure class.
#[derive(Debug, Clone, Serialize)]
pub struct TrustTract {
    pub tract_ref: String,
    pub acres: f64,
    pub ownership_type: String,
    pub share: f64,
    pub class: TenureClass,
}

/// The classified trust rows. Tribal and allotted partition the set by
/// construction: every row carries exactly one class.
#[derive(Debug, Clone, Serialize)]
pub struct CategorizedTracts {
    pub trust: Vec<TrustTract>,
}

impl CategorizedTracts {
    pub fn tribal(&self) -> impl Iterator<Item = &TrustTract> {
        self.trust.iter().filter(|t| t.class == TenureClass::Tribal)
    }

    pub fn allotted(&self) -> impl Iterator<Item = &TrustTract> {
        self.trust.iter().filter(|t| t.class == TenureClass::Allotted)
    }
}

// ---------------------------------------------------------------------------
// Unity check
// ---------------------------------------------------------------------------

/// Per-tract share total that failed the unity check, rounded to 6 decimal
/// places.
#[derive(Debug, Clone, Serialize)]
pub struct OutOfUnityTract {
    pub tract_ref: String,
    pub share_total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct UnityReport {
    pub violations: Vec<OutOfUnityTract>,
}

impl UnityReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Summary + Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct AcreageSummary {
    pub tribal_acres: f64,
    pub allotted_acres: f64,
    pub trust_acres: f64,
    /// Unweighted mean aggregated share across trust rows; 0.0 when the
    /// extract has no trust tracts.
    pub trust_interest: f64,
}

/// One output row per processed extract.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub lac: String,
    pub summary: AcreageSummary,
}

/// Full engine output: the rollup plus the detail it was computed from.
#[derive(Debug, Clone, Serialize)]
pub struct InventoryResult {
    pub summary: AcreageSummary,
    pub unity: UnityReport,
    pub tracts: CategorizedTracts,
}
