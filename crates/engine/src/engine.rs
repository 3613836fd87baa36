use crate::classify::categorize;
use crate::config::InventoryConfig;
use crate::error::InventoryError;
use crate::model::{InventoryResult, OwnershipRecord};
use crate::summary::summarize;
use crate::unity::check_unity;

/// Run the full pipeline over pre-loaded records.
///
/// The unity check runs first and fails the run when more tracts are out of
/// unity than the configured allowance: a defective pull must not produce a
/// plausible-looking summary. The check never filters rows; the later
/// stages always see the original record set, so a tolerated out-of-unity
/// tract contributes its uncorrected shares to the rollup.
pub fn run(
    config: &InventoryConfig,
    records: &[OwnershipRecord],
) -> Result<InventoryResult, InventoryError> {
    let unity = check_unity(records);
    let violations = unity.violations.len();
    if violations > config.tolerance.allowed_unity_errors {
        return Err(InventoryError::UnityViolation {
            violations,
            allowed: config.tolerance.allowed_unity_errors,
        });
    }

    let tracts = categorize(records, &config.categories);
    let summary = summarize(&tracts);

    Ok(InventoryResult { summary, unity, tracts })
}
