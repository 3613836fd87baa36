use serde::Deserialize;

use crate::error::InventoryError;
use crate::model::OwnershipCategory;

// ---------------------------------------------------------------------------
// Top-level config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InventoryConfig {
    #[serde(default)]
    pub categories: CategoryConfig,
    #[serde(default)]
    pub tolerance: ToleranceConfig,
}

// ---------------------------------------------------------------------------
// Category label mapping
// ---------------------------------------------------------------------------

/// Explicit enumerated label mapping. Upstream labeling is inconsistent
/// ("Trust" vs "T-Trust"), so the recognized variants are listed here
/// rather than discovered by substring search at runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryConfig {
    /// Ownership-type labels that denote a trust interest.
    #[serde(default = "default_trust_labels")]
    pub trust_labels: Vec<String>,
    /// Ownership-type labels that denote fee ownership.
    #[serde(default = "default_fee_labels")]
    pub fee_labels: Vec<String>,
    /// Entity-type codes recognized as tribal entities.
    #[serde(default = "default_tribal_entities")]
    pub tribal_entities: Vec<String>,
}

fn default_trust_labels() -> Vec<String> {
    vec!["Trust".into(), "T-Trust".into(), "Restricted Trust".into()]
}

fn default_fee_labels() -> Vec<String> {
    vec!["Fee".into(), "Restricted Fee".into()]
}

fn default_tribal_entities() -> Vec<String> {
    vec!["TRBE".into()]
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            trust_labels: default_trust_labels(),
            fee_labels: default_fee_labels(),
            tribal_entities: default_tribal_entities(),
        }
    }
}

impl CategoryConfig {
    /// Category for an ownership-type label, if recognized. Matching is
    /// exact on the trimmed label.
    pub fn ownership_category(&self, label: &str) -> Option<OwnershipCategory> {
        let label = label.trim();
        if self.trust_labels.iter().any(|l| l == label) {
            Some(OwnershipCategory::Trust)
        } else if self.fee_labels.iter().any(|l| l == label) {
            Some(OwnershipCategory::Fee)
        } else {
            None
        }
    }

    pub fn is_tribal_entity(&self, code: &str) -> bool {
        let code = code.trim();
        self.tribal_entities.iter().any(|c| c == code)
    }
}

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ToleranceConfig {
    /// Number of tracts permitted to be out of unity before a run fails.
    /// Normally zero; raise it only for a pull with known, reported issues.
    #[serde(default)]
    pub allowed_unity_errors: usize,
}

impl Default for ToleranceConfig {
    fn default() -> Self {
        Self { allowed_unity_errors: 0 }
    }
}

// ---------------------------------------------------------------------------
// Parse + Validate
// ---------------------------------------------------------------------------

impl InventoryConfig {
    pub fn from_toml(input: &str) -> Result<Self, InventoryError> {
        let config: InventoryConfig =
            toml::from_str(input).map_err(|e| InventoryError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Default config with the given unity allowance.
    pub fn with_allowance(allowed_unity_errors: usize) -> Self {
        Self {
            tolerance: ToleranceConfig { allowed_unity_errors },
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), InventoryError> {
        if self.categories.trust_labels.is_empty() {
            return Err(InventoryError::ConfigValidation(
                "at least one trust label is required".into(),
            ));
        }

        if self.categories.tribal_entities.is_empty() {
            return Err(InventoryError::ConfigValidation(
                "at least one tribal entity code is required".into(),
            ));
        }

        for label in &self.categories.trust_labels {
            if self.categories.fee_labels.iter().any(|l| l == label) {
                return Err(InventoryError::ConfigValidation(format!(
                    "label '{label}' appears in both trust and fee categories"
                )));
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
