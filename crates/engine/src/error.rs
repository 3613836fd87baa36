use std::fmt;

#[derive(Debug)]
pub enum InventoryError {
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (empty label list, overlapping categories, etc.).
    ConfigValidation(String),
    /// Source workbook missing, unreadable, or not a spreadsheet format.
    Workbook(String),
    /// A data row has fewer fields than the fixed 11-column extract schema.
    SchemaMismatch { row: usize, found: usize },
    /// A numeric cell could not be parsed.
    ValueParse { row: usize, column: &'static str, value: String },
    /// A second distinct LAC value appeared within one extract.
    LacConflict { first: String, conflicting: String, row: usize },
    /// Extract contained no ownership records.
    EmptyExtract,
    /// More tracts out of unity than the configured allowance.
    UnityViolation { violations: usize, allowed: usize },
    /// IO error (file read/write, etc.).
    Io(String),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::Workbook(msg) => write!(f, "workbook error: {msg}"),
            Self::SchemaMismatch { row, found } => {
                write!(f, "row {row}: extract schema requires 11 fields, found {found}")
            }
            Self::ValueParse { row, column, value } => {
                write!(f, "row {row}, column '{column}': cannot parse number '{value}'")
            }
            Self::LacConflict { first, conflicting, row } => {
                write!(
                    f,
                    "row {row}: LAC '{conflicting}' conflicts with '{first}'; one extract must cover one LAC"
                )
            }
            Self::EmptyExtract => write!(f, "extract contains no ownership records"),
            Self::UnityViolation { violations, allowed } => {
                write!(
                    f,
                    "TAAMS ownership anomaly: {violations} tract(s) with shares out of unity \
                     (allowed {allowed}); escalate to the responsible LTRO and request a corrected pull"
                )
            }
            Self::Io(msg) => write!(f, "IO error: {msg}"),
        }
    }
}

impl std::error::Error for InventoryError {}
