// Summary CSV output

use std::path::Path;

use tractsum_engine::error::InventoryError;
use tractsum_engine::model::SummaryRow;

const SUMMARY_HEADER: [&str; 5] = [
    "LAC",
    "Tribal Acreage",
    "Allotted Acreage",
    "Trust Acreage",
    "Trust Interest %",
];

/// Write summary rows as a delimited file, one record per processed extract.
pub fn write_summary(path: &Path, rows: &[SummaryRow]) -> Result<(), InventoryError> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| InventoryError::Io(e.to_string()))?;

    writer
        .write_record(SUMMARY_HEADER)
        .map_err(|e| InventoryError::Io(e.to_string()))?;

    for row in rows {
        let s = &row.summary;
        writer
            .write_record([
                row.lac.clone(),
                fmt_number(s.tribal_acres),
                fmt_number(s.allotted_acres),
                fmt_number(s.trust_acres),
                fmt_number(s.trust_interest),
            ])
            .map_err(|e| InventoryError::Io(e.to_string()))?;
    }

    writer.flush().map_err(|e| InventoryError::Io(e.to_string()))?;
    Ok(())
}

/// Plain decimal rendering. `f64` display never switches to scientific
/// notation, which keeps repeated runs byte-identical and the file readable.
fn fmt_number(n: f64) -> String {
    format!("{n}")
}
