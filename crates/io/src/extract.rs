// Surface-inventory extract reading (Excel workbooks and delimited text)

use std::io::Read;
use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use tractsum_engine::error::InventoryError;
use tractsum_engine::model::{Extract, OwnershipRecord};

/// Fixed positional schema of a surface-inventory pull. Header names are
/// never trusted; columns are assigned by position.
const EXTRACT_FIELDS: usize = 11;

const COL_LAC: usize = 0;
const COL_TRACT_REF: usize = 1;
const COL_ACRES: usize = 2;
const COL_ENTITY_TYPE: usize = 5;
const COL_OWNER_DEC: usize = 8;
const COL_OWNERSHIP_TYPE: usize = 10;

/// Read one extract, dispatching on the file extension. Workbook formats go
/// through calamine; `.csv` is parsed as delimited text.
pub fn read_extract(path: &Path) -> Result<Extract, InventoryError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match ext.as_str() {
        "csv" => read_delimited_extract(path),
        _ => read_workbook_extract(path),
    }
}

fn read_workbook_extract(path: &Path) -> Result<Extract, InventoryError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| InventoryError::Workbook(format!("cannot open {}: {e}", path.display())))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let first = sheet_names.first().ok_or_else(|| {
        InventoryError::Workbook(format!("{}: workbook contains no sheets", path.display()))
    })?;
    // One pull per workbook; only the first sheet carries data.
    let range = workbook
        .worksheet_range(first)
        .map_err(|e| InventoryError::Workbook(format!("cannot read sheet '{first}': {e}")))?;

    let rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();
    build_extract(rows)
}

fn read_delimited_extract(path: &Path) -> Result<Extract, InventoryError> {
    let content = read_file_as_utf8(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| InventoryError::Io(e.to_string()))?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }
    build_extract(rows)
}

/// Read a delimited file and convert to UTF-8 if needed. Excel-exported
/// CSVs are commonly Windows-1252.
fn read_file_as_utf8(path: &Path) -> Result<String, InventoryError> {
    let mut file = std::fs::File::open(path)
        .map_err(|e| InventoryError::Workbook(format!("cannot open {}: {e}", path.display())))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| InventoryError::Io(e.to_string()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Cell rendered the way the extract columns expect: whole numbers without
/// decimals, so integer tract references survive as identifiers.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                format!("{n}")
            }
        }
        Data::Int(n) => format!("{n}"),
        Data::Bool(b) => {
            if *b {
                "TRUE".into()
            } else {
                "FALSE".into()
            }
        }
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => format!("{}", dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

/// Assemble records from raw positional rows. Row numbers in errors are
/// 1-based spreadsheet rows; row 1 is the header and is always skipped.
fn build_extract(rows: Vec<Vec<String>>) -> Result<Extract, InventoryError> {
    let mut records = Vec::new();
    let mut lac: Option<String> = None;

    for (idx, fields) in rows.into_iter().enumerate().skip(1) {
        let row_no = idx + 1;
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        if fields.len() < EXTRACT_FIELDS {
            return Err(InventoryError::SchemaMismatch {
                row: row_no,
                found: fields.len(),
            });
        }

        // One extract covers one LAC; a second distinct value means the
        // pull mixed administrative scopes and cannot be summarized.
        let row_lac = fields[COL_LAC].trim().to_string();
        match &lac {
            None => lac = Some(row_lac),
            Some(first) if *first != row_lac => {
                return Err(InventoryError::LacConflict {
                    first: first.clone(),
                    conflicting: row_lac,
                    row: row_no,
                });
            }
            Some(_) => {}
        }

        records.push(OwnershipRecord {
            tract_ref: fields[COL_TRACT_REF].trim().to_string(),
            acres: parse_number(&fields[COL_ACRES], row_no, "Acres")?,
            entity_type: fields[COL_ENTITY_TYPE].trim().to_string(),
            share: parse_number(&fields[COL_OWNER_DEC], row_no, "OwnerDec")?,
            ownership_type: fields[COL_OWNERSHIP_TYPE].trim().to_string(),
        });
    }

    match lac {
        Some(lac) if !records.is_empty() => Ok(Extract { records, lac }),
        _ => Err(InventoryError::EmptyExtract),
    }
}

fn parse_number(value: &str, row: usize, column: &'static str) -> Result<f64, InventoryError> {
    let parsed: f64 = value.trim().parse().map_err(|_| InventoryError::ValueParse {
        row,
        column,
        value: value.into(),
    })?;
    if !parsed.is_finite() {
        return Err(InventoryError::ValueParse {
            row,
            column,
            value: value.into(),
        });
    }
    Ok(parsed)
}
