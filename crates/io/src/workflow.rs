// Single-file and batch inventory workflows

use std::path::{Path, PathBuf};

use tractsum_engine::engine;
use tractsum_engine::error::InventoryError;
use tractsum_engine::model::SummaryRow;
use tractsum_engine::InventoryConfig;

use crate::extract::read_extract;
use crate::output::write_summary;

/// Run the whole pipeline for one extract.
///
/// `allow_errors` is the number of tracts permitted to have ownership out of
/// unity before the run fails. It should normally stay zero; when a pull has
/// known out-of-unity tracts, notify the responsible LTRO and raise the
/// allowance for that file alone.
///
/// The summary row is always returned. When `persist` is set it is also
/// written as a one-row CSV, either to `output` or, if `output` is `None`,
/// next to the input as `<stem>_summary.csv`.
pub fn single_file_workflow(
    input: &Path,
    output: Option<&Path>,
    persist: bool,
    allow_errors: usize,
) -> Result<SummaryRow, InventoryError> {
    let config = InventoryConfig::with_allowance(allow_errors);
    single_file_workflow_with_config(input, output, persist, &config)
}

/// `single_file_workflow` with a caller-supplied config (category label
/// overrides from TOML, custom unity allowance).
pub fn single_file_workflow_with_config(
    input: &Path,
    output: Option<&Path>,
    persist: bool,
    config: &InventoryConfig,
) -> Result<SummaryRow, InventoryError> {
    let extract = read_extract(input)?;
    let result = engine::run(config, &extract.records)?;
    let row = SummaryRow {
        lac: extract.lac,
        summary: result.summary,
    };

    if persist {
        let path = match output {
            Some(p) => p.to_path_buf(),
            None => default_output_path(input),
        };
        write_summary(&path, std::slice::from_ref(&row))?;
    }

    Ok(row)
}

fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("extract");
    input.with_file_name(format!("{stem}_summary.csv"))
}

/// Run every `.xlsx` extract in a folder and write one summary row per file
/// to `input_dir/output_name`.
///
/// Files run in path order so repeated runs produce identical output. The
/// unity allowance applies to every file in the batch; if only one file is
/// known to be out of unity, run it separately. The first failure aborts
/// the batch and nothing is written.
pub fn batch_workflow(
    input_dir: &Path,
    output_name: &str,
    allow_errors: usize,
) -> Result<(), InventoryError> {
    let config = InventoryConfig::with_allowance(allow_errors);

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(input_dir)
        .map_err(|e| InventoryError::Io(format!("cannot read {}: {e}", input_dir.display())))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case("xlsx"))
        })
        .collect();
    inputs.sort();

    let mut rows = Vec::with_capacity(inputs.len());
    for input in &inputs {
        rows.push(single_file_workflow_with_config(input, None, false, &config)?);
    }

    write_summary(&input_dir.join(output_name), &rows)
}
