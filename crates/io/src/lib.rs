//! `tractsum-io` — extract reading, summary output, and workflow drivers.
//!
//! The engine crate stays free of file I/O; everything that opens or writes
//! a file lives here.

pub mod extract;
pub mod output;
pub mod workflow;

pub use extract::read_extract;
pub use output::write_summary;
pub use workflow::{batch_workflow, single_file_workflow, single_file_workflow_with_config};
