//! One-shot compute-and-write entry point.

use std::path::Path;

use tracing::info;

use crate::config::SweepConfig;
use crate::error::Result;
use crate::table::{compute_table, CapacityTable};

/// Compute the capacity table for `config` and write it to `path`.
///
/// A single write attempt is made. A missing parent directory surfaces as
/// [`crate::Error::Io`]; nothing is created on the caller's behalf.
pub fn export(config: &SweepConfig, path: &Path) -> Result<CapacityTable> {
    let table = compute_table(config);
    table.write_to_path(path)?;
    info!(
        rows = table.len(),
        path = %path.display(),
        "capacity table written"
    );
    Ok(table)
}
