//! Standard output messages.

use std::path::Path;

/// Confirmation line printed after a successful export.
///
/// Only the file name is quoted, matching `Data saved to 'new_cap_data.csv'.`
/// for the default output path.
pub fn confirmation_message(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| path.to_string_lossy());
    format!("Data saved to '{name}'.")
}
