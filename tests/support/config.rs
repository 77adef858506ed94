use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a temporary `.toml` file that lives as long as the
/// returned handle.
pub fn write_temp_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("betline-report-")
        .suffix(".toml")
        .tempfile()
        .unwrap_or_else(|e| panic!("create temp config: {e}"));
    file.write_all(contents.as_bytes())
        .unwrap_or_else(|e| panic!("write temp config: {e}"));
    file
}
