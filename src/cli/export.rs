//! Export command implementation

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use shotlog::stats::dates::today;
use shotlog::stats::{export_csv, export_file_name};

use super::input::load_sessions;

/// Write sessions as CSV to `out` (or stdout for `-`)
pub fn export_command(sessions_path: &Path, out: Option<PathBuf>) -> Result<()> {
    let sessions = load_sessions(sessions_path)?;
    let csv = export_csv(&sessions);

    let out = out.unwrap_or_else(|| PathBuf::from(export_file_name(today())));
    if out.as_os_str() == "-" {
        println!("{}", csv);
        return Ok(());
    }

    std::fs::write(&out, csv)
        .with_context(|| format!("Failed to write CSV: {}", out.display()))?;
    println!("Exported {} sessions to {}", sessions.len(), out.display());
    Ok(())
}
