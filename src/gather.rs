//! Directory-level aggregation of benchmark logs.

use crate::logs::{self, ResultTable};
use anyhow::Context;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Gather measurements from every `.log` file directly inside `log_dir`.
///
/// A file that fails to read or parse is reported with one warning and
/// skipped; one corrupt log must not abort the whole run. An empty table
/// is a valid outcome and is left to the caller to interpret.
pub fn gather_results(log_dir: &Path) -> anyhow::Result<ResultTable> {
    let mut paths: Vec<PathBuf> = fs::read_dir(log_dir)
        .with_context(|| format!("read results directory {}", log_dir.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "log"))
        .collect();
    paths.sort();

    let mut table = ResultTable::new();
    for path in paths {
        match logs::parse_log_file(&path) {
            Ok(rows) => table.extend(rows),
            Err(err) => warn!("failed to parse {}: {:#}", path.display(), err),
        }
    }
    Ok(table)
}
