// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_writable, resolve_output};
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};
use std::path::PathBuf;

/// Logica di alto livello per l'export.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole table.
    ///
    /// - `format`: xlsx | csv | json
    /// - `file`: output path; `~/` and relative paths are resolved
    /// - `force`: overwrite an existing file without asking
    ///
    /// Returns the absolute path that was written.
    pub fn export(
        store: &RecordStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output(file)?;

        ensure_writable(&path, force)?;

        if store.is_empty() {
            warning("No records to export: only the header row will be written.");
        }

        info(format!(
            "Exporting {} record(s) to {}: {}",
            store.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        store.export_as(&path, format)?;

        success(format!(
            "{} export completed: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        Ok(path)
    }
}
