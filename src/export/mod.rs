// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
mod xlsx;

pub use logic::ExportLogic;
pub use model::RecordExport;

use crate::errors::AppResult;
use crate::store::RecordStore;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl RecordStore {
    /// Write the table to an XLSX spreadsheet with centered data cells.
    pub fn export(&self, path: impl AsRef<Path>) -> AppResult<()> {
        self.export_as(path, ExportFormat::Xlsx)
    }

    /// Write the table in `format`. Rows follow id order; the table and the
    /// data file are not touched.
    pub fn export_as(&self, path: impl AsRef<Path>, format: ExportFormat) -> AppResult<()> {
        let rows: Vec<RecordExport> = self.iter().map(|(_, r)| RecordExport::from(r)).collect();
        let path = path.as_ref();

        match format {
            ExportFormat::Xlsx => xlsx::export_xlsx(&rows, path),
            ExportFormat::Csv => json_csv::export_csv(&rows, path),
            ExportFormat::Json => json_csv::export_json(&rows, path),
        }
    }
}
