// src/export/model.rs

use crate::models::{COLUMNS, Record};
use serde::Serialize;

/// Flat view of a record for CSV / JSON / XLSX exports (no id column).
#[derive(Serialize, Clone, Debug)]
pub struct RecordExport {
    pub full_name: String,
    pub id_document: String,
    pub car_model: String,
    pub plate: String,
    pub address: String,
    pub number: String,
    pub entry_date: String,
    pub entry_time: String,
    pub exit_date: String,
    pub exit_time: String,
    pub visitor_type: String,
}

impl From<&Record> for RecordExport {
    fn from(r: &Record) -> Self {
        Self {
            full_name: r.full_name.clone(),
            id_document: r.id_document.clone(),
            car_model: r.car_model.clone(),
            plate: r.plate.clone(),
            address: r.address.clone(),
            number: r.number.clone(),
            entry_date: r.entry_date(),
            entry_time: r.entry_time(),
            exit_date: r.exit_date(),
            exit_time: r.exit_time(),
            visitor_type: r.visitor_type.label().to_string(),
        }
    }
}

pub(crate) fn get_headers() -> &'static [&'static str] {
    &COLUMNS
}

pub(crate) fn export_to_row(e: &RecordExport) -> [&str; 11] {
    [
        e.full_name.as_str(),
        e.id_document.as_str(),
        e.car_model.as_str(),
        e.plate.as_str(),
        e.address.as_str(),
        e.number.as_str(),
        e.entry_date.as_str(),
        e.entry_time.as_str(),
        e.exit_date.as_str(),
        e.exit_time.as_str(),
        e.visitor_type.as_str(),
    ]
}
