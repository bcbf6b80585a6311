// src/store/persist.rs

use super::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::{COLUMNS, Record, VisitorType};
use crate::utils::date::parse_stamp;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One line of the data file: the row index followed by the record columns.
#[derive(Debug, Serialize, Deserialize)]
struct RecordRow {
    id: usize,
    full_name: String,
    id_document: String,
    car_model: String,
    plate: String,
    address: String,
    number: String,
    entry_date: String,
    entry_time: String,
    exit_date: String,
    exit_time: String,
    visitor_type: String,
}

impl RecordRow {
    fn from_record(id: usize, r: &Record) -> Self {
        Self {
            id,
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

    /// `line` is the 1-based line in the file, used in error messages.
    fn into_record(self, line: usize) -> AppResult<Record> {
        let bad = |what: String| AppError::Persistence(format!("line {line}: {what}"));

        let required = [
            ("full_name", &self.full_name),
            ("id_document", &self.id_document),
            ("car_model", &self.car_model),
            ("plate", &self.plate),
            ("address", &self.address),
            ("number", &self.number),
        ];
        if let Some((name, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(bad(format!("empty {name}")));
        }

        let entry = parse_stamp(&self.entry_date, &self.entry_time).ok_or_else(|| {
            bad(format!(
                "invalid entry stamp '{} {}'",
                self.entry_date, self.entry_time
            ))
        })?;

        let exit = match (self.exit_date.trim(), self.exit_time.trim()) {
            ("", "") => None,
            ("", _) | (_, "") => {
                return Err(bad("exit date and exit time must be both set or both empty".into()));
            }
            (d, t) => Some(
                parse_stamp(d, t).ok_or_else(|| bad(format!("invalid exit stamp '{d} {t}'")))?,
            ),
        };

        let visitor_type = VisitorType::from_label(&self.visitor_type)
            .ok_or_else(|| bad(format!("unknown visitor type '{}'", self.visitor_type)))?;

        Ok(Record {
            full_name: self.full_name,
            id_document: self.id_document,
            car_model: self.car_model,
            plate: self.plate,
            address: self.address,
            number: self.number,
            entry,
            exit,
            visitor_type,
        })
    }
}

/// Header of the data file written by the old desk application: an unnamed
/// index column, then the same eleven columns under Portuguese names.
const LEGACY_COLUMNS: [&str; 11] = [
    "Nome Completo",
    "Identidade",
    "Modelo do Carro",
    "Placa",
    "Endereço",
    "Número",
    "Data de Entrada",
    "Hora de Entrada",
    "Data de Saída",
    "Hora de Saída",
    "Tipo",
];

fn file_header() -> csv::StringRecord {
    std::iter::once("id").chain(COLUMNS).collect()
}

fn is_legacy_header(headers: &csv::StringRecord) -> bool {
    headers.len() == LEGACY_COLUMNS.len() + 1 && headers.iter().skip(1).eq(LEGACY_COLUMNS)
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Persistence(e.to_string())
}

impl RecordStore {
    /// Read the whole table from `path`. A missing file is an empty table.
    ///
    /// Ids are taken from row position; the stored `id` column is only
    /// informative. Files written by the old desk application (Portuguese
    /// header, unnamed index column) are read as well.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let mut rdr = csv::Reader::from_path(path).map_err(csv_error)?;
        if is_legacy_header(rdr.headers().map_err(csv_error)?) {
            // same column order, so only the names need replacing
            rdr.set_headers(file_header());
        }

        let mut records = Vec::new();
        let mut names = HashSet::new();

        for (i, row) in rdr.deserialize::<RecordRow>().enumerate() {
            let line = i + 2;
            let row = row.map_err(csv_error)?;
            let record = row.into_record(line)?;

            if !names.insert(record.full_name.clone()) {
                return Err(AppError::Persistence(format!(
                    "line {line}: duplicate name '{}'",
                    record.full_name
                )));
            }
            records.push(record);
        }

        Ok(Self { records })
    }

    /// Overwrite `path` with the whole table.
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(path).map_err(csv_error)?;

        if self.is_empty() {
            // serde only emits the header along with the first row
            wtr.write_record(&file_header()).map_err(csv_error)?;
        }

        for (id, record) in self.iter() {
            wtr.serialize(RecordRow::from_record(id, record))
                .map_err(csv_error)?;
        }

        wtr.flush()?;
        Ok(())
    }
}
