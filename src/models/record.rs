use crate::models::visitor_type::VisitorType;
use crate::utils::date::{format_date, format_time};
use chrono::NaiveDateTime;

/// One visit: a person entering the facility and, later, leaving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub full_name: String,
    pub id_document: String,
    pub car_model: String,
    pub plate: String,
    pub address: String,
    pub number: String,
    pub entry: NaiveDateTime,
    /// `None` while the visit is open.
    pub exit: Option<NaiveDateTime>,
    pub visitor_type: VisitorType,
}

impl Record {
    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }

    pub fn entry_date(&self) -> String {
        format_date(&self.entry)
    }

    pub fn entry_time(&self) -> String {
        format_time(&self.entry)
    }

    /// Empty string for an open visit.
    pub fn exit_date(&self) -> String {
        self.exit.as_ref().map(format_date).unwrap_or_default()
    }

    /// Empty string for an open visit.
    pub fn exit_time(&self) -> String {
        self.exit.as_ref().map(format_time).unwrap_or_default()
    }

    /// All eleven columns, in file order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.id_document.clone(),
            self.car_model.clone(),
            self.plate.clone(),
            self.address.clone(),
            self.number.clone(),
            self.entry_date(),
            self.entry_time(),
            self.exit_date(),
            self.exit_time(),
            self.visitor_type.label().to_string(),
        ]
    }
}

/// Raw form input for a new record, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewRecord {
    pub full_name: String,
    pub id_document: String,
    pub car_model: String,
    pub plate: String,
    pub address: String,
    pub number: String,
    pub visitor_type: String,
}

impl NewRecord {
    /// Names of the required fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("full_name", &self.full_name),
            ("id_document", &self.id_document),
            ("car_model", &self.car_model),
            ("plate", &self.plate),
            ("address", &self.address),
            ("number", &self.number),
            ("visitor_type", &self.visitor_type),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }
}
