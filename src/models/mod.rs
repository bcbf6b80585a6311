pub mod record;
pub mod visitor_type;

pub use record::{NewRecord, Record};
pub use visitor_type::VisitorType;

/// Column names of a record, in data file and export order.
pub const COLUMNS: [&str; 11] = [
    "full_name",
    "id_document",
    "car_model",
    "plate",
    "address",
    "number",
    "entry_date",
    "entry_time",
    "exit_date",
    "exit_time",
    "visitor_type",
];
