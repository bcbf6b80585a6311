use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of the person being registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitorType {
    Visitor,
    Resident,
    Employee,
}

impl VisitorType {
    pub const ALL: [VisitorType; 3] = [
        VisitorType::Visitor,
        VisitorType::Resident,
        VisitorType::Employee,
    ];

    /// Label written to the data file and to exports.
    pub fn label(&self) -> &'static str {
        match self {
            VisitorType::Visitor => "Visitor",
            VisitorType::Resident => "Resident",
            VisitorType::Employee => "Employee",
        }
    }

    /// Parse a label, case-insensitive.
    /// The Portuguese labels of the old desk application are accepted too,
    /// so its data files load unchanged.
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "visitor" | "visitante" => Some(VisitorType::Visitor),
            "resident" | "morador" => Some(VisitorType::Resident),
            "employee" | "funcionário" | "funcionario" => Some(VisitorType::Employee),
            _ => None,
        }
    }

    /// Comma separated list of accepted labels, for error messages.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for VisitorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
