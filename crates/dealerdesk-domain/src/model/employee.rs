//! Employee record

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Job position of an employee
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum Position {
    #[default]
    Salesperson,
    Manager,
    Mechanic,
    Accountant,
    Administrator,
}

impl Position {
    /// All positions in combo-box order
    pub const ALL: [Position; 5] = [
        Position::Salesperson,
        Position::Manager,
        Position::Mechanic,
        Position::Accountant,
        Position::Administrator,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Position::Salesperson => "Salesperson",
            Position::Manager => "Manager",
            Position::Mechanic => "Mechanic",
            Position::Accountant => "Accountant",
            Position::Administrator => "Administrator",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A dealership employee
///
/// The password is kept and shown in plaintext, exactly as the legacy system
/// did. This is a known weakness of the data model, not an endorsement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Assigned by the store, unique within the collection
    pub id: u32,
    pub name: String,
    pub position: Position,
    pub phone: String,
    pub email: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub username: String,
    pub password: String,
}
