//! Car inventory record

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Availability status of a car on the lot
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum CarStatus {
    #[default]
    Available,
    Sold,
    Reserved,
    InService,
}

impl CarStatus {
    /// All statuses in combo-box order
    pub const ALL: [CarStatus; 4] = [
        CarStatus::Available,
        CarStatus::Sold,
        CarStatus::Reserved,
        CarStatus::InService,
    ];

    /// Display label, also the value stored in CSV exports
    pub fn label(&self) -> &'static str {
        match self {
            CarStatus::Available => "Available",
            CarStatus::Sold => "Sold",
            CarStatus::Reserved => "Reserved",
            CarStatus::InService => "In Service",
        }
    }
}

impl std::fmt::Display for CarStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A car in the dealership inventory
///
/// The VIN is free text: it is not validated for uniqueness or checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Assigned by the store, unique within the collection
    pub id: u32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub price: f64,
    pub status: CarStatus,
    pub mileage: u32,
    pub vin: String,
}
