//! Customer record

use serde::{Deserialize, Serialize};

/// A customer of the dealership
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    /// Assigned by the store, unique within the collection
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub driver_license: String,
}
