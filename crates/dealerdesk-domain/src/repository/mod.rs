//! Repository trait definitions for the record collections
//!
//! Lookups return `Option` rather than erroring so that dangling sale
//! references can be resolved to an explicit "Unknown" at read time.

use dealerdesk_types::Result;

use crate::model::{Car, Customer, Employee, Sale};

/// Repository for the car inventory
pub trait CarRepository {
    /// Append a car, assigning the next id. Returns the assigned id.
    fn add(&mut self, car: Car) -> u32;

    /// Remove the car with the given id. No cascade: sales keep their car_id.
    fn remove(&mut self, id: u32) -> Result<()>;

    /// Find a car by id
    fn find_by_id(&self, id: u32) -> Option<&Car>;

    /// All cars in insertion order
    fn find_all(&self) -> &[Car];
}

/// Repository for customers
pub trait CustomerRepository {
    fn add(&mut self, customer: Customer) -> u32;

    fn remove(&mut self, id: u32) -> Result<()>;

    fn find_by_id(&self, id: u32) -> Option<&Customer>;

    fn find_all(&self) -> &[Customer];
}

/// Repository for employees
pub trait EmployeeRepository {
    fn add(&mut self, employee: Employee) -> u32;

    fn remove(&mut self, id: u32) -> Result<()>;

    fn find_by_id(&self, id: u32) -> Option<&Employee>;

    fn find_all(&self) -> &[Employee];
}

/// Repository for sales (append-only, no edit or delete)
pub trait SaleRepository {
    fn find_by_id(&self, id: u32) -> Option<&Sale>;

    fn find_all(&self) -> &[Sale];
}
