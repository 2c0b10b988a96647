//! Record type definitions

mod car;
mod customer;
mod employee;
mod sale;

pub use car::{Car, CarStatus};
pub use customer::Customer;
pub use employee::{Employee, Position};
pub use sale::{PaymentMethod, Sale};
