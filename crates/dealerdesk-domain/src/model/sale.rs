//! Sale record

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a sale was paid for
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[default]
    Cash,
    CreditCard,
    BankLoan,
    Lease,
}

impl PaymentMethod {
    /// All payment methods in combo-box order
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::Cash,
        PaymentMethod::CreditCard,
        PaymentMethod::BankLoan,
        PaymentMethod::Lease,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::BankLoan => "Bank Loan",
            PaymentMethod::Lease => "Lease",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A recorded sale
///
/// Sales are immutable once created; there is no edit or delete operation.
/// The customer, car, and employee ids are plain lookup keys with no
/// referential integrity: if the referenced record is deleted the sale
/// remains and joins resolve to "Unknown".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sale {
    /// Assigned by the store, unique within the collection
    pub id: u32,
    pub date: NaiveDate,
    pub customer_id: u32,
    pub car_id: u32,
    pub price: f64,
    pub employee_id: u32,
    pub payment_method: PaymentMethod,
}
