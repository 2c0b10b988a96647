//! Demo data loaded at startup
//!
//! Records do not survive a restart; every launch starts from this fixture.
//! The five sales cover all five cars, so the loaded lot has no available
//! cars and a sales total of $205,500.

use chrono::NaiveDate;

use dealerdesk_domain::model::{Car, CarStatus, Customer, Employee, PaymentMethod, Position};
use dealerdesk_types::{Error, Result};

use crate::DealershipStore;

fn day(s: &str) -> Result<NaiveDate> {
    s.parse().map_err(|_| Error::InvalidDate(s.to_string()))
}

fn car(make: &str, model: &str, year: i32, color: &str, price: f64, mileage: u32, vin: &str) -> Car {
    Car {
        id: 0,
        make: make.to_string(),
        model: model.to_string(),
        year,
        color: color.to_string(),
        price,
        status: CarStatus::Available,
        mileage,
        vin: vin.to_string(),
    }
}

fn customer(name: &str, phone: &str, email: &str, address: &str, license: &str) -> Customer {
    Customer {
        id: 0,
        name: name.to_string(),
        phone: phone.to_string(),
        email: email.to_string(),
        address: address.to_string(),
        driver_license: license.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn employee(
    name: &str,
    position: Position,
    phone: &str,
    email: &str,
    hire_date: NaiveDate,
    salary: f64,
    username: &str,
) -> Employee {
    Employee {
        id: 0,
        name: name.to_string(),
        position,
        phone: phone.to_string(),
        email: email.to_string(),
        hire_date,
        salary,
        username: username.to_string(),
        password: "password123".to_string(),
    }
}

pub fn load_sample_data(store: &mut DealershipStore) -> Result<()> {
    store.add_car(car("Toyota", "Camry", 2022, "Silver", 25000.0, 15000, "JT2BF22K1W0123456"));
    store.add_car(car("Honda", "Accord", 2021, "Black", 28500.0, 22000, "1HGCM82633A123456"));
    store.add_car(car("Ford", "Mustang", 2023, "Red", 42000.0, 5000, "1FA6P8TH3J5123456"));
    store.add_car(car("Tesla", "Model 3", 2023, "White", 48000.0, 8000, "5YJ3E1EA1PF123456"));
    store.add_car(car("BMW", "X5", 2022, "Blue", 62000.0, 18000, "5UXCR6C05N9123456"));

    store.add_customer(customer("John Doe", "555-0101", "john@example.com", "123 Main St, Anytown", "DL12345678"));
    store.add_customer(customer("Jane Smith", "555-0102", "jane@example.com", "456 Oak Ave, Somewhere", "DL23456789"));
    store.add_customer(customer("Robert Brown", "555-0103", "robert@example.com", "789 Pine Rd, Nowhere", "DL34567890"));
    store.add_customer(customer("Emily Davis", "555-0104", "emily@example.com", "321 Elm St, Anywhere", "DL45678901"));
    store.add_customer(customer("Michael Lee", "555-0105", "michael@example.com", "654 Maple Dr, Everywhere", "DL56789012"));

    store.add_employee(employee("Sarah Smith", Position::Salesperson, "555-0201", "sarah@example.com", day("2022-01-15")?, 45000.0, "sarah"));
    store.add_employee(employee("Mike Johnson", Position::Salesperson, "555-0202", "mike@example.com", day("2022-03-10")?, 48000.0, "mike"));
    store.add_employee(employee("David Wilson", Position::Manager, "555-0203", "david@example.com", day("2021-11-05")?, 65000.0, "david"));
    store.add_employee(employee("Lisa Taylor", Position::Salesperson, "555-0204", "lisa@example.com", day("2023-02-20")?, 42000.0, "lisa"));
    store.add_employee(employee("James Anderson", Position::Mechanic, "555-0205", "james@example.com", day("2022-05-15")?, 38000.0, "james"));

    // Recording the sales also flips every car to Sold
    store.record_sale(day("2023-05-15")?, 1, 1, 25000.0, 1, PaymentMethod::CreditCard)?;
    store.record_sale(day("2023-05-14")?, 2, 2, 28500.0, 2, PaymentMethod::BankLoan)?;
    store.record_sale(day("2023-05-14")?, 3, 3, 42000.0, 1, PaymentMethod::Cash)?;
    store.record_sale(day("2023-05-13")?, 4, 4, 48000.0, 3, PaymentMethod::CreditCard)?;
    store.record_sale(day("2023-05-12")?, 5, 5, 62000.0, 4, PaymentMethod::BankLoan)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_shape() {
        let store = DealershipStore::with_sample_data().unwrap();
        assert_eq!(store.cars().len(), 5);
        assert_eq!(store.customers().len(), 5);
        assert_eq!(store.employees().len(), 5);
        assert_eq!(store.sales().len(), 5);
        assert!(store
            .cars()
            .iter()
            .all(|c| c.status == CarStatus::Sold));
    }

    #[test]
    fn test_sample_sales_total() {
        let store = DealershipStore::with_sample_data().unwrap();
        let total: f64 = store.sales().iter().map(|s| s.price).sum();
        assert!((total - 205500.0).abs() < f64::EPSILON);
    }
}
