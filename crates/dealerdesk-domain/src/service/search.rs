//! Free-text search over the record collections
//!
//! Each entity has a field selector enum matching the search combo boxes of
//! the UI. Matching is a case-insensitive substring check for text fields and
//! a plain substring check over the decimal rendering for numeric fields.
//! An empty query bypasses filtering and returns the full collection.
//! Output preserves collection order; nothing is resorted.

use clap::ValueEnum;

use dealerdesk_types::format_date;

use crate::model::{Car, CarStatus, Customer, Employee};
use crate::service::reports::SaleView;

/// Searchable fields of a car
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CarField {
    #[default]
    All,
    Make,
    Model,
    Year,
    Color,
    /// `min-max` inclusive range, or a single number matched within ±10%
    PriceRange,
    /// Exact case-insensitive equality, not substring
    Status,
}

impl CarField {
    /// All selectors in combo-box order
    pub const ALL: [CarField; 7] = [
        CarField::All,
        CarField::Make,
        CarField::Model,
        CarField::Year,
        CarField::Color,
        CarField::PriceRange,
        CarField::Status,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CarField::All => "All",
            CarField::Make => "Make",
            CarField::Model => "Model",
            CarField::Year => "Year",
            CarField::Color => "Color",
            CarField::PriceRange => "Price Range",
            CarField::Status => "Status",
        }
    }
}

/// Searchable fields of a resolved sale row
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SaleField {
    #[default]
    All,
    Customer,
    Car,
    Salesperson,
    PaymentMethod,
}

impl SaleField {
    /// All selectors in combo-box order
    pub const ALL: [SaleField; 5] = [
        SaleField::All,
        SaleField::Customer,
        SaleField::Car,
        SaleField::Salesperson,
        SaleField::PaymentMethod,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SaleField::All => "All",
            SaleField::Customer => "Customer",
            SaleField::Car => "Car",
            SaleField::Salesperson => "Salesperson",
            SaleField::PaymentMethod => "Payment Method",
        }
    }
}

/// Searchable fields of a customer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum CustomerField {
    #[default]
    All,
    Name,
    Phone,
    Email,
    Address,
}

impl CustomerField {
    /// All selectors in combo-box order
    pub const ALL: [CustomerField; 5] = [
        CustomerField::All,
        CustomerField::Name,
        CustomerField::Phone,
        CustomerField::Email,
        CustomerField::Address,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CustomerField::All => "All",
            CustomerField::Name => "Name",
            CustomerField::Phone => "Phone",
            CustomerField::Email => "Email",
            CustomerField::Address => "Address",
        }
    }
}

/// Searchable fields of an employee
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum EmployeeField {
    #[default]
    All,
    Name,
    Position,
    Phone,
    Email,
}

impl EmployeeField {
    /// All selectors in combo-box order
    pub const ALL: [EmployeeField; 5] = [
        EmployeeField::All,
        EmployeeField::Name,
        EmployeeField::Position,
        EmployeeField::Phone,
        EmployeeField::Email,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EmployeeField::All => "All",
            EmployeeField::Name => "Name",
            EmployeeField::Position => "Position",
            EmployeeField::Phone => "Phone",
            EmployeeField::Email => "Email",
        }
    }
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Price-range predicate: `min-max` is an inclusive range, a bare number
/// matches within ±10% of it. A malformed query matches nothing, so the
/// record is silently skipped rather than surfacing a parse error.
fn price_in_range(price: f64, query: &str) -> bool {
    if let Some((lo, hi)) = query.split_once('-') {
        match (lo.trim().parse::<f64>(), hi.trim().parse::<f64>()) {
            (Ok(min), Ok(max)) => price >= min && price <= max,
            _ => false,
        }
    } else {
        match query.trim().parse::<f64>() {
            Ok(target) => price >= target * 0.9 && price <= target * 1.1,
            Err(_) => false,
        }
    }
}

pub fn filter_cars(cars: &[Car], query: &str, field: CarField) -> Vec<Car> {
    if query.is_empty() {
        return cars.to_vec();
    }
    let q = query.to_lowercase();
    cars.iter()
        .filter(|car| car_matches(car, query, &q, field))
        .cloned()
        .collect()
}

fn car_matches(car: &Car, query: &str, query_lower: &str, field: CarField) -> bool {
    match field {
        CarField::All => {
            contains_ci(&car.make, query_lower)
                || contains_ci(&car.model, query_lower)
                || car.year.to_string().contains(query)
                || contains_ci(&car.color, query_lower)
                || car.price.to_string().contains(query)
                || contains_ci(car.status.label(), query_lower)
                || car.mileage.to_string().contains(query)
                || contains_ci(&car.vin, query_lower)
        }
        CarField::Make => contains_ci(&car.make, query_lower),
        CarField::Model => contains_ci(&car.model, query_lower),
        CarField::Year => car.year.to_string().contains(query),
        CarField::Color => contains_ci(&car.color, query_lower),
        CarField::PriceRange => price_in_range(car.price, query),
        CarField::Status => car.status.label().eq_ignore_ascii_case(query.trim()),
    }
}

/// Inventory status combo: `None` means "All"
pub fn filter_cars_by_status(cars: &[Car], status: Option<CarStatus>) -> Vec<Car> {
    match status {
        None => cars.to_vec(),
        Some(status) => cars
            .iter()
            .filter(|car| car.status == status)
            .cloned()
            .collect(),
    }
}

/// Search operates on resolved sale rows so that customer, car, and
/// salesperson queries match what the table displays, "Unknown" included.
pub fn filter_sales(sales: &[SaleView], query: &str, field: SaleField) -> Vec<SaleView> {
    if query.is_empty() {
        return sales.to_vec();
    }
    let q = query.to_lowercase();
    sales
        .iter()
        .filter(|view| sale_matches(view, query, &q, field))
        .cloned()
        .collect()
}

fn sale_matches(view: &SaleView, query: &str, query_lower: &str, field: SaleField) -> bool {
    match field {
        SaleField::All => {
            format_date(view.date).contains(query)
                || contains_ci(&view.customer_name, query_lower)
                || contains_ci(&view.car_details, query_lower)
                || view.price.to_string().contains(query)
                || contains_ci(&view.employee_name, query_lower)
                || contains_ci(view.payment_method.label(), query_lower)
        }
        SaleField::Customer => contains_ci(&view.customer_name, query_lower),
        SaleField::Car => contains_ci(&view.car_details, query_lower),
        SaleField::Salesperson => contains_ci(&view.employee_name, query_lower),
        SaleField::PaymentMethod => contains_ci(view.payment_method.label(), query_lower),
    }
}

pub fn filter_customers(
    customers: &[Customer],
    query: &str,
    field: CustomerField,
) -> Vec<Customer> {
    if query.is_empty() {
        return customers.to_vec();
    }
    let q = query.to_lowercase();
    customers
        .iter()
        .filter(|customer| customer_matches(customer, query, &q, field))
        .cloned()
        .collect()
}

fn customer_matches(
    customer: &Customer,
    query: &str,
    query_lower: &str,
    field: CustomerField,
) -> bool {
    match field {
        CustomerField::All => {
            contains_ci(&customer.name, query_lower)
                || customer.phone.contains(query)
                || contains_ci(&customer.email, query_lower)
                || contains_ci(&customer.address, query_lower)
        }
        CustomerField::Name => contains_ci(&customer.name, query_lower),
        CustomerField::Phone => customer.phone.contains(query),
        CustomerField::Email => contains_ci(&customer.email, query_lower),
        CustomerField::Address => contains_ci(&customer.address, query_lower),
    }
}

pub fn filter_employees(
    employees: &[Employee],
    query: &str,
    field: EmployeeField,
) -> Vec<Employee> {
    if query.is_empty() {
        return employees.to_vec();
    }
    let q = query.to_lowercase();
    employees
        .iter()
        .filter(|employee| employee_matches(employee, query, &q, field))
        .cloned()
        .collect()
}

fn employee_matches(
    employee: &Employee,
    query: &str,
    query_lower: &str,
    field: EmployeeField,
) -> bool {
    match field {
        EmployeeField::All => {
            contains_ci(&employee.name, query_lower)
                || contains_ci(employee.position.label(), query_lower)
                || employee.phone.contains(query)
                || contains_ci(&employee.email, query_lower)
        }
        EmployeeField::Name => contains_ci(&employee.name, query_lower),
        EmployeeField::Position => contains_ci(employee.position.label(), query_lower),
        EmployeeField::Phone => employee.phone.contains(query),
        EmployeeField::Email => contains_ci(&employee.email, query_lower),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PaymentMethod, Position};
    use chrono::NaiveDate;

    fn car(id: u32, make: &str, model: &str, price: f64, status: CarStatus) -> Car {
        Car {
            id,
            make: make.to_string(),
            model: model.to_string(),
            year: 2022,
            color: "Silver".to_string(),
            price,
            status,
            mileage: 15000,
            vin: format!("VIN{:05}", id),
        }
    }

    fn lot() -> Vec<Car> {
        vec![
            car(1, "Toyota", "Camry", 25000.0, CarStatus::Available),
            car(2, "Honda", "Accord", 28500.0, CarStatus::Sold),
            car(3, "Ford", "Mustang", 42000.0, CarStatus::InService),
        ]
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let cars = lot();
        let hits = filter_cars(&cars, "", CarField::All);
        assert_eq!(hits.len(), 3);
        assert_eq!(
            hits.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn test_all_field_matches_any_searchable_field() {
        let cars = lot();
        // Make, case-insensitive
        assert_eq!(filter_cars(&cars, "toyo", CarField::All).len(), 1);
        // VIN
        assert_eq!(filter_cars(&cars, "VIN00002", CarField::All).len(), 1);
        // Numeric substring on price
        assert_eq!(filter_cars(&cars, "28500", CarField::All).len(), 1);
        // No match
        assert!(filter_cars(&cars, "plymouth", CarField::All).is_empty());
    }

    #[test]
    fn test_named_field_only_matches_that_field() {
        let cars = lot();
        assert_eq!(filter_cars(&cars, "camry", CarField::Model).len(), 1);
        // "Camry" is not a make
        assert!(filter_cars(&cars, "camry", CarField::Make).is_empty());
    }

    #[test]
    fn test_price_range_inclusive() {
        let cars = lot();
        let hits = filter_cars(&cars, "20000-30000", CarField::PriceRange);
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);

        // Bounds are inclusive
        let exact = filter_cars(&cars, "25000-28500", CarField::PriceRange);
        assert_eq!(exact.len(), 2);
    }

    #[test]
    fn test_price_range_single_value_is_ten_percent_window() {
        let cars = lot();
        // [22500, 27500] catches only the Camry
        let hits = filter_cars(&cars, "25000", CarField::PriceRange);
        assert_eq!(hits.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn test_price_range_malformed_input_skips_records() {
        let cars = lot();
        assert!(filter_cars(&cars, "cheap", CarField::PriceRange).is_empty());
        assert!(filter_cars(&cars, "20k-30k", CarField::PriceRange).is_empty());
    }

    #[test]
    fn test_status_is_exact_case_insensitive_equality() {
        let cars = lot();
        assert_eq!(filter_cars(&cars, "sold", CarField::Status).len(), 1);
        assert_eq!(filter_cars(&cars, "in service", CarField::Status).len(), 1);
        // Substring is not enough for the status selector
        assert!(filter_cars(&cars, "sol", CarField::Status).is_empty());
    }

    #[test]
    fn test_filter_cars_by_status_combo() {
        let cars = lot();
        assert_eq!(filter_cars_by_status(&cars, None).len(), 3);
        let sold = filter_cars_by_status(&cars, Some(CarStatus::Sold));
        assert_eq!(sold.len(), 1);
        assert_eq!(sold[0].id, 2);
    }

    fn sale_view(customer: &str, car: &str, employee: &str) -> SaleView {
        SaleView {
            sale_id: 1,
            date: NaiveDate::from_ymd_opt(2023, 5, 15).unwrap(),
            customer_name: customer.to_string(),
            car_details: car.to_string(),
            price: 25000.0,
            employee_name: employee.to_string(),
            payment_method: PaymentMethod::CreditCard,
        }
    }

    #[test]
    fn test_filter_sales_by_each_field() {
        let views = vec![
            sale_view("John Doe", "Toyota Camry", "Sarah Smith"),
            sale_view("Jane Smith", "Honda Accord", "Mike Johnson"),
        ];
        assert_eq!(filter_sales(&views, "john d", SaleField::Customer).len(), 1);
        assert_eq!(filter_sales(&views, "accord", SaleField::Car).len(), 1);
        assert_eq!(
            filter_sales(&views, "sarah", SaleField::Salesperson).len(),
            1
        );
        assert_eq!(
            filter_sales(&views, "credit", SaleField::PaymentMethod).len(),
            2
        );
        // "smith" appears as a customer and a salesperson
        assert_eq!(filter_sales(&views, "smith", SaleField::All).len(), 2);
        // Date substring through the All selector
        assert_eq!(filter_sales(&views, "2023-05", SaleField::All).len(), 2);
    }

    #[test]
    fn test_filter_customers() {
        let customers = vec![
            Customer {
                id: 1,
                name: "John Doe".to_string(),
                phone: "555-0101".to_string(),
                email: "john@example.com".to_string(),
                address: "123 Main St".to_string(),
                driver_license: "DL1".to_string(),
            },
            Customer {
                id: 2,
                name: "Jane Smith".to_string(),
                phone: "555-0102".to_string(),
                email: "jane@example.com".to_string(),
                address: "456 Oak Ave".to_string(),
                driver_license: "DL2".to_string(),
            },
        ];
        assert_eq!(
            filter_customers(&customers, "0102", CustomerField::Phone).len(),
            1
        );
        assert_eq!(
            filter_customers(&customers, "example.com", CustomerField::Email).len(),
            2
        );
        assert_eq!(
            filter_customers(&customers, "oak", CustomerField::All).len(),
            1
        );
        // Driver license is not searchable, matching the legacy UI
        assert!(filter_customers(&customers, "DL1", CustomerField::All).is_empty());
    }

    #[test]
    fn test_filter_employees() {
        let employees = vec![
            Employee {
                id: 1,
                name: "Sarah Smith".to_string(),
                position: Position::Salesperson,
                phone: "555-0201".to_string(),
                email: "sarah@example.com".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
                salary: 45000.0,
                username: "sarah".to_string(),
                password: "password123".to_string(),
            },
            Employee {
                id: 2,
                name: "David Wilson".to_string(),
                position: Position::Manager,
                phone: "555-0203".to_string(),
                email: "david@example.com".to_string(),
                hire_date: NaiveDate::from_ymd_opt(2021, 11, 5).unwrap(),
                salary: 65000.0,
                username: "david".to_string(),
                password: "password123".to_string(),
            },
        ];
        assert_eq!(
            filter_employees(&employees, "manager", EmployeeField::Position).len(),
            1
        );
        assert_eq!(
            filter_employees(&employees, "wilson", EmployeeField::All).len(),
            1
        );
        assert_eq!(
            filter_employees(&employees, "0201", EmployeeField::Phone).len(),
            1
        );
    }
}
