//! Derived report views joining sales against the other collections
//!
//! Every function here is a pure read over the slices it is given; nothing
//! is cached, each call rescans.

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::{Car, CarStatus, Customer, Employee, PaymentMethod, Sale};

/// Rendered in place of a name when a sale references a deleted record
pub const UNKNOWN: &str = "Unknown";

/// A sale with its foreign keys resolved for display
#[derive(Debug, Clone, Serialize)]
pub struct SaleView {
    pub sale_id: u32,
    pub date: NaiveDate,
    pub customer_name: String,
    /// "Make Model" of the car sold
    pub car_details: String,
    pub price: f64,
    pub employee_name: String,
    pub payment_method: PaymentMethod,
}

/// Resolve one sale against the current collections.
/// Dangling references render as "Unknown".
pub fn resolve_sale(
    sale: &Sale,
    cars: &[Car],
    customers: &[Customer],
    employees: &[Employee],
) -> SaleView {
    let customer_name = customers
        .iter()
        .find(|c| c.id == sale.customer_id)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    let car_details = cars
        .iter()
        .find(|c| c.id == sale.car_id)
        .map(|c| format!("{} {}", c.make, c.model))
        .unwrap_or_else(|| UNKNOWN.to_string());

    let employee_name = employees
        .iter()
        .find(|e| e.id == sale.employee_id)
        .map(|e| e.name.clone())
        .unwrap_or_else(|| UNKNOWN.to_string());

    SaleView {
        sale_id: sale.id,
        date: sale.date,
        customer_name,
        car_details,
        price: sale.price,
        employee_name,
        payment_method: sale.payment_method,
    }
}

/// Resolve every sale, preserving collection order
pub fn resolve_sales(
    sales: &[Sale],
    cars: &[Car],
    customers: &[Customer],
    employees: &[Employee],
) -> Vec<SaleView> {
    sales
        .iter()
        .map(|sale| resolve_sale(sale, cars, customers, employees))
        .collect()
}

/// The `n` most recent sales, newest first. Ties keep insertion order.
pub fn recent_sales(
    sales: &[Sale],
    cars: &[Car],
    customers: &[Customer],
    employees: &[Employee],
    n: usize,
) -> Vec<SaleView> {
    let mut ordered: Vec<&Sale> = sales.iter().collect();
    ordered.sort_by(|a, b| b.date.cmp(&a.date));
    ordered
        .into_iter()
        .take(n)
        .map(|sale| resolve_sale(sale, cars, customers, employees))
        .collect()
}

/// Counts and sums shown on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardStats {
    pub total_cars: usize,
    pub available_cars: usize,
    /// Sales recorded on `today`
    pub sold_today: usize,
    pub total_sales_amount: f64,
    pub customer_count: usize,
    pub employee_count: usize,
}

pub fn dashboard_stats(
    cars: &[Car],
    customers: &[Customer],
    employees: &[Employee],
    sales: &[Sale],
    today: NaiveDate,
) -> DashboardStats {
    DashboardStats {
        total_cars: cars.len(),
        available_cars: cars
            .iter()
            .filter(|c| c.status == CarStatus::Available)
            .count(),
        sold_today: sales.iter().filter(|s| s.date == today).count(),
        total_sales_amount: sales.iter().map(|s| s.price).sum(),
        customer_count: customers.len(),
        employee_count: employees.len(),
    }
}

/// Purchase history of one customer
#[derive(Debug, Clone, Serialize)]
pub struct PurchaseSummary {
    pub count: usize,
    pub last_purchase: Option<NaiveDate>,
}

impl PurchaseSummary {
    /// Display label for the last purchase column; "Never" when no sales
    pub fn last_purchase_label(&self) -> String {
        match self.last_purchase {
            Some(date) => dealerdesk_types::format_date(date),
            None => "Never".to_string(),
        }
    }
}

pub fn customer_purchase_summary(sales: &[Sale], customer_id: u32) -> PurchaseSummary {
    let mut count = 0;
    let mut last_purchase: Option<NaiveDate> = None;
    for sale in sales.iter().filter(|s| s.customer_id == customer_id) {
        count += 1;
        if last_purchase.map_or(true, |d| sale.date > d) {
            last_purchase = Some(sale.date);
        }
    }
    PurchaseSummary {
        count,
        last_purchase,
    }
}

pub fn employee_sales_count(sales: &[Sale], employee_id: u32) -> usize {
    sales.iter().filter(|s| s.employee_id == employee_id).count()
}

/// Sales within an inclusive date range. Either bound may be omitted;
/// both omitted returns everything.
pub fn filter_sales_by_date(
    sales: &[Sale],
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Sale> {
    sales
        .iter()
        .filter(|s| from.map_or(true, |d| s.date >= d) && to.map_or(true, |d| s.date <= d))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Position;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn sample_cars() -> Vec<Car> {
        vec![
            Car {
                id: 1,
                make: "Toyota".to_string(),
                model: "Camry".to_string(),
                year: 2022,
                color: "Silver".to_string(),
                price: 25000.0,
                status: CarStatus::Sold,
                mileage: 15000,
                vin: "JT2BF22K1W0123456".to_string(),
            },
            Car {
                id: 2,
                make: "Honda".to_string(),
                model: "Accord".to_string(),
                year: 2021,
                color: "Black".to_string(),
                price: 28500.0,
                status: CarStatus::Available,
                mileage: 22000,
                vin: "1HGCM82633A123456".to_string(),
            },
        ]
    }

    fn sample_customers() -> Vec<Customer> {
        vec![Customer {
            id: 1,
            name: "John Doe".to_string(),
            phone: "555-0101".to_string(),
            email: "john@example.com".to_string(),
            address: "123 Main St, Anytown".to_string(),
            driver_license: "DL12345678".to_string(),
        }]
    }

    fn sample_employees() -> Vec<Employee> {
        vec![Employee {
            id: 1,
            name: "Sarah Smith".to_string(),
            position: Position::Salesperson,
            phone: "555-0201".to_string(),
            email: "sarah@example.com".to_string(),
            hire_date: date("2022-01-15"),
            salary: 45000.0,
            username: "sarah".to_string(),
            password: "password123".to_string(),
        }]
    }

    fn sale(id: u32, day: &str, customer_id: u32, car_id: u32, employee_id: u32) -> Sale {
        Sale {
            id,
            date: date(day),
            customer_id,
            car_id,
            price: 25000.0,
            employee_id,
            payment_method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_resolve_sale_joins_names() {
        let view = resolve_sale(
            &sale(1, "2023-05-15", 1, 1, 1),
            &sample_cars(),
            &sample_customers(),
            &sample_employees(),
        );
        assert_eq!(view.customer_name, "John Doe");
        assert_eq!(view.car_details, "Toyota Camry");
        assert_eq!(view.employee_name, "Sarah Smith");
    }

    #[test]
    fn test_resolve_sale_dangling_references_are_unknown() {
        let view = resolve_sale(
            &sale(1, "2023-05-15", 99, 99, 99),
            &sample_cars(),
            &sample_customers(),
            &sample_employees(),
        );
        assert_eq!(view.customer_name, UNKNOWN);
        assert_eq!(view.car_details, UNKNOWN);
        assert_eq!(view.employee_name, UNKNOWN);
    }

    #[test]
    fn test_recent_sales_newest_first_and_limited() {
        let sales = vec![
            sale(1, "2023-05-13", 1, 1, 1),
            sale(2, "2023-05-15", 1, 1, 1),
            sale(3, "2023-05-14", 1, 2, 1),
        ];
        let recent = recent_sales(
            &sales,
            &sample_cars(),
            &sample_customers(),
            &sample_employees(),
            2,
        );
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].sale_id, 2);
        assert_eq!(recent[1].sale_id, 3);
    }

    #[test]
    fn test_recent_sales_ties_keep_insertion_order() {
        let sales = vec![
            sale(1, "2023-05-14", 1, 1, 1),
            sale(2, "2023-05-14", 1, 2, 1),
        ];
        let recent = recent_sales(
            &sales,
            &sample_cars(),
            &sample_customers(),
            &sample_employees(),
            5,
        );
        assert_eq!(recent[0].sale_id, 1);
        assert_eq!(recent[1].sale_id, 2);
    }

    #[test]
    fn test_dashboard_stats() {
        let sales = vec![
            sale(1, "2023-05-15", 1, 1, 1),
            sale(2, "2023-05-14", 1, 2, 1),
        ];
        let stats = dashboard_stats(
            &sample_cars(),
            &sample_customers(),
            &sample_employees(),
            &sales,
            date("2023-05-15"),
        );
        assert_eq!(stats.total_cars, 2);
        assert_eq!(stats.available_cars, 1);
        assert_eq!(stats.sold_today, 1);
        assert!((stats.total_sales_amount - 50000.0).abs() < f64::EPSILON);
        assert_eq!(stats.customer_count, 1);
        assert_eq!(stats.employee_count, 1);
    }

    #[test]
    fn test_customer_purchase_summary() {
        let sales = vec![
            sale(1, "2023-05-12", 7, 1, 1),
            sale(2, "2023-05-15", 7, 2, 1),
            sale(3, "2023-05-14", 8, 2, 1),
        ];
        let summary = customer_purchase_summary(&sales, 7);
        assert_eq!(summary.count, 2);
        assert_eq!(summary.last_purchase, Some(date("2023-05-15")));
        assert_eq!(summary.last_purchase_label(), "2023-05-15");
    }

    #[test]
    fn test_customer_purchase_summary_never() {
        let summary = customer_purchase_summary(&[], 7);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.last_purchase_label(), "Never");
    }

    #[test]
    fn test_employee_sales_count() {
        let sales = vec![
            sale(1, "2023-05-12", 1, 1, 3),
            sale(2, "2023-05-13", 1, 2, 3),
            sale(3, "2023-05-14", 1, 2, 4),
        ];
        assert_eq!(employee_sales_count(&sales, 3), 2);
        assert_eq!(employee_sales_count(&sales, 4), 1);
        assert_eq!(employee_sales_count(&sales, 5), 0);
    }

    #[test]
    fn test_filter_sales_by_date_inclusive_bounds() {
        let sales = vec![
            sale(1, "2023-05-12", 1, 1, 1),
            sale(2, "2023-05-13", 1, 1, 1),
            sale(3, "2023-05-15", 1, 1, 1),
        ];
        let hits = filter_sales_by_date(&sales, Some(date("2023-05-12")), Some(date("2023-05-13")));
        assert_eq!(hits.len(), 2);

        let from_only = filter_sales_by_date(&sales, Some(date("2023-05-13")), None);
        assert_eq!(from_only.len(), 2);

        let to_only = filter_sales_by_date(&sales, None, Some(date("2023-05-12")));
        assert_eq!(to_only.len(), 1);

        let unbounded = filter_sales_by_date(&sales, None, None);
        assert_eq!(unbounded.len(), 3);
    }
}
