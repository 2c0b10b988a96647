//! CSV export for table views and backups
//!
//! Each export writes a header line followed by one line per row and
//! overwrites the target file. Values that embed the separator (the
//! formatted currency columns do) are quoted by the writer instead of
//! silently corrupting the row, which is the one deliberate departure from
//! the legacy export.

use std::path::Path;

use csv::WriterBuilder;

use dealerdesk_domain::model::{Car, Customer, Employee, Sale};
use dealerdesk_domain::service::reports::{customer_purchase_summary, SaleView};
use dealerdesk_types::{format_currency, format_date, Result};

pub const INVENTORY_HEADERS: [&str; 9] = [
    "ID", "Make", "Model", "Year", "Color", "Price", "Status", "Mileage", "VIN",
];
pub const SALES_HEADERS: [&str; 7] = [
    "ID", "Date", "Customer", "Car", "Price", "Salesperson", "Payment Method",
];
pub const CUSTOMERS_HEADERS: [&str; 7] = [
    "ID", "Name", "Phone", "Email", "Address", "Purchases", "Last Purchase",
];
pub const EMPLOYEES_HEADERS: [&str; 8] = [
    "ID", "Name", "Position", "Phone", "Email", "Hire Date", "Salary", "Sales",
];

/// Default export file names, matching the legacy Export buttons
pub const INVENTORY_EXPORT_FILE: &str = "inventory_export.csv";
pub const SALES_EXPORT_FILE: &str = "sales_export.csv";
pub const CUSTOMERS_EXPORT_FILE: &str = "customers_export.csv";
pub const EMPLOYEES_EXPORT_FILE: &str = "employees_export.csv";

/// Write a header row plus already-formatted value rows
pub fn write_csv<P: AsRef<Path>>(path: P, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .from_path(path.as_ref())?;
    writer.write_record(headers)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn export_inventory<P: AsRef<Path>>(path: P, cars: &[Car]) -> Result<()> {
    let rows: Vec<Vec<String>> = cars
        .iter()
        .map(|car| {
            vec![
                car.id.to_string(),
                car.make.clone(),
                car.model.clone(),
                car.year.to_string(),
                car.color.clone(),
                format_currency(car.price),
                car.status.label().to_string(),
                car.mileage.to_string(),
                car.vin.clone(),
            ]
        })
        .collect();
    write_csv(path, &INVENTORY_HEADERS, &rows)
}

pub fn export_sales<P: AsRef<Path>>(path: P, sales: &[SaleView]) -> Result<()> {
    let rows: Vec<Vec<String>> = sales
        .iter()
        .map(|view| {
            vec![
                view.sale_id.to_string(),
                format_date(view.date),
                view.customer_name.clone(),
                view.car_details.clone(),
                format_currency(view.price),
                view.employee_name.clone(),
                view.payment_method.label().to_string(),
            ]
        })
        .collect();
    write_csv(path, &SALES_HEADERS, &rows)
}

/// Customers export includes the derived purchase count and last purchase
/// date columns the customers table displays
pub fn export_customers<P: AsRef<Path>>(
    path: P,
    customers: &[Customer],
    sales: &[Sale],
) -> Result<()> {
    let rows: Vec<Vec<String>> = customers
        .iter()
        .map(|customer| {
            let summary = customer_purchase_summary(sales, customer.id);
            vec![
                customer.id.to_string(),
                customer.name.clone(),
                customer.phone.clone(),
                customer.email.clone(),
                customer.address.clone(),
                summary.count.to_string(),
                summary.last_purchase_label(),
            ]
        })
        .collect();
    write_csv(path, &CUSTOMERS_HEADERS, &rows)
}

pub fn export_employees<P: AsRef<Path>>(
    path: P,
    employees: &[Employee],
    sales: &[Sale],
) -> Result<()> {
    let rows: Vec<Vec<String>> = employees
        .iter()
        .map(|employee| {
            let sales_count = sales
                .iter()
                .filter(|s| s.employee_id == employee.id)
                .count();
            vec![
                employee.id.to_string(),
                employee.name.clone(),
                employee.position.label().to_string(),
                employee.phone.clone(),
                employee.email.clone(),
                format_date(employee.hire_date),
                format_currency(employee.salary),
                sales_count.to_string(),
            ]
        })
        .collect();
    write_csv(path, &EMPLOYEES_HEADERS, &rows)
}

/// Write the four fixed-name backup files into `dir`
pub fn backup_all(
    dir: &Path,
    cars: &[Car],
    customers: &[Customer],
    employees: &[Employee],
    sales: &[Sale],
    sale_views: &[SaleView],
) -> Result<()> {
    export_inventory(dir.join("cars_backup.csv"), cars)?;
    export_customers(dir.join("customers_backup.csv"), customers, sales)?;
    export_employees(dir.join("employees_backup.csv"), employees, sales)?;
    export_sales(dir.join("sales_backup.csv"), sale_views)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dealerdesk_domain::model::{CarStatus, PaymentMethod, Position};
    use dealerdesk_types::parse_date;

    #[test]
    fn test_write_csv_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = vec![
            vec!["1".to_string(), "a".to_string(), "b".to_string()],
            vec!["2".to_string(), "c".to_string(), String::new()],
        ];
        write_csv(&path, &["ID", "One", "Two"], &rows).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID,One,Two");
        assert_eq!(lines[1], "1,a,b");
        // Missing value renders as empty string, no trailing comma beyond it
        assert_eq!(lines[2], "2,c,");
        for line in lines {
            assert_eq!(line.matches(',').count(), 2);
        }
    }

    #[test]
    fn test_write_csv_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&path, &["A"], &[vec!["1".to_string()]]).unwrap();
        write_csv(&path, &["A"], &[vec!["2".to_string()]]).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.contains('2'));
        assert!(!content.contains('1'));
    }

    #[test]
    fn test_export_inventory_headers_and_quoting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.csv");
        let cars = vec![Car {
            id: 1,
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2022,
            color: "Silver".to_string(),
            price: 25000.0,
            status: CarStatus::Available,
            mileage: 15000,
            vin: "JT2BF22K1W0123456".to_string(),
        }];
        export_inventory(&path, &cars).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "ID,Make,Model,Year,Color,Price,Status,Mileage,VIN");
        // The formatted price embeds a comma, so it must come out quoted
        assert!(lines[1].contains("\"$25,000.00\""));
    }

    #[test]
    fn test_export_customers_includes_purchase_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("customers.csv");
        let customers = vec![Customer {
            id: 1,
            name: "John Doe".to_string(),
            phone: "555-0101".to_string(),
            email: "john@example.com".to_string(),
            address: "123 Main St".to_string(),
            driver_license: "DL1".to_string(),
        }];
        export_customers(&path, &customers, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Name,Phone,Email,Address,Purchases,Last Purchase"
        );
        assert!(lines[1].ends_with("0,Never"));
    }

    #[test]
    fn test_export_sales_headers_and_row() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sales.csv");
        let views = vec![SaleView {
            sale_id: 1,
            date: parse_date("2023-05-15").unwrap(),
            customer_name: "John Doe".to_string(),
            car_details: "Toyota Camry".to_string(),
            price: 25000.0,
            employee_name: "Sarah Smith".to_string(),
            payment_method: PaymentMethod::CreditCard,
        }];
        export_sales(&path, &views).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Date,Customer,Car,Price,Salesperson,Payment Method"
        );
        assert!(lines[1].starts_with("1,2023-05-15,John Doe,Toyota Camry,"));
        assert!(lines[1].ends_with("Credit Card"));
    }

    #[test]
    fn test_export_employees_headers_and_sales_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.csv");
        let employees = vec![Employee {
            id: 1,
            name: "Sarah Smith".to_string(),
            position: Position::Salesperson,
            phone: "555-0201".to_string(),
            email: "sarah@example.com".to_string(),
            hire_date: parse_date("2022-01-15").unwrap(),
            salary: 45000.0,
            username: "sarah".to_string(),
            password: "password123".to_string(),
        }];
        let sales = vec![Sale {
            id: 1,
            date: parse_date("2023-05-15").unwrap(),
            customer_id: 1,
            car_id: 1,
            price: 25000.0,
            employee_id: 1,
            payment_method: PaymentMethod::Cash,
        }];
        export_employees(&path, &employees, &sales).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines[0],
            "ID,Name,Position,Phone,Email,Hire Date,Salary,Sales"
        );
        assert!(lines[1].starts_with("1,Sarah Smith,Salesperson,"));
        assert!(lines[1].ends_with(",1"));
    }

    #[test]
    fn test_backup_all_writes_four_files() {
        let dir = tempfile::tempdir().unwrap();
        backup_all(dir.path(), &[], &[], &[], &[], &[]).unwrap();
        for name in [
            "cars_backup.csv",
            "customers_backup.csv",
            "employees_backup.csv",
            "sales_backup.csv",
        ] {
            assert!(dir.path().join(name).exists(), "missing {name}");
        }
    }
}
