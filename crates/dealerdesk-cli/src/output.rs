//! Output formatting module

use serde::Serialize;

use dealerdesk_domain::model::{Car, Customer, Employee};
use dealerdesk_domain::service::{DashboardStats, PurchaseSummary, SaleView};
use dealerdesk_types::{format_currency, format_date, OutputFormat, Result};

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}

pub fn print_cars(format: OutputFormat, cars: &[Car]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(cars)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<10} {:<12} {:<6} {:<8} {:>12} {:<11} {:>8}  {:<17}",
        "ID", "Make", "Model", "Year", "Color", "Price", "Status", "Mileage", "VIN"
    );
    println!("{}", "-".repeat(96));
    for car in cars {
        println!(
            "{:<4} {:<10} {:<12} {:<6} {:<8} {:>12} {:<11} {:>8}  {:<17}",
            car.id,
            truncate_str(&car.make, 10),
            truncate_str(&car.model, 12),
            car.year,
            truncate_str(&car.color, 8),
            format_currency(car.price),
            car.status.label(),
            car.mileage,
            truncate_str(&car.vin, 17),
        );
    }
    println!("\n{} car(s)", cars.len());
    Ok(())
}

/// Customer plus the derived purchase columns the customers table shows
#[derive(Serialize)]
struct CustomerRow<'a> {
    #[serde(flatten)]
    customer: &'a Customer,
    purchases: usize,
    last_purchase: String,
}

pub fn print_customers(
    format: OutputFormat,
    customers: &[(Customer, PurchaseSummary)],
) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<CustomerRow> = customers
            .iter()
            .map(|(customer, summary)| CustomerRow {
                customer,
                purchases: summary.count,
                last_purchase: summary.last_purchase_label(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:<10} {:<22} {:<26} {:>9} {:<12}",
        "ID", "Name", "Phone", "Email", "Address", "Purchases", "Last Purchase"
    );
    println!("{}", "-".repeat(104));
    for (customer, summary) in customers {
        println!(
            "{:<4} {:<16} {:<10} {:<22} {:<26} {:>9} {:<12}",
            customer.id,
            truncate_str(&customer.name, 16),
            truncate_str(&customer.phone, 10),
            truncate_str(&customer.email, 22),
            truncate_str(&customer.address, 26),
            summary.count,
            summary.last_purchase_label(),
        );
    }
    println!("\n{} customer(s)", customers.len());
    Ok(())
}

#[derive(Serialize)]
struct EmployeeRow<'a> {
    #[serde(flatten)]
    employee: &'a Employee,
    sales: usize,
}

pub fn print_employees(format: OutputFormat, employees: &[(Employee, usize)]) -> Result<()> {
    if format == OutputFormat::Json {
        let rows: Vec<EmployeeRow> = employees
            .iter()
            .map(|(employee, sales)| EmployeeRow {
                employee,
                sales: *sales,
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<16} {:<13} {:<10} {:<22} {:<11} {:>12} {:>6}",
        "ID", "Name", "Position", "Phone", "Email", "Hire Date", "Salary", "Sales"
    );
    println!("{}", "-".repeat(100));
    for (employee, sales) in employees {
        println!(
            "{:<4} {:<16} {:<13} {:<10} {:<22} {:<11} {:>12} {:>6}",
            employee.id,
            truncate_str(&employee.name, 16),
            employee.position.label(),
            truncate_str(&employee.phone, 10),
            truncate_str(&employee.email, 22),
            format_date(employee.hire_date),
            format_currency(employee.salary),
            sales,
        );
    }
    println!("\n{} employee(s)", employees.len());
    Ok(())
}

pub fn print_sales(format: OutputFormat, sales: &[SaleView]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(sales)?);
        return Ok(());
    }

    println!(
        "{:<4} {:<11} {:<16} {:<18} {:>12} {:<16} {:<12}",
        "ID", "Date", "Customer", "Car", "Price", "Salesperson", "Payment"
    );
    println!("{}", "-".repeat(94));
    for view in sales {
        println!(
            "{:<4} {:<11} {:<16} {:<18} {:>12} {:<16} {:<12}",
            view.sale_id,
            format_date(view.date),
            truncate_str(&view.customer_name, 16),
            truncate_str(&view.car_details, 18),
            format_currency(view.price),
            truncate_str(&view.employee_name, 16),
            view.payment_method.label(),
        );
    }
    println!("\n{} sale(s)", sales.len());
    Ok(())
}

pub fn print_stats(format: OutputFormat, stats: &DashboardStats) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("\nDashboard");
    println!("=========");
    println!("Total cars:      {}", stats.total_cars);
    println!("Available cars:  {}", stats.available_cars);
    println!("Sold today:      {}", stats.sold_today);
    println!(
        "Total sales:     {}",
        format_currency(stats.total_sales_amount)
    );
    println!("Customers:       {}", stats.customer_count);
    println!("Employees:       {}", stats.employee_count);
    Ok(())
}
