//! Dealership facade the CLI and GUI call
//!
//! Owns the record store and the loaded preferences, validates input at the
//! edge, and delegates query and report work to the domain services. Every
//! error is terminal to the one attempted operation; nothing here aborts
//! the process.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{Local, NaiveDate};

use dealerdesk_domain::model::{Car, Customer, Employee, PaymentMethod};
use dealerdesk_domain::service::{
    customer_purchase_summary, dashboard_stats, employee_sales_count, filter_cars,
    filter_cars_by_status, filter_customers, filter_employees, filter_sales,
    filter_sales_by_date, recent_sales, resolve_sales, CarField, CustomerField, DashboardStats,
    EmployeeField, PurchaseSummary, SaleField, SaleView,
};
use dealerdesk_domain::model::CarStatus;
use dealerdesk_infra::export;
use dealerdesk_store::DealershipStore;
use dealerdesk_types::{Error, Result};

use crate::config::Config;

/// Parse a numeric form field, reporting the field name on failure
pub fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(Error::MissingField(field));
    }
    Ok(())
}

pub struct DealershipService {
    store: DealershipStore,
    config: Config,
}

impl DealershipService {
    /// An empty dealership
    pub fn new(config: Config) -> Self {
        Self {
            store: DealershipStore::new(),
            config,
        }
    }

    /// A dealership loaded with the demo records, as every launch starts
    pub fn with_sample_data(config: Config) -> Result<Self> {
        Ok(Self {
            store: DealershipStore::with_sample_data()?,
            config,
        })
    }

    pub fn store(&self) -> &DealershipStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    // Queries

    pub fn search_inventory(&self, query: &str, field: CarField) -> Vec<Car> {
        filter_cars(self.store.cars(), query, field)
    }

    /// Text search narrowed by the optional status filter; both apply
    pub fn search_inventory_by(
        &self,
        query: &str,
        field: CarField,
        status: Option<CarStatus>,
    ) -> Vec<Car> {
        filter_cars_by_status(&filter_cars(self.store.cars(), query, field), status)
    }

    pub fn inventory_by_status(&self, status: Option<CarStatus>) -> Vec<Car> {
        filter_cars_by_status(self.store.cars(), status)
    }

    /// Cars that can still be sold, for the new-sale picker
    pub fn available_cars(&self) -> Vec<Car> {
        self.inventory_by_status(Some(CarStatus::Available))
    }

    pub fn sales_views(&self) -> Vec<SaleView> {
        resolve_sales(
            self.store.sales(),
            self.store.cars(),
            self.store.customers(),
            self.store.employees(),
        )
    }

    pub fn search_sales(&self, query: &str, field: SaleField) -> Vec<SaleView> {
        filter_sales(&self.sales_views(), query, field)
    }

    /// Sales within an inclusive date range, resolved for display
    pub fn sales_between(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<SaleView> {
        let in_range = filter_sales_by_date(self.store.sales(), from, to);
        resolve_sales(
            &in_range,
            self.store.cars(),
            self.store.customers(),
            self.store.employees(),
        )
    }

    /// Text search applied on top of the inclusive date range
    pub fn search_sales_between(
        &self,
        query: &str,
        field: SaleField,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<SaleView> {
        filter_sales(&self.sales_between(from, to), query, field)
    }

    pub fn recent_sales(&self, n: usize) -> Vec<SaleView> {
        recent_sales(
            self.store.sales(),
            self.store.cars(),
            self.store.customers(),
            self.store.employees(),
            n,
        )
    }

    pub fn search_customers(&self, query: &str, field: CustomerField) -> Vec<Customer> {
        filter_customers(self.store.customers(), query, field)
    }

    pub fn search_employees(&self, query: &str, field: EmployeeField) -> Vec<Employee> {
        filter_employees(self.store.employees(), query, field)
    }

    pub fn customer_summary(&self, customer_id: u32) -> PurchaseSummary {
        customer_purchase_summary(self.store.sales(), customer_id)
    }

    pub fn employee_sales(&self, employee_id: u32) -> usize {
        employee_sales_count(self.store.sales(), employee_id)
    }

    /// Dashboard counters, with "today" taken from the local clock
    pub fn dashboard(&self) -> DashboardStats {
        self.dashboard_for(Local::now().date_naive())
    }

    pub fn dashboard_for(&self, today: NaiveDate) -> DashboardStats {
        dashboard_stats(
            self.store.cars(),
            self.store.customers(),
            self.store.employees(),
            self.store.sales(),
            today,
        )
    }

    // Mutations

    pub fn add_car(&mut self, car: Car) -> Result<u32> {
        require("make", &car.make)?;
        require("model", &car.model)?;
        Ok(self.store.add_car(car))
    }

    pub fn update_car(&mut self, car: Car) -> Result<()> {
        require("make", &car.make)?;
        require("model", &car.model)?;
        self.store.update_car(car)
    }

    pub fn delete_car(&mut self, id: u32) -> Result<()> {
        self.store.remove_car(id)
    }

    pub fn add_customer(&mut self, customer: Customer) -> Result<u32> {
        require("name", &customer.name)?;
        require("phone", &customer.phone)?;
        Ok(self.store.add_customer(customer))
    }

    pub fn update_customer(&mut self, customer: Customer) -> Result<()> {
        require("name", &customer.name)?;
        require("phone", &customer.phone)?;
        self.store.update_customer(customer)
    }

    pub fn delete_customer(&mut self, id: u32) -> Result<()> {
        self.store.remove_customer(id)
    }

    pub fn add_employee(&mut self, employee: Employee) -> Result<u32> {
        require("name", &employee.name)?;
        require("username", &employee.username)?;
        require("password", &employee.password)?;
        Ok(self.store.add_employee(employee))
    }

    pub fn update_employee(&mut self, employee: Employee) -> Result<()> {
        require("name", &employee.name)?;
        require("username", &employee.username)?;
        require("password", &employee.password)?;
        self.store.update_employee(employee)
    }

    pub fn delete_employee(&mut self, id: u32) -> Result<()> {
        self.store.remove_employee(id)
    }

    pub fn record_sale(
        &mut self,
        date: NaiveDate,
        customer_id: u32,
        car_id: u32,
        price: f64,
        employee_id: u32,
        payment_method: PaymentMethod,
    ) -> Result<u32> {
        self.store
            .record_sale(date, customer_id, car_id, price, employee_id, payment_method)
    }

    // Exports

    fn export_path(&self, file_name: &str, target: Option<&Path>) -> Result<PathBuf> {
        match target {
            Some(path) => Ok(path.to_path_buf()),
            None => Ok(self.config.export_dir()?.join(file_name)),
        }
    }

    /// Export the inventory table; returns the file written
    pub fn export_inventory(&self, target: Option<&Path>) -> Result<PathBuf> {
        let path = self.export_path(export::INVENTORY_EXPORT_FILE, target)?;
        export::export_inventory(&path, self.store.cars())?;
        Ok(path)
    }

    pub fn export_sales(&self, target: Option<&Path>) -> Result<PathBuf> {
        let path = self.export_path(export::SALES_EXPORT_FILE, target)?;
        export::export_sales(&path, &self.sales_views())?;
        Ok(path)
    }

    pub fn export_customers(&self, target: Option<&Path>) -> Result<PathBuf> {
        let path = self.export_path(export::CUSTOMERS_EXPORT_FILE, target)?;
        export::export_customers(&path, self.store.customers(), self.store.sales())?;
        Ok(path)
    }

    pub fn export_employees(&self, target: Option<&Path>) -> Result<PathBuf> {
        let path = self.export_path(export::EMPLOYEES_EXPORT_FILE, target)?;
        export::export_employees(&path, self.store.employees(), self.store.sales())?;
        Ok(path)
    }

    /// Write all four backup files; returns the directory used
    pub fn backup_all(&self, target: Option<&Path>) -> Result<PathBuf> {
        let dir = match target {
            Some(path) => path.to_path_buf(),
            None => self.config.export_dir()?,
        };
        export::backup_all(
            &dir,
            self.store.cars(),
            self.store.customers(),
            self.store.employees(),
            self.store.sales(),
            &self.sales_views(),
        )?;
        Ok(dir)
    }
}
