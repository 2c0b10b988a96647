//! Domain services: free-text search and derived report views

pub mod reports;
pub mod search;

pub use reports::{
    customer_purchase_summary, dashboard_stats, employee_sales_count, filter_sales_by_date,
    recent_sales, resolve_sale, resolve_sales, DashboardStats, PurchaseSummary, SaleView,
};
pub use search::{
    filter_cars, filter_cars_by_status, filter_customers, filter_employees, filter_sales,
    CarField, CustomerField, EmployeeField, SaleField,
};
