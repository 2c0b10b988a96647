//! Command handlers

use chrono::NaiveDate;

use dealerdesk_app::config::Config;
use dealerdesk_app::DealershipService;
use dealerdesk_types::{parse_date, Result};

use crate::cli::{Cli, Commands, ExportTarget};
use crate::output;

fn parse_bound(bound: Option<&str>) -> Result<Option<NaiveDate>> {
    match bound {
        // An empty bound means unbounded on that side
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Ok(Some(parse_date(s)?)),
    }
}

pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let format = cli.format.unwrap_or(config.output_format);

    // Demo records are reloaded on every run; nothing persists
    let service = DealershipService::with_sample_data(config)?;

    match cli.command {
        Commands::Inventory {
            query,
            field,
            status,
        } => {
            let cars = service.search_inventory_by(&query, field, status);
            output::print_cars(format, &cars)?;
        }

        Commands::Customers { query, field } => {
            let rows: Vec<_> = service
                .search_customers(&query, field)
                .into_iter()
                .map(|customer| {
                    let summary = service.customer_summary(customer.id);
                    (customer, summary)
                })
                .collect();
            output::print_customers(format, &rows)?;
        }

        Commands::Employees { query, field } => {
            let rows: Vec<_> = service
                .search_employees(&query, field)
                .into_iter()
                .map(|employee| {
                    let sales = service.employee_sales(employee.id);
                    (employee, sales)
                })
                .collect();
            output::print_employees(format, &rows)?;
        }

        Commands::Sales {
            query,
            field,
            from,
            to,
        } => {
            let from = parse_bound(from.as_deref())?;
            let to = parse_bound(to.as_deref())?;
            let views = service.search_sales_between(&query, field, from, to);
            output::print_sales(format, &views)?;
        }

        Commands::Recent { count } => {
            let views = service.recent_sales(count);
            output::print_sales(format, &views)?;
        }

        Commands::Stats => {
            output::print_stats(format, &service.dashboard())?;
        }

        Commands::Export { target, output } => {
            let path = match target {
                ExportTarget::Inventory => service.export_inventory(output.as_deref())?,
                ExportTarget::Sales => service.export_sales(output.as_deref())?,
                ExportTarget::Customers => service.export_customers(output.as_deref())?,
                ExportTarget::Employees => service.export_employees(output.as_deref())?,
            };
            println!("Exported to {}", path.display());
        }

        Commands::Backup { output } => {
            let dir = service.backup_all(output.as_deref())?;
            println!("Backup written to {}", dir.display());
        }
    }

    Ok(())
}
