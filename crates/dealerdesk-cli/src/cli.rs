//! CLI definition using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use dealerdesk_domain::model::CarStatus;
use dealerdesk_domain::service::{CarField, CustomerField, EmployeeField, SaleField};
use dealerdesk_types::OutputFormat;

#[derive(Parser)]
#[command(name = "dealerdesk")]
#[command(version)]
#[command(about = "Car dealership inventory, sales, and customer management")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List or search the car inventory
    Inventory {
        /// Free-text query; empty lists everything
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Field to search (price-range takes "min-max" or a single number)
        #[arg(long, value_enum, default_value_t = CarField::All)]
        field: CarField,

        /// Show only cars with this status
        #[arg(long, value_enum)]
        status: Option<CarStatus>,
    },

    /// List or search customers
    Customers {
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        #[arg(long, value_enum, default_value_t = CustomerField::All)]
        field: CustomerField,
    },

    /// List or search employees
    Employees {
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        #[arg(long, value_enum, default_value_t = EmployeeField::All)]
        field: EmployeeField,
    },

    /// List or search sales
    Sales {
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        #[arg(long, value_enum, default_value_t = SaleField::All)]
        field: SaleField,

        /// Start of date range, YYYY-MM-DD inclusive
        #[arg(long)]
        from: Option<String>,

        /// End of date range, YYYY-MM-DD inclusive
        #[arg(long)]
        to: Option<String>,
    },

    /// Show the most recent sales
    Recent {
        /// How many sales to show
        #[arg(long, short = 'n', default_value_t = 5)]
        count: usize,
    },

    /// Show the dashboard statistics
    Stats,

    /// Export one table to CSV
    Export {
        /// Which table to export
        #[arg(value_enum)]
        target: ExportTarget,

        /// Output file (defaults to the configured export directory)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Write all four backup CSV files
    Backup {
        /// Output directory (defaults to the configured export directory)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportTarget {
    Inventory,
    Sales,
    Customers,
    Employees,
}
