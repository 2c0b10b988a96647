//! Dealerdesk desktop UI
//!
//! A login gate in front of a tabbed main window. All business logic lives
//! in the service layer; the panels only render and forward input.

mod customers_panel;
mod dashboard_panel;
mod employees_panel;
mod inventory_panel;
mod sales_panel;

use eframe::egui::{self, Color32, RichText};

use dealerdesk_app::auth;
use dealerdesk_app::config::Config;
use dealerdesk_app::DealershipService;

use customers_panel::CustomersPanel;
use employees_panel::EmployeesPanel;
use inventory_panel::InventoryPanel;
use sales_panel::SalesPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Dashboard,
    Inventory,
    Sales,
    Customers,
    Employees,
}

impl Tab {
    const ALL: [Tab; 5] = [
        Tab::Dashboard,
        Tab::Inventory,
        Tab::Sales,
        Tab::Customers,
        Tab::Employees,
    ];

    fn label(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Inventory => "Inventory",
            Tab::Sales => "Sales",
            Tab::Customers => "Customers",
            Tab::Employees => "Employees",
        }
    }
}

struct DealerdeskApp {
    service: DealershipService,
    logged_in: bool,
    username: String,
    password: String,
    login_error: Option<String>,
    active_tab: Tab,
    inventory: InventoryPanel,
    sales: SalesPanel,
    customers: CustomersPanel,
    employees: EmployeesPanel,
}

impl DealerdeskApp {
    fn new() -> Result<Self, dealerdesk_types::Error> {
        let config = Config::load()?;
        // Demo records are reloaded on every launch; nothing persists
        let service = DealershipService::with_sample_data(config)?;
        Ok(Self {
            service,
            logged_in: false,
            username: String::new(),
            password: String::new(),
            login_error: None,
            active_tab: Tab::Dashboard,
            inventory: InventoryPanel::new(),
            sales: SalesPanel::new(),
            customers: CustomersPanel::new(),
            employees: EmployeesPanel::new(),
        })
    }

    fn login_ui(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(120.0);
            ui.heading("Dealerdesk");
            ui.label("Car dealership management");
            ui.add_space(24.0);

            ui.label("Username");
            ui.add(egui::TextEdit::singleline(&mut self.username).desired_width(200.0));
            ui.label("Password");
            ui.add(
                egui::TextEdit::singleline(&mut self.password)
                    .password(true)
                    .desired_width(200.0),
            );
            ui.add_space(12.0);

            let submitted = ui.button("Login").clicked()
                || ui.input(|i| i.key_pressed(egui::Key::Enter));
            if submitted {
                if auth::authenticate(&self.username, &self.password) {
                    self.logged_in = true;
                    self.login_error = None;
                    self.password.clear();
                } else {
                    self.login_error = Some("Invalid username or password".to_string());
                }
            }

            if let Some(ref error) = self.login_error {
                ui.add_space(8.0);
                ui.label(RichText::new(error).color(Color32::LIGHT_RED));
            }
        });
    }
}

impl eframe::App for DealerdeskApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.logged_in {
                self.login_ui(ui);
                return;
            }

            ui.horizontal(|ui| {
                for tab in Tab::ALL {
                    ui.selectable_value(&mut self.active_tab, tab, tab.label());
                }
            });
            ui.separator();

            match self.active_tab {
                Tab::Dashboard => dashboard_panel::ui(ui, &self.service),
                Tab::Inventory => self.inventory.ui(ui, &mut self.service),
                Tab::Sales => self.sales.ui(ui, &mut self.service),
                Tab::Customers => self.customers.ui(ui, &mut self.service),
                Tab::Employees => self.employees.ui(ui, &mut self.service),
            }
        });
    }
}

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 780.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Dealerdesk",
        options,
        Box::new(|_cc| {
            let app = DealerdeskApp::new()
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> { Box::new(e) })?;
            Ok(Box::new(app))
        }),
    )
}
