//! Dashboard tab: stat cards and recent sales activity

use eframe::egui::{self, RichText, Ui};

use dealerdesk_app::DealershipService;
use dealerdesk_types::{format_currency, format_date};

fn stat_card(ui: &mut Ui, title: &str, value: &str) {
    ui.group(|ui| {
        ui.set_min_width(160.0);
        ui.vertical(|ui| {
            ui.label(title);
            ui.label(RichText::new(value).size(24.0).strong());
        });
    });
}

pub fn ui(ui: &mut Ui, service: &DealershipService) {
    ui.heading("Dashboard Overview");
    ui.label(format!(
        "Today: {}",
        format_date(chrono::Local::now().date_naive())
    ));
    ui.add_space(8.0);

    let stats = service.dashboard();
    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Total Cars", &stats.total_cars.to_string());
        stat_card(ui, "Available Cars", &stats.available_cars.to_string());
        stat_card(ui, "Sold Today", &stats.sold_today.to_string());
        stat_card(ui, "Total Sales", &format_currency(stats.total_sales_amount));
        stat_card(ui, "Customers", &stats.customer_count.to_string());
        stat_card(ui, "Employees", &stats.employee_count.to_string());
    });

    ui.add_space(16.0);
    ui.strong("Recent Sales Activity");
    ui.add_space(4.0);

    let recent = service.recent_sales(5);
    egui::Grid::new("recent_sales")
        .striped(true)
        .num_columns(5)
        .show(ui, |ui| {
            ui.strong("Date");
            ui.strong("Customer");
            ui.strong("Car");
            ui.strong("Amount");
            ui.strong("Salesperson");
            ui.end_row();

            for view in &recent {
                ui.label(format_date(view.date));
                ui.label(&view.customer_name);
                ui.label(&view.car_details);
                ui.label(format_currency(view.price));
                ui.label(&view.employee_name);
                ui.end_row();
            }
        });
}
