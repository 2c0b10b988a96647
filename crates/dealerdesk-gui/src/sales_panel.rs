//! Sales tab: search, date-range filter, new sale form, CSV export

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use dealerdesk_app::service::parse_number;
use dealerdesk_app::DealershipService;
use dealerdesk_domain::model::PaymentMethod;
use dealerdesk_domain::service::{SaleField, SaleView};
use dealerdesk_infra::export::SALES_EXPORT_FILE;
use dealerdesk_types::{format_currency, format_date, parse_date};

pub struct SalesPanel {
    query: String,
    field: SaleField,
    from_input: String,
    to_input: String,
    /// Applied date-range bounds; set by the Filter button
    date_range: Option<(Option<chrono::NaiveDate>, Option<chrono::NaiveDate>)>,
    // New sale form
    customer_id: Option<u32>,
    car_id: Option<u32>,
    employee_id: Option<u32>,
    price: String,
    date: String,
    payment_method: PaymentMethod,
    status_message: Option<(String, bool)>,
}

impl SalesPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            field: SaleField::All,
            from_input: String::new(),
            to_input: String::new(),
            date_range: None,
            customer_id: None,
            car_id: None,
            employee_id: None,
            price: String::new(),
            date: format_date(chrono::Local::now().date_naive()),
            payment_method: PaymentMethod::Cash,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        ui.heading("Sales Management");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(egui::TextEdit::singleline(&mut self.query).desired_width(160.0));

            egui::ComboBox::from_id_salt("sales_field")
                .selected_text(self.field.label())
                .show_ui(ui, |ui| {
                    for field in SaleField::ALL {
                        ui.selectable_value(&mut self.field, field, field.label());
                    }
                });

            ui.label("From:");
            ui.add(egui::TextEdit::singleline(&mut self.from_input).desired_width(90.0));
            ui.label("To:");
            ui.add(egui::TextEdit::singleline(&mut self.to_input).desired_width(90.0));
            if ui.button("Filter").clicked() {
                self.apply_date_filter();
            }
            if ui.button("Clear").clicked() {
                self.date_range = None;
                self.from_input.clear();
                self.to_input.clear();
                self.query.clear();
            }

            if ui.button("Export CSV").clicked() {
                self.export(service);
            }
        });
        ui.add_space(8.0);

        let views: Vec<SaleView> = match self.date_range {
            Some((from, to)) => {
                service.search_sales_between(&self.query, self.field, from, to)
            }
            None => service.search_sales(&self.query, self.field),
        };

        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(280.0)
            .column(Column::auto().at_least(30.0))
            .column(Column::auto().at_least(90.0))
            .columns(Column::auto().at_least(120.0), 2)
            .column(Column::auto().at_least(90.0))
            .column(Column::auto().at_least(120.0))
            .column(Column::remainder().at_least(100.0))
            .header(20.0, |mut header| {
                for title in [
                    "ID",
                    "Date",
                    "Customer",
                    "Car",
                    "Price",
                    "Salesperson",
                    "Payment Method",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for view in &views {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(view.sale_id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(format_date(view.date));
                        });
                        row.col(|ui| {
                            ui.label(&view.customer_name);
                        });
                        row.col(|ui| {
                            ui.label(&view.car_details);
                        });
                        row.col(|ui| {
                            ui.label(format_currency(view.price));
                        });
                        row.col(|ui| {
                            ui.label(&view.employee_name);
                        });
                        row.col(|ui| {
                            ui.label(view.payment_method.label());
                        });
                    });
                }
            });

        ui.add_space(8.0);
        egui::CollapsingHeader::new("New sale")
            .default_open(false)
            .show(ui, |ui| {
                self.new_sale_ui(ui, service);
            });

        if let Some((message, is_error)) = &self.status_message {
            let color = if *is_error {
                Color32::LIGHT_RED
            } else {
                Color32::LIGHT_GREEN
            };
            ui.add_space(4.0);
            ui.label(RichText::new(message).color(color));
        }
    }

    fn apply_date_filter(&mut self) {
        let parse_bound = |input: &str| -> dealerdesk_types::Result<Option<chrono::NaiveDate>> {
            if input.trim().is_empty() {
                Ok(None)
            } else {
                parse_date(input).map(Some)
            }
        };
        match (
            parse_bound(&self.from_input),
            parse_bound(&self.to_input),
        ) {
            (Ok(None), Ok(None)) => self.date_range = None,
            (Ok(from), Ok(to)) => {
                self.date_range = Some((from, to));
                self.status_message = None;
            }
            (Err(e), _) | (_, Err(e)) => self.set_status(e.to_string(), true),
        }
    }

    fn new_sale_ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        // Only cars still on the lot can be sold
        let available = service.available_cars();
        let customers = service.search_customers("", Default::default());
        let employees = service.search_employees("", Default::default());

        egui::Grid::new("sale_form").num_columns(2).show(ui, |ui| {
            ui.label("Customer:");
            let customer_text = self
                .customer_id
                .and_then(|id| customers.iter().find(|c| c.id == id))
                .map_or("Select".to_string(), |c| c.name.clone());
            egui::ComboBox::from_id_salt("sale_customer")
                .selected_text(customer_text)
                .show_ui(ui, |ui| {
                    for customer in &customers {
                        ui.selectable_value(
                            &mut self.customer_id,
                            Some(customer.id),
                            &customer.name,
                        );
                    }
                });
            ui.end_row();

            ui.label("Car:");
            let car_text = self
                .car_id
                .and_then(|id| available.iter().find(|c| c.id == id))
                .map_or("Select".to_string(), |c| format!("{} {}", c.make, c.model));
            egui::ComboBox::from_id_salt("sale_car")
                .selected_text(car_text)
                .show_ui(ui, |ui| {
                    for car in &available {
                        let label =
                            format!("{} {} ({})", car.make, car.model, format_currency(car.price));
                        if ui
                            .selectable_value(&mut self.car_id, Some(car.id), label)
                            .clicked()
                        {
                            // Pre-fill the asking price, still editable
                            self.price = car.price.to_string();
                        }
                    }
                });
            ui.end_row();

            ui.label("Salesperson:");
            let employee_text = self
                .employee_id
                .and_then(|id| employees.iter().find(|e| e.id == id))
                .map_or("Select".to_string(), |e| e.name.clone());
            egui::ComboBox::from_id_salt("sale_employee")
                .selected_text(employee_text)
                .show_ui(ui, |ui| {
                    for employee in &employees {
                        ui.selectable_value(
                            &mut self.employee_id,
                            Some(employee.id),
                            &employee.name,
                        );
                    }
                });
            ui.end_row();

            ui.label("Price:");
            ui.text_edit_singleline(&mut self.price);
            ui.end_row();

            ui.label("Date:");
            ui.text_edit_singleline(&mut self.date);
            ui.end_row();

            ui.label("Payment:");
            egui::ComboBox::from_id_salt("sale_payment")
                .selected_text(self.payment_method.label())
                .show_ui(ui, |ui| {
                    for method in PaymentMethod::ALL {
                        ui.selectable_value(&mut self.payment_method, method, method.label());
                    }
                });
            ui.end_row();
        });

        if ui.button("Record Sale").clicked() {
            self.record(service);
        }
    }

    fn record(&mut self, service: &mut DealershipService) {
        let result = (|| -> dealerdesk_types::Result<u32> {
            let customer_id = self
                .customer_id
                .ok_or(dealerdesk_types::Error::MissingField("customer"))?;
            let car_id = self
                .car_id
                .ok_or(dealerdesk_types::Error::MissingField("car"))?;
            let employee_id = self
                .employee_id
                .ok_or(dealerdesk_types::Error::MissingField("salesperson"))?;
            let price = parse_number("price", &self.price)?;
            let date = parse_date(&self.date)?;
            service.record_sale(
                date,
                customer_id,
                car_id,
                price,
                employee_id,
                self.payment_method,
            )
        })();

        match result {
            Ok(id) => {
                self.set_status(format!("Sale {} recorded", id), false);
                self.car_id = None;
                self.price.clear();
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn export(&mut self, service: &DealershipService) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(SALES_EXPORT_FILE)
            .save_file()
        else {
            return;
        };
        match service.export_sales(Some(&path)) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
            Err(e) => self.set_status(format!("Export failed: {}", e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some((message, is_error));
    }
}
