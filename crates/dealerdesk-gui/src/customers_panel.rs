//! Customers tab: search, table with purchase history, add/edit form, CSV export

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use dealerdesk_app::DealershipService;
use dealerdesk_domain::model::Customer;
use dealerdesk_domain::service::CustomerField;
use dealerdesk_infra::export::CUSTOMERS_EXPORT_FILE;

#[derive(Default)]
struct CustomerForm {
    name: String,
    phone: String,
    email: String,
    address: String,
    driver_license: String,
}

impl CustomerForm {
    fn from_customer(customer: &Customer) -> Self {
        Self {
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            address: customer.address.clone(),
            driver_license: customer.driver_license.clone(),
        }
    }

    fn to_customer(&self, id: u32) -> Customer {
        Customer {
            id,
            name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            address: self.address.trim().to_string(),
            driver_license: self.driver_license.trim().to_string(),
        }
    }
}

pub struct CustomersPanel {
    query: String,
    field: CustomerField,
    form: CustomerForm,
    editing: Option<u32>,
    status_message: Option<(String, bool)>,
}

impl CustomersPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            field: CustomerField::All,
            form: CustomerForm::default(),
            editing: None,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        ui.heading("Customer Management");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(egui::TextEdit::singleline(&mut self.query).desired_width(180.0));

            egui::ComboBox::from_id_salt("customers_field")
                .selected_text(self.field.label())
                .show_ui(ui, |ui| {
                    for field in CustomerField::ALL {
                        ui.selectable_value(&mut self.field, field, field.label());
                    }
                });

            if ui.button("Export CSV").clicked() {
                self.export(service);
            }
        });
        ui.add_space(8.0);

        let customers = service.search_customers(&self.query, self.field);

        let mut pending_delete: Option<u32> = None;
        let mut pending_edit: Option<Customer> = None;

        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(30.0))
            .column(Column::auto().at_least(110.0))
            .columns(Column::auto().at_least(90.0), 2)
            .column(Column::auto().at_least(130.0))
            .columns(Column::auto().at_least(70.0), 2)
            .column(Column::auto().at_least(90.0))
            .column(Column::remainder().at_least(100.0))
            .header(20.0, |mut header| {
                for title in [
                    "ID",
                    "Name",
                    "Phone",
                    "Email",
                    "Address",
                    "License",
                    "Purchases",
                    "Last Purchase",
                    "",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for customer in &customers {
                    let summary = service.customer_summary(customer.id);
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(customer.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&customer.name);
                        });
                        row.col(|ui| {
                            ui.label(&customer.phone);
                        });
                        row.col(|ui| {
                            ui.label(&customer.email);
                        });
                        row.col(|ui| {
                            ui.label(&customer.address);
                        });
                        row.col(|ui| {
                            ui.label(&customer.driver_license);
                        });
                        row.col(|ui| {
                            ui.label(summary.count.to_string());
                        });
                        row.col(|ui| {
                            ui.label(summary.last_purchase_label());
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                pending_edit = Some(customer.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                pending_delete = Some(customer.id);
                            }
                        });
                    });
                }
            });

        if let Some(customer) = pending_edit {
            self.editing = Some(customer.id);
            self.form = CustomerForm::from_customer(&customer);
        }
        if let Some(id) = pending_delete {
            match service.delete_customer(id) {
                Ok(()) => self.set_status(format!("Customer {} deleted", id), false),
                Err(e) => self.set_status(e.to_string(), true),
            }
        }

        ui.add_space(8.0);
        let form_title = match self.editing {
            Some(id) => format!("Edit customer #{}", id),
            None => "Add customer".to_string(),
        };
        egui::CollapsingHeader::new(form_title)
            .default_open(false)
            .show(ui, |ui| {
                self.form_ui(ui, service);
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

    fn form_ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        egui::Grid::new("customer_form").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.form.name);
            ui.end_row();
            ui.label("Phone:");
            ui.text_edit_singleline(&mut self.form.phone);
            ui.end_row();
            ui.label("Email:");
            ui.text_edit_singleline(&mut self.form.email);
            ui.end_row();
            ui.label("Address:");
            ui.text_edit_singleline(&mut self.form.address);
            ui.end_row();
            ui.label("Driver License:");
            ui.text_edit_singleline(&mut self.form.driver_license);
            ui.end_row();
        });

        ui.horizontal(|ui| {
            let save_label = if self.editing.is_some() { "Save" } else { "Add" };
            if ui.button(save_label).clicked() {
                self.save(service);
            }
            if self.editing.is_some() && ui.button("Cancel").clicked() {
                self.editing = None;
                self.form = CustomerForm::default();
            }
        });
    }

    fn save(&mut self, service: &mut DealershipService) {
        let result = match self.editing {
            Some(id) => service
                .update_customer(self.form.to_customer(id))
                .map(|_| id),
            None => service.add_customer(self.form.to_customer(0)),
        };
        match result {
            Ok(id) => {
                self.set_status(format!("Customer {} saved", id), false);
                self.editing = None;
                self.form = CustomerForm::default();
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn export(&mut self, service: &DealershipService) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(CUSTOMERS_EXPORT_FILE)
            .save_file()
        else {
            return;
        };
        match service.export_customers(Some(&path)) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
            Err(e) => self.set_status(format!("Export failed: {}", e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some((message, is_error));
    }
}
