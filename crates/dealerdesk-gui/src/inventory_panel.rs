//! Inventory tab: search, table, add/edit form, CSV export

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use dealerdesk_app::service::parse_number;
use dealerdesk_app::DealershipService;
use dealerdesk_domain::model::{Car, CarStatus};
use dealerdesk_domain::service::CarField;
use dealerdesk_infra::export::INVENTORY_EXPORT_FILE;
use dealerdesk_types::format_currency;

#[derive(Default)]
struct CarForm {
    make: String,
    model: String,
    year: String,
    color: String,
    price: String,
    mileage: String,
    vin: String,
    status: CarStatus,
}

impl CarForm {
    fn from_car(car: &Car) -> Self {
        Self {
            make: car.make.clone(),
            model: car.model.clone(),
            year: car.year.to_string(),
            color: car.color.clone(),
            price: car.price.to_string(),
            mileage: car.mileage.to_string(),
            vin: car.vin.clone(),
            status: car.status,
        }
    }

    /// Parse the form into a record; numeric fields abort with a parse error
    fn to_car(&self, id: u32) -> dealerdesk_types::Result<Car> {
        Ok(Car {
            id,
            make: self.make.trim().to_string(),
            model: self.model.trim().to_string(),
            year: parse_number("year", &self.year)?,
            color: self.color.trim().to_string(),
            price: parse_number("price", &self.price)?,
            status: self.status,
            mileage: parse_number("mileage", &self.mileage)?,
            vin: self.vin.trim().to_string(),
        })
    }
}

pub struct InventoryPanel {
    query: String,
    field: CarField,
    status_filter: Option<CarStatus>,
    form: CarForm,
    /// Id of the car being edited; `None` means the form adds a new car
    editing: Option<u32>,
    status_message: Option<(String, bool)>,
}

impl InventoryPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            field: CarField::All,
            status_filter: None,
            form: CarForm::default(),
            editing: None,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        ui.heading("Inventory Management");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(egui::TextEdit::singleline(&mut self.query).desired_width(180.0));

            egui::ComboBox::from_id_salt("inventory_field")
                .selected_text(self.field.label())
                .show_ui(ui, |ui| {
                    for field in CarField::ALL {
                        ui.selectable_value(&mut self.field, field, field.label());
                    }
                });

            ui.label("Status:");
            egui::ComboBox::from_id_salt("inventory_status")
                .selected_text(
                    self.status_filter
                        .map_or("All", |s| s.label()),
                )
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.status_filter, None, "All");
                    for status in CarStatus::ALL {
                        ui.selectable_value(&mut self.status_filter, Some(status), status.label());
                    }
                });

            if ui.button("Export CSV").clicked() {
                self.export(service);
            }
        });
        ui.add_space(8.0);

        let cars: Vec<Car> =
            service.search_inventory_by(&self.query, self.field, self.status_filter);

        let mut pending_delete: Option<u32> = None;
        let mut pending_edit: Option<Car> = None;

        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(30.0))
            .columns(Column::auto().at_least(70.0), 4)
            .column(Column::auto().at_least(90.0))
            .columns(Column::auto().at_least(70.0), 2)
            .column(Column::remainder().at_least(140.0))
            .column(Column::auto().at_least(100.0))
            .header(20.0, |mut header| {
                for title in [
                    "ID", "Make", "Model", "Year", "Color", "Price", "Status", "Mileage", "VIN",
                    "",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for car in &cars {
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(car.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&car.make);
                        });
                        row.col(|ui| {
                            ui.label(&car.model);
                        });
                        row.col(|ui| {
                            ui.label(car.year.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&car.color);
                        });
                        row.col(|ui| {
                            ui.label(format_currency(car.price));
                        });
                        row.col(|ui| {
                            ui.label(car.status.label());
                        });
                        row.col(|ui| {
                            ui.label(car.mileage.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&car.vin);
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                pending_edit = Some(car.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                pending_delete = Some(car.id);
                            }
                        });
                    });
                }
            });

        if let Some(car) = pending_edit {
            self.editing = Some(car.id);
            self.form = CarForm::from_car(&car);
        }
        if let Some(id) = pending_delete {
            match service.delete_car(id) {
                Ok(()) => self.set_status(format!("Car {} deleted", id), false),
                Err(e) => self.set_status(e.to_string(), true),
            }
        }

        ui.add_space(8.0);
        let form_title = match self.editing {
            Some(id) => format!("Edit car #{}", id),
            None => "Add car".to_string(),
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
        egui::Grid::new("car_form").num_columns(2).show(ui, |ui| {
            ui.label("Make:");
            ui.text_edit_singleline(&mut self.form.make);
            ui.end_row();
            ui.label("Model:");
            ui.text_edit_singleline(&mut self.form.model);
            ui.end_row();
            ui.label("Year:");
            ui.text_edit_singleline(&mut self.form.year);
            ui.end_row();
            ui.label("Color:");
            ui.text_edit_singleline(&mut self.form.color);
            ui.end_row();
            ui.label("Price:");
            ui.text_edit_singleline(&mut self.form.price);
            ui.end_row();
            ui.label("Mileage:");
            ui.text_edit_singleline(&mut self.form.mileage);
            ui.end_row();
            ui.label("VIN:");
            ui.text_edit_singleline(&mut self.form.vin);
            ui.end_row();
            ui.label("Status:");
            egui::ComboBox::from_id_salt("car_form_status")
                .selected_text(self.form.status.label())
                .show_ui(ui, |ui| {
                    for status in CarStatus::ALL {
                        ui.selectable_value(&mut self.form.status, status, status.label());
                    }
                });
            ui.end_row();
        });

        ui.horizontal(|ui| {
            let save_label = if self.editing.is_some() { "Save" } else { "Add" };
            if ui.button(save_label).clicked() {
                self.save(service);
            }
            if self.editing.is_some() && ui.button("Cancel").clicked() {
                self.editing = None;
                self.form = CarForm::default();
            }
        });
    }

    fn save(&mut self, service: &mut DealershipService) {
        let result = match self.editing {
            Some(id) => self
                .form
                .to_car(id)
                .and_then(|car| service.update_car(car).map(|_| id)),
            None => self.form.to_car(0).and_then(|car| service.add_car(car)),
        };
        match result {
            Ok(id) => {
                self.set_status(format!("Car {} saved", id), false);
                self.editing = None;
                self.form = CarForm::default();
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn export(&mut self, service: &DealershipService) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(INVENTORY_EXPORT_FILE)
            .save_file()
        else {
            return;
        };
        match service.export_inventory(Some(&path)) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
            Err(e) => self.set_status(format!("Export failed: {}", e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some((message, is_error));
    }
}
