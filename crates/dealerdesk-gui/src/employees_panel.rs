//! Employees tab: search, table with sales counts, add/edit form, CSV export

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use dealerdesk_app::service::parse_number;
use dealerdesk_app::DealershipService;
use dealerdesk_domain::model::{Employee, Position};
use dealerdesk_domain::service::EmployeeField;
use dealerdesk_infra::export::EMPLOYEES_EXPORT_FILE;
use dealerdesk_types::{format_currency, format_date, parse_date};

struct EmployeeForm {
    name: String,
    position: Position,
    phone: String,
    email: String,
    hire_date: String,
    salary: String,
    username: String,
    password: String,
}

impl Default for EmployeeForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            position: Position::Salesperson,
            phone: String::new(),
            email: String::new(),
            hire_date: format_date(chrono::Local::now().date_naive()),
            salary: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

impl EmployeeForm {
    fn from_employee(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            position: employee.position,
            phone: employee.phone.clone(),
            email: employee.email.clone(),
            hire_date: format_date(employee.hire_date),
            salary: employee.salary.to_string(),
            username: employee.username.clone(),
            password: employee.password.clone(),
        }
    }

    fn to_employee(&self, id: u32) -> dealerdesk_types::Result<Employee> {
        Ok(Employee {
            id,
            name: self.name.trim().to_string(),
            position: self.position,
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
            hire_date: parse_date(&self.hire_date)?,
            salary: parse_number("salary", &self.salary)?,
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

pub struct EmployeesPanel {
    query: String,
    field: EmployeeField,
    form: EmployeeForm,
    editing: Option<u32>,
    status_message: Option<(String, bool)>,
}

impl EmployeesPanel {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            field: EmployeeField::All,
            form: EmployeeForm::default(),
            editing: None,
            status_message: None,
        }
    }

    pub fn ui(&mut self, ui: &mut Ui, service: &mut DealershipService) {
        ui.heading("Employee Management");
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.label("Search:");
            ui.add(egui::TextEdit::singleline(&mut self.query).desired_width(180.0));

            egui::ComboBox::from_id_salt("employees_field")
                .selected_text(self.field.label())
                .show_ui(ui, |ui| {
                    for field in EmployeeField::ALL {
                        ui.selectable_value(&mut self.field, field, field.label());
                    }
                });

            if ui.button("Export CSV").clicked() {
                self.export(service);
            }
        });
        ui.add_space(8.0);

        let employees = service.search_employees(&self.query, self.field);

        let mut pending_delete: Option<u32> = None;
        let mut pending_edit: Option<Employee> = None;

        TableBuilder::new(ui)
            .striped(true)
            .max_scroll_height(300.0)
            .column(Column::auto().at_least(30.0))
            .column(Column::auto().at_least(110.0))
            .columns(Column::auto().at_least(90.0), 3)
            .column(Column::auto().at_least(80.0))
            .columns(Column::auto().at_least(70.0), 2)
            .column(Column::remainder().at_least(100.0))
            .header(20.0, |mut header| {
                for title in [
                    "ID",
                    "Name",
                    "Position",
                    "Phone",
                    "Email",
                    "Hire Date",
                    "Salary",
                    "Sales",
                    "",
                ] {
                    header.col(|ui| {
                        ui.strong(title);
                    });
                }
            })
            .body(|mut body| {
                for employee in &employees {
                    let sales = service.employee_sales(employee.id);
                    body.row(20.0, |mut row| {
                        row.col(|ui| {
                            ui.label(employee.id.to_string());
                        });
                        row.col(|ui| {
                            ui.label(&employee.name);
                        });
                        row.col(|ui| {
                            ui.label(employee.position.label());
                        });
                        row.col(|ui| {
                            ui.label(&employee.phone);
                        });
                        row.col(|ui| {
                            ui.label(&employee.email);
                        });
                        row.col(|ui| {
                            ui.label(format_date(employee.hire_date));
                        });
                        row.col(|ui| {
                            ui.label(format_currency(employee.salary));
                        });
                        row.col(|ui| {
                            ui.label(sales.to_string());
                        });
                        row.col(|ui| {
                            if ui.small_button("Edit").clicked() {
                                pending_edit = Some(employee.clone());
                            }
                            if ui.small_button("Delete").clicked() {
                                pending_delete = Some(employee.id);
                            }
                        });
                    });
                }
            });

        if let Some(employee) = pending_edit {
            self.editing = Some(employee.id);
            self.form = EmployeeForm::from_employee(&employee);
        }
        if let Some(id) = pending_delete {
            match service.delete_employee(id) {
                Ok(()) => self.set_status(format!("Employee {} deleted", id), false),
                Err(e) => self.set_status(e.to_string(), true),
            }
        }

        ui.add_space(8.0);
        let form_title = match self.editing {
            Some(id) => format!("Edit employee #{}", id),
            None => "Add employee".to_string(),
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
        egui::Grid::new("employee_form").num_columns(2).show(ui, |ui| {
            ui.label("Name:");
            ui.text_edit_singleline(&mut self.form.name);
            ui.end_row();
            ui.label("Position:");
            egui::ComboBox::from_id_salt("employee_form_position")
                .selected_text(self.form.position.label())
                .show_ui(ui, |ui| {
                    for position in Position::ALL {
                        ui.selectable_value(&mut self.form.position, position, position.label());
                    }
                });
            ui.end_row();
            ui.label("Phone:");
            ui.text_edit_singleline(&mut self.form.phone);
            ui.end_row();
            ui.label("Email:");
            ui.text_edit_singleline(&mut self.form.email);
            ui.end_row();
            ui.label("Hire Date:");
            ui.text_edit_singleline(&mut self.form.hire_date);
            ui.end_row();
            ui.label("Salary:");
            ui.text_edit_singleline(&mut self.form.salary);
            ui.end_row();
            ui.label("Username:");
            ui.text_edit_singleline(&mut self.form.username);
            ui.end_row();
            ui.label("Password:");
            ui.add(egui::TextEdit::singleline(&mut self.form.password).password(true));
            ui.end_row();
        });

        ui.horizontal(|ui| {
            let save_label = if self.editing.is_some() { "Save" } else { "Add" };
            if ui.button(save_label).clicked() {
                self.save(service);
            }
            if self.editing.is_some() && ui.button("Cancel").clicked() {
                self.editing = None;
                self.form = EmployeeForm::default();
            }
        });
    }

    fn save(&mut self, service: &mut DealershipService) {
        let result = match self.editing {
            Some(id) => self
                .form
                .to_employee(id)
                .and_then(|employee| service.update_employee(employee).map(|_| id)),
            None => self
                .form
                .to_employee(0)
                .and_then(|employee| service.add_employee(employee)),
        };
        match result {
            Ok(id) => {
                self.set_status(format!("Employee {} saved", id), false);
                self.editing = None;
                self.form = EmployeeForm::default();
            }
            Err(e) => self.set_status(e.to_string(), true),
        }
    }

    fn export(&mut self, service: &DealershipService) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EMPLOYEES_EXPORT_FILE)
            .save_file()
        else {
            return;
        };
        match service.export_employees(Some(&path)) {
            Ok(path) => self.set_status(format!("Exported to {}", path.display()), false),
            Err(e) => self.set_status(format!("Export failed: {}", e), true),
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = Some((message, is_error));
    }
}
