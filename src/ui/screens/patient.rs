use super::{CrudScreen, Editable};
use crate::models::{Patient, PatientPayload};
use crate::ui::form::{Form, FormError};
use crate::ui::router::Route;

pub type PatientScreen = CrudScreen<Patient>;

impl Editable for Patient {
    const TITLE: &'static str = "Patient Management";
    const ROUTE: Route = Route::Patients;
    const FIELDS: &'static [&'static str] = &["name", "dob", "address", "phone", "email"];

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("dob", self.dob.format("%Y-%m-%d").to_string()),
            ("address", self.address.clone()),
            ("phone", self.phone.clone()),
            ("email", self.email.clone()),
        ]
    }

    fn payload(form: &Form) -> Result<PatientPayload, FormError> {
        Ok(PatientPayload {
            name: form.text("name")?,
            dob: form.date("dob")?,
            address: form.text("address")?,
            phone: form.text("phone")?,
            email: form.text("email")?,
        })
    }

    fn row(&self) -> String {
        format!("{} - {}", self.name, self.email)
    }
}
