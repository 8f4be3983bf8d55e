use super::{CrudScreen, Editable};
use crate::models::{Medication, MedicationPayload};
use crate::ui::form::{Form, FormError};
use crate::ui::router::Route;

pub type MedicationScreen = CrudScreen<Medication>;

impl Editable for Medication {
    const TITLE: &'static str = "Medication Management";
    const ROUTE: Route = Route::Medications;
    const FIELDS: &'static [&'static str] = &["name"];

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![("name", self.name.clone())]
    }

    fn payload(form: &Form) -> Result<MedicationPayload, FormError> {
        Ok(MedicationPayload { name: form.text("name")? })
    }

    fn row(&self) -> String {
        self.name.clone()
    }
}
