use super::{CrudScreen, Editable};
use crate::models::{datetime, Visitor, VisitorPayload};
use crate::ui::form::{Form, FormError};
use crate::ui::router::Route;

pub type VisitorScreen = CrudScreen<Visitor>;

impl Editable for Visitor {
    const TITLE: &'static str = "Visitor Management";
    const ROUTE: Route = Route::Visitors;
    const FIELDS: &'static [&'static str] = &["name", "purpose", "arrival_time", "departure_time"];

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("name", self.name.clone()),
            ("purpose", self.purpose.clone()),
            ("arrival_time", datetime::format(&self.arrival_time)),
            (
                "departure_time",
                self.departure_time.as_ref().map(datetime::format).unwrap_or_default(),
            ),
        ]
    }

    fn payload(form: &Form) -> Result<VisitorPayload, FormError> {
        Ok(VisitorPayload {
            name: form.text("name")?,
            purpose: form.text("purpose")?,
            arrival_time: form.datetime("arrival_time")?,
            departure_time: form.optional_datetime("departure_time")?,
        })
    }

    fn row(&self) -> String {
        format!("{} - {}", self.name, self.purpose)
    }
}
