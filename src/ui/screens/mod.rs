//! The routed screens.
//!
//! Patients, medications and visitors are plain [`CrudScreen`]s; the other
//! screens wrap or replace that template where they need extra lookups or a
//! selection.

mod appointment;
mod billing;
mod doctor;
mod medication;
mod patient;
mod receptionist;
mod visitor;

pub use appointment::AppointmentScreen;
pub use billing::BillingScreen;
pub use doctor::DoctorScreen;
pub use medication::MedicationScreen;
pub use patient::PatientScreen;
pub use receptionist::ReceptionistScreen;
pub use visitor::VisitorScreen;

use std::fmt::Write;

use async_trait::async_trait;
use tracing::debug;

use super::form::{Form, FormError};
use super::router::Route;
use super::ScreenError;
use crate::client::ClinicClient;
use crate::models::Resource;

/// A user action forwarded from the console to the active screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Set { field: String, value: String },
    Edit(i64),
    Select(i64),
    Submit,
    Delete(i64),
    Cancel,
    Refresh,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Set { .. } => "set",
            Action::Edit(_) => "edit",
            Action::Select(_) => "select",
            Action::Submit => "submit",
            Action::Delete(_) => "delete",
            Action::Cancel => "cancel",
            Action::Refresh => "refresh",
        }
    }
}

#[async_trait]
pub trait Screen: Send {
    fn route(&self) -> Route;

    /// Initial fetch; called once when the screen is navigated to.
    async fn mount(&mut self) -> Result<(), ScreenError>;

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError>;

    fn render(&self) -> String;
}

/// A record type editable through the generic create/update/delete screen.
pub trait Editable: Resource {
    const TITLE: &'static str;
    const ROUTE: Route;
    const FIELDS: &'static [&'static str];

    /// Current values, in form-field text shape.
    fn form_values(&self) -> Vec<(&'static str, String)>;

    /// Decode the form into a request body.
    fn payload(form: &Form) -> Result<Self::Payload, FormError>;

    /// One list row, without the id.
    fn row(&self) -> String;
}

/// List + form screen: create when idle, update while editing a record.
pub struct CrudScreen<R: Editable> {
    client: ClinicClient,
    items: Vec<R>,
    form: Form,
    editing: Option<i64>,
}

impl<R: Editable> CrudScreen<R> {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            client,
            items: Vec::new(),
            form: Form::new(R::FIELDS),
            editing: None,
        }
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    /// Id of the record being edited, if any.
    pub fn editing(&self) -> Option<i64> {
        self.editing
    }

    pub async fn refresh(&mut self) -> Result<(), ScreenError> {
        self.items = self.client.list::<R>(&[]).await?;
        debug!("Fetched {} {}", self.items.len(), R::PATH);
        Ok(())
    }

    pub fn set_field(&mut self, field: &str, value: impl Into<String>) -> Result<(), ScreenError> {
        Ok(self.form.set(field, value)?)
    }

    pub fn edit(&mut self, id: i64) -> Result<(), ScreenError> {
        let record = find(&self.items, id)?;
        let values = record.form_values();
        self.form.clear();
        for (field, value) in values {
            self.form.set(field, value)?;
        }
        self.editing = Some(id);
        Ok(())
    }

    pub fn cancel(&mut self) {
        self.form.clear();
        self.editing = None;
    }

    /// PUT while editing, POST otherwise; then reset the form and refetch.
    pub async fn submit(&mut self) -> Result<(), ScreenError> {
        let payload = R::payload(&self.form)?;
        match self.editing {
            Some(id) => {
                self.client.update::<R>(id, &payload).await?;
                self.editing = None;
            }
            None => {
                self.client.create::<R>(&payload).await?;
            }
        }
        self.form.clear();
        self.refresh().await
    }

    pub async fn delete(&mut self, id: i64) -> Result<(), ScreenError> {
        self.client.delete::<R>(id).await?;
        self.refresh().await
    }

    fn replace_items(&mut self, items: Vec<R>) {
        self.items = items;
    }

    fn client(&self) -> &ClinicClient {
        &self.client
    }

    fn render_body(&self, out: &mut String) {
        render_form(out, &self.form, self.editing);
        let _ = writeln!(out, "Records:");
        render_rows(out, &self.items, |item| item.row());
    }
}

#[async_trait]
impl<R: Editable> Screen for CrudScreen<R> {
    fn route(&self) -> Route {
        R::ROUTE
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        self.refresh().await
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        match action {
            Action::Set { field, value } => self.set_field(&field, value),
            Action::Edit(id) => self.edit(id),
            Action::Submit => self.submit().await,
            Action::Delete(id) => self.delete(id).await,
            Action::Cancel => {
                self.cancel();
                Ok(())
            }
            Action::Refresh => self.refresh().await,
            other => Err(ScreenError::Unsupported(other.name())),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", R::TITLE);
        self.render_body(&mut out);
        out
    }
}

pub struct HomeScreen;

#[async_trait]
impl Screen for HomeScreen {
    fn route(&self) -> Route {
        Route::Home
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        Ok(())
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        Err(ScreenError::Unsupported(action.name()))
    }

    fn render(&self) -> String {
        "Home\n".to_string()
    }
}

fn find<R: Resource>(items: &[R], id: i64) -> Result<&R, ScreenError> {
    items
        .iter()
        .find(|item| item.id() == id)
        .ok_or(ScreenError::UnknownRecord(id))
}

fn render_form(out: &mut String, form: &Form, editing: Option<i64>) {
    match editing {
        Some(id) => {
            let _ = writeln!(out, "Editing #{}:", id);
        }
        None => {
            let _ = writeln!(out, "New:");
        }
    }
    form.render(out);
    let _ = writeln!(out, "[{}]", if editing.is_some() { "Update" } else { "Create" });
}

fn render_rows<T: Resource>(out: &mut String, items: &[T], row: impl Fn(&T) -> String) {
    if items.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for item in items {
        let _ = writeln!(out, "  #{} {}", item.id(), row(item));
    }
}
