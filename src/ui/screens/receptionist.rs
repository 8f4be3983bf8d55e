use std::fmt::Write;

use async_trait::async_trait;

use super::{find, Action, Editable, Screen};
use crate::client::ClinicClient;
use crate::models::{Appointment, Treatment};
use crate::ui::router::Route;
use crate::ui::ScreenError;

/// All appointments; selecting one shows what should be collected for it.
pub struct ReceptionistScreen {
    client: ClinicClient,
    appointments: Vec<Appointment>,
    selected: Option<Appointment>,
    treatment: Option<Treatment>,
}

impl ReceptionistScreen {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            client,
            appointments: Vec::new(),
            selected: None,
            treatment: None,
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn treatment(&self) -> Option<&Treatment> {
        self.treatment.as_ref()
    }

    async fn load(&mut self) -> Result<(), ScreenError> {
        self.appointments = self.client.list::<Appointment>(&[]).await?;
        Ok(())
    }

    /// Only the first treatment recorded for the appointment is shown. A failed
    /// lookup leaves the previous selection in place.
    async fn select(&mut self, id: i64) -> Result<(), ScreenError> {
        let appointment = find(&self.appointments, id)?.clone();
        let treatments = self
            .client
            .list::<Treatment>(&[("appointment_id", id.to_string())])
            .await?;
        self.selected = Some(appointment);
        self.treatment = treatments.into_iter().next();
        Ok(())
    }
}

#[async_trait]
impl Screen for ReceptionistScreen {
    fn route(&self) -> Route {
        Route::Receptionist
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        self.load().await
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        match action {
            Action::Select(id) => self.select(id).await,
            Action::Refresh => self.load().await,
            other => Err(ScreenError::Unsupported(other.name())),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Receptionist's Dashboard");
        let _ = writeln!(out, "All Appointments");
        if self.appointments.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        let selected_id = self.selected.as_ref().map(|a| a.id);
        for appointment in &self.appointments {
            let marker = if Some(appointment.id) == selected_id { '>' } else { ' ' };
            let _ = writeln!(out, "{} #{} {}", marker, appointment.id, appointment.row());
        }

        if self.selected.is_none() {
            return out;
        }
        match &self.treatment {
            Some(treatment) => {
                let _ = writeln!(out, "Treatment Details");
                let _ = writeln!(out, "  {}", treatment.treatment_details);
                let _ = writeln!(out, "Amount to be Collected");
                let _ = writeln!(out, "  ${}", treatment.amount);
            }
            None => {
                let _ = writeln!(out, "No treatment details for this appointment.");
            }
        }
        out
    }
}
