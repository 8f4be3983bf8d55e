use std::fmt::Write;

use async_trait::async_trait;
use tracing::info;

use super::{find, Action, Screen};
use crate::client::ClinicClient;
use crate::models::{datetime, Appointment, Patient, Treatment, TreatmentPayload};
use crate::ui::form::Form;
use crate::ui::router::Route;
use crate::ui::ScreenError;

/// One doctor's appointments, the selected patient, and a treatment form.
pub struct DoctorScreen {
    client: ClinicClient,
    doctor_id: i64,
    appointments: Vec<Appointment>,
    selected: Option<Appointment>,
    patient: Option<Patient>,
    form: Form,
}

impl DoctorScreen {
    pub fn new(client: ClinicClient, doctor_id: i64) -> Self {
        Self {
            client,
            doctor_id,
            appointments: Vec::new(),
            selected: None,
            patient: None,
            form: Form::with_initial(&[("treatment_details", ""), ("amount", "0")]),
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn selected(&self) -> Option<&Appointment> {
        self.selected.as_ref()
    }

    pub fn patient(&self) -> Option<&Patient> {
        self.patient.as_ref()
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    async fn load(&mut self) -> Result<(), ScreenError> {
        self.appointments = self
            .client
            .list::<Appointment>(&[("doctor_id", self.doctor_id.to_string())])
            .await?;
        Ok(())
    }

    async fn select(&mut self, id: i64) -> Result<(), ScreenError> {
        let appointment = find(&self.appointments, id)?.clone();
        self.patient = None;
        let patient_id = appointment.patient_id;
        self.selected = Some(appointment);
        self.patient = Some(self.client.get::<Patient>(patient_id).await?);
        Ok(())
    }

    /// Treatments are write-only here: nothing is refetched afterwards.
    async fn submit(&mut self) -> Result<(), ScreenError> {
        let appointment = self.selected.as_ref().ok_or(ScreenError::NothingSelected)?;
        let payload = TreatmentPayload {
            appointment_id: appointment.id,
            treatment_details: self.form.text("treatment_details")?,
            amount: self.form.number("amount")?,
            paid: None,
        };
        let response = self.client.create::<Treatment>(&payload).await?;
        info!("{}", response.message);
        self.form.clear();
        Ok(())
    }
}

#[async_trait]
impl Screen for DoctorScreen {
    fn route(&self) -> Route {
        Route::Doctor
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        self.load().await
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        match action {
            Action::Set { field, value } => Ok(self.form.set(&field, value)?),
            Action::Select(id) => self.select(id).await,
            Action::Submit => self.submit().await,
            Action::Cancel => {
                self.form.clear();
                Ok(())
            }
            Action::Refresh => self.load().await,
            other => Err(ScreenError::Unsupported(other.name())),
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Doctor's Dashboard");
        let _ = writeln!(out, "Your Appointments");
        if self.appointments.is_empty() {
            let _ = writeln!(out, "  (none)");
        }
        let selected_id = self.selected.as_ref().map(|a| a.id);
        for appointment in &self.appointments {
            let marker = if Some(appointment.id) == selected_id { '>' } else { ' ' };
            let _ = writeln!(
                out,
                "{} #{} Patient ID: {}, Time: {}, Status: {}",
                marker,
                appointment.id,
                appointment.patient_id,
                datetime::format(&appointment.appointment_time),
                appointment.status
            );
        }

        if self.selected.is_none() {
            return out;
        }
        let _ = writeln!(out, "Patient Details");
        match &self.patient {
            Some(patient) => {
                let _ = writeln!(out, "  Name: {}", patient.name);
                let _ = writeln!(out, "  DOB: {}", patient.dob);
                let _ = writeln!(out, "  Phone: {}", patient.phone);
                let _ = writeln!(out, "  Email: {}", patient.email);
            }
            None => {
                let _ = writeln!(out, "  (not loaded)");
            }
        }
        let _ = writeln!(out, "Add Treatment");
        self.form.render(&mut out);
        let _ = writeln!(out, "[Add Treatment]");
        out
    }
}
