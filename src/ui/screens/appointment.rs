use std::fmt::Write;

use async_trait::async_trait;

use super::{Action, CrudScreen, Editable, Screen};
use crate::client::ClinicClient;
use crate::models::{datetime, Appointment, AppointmentPayload, Patient, User};
use crate::ui::form::{Form, FormError};
use crate::ui::router::Route;
use crate::ui::ScreenError;

impl Editable for Appointment {
    const TITLE: &'static str = "Appointment Management";
    const ROUTE: Route = Route::Appointments;
    const FIELDS: &'static [&'static str] = &["patient_id", "doctor_id", "appointment_time", "status"];

    fn form_values(&self) -> Vec<(&'static str, String)> {
        vec![
            ("patient_id", self.patient_id.to_string()),
            ("doctor_id", self.doctor_id.to_string()),
            ("appointment_time", datetime::format(&self.appointment_time)),
            ("status", self.status.clone()),
        ]
    }

    fn payload(form: &Form) -> Result<AppointmentPayload, FormError> {
        Ok(AppointmentPayload {
            patient_id: form.integer("patient_id")?,
            doctor_id: form.integer("doctor_id")?,
            appointment_time: form.datetime("appointment_time")?,
            status: form.text("status")?,
        })
    }

    fn row(&self) -> String {
        format!(
            "Patient ID: {}, Doctor ID: {}, Time: {}, Status: {}",
            self.patient_id,
            self.doctor_id,
            datetime::format(&self.appointment_time),
            self.status
        )
    }
}

/// Appointment list and form, plus the patient and doctor choices the form
/// offers.
pub struct AppointmentScreen {
    inner: CrudScreen<Appointment>,
    patients: Vec<Patient>,
    doctors: Vec<User>,
}

impl AppointmentScreen {
    pub fn new(client: ClinicClient) -> Self {
        Self {
            inner: CrudScreen::new(client),
            patients: Vec::new(),
            doctors: Vec::new(),
        }
    }

    pub fn appointments(&self) -> &[Appointment] {
        self.inner.items()
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[User] {
        &self.doctors
    }

    async fn load(&mut self) -> Result<(), ScreenError> {
        let client = self.inner.client();
        let (appointments, patients, doctors) = futures::try_join!(
            client.list::<Appointment>(&[]),
            client.list::<Patient>(&[]),
            client.doctors(),
        )?;
        self.inner.replace_items(appointments);
        self.patients = patients;
        self.doctors = doctors;
        Ok(())
    }
}

#[async_trait]
impl Screen for AppointmentScreen {
    fn route(&self) -> Route {
        Route::Appointments
    }

    async fn mount(&mut self) -> Result<(), ScreenError> {
        self.load().await
    }

    async fn handle(&mut self, action: Action) -> Result<(), ScreenError> {
        match action {
            Action::Refresh => self.load().await,
            other => self.inner.handle(other).await,
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", Appointment::TITLE);
        let _ = writeln!(out, "Patients:");
        for patient in &self.patients {
            let _ = writeln!(out, "  {}: {}", patient.id, patient.name);
        }
        let _ = writeln!(out, "Doctors:");
        for doctor in &self.doctors {
            let _ = writeln!(out, "  {}: {}", doctor.id, doctor.username);
        }
        self.inner.render_body(&mut out);
        out
    }
}
