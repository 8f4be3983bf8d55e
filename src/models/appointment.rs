use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{datetime, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Appointment {
    pub id: i64,
    pub patient_id: i64,
    pub doctor_id: i64,
    #[serde(with = "datetime::local")]
    pub appointment_time: NaiveDateTime,
    pub status: String, // e.g., "scheduled", "completed", "cancelled"
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentPayload {
    pub patient_id: i64,
    pub doctor_id: i64,
    #[serde(with = "datetime::local")]
    pub appointment_time: NaiveDateTime,
    pub status: String,
}

/// Query string of `GET /appointments`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppointmentFilter {
    #[serde(default, deserialize_with = "crate::models::query::empty_as_none")]
    pub doctor_id: Option<i64>,
    #[serde(default, deserialize_with = "crate::models::query::empty_as_none")]
    pub patient_id: Option<i64>,
}

impl Resource for Appointment {
    type Payload = AppointmentPayload;
    const PATH: &'static str = "appointments";
    const LABEL: &'static str = "appointment";

    fn id(&self) -> i64 {
        self.id
    }
}
