//! Clinic data models
//!
//! Records as they travel between the REST service, the SQLite store and the
//! admin console. Identifiers are assigned by the database.

pub mod appointment;
pub mod datetime;
pub mod invoice;
pub mod medication;
pub mod patient;
pub mod query;
pub mod treatment;
pub mod user;
pub mod visitor;

pub use appointment::{Appointment, AppointmentFilter, AppointmentPayload};
pub use invoice::{Invoice, InvoicePayload};
pub use medication::{Medication, MedicationPayload, PrescribedMedication, PrescriptionPayload};
pub use patient::{Patient, PatientPayload};
pub use treatment::{Treatment, TreatmentFilter, TreatmentPayload};
pub use user::{NewUser, User, UserFilter};
pub use visitor::{Visitor, VisitorPayload};

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// A collection exposed at `/{PATH}` with `/{PATH}/{id}` for single records.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Body of create and update requests.
    type Payload: Serialize + Send + Sync;

    const PATH: &'static str;
    /// Lower-case singular, used in response messages.
    const LABEL: &'static str;

    fn id(&self) -> i64;
}

/// Body returned by every write endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl MessageResponse {
    pub fn created(label: &str, id: i64) -> Self {
        Self {
            message: format!("New {} created.", label),
            id: Some(id),
        }
    }

    pub fn updated(label: &str) -> Self {
        Self {
            message: format!("{} updated.", capitalize(label)),
            id: None,
        }
    }

    pub fn deleted(label: &str) -> Self {
        Self {
            message: format!("{} deleted.", capitalize(label)),
            id: None,
        }
    }
}

/// Body returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
