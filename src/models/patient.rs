use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Patient {
    pub id: i64,
    pub name: String,
    pub dob: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
}

/// Create/update body; also the row shape of the patient CSV import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientPayload {
    pub name: String,
    pub dob: NaiveDate,
    pub address: String,
    pub phone: String,
    pub email: String,
}

impl Resource for Patient {
    type Payload = PatientPayload;
    const PATH: &'static str = "patients";
    const LABEL: &'static str = "patient";

    fn id(&self) -> i64 {
        self.id
    }
}
