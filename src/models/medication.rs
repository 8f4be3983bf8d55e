use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Medication {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicationPayload {
    pub name: String,
}

impl Resource for Medication {
    type Payload = MedicationPayload;
    const PATH: &'static str = "medications";
    const LABEL: &'static str = "medication";

    fn id(&self) -> i64 {
        self.id
    }
}

/// Link between a treatment and a medication prescribed with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct PrescribedMedication {
    pub id: i64,
    pub treatment_id: i64,
    pub medication_id: i64,
}

/// Body of `POST /treatments/{id}/medications`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrescriptionPayload {
    pub medication_id: i64,
}
