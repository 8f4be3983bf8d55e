use serde::{Deserialize, Serialize};

use super::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Treatment {
    pub id: i64,
    pub appointment_id: i64,
    pub treatment_details: String,
    pub amount: f64,
    #[serde(default)]
    pub paid: bool,
}

/// `paid` is left untouched on update when absent and defaults to false on
/// create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentPayload {
    pub appointment_id: i64,
    pub treatment_details: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paid: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TreatmentFilter {
    #[serde(default, deserialize_with = "crate::models::query::empty_as_none")]
    pub appointment_id: Option<i64>,
}

impl Resource for Treatment {
    type Payload = TreatmentPayload;
    const PATH: &'static str = "treatments";
    const LABEL: &'static str = "treatment";

    fn id(&self) -> i64 {
        self.id
    }
}
