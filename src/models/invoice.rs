use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{datetime, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: i64,
    pub treatment_id: i64,
    #[serde(with = "datetime::local")]
    pub issue_date: NaiveDateTime,
    #[serde(with = "datetime::local")]
    pub due_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoicePayload {
    pub treatment_id: i64,
    #[serde(with = "datetime::local")]
    pub issue_date: NaiveDateTime,
    #[serde(with = "datetime::local")]
    pub due_date: NaiveDateTime,
}

impl Resource for Invoice {
    type Payload = InvoicePayload;
    const PATH: &'static str = "invoices";
    const LABEL: &'static str = "invoice";

    fn id(&self) -> i64 {
        self.id
    }
}
