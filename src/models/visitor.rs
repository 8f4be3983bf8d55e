use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::{datetime, Resource};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Visitor {
    pub id: i64,
    pub name: String,
    pub purpose: String,
    #[serde(with = "datetime::local")]
    pub arrival_time: NaiveDateTime,
    #[serde(with = "datetime::optional", default)]
    pub departure_time: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisitorPayload {
    pub name: String,
    pub purpose: String,
    #[serde(with = "datetime::local")]
    pub arrival_time: NaiveDateTime,
    #[serde(with = "datetime::optional", default)]
    pub departure_time: Option<NaiveDateTime>,
}

impl Resource for Visitor {
    type Payload = VisitorPayload;
    const PATH: &'static str = "visitors";
    const LABEL: &'static str = "visitor";

    fn id(&self) -> i64 {
        self.id
    }
}
