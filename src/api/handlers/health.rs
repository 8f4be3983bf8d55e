use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::api::ApiError;
use crate::db::Database;

/// Liveness probe; also confirms the database answers.
pub async fn health(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    sqlx::query("SELECT 1").execute(db.pool()).await?;
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}
