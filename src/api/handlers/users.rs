use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::UserFilter;

/// `GET /users[?role=...]`
pub async fn list(db: web::Data<Database>, filter: web::Query<UserFilter>) -> Result<HttpResponse, ApiError> {
    let users = db.list_users(filter.role.as_deref()).await?;
    Ok(HttpResponse::Ok().json(users))
}
