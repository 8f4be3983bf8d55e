use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{Medication, MedicationPayload, MessageResponse, Resource};

pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_medications().await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_medication(*id).await?))
}

pub async fn create(db: web::Data<Database>, body: web::Json<MedicationPayload>) -> Result<HttpResponse, ApiError> {
    let id = db.create_medication(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Medication::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<MedicationPayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_medication(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Medication::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_medication(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Medication::LABEL)))
}
