use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{MessageResponse, PrescriptionPayload, Resource, Treatment, TreatmentFilter, TreatmentPayload};

/// `GET /treatments[?appointment_id=..]`
pub async fn list(
    db: web::Data<Database>,
    filter: web::Query<TreatmentFilter>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_treatments(&filter).await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_treatment(*id).await?))
}

pub async fn create(db: web::Data<Database>, body: web::Json<TreatmentPayload>) -> Result<HttpResponse, ApiError> {
    let id = db.create_treatment(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Treatment::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<TreatmentPayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_treatment(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Treatment::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_treatment(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Treatment::LABEL)))
}

/// `GET /treatments/{id}/medications`
pub async fn list_medications(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_prescriptions(*id).await?))
}

/// `POST /treatments/{id}/medications`
pub async fn prescribe(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<PrescriptionPayload>,
) -> Result<HttpResponse, ApiError> {
    let prescription_id = db.prescribe_medication(*id, body.medication_id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created("prescription", prescription_id)))
}
