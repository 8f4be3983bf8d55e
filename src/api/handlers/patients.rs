use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{MessageResponse, Patient, PatientPayload, Resource};

pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_patients().await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_patient(*id).await?))
}

pub async fn create(db: web::Data<Database>, body: web::Json<PatientPayload>) -> Result<HttpResponse, ApiError> {
    let id = db.create_patient(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Patient::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<PatientPayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_patient(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Patient::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_patient(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Patient::LABEL)))
}
