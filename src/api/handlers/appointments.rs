use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{Appointment, AppointmentFilter, AppointmentPayload, MessageResponse, Resource};

/// `GET /appointments[?doctor_id=..][&patient_id=..]`
pub async fn list(
    db: web::Data<Database>,
    filter: web::Query<AppointmentFilter>,
) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_appointments(&filter).await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_appointment(*id).await?))
}

pub async fn create(
    db: web::Data<Database>,
    body: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = db.create_appointment(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Appointment::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<AppointmentPayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_appointment(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Appointment::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_appointment(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Appointment::LABEL)))
}
