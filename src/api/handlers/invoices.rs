use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{Invoice, InvoicePayload, MessageResponse, Resource};

pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_invoices().await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_invoice(*id).await?))
}

pub async fn create(db: web::Data<Database>, body: web::Json<InvoicePayload>) -> Result<HttpResponse, ApiError> {
    let id = db.create_invoice(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Invoice::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<InvoicePayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_invoice(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Invoice::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_invoice(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Invoice::LABEL)))
}
