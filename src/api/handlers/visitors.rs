use actix_web::{web, HttpResponse};

use crate::api::ApiError;
use crate::db::Database;
use crate::models::{MessageResponse, Resource, Visitor, VisitorPayload};

pub async fn list(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.list_visitors().await?))
}

pub async fn get(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(db.get_visitor(*id).await?))
}

pub async fn create(db: web::Data<Database>, body: web::Json<VisitorPayload>) -> Result<HttpResponse, ApiError> {
    let id = db.create_visitor(&body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::created(Visitor::LABEL, id)))
}

pub async fn update(
    db: web::Data<Database>,
    id: web::Path<i64>,
    body: web::Json<VisitorPayload>,
) -> Result<HttpResponse, ApiError> {
    db.update_visitor(*id, &body).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::updated(Visitor::LABEL)))
}

pub async fn delete(db: web::Data<Database>, id: web::Path<i64>) -> Result<HttpResponse, ApiError> {
    db.delete_visitor(*id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse::deleted(Visitor::LABEL)))
}
