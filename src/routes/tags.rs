use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::payloads::tags::{CreateTagPayload, UpdateTagPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::tags::{create_tag, get_tag, load_tags, modify_tag, remove_tag};

#[get("/tags")]
pub async fn list_tags(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let tags = load_tags(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(tags))
}

#[get("/tags/{id}")]
pub async fn show_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let tag = get_tag(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(tag))
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    payload: web::Json<CreateTagPayload>,
) -> Result<HttpResponse, ServiceError> {
    let tag = create_tag(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(tag))
}

#[put("/tags/{id}")]
pub async fn edit_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UpdateTagPayload>,
) -> Result<HttpResponse, ServiceError> {
    let affected = modify_tag(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(affected))
}

#[delete("/tags/{id}")]
pub async fn delete_tag(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = remove_tag(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}
