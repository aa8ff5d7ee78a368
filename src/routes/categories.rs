use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::payloads::categories::{CreateCategoryPayload, UpdateCategoryPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::categories::{
    create_category, get_category, load_categories, modify_category, remove_category,
};

#[get("/categories")]
pub async fn list_categories(
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let categories = load_categories(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(categories))
}

#[get("/categories/{id}")]
pub async fn show_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let category = get_category(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(category))
}

#[post("/categories")]
pub async fn add_category(
    repo: web::Data<DieselRepository>,
    payload: web::Json<CreateCategoryPayload>,
) -> Result<HttpResponse, ServiceError> {
    let category = create_category(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(category))
}

#[put("/categories/{id}")]
pub async fn edit_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UpdateCategoryPayload>,
) -> Result<HttpResponse, ServiceError> {
    let affected = modify_category(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(affected))
}

#[delete("/categories/{id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = remove_category(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}
