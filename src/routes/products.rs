use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::payloads::products::{CreateProductPayload, UpdateProductPayload};
use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::products::{
    create_product, get_product, load_products, modify_product, remove_product,
};

#[get("/products")]
pub async fn list_products(repo: web::Data<DieselRepository>) -> Result<HttpResponse, ServiceError> {
    let products = load_products(repo.get_ref())?;
    Ok(HttpResponse::Ok().json(products))
}

#[get("/products/{id}")]
pub async fn show_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let product = get_product(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    payload: web::Json<CreateProductPayload>,
) -> Result<HttpResponse, ServiceError> {
    let product = create_product(repo.get_ref(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(product))
}

#[put("/products/{id}")]
pub async fn edit_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    payload: web::Json<UpdateProductPayload>,
) -> Result<HttpResponse, ServiceError> {
    let affected = modify_product(repo.get_ref(), path.into_inner(), payload.into_inner())?;
    Ok(HttpResponse::Ok().json(affected))
}

#[delete("/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, ServiceError> {
    let deleted = remove_product(repo.get_ref(), path.into_inner())?;
    Ok(HttpResponse::Ok().json(deleted))
}
