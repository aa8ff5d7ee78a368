use actix_web::web;

use crate::services::ServiceError;

pub mod categories;
pub mod products;
pub mod tags;

/// Mounts every resource handler under the `/api` prefix. Shared between
/// `main` and the integration tests so both serve the same composition.
///
/// Body-extractor failures are rerouted into [`ServiceError`] so they are
/// formatted by the same place as every other failure.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| ServiceError::Validation(err.to_string()).into()),
    )
    .service(
        web::scope("/api")
            .service(categories::list_categories)
            .service(categories::show_category)
            .service(categories::add_category)
            .service(categories::edit_category)
            .service(categories::delete_category)
            .service(products::list_products)
            .service(products::show_product)
            .service(products::add_product)
            .service(products::edit_product)
            .service(products::delete_product)
            .service(tags::list_tags)
            .service(tags::show_tag)
            .service(tags::add_tag)
            .service(tags::edit_tag)
            .service(tags::delete_tag),
    );
}
