use actix_web::{error, web, HttpResponse};
use serde_json::json;

pub mod appliance;
pub mod dtos;
mod error_response;
pub mod order;
pub mod property;
pub mod replacement;
pub mod root;

pub use error_response::{ApiError, ApiResult};

/// Registers every resource under `/api`.
///
/// Item routes carry a trailing slash; wrap the app in
/// `NormalizePath::new(TrailingSlash::Always)` to accept paths without one.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::BadRequest()
            .json(json!({ "detail": format!("JSON parse error - {err}") }));
        error::InternalError::from_response(err, response).into()
    }))
    .app_data(web::PathConfig::default().error_handler(|err, _req| {
        let response = HttpResponse::NotFound().json(json!({ "detail": "Not found." }));
        error::InternalError::from_response(err, response).into()
    }))
    .service(
        web::scope("/api")
            .service(root::api_root)
            .service(property::list_properties)
            .service(property::create_property)
            .service(property::get_property)
            .service(property::update_property)
            .service(property::partial_update_property)
            .service(property::delete_property)
            .service(appliance::list_appliances)
            .service(appliance::create_appliance)
            .service(appliance::get_appliance)
            .service(appliance::update_appliance)
            .service(appliance::partial_update_appliance)
            .service(appliance::delete_appliance)
            .service(replacement::list_replacements)
            .service(replacement::create_replacement)
            .service(replacement::get_replacement)
            .service(replacement::update_replacement)
            .service(replacement::partial_update_replacement)
            .service(replacement::delete_replacement)
            // Registered before `/orders/{id}/` so it is not read as an id.
            .service(order::place_order)
            .service(order::list_orders)
            .service(order::create_order)
            .service(order::get_order)
            .service(order::update_order)
            .service(order::partial_update_order)
            .service(order::delete_order),
    );
}
