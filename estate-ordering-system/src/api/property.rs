use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use domain_estate::model::vo::PropertyPayload;

use crate::api::{dtos::PropertyResponse, ApiResult};
use crate::infrastructure::ServiceProviderScoped;

#[get("/properties/")]
pub async fn list_properties(
    scoped: ServiceProviderScoped,
) -> ApiResult<web::Json<Vec<PropertyResponse>>> {
    let properties = scoped.property_service().list().await?;
    Ok(web::Json(properties.into_iter().map(Into::into).collect()))
}

#[post("/properties/")]
pub async fn create_property(
    scoped: ServiceProviderScoped,
    payload: web::Json<PropertyPayload>,
) -> ApiResult<HttpResponse> {
    let property = scoped.property_service().create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(PropertyResponse::from(property)))
}

#[get("/properties/{id}/")]
pub async fn get_property(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<web::Json<PropertyResponse>> {
    let property = scoped.property_service().get(id.into_inner()).await?;
    Ok(web::Json(property.into()))
}

#[put("/properties/{id}/")]
pub async fn update_property(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<PropertyPayload>,
) -> ApiResult<web::Json<PropertyResponse>> {
    let property = scoped
        .property_service()
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(property.into()))
}

#[patch("/properties/{id}/")]
pub async fn partial_update_property(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<PropertyPayload>,
) -> ApiResult<web::Json<PropertyResponse>> {
    let property = scoped
        .property_service()
        .partial_update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(property.into()))
}

/// Also removes the property's appliances and every order placed against them.
#[delete("/properties/{id}/")]
pub async fn delete_property(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    scoped.property_service().delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
