use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use domain_estate::model::vo::AppliancePayload;

use crate::api::{dtos::ApplianceResponse, ApiResult};
use crate::infrastructure::ServiceProviderScoped;

#[get("/appliances/")]
pub async fn list_appliances(
    scoped: ServiceProviderScoped,
) -> ApiResult<web::Json<Vec<ApplianceResponse>>> {
    let appliances = scoped.appliance_service().list().await?;
    Ok(web::Json(appliances.into_iter().map(Into::into).collect()))
}

#[post("/appliances/")]
pub async fn create_appliance(
    scoped: ServiceProviderScoped,
    payload: web::Json<AppliancePayload>,
) -> ApiResult<HttpResponse> {
    let appliance = scoped.appliance_service().create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(ApplianceResponse::from(appliance)))
}

#[get("/appliances/{id}/")]
pub async fn get_appliance(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ApplianceResponse>> {
    let appliance = scoped.appliance_service().get(id.into_inner()).await?;
    Ok(web::Json(appliance.into()))
}

#[put("/appliances/{id}/")]
pub async fn update_appliance(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<AppliancePayload>,
) -> ApiResult<web::Json<ApplianceResponse>> {
    let appliance = scoped
        .appliance_service()
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(appliance.into()))
}

#[patch("/appliances/{id}/")]
pub async fn partial_update_appliance(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<AppliancePayload>,
) -> ApiResult<web::Json<ApplianceResponse>> {
    let appliance = scoped
        .appliance_service()
        .partial_update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(appliance.into()))
}

#[delete("/appliances/{id}/")]
pub async fn delete_appliance(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    scoped.appliance_service().delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
