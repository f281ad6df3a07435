use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use domain_estate::model::vo::ReplacementOptionPayload;

use crate::api::{dtos::ReplacementOptionResponse, ApiResult};
use crate::infrastructure::ServiceProviderScoped;

#[get("/replacements/")]
pub async fn list_replacements(
    scoped: ServiceProviderScoped,
) -> ApiResult<web::Json<Vec<ReplacementOptionResponse>>> {
    let options = scoped.replacement_option_service().list().await?;
    Ok(web::Json(options.into_iter().map(Into::into).collect()))
}

#[post("/replacements/")]
pub async fn create_replacement(
    scoped: ServiceProviderScoped,
    payload: web::Json<ReplacementOptionPayload>,
) -> ApiResult<HttpResponse> {
    let option = scoped
        .replacement_option_service()
        .create(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(ReplacementOptionResponse::from(option)))
}

#[get("/replacements/{id}/")]
pub async fn get_replacement(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<web::Json<ReplacementOptionResponse>> {
    let option = scoped.replacement_option_service().get(id.into_inner()).await?;
    Ok(web::Json(option.into()))
}

#[put("/replacements/{id}/")]
pub async fn update_replacement(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<ReplacementOptionPayload>,
) -> ApiResult<web::Json<ReplacementOptionResponse>> {
    let option = scoped
        .replacement_option_service()
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(option.into()))
}

#[patch("/replacements/{id}/")]
pub async fn partial_update_replacement(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<ReplacementOptionPayload>,
) -> ApiResult<web::Json<ReplacementOptionResponse>> {
    let option = scoped
        .replacement_option_service()
        .partial_update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(option.into()))
}

#[delete("/replacements/{id}/")]
pub async fn delete_replacement(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    scoped.replacement_option_service().delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
