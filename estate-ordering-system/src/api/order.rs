use actix_web::{delete, get, patch, post, put, web, HttpResponse};
use domain_estate::model::vo::OrderPayload;

use crate::api::{dtos::OrderResponse, ApiResult};
use crate::infrastructure::ServiceProviderScoped;

#[get("/orders/")]
pub async fn list_orders(scoped: ServiceProviderScoped) -> ApiResult<web::Json<Vec<OrderResponse>>> {
    let orders = scoped.order_service().list().await?;
    Ok(web::Json(orders.into_iter().map(Into::into).collect()))
}

#[post("/orders/")]
pub async fn create_order(
    scoped: ServiceProviderScoped,
    payload: web::Json<OrderPayload>,
) -> ApiResult<HttpResponse> {
    let order = scoped.order_service().create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// Same contract as `POST /orders/`.
#[post("/orders/place_order/")]
pub async fn place_order(
    scoped: ServiceProviderScoped,
    payload: web::Json<OrderPayload>,
) -> ApiResult<HttpResponse> {
    let order = scoped.order_service().place_order(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

#[get("/orders/{id}/")]
pub async fn get_order(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<web::Json<OrderResponse>> {
    let order = scoped.order_service().get(id.into_inner()).await?;
    Ok(web::Json(order.into()))
}

#[put("/orders/{id}/")]
pub async fn update_order(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<OrderPayload>,
) -> ApiResult<web::Json<OrderResponse>> {
    let order = scoped
        .order_service()
        .update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(order.into()))
}

#[patch("/orders/{id}/")]
pub async fn partial_update_order(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
    payload: web::Json<OrderPayload>,
) -> ApiResult<web::Json<OrderResponse>> {
    let order = scoped
        .order_service()
        .partial_update(id.into_inner(), payload.into_inner())
        .await?;
    Ok(web::Json(order.into()))
}

#[delete("/orders/{id}/")]
pub async fn delete_order(
    scoped: ServiceProviderScoped,
    id: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    scoped.order_service().delete(id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
