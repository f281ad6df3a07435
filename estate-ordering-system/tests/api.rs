use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    middleware::{NormalizePath, TrailingSlash},
    test, web, App,
};
use estate_ordering_system::{api, infrastructure::ServiceProvider};
use serde_json::{json, Value};

async fn service_provider() -> ServiceProvider {
    let config = config::Config::builder()
        .set_override("db.url", "sqlite::memory:")
        .unwrap()
        .build()
        .unwrap();
    ServiceProvider::build(config).await.unwrap()
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .wrap(NormalizePath::new(TrailingSlash::Always))
                .app_data(web::Data::new(service_provider().await))
                .configure(api::configure),
        )
        .await
    };
}

async fn send<S, R, B>(app: &S, req: R) -> (StatusCode, Value)
where
    S: Service<R, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = test::call_service(app, req).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, value)
}

fn post(uri: &str, body: Value) -> test::TestRequest {
    test::TestRequest::post().uri(uri).set_json(body)
}

fn sample_property() -> Value {
    json!({ "name": "Blackhorse Mills / Flat #101", "address": "21 Blackhorse Lane" })
}

fn sample_appliance(property: &Value) -> Value {
    json!({
        "property": property["id"],
        "name": "Washing Machine",
        "brand": "LG",
        "model_number": "WM-123",
        "usage": "High"
    })
}

fn sample_replacement() -> Value {
    json!({
        "name": "Replacement 1",
        "brand": "Bosch",
        "model_number": "RB-123",
        "price": 300.00,
        "efficiency": "High",
        "matching_score": 90
    })
}

#[actix_web::test]
async fn test_order_placement_scenario() {
    let app = init_app!();

    let (status, property) = send(&app, post("/api/properties/", sample_property()).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(property["appliances"], json!([]));

    let (status, appliance) =
        send(&app, post("/api/appliances/", sample_appliance(&property)).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(appliance["property"], property["id"]);

    let (status, replacement) =
        send(&app, post("/api/replacements/", sample_replacement()).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(replacement["price"], "300.00");
    assert_eq!(replacement["matching_score"], 90);

    let order = json!({
        "property": property["id"],
        "appliance": appliance["id"],
        "replacement": replacement["id"],
        "scheduled_date": "2025-04-05",
        "scheduled_time": "10:30"
    });
    let (status, created) = send(&app, post("/api/orders/place_order/", order).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["scheduled_date"], "2025-04-05");
    assert_eq!(created["scheduled_time"], "10:30:00");
    assert!(created["created_at"].is_string());

    let (status, orders) = send(&app, test::TestRequest::get().uri("/api/orders/").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(orders.as_array().unwrap().len(), 1);

    let uri = format!("/api/orders/{}/", created["id"]);
    let (status, fetched) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["property"], property["id"]);
    assert_eq!(fetched["appliance"], appliance["id"]);
    assert_eq!(fetched["replacement"], replacement["id"]);
    assert_eq!(fetched["created_at"], created["created_at"]);
}

#[actix_web::test]
async fn test_property_roundtrip_nests_appliances() {
    let app = init_app!();

    let (_, property) = send(&app, post("/api/properties/", sample_property()).to_request()).await;
    send(&app, post("/api/appliances/", sample_appliance(&property)).to_request()).await;

    // Without the trailing slash.
    let uri = format!("/api/properties/{}", property["id"]);
    let (status, fetched) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["name"], "Blackhorse Mills / Flat #101");
    assert_eq!(fetched["address"], "21 Blackhorse Lane");
    assert_eq!(fetched["shipping_label"], Value::Null);
    assert_eq!(fetched["appliances"][0]["model_number"], "WM-123");
}

#[actix_web::test]
async fn test_deleting_property_cascades() {
    let app = init_app!();

    let (_, property) = send(&app, post("/api/properties/", sample_property()).to_request()).await;
    let (_, appliance) =
        send(&app, post("/api/appliances/", sample_appliance(&property)).to_request()).await;
    let (_, replacement) =
        send(&app, post("/api/replacements/", sample_replacement()).to_request()).await;
    let order = json!({
        "property": property["id"],
        "appliance": appliance["id"],
        "replacement": replacement["id"]
    });
    let (status, _) = send(&app, post("/api/orders/", order).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/properties/{}/", property["id"]);
    let (status, body) = send(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (_, appliances) =
        send(&app, test::TestRequest::get().uri("/api/appliances/").to_request()).await;
    assert_eq!(appliances, json!([]));
    let (_, orders) = send(&app, test::TestRequest::get().uri("/api/orders/").to_request()).await;
    assert_eq!(orders, json!([]));
    let (_, replacements) =
        send(&app, test::TestRequest::get().uri("/api/replacements/").to_request()).await;
    assert_eq!(replacements.as_array().unwrap().len(), 1);

    let (status, body) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));
}

#[actix_web::test]
async fn test_deleting_replacement_removes_its_orders() {
    let app = init_app!();

    let (_, property) = send(&app, post("/api/properties/", sample_property()).to_request()).await;
    let (_, appliance) =
        send(&app, post("/api/appliances/", sample_appliance(&property)).to_request()).await;
    let (_, replacement) =
        send(&app, post("/api/replacements/", sample_replacement()).to_request()).await;
    let order = json!({
        "property": property["id"],
        "appliance": appliance["id"],
        "replacement": replacement["id"]
    });
    send(&app, post("/api/orders/", order).to_request()).await;

    let uri = format!("/api/replacements/{}/", replacement["id"]);
    let (status, _) = send(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, orders) = send(&app, test::TestRequest::get().uri("/api/orders/").to_request()).await;
    assert_eq!(orders, json!([]));
    let (_, appliances) =
        send(&app, test::TestRequest::get().uri("/api/appliances/").to_request()).await;
    assert_eq!(appliances.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_empty_collections() {
    let app = init_app!();

    for uri in [
        "/api/properties/",
        "/api/appliances/",
        "/api/replacements/",
        "/api/orders/",
    ] {
        let (status, body) = send(&app, test::TestRequest::get().uri(uri).to_request()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }
}

#[actix_web::test]
async fn test_appliance_for_missing_property_is_rejected() {
    let app = init_app!();

    let body = sample_appliance(&json!({ "id": 999 }));
    let (status, errors) = send(&app, post("/api/appliances/", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        json!({ "property": ["Invalid pk \"999\" - object does not exist."] })
    );

    let (_, appliances) =
        send(&app, test::TestRequest::get().uri("/api/appliances/").to_request()).await;
    assert_eq!(appliances, json!([]));
}

#[actix_web::test]
async fn test_replacement_field_validation() {
    let app = init_app!();

    let mut body = sample_replacement();
    body["matching_score"] = json!(-1);
    body["price"] = json!("300.001");
    let (status, errors) = send(&app, post("/api/replacements/", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors["matching_score"],
        json!(["Ensure this value is greater than or equal to 0."])
    );
    assert_eq!(
        errors["price"],
        json!(["Ensure that there are no more than 2 decimal places."])
    );

    let mut body = sample_replacement();
    body["price"] = json!("1234567.89");
    let (status, errors) = send(&app, post("/api/replacements/", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors["price"],
        json!(["Ensure that there are no more than 8 digits in total."])
    );

    let (status, errors) = send(&app, post("/api/properties/", json!({})).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors, json!({ "name": ["This field is required."] }));
}

#[actix_web::test]
async fn test_malformed_json_is_a_bad_request() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/properties/")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().starts_with("JSON parse error - "));
}

#[actix_web::test]
async fn test_update_and_partial_update() {
    let app = init_app!();

    let (_, replacement) =
        send(&app, post("/api/replacements/", sample_replacement()).to_request()).await;
    let uri = format!("/api/replacements/{}/", replacement["id"]);

    let req = test::TestRequest::patch()
        .uri(&uri)
        .set_json(json!({ "matching_score": 95, "efficiency": null }))
        .to_request();
    let (status, patched) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["matching_score"], 95);
    assert_eq!(patched["efficiency"], Value::Null);
    assert_eq!(patched["price"], "300.00");

    // A full update needs every required field.
    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "name": "Replacement 2" }))
        .to_request();
    let (status, errors) = send(&app, req).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors.as_object().unwrap().keys().collect::<Vec<_>>(),
        ["brand", "model_number", "price"]
    );

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({
            "name": "Replacement 2",
            "brand": "IFB",
            "model_number": "IFB-456",
            "price": "250.5"
        }))
        .to_request();
    let (status, updated) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], "250.50");
    // Unsent optional fields keep their stored values.
    assert_eq!(updated["matching_score"], 95);
    assert_eq!(updated["efficiency"], Value::Null);

    let (_, fetched) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn test_full_update_keeps_unsent_optional_fields() {
    let app = init_app!();

    let body = json!({
        "name": "P1",
        "address": "1 Main St",
        "shipping_label": "shipping_labels/a.png"
    });
    let (_, property) = send(&app, post("/api/properties/", body).to_request()).await;
    let uri = format!("/api/properties/{}/", property["id"]);

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "name": "P1 renamed" }))
        .to_request();
    let (status, updated) = send(&app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["name"], "P1 renamed");
    assert_eq!(updated["address"], "1 Main St");
    assert_eq!(updated["shipping_label"], "shipping_labels/a.png");

    let req = test::TestRequest::put()
        .uri(&uri)
        .set_json(json!({ "name": "P1", "address": null }))
        .to_request();
    let (_, updated) = send(&app, req).await;
    assert_eq!(updated["address"], Value::Null);
    assert_eq!(updated["shipping_label"], "shipping_labels/a.png");

    let (_, fetched) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(fetched, updated);
}

#[actix_web::test]
async fn test_null_required_field_is_rejected() {
    let app = init_app!();

    let body = json!({ "name": null, "address": "1 Main St" });
    let (status, errors) = send(&app, post("/api/properties/", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(errors, json!({ "name": ["This field may not be null."] }));

    let mut body = sample_replacement();
    body["matching_score"] = Value::Null;
    let (status, errors) = send(&app, post("/api/replacements/", body).to_request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        errors,
        json!({ "matching_score": ["This field may not be null."] })
    );
}

#[actix_web::test]
async fn test_deleting_appliance_removes_its_orders() {
    let app = init_app!();

    let (_, property) = send(&app, post("/api/properties/", sample_property()).to_request()).await;
    let (_, appliance) =
        send(&app, post("/api/appliances/", sample_appliance(&property)).to_request()).await;
    let (_, replacement) =
        send(&app, post("/api/replacements/", sample_replacement()).to_request()).await;
    let order = json!({
        "property": property["id"],
        "appliance": appliance["id"],
        "replacement": replacement["id"]
    });
    let (status, _) = send(&app, post("/api/orders/", order).to_request()).await;
    assert_eq!(status, StatusCode::CREATED);

    let uri = format!("/api/appliances/{}/", appliance["id"]);
    let (status, _) = send(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, orders) = send(&app, test::TestRequest::get().uri("/api/orders/").to_request()).await;
    assert_eq!(orders, json!([]));
    let uri = format!("/api/properties/{}/", property["id"]);
    let (status, fetched) = send(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["appliances"], json!([]));
    let (_, replacements) =
        send(&app, test::TestRequest::get().uri("/api/replacements/").to_request()).await;
    assert_eq!(replacements.as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn test_missing_items_are_not_found() {
    let app = init_app!();

    let req = test::TestRequest::put()
        .uri("/api/orders/42/")
        .set_json(json!({}))
        .to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));

    let req = test::TestRequest::delete().uri("/api/appliances/42/").to_request();
    let (status, _) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/api/properties/abc/").to_request();
    let (status, body) = send(&app, req).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "detail": "Not found." }));
}

#[actix_web::test]
async fn test_api_root_lists_collections() {
    let app = init_app!();

    let (status, body) = send(&app, test::TestRequest::get().uri("/api/").to_request()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["orders"].as_str().unwrap().ends_with("/api/orders/"));
    assert_eq!(body.as_object().unwrap().len(), 4);
}
