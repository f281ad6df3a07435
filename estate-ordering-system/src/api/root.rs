use actix_web::{get, web, HttpRequest};
use serde_json::{json, Value};

/// Links to every collection.
#[get("/")]
pub async fn api_root(req: HttpRequest) -> web::Json<Value> {
    let info = req.connection_info();
    let base = format!("{}://{}/api", info.scheme(), info.host());
    web::Json(json!({
        "properties": format!("{base}/properties/"),
        "appliances": format!("{base}/appliances/"),
        "replacements": format!("{base}/replacements/"),
        "orders": format!("{base}/orders/"),
    }))
}
