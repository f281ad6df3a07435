use std::sync::Arc;

use actix_web::middleware::{NormalizePath, TrailingSlash};
use colored::Colorize;
use tracing::{error, info};

use crate::api;
use crate::infrastructure::{
    config::build_config,
    telemetry::{initialize_telemetry, TelemetryConfig},
    ServiceProvider,
};

pub fn run() {
    let runtime = match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build runtime".red(), e);
        }
    };
    runtime.block_on(async_run());
}

pub async fn async_run() {
    let config = match build_config() {
        Ok(x) => x,
        Err(e) => {
            return eprintln!("{}: {}", "Cannot build config".red(), e);
        }
    };
    let telemetry = match config.get::<TelemetryConfig>("telemetry") {
        Ok(x) => x,
        Err(config::ConfigError::NotFound(_)) => Default::default(),
        Err(e) => {
            return eprintln!("{}: {}", "Cannot read telemetry config".red(), e);
        }
    };
    if let Err(e) = initialize_telemetry(&telemetry) {
        return eprintln!("{}: {}", "Cannot build logger".red(), e);
    };

    let service_provider = match ServiceProvider::build(config).await {
        Ok(x) => Arc::new(x),
        Err(e) => {
            return eprintln!("{}: {:?}", "Cannot build Service Provider".red(), e);
        }
    };
    tokio::select! {
        _ = initialize_web_host(service_provider) => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Stopping Services (ctrl-c handling).");
        }
    }
}

pub async fn initialize_web_host(sp: Arc<ServiceProvider>) {
    let host = sp.common_config().host.clone();
    let server = actix_web::HttpServer::new(move || {
        let cors = actix_cors::Cors::default()
            .allow_any_origin()
            .allow_any_header()
            .allow_any_method()
            .max_age(86400);

        actix_web::App::new()
            .wrap(NormalizePath::new(TrailingSlash::Always))
            .wrap(cors)
            .wrap(tracing_actix_web::TracingLogger::default())
            .app_data(actix_web::web::Data::from(sp.clone()))
            .configure(api::configure)
    })
    .bind((host.bind_address.to_owned(), host.bind_port));
    let server = match server {
        Ok(x) => x,
        Err(e) => {
            return error!(
                "Cannot bind {}:{}: {}",
                host.bind_address, host.bind_port, e
            );
        }
    };
    info!("Listening on {}:{}.", host.bind_address, host.bind_port);
    match server.disable_signals().run().await {
        Ok(_) => info!("Web server stopped successfully."),
        Err(e) => error!("Web server into error: {}", e),
    }
}
