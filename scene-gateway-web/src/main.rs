use std::env;
use std::process::ExitCode;

use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};

use scene_gateway_provider::{create_provider, log_sanitizer};
use scene_gateway_web::config::{AppConfig, api_key_from};
use scene_gateway_web::logging::init_logging;
use scene_gateway_web::middleware::RequestLogger;
use scene_gateway_web::routes;
use scene_gateway_web::state::AppState;

#[actix_web::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("scene-gateway: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    // 文件日志的后台写线程随 guard 一起退出
    let _guard = init_logging(&config.logging)?;

    let api_key = api_key_from(|key| env::var(key).ok())?;
    let provider = create_provider(config.provider.to_provider_config(api_key.as_str()))
        .context("Failed to build the imagery provider")?;
    tracing::info!(
        provider = provider.id(),
        asset_type = provider.asset_type(),
        api_key = %log_sanitizer::mask_secret(&api_key),
        "Imagery provider ready"
    );

    let state = web::Data::new(AppState::new(provider));
    let workers = config.server.workers.unwrap_or_else(num_cpus::get);
    let bind = (config.server.host.clone(), config.server.port);
    tracing::info!(host = %bind.0, port = bind.1, workers, "Starting HTTP server");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestLogger)
            .configure(routes::configure)
    })
    .workers(workers)
    .bind(bind)
    .with_context(|| {
        format!(
            "failed to bind {}:{}",
            config.server.host, config.server.port
        )
    })?
    .run()
    .await
    .context("HTTP server terminated")
}
