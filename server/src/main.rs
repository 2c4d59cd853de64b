#![recursion_limit = "256"]

mod redirect;
mod security;

use app::config::{self, API_URL_VAR, SiteConfig};
use app::{component, shell};
use axum::{Router, http::StatusCode, response::Json, routing::get};
use dotenvy::dotenv;
use leptos::logging;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes as _, generate_route_list};
use leptos_config::get_configuration;
use redirect::redirect_www;
use security::{SecurityHeaders, security_headers, validate_production_env};
use serde_json::json;

use tower_http::compression::predicate::{NotForContentType, SizeAbove};
use tower_http::compression::{CompressionLayer, Predicate as _};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

async fn health_handler() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "portfolio-web",
        "version": env!("CARGO_PKG_VERSION")
    })))
}

/// Site variables resolve to the values compiled into the client; everything
/// else is read from `runtime`.
fn deployment_lookup<F>(runtime: F) -> impl Fn(&str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    move |key| {
        if config::is_site_var(key) {
            config::build_var(key)
        } else {
            runtime(key)
        }
    }
}

/// A runtime API URL that the compiled client will not use.
fn ignored_api_url(runtime: Option<String>, site: &SiteConfig) -> Option<String> {
    runtime.filter(|url| {
        let url = url.trim().trim_end_matches('/');
        !url.is_empty() && url != site.api_base_url
    })
}

fn tracing_level() -> tracing::Level {
    if cfg!(debug_assertions) {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_file(true)
        .with_line_number(true)
        .with_max_level(tracing_level())
        .init();

    if dotenv().is_err() {
        logging::warn!("There is no corresponding .env file");
    }

    if let Err(errors) = validate_production_env(deployment_lookup(|key| std::env::var(key).ok())) {
        for error in &errors {
            tracing::error!("{error}");
        }
        return;
    }

    let Ok(conf) = get_configuration(Some("Cargo.toml")) else {
        logging::error!("Failed to get configuration");
        return;
    };

    let site = SiteConfig::from_build_env();
    tracing::info!(api = %site.api_base_url, "portfolio API");
    if let Some(url) = ignored_api_url(std::env::var(API_URL_VAR).ok(), &site) {
        tracing::warn!(
            runtime = %url,
            compiled = %site.api_base_url,
            "{API_URL_VAR} is read at build time; rebuild the site to change it"
        );
    }
    let policy = SecurityHeaders::new(site.api_origin());

    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.to_string();
    let routes = generate_route_list(component);

    let app = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .route("/health", get(health_handler))
        .nest_service("/static", ServeDir::new(site_root))
        .layer(
            tower::ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(redirect_www))
                .layer(axum::middleware::from_fn_with_state(policy, security_headers)),
        )
        .layer(CompressionLayer::new().compress_when(
            NotForContentType::new("application/wasm").and(SizeAbove::new(1024)),
        ))
        .fallback(leptos_axum::file_and_error_handler::<LeptosOptions, _>(shell))
        .with_state(leptos_options);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            logging::error!("Failed to bind tcp listener to {}: {}", &addr, err);
            return;
        }
    };
    logging::log!("Listening on http://{}", &addr);

    match axum::serve(listener, app.into_make_service()).await {
        Ok(()) => logging::log!("Server shutdown gracefully"),
        Err(err) => logging::error!("Failed to serve app: {err:?}"),
    }
}
