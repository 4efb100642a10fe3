use api::auth::middleware::log_request;
use api::response::ErrorResponse;
use api::routes::{auth::auth_routes, routes};
use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn,
    response::{IntoResponse, Response},
};
use std::net::SocketAddr;
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer};
use tracing_appender::rolling;
use util::{config, state::AppState};

#[tokio::main]
async fn main() {
    // Load configuration and initialize logging
    let _log_guard = init_logging(&config::log_file(), &config::log_level());

    // Set up dependencies
    let db = match db::connect().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Error connecting to the database: {e}");
            eprintln!("Error connecting to the database: {e}");
            std::process::exit(1);
        }
    };
    let app_state = AppState::new(db);

    // Configure middleware
    let cors = CorsLayer::permissive();

    // Build app router
    let app = Router::new()
        .nest("/api", routes(app_state.clone()))
        .nest("/auth", auth_routes().with_state(app_state))
        .layer(from_fn(log_request))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(cors);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config::host(), config::port())
        .parse()
        .expect("Invalid address");

    println!(
        "Starting {} on http://{}:{}",
        config::project_name(),
        config::host(),
        config::port()
    );

    axum::serve(
        tokio::net::TcpListener::bind(&addr)
            .await
            .expect("Failed to bind"),
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server crashed");
}

/// Last-resort handler for panics escaping a route. The underlying detail is
/// echoed to the client only in development.
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| err.downcast_ref::<&str>().map(|s| s.to_string()));

    tracing::error!(
        "Unhandled panic while serving request: {}",
        detail.as_deref().unwrap_or("unknown cause")
    );

    let body = match detail.filter(|_| config::env() == "development") {
        Some(detail) => ErrorResponse::with_error("Something went wrong!", detail),
        None => ErrorResponse::new("Something went wrong!"),
    };

    (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
}

/// Parses the configured filter directive, falling back to `api=info` when it
/// is not a valid directive.
fn env_filter(log_level: &str) -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("api=info"))
}

fn init_logging(log_file: &str, log_level: &str) -> tracing_appender::non_blocking::WorkerGuard {
    use std::fs;
    use tracing_subscriber::{fmt, prelude::*};

    fs::create_dir_all("logs").ok();

    let file_appender = rolling::daily("logs", log_file);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true);

    let log_to_stdout = config::log_to_stdout();

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(true)
        .with_thread_ids(true);

    let registry = tracing_subscriber::registry()
        .with(env_filter(log_level))
        .with(file_layer);

    if log_to_stdout {
        registry.with(stdout_layer).init();
    } else {
        registry.init();
    }

    guard
}

#[cfg(test)]
mod tests {
    use super::env_filter;

    #[test]
    fn configured_directive_is_honored() {
        assert_eq!(env_filter("api=debug").to_string(), "api=debug");
    }

    #[test]
    fn invalid_directive_falls_back_to_default() {
        assert_eq!(env_filter("api=info=extra").to_string(), "api=info");
    }
}
