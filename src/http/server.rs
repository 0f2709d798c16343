//! HTTP server setup and request handling.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all site handler
//! - Wire up middleware (tracing, timeout, request ID)
//! - Dispatch requests to the routing engine
//! - Render redirect and page responses
//! - Observability (metrics, correlation IDs)

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::{ConfigError, SiteConfig};
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::observability::metrics;
use crate::render::page;
use crate::routing::{RouteDecision, Router as SiteRouter};
use crate::theme::ThemeSource;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub router: Arc<SiteRouter>,
    pub theme: Arc<dyn ThemeSource>,
}

/// HTTP server for the documentation site.
pub struct HttpServer {
    router: Router,
    config: Arc<SiteConfig>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// Compiling the routing table re-checks the locale invariants, so a
    /// config built programmatically is validated here too.
    pub fn new(config: SiteConfig) -> Result<Self, ConfigError> {
        let site_router = SiteRouter::from_config(&config)
            .map_err(|errors| ConfigError::Validation(errors.into_iter().map(Into::into).collect()))?;

        let config = Arc::new(config);
        let state = AppState {
            config: config.clone(),
            router: Arc::new(site_router),
            theme: Arc::from(config.theme.mode.source()),
        };

        let router = Self::build_router(&config, state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(serve_page))
            .route("/", any(serve_page))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.listener.request_timeout_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();

        // Serve with graceful shutdown
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Main site handler.
/// Resolves the path to a redirect or a page and renders the response.
async fn serve_page(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request.request_id().unwrap_or("unknown").to_string();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Serving request"
    );

    match state.router.resolve(&path) {
        RouteDecision::Redirect { location, status } => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                location = %location,
                status = %status.as_u16(),
                "Redirecting"
            );
            metrics::record_request(&method, status.as_u16(), "none", start_time);
            redirect(status, location)
        }
        RouteDecision::Page { locale, slug } => {
            let theme = state.theme.current();
            let content = &state.config.content;
            let stem = &state.config.theme.favicon_stem;

            match load_page(&content.root, locale, slug).await {
                Ok(body) => {
                    metrics::record_request(&method, 200, locale, start_time);
                    Html(page::document(&content.title, locale, theme, stem, &body))
                        .into_response()
                }
                Err(PageError::NotFound) => {
                    tracing::debug!(
                        request_id = %request_id,
                        path = %path,
                        locale = %locale,
                        "Page not found"
                    );
                    metrics::record_request(&method, 404, locale, start_time);
                    (
                        StatusCode::NOT_FOUND,
                        Html(page::not_found(&content.title, locale, theme, stem)),
                    )
                        .into_response()
                }
                Err(PageError::Io(error)) => {
                    tracing::error!(
                        request_id = %request_id,
                        path = %path,
                        error = %error,
                        "Failed to read page"
                    );
                    metrics::record_request(&method, 500, locale, start_time);
                    StatusCode::INTERNAL_SERVER_ERROR.into_response()
                }
            }
        }
    }
}

/// Build a redirect response with the given status and `Location`.
fn redirect(status: StatusCode, location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => {
            let mut response = status.into_response();
            response.headers_mut().insert(header::LOCATION, value);
            response
        }
        Err(error) => {
            tracing::error!(location = %location, error = %error, "Invalid redirect destination");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[derive(Debug, Error)]
enum PageError {
    #[error("page not found")]
    NotFound,

    #[error(transparent)]
    Io(std::io::Error),
}

/// Read a page body from the content directory.
async fn load_page(root: &Path, locale: &str, slug: &str) -> Result<String, PageError> {
    let file = page_file(slug).ok_or(PageError::NotFound)?;
    let path = root.join(locale).join(file);

    match tokio::fs::read_to_string(&path).await {
        Ok(body) => Ok(body),
        Err(error) if error.kind() == ErrorKind::NotFound => Err(PageError::NotFound),
        Err(error) => Err(PageError::Io(error)),
    }
}

/// Map a slug to its content file, relative to the locale directory.
///
/// The empty slug is the index page. Empty and dot segments never map to a
/// file, which keeps lookups inside the content root.
fn page_file(slug: &str) -> Option<PathBuf> {
    if slug.is_empty() {
        return Some(PathBuf::from("index.html"));
    }

    let mut file = PathBuf::new();
    for segment in slug.split('/') {
        if segment.is_empty() || segment == "." || segment == ".." {
            return None;
        }
        file.push(segment);
    }
    file.set_extension("html");
    Some(file)
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
