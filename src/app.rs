use std::sync::Arc;

use axum::Router;
use chrono::{Local, NaiveDate};
use tower_http::trace::TraceLayer;

use crate::api_docs;
use crate::diagnostics::DiagnosticSink;
use crate::error::ServerError;
use crate::routes::weather_forecast;
use crate::weather::RandomSource;

pub const DEFAULT_ROUTE: &str = "/weatherforecast";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub route: String,
    pub api_docs: bool,
    pub seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            route: DEFAULT_ROUTE.to_string(),
            api_docs: false,
            seed: None,
        }
    }
}

// Anything that goes in here must be a handle or pointer that can be cloned.
// The underlying state itself should be shared.
#[derive(Clone)]
pub struct AppState {
    pub random_source: RandomSource,
    pub sink: Arc<dyn DiagnosticSink>,
    pub today: fn() -> NaiveDate,
}

impl AppState {
    pub fn new(config: &AppConfig, sink: Arc<dyn DiagnosticSink>) -> AppState {
        let random_source = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::Thread,
        };
        AppState {
            random_source,
            sink,
            today: local_today,
        }
    }
}

pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn create_app(config: &AppConfig, state: AppState) -> Result<Router, ServerError> {
    if !config.route.starts_with('/') {
        return Err(ServerError::InvalidRoute(config.route.clone()));
    }

    let mut app = weather_forecast::routes(&config.route, state);
    if config.api_docs {
        log::debug!("serving api documentation at {}", api_docs::OPENAPI_PATH);
        app = app.merge(api_docs::routes(&config.route));
    }
    Ok(app.layer(TraceLayer::new_for_http()))
}
