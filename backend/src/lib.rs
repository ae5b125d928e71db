//! AgriSat mock backend
//!
//! Serves randomly generated NDVI, weather and field-history data so a
//! frontend can be built without satellite API credentials. Nothing is
//! stored between requests.

use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

pub mod config;
pub mod error;
pub mod handlers;
pub mod random;
pub mod routes;
pub mod services;

pub use config::Config;
use random::RandomSource;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub rng: Arc<dyn RandomSource>,
}

impl AppState {
    pub fn new(config: Config, rng: Arc<dyn RandomSource>) -> Self {
        Self {
            config: Arc::new(config),
            rng,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    with_middleware(routes::api_routes(), &state.config).with_state(state)
}

/// Wrap a router in panic recovery and request tracing.
///
/// CORS is applied per route in [`routes::api_routes`].
pub fn with_middleware(router: Router<AppState>, config: &Config) -> Router<AppState> {
    let debug = config.server.debug;

    router
        .layer(CatchPanicLayer::custom(move |err| {
            error::panic_response(err, debug)
        }))
        .layer(TraceLayer::new_for_http())
}
