//! Route definitions for the AgriSat mock backend

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::{handlers, AppState};

/// A public endpoint, as advertised by discovery and 404 responses
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    pub method: &'static str,
    pub path: &'static str,
    pub description: &'static str,
}

impl Endpoint {
    /// `"METHOD /path"`
    pub fn route(&self) -> String {
        format!("{} {}", self.method, self.path)
    }
}

pub const ENDPOINTS: [Endpoint; 6] = [
    Endpoint {
        method: "GET",
        path: "/",
        description: "This info page",
    },
    Endpoint {
        method: "GET",
        path: "/test-satellite",
        description: "Test connection",
    },
    Endpoint {
        method: "POST",
        path: "/analyze-field",
        description: "Analyze field (main function)",
    },
    Endpoint {
        method: "GET",
        path: "/weather",
        description: "Get weather data",
    },
    Endpoint {
        method: "GET",
        path: "/field-history",
        description: "Get field history",
    },
    Endpoint {
        method: "GET",
        path: "/health",
        description: "Health check",
    },
];

pub fn available_endpoints() -> Vec<String> {
    ENDPOINTS.iter().map(Endpoint::route).collect()
}

/// Permissive CORS: any origin, method and header
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Create API routes
///
/// `OPTIONS /analyze-field` is registered after the CORS layer so the
/// preflight handler answers it with a JSON body instead of `CorsLayer`
/// short-circuiting with an empty one.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Discovery and status
        .route("/", get(handlers::home))
        .route("/test-satellite", get(handlers::test_satellite))
        .route("/health", get(handlers::health_check))
        // Mock satellite data
        .route("/weather", get(handlers::get_weather))
        .route("/field-history", get(handlers::get_field_history))
        .fallback(handlers::not_found)
        .layer(cors_layer())
        .route(
            "/analyze-field",
            post(handlers::analyze_field)
                .layer(cors_layer())
                .options(handlers::analyze_field_preflight),
        )
        .method_not_allowed_fallback(handlers::method_not_allowed)
}
