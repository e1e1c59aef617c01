//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod docs;
pub mod handlers;
pub mod state;

pub use docs::ApiDoc;
pub use state::AppState;

/// Optional parts of the router
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Serve Swagger UI at `/api-docs` and the OpenAPI document at
    /// `/api-docs/openapi.json`
    pub docs: bool,
    /// Answer cross-origin requests permissively
    pub cors: bool,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            docs: true,
            cors: false,
        }
    }
}

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    create_router_with(state, RouterOptions::default())
}

pub fn create_router_with(state: AppState, options: RouterOptions) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::root))
        .nest(
            "/api",
            Router::new()
                .route("/v1/login", post(handlers::login))
                .route("/v1/users", get(handlers::list_users)),
        );

    if options.docs {
        router = router.merge(
            SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
    }

    if options.cors {
        router = router.layer(CorsLayer::permissive());
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
