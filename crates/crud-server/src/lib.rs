//! CRUD Admin Server
//!
//! REST surface the admin UI talks to. Every table shares the same five
//! routes; the data mode behind them is fixed when [`AppState`] is built.

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use crud_core::CrudService;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CrudService>,
}

impl AppState {
    pub fn new(service: CrudService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api_routes())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn api_routes() -> Router<AppState> {
    use handlers::records;

    Router::new()
        .route("/:table", get(records::list).post(records::create))
        .route(
            "/:table/:id",
            get(records::get)
                .put(records::update)
                .delete(records::delete),
        )
}
