use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::AppState;
use super::handlers;

pub fn create_router(state: AppState) -> Router {
    // Operational routes
    let ops = Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/metrics", get(handlers::metrics::render));

    // Dashboard views
    let pages = Router::new()
        .route("/", get(handlers::pages::index))
        .route("/influencer/:id", get(handlers::pages::influencer_detail))
        .route("/spotlight", get(handlers::pages::spotlight))
        .route("/theme/toggle", post(handlers::theme::toggle));

    // Read-only JSON API
    let api = Router::new()
        .route("/api/influencers", get(handlers::influencers::list))
        .route("/api/influencers/:id", get(handlers::influencers::detail))
        .route(
            "/api/influencers/:id/predictions",
            get(handlers::influencers::predictions),
        )
        .route("/api/settings", get(handlers::settings::get_settings));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    ops.merge(pages)
        .merge(api)
        .fallback(handlers::pages::not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
