//! magpho-tools library - aesthetic tool server
//!
//! Every tool is a `POST /api/tools/<name>` endpoint taking a JSON object and
//! returning JSON. `GET /api/tools` lists the tools with their parameters.

use std::sync::Arc;

use axum::Router;
use magpho_common::Catalog;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded catalog (read-only after startup)
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/api/tools", get(api::list_tools))
        // Catalog tools
        .route("/api/tools/list_magazines", post(api::catalog::list_magazines))
        .route("/api/tools/list_photography_styles", post(api::catalog::list_photography_styles))
        .route("/api/tools/get_combination", post(api::catalog::get_combination))
        .route("/api/tools/search_combinations", post(api::catalog::search_combinations))
        .route("/api/tools/generate_image_prompt", post(api::catalog::generate_image_prompt))
        .route("/api/tools/get_stats", post(api::catalog::get_stats))
        .route("/api/tools/get_random_combinations", post(api::catalog::get_random_combinations))
        .route("/api/tools/extract_magazine_olog", post(api::catalog::extract_magazine_olog))
        .route("/api/tools/extract_photography_olog", post(api::catalog::extract_photography_olog))
        .route("/api/tools/calculate_compatibility", post(api::catalog::calculate_compatibility))
        // Morphospace tools
        .route("/api/tools/list_aesthetic_states", post(api::morphospace::list_aesthetic_states))
        .route("/api/tools/list_rhythmic_presets", post(api::morphospace::list_rhythmic_presets))
        .route("/api/tools/list_visual_types", post(api::morphospace::list_visual_types))
        .route("/api/tools/generate_rhythmic_sequence", post(api::morphospace::generate_rhythmic_sequence))
        .route("/api/tools/get_preset_trajectory", post(api::morphospace::get_preset_trajectory))
        .route("/api/tools/map_aesthetic_parameters", post(api::morphospace::map_aesthetic_parameters))
        .route("/api/tools/compute_aesthetic_distance", post(api::morphospace::compute_aesthetic_distance))
        .route("/api/tools/match_visual_vocabulary", post(api::morphospace::match_visual_vocabulary))
        .route("/api/tools/:name", post(api::unknown_tool))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
