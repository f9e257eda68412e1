//! Catalog tools: browsing, lookup, search, prompts and live scoring

use axum::{body::Bytes, extract::State, Json};
use serde::{Deserialize, Serialize};

use magpho_common::catalog::search::{DEFAULT_RANDOM_COUNT, DEFAULT_RANDOM_MIN_HARMONY};
use magpho_common::catalog::{
    CatalogStats, CombinationDetail, CombinationSummary, MagazineSummary, SearchFilter,
    StyleSummary,
};
use magpho_common::compatibility::CompatibilityScore;
use magpho_common::profiles::{MagazineOlog, PhotographyOlog};
use magpho_common::prompt::{generate_image_prompt as assemble_prompt, ImagePromptRequest};
use magpho_common::{calculate_compatibility as score_pair, classify_technical, classify_visual};

use super::tools::{parse_params, ToolError};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PairParams {
    pub magazine_name: String,
    pub photography_style: String,
}

#[derive(Debug, Deserialize)]
pub struct MagazineParams {
    pub magazine_name: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleParams {
    pub photography_style: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RandomParams {
    pub count: usize,
    pub min_harmony: i64,
}

impl Default for RandomParams {
    fn default() -> Self {
        Self {
            count: DEFAULT_RANDOM_COUNT,
            min_harmony: DEFAULT_RANDOM_MIN_HARMONY,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub combination_id: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct MagazineOlogResponse {
    pub magazine_name: String,
    pub olog: MagazineOlog,
}

#[derive(Debug, Serialize)]
pub struct PhotographyOlogResponse {
    pub photography_style: String,
    pub olog: PhotographyOlog,
    pub typical_aperture_range: String,
}

#[derive(Debug, Serialize)]
pub struct CompatibilityResponse {
    pub magazine_name: String,
    pub photography_style: String,
    pub compatibility: CompatibilityScore,
}

/// POST /api/tools/list_magazines
pub async fn list_magazines(State(state): State<AppState>) -> Json<Vec<MagazineSummary>> {
    Json(state.catalog.list_magazines())
}

/// POST /api/tools/list_photography_styles
pub async fn list_photography_styles(State(state): State<AppState>) -> Json<Vec<StyleSummary>> {
    Json(state.catalog.list_photography_styles())
}

/// POST /api/tools/get_combination
pub async fn get_combination(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CombinationDetail>, ToolError> {
    let params: PairParams = parse_params(&body)?;
    let detail = state
        .catalog
        .get_combination(&params.magazine_name, &params.photography_style)?;
    Ok(Json(detail))
}

/// POST /api/tools/search_combinations
pub async fn search_combinations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<CombinationSummary>>, ToolError> {
    let filter: SearchFilter = parse_params(&body)?;
    Ok(Json(state.catalog.search_combinations(&filter)))
}

/// POST /api/tools/generate_image_prompt
pub async fn generate_image_prompt(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PromptResponse>, ToolError> {
    let request: ImagePromptRequest = parse_params(&body)?;
    let combo = state.catalog.find_combination(&request.combination_id)?;

    Ok(Json(PromptResponse {
        combination_id: combo.id.clone(),
        prompt: assemble_prompt(combo, &request),
    }))
}

/// POST /api/tools/get_stats
pub async fn get_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    Json(state.catalog.stats())
}

/// POST /api/tools/get_random_combinations
pub async fn get_random_combinations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<CombinationSummary>>, ToolError> {
    let params: RandomParams = parse_params(&body)?;
    let picked = state.catalog.random_combinations(
        &mut rand::thread_rng(),
        params.count,
        params.min_harmony,
    );
    Ok(Json(picked))
}

/// POST /api/tools/extract_magazine_olog
pub async fn extract_magazine_olog(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<MagazineOlogResponse>, ToolError> {
    let params: MagazineParams = parse_params(&body)?;
    let magazine = state.catalog.find_magazine(&params.magazine_name)?;
    let profile = classify_visual(magazine);

    Ok(Json(MagazineOlogResponse {
        magazine_name: magazine.name.clone(),
        olog: MagazineOlog::from(&profile),
    }))
}

/// POST /api/tools/extract_photography_olog
pub async fn extract_photography_olog(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PhotographyOlogResponse>, ToolError> {
    let params: StyleParams = parse_params(&body)?;
    let style = state.catalog.find_style(&params.photography_style)?;
    let profile = classify_technical(style);

    Ok(Json(PhotographyOlogResponse {
        photography_style: style.name.clone(),
        olog: PhotographyOlog::from(&profile),
        typical_aperture_range: profile.typical_aperture_range,
    }))
}

/// POST /api/tools/calculate_compatibility
pub async fn calculate_compatibility(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CompatibilityResponse>, ToolError> {
    let params: PairParams = parse_params(&body)?;
    let magazine = state.catalog.find_magazine(&params.magazine_name)?;
    let style = state.catalog.find_style(&params.photography_style)?;

    Ok(Json(CompatibilityResponse {
        magazine_name: magazine.name.clone(),
        photography_style: style.name.clone(),
        compatibility: score_pair(magazine, style),
    }))
}
