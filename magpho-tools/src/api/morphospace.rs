//! Morphospace tools: states, presets, trajectories and vocabulary matching

use axum::{body::Bytes, Json};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use magpho_common::morphospace::{
    canonical_state, nearest_vocabulary, AestheticState, CanonicalState, VisualType,
    VocabularyMatch, CANONICAL_STATES, VISUAL_TYPES,
};
use magpho_common::presets::{
    aesthetic_distance, custom_trajectory, keyframes, map_state_parameters, preset, trajectory,
    AestheticDistanceReport, Keyframe, MappedParameters, RhythmicPreset, Trajectory,
    RHYTHMIC_PRESETS,
};
use magpho_common::Pattern;

use super::tools::{parse_params, ToolError};

#[derive(Debug, Deserialize)]
pub struct SequenceParams {
    pub state_a: String,
    pub state_b: String,
    #[serde(default = "default_pattern")]
    pub oscillation_pattern: String,
    #[serde(default = "default_num_cycles")]
    pub num_cycles: f64,
    #[serde(default = "default_steps_per_cycle")]
    pub steps_per_cycle: usize,
}

fn default_pattern() -> String {
    Pattern::Sinusoidal.as_str().to_string()
}

fn default_num_cycles() -> f64 {
    2.0
}

fn default_steps_per_cycle() -> usize {
    10
}

#[derive(Debug, Deserialize)]
pub struct PresetParams {
    pub preset_name: String,
    #[serde(default)]
    pub override_steps: Option<usize>,
    #[serde(default)]
    pub keyframe_count: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct MappingParams {
    pub state_name: String,
    #[serde(default = "default_intensity")]
    pub intensity: String,
    #[serde(default)]
    pub emphasis_axis: Option<String>,
}

fn default_intensity() -> String {
    "moderate".to_string()
}

#[derive(Debug, Deserialize)]
pub struct DistanceParams {
    pub state_a: String,
    pub state_b: String,
}

#[derive(Debug, Deserialize)]
pub struct MatchParams {
    #[serde(default)]
    pub state_name: Option<String>,
    #[serde(default)]
    pub custom_state: Option<Map<String, Value>>,
}

/// Preset listing entry with its default length
#[derive(Debug, Serialize)]
pub struct PresetListing {
    #[serde(flatten)]
    pub preset: RhythmicPreset,
    pub total_steps: usize,
}

#[derive(Debug, Serialize)]
pub struct PresetTrajectoryResponse {
    pub preset_name: String,
    pub description: String,
    pub trajectory: Trajectory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframes: Option<Vec<Keyframe>>,
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    /// Canonical state name, or "custom"
    pub source: String,
    pub state: AestheticState,
    pub best_match: VocabularyMatch,
}

/// POST /api/tools/list_aesthetic_states
pub async fn list_aesthetic_states() -> Json<&'static [CanonicalState]> {
    Json(CANONICAL_STATES)
}

/// POST /api/tools/list_rhythmic_presets
pub async fn list_rhythmic_presets() -> Json<Vec<PresetListing>> {
    Json(
        RHYTHMIC_PRESETS
            .iter()
            .map(|preset| PresetListing {
                preset: *preset,
                total_steps: preset.total_steps(),
            })
            .collect(),
    )
}

/// POST /api/tools/list_visual_types
pub async fn list_visual_types() -> Json<&'static [VisualType]> {
    Json(VISUAL_TYPES)
}

/// POST /api/tools/generate_rhythmic_sequence
pub async fn generate_rhythmic_sequence(body: Bytes) -> Result<Json<Trajectory>, ToolError> {
    let params: SequenceParams = parse_params(&body)?;
    let pattern: Pattern = params.oscillation_pattern.parse()?;

    let sequence = custom_trajectory(
        &params.state_a,
        &params.state_b,
        pattern,
        params.num_cycles,
        params.steps_per_cycle,
        None,
    )?;
    Ok(Json(sequence))
}

/// POST /api/tools/get_preset_trajectory
pub async fn get_preset_trajectory(
    body: Bytes,
) -> Result<Json<PresetTrajectoryResponse>, ToolError> {
    let params: PresetParams = parse_params(&body)?;
    let selected = preset(&params.preset_name)?;
    let path = trajectory(selected, params.override_steps)?;
    let frames = params
        .keyframe_count
        .map(|count| keyframes(&path, count))
        .transpose()?;

    Ok(Json(PresetTrajectoryResponse {
        preset_name: selected.name.to_string(),
        description: selected.description.to_string(),
        trajectory: path,
        keyframes: frames,
    }))
}

/// POST /api/tools/map_aesthetic_parameters
pub async fn map_aesthetic_parameters(
    body: Bytes,
) -> Result<Json<MappedParameters>, ToolError> {
    let params: MappingParams = parse_params(&body)?;
    let mapped = map_state_parameters(
        &params.state_name,
        &params.intensity,
        params.emphasis_axis.as_deref(),
    )?;
    Ok(Json(mapped))
}

/// POST /api/tools/compute_aesthetic_distance
pub async fn compute_aesthetic_distance(
    body: Bytes,
) -> Result<Json<AestheticDistanceReport>, ToolError> {
    let params: DistanceParams = parse_params(&body)?;
    Ok(Json(aesthetic_distance(&params.state_a, &params.state_b)?))
}

/// POST /api/tools/match_visual_vocabulary
///
/// A custom state takes precedence over a state name.
pub async fn match_visual_vocabulary(body: Bytes) -> Result<Json<MatchResponse>, ToolError> {
    let params: MatchParams = parse_params(&body)?;

    let (source, state) = match (&params.custom_state, &params.state_name) {
        (Some(custom), _) => ("custom".to_string(), AestheticState::from_json_map(custom)?),
        (None, Some(name)) => {
            let canonical = canonical_state(name)?;
            (canonical.name.to_string(), canonical.coordinates)
        }
        (None, None) => {
            return Err(ToolError::InvalidParams(
                "either state_name or custom_state is required".to_string(),
            ))
        }
    };

    Ok(Json(MatchResponse {
        source,
        best_match: nearest_vocabulary(&state),
        state,
    }))
}
