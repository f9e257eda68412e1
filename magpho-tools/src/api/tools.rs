//! Tool index, parameter parsing and error responses
//!
//! Lookup failures are part of a tool's normal output: they answer 200 with
//! a record carrying `error` plus the valid alternatives. Only an invalid
//! oscillation pattern, a bad trajectory parameter, unparseable parameters
//! or an unknown tool produce an HTTP error status.

use axum::{
    body::Bytes,
    extract::Path,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use magpho_common::catalog::LookupError;
use magpho_common::MorphospaceError;

#[derive(Debug, Error)]
pub enum ToolError {
    #[error(transparent)]
    Lookup(#[from] LookupError),

    #[error(transparent)]
    Morphospace(#[from] MorphospaceError),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Unknown tool '{0}'")]
    UnknownTool(String),
}

impl IntoResponse for ToolError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ToolError::Lookup(e) => {
                debug!("Lookup failed: {}", e);
                (StatusCode::OK, e.to_record())
            }
            ToolError::Morphospace(e) if e.is_fatal() => {
                warn!("Rejected tool call: {}", e);
                (StatusCode::BAD_REQUEST, json!({ "error": e.to_string() }))
            }
            ToolError::Morphospace(e) => {
                debug!("Morphospace lookup failed: {}", e);
                (StatusCode::OK, e.to_record())
            }
            ToolError::InvalidParams(_) => {
                warn!("Rejected tool call: {}", self);
                (StatusCode::BAD_REQUEST, json!({ "error": self.to_string() }))
            }
            ToolError::UnknownTool(_) => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": self.to_string(),
                    "available_tools": TOOLS.iter().map(|t| t.name).collect::<Vec<_>>(),
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Deserialize a tool's parameters; an empty body counts as `{}`
pub fn parse_params<T: DeserializeOwned>(body: &Bytes) -> Result<T, ToolError> {
    let raw: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
        b"{}"
    } else {
        body
    };
    serde_json::from_slice(raw).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

/// One entry of the tool index
#[derive(Debug, Clone, Copy)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    /// (parameter, JSON type, required, description)
    pub parameters: &'static [(&'static str, &'static str, bool, &'static str)],
}

impl ToolDef {
    /// JSON-schema object describing the parameters
    pub fn schema(&self) -> Value {
        let properties: serde_json::Map<String, Value> = self
            .parameters
            .iter()
            .map(|(name, kind, _, description)| {
                (
                    name.to_string(),
                    json!({ "type": kind, "description": description }),
                )
            })
            .collect();
        let required: Vec<&str> = self
            .parameters
            .iter()
            .filter(|(_, _, required, _)| *required)
            .map(|(name, ..)| *name)
            .collect();

        json!({ "type": "object", "properties": properties, "required": required })
    }
}

pub const TOOLS: &[ToolDef] = &[
    ToolDef {
        name: "list_magazines",
        description: "All magazine styles with era, color palette, lighting and cultural values",
        parameters: &[],
    },
    ToolDef {
        name: "list_photography_styles",
        description: "All photography styles with typical uses, focal length and composition",
        parameters: &[],
    },
    ToolDef {
        name: "get_combination",
        description: "Detailed analysis of one magazine × photography combination",
        parameters: &[
            ("magazine_name", "string", true, "Full magazine name including era, e.g. \"Life (1960s)\""),
            ("photography_style", "string", true, "Full style name, e.g. \"Documentary Photography\""),
        ],
    },
    ToolDef {
        name: "search_combinations",
        description: "Search and filter combinations by text, scores, ids and temporal alignment",
        parameters: &[
            ("query", "string", false, "Text searched in names, descriptions, keywords and subjects"),
            ("min_harmony", "integer", false, "Minimum overall harmony (1-10)"),
            ("max_harmony", "integer", false, "Maximum overall harmony (1-10)"),
            ("min_tension", "integer", false, "Minimum creative tension (1-10)"),
            ("magazine_filter", "string", false, "Partial magazine id match"),
            ("photography_filter", "string", false, "Partial photography id match"),
            ("temporal_alignment", "string", false, "era_matched, creative_anachronism or temporal_clash"),
            ("limit", "integer", false, "Maximum results (default 20)"),
        ],
    },
    ToolDef {
        name: "generate_image_prompt",
        description: "Image generation prompt built from a stored combination",
        parameters: &[
            ("combination_id", "string", true, "Combination id, e.g. \"life_1960s__documentary_photography\""),
            ("distance", "string", true, "Shot distance, e.g. \"Close-up\", \"Wide\""),
            ("angle", "string", true, "Camera angle, e.g. \"Eye-level\", \"Low Angle\""),
            ("subject", "string", false, "Subject; defaults to the first suggested subject"),
            ("color_intensity", "number", false, "0.0 muted to 1.0 saturated (default 0.5)"),
            ("detail_sharpness", "number", false, "0.0 soft to 1.0 razor sharp (default 0.5)"),
            ("mood_intensity", "number", false, "0.0 understated to 1.0 dramatic (default 0.5)"),
        ],
    },
    ToolDef {
        name: "get_stats",
        description: "Library size, average scores, high-quality counts and temporal distribution",
        parameters: &[],
    },
    ToolDef {
        name: "get_random_combinations",
        description: "Random high-harmony combinations for inspiration",
        parameters: &[
            ("count", "integer", false, "Number of combinations (default 5)"),
            ("min_harmony", "integer", false, "Minimum harmony (default 7)"),
        ],
    },
    ToolDef {
        name: "extract_magazine_olog",
        description: "Taxonomy categories of a magazine's visual treatment",
        parameters: &[("magazine_name", "string", true, "Full magazine name including era")],
    },
    ToolDef {
        name: "extract_photography_olog",
        description: "Taxonomy categories of a photography style's technical approach",
        parameters: &[("photography_style", "string", true, "Full photography style name")],
    },
    ToolDef {
        name: "calculate_compatibility",
        description: "Live rule-based compatibility scores for a magazine and a photography style",
        parameters: &[
            ("magazine_name", "string", true, "Full magazine name including era"),
            ("photography_style", "string", true, "Full photography style name"),
        ],
    },
    ToolDef {
        name: "list_aesthetic_states",
        description: "Canonical morphospace states with coordinates",
        parameters: &[],
    },
    ToolDef {
        name: "list_rhythmic_presets",
        description: "Named oscillations between two canonical states",
        parameters: &[],
    },
    ToolDef {
        name: "list_visual_types",
        description: "Visual vocabulary types with prompt keywords and optical properties",
        parameters: &[],
    },
    ToolDef {
        name: "generate_rhythmic_sequence",
        description: "Trajectory oscillating between any two canonical states",
        parameters: &[
            ("state_a", "string", true, "Starting canonical state"),
            ("state_b", "string", true, "Target canonical state"),
            ("oscillation_pattern", "string", false, "sinusoidal, triangular or square (default sinusoidal)"),
            ("num_cycles", "number", false, "Number of oscillation cycles (default 2)"),
            ("steps_per_cycle", "integer", false, "Samples per cycle (default 10)"),
        ],
    },
    ToolDef {
        name: "get_preset_trajectory",
        description: "Full trajectory for a rhythmic preset, optionally with keyframes",
        parameters: &[
            ("preset_name", "string", true, "Rhythmic preset name"),
            ("override_steps", "integer", false, "Replace the total step count"),
            ("keyframe_count", "integer", false, "Evenly spaced keyframes matched to the vocabulary"),
        ],
    },
    ToolDef {
        name: "map_aesthetic_parameters",
        description: "Scale a canonical state by intensity with an optional emphasized axis",
        parameters: &[
            ("state_name", "string", true, "Canonical state name"),
            ("intensity", "string", false, "subtle, moderate or dramatic (default moderate)"),
            ("emphasis_axis", "string", false, "Axis boosted by an extra ×1.2"),
        ],
    },
    ToolDef {
        name: "compute_aesthetic_distance",
        description: "Distance, per-axis differences and transition character between two states",
        parameters: &[
            ("state_a", "string", true, "First canonical state"),
            ("state_b", "string", true, "Second canonical state"),
        ],
    },
    ToolDef {
        name: "match_visual_vocabulary",
        description: "Nearest visual type for a canonical state or custom coordinates",
        parameters: &[
            ("state_name", "string", false, "Canonical state name"),
            ("custom_state", "object", false, "Coordinates keyed by all six axis names"),
        ],
    },
];

#[derive(Debug, Serialize)]
pub struct ToolListing {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Value,
}

/// GET /api/tools
pub async fn list_tools() -> Json<Vec<ToolListing>> {
    Json(
        TOOLS
            .iter()
            .map(|tool| ToolListing {
                name: tool.name,
                description: tool.description,
                parameters: tool.schema(),
            })
            .collect(),
    )
}

/// POST /api/tools/:name for names with no route
pub async fn unknown_tool(Path(name): Path<String>) -> ToolError {
    ToolError::UnknownTool(name)
}
