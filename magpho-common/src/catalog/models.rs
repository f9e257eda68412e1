//! Catalog record types
//!
//! Mirrors the JSON layout of `magazines.json`, `photography.json` and
//! `combinations.json`. Text fields default to empty strings and lists to
//! empty lists, so partially authored records still deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::taxonomy::TemporalAlignment;

/// Magazine profile (one magazine in one era)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MagazineRecord {
    /// Full name including era, e.g. "Life (1960s)"
    pub name: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub era: Era,
    #[serde(default)]
    pub visual_treatment: VisualTreatment,
    #[serde(default)]
    pub cultural_context: CulturalContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Era {
    #[serde(default)]
    pub label: String,
}

/// Free-text visual treatment of a magazine
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisualTreatment {
    #[serde(default)]
    pub color_palette: String,
    #[serde(default)]
    pub lighting: String,
    #[serde(default)]
    pub contrast: String,
    #[serde(default)]
    pub texture: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CulturalContext {
    /// Passed through to listings untouched
    #[serde(default)]
    pub values: Value,
}

/// Photography style profile
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotographyStyle {
    /// e.g. "Documentary Photography"
    pub name: String,
    #[serde(default)]
    pub technical: TechnicalDetails,
    #[serde(default)]
    pub aesthetic: AestheticDetails,
    #[serde(default)]
    pub context: StyleContext,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TechnicalDetails {
    #[serde(default)]
    pub focal_length: String,
    #[serde(default)]
    pub typical_aperture_range: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AestheticDetails {
    #[serde(default)]
    pub composition: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleContext {
    #[serde(default)]
    pub typical_uses: Vec<String>,
    /// Passed through to listings untouched
    #[serde(default)]
    pub key_characteristics: Value,
}

/// Precomputed magazine × photography combination
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CombinationRecord {
    /// `{magazine_slug}__{photography_slug}`
    pub id: String,
    pub magazine_id: String,
    pub photography_id: String,
    pub description: CombinationDescription,
    pub compatibility: StoredCompatibility,
    #[serde(default)]
    pub suggested_subjects: Vec<String>,
    #[serde(default)]
    pub prompt_keywords: Vec<String>,
    #[serde(default)]
    pub magazine_color_palette: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CombinationDescription {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub full_description: String,
    #[serde(default)]
    pub visual_expectations: Value,
    #[serde(default)]
    pub use_cases: Value,
}

/// Compatibility scores as stored in the catalog
///
/// These were computed offline; the live scorer in
/// [`crate::compatibility`] may disagree with them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCompatibility {
    pub overall_harmony: i64,
    pub technical_score: i64,
    pub aesthetic_score: i64,
    pub creative_tension: i64,
    pub temporal_alignment: TemporalAlignment,
    #[serde(default)]
    pub rationale: String,
}
