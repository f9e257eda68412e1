//! Profile extraction: free-text catalog records → taxonomy
//!
//! Each dimension is classified by an ordered rule table evaluated
//! first-match-wins against the lower-cased source text. A rule matches when
//! any of its keywords is a substring of the text. When no rule matches the
//! dimension's fallback category is used, so extraction never fails.
//!
//! Rule order is observable behavior: "35-50mm" is `wide` because the `35`
//! keyword of the wide rule is tested before the standard rule.

use serde::Serialize;

use crate::catalog::{MagazineRecord, PhotographyStyle};
use crate::taxonomy::{
    ColorPaletteCategory, CompositionStrategy, ContrastProfile, DepthOfField,
    FocalLengthCategory, LightingApproach, SubjectContext, TextureEmphasis,
};

/// Aperture range reported when a style does not declare one
pub const DEFAULT_APERTURE_RANGE: &str = "f/2.8-f/5.6";

/// One classification rule: any keyword matching selects the category
pub type Rule<T> = (&'static [&'static str], T);

pub const COLOR_RULES: &[Rule<ColorPaletteCategory>] = &[
    (&["muted", "desaturated", "pastel"], ColorPaletteCategory::Muted),
    (&["vibrant", "saturated", "vivid"], ColorPaletteCategory::Vibrant),
    (&["cool", "blue", "cyan"], ColorPaletteCategory::Cool),
    (&["warm", "orange", "yellow"], ColorPaletteCategory::Warm),
    (&["black and white", "b&w", "monochrome"], ColorPaletteCategory::Monochromatic),
];
pub const COLOR_FALLBACK: ColorPaletteCategory = ColorPaletteCategory::Mixed;

pub const LIGHTING_RULES: &[Rule<LightingApproach>] = &[
    (&["soft", "diffused"], LightingApproach::SoftDiffused),
    (&["hard", "dramatic", "sharp"], LightingApproach::HardDirectional),
    (&["natural", "golden hour", "window"], LightingApproach::NaturalAmbient),
    (&["clinical", "neutral", "even"], LightingApproach::Clinical),
];
pub const LIGHTING_FALLBACK: LightingApproach = LightingApproach::Dramatic;

pub const CONTRAST_RULES: &[Rule<ContrastProfile>] = &[
    (&["extreme", "crushed", "blown"], ContrastProfile::Extreme),
    (&["high"], ContrastProfile::High),
    (&["low", "lifted", "compressed"], ContrastProfile::Low),
];
pub const CONTRAST_FALLBACK: ContrastProfile = ContrastProfile::Medium;

pub const TEXTURE_RULES: &[Rule<TextureEmphasis>] = &[
    (&["sharp", "crisp", "clinical"], TextureEmphasis::Sharp),
    (&["soft", "dreamy", "ethereal"], TextureEmphasis::Ethereal),
    (&["smooth", "glossy", "polished"], TextureEmphasis::Smooth),
    (&["synthetic", "materials", "manufactured"], TextureEmphasis::Synthetic),
];
pub const TEXTURE_FALLBACK: TextureEmphasis = TextureEmphasis::Organic;

pub const COMPOSITION_RULES: &[Rule<CompositionStrategy>] = &[
    (&["grid", "geometric", "symmetric"], CompositionStrategy::Geometric),
    (&["asymmetric", "balanced"], CompositionStrategy::Asymmetrical),
    (&["crop", "tight", "close"], CompositionStrategy::TightCrop),
    (&["environment", "context"], CompositionStrategy::Environmental),
    (&["minimal", "sparse", "negative space"], CompositionStrategy::Minimalist),
];
pub const COMPOSITION_FALLBACK: CompositionStrategy = CompositionStrategy::Asymmetrical;

pub const FOCAL_LENGTH_RULES: &[Rule<FocalLengthCategory>] = &[
    (&["ultra", "14", "16"], FocalLengthCategory::UltraWide),
    (&["wide", "24", "35"], FocalLengthCategory::Wide),
    (&["50", "35-50", "standard"], FocalLengthCategory::Standard),
    (
        &["85", "70", "50-85", "medium telephoto"],
        FocalLengthCategory::MediumTelephoto,
    ),
    (&["telephoto", "100", "200"], FocalLengthCategory::Telephoto),
];
pub const FOCAL_LENGTH_FALLBACK: FocalLengthCategory = FocalLengthCategory::Standard;

pub const SUBJECT_RULES: &[Rule<SubjectContext>] = &[
    (&["portrait", "people", "fashion"], SubjectContext::People),
    (&["product", "still life"], SubjectContext::Objects),
    (&["architecture", "landscape", "place"], SubjectContext::Places),
    (&["candid", "moment", "event"], SubjectContext::Moments),
];
pub const SUBJECT_FALLBACK: SubjectContext = SubjectContext::Abstract;

pub const DEPTH_OF_FIELD_RULES: &[Rule<DepthOfField>] = &[
    (&["f/1", "shallow"], DepthOfField::Shallow),
    (&["f/5.6", "f/8", "deep"], DepthOfField::Deep),
];
pub const DEPTH_OF_FIELD_FALLBACK: DepthOfField = DepthOfField::Moderate;

/// Evaluate an ordered rule table against `text`
///
/// Matching is case-insensitive; the first rule with any matching keyword
/// wins, otherwise `fallback` is returned.
pub fn classify<T: Copy>(text: &str, rules: &[Rule<T>], fallback: T) -> T {
    let text = text.to_lowercase();
    rules
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(_, category)| *category)
        .unwrap_or(fallback)
}

/// Visual treatment of a magazine, classified into the taxonomy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualTreatmentProfile {
    pub color_palette: String,
    pub color_category: ColorPaletteCategory,
    pub lighting: String,
    pub lighting_approach: LightingApproach,
    pub contrast: String,
    pub contrast_profile: ContrastProfile,
    pub texture: String,
    pub texture_emphasis: TextureEmphasis,
}

/// Technical approach of a photography style, classified into the taxonomy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalProfile {
    pub composition_strategy: CompositionStrategy,
    pub focal_length_category: FocalLengthCategory,
    pub subject_context: SubjectContext,
    pub framing_description: String,
    pub depth_of_field: DepthOfField,
    pub typical_aperture_range: String,
}

/// Compact category-only view of a visual profile (tool output)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagazineOlog {
    pub color_category: ColorPaletteCategory,
    pub lighting_approach: LightingApproach,
    pub contrast_profile: ContrastProfile,
    pub texture_emphasis: TextureEmphasis,
}

/// Compact category-only view of a technical profile (tool output)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhotographyOlog {
    pub composition_strategy: CompositionStrategy,
    pub focal_length_category: FocalLengthCategory,
    pub subject_context: SubjectContext,
    pub depth_of_field: DepthOfField,
}

/// Classify a magazine's visual treatment
pub fn classify_visual(magazine: &MagazineRecord) -> VisualTreatmentProfile {
    let visual = &magazine.visual_treatment;

    VisualTreatmentProfile {
        color_palette: visual.color_palette.clone(),
        color_category: classify(&visual.color_palette, COLOR_RULES, COLOR_FALLBACK),
        lighting: visual.lighting.clone(),
        lighting_approach: classify(&visual.lighting, LIGHTING_RULES, LIGHTING_FALLBACK),
        contrast: visual.contrast.clone(),
        contrast_profile: classify(&visual.contrast, CONTRAST_RULES, CONTRAST_FALLBACK),
        texture: visual.texture.clone(),
        texture_emphasis: classify(&visual.texture, TEXTURE_RULES, TEXTURE_FALLBACK),
    }
}

/// Classify a photography style's technical approach
pub fn classify_technical(style: &PhotographyStyle) -> TechnicalProfile {
    let composition = &style.aesthetic.composition;
    let typical_uses = style.context.typical_uses.join(" ");
    let aperture = style.technical.typical_aperture_range.as_deref();

    TechnicalProfile {
        composition_strategy: classify(composition, COMPOSITION_RULES, COMPOSITION_FALLBACK),
        focal_length_category: classify(
            &style.technical.focal_length,
            FOCAL_LENGTH_RULES,
            FOCAL_LENGTH_FALLBACK,
        ),
        subject_context: classify(&typical_uses, SUBJECT_RULES, SUBJECT_FALLBACK),
        framing_description: composition.clone(),
        depth_of_field: classify(
            aperture.unwrap_or_default(),
            DEPTH_OF_FIELD_RULES,
            DEPTH_OF_FIELD_FALLBACK,
        ),
        typical_aperture_range: aperture.unwrap_or(DEFAULT_APERTURE_RANGE).to_string(),
    }
}

impl From<&VisualTreatmentProfile> for MagazineOlog {
    fn from(profile: &VisualTreatmentProfile) -> Self {
        Self {
            color_category: profile.color_category,
            lighting_approach: profile.lighting_approach,
            contrast_profile: profile.contrast_profile,
            texture_emphasis: profile.texture_emphasis,
        }
    }
}

impl From<&TechnicalProfile> for PhotographyOlog {
    fn from(profile: &TechnicalProfile) -> Self {
        Self {
            composition_strategy: profile.composition_strategy,
            focal_length_category: profile.focal_length_category,
            subject_context: profile.subject_context,
            depth_of_field: profile.depth_of_field,
        }
    }
}
