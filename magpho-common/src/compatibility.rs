//! Deterministic compatibility scoring between a magazine and a photography style
//!
//! Not a weighted model: technical and aesthetic scores start at
//! [`BASE_SCORE`] and pick up independent +1 bonuses from category checks.
//! Creative tension rewards temporal mismatch. Overall harmony is always
//! derived from the other two scores, never scored on its own.

use serde::Serialize;

use crate::catalog::{MagazineRecord, PhotographyStyle};
use crate::profiles::{classify_technical, classify_visual, TechnicalProfile, VisualTreatmentProfile};
use crate::taxonomy::{
    ColorPaletteCategory, CompositionStrategy, ContrastProfile, FocalLengthCategory,
    LightingApproach, TemporalAlignment, TextureEmphasis,
};

/// Starting point for technical, aesthetic and tension scores
pub const BASE_SCORE: i32 = 5;

/// Lowest score after clamping
pub const MIN_SCORE: i32 = 1;

/// Highest score after clamping
pub const MAX_SCORE: i32 = 10;

/// Tension above this value costs one point of harmony
pub const HARMONY_TENSION_THRESHOLD: i32 = 7;

/// Final compatibility measurement, all scores in [1, 10]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityScore {
    pub overall_harmony: i32,
    pub technical_score: i32,
    pub aesthetic_score: i32,
    pub creative_tension: i32,
    pub temporal_alignment: TemporalAlignment,
    pub rationale: String,
}

/// Intermediate scores before clamping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawScores {
    pub technical: i32,
    pub aesthetic: i32,
    pub tension: i32,
    pub temporal_alignment: TemporalAlignment,
}

impl RawScores {
    /// Harmony before clamping: mean of technical and aesthetic (floored),
    /// minus one when tension is high
    pub fn harmony(&self) -> i32 {
        let mut harmony = (self.technical + self.aesthetic).div_euclid(2);
        if self.tension > HARMONY_TENSION_THRESHOLD {
            harmony -= 1;
        }
        harmony
    }
}

fn clamp_score(value: i32) -> i32 {
    value.clamp(MIN_SCORE, MAX_SCORE)
}

fn is_high_contrast(contrast: ContrastProfile) -> bool {
    matches!(contrast, ContrastProfile::High | ContrastProfile::Extreme)
}

fn technical_score(technical: &TechnicalProfile) -> i32 {
    let mut score = BASE_SCORE;

    // Good for portraits
    if technical.focal_length_category == FocalLengthCategory::MediumTelephoto {
        score += 1;
    }
    if technical.composition_strategy == CompositionStrategy::TightCrop {
        score += 1;
    }
    if technical.focal_length_category == FocalLengthCategory::Wide
        && technical.composition_strategy == CompositionStrategy::Environmental
    {
        score += 1;
    }

    score
}

fn aesthetic_score(visual: &VisualTreatmentProfile, technical: &TechnicalProfile) -> i32 {
    let mut score = BASE_SCORE;

    if visual.color_category == ColorPaletteCategory::Muted
        && visual.lighting_approach == LightingApproach::SoftDiffused
    {
        score += 1;
    }
    if visual.color_category == ColorPaletteCategory::Vibrant
        && is_high_contrast(visual.contrast_profile)
    {
        score += 1;
    }
    if visual.lighting_approach == LightingApproach::HardDirectional
        && is_high_contrast(visual.contrast_profile)
    {
        score += 1;
    }
    if visual.texture_emphasis == TextureEmphasis::Sharp
        && technical.composition_strategy == CompositionStrategy::Geometric
    {
        score += 1;
    }

    score
}

/// Classify how a magazine era lines up with a photography style
///
/// Era keys are matched case-sensitively against the raw era label; the
/// style name is lower-cased first. [`TemporalAlignment::TemporalClash`] is
/// never produced.
pub fn temporal_alignment(magazine_era: &str, style_name: &str) -> TemporalAlignment {
    let name = style_name.to_lowercase();
    let name_has = |keywords: &[&str]| keywords.iter().any(|k| name.contains(k));

    if magazine_era.contains("1960") || magazine_era.contains("1970") {
        if name_has(&["documentary", "street"]) || name_has(&["studio", "fashion"]) {
            TemporalAlignment::EraMatched
        } else {
            TemporalAlignment::CreativeAnachronism
        }
    } else if ["contemporary", "2000", "2010"]
        .iter()
        .any(|k| magazine_era.contains(k))
    {
        if name_has(&["cinematic", "drone"]) {
            TemporalAlignment::EraMatched
        } else {
            TemporalAlignment::CreativeAnachronism
        }
    } else {
        TemporalAlignment::CreativeAnachronism
    }
}

/// Compute pre-clamp scores
pub fn score_raw(
    visual: &VisualTreatmentProfile,
    technical: &TechnicalProfile,
    magazine_era: &str,
    style_name: &str,
) -> RawScores {
    let temporal_alignment = temporal_alignment(magazine_era, style_name);

    let mut tension = BASE_SCORE;
    if temporal_alignment == TemporalAlignment::CreativeAnachronism {
        tension += 2;
    }
    if visual.contrast_profile == ContrastProfile::Extreme
        && technical.composition_strategy == CompositionStrategy::Minimalist
    {
        tension += 1;
    }

    RawScores {
        technical: technical_score(technical),
        aesthetic: aesthetic_score(visual, technical),
        tension,
        temporal_alignment,
    }
}

/// Score a classified magazine against a classified photography style
pub fn score(
    visual: &VisualTreatmentProfile,
    technical: &TechnicalProfile,
    magazine_era: &str,
    style_name: &str,
) -> CompatibilityScore {
    let raw = score_raw(visual, technical, magazine_era, style_name);

    let rationale = format!(
        "Magazine: {} colors, {} lighting. Photography: {} composition, {} focal length. Temporal: {}.",
        visual.color_category,
        visual.lighting_approach,
        technical.composition_strategy,
        technical.focal_length_category,
        raw.temporal_alignment,
    );

    CompatibilityScore {
        overall_harmony: clamp_score(raw.harmony()),
        technical_score: clamp_score(raw.technical),
        aesthetic_score: clamp_score(raw.aesthetic),
        creative_tension: clamp_score(raw.tension),
        temporal_alignment: raw.temporal_alignment,
        rationale,
    }
}

/// Classify both records and score them, using the magazine era label and
/// the photography style name for temporal alignment
pub fn calculate_compatibility(
    magazine: &MagazineRecord,
    style: &PhotographyStyle,
) -> CompatibilityScore {
    let visual = classify_visual(magazine);
    let technical = classify_technical(style);
    score(&visual, &technical, &magazine.era.label, &style.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{DepthOfField, SubjectContext};

    fn visual(
        color: ColorPaletteCategory,
        lighting: LightingApproach,
        contrast: ContrastProfile,
        texture: TextureEmphasis,
    ) -> VisualTreatmentProfile {
        VisualTreatmentProfile {
            color_palette: String::new(),
            color_category: color,
            lighting: String::new(),
            lighting_approach: lighting,
            contrast: String::new(),
            contrast_profile: contrast,
            texture: String::new(),
            texture_emphasis: texture,
        }
    }

    fn technical(composition: CompositionStrategy, focal: FocalLengthCategory) -> TechnicalProfile {
        TechnicalProfile {
            composition_strategy: composition,
            focal_length_category: focal,
            subject_context: SubjectContext::Abstract,
            framing_description: String::new(),
            depth_of_field: DepthOfField::Moderate,
            typical_aperture_range: String::new(),
        }
    }

    fn neutral_visual() -> VisualTreatmentProfile {
        visual(
            ColorPaletteCategory::Mixed,
            LightingApproach::Dramatic,
            ContrastProfile::Medium,
            TextureEmphasis::Organic,
        )
    }

    #[test]
    fn test_base_scores() {
        let result = score(
            &neutral_visual(),
            &technical(CompositionStrategy::Asymmetrical, FocalLengthCategory::Standard),
            "1960s",
            "Documentary Photography",
        );
        assert_eq!(result.technical_score, 5);
        assert_eq!(result.aesthetic_score, 5);
        assert_eq!(result.creative_tension, 5);
        assert_eq!(result.overall_harmony, 5);
        assert_eq!(result.temporal_alignment, TemporalAlignment::EraMatched);
    }

    #[test]
    fn test_technical_bonuses_stack() {
        let raw = score_raw(
            &neutral_visual(),
            &technical(CompositionStrategy::TightCrop, FocalLengthCategory::MediumTelephoto),
            "",
            "",
        );
        assert_eq!(raw.technical, 7);

        let raw = score_raw(
            &neutral_visual(),
            &technical(CompositionStrategy::Environmental, FocalLengthCategory::Wide),
            "",
            "",
        );
        assert_eq!(raw.technical, 6);
    }

    #[test]
    fn test_aesthetic_bonuses() {
        let tech = technical(CompositionStrategy::Geometric, FocalLengthCategory::Standard);

        let raw = score_raw(
            &visual(
                ColorPaletteCategory::Vibrant,
                LightingApproach::HardDirectional,
                ContrastProfile::Extreme,
                TextureEmphasis::Sharp,
            ),
            &tech,
            "",
            "",
        );
        // vibrant+extreme, hard+extreme, sharp+geometric
        assert_eq!(raw.aesthetic, 8);

        let raw = score_raw(
            &visual(
                ColorPaletteCategory::Muted,
                LightingApproach::SoftDiffused,
                ContrastProfile::Low,
                TextureEmphasis::Ethereal,
            ),
            &tech,
            "",
            "",
        );
        assert_eq!(raw.aesthetic, 6);
    }

    #[test]
    fn test_temporal_alignment_rules() {
        assert_eq!(
            temporal_alignment("1970s", "Street Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("1960s", "Fashion Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("1960s", "Drone Photography"),
            TemporalAlignment::CreativeAnachronism
        );
        assert_eq!(
            temporal_alignment("2010s", "Cinematic Photography"),
            TemporalAlignment::EraMatched
        );
        assert_eq!(
            temporal_alignment("contemporary", "Street Photography"),
            TemporalAlignment::CreativeAnachronism
        );
        assert_eq!(
            temporal_alignment("1990s", "Documentary Photography"),
            TemporalAlignment::CreativeAnachronism
        );
    }

    #[test]
    fn test_era_match_is_case_sensitive() {
        assert_eq!(
            temporal_alignment("Contemporary", "Drone Photography"),
            TemporalAlignment::CreativeAnachronism
        );
    }

    #[test]
    fn test_temporal_clash_never_produced() {
        let eras = ["1960s", "1970s", "2000s", "2010s", "contemporary", "1980s", ""];
        let names = ["Documentary", "Street", "Studio", "Fashion", "Cinematic", "Drone", "Macro", ""];
        for era in eras {
            for name in names {
                assert_ne!(temporal_alignment(era, name), TemporalAlignment::TemporalClash);
            }
        }
    }

    #[test]
    fn test_harmony_penalty_only_at_tension_eight() {
        let hard_extreme = visual(
            ColorPaletteCategory::Mixed,
            LightingApproach::HardDirectional,
            ContrastProfile::Extreme,
            TextureEmphasis::Organic,
        );
        let minimalist = technical(CompositionStrategy::Minimalist, FocalLengthCategory::Standard);

        // anachronism + extreme/minimalist: tension 8
        let raw = score_raw(&hard_extreme, &minimalist, "1980s", "Macro Photography");
        assert_eq!(raw.tension, 8);
        assert_eq!(raw.technical, 5);
        assert_eq!(raw.aesthetic, 6);
        assert_eq!(raw.harmony(), 4);

        // anachronism only: tension 7, no penalty
        let asym = technical(CompositionStrategy::Asymmetrical, FocalLengthCategory::Standard);
        let raw = score_raw(&hard_extreme, &asym, "1980s", "Macro Photography");
        assert_eq!(raw.tension, 7);
        assert_eq!(raw.harmony(), 5);

        // era matched + extreme/minimalist: tension 6
        let raw = score_raw(&hard_extreme, &minimalist, "1960s", "Street Photography");
        assert_eq!(raw.tension, 6);
        assert_eq!(raw.harmony(), 5);
    }

    #[test]
    fn test_all_category_combinations_stay_in_range() {
        for &color in ColorPaletteCategory::all_variants() {
            for &lighting in LightingApproach::all_variants() {
                for &contrast in ContrastProfile::all_variants() {
                    for &texture in TextureEmphasis::all_variants() {
                        let vis = visual(color, lighting, contrast, texture);
                        for &composition in CompositionStrategy::all_variants() {
                            for &focal in FocalLengthCategory::all_variants() {
                                let tech = technical(composition, focal);
                                for (era, name) in [
                                    ("1960s", "Documentary"),
                                    ("2010s", "Portrait"),
                                    ("1990s", "Drone"),
                                ] {
                                    let raw = score_raw(&vis, &tech, era, name);
                                    let result = score(&vis, &tech, era, name);
                                    for value in [
                                        result.overall_harmony,
                                        result.technical_score,
                                        result.aesthetic_score,
                                        result.creative_tension,
                                    ] {
                                        assert!((MIN_SCORE..=MAX_SCORE).contains(&value));
                                    }
                                    let expected = clamp_score(
                                        (raw.technical + raw.aesthetic) / 2
                                            - i32::from(raw.tension > 7),
                                    );
                                    assert_eq!(result.overall_harmony, expected);
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_rationale_template() {
        let result = score(
            &visual(
                ColorPaletteCategory::Muted,
                LightingApproach::SoftDiffused,
                ContrastProfile::Low,
                TextureEmphasis::Organic,
            ),
            &technical(CompositionStrategy::Environmental, FocalLengthCategory::Standard),
            "1990s",
            "Portrait Photography",
        );
        assert_eq!(
            result.rationale,
            "Magazine: muted colors, soft_diffused lighting. Photography: environmental \
             composition, standard focal length. Temporal: creative_anachronism."
        );
    }
}
