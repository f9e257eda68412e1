//! End-to-end scoring scenarios: records → profiles → compatibility

use std::path::PathBuf;

use magpho_common::catalog::{
    AestheticDetails, Catalog, MagazineRecord, PhotographyStyle, TechnicalDetails,
    VisualTreatment,
};
use magpho_common::compatibility::score_raw;
use magpho_common::taxonomy::{
    ColorPaletteCategory, CompositionStrategy, DepthOfField, FocalLengthCategory,
    LightingApproach, SubjectContext, TemporalAlignment,
};
use magpho_common::{calculate_compatibility, classify_technical, classify_visual};

fn fixture_catalog() -> Catalog {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cache");
    Catalog::load(&dir).unwrap()
}

#[test]
fn test_muted_soft_magazine_with_environmental_style() {
    let mut magazine = MagazineRecord {
        name: "Quiet Interiors (1990s)".to_string(),
        visual_treatment: VisualTreatment {
            color_palette: "muted pastel tones".to_string(),
            lighting: "soft diffused window light".to_string(),
            contrast: "balanced midtones".to_string(),
            texture: String::new(),
        },
        ..Default::default()
    };
    magazine.era.label = "1990s".to_string();

    let style = PhotographyStyle {
        name: "Lifestyle Photography".to_string(),
        technical: TechnicalDetails {
            focal_length: "50mm".to_string(),
            typical_aperture_range: None,
        },
        aesthetic: AestheticDetails {
            composition: "subjects shown in environmental context".to_string(),
        },
        ..Default::default()
    };

    let visual = classify_visual(&magazine);
    assert_eq!(visual.color_category, ColorPaletteCategory::Muted);
    assert_eq!(visual.lighting_approach, LightingApproach::SoftDiffused);

    let technical = classify_technical(&style);
    assert_eq!(technical.composition_strategy, CompositionStrategy::Environmental);
    assert_eq!(technical.focal_length_category, FocalLengthCategory::Standard);
    assert_eq!(technical.typical_aperture_range, "f/2.8-f/5.6");

    let raw = score_raw(&visual, &technical, &magazine.era.label, &style.name);
    assert!(raw.tension <= 7);

    let scores = calculate_compatibility(&magazine, &style);
    assert_eq!(scores.aesthetic_score, 6);
    assert_eq!(scores.technical_score, 5);
    assert_eq!(scores.overall_harmony, 5);
}

#[test]
fn test_fixture_pairs_live_scores() {
    let catalog = fixture_catalog();

    let kinfolk = catalog.find_magazine("Kinfolk (2010s)").unwrap();
    let documentary = catalog.find_style("Documentary Photography").unwrap();
    let scores = calculate_compatibility(kinfolk, documentary);
    assert_eq!(scores.technical_score, 6);
    assert_eq!(scores.aesthetic_score, 6);
    assert_eq!(scores.creative_tension, 7);
    assert_eq!(scores.overall_harmony, 6);
    assert_eq!(scores.temporal_alignment, TemporalAlignment::CreativeAnachronism);

    let life = catalog.find_magazine("Life (1960s)").unwrap();
    let scores = calculate_compatibility(life, documentary);
    assert_eq!(scores.temporal_alignment, TemporalAlignment::EraMatched);
    assert_eq!(scores.creative_tension, 5);
    assert_eq!(scores.overall_harmony, 5);
    assert_eq!(
        scores.rationale,
        "Magazine: warm colors, natural_ambient lighting. Photography: environmental \
         composition, wide focal length. Temporal: era_matched."
    );
}

#[test]
fn test_fixture_portrait_profile() {
    let catalog = fixture_catalog();

    let portrait = classify_technical(catalog.find_style("Portrait Photography").unwrap());
    assert_eq!(portrait.focal_length_category, FocalLengthCategory::MediumTelephoto);
    assert_eq!(portrait.composition_strategy, CompositionStrategy::TightCrop);
    assert_eq!(portrait.subject_context, SubjectContext::People);
    assert_eq!(portrait.depth_of_field, DepthOfField::Shallow);

    let vogue = catalog.find_magazine("Vogue (1990s)").unwrap();
    let scores = calculate_compatibility(vogue, catalog.find_style("Portrait Photography").unwrap());
    assert_eq!(scores.technical_score, 7);
    assert_eq!(scores.aesthetic_score, 7);
    assert_eq!(scores.overall_harmony, 7);
}

#[test]
fn test_every_fixture_pair_stays_in_range() {
    let catalog = fixture_catalog();
    for magazine in catalog.magazines() {
        for style in catalog.photography() {
            let scores = calculate_compatibility(magazine, style);
            for value in [
                scores.overall_harmony,
                scores.technical_score,
                scores.aesthetic_score,
                scores.creative_tension,
            ] {
                assert!((1..=10).contains(&value), "{} × {}", magazine.name, style.name);
            }
            assert_ne!(scores.temporal_alignment, TemporalAlignment::TemporalClash);
        }
    }
}
