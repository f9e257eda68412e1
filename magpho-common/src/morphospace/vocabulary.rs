//! Visual vocabulary: named morphospace coordinates with prompt keywords
//!
//! Used only as nearest-neighbor targets. Catalog order matters: when two
//! types are equally close, the one listed first wins.

use serde::Serialize;

use super::{distance, AestheticState, MorphospaceError};

/// Optical description attached to a visual type
#[derive(Debug, Clone, Copy, Serialize)]
pub struct OpticalProperties {
    pub finish: &'static str,
    pub lighting: &'static str,
    pub grain: &'static str,
    pub depth_of_field: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct VisualType {
    pub name: &'static str,
    pub coordinates: AestheticState,
    pub keywords: &'static [&'static str],
    pub optical_properties: OpticalProperties,
}

/// Result of a nearest-neighbor lookup
#[derive(Debug, Clone, Copy, Serialize)]
pub struct VocabularyMatch {
    pub type_name: &'static str,
    pub distance: f64,
    pub visual_type: &'static VisualType,
}

pub const VISUAL_TYPES: &[VisualType] = &[
    VisualType {
        name: "glossy_editorial",
        coordinates: AestheticState::new([0.80, 0.70, 0.25, 0.60, 0.75, 0.85]),
        keywords: &["high-gloss editorial", "retouched skin", "couture styling", "studio strobes"],
        optical_properties: OpticalProperties {
            finish: "glossy, retouched",
            lighting: "beauty dish key with crisp fill",
            grain: "none",
            depth_of_field: "moderate, subject isolated",
        },
    },
    VisualType {
        name: "clean_minimal",
        coordinates: AestheticState::new([0.20, 0.40, 0.10, 0.45, 0.20, 0.40]),
        keywords: &["clean lines", "negative space", "muted neutrals", "quiet composition"],
        optical_properties: OpticalProperties {
            finish: "matte, even",
            lighting: "large soft source, low shadow density",
            grain: "none",
            depth_of_field: "deep, everything legible",
        },
    },
    VisualType {
        name: "gritty_reportage",
        coordinates: AestheticState::new([0.35, 0.70, 0.90, 0.45, 0.65, 0.10]),
        keywords: &["gritty reportage", "available light", "pushed film grain", "candid moment"],
        optical_properties: OpticalProperties {
            finish: "raw, unpolished",
            lighting: "available light, uncorrected",
            grain: "heavy, pushed",
            depth_of_field: "deep, zone focused",
        },
    },
    VisualType {
        name: "analog_warmth",
        coordinates: AestheticState::new([0.45, 0.35, 0.70, 0.85, 0.40, 0.35]),
        keywords: &["warm film stock", "faded highlights", "nostalgic cast", "soft grain"],
        optical_properties: OpticalProperties {
            finish: "slightly faded print",
            lighting: "late afternoon sun",
            grain: "fine, organic",
            depth_of_field: "moderate",
        },
    },
    VisualType {
        name: "chiaroscuro_drama",
        coordinates: AestheticState::new([0.10, 0.95, 0.55, 0.25, 0.95, 0.70]),
        keywords: &["chiaroscuro", "deep shadows", "single hard key light", "noir atmosphere"],
        optical_properties: OpticalProperties {
            finish: "inky blacks, specular highlights",
            lighting: "hard directional key, no fill",
            grain: "moderate",
            depth_of_field: "shallow, falling into shadow",
        },
    },
    VisualType {
        name: "soft_ethereal",
        coordinates: AestheticState::new([0.30, 0.15, 0.15, 0.60, 0.25, 0.45]),
        keywords: &["ethereal haze", "pastel tones", "diffused glow", "dreamlike softness"],
        optical_properties: OpticalProperties {
            finish: "hazy, low contrast",
            lighting: "backlit, diffused",
            grain: "minimal",
            depth_of_field: "very shallow, creamy bokeh",
        },
    },
    VisualType {
        name: "saturated_pop",
        coordinates: AestheticState::new([0.95, 0.85, 0.20, 0.70, 0.70, 0.50]),
        keywords: &["bold primaries", "punchy contrast", "graphic color blocking", "pop energy"],
        optical_properties: OpticalProperties {
            finish: "high saturation, clean edges",
            lighting: "hard flash, colored gels",
            grain: "none",
            depth_of_field: "deep",
        },
    },
];

pub fn type_names() -> Vec<String> {
    VISUAL_TYPES.iter().map(|t| t.name.to_string()).collect()
}

/// Look up a visual type by exact name
pub fn visual_type(name: &str) -> Result<&'static VisualType, MorphospaceError> {
    VISUAL_TYPES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| MorphospaceError::UnknownVisualType {
            name: name.to_string(),
            available: type_names(),
        })
}

/// Closest visual type to `state`; ties go to the earliest catalog entry
pub fn nearest_vocabulary(state: &AestheticState) -> VocabularyMatch {
    let (best, best_distance) = nearest_in(state, VISUAL_TYPES);

    VocabularyMatch {
        type_name: best.name,
        distance: best_distance,
        visual_type: best,
    }
}

/// Linear scan over a non-empty table, strict `<` keeps the first minimum
fn nearest_in<'a>(state: &AestheticState, table: &'a [VisualType]) -> (&'a VisualType, f64) {
    let mut best = &table[0];
    let mut best_distance = distance(state, &best.coordinates);

    for candidate in &table[1..] {
        let d = distance(state, &candidate.coordinates);
        if d < best_distance {
            best = candidate;
            best_distance = d;
        }
    }

    (best, best_distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::morphospace::canonical_state;

    #[test]
    fn test_exact_coordinate_matches_itself() {
        for visual in VISUAL_TYPES {
            let found = nearest_vocabulary(&visual.coordinates);
            assert_eq!(found.type_name, visual.name);
            assert_eq!(found.distance, 0.0);
        }
    }

    #[test]
    fn test_nearest_is_deterministic() {
        let state = AestheticState::new([0.5, 0.5, 0.5, 0.5, 0.5, 0.5]);
        let first = nearest_vocabulary(&state);
        let second = nearest_vocabulary(&state);
        assert_eq!(first.type_name, second.type_name);
        assert_eq!(first.distance, second.distance);
    }

    #[test]
    fn test_tie_goes_to_first_entry() {
        let mut twin = VISUAL_TYPES[3];
        twin.name = "twin";
        let table = [VISUAL_TYPES[3], twin];

        let (best, d) = nearest_in(&VISUAL_TYPES[3].coordinates, &table);
        assert_eq!(best.name, VISUAL_TYPES[3].name);
        assert_eq!(d, 0.0);

        let table = [twin, VISUAL_TYPES[3]];
        let (best, _) = nearest_in(&AestheticState::uniform(0.5), &table);
        assert_eq!(best.name, "twin");
    }

    #[test]
    fn test_editorial_glamour_maps_to_glossy_editorial() {
        let state = canonical_state("editorial_glamour").unwrap();
        let found = nearest_vocabulary(&state.coordinates);
        assert_eq!(found.type_name, "glossy_editorial");
        assert!((found.distance - (6.0f64 * 0.05 * 0.05).sqrt()).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_type() {
        assert!(visual_type("clean_minimal").is_ok());
        match visual_type("vaporwave") {
            Err(MorphospaceError::UnknownVisualType { available, .. }) => {
                assert_eq!(available.len(), VISUAL_TYPES.len());
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
