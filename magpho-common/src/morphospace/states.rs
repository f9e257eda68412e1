//! Canonical aesthetic states
//!
//! Coordinate order: saturation, contrast, texture, warmth, mood, formality.

use serde::Serialize;

use super::{AestheticState, MorphospaceError};

/// Named reference point in the morphospace
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CanonicalState {
    pub name: &'static str,
    pub description: &'static str,
    pub coordinates: AestheticState,
}

pub const CANONICAL_STATES: &[CanonicalState] = &[
    CanonicalState {
        name: "editorial_glamour",
        description: "High-fashion gloss: saturated color, polished skin, staged drama",
        coordinates: AestheticState::new([0.85, 0.75, 0.30, 0.65, 0.80, 0.90]),
    },
    CanonicalState {
        name: "minimalist_modern",
        description: "Quiet restraint: muted palette, clean surfaces, open negative space",
        coordinates: AestheticState::new([0.20, 0.45, 0.15, 0.45, 0.25, 0.35]),
    },
    CanonicalState {
        name: "documentary_raw",
        description: "Unstaged reportage: gritty texture, available light, candid framing",
        coordinates: AestheticState::new([0.40, 0.65, 0.85, 0.50, 0.60, 0.10]),
    },
    CanonicalState {
        name: "vintage_film",
        description: "Analog nostalgia: warm cast, visible grain, gentle tonal roll-off",
        coordinates: AestheticState::new([0.45, 0.40, 0.75, 0.80, 0.45, 0.40]),
    },
    CanonicalState {
        name: "cinematic_noir",
        description: "Hard shadows and crushed blacks, near-monochrome, heavy atmosphere",
        coordinates: AestheticState::new([0.10, 0.95, 0.60, 0.30, 0.95, 0.70]),
    },
    CanonicalState {
        name: "dreamy_pastel",
        description: "Soft haze, lifted shadows, pale color and weightless mood",
        coordinates: AestheticState::new([0.35, 0.20, 0.20, 0.60, 0.30, 0.50]),
    },
    CanonicalState {
        name: "pop_vibrant",
        description: "Bold primaries, punchy contrast, playful graphic energy",
        coordinates: AestheticState::new([0.95, 0.80, 0.25, 0.70, 0.70, 0.55]),
    },
];

pub fn state_names() -> Vec<String> {
    CANONICAL_STATES.iter().map(|s| s.name.to_string()).collect()
}

/// Look up a canonical state by exact name
pub fn canonical_state(name: &str) -> Result<&'static CanonicalState, MorphospaceError> {
    CANONICAL_STATES
        .iter()
        .find(|state| state.name == name)
        .ok_or_else(|| MorphospaceError::UnknownState {
            name: name.to_string(),
            available: state_names(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seven_unique_states() {
        assert_eq!(CANONICAL_STATES.len(), 7);
        let names: HashSet<_> = CANONICAL_STATES.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_coordinates_in_unit_range() {
        for state in CANONICAL_STATES {
            for (axis, value) in state.coordinates.iter() {
                assert!(
                    (0.0..=1.0).contains(&value),
                    "{}.{} = {} out of range",
                    state.name,
                    axis,
                    value
                );
            }
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(canonical_state("vintage_film").unwrap().name, "vintage_film");

        match canonical_state("baroque") {
            Err(MorphospaceError::UnknownState { name, available }) => {
                assert_eq!(name, "baroque");
                assert_eq!(available.len(), 7);
                assert_eq!(available[0], "editorial_glamour");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }
}
