//! 6-dimensional aesthetic morphospace
//!
//! Aesthetic states are points with six axes, each nominally in [0.0, 1.0].
//! The canonical states and the visual vocabulary are static tables; every
//! other state is computed on demand (interpolation, parameter mapping,
//! custom coordinates supplied by a caller).

pub mod oscillation;
pub mod states;
pub mod vocabulary;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

pub use oscillation::{oscillate, Pattern};
pub use states::{canonical_state, CanonicalState, CANONICAL_STATES};
pub use vocabulary::{nearest_vocabulary, visual_type, OpticalProperties, VisualType, VocabularyMatch, VISUAL_TYPES};

/// Number of morphospace axes
pub const AXIS_COUNT: usize = 6;

/// Morphospace axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Color intensity, muted (0) to vivid (1)
    Saturation,
    /// Tonal separation, flat (0) to extreme (1)
    Contrast,
    /// Surface detail and grain, clean (0) to gritty (1)
    Texture,
    /// Color temperature, cool (0) to warm (1)
    Warmth,
    /// Emotional intensity, subtle (0) to dramatic (1)
    Mood,
    /// Staging, candid (0) to fully styled (1)
    Formality,
}

impl Axis {
    /// All axes in coordinate order
    pub fn all() -> &'static [Axis; AXIS_COUNT] {
        &[
            Axis::Saturation,
            Axis::Contrast,
            Axis::Texture,
            Axis::Warmth,
            Axis::Mood,
            Axis::Formality,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Saturation => "saturation",
            Axis::Contrast => "contrast",
            Axis::Texture => "texture",
            Axis::Warmth => "warmth",
            Axis::Mood => "mood",
            Axis::Formality => "formality",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        Axis::all().iter().copied().find(|axis| axis.as_str() == s)
    }

    /// Position of this axis in a coordinate array
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn names() -> Vec<String> {
        Axis::all().iter().map(|a| a.as_str().to_string()).collect()
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Morphospace errors
///
/// Everything except [`MorphospaceError::InvalidPattern`] is a lookup or
/// input problem that callers report back as a structured result. An invalid
/// pattern means the caller skipped validation and is treated as a hard
/// failure.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MorphospaceError {
    #[error("Unknown aesthetic state '{name}'")]
    UnknownState { name: String, available: Vec<String> },

    #[error("Unknown rhythmic preset '{name}'")]
    UnknownPreset { name: String, available: Vec<String> },

    #[error("Unknown visual type '{name}'")]
    UnknownVisualType { name: String, available: Vec<String> },

    #[error("Unknown axis '{name}'")]
    UnknownAxis { name: String, available: Vec<String> },

    #[error("Unknown intensity '{name}'")]
    UnknownIntensity { name: String, available: Vec<String> },

    #[error("Custom state is missing required axes: {}", missing.join(", "))]
    MissingAxes { missing: Vec<String>, required: Vec<String> },

    #[error("Invalid oscillation pattern '{0}' (expected sinusoidal, triangular or square)")]
    InvalidPattern(String),

    #[error("Invalid trajectory parameter: {0}")]
    InvalidParameter(String),
}

impl MorphospaceError {
    /// True for errors that must fail the call instead of being reported
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MorphospaceError::InvalidPattern(_) | MorphospaceError::InvalidParameter(_)
        )
    }

    /// Structured error record: the message plus the valid alternatives
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("error".to_string(), Value::String(self.to_string()));

        match self {
            MorphospaceError::UnknownState { available, .. } => {
                record.insert("available_states".to_string(), available.clone().into());
            }
            MorphospaceError::UnknownPreset { available, .. } => {
                record.insert("available_presets".to_string(), available.clone().into());
            }
            MorphospaceError::UnknownVisualType { available, .. } => {
                record.insert("available_types".to_string(), available.clone().into());
            }
            MorphospaceError::UnknownAxis { available, .. } => {
                record.insert("available_axes".to_string(), available.clone().into());
            }
            MorphospaceError::UnknownIntensity { available, .. } => {
                record.insert("available_intensities".to_string(), available.clone().into());
            }
            MorphospaceError::MissingAxes { missing, required } => {
                record.insert("missing_axes".to_string(), missing.clone().into());
                record.insert("required_axes".to_string(), required.clone().into());
            }
            MorphospaceError::InvalidPattern(_) | MorphospaceError::InvalidParameter(_) => {}
        }

        Value::Object(record)
    }
}

/// Point in the morphospace, coordinates indexed by [`Axis::index`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AestheticState(pub [f64; AXIS_COUNT]);

impl AestheticState {
    pub const fn new(coords: [f64; AXIS_COUNT]) -> Self {
        Self(coords)
    }

    /// State with every axis at `value`
    pub const fn uniform(value: f64) -> Self {
        Self([value; AXIS_COUNT])
    }

    pub fn get(&self, axis: Axis) -> f64 {
        self.0[axis.index()]
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        self.0[axis.index()] = value;
    }

    /// Iterate `(axis, value)` pairs in axis order
    pub fn iter(&self) -> impl Iterator<Item = (Axis, f64)> + '_ {
        Axis::all().iter().map(move |axis| (*axis, self.get(*axis)))
    }

    /// Build a state from a JSON object keyed by axis name
    ///
    /// Extra keys are ignored. Missing or non-numeric axes are reported
    /// together in [`MorphospaceError::MissingAxes`].
    pub fn from_json_map(map: &Map<String, Value>) -> Result<Self, MorphospaceError> {
        let mut coords = [0.0; AXIS_COUNT];
        let mut missing = Vec::new();

        for axis in Axis::all() {
            match map.get(axis.as_str()).and_then(Value::as_f64) {
                Some(value) => coords[axis.index()] = value,
                None => missing.push(axis.as_str().to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(MorphospaceError::MissingAxes {
                missing,
                required: Axis::names(),
            });
        }
        Ok(Self(coords))
    }

    /// Copy with every coordinate rounded to `decimals` places
    pub fn rounded(&self, decimals: i32) -> Self {
        let mut coords = self.0;
        for value in coords.iter_mut() {
            *value = round_to(*value, decimals);
        }
        Self(coords)
    }
}

impl Serialize for AestheticState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(AXIS_COUNT))?;
        for (axis, value) in self.iter() {
            map.serialize_entry(axis.as_str(), &value)?;
        }
        map.end()
    }
}

/// Round to a fixed number of decimal places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Per-axis linear interpolation: `a·(1-alpha) + b·alpha`
pub fn lerp(a: &AestheticState, b: &AestheticState, alpha: f64) -> AestheticState {
    let mut coords = [0.0; AXIS_COUNT];
    for (i, value) in coords.iter_mut().enumerate() {
        *value = a.0[i] * (1.0 - alpha) + b.0[i] * alpha;
    }
    AestheticState(coords)
}

/// Euclidean distance over all six axes
pub fn distance(x: &AestheticState, y: &AestheticState) -> f64 {
    x.0.iter()
        .zip(y.0.iter())
        .map(|(a, b)| (a - b) * (a - b))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_a() -> AestheticState {
        AestheticState::new([0.1, 0.2, 0.3, 0.4, 0.5, 0.6])
    }

    fn sample_b() -> AestheticState {
        AestheticState::new([0.9, 0.7, 0.0, 1.0, 0.25, 0.6])
    }

    #[test]
    fn test_axis_parse_and_index() {
        for (i, axis) in Axis::all().iter().enumerate() {
            assert_eq!(axis.index(), i);
            assert_eq!(Axis::parse(axis.as_str()), Some(*axis));
        }
        assert_eq!(Axis::parse("MOOD"), Some(Axis::Mood));
        assert_eq!(Axis::parse("brightness"), None);
    }

    #[test]
    fn test_lerp_boundaries() {
        let (a, b) = (sample_a(), sample_b());
        assert_eq!(lerp(&a, &b, 0.0), a);
        assert_eq!(lerp(&a, &b, 1.0), b);

        let mid = lerp(&a, &b, 0.5);
        assert!((mid.get(Axis::Saturation) - 0.5).abs() < 1e-12);
        assert!((mid.get(Axis::Formality) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_distance_symmetry_and_identity() {
        let (a, b) = (sample_a(), sample_b());
        assert_eq!(distance(&a, &b), distance(&b, &a));
        assert_eq!(distance(&a, &a), 0.0);
        assert!((distance(&AestheticState::uniform(0.0), &AestheticState::uniform(1.0)) - 6f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_from_json_map_reports_missing_axes() {
        let value = json!({"saturation": 0.5, "contrast": 0.5, "mood": "loud", "extra": 1.0});
        let err = AestheticState::from_json_map(value.as_object().unwrap()).unwrap_err();
        match err {
            MorphospaceError::MissingAxes { missing, required } => {
                assert_eq!(missing, vec!["texture", "warmth", "mood", "formality"]);
                assert_eq!(required.len(), AXIS_COUNT);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_from_json_map_complete() {
        let value = json!({
            "saturation": 0.1, "contrast": 0.2, "texture": 0.3,
            "warmth": 0.4, "mood": 0.5, "formality": 0.6
        });
        let state = AestheticState::from_json_map(value.as_object().unwrap()).unwrap();
        assert_eq!(state, sample_a());
    }

    #[test]
    fn test_serialize_keeps_axis_order() {
        let json = serde_json::to_string(&sample_a()).unwrap();
        assert_eq!(
            json,
            r#"{"saturation":0.1,"contrast":0.2,"texture":0.3,"warmth":0.4,"mood":0.5,"formality":0.6}"#
        );
    }

    #[test]
    fn test_error_records() {
        let err = MorphospaceError::UnknownState {
            name: "nope".to_string(),
            available: vec!["a".to_string(), "b".to_string()],
        };
        assert!(!err.is_fatal());
        let record = err.to_record();
        assert_eq!(record["error"], "Unknown aesthetic state 'nope'");
        assert_eq!(record["available_states"], json!(["a", "b"]));

        assert!(MorphospaceError::InvalidPattern("sawtooth".to_string()).is_fatal());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456, 4), 0.1235);
        assert_eq!(round_to(1.0, 4), 1.0);
    }
}
