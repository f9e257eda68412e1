//! Rhythmic presets and trajectory derivation
//!
//! A preset oscillates between two canonical states. Trajectories are built by
//! running the oscillator once and interpolating every sample between the two
//! endpoint states; keyframes, parameter mapping and distance reports are
//! thin compositions over [`crate::morphospace`].

use serde::Serialize;
use tracing::debug;

use crate::morphospace::{
    canonical_state, distance, lerp, nearest_vocabulary, oscillate, round_to, AestheticState,
    Axis, MorphospaceError, Pattern, VocabularyMatch,
};

/// Extra multiplier applied to the emphasized axis in [`map_parameters`]
pub const EMPHASIS_FACTOR: f64 = 1.2;

/// Decimal places kept by parameter mapping and distance reports
pub const OUTPUT_DECIMALS: i32 = 4;

/// Distance below which a transition reads as smooth
pub const SMOOTH_TRANSITION_MAX: f64 = 0.4;

/// Distance below which a transition reads as moderate
pub const MODERATE_TRANSITION_MAX: f64 = 0.7;

/// Upper bound on trajectory length and keyframe count
pub const MAX_TRAJECTORY_STEPS: usize = 1000;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct RhythmicPreset {
    pub name: &'static str,
    pub state_a: &'static str,
    pub state_b: &'static str,
    pub pattern: Pattern,
    pub num_cycles: f64,
    pub steps_per_cycle: usize,
    pub description: &'static str,
}

impl RhythmicPreset {
    /// Default trajectory length
    pub fn total_steps(&self) -> usize {
        (self.num_cycles * self.steps_per_cycle as f64).round() as usize
    }
}

pub const RHYTHMIC_PRESETS: &[RhythmicPreset] = &[
    RhythmicPreset {
        name: "glamour_pulse",
        state_a: "editorial_glamour",
        state_b: "minimalist_modern",
        pattern: Pattern::Sinusoidal,
        num_cycles: 2.0,
        steps_per_cycle: 10,
        description: "Breathes between full editorial gloss and stripped-back restraint",
    },
    RhythmicPreset {
        name: "noir_flicker",
        state_a: "cinematic_noir",
        state_b: "dreamy_pastel",
        pattern: Pattern::Square,
        num_cycles: 3.0,
        steps_per_cycle: 6,
        description: "Hard cuts between shadow-heavy noir and pale haze",
    },
    RhythmicPreset {
        name: "film_drift",
        state_a: "vintage_film",
        state_b: "documentary_raw",
        pattern: Pattern::Triangular,
        num_cycles: 2.0,
        steps_per_cycle: 8,
        description: "Steady sweep from nostalgic film warmth into raw reportage and back",
    },
    RhythmicPreset {
        name: "pop_breath",
        state_a: "pop_vibrant",
        state_b: "minimalist_modern",
        pattern: Pattern::Sinusoidal,
        num_cycles: 1.0,
        steps_per_cycle: 12,
        description: "One slow inhale from graphic pop color to quiet minimalism",
    },
    RhythmicPreset {
        name: "documentary_swing",
        state_a: "documentary_raw",
        state_b: "editorial_glamour",
        pattern: Pattern::Triangular,
        num_cycles: 3.0,
        steps_per_cycle: 8,
        description: "Alternates candid grit with staged glamour",
    },
];

pub fn preset_names() -> Vec<String> {
    RHYTHMIC_PRESETS.iter().map(|p| p.name.to_string()).collect()
}

pub fn preset(name: &str) -> Result<&'static RhythmicPreset, MorphospaceError> {
    RHYTHMIC_PRESETS
        .iter()
        .find(|p| p.name == name)
        .ok_or_else(|| MorphospaceError::UnknownPreset {
            name: name.to_string(),
            available: preset_names(),
        })
}

/// One trajectory sample
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TrajectoryStep {
    pub step: usize,
    pub alpha: f64,
    pub state: AestheticState,
}

#[derive(Debug, Clone, Serialize)]
pub struct Trajectory {
    pub state_a: String,
    pub state_b: String,
    pub pattern: Pattern,
    pub num_cycles: f64,
    pub steps_per_cycle: usize,
    pub total_steps: usize,
    pub steps: Vec<TrajectoryStep>,
}

/// Interpolate between two states along an oscillation
pub fn build_trajectory(
    a: &AestheticState,
    b: &AestheticState,
    pattern: Pattern,
    num_cycles: f64,
    total_steps: usize,
) -> Vec<TrajectoryStep> {
    oscillate(total_steps, num_cycles, pattern)
        .into_iter()
        .enumerate()
        .map(|(step, alpha)| TrajectoryStep {
            step,
            alpha,
            state: lerp(a, b, alpha),
        })
        .collect()
}

/// Full trajectory for a preset
///
/// With `override_steps`, the length is replaced and the cycle count is
/// recomputed as `override_steps / steps_per_cycle` (possibly fractional).
pub fn trajectory(
    preset: &RhythmicPreset,
    override_steps: Option<usize>,
) -> Result<Trajectory, MorphospaceError> {
    let (total_steps, num_cycles) = match override_steps {
        Some(0) => {
            return Err(MorphospaceError::InvalidParameter(
                "override_steps must be positive".to_string(),
            ))
        }
        Some(steps) if steps > MAX_TRAJECTORY_STEPS => {
            return Err(MorphospaceError::InvalidParameter(format!(
                "override_steps must be at most {}, got {}",
                MAX_TRAJECTORY_STEPS, steps
            )))
        }
        Some(steps) => (steps, steps as f64 / preset.steps_per_cycle as f64),
        None => (preset.total_steps(), preset.num_cycles),
    };

    custom_trajectory(
        preset.state_a,
        preset.state_b,
        preset.pattern,
        num_cycles,
        preset.steps_per_cycle,
        Some(total_steps),
    )
}

/// Trajectory between any two canonical states
///
/// Length defaults to `round(num_cycles × steps_per_cycle)`.
pub fn custom_trajectory(
    state_a: &str,
    state_b: &str,
    pattern: Pattern,
    num_cycles: f64,
    steps_per_cycle: usize,
    total_steps: Option<usize>,
) -> Result<Trajectory, MorphospaceError> {
    if !(num_cycles.is_finite() && num_cycles > 0.0) {
        return Err(MorphospaceError::InvalidParameter(format!(
            "num_cycles must be positive, got {}",
            num_cycles
        )));
    }
    if steps_per_cycle == 0 {
        return Err(MorphospaceError::InvalidParameter(
            "steps_per_cycle must be positive".to_string(),
        ));
    }

    let total_steps = match total_steps {
        Some(steps) => steps,
        None => steps_for_cycles(num_cycles, steps_per_cycle)?,
    };
    if total_steps > MAX_TRAJECTORY_STEPS {
        return Err(MorphospaceError::InvalidParameter(format!(
            "trajectory length must be at most {} steps, got {}",
            MAX_TRAJECTORY_STEPS, total_steps
        )));
    }

    let a = canonical_state(state_a)?;
    let b = canonical_state(state_b)?;

    debug!(
        "Building {} trajectory {} -> {} ({} steps, {} cycles)",
        pattern, state_a, state_b, total_steps, num_cycles
    );

    Ok(Trajectory {
        state_a: a.name.to_string(),
        state_b: b.name.to_string(),
        pattern,
        num_cycles,
        steps_per_cycle,
        total_steps,
        steps: build_trajectory(&a.coordinates, &b.coordinates, pattern, num_cycles, total_steps),
    })
}

/// `round(num_cycles × steps_per_cycle)`, rejected before the cast when it
/// exceeds [`MAX_TRAJECTORY_STEPS`]
fn steps_for_cycles(num_cycles: f64, steps_per_cycle: usize) -> Result<usize, MorphospaceError> {
    let steps = (num_cycles * steps_per_cycle as f64).round();
    if !steps.is_finite() || steps > MAX_TRAJECTORY_STEPS as f64 {
        return Err(MorphospaceError::InvalidParameter(format!(
            "num_cycles × steps_per_cycle must be at most {} steps, got {} × {}",
            MAX_TRAJECTORY_STEPS, num_cycles, steps_per_cycle
        )));
    }
    Ok(steps as usize)
}

/// Trajectory sample resolved against the visual vocabulary
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Keyframe {
    pub step: usize,
    pub state: AestheticState,
    pub visual_match: VocabularyMatch,
}

/// Indices `k × floor(total / keyframe_count)` clamped to the last step
pub fn keyframe_indices(total: usize, keyframe_count: usize) -> Vec<usize> {
    if total == 0 || keyframe_count == 0 {
        return Vec::new();
    }
    let stride = total / keyframe_count;
    (0..keyframe_count)
        .map(|k| (k * stride).min(total - 1))
        .collect()
}

/// Evenly spaced keyframes, each matched to its nearest visual type
pub fn keyframes(
    trajectory: &Trajectory,
    keyframe_count: usize,
) -> Result<Vec<Keyframe>, MorphospaceError> {
    if keyframe_count > MAX_TRAJECTORY_STEPS {
        return Err(MorphospaceError::InvalidParameter(format!(
            "keyframe_count must be at most {}, got {}",
            MAX_TRAJECTORY_STEPS, keyframe_count
        )));
    }

    let frames = keyframe_indices(trajectory.steps.len(), keyframe_count)
        .into_iter()
        .map(|index| {
            let step = &trajectory.steps[index];
            Keyframe {
                step: step.step,
                state: step.state,
                visual_match: nearest_vocabulary(&step.state),
            }
        })
        .collect();
    Ok(frames)
}

/// Global scaling applied by [`map_parameters`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    Subtle,
    Moderate,
    Dramatic,
}

impl Intensity {
    pub fn factor(&self) -> f64 {
        match self {
            Intensity::Subtle => 0.6,
            Intensity::Moderate => 1.0,
            Intensity::Dramatic => 1.4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intensity::Subtle => "subtle",
            Intensity::Moderate => "moderate",
            Intensity::Dramatic => "dramatic",
        }
    }

    pub fn all_variants() -> &'static [Intensity] {
        &[Intensity::Subtle, Intensity::Moderate, Intensity::Dramatic]
    }

    pub fn parse(s: &str) -> Result<Self, MorphospaceError> {
        let lowered = s.trim().to_lowercase();
        Intensity::all_variants()
            .iter()
            .copied()
            .find(|i| i.as_str() == lowered)
            .ok_or_else(|| MorphospaceError::UnknownIntensity {
                name: s.to_string(),
                available: Intensity::all_variants()
                    .iter()
                    .map(|i| i.as_str().to_string())
                    .collect(),
            })
    }
}

/// Scale a state by intensity, optionally boosting one axis
///
/// Every axis is multiplied by the intensity factor and clamped to [0, 1];
/// the emphasis axis gets an extra [`EMPHASIS_FACTOR`] before its clamp.
/// Results are rounded to [`OUTPUT_DECIMALS`] places.
pub fn map_parameters(
    state: &AestheticState,
    intensity: Intensity,
    emphasis: Option<Axis>,
) -> AestheticState {
    let mut mapped = *state;
    for axis in Axis::all() {
        let mut value = state.get(*axis) * intensity.factor();
        if Some(*axis) == emphasis {
            value *= EMPHASIS_FACTOR;
        }
        mapped.set(*axis, value.clamp(0.0, 1.0));
    }
    mapped.rounded(OUTPUT_DECIMALS)
}

/// Mapped parameters for a named canonical state (tool output)
#[derive(Debug, Clone, Serialize)]
pub struct MappedParameters {
    pub state_name: String,
    pub intensity: Intensity,
    pub emphasis: Option<String>,
    pub parameters: AestheticState,
    pub visual_match: VocabularyMatch,
}

/// Resolve names, then [`map_parameters`]
pub fn map_state_parameters(
    state_name: &str,
    intensity: &str,
    emphasis: Option<&str>,
) -> Result<MappedParameters, MorphospaceError> {
    let state = canonical_state(state_name)?;
    let intensity = Intensity::parse(intensity)?;
    let emphasis = emphasis
        .map(|name| {
            Axis::parse(name).ok_or_else(|| MorphospaceError::UnknownAxis {
                name: name.to_string(),
                available: Axis::names(),
            })
        })
        .transpose()?;

    let parameters = map_parameters(&state.coordinates, intensity, emphasis);

    Ok(MappedParameters {
        state_name: state.name.to_string(),
        intensity,
        emphasis: emphasis.map(|a| a.as_str().to_string()),
        parameters,
        visual_match: nearest_vocabulary(&parameters),
    })
}

/// Qualitative size of a move between two states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionCharacterization {
    Smooth,
    Moderate,
    Dramatic,
}

impl TransitionCharacterization {
    pub fn from_distance(distance: f64) -> Self {
        if distance < SMOOTH_TRANSITION_MAX {
            TransitionCharacterization::Smooth
        } else if distance < MODERATE_TRANSITION_MAX {
            TransitionCharacterization::Moderate
        } else {
            TransitionCharacterization::Dramatic
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AestheticDistanceReport {
    pub state_a: String,
    pub state_b: String,
    pub distance: f64,
    /// Absolute per-axis difference, axis order
    pub axis_differences: AestheticState,
    pub largest_difference_axis: String,
    pub transition_characterization: TransitionCharacterization,
}

/// Compare two canonical states
pub fn aesthetic_distance(state_a: &str, state_b: &str) -> Result<AestheticDistanceReport, MorphospaceError> {
    let a = canonical_state(state_a)?;
    let b = canonical_state(state_b)?;

    let raw_distance = distance(&a.coordinates, &b.coordinates);

    let mut differences = AestheticState::uniform(0.0);
    let mut largest = Axis::Saturation;
    for axis in Axis::all() {
        let diff = (a.coordinates.get(*axis) - b.coordinates.get(*axis)).abs();
        differences.set(*axis, diff);
        if diff > differences.get(largest) {
            largest = *axis;
        }
    }

    Ok(AestheticDistanceReport {
        state_a: a.name.to_string(),
        state_b: b.name.to_string(),
        distance: round_to(raw_distance, OUTPUT_DECIMALS),
        axis_differences: differences.rounded(OUTPUT_DECIMALS),
        largest_difference_axis: largest.as_str().to_string(),
        transition_characterization: TransitionCharacterization::from_distance(raw_distance),
    })
}
