//! Oscillation generators for rhythmic trajectories
//!
//! Provides three periodic waveforms normalized to [0.0, 1.0]. Sample `i` of
//! `num_steps` sits at phase `t_i = 2π × num_cycles × i / num_steps`, and
//! `u = (t_i / 2π) mod 1` is the fractional position inside the current cycle.
//!
//! `u` is computed from the cycle count `num_cycles × i / num_steps` directly
//! so that half-period boundaries land exactly on 0.5.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use std::str::FromStr;

use super::MorphospaceError;

/// Oscillation waveform
///
/// Each pattern has a distinct feel when driving interpolation:
/// - Sinusoidal: smooth breathing between states, starts halfway (0.5)
/// - Triangular: constant-rate sweep out and back, starts at 0.0
/// - Square: hard cut between the two states, starts at 0.0
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// v = 0.5 × (1 + sin(t))
    Sinusoidal,

    /// v = 2u for u < 0.5, else 2(1 - u)
    Triangular,

    /// v = 0 for u < 0.5, else 1
    Square,
}

impl Pattern {
    /// Waveform value after `cycles` periods (t = 2π × cycles)
    pub fn value_at(&self, cycles: f64) -> f64 {
        let u = cycles.rem_euclid(1.0);

        match self {
            Pattern::Sinusoidal => 0.5 * (1.0 + (TAU * cycles).sin()),
            Pattern::Triangular => {
                if u < 0.5 {
                    2.0 * u
                } else {
                    2.0 * (1.0 - u)
                }
            }
            Pattern::Square => {
                if u < 0.5 {
                    0.0
                } else {
                    1.0
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Pattern::Sinusoidal => "sinusoidal",
            Pattern::Triangular => "triangular",
            Pattern::Square => "square",
        }
    }

    pub fn all_variants() -> &'static [Pattern] {
        &[Pattern::Sinusoidal, Pattern::Triangular, Pattern::Square]
    }
}

impl FromStr for Pattern {
    type Err = MorphospaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sinusoidal" => Ok(Pattern::Sinusoidal),
            "triangular" => Ok(Pattern::Triangular),
            "square" => Ok(Pattern::Square),
            _ => Err(MorphospaceError::InvalidPattern(s.to_string())),
        }
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate `num_steps` oscillator samples covering `num_cycles` periods
///
/// `num_cycles` may be fractional; it only changes where the samples land on
/// the waveform.
pub fn oscillate(num_steps: usize, num_cycles: f64, pattern: Pattern) -> Vec<f64> {
    (0..num_steps)
        .map(|i| pattern.value_at(num_cycles * i as f64 / num_steps as f64))
        .collect()
}
