//! # Magazine × Photography Common Library
//!
//! Shared code for the magpho tool server including:
//! - Taxonomy enums (color, lighting, contrast, texture, composition, ...)
//! - Profile extraction from free-text catalog records
//! - Deterministic compatibility scoring
//! - 6D aesthetic morphospace, oscillators and rhythmic presets
//! - Catalog loading, search and prompt assembly
//! - Configuration loading

pub mod catalog;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod morphospace;
pub mod presets;
pub mod profiles;
pub mod prompt;
pub mod taxonomy;

pub use catalog::Catalog;
pub use compatibility::{calculate_compatibility, score, CompatibilityScore};
pub use error::{Error, Result};
pub use morphospace::{AestheticState, Axis, MorphospaceError, Pattern};
pub use profiles::{classify_technical, classify_visual, TechnicalProfile, VisualTreatmentProfile};
