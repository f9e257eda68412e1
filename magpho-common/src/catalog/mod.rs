//! Aesthetic catalog: magazines, photography styles and their combinations
//!
//! The catalog is read once from a cache directory holding three JSON arrays
//! and is immutable afterwards. Lookups go through name indexes; listings
//! keep file order.

pub mod models;
pub mod search;
pub mod slug;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{info, warn};

use crate::{Error, Result};

pub use models::*;
pub use search::{CatalogStats, CombinationSummary, SearchFilter, DEFAULT_SEARCH_LIMIT};
pub use slug::{combination_id, format_id, slugify};

pub const MAGAZINES_FILE: &str = "magazines.json";
pub const PHOTOGRAPHY_FILE: &str = "photography.json";
pub const COMBINATIONS_FILE: &str = "combinations.json";

/// Files that must be present in a cache directory
pub const REQUIRED_FILES: [&str; 3] = [MAGAZINES_FILE, PHOTOGRAPHY_FILE, COMBINATIONS_FILE];

/// Number of names echoed back when a lookup fails
pub const SUGGESTION_LIMIT: usize = 10;

/// Catalog lookup failure, reported to callers as a structured record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LookupError {
    #[error("Magazine '{name}' not found")]
    UnknownMagazine { name: String, available: Vec<String> },

    #[error("Photography style '{name}' not found")]
    UnknownStyle { name: String, available: Vec<String> },

    #[error("Combination not found for {magazine} × {style}")]
    MissingCombination {
        magazine: String,
        style: String,
        combination_id: String,
    },

    #[error("Combination ID '{0}' not found")]
    UnknownCombination(String),
}

impl LookupError {
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("error".to_string(), Value::String(self.to_string()));

        match self {
            LookupError::UnknownMagazine { available, .. } => {
                record.insert("available_magazines".to_string(), available.clone().into());
                record.insert(
                    "hint".to_string(),
                    "Use list_magazines to see all available magazines".into(),
                );
            }
            LookupError::UnknownStyle { available, .. } => {
                record.insert("available_styles".to_string(), available.clone().into());
                record.insert(
                    "hint".to_string(),
                    "Use list_photography_styles to see all available styles".into(),
                );
            }
            LookupError::MissingCombination { combination_id, .. } => {
                record.insert("combination_id".to_string(), combination_id.clone().into());
            }
            LookupError::UnknownCombination(_) => {
                record.insert(
                    "hint".to_string(),
                    "Use search_combinations to find valid IDs".into(),
                );
            }
        }

        Value::Object(record)
    }
}

/// Listing entry for one magazine
#[derive(Debug, Clone, Serialize)]
pub struct MagazineSummary {
    pub name: String,
    pub display_name: String,
    pub era: String,
    pub color_palette: String,
    pub lighting: String,
    pub values: Value,
}

impl From<&MagazineRecord> for MagazineSummary {
    fn from(m: &MagazineRecord) -> Self {
        Self {
            name: m.name.clone(),
            display_name: m.display_name.clone().unwrap_or_else(|| m.name.clone()),
            era: m.era.label.clone(),
            color_palette: m.visual_treatment.color_palette.clone(),
            lighting: m.visual_treatment.lighting.clone(),
            values: m.cultural_context.values.clone(),
        }
    }
}

/// Listing entry for one photography style
#[derive(Debug, Clone, Serialize)]
pub struct StyleSummary {
    pub name: String,
    pub typical_uses: Vec<String>,
    pub key_characteristics: Value,
    pub focal_length: String,
    pub composition: String,
}

impl From<&PhotographyStyle> for StyleSummary {
    fn from(p: &PhotographyStyle) -> Self {
        Self {
            name: p.name.clone(),
            typical_uses: p.context.typical_uses.clone(),
            key_characteristics: p.context.key_characteristics.clone(),
            focal_length: p.technical.focal_length.clone(),
            composition: p.aesthetic.composition.clone(),
        }
    }
}

/// Full view of one combination
#[derive(Debug, Clone, Serialize)]
pub struct CombinationDetail {
    pub combination_id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub visual_expectations: Value,
    pub use_cases: Value,
    pub compatibility: StoredCompatibility,
    pub suggested_subjects: Vec<String>,
    pub prompt_keywords: Vec<String>,
}

impl From<&CombinationRecord> for CombinationDetail {
    fn from(c: &CombinationRecord) -> Self {
        Self {
            combination_id: c.id.clone(),
            name: c.description.name.clone(),
            tagline: c.description.tagline.clone(),
            description: c.description.full_description.clone(),
            visual_expectations: c.description.visual_expectations.clone(),
            use_cases: c.description.use_cases.clone(),
            compatibility: c.compatibility.clone(),
            suggested_subjects: c.suggested_subjects.clone(),
            prompt_keywords: c.prompt_keywords.clone(),
        }
    }
}

/// Loaded catalog with name indexes
#[derive(Debug, Clone)]
pub struct Catalog {
    magazines: Vec<MagazineRecord>,
    photography: Vec<PhotographyStyle>,
    combinations: Vec<CombinationRecord>,
    magazine_index: HashMap<String, usize>,
    style_index: HashMap<String, usize>,
    combination_index: HashMap<String, usize>,
    cache_dir: PathBuf,
}

impl Catalog {
    /// Load and validate a cache directory
    ///
    /// Fails if the directory or any required file is missing, if a file is
    /// not valid JSON for its record type, or if any collection is empty.
    pub fn load(dir: &Path) -> Result<Self> {
        if !dir.is_dir() {
            return Err(Error::Config(format!(
                "Cache directory not found: {}",
                dir.display()
            )));
        }

        let missing: Vec<&str> = REQUIRED_FILES
            .iter()
            .copied()
            .filter(|name| !dir.join(name).is_file())
            .collect();
        if !missing.is_empty() {
            return Err(Error::Config(format!(
                "Cache incomplete in {}, missing files: {}",
                dir.display(),
                missing.join(", ")
            )));
        }

        info!("Loading cache from {}", dir.display());

        let magazines: Vec<MagazineRecord> = read_json(&dir.join(MAGAZINES_FILE))?;
        let photography: Vec<PhotographyStyle> = read_json(&dir.join(PHOTOGRAPHY_FILE))?;
        let combinations: Vec<CombinationRecord> = read_json(&dir.join(COMBINATIONS_FILE))?;

        if magazines.is_empty() || photography.is_empty() || combinations.is_empty() {
            return Err(Error::Config(format!(
                "Cache loaded but appears empty ({} magazines, {} styles, {} combinations)",
                magazines.len(),
                photography.len(),
                combinations.len()
            )));
        }

        let catalog = Self::from_parts(magazines, photography, combinations, dir.to_path_buf());
        info!(
            "Loaded {} magazines, {} styles, {} combinations",
            catalog.magazines.len(),
            catalog.photography.len(),
            catalog.combinations.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from in-memory records
    ///
    /// Duplicate names or ids resolve to the last record, as with file loading.
    pub fn from_parts(
        magazines: Vec<MagazineRecord>,
        photography: Vec<PhotographyStyle>,
        combinations: Vec<CombinationRecord>,
        cache_dir: PathBuf,
    ) -> Self {
        let magazine_index = index_by(&magazines, |m| m.name.clone());
        let style_index = index_by(&photography, |p| p.name.clone());
        let combination_index = index_by(&combinations, |c| c.id.clone());

        Self {
            magazines,
            photography,
            combinations,
            magazine_index,
            style_index,
            combination_index,
            cache_dir,
        }
    }

    pub fn magazines(&self) -> &[MagazineRecord] {
        &self.magazines
    }

    pub fn photography(&self) -> &[PhotographyStyle] {
        &self.photography
    }

    pub fn combinations(&self) -> &[CombinationRecord] {
        &self.combinations
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn list_magazines(&self) -> Vec<MagazineSummary> {
        self.magazines.iter().map(MagazineSummary::from).collect()
    }

    pub fn list_photography_styles(&self) -> Vec<StyleSummary> {
        self.photography.iter().map(StyleSummary::from).collect()
    }

    pub fn find_magazine(&self, name: &str) -> std::result::Result<&MagazineRecord, LookupError> {
        self.magazine_index
            .get(name)
            .map(|&i| &self.magazines[i])
            .ok_or_else(|| LookupError::UnknownMagazine {
                name: name.to_string(),
                available: preview(self.magazines.iter().map(|m| &m.name)),
            })
    }

    pub fn find_style(&self, name: &str) -> std::result::Result<&PhotographyStyle, LookupError> {
        self.style_index
            .get(name)
            .map(|&i| &self.photography[i])
            .ok_or_else(|| LookupError::UnknownStyle {
                name: name.to_string(),
                available: preview(self.photography.iter().map(|p| &p.name)),
            })
    }

    pub fn find_combination(&self, id: &str) -> std::result::Result<&CombinationRecord, LookupError> {
        self.combination_index
            .get(id)
            .map(|&i| &self.combinations[i])
            .ok_or_else(|| LookupError::UnknownCombination(id.to_string()))
    }

    /// Resolve a magazine × style pair to its stored combination
    ///
    /// Both names must exist in the catalog; the combination is then looked
    /// up by [`combination_id`].
    pub fn get_combination(
        &self,
        magazine_name: &str,
        photography_style: &str,
    ) -> std::result::Result<CombinationDetail, LookupError> {
        self.find_magazine(magazine_name)?;
        self.find_style(photography_style)?;

        let id = combination_id(magazine_name, photography_style);
        match self.combination_index.get(&id) {
            Some(&i) => Ok(CombinationDetail::from(&self.combinations[i])),
            None => Err(LookupError::MissingCombination {
                magazine: magazine_name.to_string(),
                style: photography_style.to_string(),
                combination_id: id,
            }),
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        warn!("Error parsing {}: {}", path.display(), e);
        Error::Json(e)
    })
}

fn index_by<T>(items: &[T], key: impl Fn(&T) -> String) -> HashMap<String, usize> {
    items.iter().enumerate().map(|(i, item)| (key(item), i)).collect()
}

fn preview<'a>(names: impl Iterator<Item = &'a String>) -> Vec<String> {
    names.take(SUGGESTION_LIMIT).cloned().collect()
}
