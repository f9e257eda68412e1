//! Combination search, statistics and random sampling

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::slug::format_id;
use super::{Catalog, CombinationRecord};
use crate::morphospace::round_to;
use crate::taxonomy::TemporalAlignment;

pub const DEFAULT_SEARCH_LIMIT: usize = 20;
pub const DEFAULT_RANDOM_COUNT: usize = 5;
pub const DEFAULT_RANDOM_MIN_HARMONY: i64 = 7;

/// Search criteria; every field is optional and filters compose with AND
///
/// Empty strings are treated as absent.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SearchFilter {
    /// Case-insensitive substring over name, description, keywords, subjects
    pub query: Option<String>,
    pub min_harmony: Option<i64>,
    pub max_harmony: Option<i64>,
    pub min_tension: Option<i64>,
    /// Case-insensitive substring of the magazine id
    pub magazine_filter: Option<String>,
    /// Case-insensitive substring of the photography id
    pub photography_filter: Option<String>,
    /// Exact wire name; an unrecognized value matches nothing
    pub temporal_alignment: Option<String>,
    pub limit: usize,
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self {
            query: None,
            min_harmony: None,
            max_harmony: None,
            min_tension: None,
            magazine_filter: None,
            photography_filter: None,
            temporal_alignment: None,
            limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl SearchFilter {
    pub fn matches(&self, combo: &CombinationRecord) -> bool {
        let scores = &combo.compatibility;

        if let Some(query) = non_empty(&self.query) {
            let query = query.to_lowercase();
            let hit = combo.description.name.to_lowercase().contains(&query)
                || combo.description.full_description.to_lowercase().contains(&query)
                || combo.prompt_keywords.join(" ").to_lowercase().contains(&query)
                || combo.suggested_subjects.join(" ").to_lowercase().contains(&query);
            if !hit {
                return false;
            }
        }

        if self.min_harmony.is_some_and(|min| scores.overall_harmony < min) {
            return false;
        }
        if self.max_harmony.is_some_and(|max| scores.overall_harmony > max) {
            return false;
        }
        if self.min_tension.is_some_and(|min| scores.creative_tension < min) {
            return false;
        }

        if let Some(filter) = non_empty(&self.magazine_filter) {
            if !combo.magazine_id.to_lowercase().contains(&filter.to_lowercase()) {
                return false;
            }
        }
        if let Some(filter) = non_empty(&self.photography_filter) {
            if !combo.photography_id.to_lowercase().contains(&filter.to_lowercase()) {
                return false;
            }
        }

        if let Some(alignment) = non_empty(&self.temporal_alignment) {
            if scores.temporal_alignment.as_str() != alignment {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Compact combination view used by search and random sampling
#[derive(Debug, Clone, Serialize)]
pub struct CombinationSummary {
    pub combination_id: String,
    pub name: String,
    pub tagline: String,
    pub magazine: String,
    pub photography: String,
    pub harmony: i64,
    pub tension: i64,
    pub temporal_alignment: TemporalAlignment,
}

impl From<&CombinationRecord> for CombinationSummary {
    fn from(c: &CombinationRecord) -> Self {
        Self {
            combination_id: c.id.clone(),
            name: c.description.name.clone(),
            tagline: c.description.tagline.clone(),
            magazine: format_id(&c.magazine_id),
            photography: format_id(&c.photography_id),
            harmony: c.compatibility.overall_harmony,
            tension: c.compatibility.creative_tension,
            temporal_alignment: c.compatibility.temporal_alignment,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LibrarySize {
    pub total_magazines: usize,
    pub total_photography_styles: usize,
    pub total_combinations: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AverageScores {
    pub harmony: f64,
    pub technical: f64,
    pub aesthetic: f64,
    pub creative_tension: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct HighQualityCounts {
    pub harmony_8_plus: usize,
    pub harmony_9_plus: usize,
    pub tension_7_plus: usize,
    pub tension_8_plus: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub library_size: LibrarySize,
    pub average_scores: AverageScores,
    pub high_quality_combinations: HighQualityCounts,
    pub temporal_distribution: BTreeMap<TemporalAlignment, usize>,
    pub cache_location: String,
}

impl Catalog {
    /// Filter combinations in catalog order, then truncate to `filter.limit`
    pub fn search_combinations(&self, filter: &SearchFilter) -> Vec<CombinationSummary> {
        self.combinations()
            .iter()
            .filter(|c| filter.matches(c))
            .take(filter.limit)
            .map(CombinationSummary::from)
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        let combos = self.combinations();
        let average = |f: fn(&CombinationRecord) -> i64| {
            if combos.is_empty() {
                return 0.0;
            }
            let total: i64 = combos.iter().map(f).sum();
            round_to(total as f64 / combos.len() as f64, 2)
        };
        let count = |pred: fn(&CombinationRecord) -> bool| combos.iter().filter(|c| pred(c)).count();

        let mut temporal_distribution = BTreeMap::new();
        for combo in combos {
            *temporal_distribution
                .entry(combo.compatibility.temporal_alignment)
                .or_insert(0) += 1;
        }

        CatalogStats {
            library_size: LibrarySize {
                total_magazines: self.magazines().len(),
                total_photography_styles: self.photography().len(),
                total_combinations: combos.len(),
            },
            average_scores: AverageScores {
                harmony: average(|c| c.compatibility.overall_harmony),
                technical: average(|c| c.compatibility.technical_score),
                aesthetic: average(|c| c.compatibility.aesthetic_score),
                creative_tension: average(|c| c.compatibility.creative_tension),
            },
            high_quality_combinations: HighQualityCounts {
                harmony_8_plus: count(|c| c.compatibility.overall_harmony >= 8),
                harmony_9_plus: count(|c| c.compatibility.overall_harmony >= 9),
                tension_7_plus: count(|c| c.compatibility.creative_tension >= 7),
                tension_8_plus: count(|c| c.compatibility.creative_tension >= 8),
            },
            temporal_distribution,
            cache_location: self.cache_dir().display().to_string(),
        }
    }

    /// Sample up to `count` distinct combinations with harmony ≥ `min_harmony`
    pub fn random_combinations<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        count: usize,
        min_harmony: i64,
    ) -> Vec<CombinationSummary> {
        let eligible: Vec<&CombinationRecord> = self
            .combinations()
            .iter()
            .filter(|c| c.compatibility.overall_harmony >= min_harmony)
            .collect();

        eligible
            .choose_multiple(rng, count)
            .map(|c| CombinationSummary::from(*c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_defaults() {
        let filter: SearchFilter = serde_json::from_str("{}").unwrap();
        assert_eq!(filter.limit, DEFAULT_SEARCH_LIMIT);
        assert!(filter.query.is_none());

        let filter: SearchFilter = serde_json::from_str(r#"{"limit": 3, "min_tension": 7}"#).unwrap();
        assert_eq!(filter.limit, 3);
        assert_eq!(filter.min_tension, Some(7));
    }

    #[test]
    fn test_empty_strings_are_ignored() {
        let filter = SearchFilter {
            query: Some(String::new()),
            temporal_alignment: Some(String::new()),
            ..Default::default()
        };
        assert!(non_empty(&filter.query).is_none());
        assert!(non_empty(&filter.temporal_alignment).is_none());
    }
}
