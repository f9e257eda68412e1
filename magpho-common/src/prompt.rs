//! Image prompt assembly
//!
//! Turns a stored combination plus framing and intensity controls into one
//! comma-delimited prompt string for text-to-image generators.

use serde::Deserialize;

use crate::catalog::CombinationRecord;

pub const DEFAULT_COLOR_PALETTE: &str = "balanced color palette";
pub const DEFAULT_INTENSITY: f64 = 0.5;

/// Number of stored prompt keywords appended to the end of a prompt
pub const PROMPT_KEYWORD_LIMIT: usize = 3;

/// Prompt controls; intensities run from 0.0 to 1.0
#[derive(Debug, Clone, Deserialize)]
pub struct ImagePromptRequest {
    pub combination_id: String,
    /// Shot distance, e.g. "Close-up", "Wide"
    pub distance: String,
    /// Camera angle, e.g. "Eye-level", "Low Angle"
    pub angle: String,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default = "default_intensity")]
    pub color_intensity: f64,
    #[serde(default = "default_intensity")]
    pub detail_sharpness: f64,
    #[serde(default = "default_intensity")]
    pub mood_intensity: f64,
}

fn default_intensity() -> f64 {
    DEFAULT_INTENSITY
}

fn color_phrase(intensity: f64, base: &str) -> String {
    if intensity < 0.3 {
        "desaturated, muted color palette, subtle tones".to_string()
    } else if intensity < 0.4 {
        format!("slightly desaturated {}", base)
    } else if intensity > 0.7 {
        format!("highly saturated, vivid {}, bold color emphasis", base)
    } else if intensity > 0.6 {
        format!("enhanced saturation, vibrant {}", base)
    } else {
        base.to_string()
    }
}

fn detail_phrase(sharpness: f64) -> &'static str {
    if sharpness < 0.3 {
        "soft focus, gentle detail, dreamlike quality"
    } else if sharpness > 0.7 {
        "razor sharp, crisp detail, pronounced texture"
    } else {
        "balanced detail and clarity"
    }
}

fn mood_phrase(intensity: f64) -> Option<&'static str> {
    if intensity < 0.3 {
        Some("understated mood, subtle atmosphere, quiet presence")
    } else if intensity > 0.7 {
        Some("dramatic atmosphere, intense mood, powerful emotional impact")
    } else {
        None
    }
}

/// Assemble the prompt for `combo`
///
/// An explicit subject wins over the first suggested subject; with neither,
/// the subject part is omitted.
pub fn generate_image_prompt(combo: &CombinationRecord, request: &ImagePromptRequest) -> String {
    let mut parts = vec![format!("{} aesthetic", combo.description.name)];

    match (&request.subject, combo.suggested_subjects.first()) {
        (Some(subject), _) if !subject.is_empty() => parts.push(format!("of {}", subject)),
        (_, Some(suggested)) => parts.push(format!("featuring {}", suggested)),
        _ => {}
    }

    parts.push(format!("{} framing", request.distance.to_lowercase()));
    parts.push(format!("{} perspective", request.angle.to_lowercase()));

    let base_color = combo
        .magazine_color_palette
        .as_deref()
        .unwrap_or(DEFAULT_COLOR_PALETTE);
    parts.push(color_phrase(request.color_intensity, base_color));
    parts.push(detail_phrase(request.detail_sharpness).to_string());

    if let Some(mood) = mood_phrase(request.mood_intensity) {
        parts.push(mood.to_string());
    }

    parts.extend(
        combo
            .prompt_keywords
            .iter()
            .take(PROMPT_KEYWORD_LIMIT)
            .cloned(),
    );

    parts.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CombinationDescription, StoredCompatibility};
    use crate::taxonomy::TemporalAlignment;

    fn combo() -> CombinationRecord {
        CombinationRecord {
            id: "life_1960s__documentary_photography".to_string(),
            magazine_id: "life_1960s".to_string(),
            photography_id: "documentary_photography".to_string(),
            description: CombinationDescription {
                name: "Witness Grain".to_string(),
                ..Default::default()
            },
            compatibility: StoredCompatibility {
                overall_harmony: 8,
                technical_score: 7,
                aesthetic_score: 8,
                creative_tension: 5,
                temporal_alignment: TemporalAlignment::EraMatched,
                rationale: String::new(),
            },
            suggested_subjects: vec!["factory workers at shift change".to_string()],
            prompt_keywords: vec![
                "tri-x grain".to_string(),
                "available light".to_string(),
                "candid".to_string(),
                "halftone".to_string(),
            ],
            magazine_color_palette: Some("warm kodachrome tones".to_string()),
        }
    }

    fn request() -> ImagePromptRequest {
        serde_json::from_str(
            r#"{"combination_id": "life_1960s__documentary_photography",
                "distance": "Close-up", "angle": "Eye-level"}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_default_prompt() {
        let prompt = generate_image_prompt(&combo(), &request());
        assert_eq!(
            prompt,
            "Witness Grain aesthetic, featuring factory workers at shift change, \
             close-up framing, eye-level perspective, warm kodachrome tones, \
             balanced detail and clarity, tri-x grain, available light, candid"
        );
    }

    #[test]
    fn test_explicit_subject_and_extremes() {
        let mut req = request();
        req.subject = Some("elderly woman holding protest sign".to_string());
        req.color_intensity = 0.8;
        req.detail_sharpness = 0.1;
        req.mood_intensity = 0.9;

        let prompt = generate_image_prompt(&combo(), &req);
        assert!(prompt.starts_with("Witness Grain aesthetic, of elderly woman holding protest sign, "));
        assert!(prompt.contains("highly saturated, vivid warm kodachrome tones, bold color emphasis"));
        assert!(prompt.contains("soft focus, gentle detail, dreamlike quality"));
        assert!(prompt.contains("dramatic atmosphere"));
        assert!(!prompt.contains("halftone"));
    }

    #[test]
    fn test_color_bands() {
        let base = "teal";
        assert_eq!(color_phrase(0.1, base), "desaturated, muted color palette, subtle tones");
        assert_eq!(color_phrase(0.35, base), "slightly desaturated teal");
        assert_eq!(color_phrase(0.65, base), "enhanced saturation, vibrant teal");
        assert_eq!(color_phrase(0.7, base), "enhanced saturation, vibrant teal");
        assert_eq!(color_phrase(0.5, base), "teal");
        assert_eq!(mood_phrase(0.5), None);
    }

    #[test]
    fn test_missing_palette_and_subjects() {
        let mut bare = combo();
        bare.magazine_color_palette = None;
        bare.suggested_subjects.clear();
        bare.prompt_keywords.clear();

        let prompt = generate_image_prompt(&bare, &request());
        assert_eq!(
            prompt,
            "Witness Grain aesthetic, close-up framing, eye-level perspective, \
             balanced color palette, balanced detail and clarity"
        );
    }
}
