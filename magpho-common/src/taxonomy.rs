//! Categorical taxonomy for magazine and photography profiles
//!
//! Every dimension is a closed enum. Free text only ever reaches one of these
//! through the ordered keyword rules in [`crate::profiles`], whose fallback
//! branch is the only route to a "none of the above" category.
//!
//! Each enum carries:
//! - a snake_case wire name (serde and [`as_str`](ColorPaletteCategory::as_str))
//! - case-insensitive parsing via `parse`
//! - `all_variants()` in declaration order, useful for validation and listings

use serde::{Deserialize, Serialize};

macro_rules! taxonomy_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Canonical lowercase, underscored representation
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $wire, )+
                }
            }

            /// Parse from the canonical representation (case-insensitive)
            pub fn parse(s: &str) -> Option<Self> {
                match s.trim().to_lowercase().as_str() {
                    $( $wire => Some($name::$variant), )+
                    _ => None,
                }
            }

            /// All variants, in declaration order
            pub fn all_variants() -> &'static [$name] {
                &[ $( $name::$variant, )+ ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

taxonomy_enum! {
    /// How a magazine's era lines up with the era a photography style belongs to
    TemporalAlignment {
        /// Magazine era matches the photography style era
        EraMatched => "era_matched",
        /// Intentional temporal mismatch
        CreativeAnachronism => "creative_anachronism",
        /// High-tension historical juxtaposition (never assigned by the scorer)
        TemporalClash => "temporal_clash",
    }
}

taxonomy_enum! {
    /// High-level color approach
    ColorPaletteCategory {
        /// High saturation, bold primaries
        Vibrant => "vibrant",
        /// Desaturated, earth tones, pastels
        Muted => "muted",
        /// B&W, single color dominant
        Monochromatic => "monochromatic",
        Cool => "cool",
        Warm => "warm",
        /// Complex multi-tone
        Mixed => "mixed",
    }
}

taxonomy_enum! {
    /// Fundamental lighting philosophy
    LightingApproach {
        /// Strong shadows, high contrast
        HardDirectional => "hard_directional",
        /// Gentle, even illumination
        SoftDiffused => "soft_diffused",
        /// Golden hour, window light
        NaturalAmbient => "natural_ambient",
        /// Neutral, even studio light
        Clinical => "clinical",
        /// Staged, theatrical lighting
        Dramatic => "dramatic",
    }
}

taxonomy_enum! {
    /// Tonal separation strategy
    ContrastProfile {
        High => "high",
        Medium => "medium",
        /// Lifted shadows, compressed range
        Low => "low",
        /// Crushed blacks, blown highlights, posterization
        Extreme => "extreme",
    }
}

taxonomy_enum! {
    /// Surface and detail rendering
    TextureEmphasis {
        Sharp => "sharp",
        /// Glossy, polished surfaces
        Smooth => "smooth",
        /// Natural, tactile textures
        Organic => "organic",
        /// Manufactured materials emphasized
        Synthetic => "synthetic",
        /// Soft, dreamlike, minimal detail
        Ethereal => "ethereal",
    }
}

taxonomy_enum! {
    /// Spatial organization approach
    CompositionStrategy {
        /// Grid, symmetry, mathematical precision
        Geometric => "geometric",
        Asymmetrical => "asymmetrical",
        /// Close, intimate framing
        TightCrop => "tight_crop",
        /// Subject in context
        Environmental => "environmental",
        /// Negative space, sparse elements
        Minimalist => "minimalist",
    }
}

taxonomy_enum! {
    /// Lens choice implications
    FocalLengthCategory {
        /// 14-24mm
        UltraWide => "ultra_wide",
        /// 24-35mm
        Wide => "wide",
        /// 35-50mm
        Standard => "standard",
        /// 50-85mm
        MediumTelephoto => "medium_telephoto",
        /// 85-200mm
        Telephoto => "telephoto",
    }
}

taxonomy_enum! {
    /// What subjects are typically photographed
    SubjectContext {
        People => "people",
        Objects => "objects",
        Places => "places",
        Moments => "moments",
        Abstract => "abstract",
    }
}

taxonomy_enum! {
    /// Depth of field implied by the typical aperture range
    DepthOfField {
        Shallow => "shallow",
        Moderate => "moderate",
        Deep => "deep",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_all_color_variants() {
        for category in ColorPaletteCategory::all_variants() {
            assert_eq!(ColorPaletteCategory::parse(category.as_str()), Some(*category));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(
            LightingApproach::parse("Soft_Diffused"),
            Some(LightingApproach::SoftDiffused)
        );
        assert_eq!(
            TemporalAlignment::parse("  ERA_MATCHED "),
            Some(TemporalAlignment::EraMatched)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(ContrastProfile::parse("ultra"), None);
        assert_eq!(DepthOfField::parse(""), None);
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_string(&FocalLengthCategory::MediumTelephoto).unwrap();
        assert_eq!(json, "\"medium_telephoto\"");

        let parsed: TemporalAlignment = serde_json::from_str("\"creative_anachronism\"").unwrap();
        assert_eq!(parsed, TemporalAlignment::CreativeAnachronism);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", CompositionStrategy::TightCrop), "tight_crop");
        assert_eq!(format!("{}", SubjectContext::Abstract), "abstract");
    }

    #[test]
    fn test_variant_counts() {
        assert_eq!(TemporalAlignment::all_variants().len(), 3);
        assert_eq!(ColorPaletteCategory::all_variants().len(), 6);
        assert_eq!(LightingApproach::all_variants().len(), 5);
        assert_eq!(ContrastProfile::all_variants().len(), 4);
        assert_eq!(TextureEmphasis::all_variants().len(), 5);
        assert_eq!(CompositionStrategy::all_variants().len(), 5);
        assert_eq!(FocalLengthCategory::all_variants().len(), 5);
        assert_eq!(SubjectContext::all_variants().len(), 5);
        assert_eq!(DepthOfField::all_variants().len(), 3);
    }
}
