use super::{
    ColorCollection, ColorToken, DurationToken, EasingToken, FontFamilies, FontFamily, FontWeight,
    ModeColor, Motion, NeutralScale, RadiusStep, RadiusTokens, SemanticColors, ShadowToken,
    SpacingTokens, SurfaceColors, Theme, TypeStep, Typography, RADIUS_FULL,
};
use crate::color::generate_color_scale;

pub const DEFAULT_THEME_NAME: &str = "Untitled";
pub const DEFAULT_BRAND: (&str, &str) = ("#3b82f6", "#60a5fa");
pub const DEFAULT_NEUTRAL: &str = "#71717a";
pub const DEFAULT_RADIUS_BASE: f64 = 8.0;
pub const DEFAULT_SPACING_UNIT: f64 = 4.0;

/// Spacing step `i` is `base_unit * SPACING_MULTIPLIERS[i]`.
pub const SPACING_MULTIPLIERS: [f64; 15] = [
    0.0, 0.5, 1.0, 1.5, 2.0, 3.0, 4.0, 5.0, 6.0, 8.0, 10.0, 12.0, 16.0, 20.0, 24.0,
];

const RADIUS_MULTIPLIERS: [(&str, f64); 5] = [
    ("none", 0.0),
    ("sm", 0.5),
    ("md", 1.25),
    ("lg", 2.0),
    ("xl", 3.0),
];

const TYPE_SCALE: [(&str, f64, f64); 8] = [
    ("xs", 12.0, 1.5),
    ("sm", 14.0, 1.5),
    ("base", 16.0, 1.5),
    ("lg", 18.0, 1.75),
    ("xl", 20.0, 1.75),
    ("2xl", 24.0, 1.25),
    ("3xl", 30.0, 1.25),
    ("4xl", 36.0, 1.2),
];

const FONT_WEIGHTS: [(&str, u16); 5] = [
    ("light", 300),
    ("normal", 400),
    ("medium", 500),
    ("semibold", 600),
    ("bold", 700),
];

const SHADOWS: [(&str, &str); 5] = [
    ("none", ""),
    ("sm", "0 1px 2px 0 rgba(0, 0, 0, 0.05)"),
    ("md", "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)"),
    ("lg", "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)"),
    ("xl", "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)"),
];

const DURATIONS: [(&str, u32); 3] = [("fast", 150), ("normal", 250), ("slow", 400)];

const EASINGS: [(&str, &str); 5] = [
    ("default", "cubic-bezier(0.4, 0, 0.2, 1)"),
    ("in", "cubic-bezier(0.4, 0, 1, 1)"),
    ("out", "cubic-bezier(0, 0, 0.2, 1)"),
    ("in-out", "cubic-bezier(0.4, 0, 0.6, 1)"),
    ("linear", "linear"),
];

pub fn default_colors() -> ColorCollection {
    ColorCollection {
        brand: vec![ColorToken {
            id: "brand".to_string(),
            name: "brand".to_string(),
            value: ModeColor::new(DEFAULT_BRAND.0, DEFAULT_BRAND.1),
        }],
        semantic: SemanticColors {
            success: ModeColor::new("#22c55e", "#4ade80"),
            warning: ModeColor::new("#f59e0b", "#fbbf24"),
            error: ModeColor::new("#ef4444", "#f87171"),
            info: ModeColor::new("#0ea5e9", "#38bdf8"),
        },
        neutral: NeutralScale {
            base: DEFAULT_NEUTRAL.to_string(),
            scale: generate_color_scale(DEFAULT_NEUTRAL).unwrap_or_default(),
        },
        surface: SurfaceColors {
            background: ModeColor::new("#ffffff", "#09090b"),
            elevated: ModeColor::new("#ffffff", "#18181b"),
            surface: ModeColor::new("#f4f4f5", "#27272a"),
            overlay: ModeColor::new("#e4e4e7", "#3f3f46"),
        },
    }
}

pub fn default_radius() -> RadiusTokens {
    let mut scale: Vec<RadiusStep> = RADIUS_MULTIPLIERS
        .iter()
        .map(|(name, multiplier)| RadiusStep::multiplier(name, *multiplier))
        .collect();
    scale.push(RadiusStep::fixed("full", RADIUS_FULL));
    RadiusTokens {
        base: DEFAULT_RADIUS_BASE,
        scale,
    }
}

pub fn default_typography() -> Typography {
    Typography {
        families: FontFamilies {
            sans: FontFamily {
                id: "sans".to_string(),
                name: "Inter".to_string(),
                value: "Inter, ui-sans-serif, system-ui, sans-serif".to_string(),
            },
            mono: FontFamily {
                id: "mono".to_string(),
                name: "JetBrains Mono".to_string(),
                value: "\"JetBrains Mono\", ui-monospace, SFMono-Regular, monospace".to_string(),
            },
        },
        scale: TYPE_SCALE
            .iter()
            .map(|(name, size, line_height)| TypeStep {
                name: (*name).to_string(),
                size: *size,
                line_height: *line_height,
            })
            .collect(),
        weights: FONT_WEIGHTS
            .iter()
            .map(|(name, value)| FontWeight {
                name: (*name).to_string(),
                value: *value,
            })
            .collect(),
    }
}

pub fn default_shadows() -> Vec<ShadowToken> {
    SHADOWS
        .iter()
        .map(|(name, value)| ShadowToken {
            name: (*name).to_string(),
            value: (*value).to_string(),
        })
        .collect()
}

pub fn default_motion() -> Motion {
    Motion {
        durations: DURATIONS
            .iter()
            .map(|(name, value)| DurationToken {
                name: (*name).to_string(),
                value: *value,
            })
            .collect(),
        easings: EASINGS
            .iter()
            .map(|(name, value)| EasingToken {
                name: (*name).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME_NAME.to_string(),
            colors: default_colors(),
            radius: default_radius(),
            spacing: SpacingTokens::from_base(DEFAULT_SPACING_UNIT),
            typography: default_typography(),
            shadows: default_shadows(),
            animations: default_motion(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_radius_md_is_ten_pixels_at_base_eight() {
        let radius = default_radius();
        let md = radius.resolved().find(|(name, _)| *name == "md");
        assert_eq!(md, Some(("md", 10)));
        let full = radius.resolved().last();
        assert_eq!(full, Some(("full", RADIUS_FULL)));
    }

    #[test]
    fn default_neutral_scale_is_complete() {
        let colors = default_colors();
        assert_eq!(colors.neutral.scale.missing_weight(), None);
        assert_eq!(colors.neutral.scale.get(500), Some(DEFAULT_NEUTRAL));
    }

    #[test]
    fn default_collections_keep_declaration_order() {
        let typography = default_typography();
        let names: Vec<&str> = typography.scale.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl"]);
        assert!(default_shadows()[0].is_none());
        assert_eq!(default_motion().easings.len(), 5);
    }
}
