//! Pure update operations over a [`Theme`].
//!
//! Every function takes the current theme and a delta and returns the next
//! theme. Edits never fail: out-of-range numbers are clamped, and deltas that
//! would break an invariant (bad hex, unknown id, removing the last brand
//! color, unreadable shadow, index out of bounds) leave the theme unchanged
//! and log a warning.

use super::shadow::parse_box_shadow;
use super::{
    is_reserved_brand_name, slugify, ColorToken, FontRole, Mode, ModeColor, NeutralScale,
    RadiusTokens, SemanticRole, SpacingTokens, SurfaceRole, Theme,
};
use crate::color::{self, generate_color_scale};

pub const FONT_SIZE_RANGE: (f64, f64) = (1.0, 256.0);
pub const LINE_HEIGHT_RANGE: (f64, f64) = (0.5, 4.0);
pub const FONT_WEIGHT_RANGE: (u16, u16) = (100, 900);

/// Which control drives the spacing base; they clamp to different ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacingControl {
    #[default]
    Editor,
    Legacy,
}

impl SpacingControl {
    pub const fn range(self) -> (f64, f64) {
        match self {
            Self::Editor => (1.0, 16.0),
            Self::Legacy => (2.0, 8.0),
        }
    }
}

/// A single editor delta; [`apply_edit`] routes it to the matching function.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeEdit {
    Rename(String),
    AddBrandColor { name: String, hex: String },
    RemoveBrandColor { id: String },
    UpdateBrandColor { id: String, mode: Mode, hex: String },
    RenameBrandColor { id: String, name: String },
    UpdateSemanticColor { role: SemanticRole, mode: Mode, hex: String },
    UpdateSurfaceColor { role: SurfaceRole, mode: Mode, hex: String },
    UpdateNeutralBase(String),
    UpdateRadiusBase(f64),
    UpdateSpacingBase { value: f64, control: SpacingControl },
    UpdateFontFamily { role: FontRole, value: String },
    UpdateFontSize { index: usize, size: f64 },
    UpdateLineHeight { index: usize, line_height: f64 },
    UpdateFontWeight { index: usize, value: u16 },
    UpdateShadow { index: usize, value: String },
    UpdateDuration { index: usize, value: u32 },
    UpdateEasing { index: usize, value: String },
}

pub fn apply_edit(theme: &Theme, edit: &ThemeEdit) -> Theme {
    match edit {
        ThemeEdit::Rename(name) => update_name(theme, name),
        ThemeEdit::AddBrandColor { name, hex } => add_brand_color(theme, name, hex),
        ThemeEdit::RemoveBrandColor { id } => remove_brand_color(theme, id),
        ThemeEdit::UpdateBrandColor { id, mode, hex } => update_brand_color(theme, id, *mode, hex),
        ThemeEdit::RenameBrandColor { id, name } => rename_brand_color(theme, id, name),
        ThemeEdit::UpdateSemanticColor { role, mode, hex } => {
            update_semantic_color(theme, *role, *mode, hex)
        }
        ThemeEdit::UpdateSurfaceColor { role, mode, hex } => {
            update_surface_color(theme, *role, *mode, hex)
        }
        ThemeEdit::UpdateNeutralBase(hex) => update_neutral_base(theme, hex),
        ThemeEdit::UpdateRadiusBase(base) => update_radius_base(theme, *base),
        ThemeEdit::UpdateSpacingBase { value, control } => {
            update_spacing_base(theme, *value, *control)
        }
        ThemeEdit::UpdateFontFamily { role, value } => update_font_family(theme, *role, value),
        ThemeEdit::UpdateFontSize { index, size } => update_font_size(theme, *index, *size),
        ThemeEdit::UpdateLineHeight { index, line_height } => {
            update_line_height(theme, *index, *line_height)
        }
        ThemeEdit::UpdateFontWeight { index, value } => update_font_weight(theme, *index, *value),
        ThemeEdit::UpdateShadow { index, value } => update_shadow(theme, *index, value),
        ThemeEdit::UpdateDuration { index, value } => update_duration(theme, *index, *value),
        ThemeEdit::UpdateEasing { index, value } => update_easing(theme, *index, value),
    }
}

fn clamp_logged(field: &'static str, value: f64, (min, max): (f64, f64)) -> f64 {
    let value = if value.is_finite() { value } else { min };
    let clamped = value.clamp(min, max);
    if (clamped - value).abs() > f64::EPSILON {
        tracing::debug!(field, value, clamped, "value out of range; clamped");
    }
    clamped
}

fn normalized_hex(field: &'static str, hex: &str) -> Option<String> {
    match color::normalize_hex(hex) {
        Ok(hex) => Some(hex),
        Err(err) => {
            tracing::warn!(field, value = hex, %err, "invalid color; edit ignored");
            None
        }
    }
}

fn unique_brand_name(theme: &Theme, wanted: &str, skip_id: Option<&str>) -> String {
    let base = match slugify(wanted) {
        slug if slug.is_empty() => "brand".to_string(),
        slug => slug,
    };
    let taken = |candidate: &str| {
        is_reserved_brand_name(candidate)
            || theme
                .colors
                .brand
                .iter()
                .any(|token| Some(token.id.as_str()) != skip_id && token.name == candidate)
    };
    if !taken(&base) {
        return base;
    }
    (2..)
        .map(|suffix| format!("{base}-{suffix}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or(base)
}

fn unique_brand_id(theme: &Theme, name: &str) -> String {
    let taken = |candidate: &str| theme.colors.brand.iter().any(|token| token.id == candidate);
    if !taken(name) {
        return name.to_string();
    }
    (2..)
        .map(|suffix| format!("{name}-{suffix}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| name.to_string())
}

pub fn update_name(theme: &Theme, name: &str) -> Theme {
    let name = name.trim();
    if name.is_empty() {
        tracing::warn!("empty theme name; edit ignored");
        return theme.clone();
    }
    let mut next = theme.clone();
    next.name = name.to_string();
    next
}

/// Append a brand color. The dark value is derived from the new color's 400 step.
pub fn add_brand_color(theme: &Theme, name: &str, hex: &str) -> Theme {
    let Some(light) = normalized_hex("brand", hex) else {
        return theme.clone();
    };
    let dark = generate_color_scale(&light)
        .ok()
        .and_then(|scale| scale.get(400).map(str::to_string))
        .unwrap_or_else(|| light.clone());

    let name = unique_brand_name(theme, name, None);
    let id = unique_brand_id(theme, &name);
    let mut next = theme.clone();
    next.colors.brand.push(ColorToken {
        id,
        name,
        value: ModeColor::new(light, dark),
    });
    next
}

/// Remove a brand color by id. The last remaining brand color cannot be removed.
pub fn remove_brand_color(theme: &Theme, id: &str) -> Theme {
    if theme.colors.brand.len() <= 1 {
        tracing::warn!(id, "refusing to remove the last brand color");
        return theme.clone();
    }
    if theme.colors.brand_by_id(id).is_none() {
        tracing::warn!(id, "unknown brand color; edit ignored");
        return theme.clone();
    }
    let mut next = theme.clone();
    next.colors.brand.retain(|token| token.id != id);
    next
}

pub fn update_brand_color(theme: &Theme, id: &str, mode: Mode, hex: &str) -> Theme {
    let Some(hex) = normalized_hex("brand", hex) else {
        return theme.clone();
    };
    let mut next = theme.clone();
    match next.colors.brand.iter_mut().find(|token| token.id == id) {
        Some(token) => *token.value.get_mut(mode) = hex,
        None => tracing::warn!(id, "unknown brand color; edit ignored"),
    }
    next
}

pub fn rename_brand_color(theme: &Theme, id: &str, name: &str) -> Theme {
    if theme.colors.brand_by_id(id).is_none() {
        tracing::warn!(id, "unknown brand color; edit ignored");
        return theme.clone();
    }
    let name = unique_brand_name(theme, name, Some(id));
    let mut next = theme.clone();
    if let Some(token) = next.colors.brand.iter_mut().find(|token| token.id == id) {
        token.name = name;
    }
    next
}

pub fn update_semantic_color(theme: &Theme, role: SemanticRole, mode: Mode, hex: &str) -> Theme {
    let Some(hex) = normalized_hex("semantic", hex) else {
        return theme.clone();
    };
    let mut next = theme.clone();
    *next.colors.semantic.get_mut(role).get_mut(mode) = hex;
    next
}

pub fn update_surface_color(theme: &Theme, role: SurfaceRole, mode: Mode, hex: &str) -> Theme {
    let Some(hex) = normalized_hex("surface", hex) else {
        return theme.clone();
    };
    let mut next = theme.clone();
    *next.colors.surface.get_mut(role).get_mut(mode) = hex;
    next
}

/// Replace the neutral base and re-derive its scale.
pub fn update_neutral_base(theme: &Theme, hex: &str) -> Theme {
    match NeutralScale::from_base(hex) {
        Ok(neutral) => {
            let mut next = theme.clone();
            next.colors.neutral = neutral;
            next
        }
        Err(err) => {
            tracing::warn!(value = hex, %err, "invalid neutral base; edit ignored");
            theme.clone()
        }
    }
}

/// Resolved radius steps follow the base, so only the base is stored.
pub fn update_radius_base(theme: &Theme, base: f64) -> Theme {
    let mut next = theme.clone();
    next.radius.base = clamp_logged(
        "radius.base",
        base,
        (RadiusTokens::MIN_BASE, RadiusTokens::MAX_BASE),
    );
    next
}

pub fn update_spacing_base(theme: &Theme, base_unit: f64, control: SpacingControl) -> Theme {
    let base_unit = clamp_logged("spacing.baseUnit", base_unit, control.range());
    let mut next = theme.clone();
    next.spacing = SpacingTokens::from_base(base_unit);
    next
}

pub fn update_font_family(theme: &Theme, role: FontRole, value: &str) -> Theme {
    let value = value.trim();
    if value.is_empty() {
        tracing::warn!(role = role.name(), "empty font stack; edit ignored");
        return theme.clone();
    }
    let mut next = theme.clone();
    next.typography.families.get_mut(role).value = value.to_string();
    next
}

pub fn update_font_size(theme: &Theme, index: usize, size: f64) -> Theme {
    let size = clamp_logged("typography.scale.size", size, FONT_SIZE_RANGE);
    let mut next = theme.clone();
    match next.typography.scale.get_mut(index) {
        Some(step) => step.size = size,
        None => tracing::warn!(index, "type scale index out of range; edit ignored"),
    }
    next
}

pub fn update_line_height(theme: &Theme, index: usize, line_height: f64) -> Theme {
    let line_height = clamp_logged("typography.scale.lineHeight", line_height, LINE_HEIGHT_RANGE);
    let mut next = theme.clone();
    match next.typography.scale.get_mut(index) {
        Some(step) => step.line_height = line_height,
        None => tracing::warn!(index, "type scale index out of range; edit ignored"),
    }
    next
}

/// Weights clamp to 100..=900 and snap to the nearest hundred.
pub fn update_font_weight(theme: &Theme, index: usize, value: u16) -> Theme {
    let (min, max) = FONT_WEIGHT_RANGE;
    let snapped = ((value.clamp(min, max) + 50) / 100) * 100;
    if snapped != value {
        tracing::debug!(value, snapped, "font weight normalized");
    }
    let mut next = theme.clone();
    match next.typography.weights.get_mut(index) {
        Some(weight) => weight.value = snapped,
        None => tracing::warn!(index, "font weight index out of range; edit ignored"),
    }
    next
}

pub fn update_shadow(theme: &Theme, index: usize, value: &str) -> Theme {
    if let Err(err) = parse_box_shadow("shadow", value) {
        tracing::warn!(index, value, %err, "unreadable box-shadow; edit ignored");
        return theme.clone();
    }
    let mut next = theme.clone();
    match next.shadows.get_mut(index) {
        Some(shadow) => shadow.value = value.trim().to_string(),
        None => tracing::warn!(index, "shadow index out of range; edit ignored"),
    }
    next
}

pub fn update_duration(theme: &Theme, index: usize, value: u32) -> Theme {
    let mut next = theme.clone();
    match next.animations.durations.get_mut(index) {
        Some(duration) => duration.value = value,
        None => tracing::warn!(index, "duration index out of range; edit ignored"),
    }
    next
}

pub fn update_easing(theme: &Theme, index: usize, value: &str) -> Theme {
    let value = value.trim();
    if value.is_empty() {
        tracing::warn!(index, "empty easing; edit ignored");
        return theme.clone();
    }
    let mut next = theme.clone();
    match next.animations.easings.get_mut(index) {
        Some(easing) => easing.value = value.to_string(),
        None => tracing::warn!(index, "easing index out of range; edit ignored"),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removing_the_last_brand_color_is_rejected() {
        let theme = Theme::default();
        assert_eq!(theme.colors.brand.len(), 1);
        let next = remove_brand_color(&theme, "brand");
        assert_eq!(next, theme);
    }

    #[test]
    fn add_then_remove_brand_color() {
        let theme = add_brand_color(&Theme::default(), "Accent", "#A855F7");
        assert_eq!(theme.colors.brand.len(), 2);
        let accent = &theme.colors.brand[1];
        assert_eq!(accent.name, "accent");
        assert_eq!(accent.value.light, "#a855f7");
        assert_ne!(accent.value.dark, accent.value.light);

        let theme = remove_brand_color(&theme, &accent.id.clone());
        assert_eq!(theme.colors.brand.len(), 1);
        assert_eq!(theme.colors.brand[0].id, "brand");
    }

    #[test]
    fn added_brand_names_stay_unique() {
        let theme = add_brand_color(&Theme::default(), "brand", "#a855f7");
        let theme = add_brand_color(&theme, "Brand", "#ec4899");
        let names: Vec<&str> = theme.colors.brand.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["brand", "brand-2", "brand-3"]);
        theme.validate().unwrap();
    }

    #[test]
    fn brand_names_never_take_a_role_name() {
        let theme = add_brand_color(&Theme::default(), "Success", "#a855f7");
        assert_eq!(theme.colors.brand[1].name, "success-2");
        let theme = add_brand_color(&theme, "Brand 500", "#ec4899");
        assert_eq!(theme.colors.brand[2].name, "brand-500-2");
        theme.validate().unwrap();

        let id = theme.colors.brand[0].id.clone();
        let renamed = rename_brand_color(&theme, &id, "Background");
        assert_eq!(renamed.colors.brand[0].name, "background-2");
        renamed.validate().unwrap();
    }

    #[test]
    fn invalid_hex_edits_are_ignored() {
        let theme = Theme::default();
        let next = update_semantic_color(&theme, SemanticRole::Error, Mode::Dark, "crimson");
        assert_eq!(next, theme);
        let next = add_brand_color(&theme, "x", "#12");
        assert_eq!(next, theme);
    }

    #[test]
    fn color_updates_are_normalized() {
        let theme = update_surface_color(&Theme::default(), SurfaceRole::Overlay, Mode::Light, "FFF");
        assert_eq!(theme.colors.surface.overlay.light, "#ffffff");
        let theme = update_brand_color(&theme, "brand", Mode::Dark, "#93C5FD");
        assert_eq!(theme.colors.brand[0].value.dark, "#93c5fd");
    }

    #[test]
    fn neutral_base_change_rederives_scale() {
        let theme = Theme::default();
        let next = update_neutral_base(&theme, "#64748B");
        assert_eq!(next.colors.neutral.base, "#64748b");
        assert_eq!(next.colors.neutral.scale.get(500), Some("#64748b"));
        assert_ne!(next.colors.neutral.scale, theme.colors.neutral.scale);
    }

    #[test]
    fn radius_base_is_clamped() {
        let theme = Theme::default();
        assert_eq!(update_radius_base(&theme, 64.0).radius.base, 32.0);
        assert_eq!(update_radius_base(&theme, -3.0).radius.base, 0.0);
        assert_eq!(update_radius_base(&theme, f64::NAN).radius.base, 0.0);
        assert_eq!(update_radius_base(&theme, 12.0).radius.base, 12.0);
    }

    #[test]
    fn spacing_base_is_clamped_per_control_and_rederived() {
        let theme = Theme::default();
        let editor = update_spacing_base(&theme, 40.0, SpacingControl::Editor);
        assert_eq!(editor.spacing.base_unit, 16.0);
        let legacy = update_spacing_base(&theme, 40.0, SpacingControl::Legacy);
        assert_eq!(legacy.spacing.base_unit, 8.0);
        let legacy = update_spacing_base(&theme, 1.0, SpacingControl::Legacy);
        assert_eq!(legacy.spacing.base_unit, 2.0);
        assert_eq!(legacy.spacing.scale[2], 2.0);
        assert!(legacy.spacing.is_monotonic());
    }

    #[test]
    fn font_weight_is_clamped_and_snapped() {
        let theme = Theme::default();
        assert_eq!(update_font_weight(&theme, 0, 1000).typography.weights[0].value, 900);
        assert_eq!(update_font_weight(&theme, 0, 20).typography.weights[0].value, 100);
        assert_eq!(update_font_weight(&theme, 0, 449).typography.weights[0].value, 400);
        assert_eq!(update_font_weight(&theme, 0, 450).typography.weights[0].value, 500);
    }

    #[test]
    fn out_of_range_indices_leave_theme_unchanged() {
        let theme = Theme::default();
        assert_eq!(update_shadow(&theme, 99, "none"), theme);
        assert_eq!(update_shadow(&theme, 1, "0 1px banana"), theme);
        let next = update_shadow(&theme, 1, "0 0 0 2px hsl(217 91% 60% / 0.5)");
        assert_eq!(next.shadows[1].value, "0 0 0 2px hsl(217 91% 60% / 0.5)");
        assert_eq!(update_duration(&theme, 99, 10), theme);
        assert_eq!(update_easing(&theme, 99, "ease"), theme);
        assert_eq!(update_font_size(&theme, 99, 10.0), theme);
    }

    #[test]
    fn indexed_updates_touch_only_their_entry() {
        let theme = Theme::default();
        let next = update_duration(&theme, 1, 300);
        assert_eq!(next.animations.durations[1].value, 300);
        assert_eq!(next.animations.durations[0], theme.animations.durations[0]);

        let next = update_easing(&theme, 4, " ease-in ");
        assert_eq!(next.animations.easings[4].value, "ease-in");

        let next = update_line_height(&theme, 0, 9.0);
        assert_eq!(next.typography.scale[0].line_height, LINE_HEIGHT_RANGE.1);
    }

    #[test]
    fn apply_edit_dispatches_to_operations() {
        let theme = Theme::default();
        let edits = [
            ThemeEdit::Rename("Ocean".to_string()),
            ThemeEdit::UpdateRadiusBase(4.0),
            ThemeEdit::UpdateFontFamily {
                role: FontRole::Mono,
                value: "Fira Code, monospace".to_string(),
            },
            ThemeEdit::RenameBrandColor {
                id: "brand".to_string(),
                name: "Primary Blue".to_string(),
            },
        ];
        let next = edits.iter().fold(theme, |acc, edit| apply_edit(&acc, edit));
        assert_eq!(next.name, "Ocean");
        assert_eq!(next.radius.base, 4.0);
        assert_eq!(next.typography.families.mono.primary(), "Fira Code");
        assert_eq!(next.colors.brand[0].name, "primary-blue");
        next.validate().unwrap();
    }
}
