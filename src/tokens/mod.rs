//! The canonical token model.
//!
//! A [`Theme`] is plain data: the editor owns and mutates it (see
//! [`crate::state::ThemeStore`] and [`edit`]), while review and export only
//! ever borrow an immutable snapshot.

pub mod defaults;
pub mod edit;
pub mod shadow;

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::color::{self, generate_color_scale, ColorScale, SCALE_WEIGHTS};
use crate::error::{TokenError, TokenResult};

pub use defaults::SPACING_MULTIPLIERS;
pub use edit::{apply_edit, SpacingControl, ThemeEdit};

/// Sentinel radius for pills and circles; not a literal pixel size.
pub const RADIUS_FULL: u32 = 9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

/// One hex value per [`Mode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeColor {
    pub light: String,
    pub dark: String,
}

impl ModeColor {
    pub fn new(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self {
            light: light.into(),
            dark: dark.into(),
        }
    }

    pub fn get(&self, mode: Mode) -> &str {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn get_mut(&mut self, mode: Mode) -> &mut String {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mode, &str)> {
        Mode::ALL.into_iter().map(move |mode| (mode, self.get(mode)))
    }
}

impl Index<Mode> for ModeColor {
    type Output = str;

    fn index(&self, mode: Mode) -> &str {
        self.get(mode)
    }
}

/// A named dual-mode color, e.g. a brand color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub value: ModeColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticRole {
    Success,
    Warning,
    Error,
    Info,
}

impl SemanticRole {
    pub const ALL: [Self; 4] = [Self::Success, Self::Warning, Self::Error, Self::Info];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemanticColors {
    pub success: ModeColor,
    pub warning: ModeColor,
    pub error: ModeColor,
    pub info: ModeColor,
}

impl SemanticColors {
    pub fn get(&self, role: SemanticRole) -> &ModeColor {
        match role {
            SemanticRole::Success => &self.success,
            SemanticRole::Warning => &self.warning,
            SemanticRole::Error => &self.error,
            SemanticRole::Info => &self.info,
        }
    }

    pub fn get_mut(&mut self, role: SemanticRole) -> &mut ModeColor {
        match role {
            SemanticRole::Success => &mut self.success,
            SemanticRole::Warning => &mut self.warning,
            SemanticRole::Error => &mut self.error,
            SemanticRole::Info => &mut self.info,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SemanticRole, &ModeColor)> {
        SemanticRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceRole {
    Background,
    Elevated,
    Surface,
    Overlay,
}

impl SurfaceRole {
    pub const ALL: [Self; 4] = [
        Self::Background,
        Self::Elevated,
        Self::Surface,
        Self::Overlay,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Background => "background",
            Self::Elevated => "elevated",
            Self::Surface => "surface",
            Self::Overlay => "overlay",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceColors {
    pub background: ModeColor,
    pub elevated: ModeColor,
    pub surface: ModeColor,
    pub overlay: ModeColor,
}

impl SurfaceColors {
    pub fn get(&self, role: SurfaceRole) -> &ModeColor {
        match role {
            SurfaceRole::Background => &self.background,
            SurfaceRole::Elevated => &self.elevated,
            SurfaceRole::Surface => &self.surface,
            SurfaceRole::Overlay => &self.overlay,
        }
    }

    pub fn get_mut(&mut self, role: SurfaceRole) -> &mut ModeColor {
        match role {
            SurfaceRole::Background => &mut self.background,
            SurfaceRole::Elevated => &mut self.elevated,
            SurfaceRole::Surface => &mut self.surface,
            SurfaceRole::Overlay => &mut self.overlay,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SurfaceRole, &ModeColor)> {
        SurfaceRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

/// A base color plus the ramp derived from it. The ramp is regenerated
/// whenever the base changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeutralScale {
    pub base: String,
    pub scale: ColorScale,
}

impl NeutralScale {
    pub fn from_base(base: &str) -> TokenResult<Self> {
        Ok(Self {
            base: color::normalize_hex(base)?,
            scale: generate_color_scale(base)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCollection {
    pub brand: Vec<ColorToken>,
    pub semantic: SemanticColors,
    pub neutral: NeutralScale,
    pub surface: SurfaceColors,
}

impl ColorCollection {
    pub fn brand_by_id(&self, id: &str) -> Option<&ColorToken> {
        self.brand.iter().find(|token| token.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RadiusSize {
    Multiplier(f64),
    Value(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusStep {
    pub name: String,
    #[serde(flatten)]
    pub size: RadiusSize,
}

impl RadiusStep {
    pub fn multiplier(name: &str, multiplier: f64) -> Self {
        Self {
            name: name.to_string(),
            size: RadiusSize::Multiplier(multiplier),
        }
    }

    pub fn fixed(name: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            size: RadiusSize::Value(value),
        }
    }

    pub fn resolve(&self, base: f64) -> u32 {
        match self.size {
            RadiusSize::Multiplier(multiplier) => (base * multiplier).round().max(0.0) as u32,
            RadiusSize::Value(value) => value,
        }
    }

    pub const fn is_sentinel(&self) -> bool {
        matches!(self.size, RadiusSize::Value(RADIUS_FULL))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadiusTokens {
    pub base: f64,
    pub scale: Vec<RadiusStep>,
}

impl RadiusTokens {
    pub const MIN_BASE: f64 = 0.0;
    pub const MAX_BASE: f64 = 32.0;

    /// `(name, px)` pairs in declaration order.
    pub fn resolved(&self) -> impl Iterator<Item = (&str, u32)> {
        self.scale
            .iter()
            .map(|step| (step.name.as_str(), step.resolve(self.base)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingTokens {
    pub base_unit: f64,
    pub scale: Vec<f64>,
}

impl SpacingTokens {
    pub fn from_base(base_unit: f64) -> Self {
        Self {
            base_unit,
            scale: SPACING_MULTIPLIERS
                .iter()
                .map(|multiplier| base_unit * multiplier)
                .collect(),
        }
    }

    pub fn is_monotonic(&self) -> bool {
        self.scale.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamily {
    pub id: String,
    pub name: String,
    /// CSS font stack, e.g. `Inter, system-ui, sans-serif`.
    pub value: String,
}

impl FontFamily {
    /// Individual families of the stack with quotes stripped.
    pub fn stack(&self) -> Vec<&str> {
        self.value
            .split(',')
            .map(|family| family.trim().trim_matches(|c| c == '"' || c == '\''))
            .filter(|family| !family.is_empty())
            .collect()
    }

    /// React Native takes a single family name, not a stack.
    pub fn primary(&self) -> &str {
        self.stack().first().copied().unwrap_or("System")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Sans,
    Mono,
}

impl FontRole {
    pub const ALL: [Self; 2] = [Self::Sans, Self::Mono];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Mono => "mono",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontFamilies {
    pub sans: FontFamily,
    pub mono: FontFamily,
}

impl FontFamilies {
    pub fn get(&self, role: FontRole) -> &FontFamily {
        match role {
            FontRole::Sans => &self.sans,
            FontRole::Mono => &self.mono,
        }
    }

    pub fn get_mut(&mut self, role: FontRole) -> &mut FontFamily {
        match role {
            FontRole::Sans => &mut self.sans,
            FontRole::Mono => &mut self.mono,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (FontRole, &FontFamily)> {
        FontRole::ALL
            .into_iter()
            .map(move |role| (role, self.get(role)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypeStep {
    pub name: String,
    /// Pixels.
    pub size: f64,
    /// Unitless multiplier of `size`.
    pub line_height: f64,
}

impl TypeStep {
    pub fn line_height_px(&self) -> f64 {
        (self.size * self.line_height).round()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontWeight {
    pub name: String,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    pub families: FontFamilies,
    pub scale: Vec<TypeStep>,
    pub weights: Vec<FontWeight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowToken {
    pub name: String,
    /// CSS `box-shadow`; empty means no shadow.
    pub value: String,
}

impl ShadowToken {
    pub fn is_none(&self) -> bool {
        let value = self.value.trim();
        value.is_empty() || value == "none"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationToken {
    pub name: String,
    /// Milliseconds.
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EasingToken {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Motion {
    pub durations: Vec<DurationToken>,
    pub easings: Vec<EasingToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ColorCollection,
    pub radius: RadiusTokens,
    pub spacing: SpacingTokens,
    pub typography: Typography,
    pub shadows: Vec<ShadowToken>,
    pub animations: Motion,
}

impl Theme {
    /// Build a complete theme from a brand color and a neutral base. The dark
    /// brand value is the brand's own 400 step.
    pub fn from_base(name: &str, brand: &str, neutral: &str) -> TokenResult<Self> {
        let brand_light = color::normalize_hex(brand)?;
        let brand_scale = generate_color_scale(&brand_light)?;
        let brand_dark = brand_scale
            .get(400)
            .map_or_else(|| brand_light.clone(), str::to_string);

        let mut theme = Self::default();
        theme.name = name.trim().to_string();
        theme.colors.brand = vec![ColorToken {
            id: "brand".to_string(),
            name: "brand".to_string(),
            value: ModeColor::new(brand_light, brand_dark),
        }];
        theme.colors.neutral = NeutralScale::from_base(neutral)?;
        tracing::debug!(name, brand, neutral, "derived theme from base colors");
        Ok(theme)
    }

    /// Check every field the review engine and export generators rely on.
    pub fn validate(&self) -> TokenResult<()> {
        if self.name.trim().is_empty() {
            return Err(TokenError::malformed("name is empty"));
        }

        let colors = &self.colors;
        if colors.brand.is_empty() {
            return Err(TokenError::malformed("colors.brand has no entries"));
        }
        for (index, token) in colors.brand.iter().enumerate() {
            if !is_slug(&token.name) {
                return Err(TokenError::malformed(format!(
                    "colors.brand[{index}].name {:?} is not a lowercase slug",
                    token.name
                )));
            }
            if is_reserved_brand_name(&token.name) {
                return Err(TokenError::malformed(format!(
                    "colors.brand[{index}].name {:?} collides with a built-in color name",
                    token.name
                )));
            }
            if colors.brand[..index].iter().any(|other| other.name == token.name) {
                return Err(TokenError::malformed(format!(
                    "colors.brand[{index}].name {:?} is used more than once",
                    token.name
                )));
            }
            check_mode_color(&format!("colors.brand[{index}]"), &token.value)?;
        }
        for (role, value) in colors.semantic.iter() {
            check_mode_color(&format!("colors.semantic.{}", role.name()), value)?;
        }
        for (role, value) in colors.surface.iter() {
            check_mode_color(&format!("colors.surface.{}", role.name()), value)?;
        }
        check_hex("colors.neutral.base", &colors.neutral.base)?;
        if let Some(weight) = colors.neutral.scale.missing_weight() {
            return Err(TokenError::malformed(format!(
                "colors.neutral.scale is missing weight {weight}"
            )));
        }
        for weight in SCALE_WEIGHTS {
            if let Some(hex) = colors.neutral.scale.get(weight) {
                check_hex(&format!("colors.neutral.scale.{weight}"), hex)?;
            }
        }

        if !self.radius.base.is_finite() || self.radius.scale.is_empty() {
            return Err(TokenError::malformed("radius needs a finite base and a scale"));
        }
        if !self.spacing.base_unit.is_finite() || self.spacing.scale.is_empty() {
            return Err(TokenError::malformed("spacing needs a finite base unit and a scale"));
        }
        if let Some(index) = self.spacing.scale.iter().position(|v| !v.is_finite() || *v < 0.0) {
            return Err(TokenError::malformed(format!(
                "spacing.scale[{index}] is not a non-negative number"
            )));
        }

        let typography = &self.typography;
        for (role, family) in typography.families.iter() {
            if family.stack().is_empty() {
                return Err(TokenError::malformed(format!(
                    "typography.families.{} has an empty font stack",
                    role.name()
                )));
            }
        }
        if typography.scale.is_empty() {
            return Err(TokenError::malformed("typography.scale has no entries"));
        }
        if let Some(index) = typography
            .scale
            .iter()
            .position(|step| !(step.size.is_finite() && step.size > 0.0 && step.line_height.is_finite()))
        {
            return Err(TokenError::malformed(format!(
                "typography.scale[{index}] needs a positive size and a line height"
            )));
        }
        if typography.weights.is_empty() {
            return Err(TokenError::malformed("typography.weights has no entries"));
        }

        for token in &self.shadows {
            shadow::parse_box_shadow(&format!("shadows.{}", token.name), &token.value)?;
        }

        Ok(())
    }
}

fn check_hex(field: &str, value: &str) -> TokenResult<()> {
    if color::is_valid_hex(value) {
        Ok(())
    } else {
        Err(TokenError::malformed(format!("{field} {value:?} is not a hex color")))
    }
}

fn check_mode_color(field: &str, value: &ModeColor) -> TokenResult<()> {
    for (mode, hex) in value.iter() {
        check_hex(&format!("{field}.{}", mode.id()), hex)?;
    }
    Ok(())
}

/// Brand colors share one namespace with the role colors in every export,
/// and `{name}-{weight}` and `{name}-foreground` are derived keys.
pub fn is_reserved_brand_name(name: &str) -> bool {
    let is_role = name == "neutral"
        || SemanticRole::ALL.iter().any(|role| role.name() == name)
        || SurfaceRole::ALL.iter().any(|role| role.name() == name);
    is_role
        || match name.rsplit_once('-') {
            Some((_, "foreground")) => true,
            Some((_, suffix)) => suffix
                .parse::<u16>()
                .is_ok_and(|weight| SCALE_WEIGHTS.contains(&weight)),
            None => false,
        }
}

/// Lowercase, hyphenated, no leading/trailing or doubled hyphens.
pub fn is_slug(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && !name.contains("--")
        && name
            .bytes()
            .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-')
}

pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.trim().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_is_valid() {
        Theme::default().validate().expect("default theme should validate");
    }

    #[test]
    fn mode_color_indexes_by_mode() {
        let color = ModeColor::new("#ef4444", "#f87171");
        assert_eq!(&color[Mode::Light], "#ef4444");
        assert_eq!(&color[Mode::Dark], "#f87171");
        let modes: Vec<Mode> = color.iter().map(|(mode, _)| mode).collect();
        assert_eq!(modes, Mode::ALL.to_vec());
    }

    #[test]
    fn radius_resolves_multipliers_and_keeps_sentinel() {
        let radius = RadiusTokens {
            base: 8.0,
            scale: vec![
                RadiusStep::multiplier("sm", 0.5),
                RadiusStep::multiplier("md", 1.25),
                RadiusStep::fixed("full", RADIUS_FULL),
            ],
        };
        let resolved: Vec<(&str, u32)> = radius.resolved().collect();
        assert_eq!(resolved, vec![("sm", 4), ("md", 10), ("full", 9999)]);
        assert!(radius.scale[2].is_sentinel());
    }

    #[test]
    fn spacing_from_base_is_monotonic() {
        let spacing = SpacingTokens::from_base(4.0);
        assert_eq!(spacing.scale.len(), SPACING_MULTIPLIERS.len());
        assert_eq!(spacing.scale[2], 4.0);
        assert!(spacing.is_monotonic());
    }

    #[test]
    fn font_stack_strips_quotes() {
        let family = FontFamily {
            id: "sans".to_string(),
            name: "Sans".to_string(),
            value: "\"Inter Variable\", 'Inter', system-ui".to_string(),
        };
        assert_eq!(family.stack(), vec!["Inter Variable", "Inter", "system-ui"]);
        assert_eq!(family.primary(), "Inter Variable");
    }

    #[test]
    fn from_base_derives_dark_brand_and_neutral_scale() {
        let theme = Theme::from_base("Ocean", "#0EA5E9", "#64748b").unwrap();
        let brand = &theme.colors.brand[0];
        assert_eq!(brand.value.light, "#0ea5e9");
        assert_ne!(brand.value.dark, brand.value.light);
        assert_eq!(theme.colors.neutral.base, "#64748b");
        assert_eq!(theme.colors.neutral.scale.get(500), Some("#64748b"));
        theme.validate().unwrap();
    }

    #[test]
    fn from_base_rejects_bad_hex() {
        let err = Theme::from_base("Broken", "#12", "#64748b").unwrap_err();
        assert!(matches!(err, TokenError::InvalidColorFormat { .. }));
    }

    #[test]
    fn validate_rejects_missing_brand() {
        let mut theme = Theme::default();
        theme.colors.brand.clear();
        let err = theme.validate().unwrap_err();
        assert!(matches!(err, TokenError::MalformedTheme { ref field } if field.contains("colors.brand")));
    }

    #[test]
    fn validate_rejects_incomplete_neutral_scale() {
        let mut theme = Theme::default();
        theme.colors.neutral.scale = ColorScale::default();
        let err = theme.validate().unwrap_err();
        assert!(matches!(err, TokenError::MalformedTheme { ref field } if field.contains("neutral")));
    }

    #[test]
    fn validate_rejects_bad_semantic_hex() {
        let mut theme = Theme::default();
        theme.colors.semantic.error.dark = "red".to_string();
        let err = theme.validate().unwrap_err();
        assert!(
            matches!(err, TokenError::MalformedTheme { ref field } if field.contains("colors.semantic.error.dark"))
        );
    }

    #[test]
    fn validate_rejects_brand_named_after_a_role() {
        for name in ["success", "background", "neutral", "info"] {
            let mut theme = Theme::default();
            theme.colors.brand[0].name = name.to_string();
            let err = theme.validate().unwrap_err();
            assert!(err.to_string().contains("built-in color name"), "{name}: {err}");
        }
    }

    #[test]
    fn validate_rejects_duplicate_brand_names() {
        let mut theme = Theme::default();
        let mut twin = theme.colors.brand[0].clone();
        twin.id = "brand-twin".to_string();
        theme.colors.brand.push(twin);
        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn validate_rejects_unreadable_shadow() {
        let mut theme = Theme::default();
        theme.shadows[1].value = "0 1px banana".to_string();
        let err = theme.validate().unwrap_err();
        assert!(err.to_string().contains("shadows.sm"), "{err}");

        theme.shadows[1].value = "0 0 0 2px hsl(217 91% 60% / 0.5)".to_string();
        theme.validate().unwrap();
    }

    #[test]
    fn reserved_brand_names_cover_roles_and_derived_keys() {
        for name in ["warning", "overlay", "surface", "neutral", "brand-500", "accent-foreground"] {
            assert!(is_reserved_brand_name(name), "{name}");
        }
        for name in ["brand", "accent", "success-2", "brand-501", "ocean"] {
            assert!(!is_reserved_brand_name(name), "{name}");
        }
    }

    #[test]
    fn validate_rejects_empty_type_scale() {
        let mut theme = Theme::default();
        theme.typography.scale.clear();
        assert!(theme.validate().is_err());
    }

    #[test]
    fn slug_helpers() {
        assert!(is_slug("brand"));
        assert!(is_slug("accent-2"));
        assert!(!is_slug("Brand"));
        assert!(!is_slug("-brand"));
        assert!(!is_slug("brand--x"));
        assert_eq!(slugify("  Deep Sea Blue! "), "deep-sea-blue");
        assert_eq!(slugify("***"), "");
    }

    #[test]
    fn theme_json_round_trips_through_serde() {
        let theme = Theme::default();
        let json = serde_json::to_string(&theme).unwrap();
        assert!(json.contains("\"baseUnit\""));
        assert!(json.contains("\"lineHeight\""));
        assert!(json.contains("\"multiplier\""));
        let back: Theme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, theme);
    }
}
