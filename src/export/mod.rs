//! Projections of a [`Theme`] into downstream artifact formats.
//!
//! Every generator is a pure `&Theme -> TokenResult<String>` function that
//! validates the theme first, walks tokens in declaration order, and produces
//! byte-identical output for an unchanged theme. JSON-based formats rely on
//! `serde_json`'s `preserve_order` feature for key order.

mod css;
mod figma_variables;
mod hyena;
mod json;
mod react_native;
mod tailwind;
mod tokens_studio;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::color::{generate_color_scale, ColorScale};
use crate::error::{TokenError, TokenResult};
use crate::tokens::{ColorToken, Mode, Theme};

pub use css::generate_css;
pub use figma_variables::generate_figma_variables;
pub use hyena::generate_rn_theme;
pub use json::generate_json;
pub use react_native::generate_rn_stylesheet;
pub use tailwind::generate_tailwind;
pub use tokens_studio::generate_tokens_studio;

/// Serialized and parsed on the command line with the same ids as [`ExportFormat::id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// CSS custom properties.
    Css,
    /// Tailwind `theme.extend` config.
    Tailwind,
    /// W3C design-tokens JSON.
    Json,
    /// React Native stylesheet module.
    #[serde(rename = "rn")]
    #[value(name = "rn")]
    RnStylesheet,
    /// r/ui `createTheme` module.
    #[serde(rename = "hyena")]
    #[value(name = "hyena")]
    RnTheme,
    /// Figma Variables import.
    #[serde(rename = "figma")]
    #[value(name = "figma")]
    FigmaVariables,
    /// Figma Tokens Studio sets.
    #[serde(rename = "tokens-studio")]
    #[value(name = "tokens-studio")]
    FigmaTokensStudio,
}

impl ExportFormat {
    pub const ALL: [Self; 7] = [
        Self::Css,
        Self::Tailwind,
        Self::Json,
        Self::RnStylesheet,
        Self::RnTheme,
        Self::FigmaVariables,
        Self::FigmaTokensStudio,
    ];

    /// Short id accepted on the command line.
    pub const fn id(self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Tailwind => "tailwind",
            Self::Json => "json",
            Self::RnStylesheet => "rn",
            Self::RnTheme => "hyena",
            Self::FigmaVariables => "figma",
            Self::FigmaTokensStudio => "tokens-studio",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Css => "CSS custom properties",
            Self::Tailwind => "Tailwind config",
            Self::Json => "Design Tokens JSON",
            Self::RnStylesheet => "React Native StyleSheet",
            Self::RnTheme => "r/ui React Native theme",
            Self::FigmaVariables => "Figma Variables",
            Self::FigmaTokensStudio => "Figma Tokens Studio",
        }
    }

    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Css => "tokens.css",
            Self::Tailwind => "tailwind.config.js",
            Self::Json => "tokens.json",
            Self::RnStylesheet => "tokens.native.js",
            Self::RnTheme => "theme.native.js",
            Self::FigmaVariables => "figma-variables.json",
            Self::FigmaTokensStudio => "tokens-studio.json",
        }
    }

    pub fn generate(self, theme: &Theme) -> TokenResult<String> {
        let output = match self {
            Self::Css => generate_css(theme),
            Self::Tailwind => generate_tailwind(theme),
            Self::Json => generate_json(theme),
            Self::RnStylesheet => generate_rn_stylesheet(theme),
            Self::RnTheme => generate_rn_theme(theme),
            Self::FigmaVariables => generate_figma_variables(theme),
            Self::FigmaTokensStudio => generate_tokens_studio(theme),
        }?;
        tracing::debug!(format = self.id(), bytes = output.len(), "generated export");
        Ok(output)
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFormat(pub String);

impl fmt::Display for UnknownFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = ExportFormat::ALL.iter().map(|format| format.id()).collect();
        write!(f, "unknown export format {:?} (expected one of: {})", self.0, known.join(", "))
    }
}

impl std::error::Error for UnknownFormat {}

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.id() == wanted)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

pub fn export(format: ExportFormat, theme: &Theme) -> TokenResult<String> {
    format.generate(theme)
}

/// A brand color together with the ramps derived from each mode's value.
pub(crate) struct BrandRamp<'a> {
    pub token: &'a ColorToken,
    light: ColorScale,
    dark: ColorScale,
}

impl BrandRamp<'_> {
    pub fn scale(&self, mode: Mode) -> &ColorScale {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }
}

pub(crate) fn brand_ramps(theme: &Theme) -> TokenResult<Vec<BrandRamp<'_>>> {
    theme
        .colors
        .brand
        .iter()
        .map(|token| {
            Ok(BrandRamp {
                token,
                light: generate_color_scale(&token.value.light)?,
                dark: generate_color_scale(&token.value.dark)?,
            })
        })
        .collect()
}

/// Whole numbers print without a fractional part in every format.
pub(crate) fn number(value: f64) -> Value {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        Value::from(value as i64)
    } else {
        Value::from(value)
    }
}

pub(crate) fn js_string(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('\'');
    for ch in value.chars() {
        match ch {
            '\\' => quoted.push_str("\\\\"),
            '\'' => quoted.push_str("\\'"),
            '\n' => quoted.push_str("\\n"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('\'');
    quoted
}

/// Object key that is a bare identifier when possible, quoted otherwise.
pub(crate) fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let is_ident = chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$');
    if is_ident {
        key.to_string()
    } else {
        js_string(key)
    }
}

/// Control points for a `cubic-bezier(...)` value or a CSS easing keyword.
pub fn cubic_bezier_points(value: &str) -> Option<[f64; 4]> {
    let value = value.trim();
    match value {
        "linear" => return Some([0.0, 0.0, 1.0, 1.0]),
        "ease" => return Some([0.25, 0.1, 0.25, 1.0]),
        "ease-in" => return Some([0.42, 0.0, 1.0, 1.0]),
        "ease-out" => return Some([0.0, 0.0, 0.58, 1.0]),
        "ease-in-out" => return Some([0.42, 0.0, 0.58, 1.0]),
        _ => {}
    }

    let args = value
        .strip_prefix("cubic-bezier(")
        .and_then(|rest| rest.strip_suffix(')'))?;
    let points: Vec<f64> = args
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<_, _>>()
        .ok()?;
    match points.as_slice() {
        [x1, y1, x2, y2] if (0.0..=1.0).contains(x1) && (0.0..=1.0).contains(x2) => {
            Some([*x1, *y1, *x2, *y2])
        }
        _ => None,
    }
}

pub(crate) fn to_pretty_json(value: &Value) -> TokenResult<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(TokenError::from)?;
    out.push('\n');
    Ok(out)
}
