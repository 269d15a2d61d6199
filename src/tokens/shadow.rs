//! `box-shadow` parsing. [`crate::tokens::Theme::validate`] runs every shadow
//! through it, so any theme that validates can be exported in structured
//! form (W3C JSON, React Native, Tokens Studio).
//!
//! Colors may be hex (with optional alpha), `rgb()`/`rgba()`, `hsl()`/`hsla()`
//! or one of `black`, `white` and `transparent`.

use crate::color::{hex_to_rgb, hsl_to_rgb, Hsl, Rgb};
use crate::error::{TokenError, TokenResult};

#[derive(Debug, Clone, PartialEq)]
pub struct ShadowLayer {
    pub inset: bool,
    pub offset_x: f64,
    pub offset_y: f64,
    pub blur: f64,
    pub spread: f64,
    pub color: Rgb,
    pub alpha: f64,
}

impl ShadowLayer {
    /// Android has no shadow geometry, only an elevation level.
    pub fn elevation(&self) -> f64 {
        (self.blur * 0.5).max(self.offset_y.abs()).round()
    }

    /// `rgba(...)` form used by Tokens Studio.
    pub fn css_color(&self) -> String {
        let (r, g, b) = self.color.rgb();
        format!("rgba({r}, {g}, {b}, {})", round_to(self.alpha, 3))
    }
}

pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Split on commas that are not nested inside parentheses.
fn split_top_level(value: &str, separator: fn(char) -> bool) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (index, ch) in value.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ch if depth == 0 && separator(ch) => {
                parts.push(&value[start..index]);
                start = index + ch.len_utf8();
            }
            _ => {}
        }
    }
    parts.push(&value[start..]);
    parts.into_iter().map(str::trim).filter(|part| !part.is_empty()).collect()
}

fn parse_length(token: &str) -> Option<f64> {
    let number = token.strip_suffix("px").unwrap_or(token);
    if number.is_empty() {
        return None;
    }
    let value = number.parse::<f64>().ok()?;
    // Unitless lengths other than zero are not valid CSS.
    (token.ends_with("px") || value == 0.0).then_some(value)
}

fn parse_alpha(token: &str) -> Option<f64> {
    let token = token.trim();
    let value = match token.strip_suffix('%') {
        Some(percent) => percent.trim().parse::<f64>().ok()? / 100.0,
        None => token.parse::<f64>().ok()?,
    };
    Some(value.clamp(0.0, 1.0))
}

/// Parse a shadow color into an opaque RGB plus alpha.
pub fn parse_shadow_color(value: &str) -> Option<(Rgb, f64)> {
    let value = value.trim();
    match value {
        "black" => return Some((Rgb::BLACK, 1.0)),
        "white" => return Some((Rgb::WHITE, 1.0)),
        "transparent" => return Some((Rgb::BLACK, 0.0)),
        _ => {}
    }

    if let Some(digits) = value.strip_prefix('#') {
        if digits.len() == 8 && digits.is_ascii() {
            let rgb = hex_to_rgb(&digits[..6]).ok()?;
            let alpha = u8::from_str_radix(&digits[6..], 16).ok()?;
            return Some((rgb, f64::from(alpha) / 255.0));
        }
        return hex_to_rgb(value).ok().map(|rgb| (rgb, 1.0));
    }

    let (function, args) = value.strip_suffix(')')?.split_once('(')?;
    let (channels, slash_alpha) = match args.split_once('/') {
        Some((channels, alpha)) => (channels, Some(alpha)),
        None => (args, None),
    };
    let parts: Vec<&str> = channels
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect();
    let (a, b, c, comma_alpha) = match parts.as_slice() {
        [a, b, c] => (*a, *b, *c, None),
        [a, b, c, alpha] => (*a, *b, *c, Some(*alpha)),
        _ => return None,
    };
    let rgb = match function.trim().to_ascii_lowercase().as_str() {
        "rgb" | "rgba" => Rgb::new(rgb_channel(a)?, rgb_channel(b)?, rgb_channel(c)?),
        "hsl" | "hsla" => hsl_to_rgb(Hsl::new(parse_hue(a)?, parse_percent(b)?, parse_percent(c)?)),
        _ => return None,
    };
    let alpha = match slash_alpha.or(comma_alpha) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 1.0,
    };
    Some((rgb, alpha))
}

fn rgb_channel(part: &str) -> Option<u8> {
    let value = part.trim().parse::<f64>().ok()?;
    Some(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_hue(part: &str) -> Option<f64> {
    let part = part.trim();
    part.strip_suffix("deg").unwrap_or(part).parse::<f64>().ok()
}

fn parse_percent(part: &str) -> Option<f64> {
    let part = part.trim();
    let value = part.strip_suffix('%').unwrap_or(part).parse::<f64>().ok()?;
    Some(value.clamp(0.0, 100.0))
}

fn parse_layer(field: &str, layer: &str) -> TokenResult<ShadowLayer> {
    let malformed = || TokenError::malformed(format!("{field} has an unreadable box-shadow {layer:?}"));

    let mut inset = false;
    let mut lengths = Vec::with_capacity(4);
    let mut color_parts = Vec::new();
    for token in split_top_level(layer, char::is_whitespace) {
        if token == "inset" {
            inset = true;
            continue;
        }
        match parse_length(token) {
            Some(length) if lengths.len() < 4 => lengths.push(length),
            _ => color_parts.push(token),
        }
    }

    if lengths.len() < 2 || color_parts.len() > 1 {
        return Err(malformed());
    }
    let (color, alpha) = match color_parts.first() {
        Some(color) => parse_shadow_color(*color).ok_or_else(malformed)?,
        None => (Rgb::BLACK, 1.0),
    };

    Ok(ShadowLayer {
        inset,
        offset_x: lengths[0],
        offset_y: lengths[1],
        blur: lengths.get(2).copied().unwrap_or(0.0).max(0.0),
        spread: lengths.get(3).copied().unwrap_or(0.0),
        color,
        alpha,
    })
}

/// Parse every layer of a `box-shadow`. An empty value or `none` has no layers.
pub fn parse_box_shadow(field: &str, value: &str) -> TokenResult<Vec<ShadowLayer>> {
    let value = value.trim();
    if value.is_empty() || value == "none" {
        return Ok(Vec::new());
    }
    split_top_level(value, |ch| ch == ',')
        .into_iter()
        .map(|layer| parse_layer(field, layer))
        .collect()
}
