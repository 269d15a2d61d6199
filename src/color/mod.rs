//! Color math shared by the scale generator, the review engine and every
//! export format.
//!
//! Colors travel through the token model as `#rrggbb` strings. Parsing them
//! into [`Rgb`] is the only fallible step; everything downstream of a parsed
//! color is infallible.

pub mod scale;

use crate::error::{TokenError, TokenResult};

pub use scale::{generate_color_scale, ColorScale, SCALE_WEIGHTS};

pub const BLACK: &str = "#000000";
pub const WHITE: &str = "#ffffff";

const LINEAR_THRESHOLD: f64 = 0.039_28;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Channels as `0.0..=1.0` floats, the shape Figma expects.
    pub fn unit_channels(self) -> [f64; 3] {
        [
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        ]
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::str::FromStr for Rgb {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        hex_to_rgb(s)
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }
}

/// Parse `#RGB`, `#RRGGBB`, or either form without the leading `#`.
pub fn hex_to_rgb(value: &str) -> TokenResult<Rgb> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if !digits.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return Err(TokenError::invalid_color(value));
    }

    let parse_pair = |pair: &str| {
        u8::from_str_radix(pair, 16).map_err(|_| TokenError::invalid_color(value))
    };
    match digits.len() {
        6 => Ok(Rgb::new(
            parse_pair(&digits[0..2])?,
            parse_pair(&digits[2..4])?,
            parse_pair(&digits[4..6])?,
        )),
        3 => {
            let expand = |index: usize| {
                let nibble = &digits[index..=index];
                parse_pair(&format!("{nibble}{nibble}"))
            };
            Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
        }
        _ => Err(TokenError::invalid_color(value)),
    }
}

pub fn rgb_to_hex(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Canonical lowercase `#rrggbb` form of any accepted hex input.
pub fn normalize_hex(value: &str) -> TokenResult<String> {
    hex_to_rgb(value).map(rgb_to_hex)
}

pub fn is_valid_hex(value: &str) -> bool {
    hex_to_rgb(value).is_ok()
}

pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.unit_channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f64::EPSILON {
        return Hsl::new(0.0, 0.0, l * 100.0);
    }

    let delta = max - min;
    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let h = if (max - r).abs() < f64::EPSILON {
        ((g - b) / delta).rem_euclid(6.0)
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl::new((h * 60.0).rem_euclid(360.0), s * 100.0, l * 100.0)
}

pub fn hsl_to_rgb(hsl: Hsl) -> Rgb {
    let h = hsl.h.rem_euclid(360.0);
    let s = (hsl.s / 100.0).clamp(0.0, 1.0);
    let l = (hsl.l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0).rem_euclid(2.0) - 1.0).abs());
    let m = l - c / 2.0;
    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        channel / 12.92
    } else {
        ((channel + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG 2.x relative luminance in `[0.0, 1.0]`.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.unit_channels().map(linearize);
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two parsed colors, in `[1.0, 21.0]`.
pub fn contrast_ratio_rgb(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

pub fn contrast_ratio(a: &str, b: &str) -> TokenResult<f64> {
    Ok(contrast_ratio_rgb(hex_to_rgb(a)?, hex_to_rgb(b)?))
}

/// Black or white, whichever reads better on `background`. Ties go to black.
pub fn contrast_text_rgb(background: Rgb) -> &'static str {
    let on_black = contrast_ratio_rgb(background, Rgb::BLACK);
    let on_white = contrast_ratio_rgb(background, Rgb::WHITE);
    if on_black >= on_white {
        BLACK
    } else {
        WHITE
    }
}

pub fn contrast_text(background: &str) -> TokenResult<&'static str> {
    hex_to_rgb(background).map(contrast_text_rgb)
}

/// Move `fg` along its own lightness axis, away from `bg`, until it reaches
/// `min_ratio`. Returns the closest passing color to the original, or `None`
/// when even the extreme of that direction cannot get there.
pub fn ensure_readability(fg: Rgb, bg: Rgb, min_ratio: f64) -> Option<Rgb> {
    if contrast_ratio_rgb(fg, bg) >= min_ratio {
        return Some(fg);
    }

    let hsl = rgb_to_hsl(fg);
    let darken = contrast_text_rgb(bg) == BLACK;
    let (mut lo, mut hi) = if darken { (0.0, hsl.l) } else { (hsl.l, 100.0) };
    let mut best = None;
    for _ in 0..24 {
        let mid = (lo + hi) * 0.5;
        let candidate = hsl_to_rgb(Hsl::new(hsl.h, hsl.s, mid));
        if contrast_ratio_rgb(candidate, bg) >= min_ratio {
            best = Some(candidate);
            // Stay as close to the original lightness as possible.
            if darken {
                lo = mid;
            } else {
                hi = mid;
            }
        } else if darken {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    best.or_else(|| {
        let extreme = hsl_to_rgb(Hsl::new(hsl.h, hsl.s, if darken { 0.0 } else { 100.0 }));
        (contrast_ratio_rgb(extreme, bg) >= min_ratio).then_some(extreme)
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn hex_to_rgb_accepts_hash_or_plain_six_digit_hex() {
        assert_eq!(hex_to_rgb("#12ab34").unwrap(), Rgb::new(0x12, 0xab, 0x34));
        assert_eq!(hex_to_rgb("12AB34").unwrap(), Rgb::new(0x12, 0xab, 0x34));
    }

    #[test]
    fn hex_to_rgb_expands_three_digit_shorthand() {
        assert_eq!(hex_to_rgb("#fa0").unwrap(), Rgb::new(0xff, 0xaa, 0x00));
        assert_eq!(hex_to_rgb("FFF").unwrap(), Rgb::WHITE);
    }

    #[test]
    fn hex_to_rgb_rejects_invalid_values() {
        for value in ["", "#", "#ffff", "#zzzzzz", "#+fffff", "#12345", "#1234567", "#ééé"] {
            let err = hex_to_rgb(value).unwrap_err();
            assert!(
                matches!(err, TokenError::InvalidColorFormat { .. }),
                "{value:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn hex_round_trip_normalizes_case_and_prefix() {
        for value in ["#3b82f6", "#3B82F6", "3b82f6", "#000000", "#ffffff", "#7F7F7F"] {
            let rgb = hex_to_rgb(value).unwrap();
            assert_eq!(rgb_to_hex(rgb), normalize_hex(value).unwrap());
            assert_eq!(rgb_to_hex(rgb), format!("#{}", value.trim_start_matches('#').to_lowercase()));
        }
    }

    #[test]
    fn hsl_round_trip_is_within_one_unit() {
        for value in ["#3b82f6", "#ef4444", "#22c55e", "#808080", "#0ea5e9", "#1e1b4b"] {
            let rgb = hex_to_rgb(value).unwrap();
            let back = hsl_to_rgb(rgb_to_hsl(rgb));
            assert!(rgb.r.abs_diff(back.r) <= 1, "{value}: {rgb:?} vs {back:?}");
            assert!(rgb.g.abs_diff(back.g) <= 1, "{value}: {rgb:?} vs {back:?}");
            assert!(rgb.b.abs_diff(back.b) <= 1, "{value}: {rgb:?} vs {back:?}");
        }
    }

    #[test]
    fn rgb_to_hsl_reports_gray_as_unsaturated() {
        let hsl = rgb_to_hsl(hex_to_rgb("#808080").unwrap());
        assert!(approx_eq(hsl.s, 0.0, 1e-9));
        assert!(approx_eq(hsl.l, 50.196, 0.01), "gray lightness: {}", hsl.l);
    }

    #[test]
    fn luminance_of_black_and_white() {
        assert!(approx_eq(relative_luminance(Rgb::BLACK), 0.0, 1e-9));
        assert!(approx_eq(relative_luminance(Rgb::WHITE), 1.0, 1e-9));
    }

    #[test]
    fn luminance_of_primaries_matches_weights() {
        assert!(approx_eq(relative_luminance(Rgb::new(255, 0, 0)), 0.2126, 1e-4));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 255, 0)), 0.7152, 1e-4));
        assert!(approx_eq(relative_luminance(Rgb::new(0, 0, 255)), 0.0722, 1e-4));
    }

    #[test]
    fn contrast_black_white_is_21() {
        let ratio = contrast_ratio(BLACK, WHITE).unwrap();
        assert!(approx_eq(ratio, 21.0, 1e-9), "B/W contrast: {ratio}");
    }

    #[test]
    fn contrast_is_symmetric_and_bounded() {
        let samples = [
            "#3b82f6", "#ef4444", "#f87171", "#22c55e", "#000000", "#ffffff", "#71717a",
            "#fbbf24", "#09090b",
        ];
        for a in samples {
            assert!(approx_eq(contrast_ratio(a, a).unwrap(), 1.0, 1e-12));
            for b in samples {
                let ab = contrast_ratio(a, b).unwrap();
                let ba = contrast_ratio(b, a).unwrap();
                assert_eq!(ab, ba, "asymmetric for {a} / {b}");
                assert!((1.0..=21.0).contains(&ab), "{a} / {b} out of bounds: {ab}");
            }
        }
    }

    #[test]
    fn contrast_of_blue_500_on_white_fails_aa() {
        let ratio = contrast_ratio("#3b82f6", WHITE).unwrap();
        assert!(approx_eq(ratio, 3.68, 0.01), "ratio: {ratio}");
    }

    #[test]
    fn contrast_ratio_rejects_malformed_input() {
        assert!(contrast_ratio("#3b82f6", "blue").is_err());
    }

    #[test]
    fn contrast_text_picks_readable_side() {
        // 5.71:1 against black beats 3.68:1 against white.
        assert_eq!(contrast_text("#3b82f6").unwrap(), BLACK);
        assert_eq!(contrast_text("#1d4ed8").unwrap(), WHITE);
        assert_eq!(contrast_text("#fbbf24").unwrap(), BLACK);
        assert_eq!(contrast_text("#09090b").unwrap(), WHITE);
        assert_eq!(contrast_text("#ffffff").unwrap(), BLACK);
    }

    #[test]
    fn ensure_readability_darkens_on_light_backgrounds() {
        let fg = hex_to_rgb("#3b82f6").unwrap();
        let adjusted = ensure_readability(fg, Rgb::WHITE, 4.5).unwrap();
        assert!(contrast_ratio_rgb(adjusted, Rgb::WHITE) >= 4.5);
        assert!(rgb_to_hsl(adjusted).l < rgb_to_hsl(fg).l);
    }

    #[test]
    fn ensure_readability_lightens_on_dark_backgrounds() {
        let fg = hex_to_rgb("#1e3a8a").unwrap();
        let bg = hex_to_rgb("#09090b").unwrap();
        let adjusted = ensure_readability(fg, bg, 7.0).unwrap();
        assert!(contrast_ratio_rgb(adjusted, bg) >= 7.0);
        assert!(rgb_to_hsl(adjusted).l > rgb_to_hsl(fg).l);
    }

    #[test]
    fn ensure_readability_keeps_passing_colors() {
        let fg = hex_to_rgb("#18181b").unwrap();
        assert_eq!(ensure_readability(fg, Rgb::WHITE, 4.5), Some(fg));
    }

    #[test]
    fn contrast_text_is_deterministic_near_the_midpoint() {
        // Luminance ~0.179 is where black and white tie; either answer is fine
        // but it must never flip between calls.
        let first = contrast_text("#767676").unwrap();
        for _ in 0..8 {
            assert_eq!(contrast_text("#767676").unwrap(), first);
        }
    }

    fn any_rgb() -> impl Strategy<Value = Rgb> {
        any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Rgb::new(r, g, b))
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(512))]

        #[test]
        fn contrast_is_symmetric_and_bounded_for_any_pair(a in any_rgb(), b in any_rgb()) {
            let ratio = contrast_ratio_rgb(a, b);
            prop_assert_eq!(ratio, contrast_ratio_rgb(b, a));
            prop_assert!(ratio >= 1.0, "{a} vs {b}: {ratio}");
            prop_assert!(ratio <= 21.0 + 1e-9, "{a} vs {b}: {ratio}");
            prop_assert!(approx_eq(contrast_ratio_rgb(a, a), 1.0, 1e-12));
        }

        #[test]
        fn hex_round_trips_in_any_case(rgb in any_rgb()) {
            let hex = rgb_to_hex(rgb);
            prop_assert_eq!(hex_to_rgb(&hex).unwrap(), rgb);
            prop_assert_eq!(hex_to_rgb(&hex.to_uppercase()).unwrap(), rgb);
            prop_assert_eq!(normalize_hex(&hex[1..]).unwrap(), hex);
        }

        #[test]
        fn contrast_text_never_loses_to_the_alternative(bg in any_rgb()) {
            let chosen = hex_to_rgb(contrast_text_rgb(bg)).unwrap();
            let other = if chosen == Rgb::BLACK { Rgb::WHITE } else { Rgb::BLACK };
            prop_assert!(contrast_ratio_rgb(bg, chosen) >= contrast_ratio_rgb(bg, other));
        }
    }
}
