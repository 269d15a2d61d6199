use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{hex_to_rgb, hsl_to_rgb, rgb_to_hex, rgb_to_hsl, Hsl};
use crate::error::TokenResult;

pub const SCALE_WEIGHTS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

const LIGHT_CEILING: f64 = 97.0;
const DARK_FLOOR: f64 = 8.0;
// Anchors outside this band leave no room for strictly graded steps.
const ANCHOR_MIN: f64 = 18.0;
const ANCHOR_MAX: f64 = 87.0;

/// Fraction of the distance from the anchor to the ceiling (lighter steps) or
/// floor (darker steps). Weight 500 is the anchor itself.
const fn step_fraction(weight: u16) -> f64 {
    match weight {
        50 => 1.0,
        100 => 0.86,
        200 => 0.68,
        300 => 0.48,
        400 => 0.25,
        600 => 0.2,
        700 => 0.4,
        800 => 0.6,
        900 => 0.8,
        950 => 1.0,
        _ => 0.0,
    }
}

/// An 11-step ramp keyed by weight, iterated from lightest (50) to darkest (950).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(BTreeMap<u16, String>);

impl ColorScale {
    pub fn get(&self, weight: u16) -> Option<&str> {
        self.0.get(&weight).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u16, &str)> {
        self.0.iter().map(|(weight, hex)| (*weight, hex.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First standard weight with no entry, if any.
    pub fn missing_weight(&self) -> Option<u16> {
        SCALE_WEIGHTS
            .into_iter()
            .find(|weight| !self.0.contains_key(weight))
    }
}

impl FromIterator<(u16, String)> for ColorScale {
    fn from_iter<I: IntoIterator<Item = (u16, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Derive a 50..950 ramp from `base`, holding its hue.
///
/// Weight 500 keeps the base color whenever its lightness leaves room on both
/// sides; lightness strictly decreases as the weight increases.
pub fn generate_color_scale(base: &str) -> TokenResult<ColorScale> {
    let rgb = hex_to_rgb(base)?;
    let hsl = rgb_to_hsl(rgb);
    let in_band = (ANCHOR_MIN..=ANCHOR_MAX).contains(&hsl.l);
    let anchor = hsl.l.clamp(ANCHOR_MIN, ANCHOR_MAX);

    let scale = SCALE_WEIGHTS
        .into_iter()
        .map(|weight| {
            let hex = match weight {
                500 if in_band => rgb_to_hex(rgb),
                500 => rgb_to_hex(hsl_to_rgb(Hsl::new(hsl.h, hsl.s, anchor))),
                _ => rgb_to_hex(hsl_to_rgb(step_hsl(hsl, anchor, weight))),
            };
            (weight, hex)
        })
        .collect();

    tracing::trace!(base, anchor, "generated color scale");
    Ok(scale)
}

fn step_hsl(base: Hsl, anchor: f64, weight: u16) -> Hsl {
    let t = step_fraction(weight);
    if weight < 500 {
        let l = anchor + (LIGHT_CEILING - anchor) * t;
        let s = base.s * 0.12f64.mul_add(-t, 1.0);
        Hsl::new(base.h, s, l)
    } else {
        let l = anchor - (anchor - DARK_FLOOR) * t;
        let s = (base.s * 0.08f64.mul_add(t, 1.0)).min(100.0);
        Hsl::new(base.h, s, l)
    }
}
