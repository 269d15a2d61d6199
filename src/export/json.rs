use serde_json::{json, Map, Value};

use super::{brand_ramps, cubic_bezier_points, number, to_pretty_json};
use crate::color::ColorScale;
use crate::error::TokenResult;
use crate::tokens::{Mode, ModeColor, Theme};
use crate::tokens::shadow::{parse_box_shadow, round_to, ShadowLayer};

fn token(kind: &str, value: Value) -> Value {
    json!({ "$type": kind, "$value": value })
}

/// Light is the primary `$value`; both modes are listed under
/// `$extensions.modes`.
fn mode_token(light: &str, dark: &str) -> Value {
    json!({
        "$type": "color",
        "$value": light,
        "$extensions": { "modes": { "light": light, "dark": dark } },
    })
}

fn mode_color(color: &ModeColor) -> Value {
    mode_token(color.get(Mode::Light), color.get(Mode::Dark))
}

fn ramp_group(default: Value, light: &ColorScale, dark: &ColorScale) -> Value {
    let mut group = Map::new();
    group.insert("DEFAULT".into(), default);
    for (weight, hex) in light.iter() {
        let dark_hex = dark.get(weight).unwrap_or(hex);
        group.insert(weight.to_string(), mode_token(hex, dark_hex));
    }
    Value::Object(group)
}

fn shadow_layer(layer: &ShadowLayer) -> Value {
    json!({
        "color": layer.color.to_string(),
        "alpha": round_to(layer.alpha, 3),
        "offsetX": number(layer.offset_x),
        "offsetY": number(layer.offset_y),
        "blur": number(layer.blur),
        "spread": number(layer.spread),
        "inset": layer.inset,
    })
}

fn colors(theme: &Theme) -> TokenResult<Value> {
    let mut brand = Map::new();
    for ramp in brand_ramps(theme)? {
        let group = ramp_group(
            mode_color(&ramp.token.value),
            ramp.scale(Mode::Light),
            ramp.scale(Mode::Dark),
        );
        brand.insert(ramp.token.name.clone(), group);
    }

    let semantic: Map<String, Value> = theme
        .colors
        .semantic
        .iter()
        .map(|(role, color)| (role.name().to_string(), mode_color(color)))
        .collect();
    let neutral: Map<String, Value> = theme
        .colors
        .neutral
        .scale
        .iter()
        .map(|(weight, hex)| (weight.to_string(), token("color", Value::from(hex))))
        .collect();
    let surface: Map<String, Value> = theme
        .colors
        .surface
        .iter()
        .map(|(role, color)| (role.name().to_string(), mode_color(color)))
        .collect();

    Ok(json!({
        "brand": brand,
        "semantic": semantic,
        "neutral": neutral,
        "surface": surface,
    }))
}

fn shadows(theme: &Theme) -> TokenResult<Value> {
    let mut group = Map::new();
    for shadow in &theme.shadows {
        let layers = parse_box_shadow(&shadow.name, &shadow.value)?;
        let value: Vec<Value> = layers.iter().map(shadow_layer).collect();
        group.insert(shadow.name.clone(), token("shadow", Value::from(value)));
    }
    Ok(Value::Object(group))
}

fn easings(theme: &Theme) -> Value {
    let group: Map<String, Value> = theme
        .animations
        .easings
        .iter()
        .map(|easing| {
            let value = match cubic_bezier_points(&easing.value) {
                Some(points) => token("cubicBezier", json!(points.map(number))),
                None => token("string", Value::from(easing.value.as_str())),
            };
            (easing.name.clone(), value)
        })
        .collect();
    Value::Object(group)
}

/// W3C design-tokens document: nested groups whose leaves carry `$value`
/// and `$type`. Dimensions are unitless pixel counts.
pub fn generate_json(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;

    let radius: Map<String, Value> = theme
        .radius
        .resolved()
        .map(|(name, px)| (name.to_string(), token("dimension", Value::from(px))))
        .collect();
    let spacing: Map<String, Value> = theme
        .spacing
        .scale
        .iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), token("dimension", number(*value))))
        .collect();
    let font_family: Map<String, Value> = theme
        .typography
        .families
        .iter()
        .map(|(role, family)| (role.name().to_string(), token("fontFamily", json!(family.stack()))))
        .collect();
    let font_size: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| (step.name.clone(), token("dimension", number(step.size))))
        .collect();
    let line_height: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| (step.name.clone(), token("number", number(step.line_height))))
        .collect();
    let font_weight: Map<String, Value> = theme
        .typography
        .weights
        .iter()
        .map(|weight| (weight.name.clone(), token("fontWeight", Value::from(weight.value))))
        .collect();
    let duration: Map<String, Value> = theme
        .animations
        .durations
        .iter()
        .map(|duration| (duration.name.clone(), token("duration", Value::from(duration.value))))
        .collect();

    let document = json!({
        "$description": format!("{} design tokens", theme.name),
        "color": colors(theme)?,
        "radius": radius,
        "spacing": spacing,
        "fontFamily": font_family,
        "fontSize": font_size,
        "lineHeight": line_height,
        "fontWeight": font_weight,
        "shadow": shadows(theme)?,
        "duration": duration,
        "easing": easings(theme),
    });
    to_pretty_json(&document)
}
