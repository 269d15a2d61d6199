use std::fmt::Write;

use serde_json::{json, Map, Value};

use super::{brand_ramps, cubic_bezier_points, js_key, js_string, number};
use crate::color::contrast_text;
use crate::error::TokenResult;
use crate::tokens::{Mode, Theme};
use crate::tokens::shadow::{parse_box_shadow, round_to, ShadowLayer};

/// Render a JSON value as a JavaScript literal with bare keys and single
/// quotes.
pub(super) fn render_js(value: &Value, indent: usize) -> String {
    match value {
        Value::Object(map) if map.is_empty() => "{}".to_string(),
        Value::Object(map) => {
            let pad = " ".repeat(indent + 2);
            let mut out = String::from("{\n");
            for (key, item) in map {
                out.push_str(&pad);
                out.push_str(&js_key(key));
                out.push_str(": ");
                out.push_str(&render_js(item, indent + 2));
                out.push_str(",\n");
            }
            out.push_str(&" ".repeat(indent));
            out.push('}');
            out
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(|item| render_js(item, indent)).collect();
            format!("[{}]", items.join(", "))
        }
        Value::String(text) => js_string(text),
        other => other.to_string(),
    }
}

/// Colors for one mode: brand ramps, semantic and surface roles, and the
/// shared neutral ramp.
pub(super) fn native_colors(theme: &Theme, mode: Mode) -> TokenResult<Value> {
    let mut colors = Map::new();
    for ramp in brand_ramps(theme)? {
        let value = ramp.token.value.get(mode);
        let mut entry = Map::new();
        entry.insert("DEFAULT".into(), Value::from(value));
        entry.insert("foreground".into(), Value::from(contrast_text(value)?));
        for (weight, hex) in ramp.scale(mode).iter() {
            entry.insert(weight.to_string(), Value::from(hex));
        }
        colors.insert(ramp.token.name.clone(), Value::Object(entry));
    }
    for (role, color) in theme.colors.semantic.iter() {
        colors.insert(role.name().into(), Value::from(color.get(mode)));
    }
    let neutral: Map<String, Value> = theme
        .colors
        .neutral
        .scale
        .iter()
        .map(|(weight, hex)| (weight.to_string(), Value::from(hex)))
        .collect();
    colors.insert("neutral".into(), Value::Object(neutral));
    for (role, color) in theme.colors.surface.iter() {
        colors.insert(role.name().into(), Value::from(color.get(mode)));
    }
    Ok(Value::Object(colors))
}

pub(super) fn radius(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .radius
        .resolved()
        .map(|(name, px)| (name.to_string(), Value::from(px)))
        .collect();
    Value::Object(map)
}

pub(super) fn spacing(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .spacing
        .scale
        .iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), number(*value)))
        .collect();
    Value::Object(map)
}

pub(super) fn font_family(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .typography
        .families
        .iter()
        .map(|(role, family)| (role.name().to_string(), Value::from(family.primary())))
        .collect();
    Value::Object(map)
}

pub(super) fn font_size(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| (step.name.clone(), number(step.size)))
        .collect();
    Value::Object(map)
}

/// React Native line heights are absolute pixels.
pub(super) fn line_height(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| (step.name.clone(), number(step.line_height_px())))
        .collect();
    Value::Object(map)
}

/// Weights are strings in React Native.
pub(super) fn font_weight(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .typography
        .weights
        .iter()
        .map(|weight| (weight.name.clone(), Value::from(weight.value.to_string())))
        .collect();
    Value::Object(map)
}

pub(super) fn durations(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .animations
        .durations
        .iter()
        .map(|duration| (duration.name.clone(), Value::from(duration.value)))
        .collect();
    Value::Object(map)
}

/// Native shadows support a single outer layer; the first one wins.
pub(super) fn primary_layer(layers: &[ShadowLayer]) -> Option<&ShadowLayer> {
    layers.iter().find(|layer| !layer.inset)
}

pub(super) fn ios_shadow(layer: &ShadowLayer) -> Value {
    json!({
        "shadowColor": layer.color.to_string(),
        "shadowOffset": { "width": number(layer.offset_x), "height": number(layer.offset_y) },
        "shadowOpacity": round_to(layer.alpha, 3),
        "shadowRadius": number(round_to(layer.blur / 2.0, 2)),
    })
}

pub(super) fn android_shadow(layer: &ShadowLayer) -> Value {
    json!({ "elevation": number(layer.elevation()) })
}

fn write_shadows(out: &mut String, theme: &Theme) -> TokenResult<()> {
    writeln!(out, "export const shadows = {{")?;
    for shadow in &theme.shadows {
        let layers = parse_box_shadow(&shadow.name, &shadow.value)?;
        let key = js_key(&shadow.name);
        match primary_layer(&layers) {
            None if layers.is_empty() => writeln!(out, "  {key}: {{}},")?,
            None => {
                tracing::warn!(shadow = %shadow.name, "inset-only shadow has no native equivalent");
                writeln!(out, "  {key}: {{}}, // inset only: {}", shadow.value.trim())?;
            }
            Some(layer) => {
                writeln!(out, "  {key}: Platform.select({{")?;
                writeln!(out, "    ios: {},", render_js(&ios_shadow(layer), 4))?;
                writeln!(out, "    android: {},", render_js(&android_shadow(layer), 4))?;
                writeln!(out, "    default: {{}},")?;
                writeln!(out, "  }}),")?;
            }
        }
    }
    writeln!(out, "}};")?;
    Ok(())
}

fn write_easings(out: &mut String, theme: &Theme) -> TokenResult<()> {
    writeln!(out, "export const easings = {{")?;
    for easing in &theme.animations.easings {
        let key = js_key(&easing.name);
        match cubic_bezier_points(&easing.value) {
            Some(_) if easing.value.trim() == "linear" => writeln!(out, "  {key}: Easing.linear,")?,
            Some([x1, y1, x2, y2]) => {
                writeln!(out, "  {key}: Easing.bezier({x1}, {y1}, {x2}, {y2}),")?;
            }
            None => {
                tracing::warn!(easing = %easing.name, value = %easing.value, "easing has no bezier form; using linear");
                writeln!(out, "  {key}: Easing.linear, // unsupported: {}", easing.value.trim())?;
            }
        }
    }
    writeln!(out, "}};")?;
    Ok(())
}

fn write_typography(out: &mut String, theme: &Theme) -> TokenResult<()> {
    writeln!(out, "export const typography = StyleSheet.create({{")?;
    for step in &theme.typography.scale {
        let style = json!({
            "fontSize": number(step.size),
            "lineHeight": number(step.line_height_px()),
        });
        writeln!(out, "  {}: {},", js_key(&step.name), render_js(&style, 2))?;
    }
    writeln!(out, "}});")?;
    Ok(())
}

/// A plain React Native module. Shadows branch on `Platform.select`
/// because Android only understands elevation.
///
/// Native shadows have a single outer layer, so inset-only shadows export
/// as `{}` and easings without a bezier form fall back to `Easing.linear`.
/// Both keep the original value in a trailing comment and log a warning.
pub fn generate_rn_stylesheet(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;
    let mut out = String::new();

    writeln!(out, "// {} design tokens", theme.name)?;
    writeln!(out, "import {{ Easing, Platform, StyleSheet }} from 'react-native';")?;
    writeln!(out)?;

    let mut colors = Map::new();
    for mode in Mode::ALL {
        colors.insert(mode.id().into(), native_colors(theme, mode)?);
    }
    let sections = [
        ("colors", Value::Object(colors)),
        ("radius", radius(theme)),
        ("spacing", spacing(theme)),
        ("fontFamily", font_family(theme)),
        ("fontSize", font_size(theme)),
        ("lineHeight", line_height(theme)),
        ("fontWeight", font_weight(theme)),
        ("durations", durations(theme)),
    ];
    for (name, value) in &sections {
        writeln!(out, "export const {name} = {};", render_js(value, 0))?;
        writeln!(out)?;
    }

    write_shadows(&mut out, theme)?;
    writeln!(out)?;
    write_easings(&mut out, theme)?;
    writeln!(out)?;
    write_typography(&mut out, theme)?;
    writeln!(out)?;

    writeln!(
        out,
        "export default {{ colors, radius, spacing, fontFamily, fontSize, lineHeight, fontWeight, shadows, durations, easings, typography }};"
    )?;
    Ok(out)
}
