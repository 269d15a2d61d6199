use serde_json::{json, Map, Value};

use super::{brand_ramps, number, to_pretty_json};
use crate::color::hex_to_rgb;
use crate::error::TokenResult;
use crate::tokens::{Mode, ModeColor, Theme};
use crate::tokens::shadow::round_to;

const DEFAULT_MODE: &str = "default";

/// Figma stores colors as RGBA floats in `0..=1`.
fn figma_color(hex: &str) -> TokenResult<Value> {
    let [r, g, b] = hex_to_rgb(hex)?.unit_channels();
    Ok(json!({
        "r": number(round_to(r, 4)),
        "g": number(round_to(g, 4)),
        "b": number(round_to(b, 4)),
        "a": 1,
    }))
}

fn variable(name: String, kind: &str, values_by_mode: Map<String, Value>) -> Value {
    json!({
        "name": name,
        "type": kind,
        "valuesByMode": values_by_mode,
    })
}

fn single_mode(value: Value) -> Map<String, Value> {
    let mut values = Map::new();
    values.insert(DEFAULT_MODE.into(), value);
    values
}

fn color_variable(name: String, light: &str, dark: &str) -> TokenResult<Value> {
    let mut values = Map::new();
    values.insert(Mode::Light.id().into(), figma_color(light)?);
    values.insert(Mode::Dark.id().into(), figma_color(dark)?);
    Ok(variable(name, "COLOR", values))
}

fn mode_variable(name: String, color: &ModeColor) -> TokenResult<Value> {
    color_variable(name, color.get(Mode::Light), color.get(Mode::Dark))
}

fn collection(name: &str, modes: Value, variables: Vec<Value>) -> Value {
    json!({ "name": name, "modes": modes, "variables": variables })
}

fn default_modes() -> Value {
    json!([{ "modeId": DEFAULT_MODE, "name": "Default" }])
}

fn color_collection(theme: &Theme) -> TokenResult<Value> {
    let mut variables = Vec::new();
    for ramp in brand_ramps(theme)? {
        let name = &ramp.token.name;
        variables.push(mode_variable(format!("{name}/DEFAULT"), &ramp.token.value)?);
        let dark = ramp.scale(Mode::Dark);
        for (weight, light) in ramp.scale(Mode::Light).iter() {
            let dark = dark.get(weight).unwrap_or(light);
            variables.push(color_variable(format!("{name}/{weight}"), light, dark)?);
        }
    }
    for (role, color) in theme.colors.semantic.iter() {
        variables.push(mode_variable(format!("semantic/{}", role.name()), color)?);
    }
    for (weight, hex) in theme.colors.neutral.scale.iter() {
        variables.push(color_variable(format!("neutral/{weight}"), hex, hex)?);
    }
    for (role, color) in theme.colors.surface.iter() {
        variables.push(mode_variable(format!("surface/{}", role.name()), color)?);
    }

    let modes = json!(Mode::ALL
        .iter()
        .map(|mode| json!({ "modeId": mode.id(), "name": mode.label() }))
        .collect::<Vec<_>>());
    Ok(collection("Colors", modes, variables))
}

fn float(name: String, value: f64) -> Value {
    variable(name, "FLOAT", single_mode(number(value)))
}

fn string(name: String, value: &str) -> Value {
    variable(name, "STRING", single_mode(Value::from(value)))
}

/// Native Figma Variables import: one collection per token family. Colors
/// carry Light and Dark modes, everything else a single default mode.
pub fn generate_figma_variables(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;

    let radius = theme
        .radius
        .resolved()
        .map(|(name, px)| float(format!("radius/{name}"), f64::from(px)))
        .collect();
    let spacing = theme
        .spacing
        .scale
        .iter()
        .enumerate()
        .map(|(index, value)| float(format!("spacing/{index}"), *value))
        .collect();

    let typography = &theme.typography;
    let mut type_variables: Vec<Value> = typography
        .families
        .iter()
        .map(|(role, family)| string(format!("font-family/{}", role.name()), family.primary()))
        .collect();
    for step in &typography.scale {
        type_variables.push(float(format!("font-size/{}", step.name), step.size));
        type_variables.push(float(format!("line-height/{}", step.name), step.line_height_px()));
    }
    for weight in &typography.weights {
        type_variables.push(float(format!("font-weight/{}", weight.name), f64::from(weight.value)));
    }

    let mut motion: Vec<Value> = theme
        .animations
        .durations
        .iter()
        .map(|duration| float(format!("duration/{}", duration.name), f64::from(duration.value)))
        .collect();
    motion.extend(
        theme
            .animations
            .easings
            .iter()
            .map(|easing| string(format!("easing/{}", easing.name), &easing.value)),
    );

    let effects = theme
        .shadows
        .iter()
        .map(|shadow| {
            let value = if shadow.is_none() { "none" } else { shadow.value.trim() };
            string(format!("shadow/{}", shadow.name), value)
        })
        .collect();

    let document = json!({
        "version": "1.0",
        "metadata": { "name": theme.name },
        "collections": [
            color_collection(theme)?,
            collection("Radius", default_modes(), radius),
            collection("Spacing", default_modes(), spacing),
            collection("Typography", default_modes(), type_variables),
            collection("Motion", default_modes(), motion),
            collection("Effects", default_modes(), effects),
        ],
    });
    to_pretty_json(&document)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Value {
        serde_json::from_str(&generate_figma_variables(&Theme::default()).unwrap()).unwrap()
    }

    fn find<'a>(doc: &'a Value, collection: &str, variable: &str) -> &'a Value {
        doc["collections"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == collection)
            .unwrap()["variables"]
            .as_array()
            .unwrap()
            .iter()
            .find(|v| v["name"] == variable)
            .unwrap_or_else(|| panic!("{collection}:{variable} missing"))
    }

    #[test]
    fn color_collection_has_light_and_dark_modes() {
        let doc = document();
        let colors = &doc["collections"][0];
        assert_eq!(colors["name"], "Colors");
        assert_eq!(colors["modes"][0]["name"], "Light");
        assert_eq!(colors["modes"][1]["name"], "Dark");
    }

    #[test]
    fn colors_are_unit_floats_per_mode() {
        let doc = document();
        let white = find(&doc, "Colors", "surface/background");
        assert_eq!(white["type"], "COLOR");
        assert_eq!(white["valuesByMode"]["light"], json!({ "r": 1, "g": 1, "b": 1, "a": 1 }));
        let brand = find(&doc, "Colors", "brand/500");
        // #3b82f6
        assert_eq!(brand["valuesByMode"]["light"]["r"], 0.2314);
        assert_eq!(brand["valuesByMode"]["light"]["b"], 0.9647);
    }

    #[test]
    fn scalar_collections_use_float_and_string() {
        let doc = document();
        assert_eq!(find(&doc, "Radius", "radius/md")["valuesByMode"]["default"], 10);
        assert_eq!(find(&doc, "Spacing", "spacing/2")["valuesByMode"]["default"], 4);
        assert_eq!(find(&doc, "Typography", "font-family/sans")["type"], "STRING");
        assert_eq!(find(&doc, "Typography", "font-weight/bold")["valuesByMode"]["default"], 700);
        assert_eq!(find(&doc, "Motion", "easing/in-out")["type"], "STRING");
        assert_eq!(find(&doc, "Effects", "shadow/none")["valuesByMode"]["default"], "none");
    }
}
