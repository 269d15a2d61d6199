use serde_json::{json, Map, Value};

use super::{brand_ramps, to_pretty_json};
use crate::error::TokenResult;
use crate::tokens::{Mode, Theme};
use crate::tokens::shadow::{parse_box_shadow, ShadowLayer};

const GLOBAL_SET: &str = "global";

fn token(value: impl Into<Value>, kind: &str) -> Value {
    json!({ "value": value.into(), "type": kind })
}

fn shadow_layer(layer: &ShadowLayer) -> Value {
    let kind = if layer.inset { "innerShadow" } else { "dropShadow" };
    json!({
        "x": layer.offset_x.to_string(),
        "y": layer.offset_y.to_string(),
        "blur": layer.blur.to_string(),
        "spread": layer.spread.to_string(),
        "color": layer.css_color(),
        "type": kind,
    })
}

fn global_set(theme: &Theme) -> TokenResult<Value> {
    let radius: Map<String, Value> = theme
        .radius
        .resolved()
        .map(|(name, px)| (name.to_string(), token(px.to_string(), "borderRadius")))
        .collect();
    let spacing: Map<String, Value> = theme
        .spacing
        .scale
        .iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), token(value.to_string(), "spacing")))
        .collect();
    let font_families: Map<String, Value> = theme
        .typography
        .families
        .iter()
        .map(|(role, family)| (role.name().to_string(), token(family.value.as_str(), "fontFamilies")))
        .collect();
    let font_sizes: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| (step.name.clone(), token(step.size.to_string(), "fontSizes")))
        .collect();
    let line_heights: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| {
            let percent = (step.line_height * 100.0).round();
            (step.name.clone(), token(format!("{percent}%"), "lineHeights"))
        })
        .collect();
    let font_weights: Map<String, Value> = theme
        .typography
        .weights
        .iter()
        .map(|weight| (weight.name.clone(), token(weight.value.to_string(), "fontWeights")))
        .collect();
    let neutral: Map<String, Value> = theme
        .colors
        .neutral
        .scale
        .iter()
        .map(|(weight, hex)| (weight.to_string(), token(hex, "color")))
        .collect();

    let mut shadows = Map::new();
    for shadow in &theme.shadows {
        let layers = parse_box_shadow(&shadow.name, &shadow.value)?;
        let value = match layers.as_slice() {
            [] => Value::from("none"),
            [single] => shadow_layer(single),
            many => Value::from(many.iter().map(shadow_layer).collect::<Vec<_>>()),
        };
        shadows.insert(shadow.name.clone(), token(value, "boxShadow"));
    }

    let durations: Map<String, Value> = theme
        .animations
        .durations
        .iter()
        .map(|duration| (duration.name.clone(), token(format!("{}ms", duration.value), "other")))
        .collect();
    let easings: Map<String, Value> = theme
        .animations
        .easings
        .iter()
        .map(|easing| (easing.name.clone(), token(easing.value.as_str(), "other")))
        .collect();

    Ok(json!({
        "borderRadius": radius,
        "spacing": spacing,
        "fontFamilies": font_families,
        "fontSizes": font_sizes,
        "lineHeights": line_heights,
        "fontWeights": font_weights,
        "neutral": neutral,
        "boxShadow": shadows,
        "duration": durations,
        "easing": easings,
    }))
}

fn mode_set(theme: &Theme, mode: Mode) -> TokenResult<Value> {
    let mut brand = Map::new();
    for ramp in brand_ramps(theme)? {
        let mut group = Map::new();
        group.insert("DEFAULT".into(), token(ramp.token.value.get(mode), "color"));
        for (weight, hex) in ramp.scale(mode).iter() {
            group.insert(weight.to_string(), token(hex, "color"));
        }
        brand.insert(ramp.token.name.clone(), Value::Object(group));
    }
    let semantic: Map<String, Value> = theme
        .colors
        .semantic
        .iter()
        .map(|(role, color)| (role.name().to_string(), token(color.get(mode), "color")))
        .collect();
    let surface: Map<String, Value> = theme
        .colors
        .surface
        .iter()
        .map(|(role, color)| (role.name().to_string(), token(color.get(mode), "color")))
        .collect();
    Ok(json!({ "brand": brand, "semantic": semantic, "surface": surface }))
}

/// Tokens Studio plugin document: a `global` set plus one set per mode,
/// tied together by `$themes`.
pub fn generate_tokens_studio(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;

    let mut document = Map::new();
    document.insert(GLOBAL_SET.into(), global_set(theme)?);
    for mode in Mode::ALL {
        document.insert(mode.id().into(), mode_set(theme, mode)?);
    }

    let themes: Vec<Value> = Mode::ALL
        .iter()
        .map(|mode| {
            json!({
                "id": mode.id(),
                "name": format!("{} {}", theme.name, mode.label()),
                "selectedTokenSets": { GLOBAL_SET: "source", mode.id(): "enabled" },
            })
        })
        .collect();
    document.insert("$themes".into(), Value::from(themes));

    let mut order = vec![GLOBAL_SET];
    order.extend(Mode::ALL.iter().map(|mode| mode.id()));
    document.insert("$metadata".into(), json!({ "tokenSetOrder": order }));

    to_pretty_json(&Value::Object(document))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document() -> Value {
        serde_json::from_str(&generate_tokens_studio(&Theme::default()).unwrap()).unwrap()
    }

    #[test]
    fn token_sets_follow_metadata_order() {
        let doc = document();
        assert_eq!(doc["$metadata"]["tokenSetOrder"], json!(["global", "light", "dark"]));
        let keys: Vec<&String> = doc.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["global", "light", "dark", "$themes", "$metadata"]);
    }

    #[test]
    fn themes_map_each_mode_to_its_set() {
        let doc = document();
        let dark = &doc["$themes"][1];
        assert_eq!(dark["id"], "dark");
        assert_eq!(dark["selectedTokenSets"]["global"], "source");
        assert_eq!(dark["selectedTokenSets"]["dark"], "enabled");
    }

    #[test]
    fn tokens_are_value_type_pairs() {
        let doc = document();
        assert_eq!(doc["light"]["brand"]["brand"]["500"], json!({ "value": "#3b82f6", "type": "color" }));
        assert_eq!(doc["dark"]["surface"]["background"]["value"], "#09090b");
        assert_eq!(doc["global"]["borderRadius"]["md"]["value"], "10");
        assert_eq!(doc["global"]["lineHeights"]["lg"]["value"], "175%");
    }

    #[test]
    fn shadows_are_structured_layers() {
        let doc = document();
        assert_eq!(doc["global"]["boxShadow"]["none"]["value"], "none");
        let sm = &doc["global"]["boxShadow"]["sm"]["value"];
        assert_eq!(sm["type"], "dropShadow");
        assert_eq!(sm["color"], "rgba(0, 0, 0, 0.05)");
        assert_eq!(doc["global"]["boxShadow"]["md"]["value"].as_array().unwrap().len(), 2);
    }
}
