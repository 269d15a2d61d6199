use serde_json::{json, Map, Value};

use super::{brand_ramps, to_pretty_json, BrandRamp};
use crate::color::{contrast_text, ColorScale};
use crate::error::TokenResult;
use crate::tokens::{Mode, ModeColor, Theme};

fn scale_entries(object: &mut Map<String, Value>, scale: &ColorScale) {
    for (weight, hex) in scale.iter() {
        object.insert(weight.to_string(), Value::from(hex));
    }
}

fn brand_entry(ramp: &BrandRamp<'_>) -> TokenResult<Value> {
    let mut light = Map::new();
    light.insert("DEFAULT".into(), Value::from(ramp.token.value.get(Mode::Light)));
    light.insert(
        "foreground".into(),
        Value::from(contrast_text(ramp.token.value.get(Mode::Light))?),
    );
    scale_entries(&mut light, ramp.scale(Mode::Light));

    let mut dark = Map::new();
    dark.insert("DEFAULT".into(), Value::from(ramp.token.value.get(Mode::Dark)));
    dark.insert(
        "foreground".into(),
        Value::from(contrast_text(ramp.token.value.get(Mode::Dark))?),
    );
    scale_entries(&mut dark, ramp.scale(Mode::Dark));

    light.insert("dark".into(), Value::Object(dark));
    Ok(Value::Object(light))
}

fn mode_entry(color: &ModeColor, with_foreground: bool) -> TokenResult<Value> {
    let mut entry = Map::new();
    entry.insert("DEFAULT".into(), Value::from(color.get(Mode::Light)));
    entry.insert("dark".into(), Value::from(color.get(Mode::Dark)));
    if with_foreground {
        entry.insert(
            "foreground".into(),
            Value::from(contrast_text(color.get(Mode::Light))?),
        );
    }
    Ok(Value::Object(entry))
}

fn colors(theme: &Theme) -> TokenResult<Value> {
    let mut colors = Map::new();
    for ramp in brand_ramps(theme)? {
        colors.insert(ramp.token.name.clone(), brand_entry(&ramp)?);
    }
    for (role, color) in theme.colors.semantic.iter() {
        colors.insert(role.name().into(), mode_entry(color, true)?);
    }
    let mut neutral = Map::new();
    scale_entries(&mut neutral, &theme.colors.neutral.scale);
    colors.insert("neutral".into(), Value::Object(neutral));
    for (role, color) in theme.colors.surface.iter() {
        colors.insert(role.name().into(), mode_entry(color, false)?);
    }
    Ok(Value::Object(colors))
}

fn extend(theme: &Theme) -> TokenResult<Value> {
    let border_radius: Map<String, Value> = theme
        .radius
        .resolved()
        .map(|(name, px)| (name.to_string(), Value::from(format!("{px}px"))))
        .collect();
    let spacing: Map<String, Value> = theme
        .spacing
        .scale
        .iter()
        .enumerate()
        .map(|(index, value)| (index.to_string(), Value::from(format!("{value}px"))))
        .collect();
    let font_family: Map<String, Value> = theme
        .typography
        .families
        .iter()
        .map(|(role, family)| (role.name().to_string(), json!(family.stack())))
        .collect();
    let font_size: Map<String, Value> = theme
        .typography
        .scale
        .iter()
        .map(|step| {
            let value = json!([
                format!("{}px", step.size),
                { "lineHeight": step.line_height.to_string() }
            ]);
            (step.name.clone(), value)
        })
        .collect();
    let font_weight: Map<String, Value> = theme
        .typography
        .weights
        .iter()
        .map(|weight| (weight.name.clone(), Value::from(weight.value.to_string())))
        .collect();
    let box_shadow: Map<String, Value> = theme
        .shadows
        .iter()
        .map(|shadow| {
            let value = if shadow.is_none() { "none" } else { shadow.value.trim() };
            (shadow.name.clone(), Value::from(value))
        })
        .collect();
    let durations: Map<String, Value> = theme
        .animations
        .durations
        .iter()
        .map(|duration| (duration.name.clone(), Value::from(format!("{}ms", duration.value))))
        .collect();
    let easings: Map<String, Value> = theme
        .animations
        .easings
        .iter()
        .map(|easing| (easing.name.clone(), Value::from(easing.value.as_str())))
        .collect();

    Ok(json!({
        "colors": colors(theme)?,
        "borderRadius": border_radius,
        "spacing": spacing,
        "fontFamily": font_family,
        "fontSize": font_size,
        "fontWeight": font_weight,
        "boxShadow": box_shadow,
        "transitionDuration": durations,
        "transitionTimingFunction": easings,
    }))
}

/// A CommonJS Tailwind config whose `theme.extend` carries every token.
/// Dark variants sit under each color's `dark` key.
pub fn generate_tailwind(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;
    let config = json!({
        "darkMode": ["selector", "[data-theme=\"dark\"]"],
        "theme": { "extend": extend(theme)? },
    });
    let body = to_pretty_json(&config)?;

    let mut out = String::new();
    out.push_str(&format!("// {} design tokens\n", theme.name));
    out.push_str("/** @type {import('tailwindcss').Config} */\n");
    out.push_str("module.exports = ");
    out.push_str(body.trim_end());
    out.push_str(";\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_body(output: &str) -> Value {
        let start = output.find("module.exports = ").unwrap() + "module.exports = ".len();
        let body = output[start..].trim_end().trim_end_matches(';');
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn extend_block_carries_brand_ramp_and_dark_variant() {
        let output = generate_tailwind(&Theme::default()).unwrap();
        let config = config_body(&output);
        let brand = &config["theme"]["extend"]["colors"]["brand"];
        assert_eq!(brand["DEFAULT"], "#3b82f6");
        assert_eq!(brand["500"], "#3b82f6");
        assert_eq!(brand["dark"]["DEFAULT"], "#60a5fa");
        assert_eq!(brand["dark"]["500"], "#60a5fa");
    }

    #[test]
    fn scalar_tokens_use_css_units() {
        let config = config_body(&generate_tailwind(&Theme::default()).unwrap());
        let extend = &config["theme"]["extend"];
        assert_eq!(extend["borderRadius"]["md"], "10px");
        assert_eq!(extend["spacing"]["2"], "4px");
        assert_eq!(extend["fontSize"]["base"][0], "16px");
        assert_eq!(extend["fontSize"]["base"][1]["lineHeight"], "1.5");
        assert_eq!(extend["fontWeight"]["bold"], "700");
        assert_eq!(extend["boxShadow"]["none"], "none");
        assert_eq!(extend["transitionDuration"]["slow"], "400ms");
        assert_eq!(extend["fontFamily"]["sans"][0], "Inter");
    }

    #[test]
    fn surfaces_pair_light_and_dark() {
        let config = config_body(&generate_tailwind(&Theme::default()).unwrap());
        let background = &config["theme"]["extend"]["colors"]["background"];
        assert_eq!(background["DEFAULT"], "#ffffff");
        assert_eq!(background["dark"], "#09090b");
    }
}
