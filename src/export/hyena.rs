use serde_json::{json, Map, Value};

use super::react_native::{
    android_shadow, durations, font_family, font_size, font_weight, ios_shadow, line_height,
    native_colors, primary_layer, radius, render_js, spacing,
};
use super::{cubic_bezier_points, number};
use crate::error::TokenResult;
use crate::tokens::{Mode, Theme};
use crate::tokens::shadow::parse_box_shadow;

pub const HYENA_PACKAGE: &str = "@hyena/r-ui";

fn shadows(theme: &Theme) -> TokenResult<Value> {
    let mut map = Map::new();
    for shadow in &theme.shadows {
        let layers = parse_box_shadow(&shadow.name, &shadow.value)?;
        let value = match primary_layer(&layers) {
            Some(layer) => json!({ "ios": ios_shadow(layer), "android": android_shadow(layer) }),
            None => {
                if !layers.is_empty() {
                    tracing::warn!(shadow = %shadow.name, "inset-only shadow has no native equivalent");
                }
                json!({ "ios": {}, "android": { "elevation": 0 } })
            }
        };
        map.insert(shadow.name.clone(), value);
    }
    Ok(Value::Object(map))
}

/// Easings stay as bezier control points; the factory builds the curves.
/// Values without a bezier form are passed through as strings.
fn easings(theme: &Theme) -> Value {
    let map: Map<String, Value> = theme
        .animations
        .easings
        .iter()
        .map(|easing| {
            let value = match cubic_bezier_points(&easing.value) {
                Some(points) => json!(points.map(number)),
                None => {
                    tracing::warn!(easing = %easing.name, value = %easing.value, "easing has no bezier form; passing it through");
                    Value::from(easing.value.trim())
                }
            };
            (easing.name.clone(), value)
        })
        .collect();
    Value::Object(map)
}

fn theme_object(theme: &Theme) -> TokenResult<Value> {
    let mut colors = Map::new();
    for mode in Mode::ALL {
        colors.insert(mode.id().into(), native_colors(theme, mode)?);
    }
    Ok(json!({
        "name": theme.name,
        "colors": colors,
        "radius": radius(theme),
        "spacing": spacing(theme),
        "typography": {
            "fontFamily": font_family(theme),
            "fontSize": font_size(theme),
            "lineHeight": line_height(theme),
            "fontWeight": font_weight(theme),
        },
        "shadows": shadows(theme)?,
        "motion": {
            "durations": durations(theme),
            "easings": easings(theme),
        },
    }))
}

/// The same token shape as the stylesheet module, passed as one object to
/// the r/ui `createTheme` factory.
pub fn generate_rn_theme(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;
    let body = render_js(&theme_object(theme)?, 0);
    Ok(format!(
        "// {} design tokens\nimport {{ createTheme }} from '{HYENA_PACKAGE}';\n\nexport const theme = createTheme({body});\n\nexport default theme;\n",
        theme.name
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_tokens_in_create_theme_call() {
        let output = generate_rn_theme(&Theme::default()).unwrap();
        assert!(output.contains("import { createTheme } from '@hyena/r-ui';"));
        assert!(output.contains("export const theme = createTheme({\n"));
        assert!(output.trim_end().ends_with("export default theme;"));
        assert!(output.contains("  name: 'Untitled',"));
    }

    #[test]
    fn shadows_carry_both_platforms() {
        let value = shadows(&Theme::default()).unwrap();
        assert_eq!(value["none"]["android"]["elevation"], 0);
        assert_eq!(value["md"]["android"]["elevation"], 4);
        assert_eq!(value["md"]["ios"]["shadowOffset"]["height"], 4);
        assert_eq!(value["md"]["ios"]["shadowRadius"], 3);
    }

    #[test]
    fn easings_are_control_points() {
        let value = easings(&Theme::default());
        assert_eq!(value["out"], json!([0, 0, 0.2, 1]));
        assert_eq!(value["linear"], json!([0, 0, 1, 1]));

        let mut theme = Theme::default();
        theme.animations.easings[0].value = "steps(4)".to_string();
        assert_eq!(easings(&theme)["default"], "steps(4)");
    }

    #[test]
    fn inset_only_shadows_have_no_elevation() {
        let mut theme = Theme::default();
        theme.shadows[1].value = "inset 0 2px 4px rgba(0, 0, 0, 0.06)".to_string();
        let value = shadows(&theme).unwrap();
        assert_eq!(value["sm"]["android"]["elevation"], 0);
        assert_eq!(value["sm"]["ios"], json!({}));
    }

    #[test]
    fn token_shape_matches_stylesheet_sections() {
        let value = theme_object(&Theme::default()).unwrap();
        assert_eq!(value["colors"]["dark"]["brand"]["DEFAULT"], "#60a5fa");
        assert_eq!(value["typography"]["fontWeight"]["semibold"], "600");
        assert_eq!(value["radius"]["md"], 10);
    }
}
