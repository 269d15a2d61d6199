use std::fmt::Write;

use super::{brand_ramps, BrandRamp};
use crate::color::contrast_text;
use crate::error::TokenResult;
use crate::tokens::{Mode, Theme};

const DARK_SELECTOR: &str = ".dark,\n[data-theme=\"dark\"]";

fn write_mode_colors(
    out: &mut String,
    theme: &Theme,
    ramps: &[BrandRamp<'_>],
    mode: Mode,
) -> TokenResult<()> {
    writeln!(out, "  /* Brand */")?;
    for ramp in ramps {
        let name = &ramp.token.name;
        let value = ramp.token.value.get(mode);
        writeln!(out, "  --color-{name}: {value};")?;
        writeln!(out, "  --color-{name}-foreground: {};", contrast_text(value)?)?;
        for (weight, hex) in ramp.scale(mode).iter() {
            writeln!(out, "  --color-{name}-{weight}: {hex};")?;
        }
    }

    writeln!(out, "  /* Semantic */")?;
    for (role, color) in theme.colors.semantic.iter() {
        let value = color.get(mode);
        writeln!(out, "  --color-{}: {value};", role.name())?;
        writeln!(out, "  --color-{}-foreground: {};", role.name(), contrast_text(value)?)?;
    }

    writeln!(out, "  /* Surface */")?;
    for (role, color) in theme.colors.surface.iter() {
        writeln!(out, "  --color-{}: {};", role.name(), color.get(mode))?;
    }
    Ok(())
}

/// `:root` carries light values and every mode-independent token; a
/// `[data-theme="dark"]` block overrides the dual-mode colors.
pub fn generate_css(theme: &Theme) -> TokenResult<String> {
    theme.validate()?;
    let ramps = brand_ramps(theme)?;
    let mut out = String::new();

    writeln!(out, "/* {} design tokens */", theme.name)?;
    writeln!(out, ":root {{")?;
    writeln!(out, "  color-scheme: light;")?;
    write_mode_colors(&mut out, theme, &ramps, Mode::Light)?;

    writeln!(out, "  /* Neutral */")?;
    for (weight, hex) in theme.colors.neutral.scale.iter() {
        writeln!(out, "  --color-neutral-{weight}: {hex};")?;
    }

    writeln!(out, "  /* Radius */")?;
    for (name, px) in theme.radius.resolved() {
        writeln!(out, "  --radius-{name}: {px}px;")?;
    }

    writeln!(out, "  /* Spacing */")?;
    for (index, value) in theme.spacing.scale.iter().enumerate() {
        writeln!(out, "  --spacing-{index}: {value}px;")?;
    }

    writeln!(out, "  /* Typography */")?;
    for (role, family) in theme.typography.families.iter() {
        writeln!(out, "  --font-{}: {};", role.name(), family.value)?;
    }
    for step in &theme.typography.scale {
        writeln!(out, "  --text-{}: {}px;", step.name, step.size)?;
        writeln!(out, "  --leading-{}: {};", step.name, step.line_height)?;
    }
    for weight in &theme.typography.weights {
        writeln!(out, "  --font-weight-{}: {};", weight.name, weight.value)?;
    }

    writeln!(out, "  /* Shadows */")?;
    for shadow in &theme.shadows {
        let value = if shadow.is_none() { "none" } else { shadow.value.trim() };
        writeln!(out, "  --shadow-{}: {value};", shadow.name)?;
    }

    writeln!(out, "  /* Motion */")?;
    for duration in &theme.animations.durations {
        writeln!(out, "  --duration-{}: {}ms;", duration.name, duration.value)?;
    }
    for easing in &theme.animations.easings {
        writeln!(out, "  --ease-{}: {};", easing.name, easing.value)?;
    }
    writeln!(out, "}}")?;

    writeln!(out)?;
    writeln!(out, "{DARK_SELECTOR} {{")?;
    writeln!(out, "  color-scheme: dark;")?;
    write_mode_colors(&mut out, theme, &ramps, Mode::Dark)?;
    writeln!(out, "}}")?;

    Ok(out)
}
