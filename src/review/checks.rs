use super::{Issue, IssueCategory, ReviewPolicy, Severity};
use crate::color::{self, contrast_ratio_rgb, contrast_text_rgb, ensure_readability, hex_to_rgb, Rgb};
use crate::tokens::{Mode, SurfaceRole, Theme};

/// Body text sits at neutral 900 in light mode and neutral 50 in dark mode.
const fn body_text_weight(mode: Mode) -> u16 {
    match mode {
        Mode::Light => 900,
        Mode::Dark => 50,
    }
}

fn parse_or_flag(label: &str, hex: &str, issues: &mut Vec<Issue>) -> Option<Rgb> {
    match hex_to_rgb(hex) {
        Ok(rgb) => Some(rgb),
        Err(_) => {
            issues.push(
                Issue::new(
                    Severity::Error,
                    IssueCategory::Contrast,
                    format!("{label} has an invalid color {hex:?}"),
                )
                .with_suggestion("Use a 6-digit hex color such as #3b82f6"),
            );
            None
        }
    }
}

fn threshold_name(policy: &ReviewPolicy, severity: Severity) -> String {
    match severity {
        Severity::Error => format!("WCAG AA {:.1}:1", policy.aa_threshold),
        _ => format!("WCAG AAA {:.1}:1", policy.aaa_threshold),
    }
}

/// Contrast of a filled color against the text color chosen for it.
fn check_fill(
    policy: &ReviewPolicy,
    label: &str,
    mode: Mode,
    hex: &str,
    issues: &mut Vec<Issue>,
) {
    let Some(fill) = parse_or_flag(label, hex, issues) else {
        return;
    };
    let text = contrast_text_rgb(fill);
    let text_rgb = if text == color::BLACK { Rgb::BLACK } else { Rgb::WHITE };
    let ratio = contrast_ratio_rgb(fill, text_rgb);
    let Some(severity) = policy.classify_contrast(ratio) else {
        return;
    };

    let target = match severity {
        Severity::Error => policy.aa_threshold,
        _ => policy.aaa_threshold,
    };
    let mut issue = Issue::new(
        severity,
        IssueCategory::Contrast,
        format!(
            "{label} ({hex}, {} mode) with {text} text has contrast {ratio:.2}:1, below {}",
            mode.id(),
            threshold_name(policy, severity)
        ),
    );
    if let Some(fixed) = ensure_readability(fill, text_rgb, target) {
        issue = issue.with_suggestion(format!(
            "Shift the {} mode value to {fixed} to reach {target:.1}:1 with {text} text",
            mode.id()
        ));
    }
    issues.push(issue);
}

/// Contrast of a foreground role drawn on a background role.
fn check_pair(
    policy: &ReviewPolicy,
    foreground: (&str, &str),
    background: (&str, &str),
    mode: Mode,
    issues: &mut Vec<Issue>,
) {
    let (fg_label, fg_hex) = foreground;
    let (bg_label, bg_hex) = background;
    let (Some(fg), Some(bg)) = (
        parse_or_flag(fg_label, fg_hex, issues),
        parse_or_flag(bg_label, bg_hex, issues),
    ) else {
        return;
    };
    let ratio = contrast_ratio_rgb(fg, bg);
    let Some(severity) = policy.classify_contrast(ratio) else {
        return;
    };

    let target = match severity {
        Severity::Error => policy.aa_threshold,
        _ => policy.aaa_threshold,
    };
    let mut issue = Issue::new(
        severity,
        IssueCategory::Contrast,
        format!(
            "{fg_label} ({fg_hex}) as text on {bg_label} ({bg_hex}) in {} mode has contrast {ratio:.2}:1, below {}",
            mode.id(),
            threshold_name(policy, severity)
        ),
    );
    if let Some(fixed) = ensure_readability(fg, bg, target) {
        issue = issue.with_suggestion(format!(
            "Use {fixed} for {fg_label} text on {bg_label} to reach {target:.1}:1"
        ));
    }
    issues.push(issue);
}

pub(super) fn contrast(theme: &Theme, policy: &ReviewPolicy, issues: &mut Vec<Issue>) {
    let colors = &theme.colors;
    for mode in Mode::ALL {
        for token in &colors.brand {
            let label = format!("Brand color \"{}\"", token.name);
            check_fill(policy, &label, mode, token.value.get(mode), issues);
        }
        for (role, value) in colors.semantic.iter() {
            let label = format!("Semantic color \"{}\"", role.name());
            check_fill(policy, &label, mode, value.get(mode), issues);
        }

        let background = colors.surface.get(SurfaceRole::Background).get(mode);
        for token in &colors.brand {
            let label = format!("Brand color \"{}\"", token.name);
            check_pair(
                policy,
                (&label, token.value.get(mode)),
                ("background", background),
                mode,
                issues,
            );
        }

        let weight = body_text_weight(mode);
        let Some(text) = colors.neutral.scale.get(weight) else {
            issues.push(Issue::new(
                Severity::Error,
                IssueCategory::Contrast,
                format!("Neutral scale has no {weight} step for {} mode body text", mode.id()),
            ));
            continue;
        };
        let text_label = format!("Body text (neutral-{weight})");
        for (role, value) in colors.surface.iter() {
            check_pair(
                policy,
                (&text_label, text),
                (role.name(), value.get(mode)),
                mode,
                issues,
            );
        }
    }
}

pub(super) fn consistency(theme: &Theme, issues: &mut Vec<Issue>) {
    let mut sizes: Vec<f64> = theme.typography.scale.iter().map(|step| step.size).collect();
    sizes.sort_by(f64::total_cmp);
    sizes.dedup();
    if sizes.len() < 2 {
        issues.push(
            Issue::new(
                Severity::Warning,
                IssueCategory::Consistency,
                format!("The type scale has {} distinct size(s); at least 2 are needed for hierarchy", sizes.len()),
            )
            .with_suggestion("Give headings and body text different sizes"),
        );
    }

    if let Some(index) = theme
        .spacing
        .scale
        .windows(2)
        .position(|pair| pair[0] > pair[1])
    {
        issues.push(
            Issue::new(
                Severity::Warning,
                IssueCategory::Consistency,
                format!(
                    "The spacing scale decreases at step {} ({} -> {})",
                    index + 1,
                    theme.spacing.scale[index],
                    theme.spacing.scale[index + 1]
                ),
            )
            .with_suggestion("Regenerate spacing from the base unit"),
        );
    }

    let resolved: Vec<(&str, u32)> = theme.radius.resolved().collect();
    let mut duplicates: Vec<String> = Vec::new();
    for (index, (name, px)) in resolved.iter().enumerate() {
        let first = resolved.iter().position(|(_, other)| other == px);
        if first != Some(index) {
            let (first_name, _) = resolved[first.unwrap_or(index)];
            duplicates.push(format!("{name} = {first_name} ({px}px)"));
        }
    }
    if !duplicates.is_empty() {
        issues.push(
            Issue::new(
                Severity::Warning,
                IssueCategory::Consistency,
                format!("The radius scale repeats sizes: {}", duplicates.join(", ")),
            )
            .with_suggestion("Raise the radius base or remove redundant steps"),
        );
    }

    let mut weights: Vec<u16> = theme.typography.weights.iter().map(|w| w.value).collect();
    weights.sort_unstable();
    weights.dedup();
    if weights.len() < 2 {
        issues.push(
            Issue::new(
                Severity::Warning,
                IssueCategory::Consistency,
                format!("Only {} font weight(s) defined", weights.len()),
            )
            .with_suggestion("Add at least a regular and a bold weight"),
        );
    }

    let brand = &theme.colors.brand;
    for (index, token) in brand.iter().enumerate() {
        if brand[..index].iter().any(|other| other.name == token.name) {
            issues.push(Issue::new(
                Severity::Warning,
                IssueCategory::Consistency,
                format!("Brand color name \"{}\" is used more than once", token.name),
            ));
        }
    }
}

fn same_color(a: &str, b: &str) -> bool {
    match (color::normalize_hex(a), color::normalize_hex(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

pub(super) fn completeness(theme: &Theme, issues: &mut Vec<Issue>) {
    let info = &theme.colors.semantic.info;
    if let Some(token) = theme.colors.brand.iter().find(|token| {
        Mode::ALL
            .into_iter()
            .any(|mode| same_color(token.value.get(mode), info.get(mode)))
    }) {
        issues.push(
            Issue::new(
                Severity::Info,
                IssueCategory::Completeness,
                format!(
                    "The info semantic color matches brand color \"{}\"; informational messages will read as brand accents",
                    token.name
                ),
            )
            .with_suggestion("Pick a distinct hue for info"),
        );
    }

    if theme.colors.brand.len() == 1 {
        issues.push(
            Issue::new(
                Severity::Info,
                IssueCategory::Completeness,
                "Only one brand color is defined",
            )
            .with_suggestion("Add a secondary accent color"),
        );
    }

    if theme.shadows.iter().all(|shadow| shadow.is_none()) {
        issues.push(Issue::new(
            Severity::Info,
            IssueCategory::Completeness,
            "No shadow tokens besides \"none\" are defined",
        ));
    }

    if theme.animations.durations.is_empty() {
        issues.push(Issue::new(
            Severity::Info,
            IssueCategory::Completeness,
            "No motion durations are defined",
        ));
    }
    if theme.animations.easings.is_empty() {
        issues.push(Issue::new(
            Severity::Info,
            IssueCategory::Completeness,
            "No easing curves are defined",
        ));
    }
}
