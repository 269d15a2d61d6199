//! Accessibility and consistency review of a [`Theme`].
//!
//! The battery runs in a fixed order (contrast, consistency, completeness)
//! and each issue deducts the policy weight of its severity from 100.

mod checks;

use serde::{Deserialize, Serialize};

use crate::error::TokenResult;
use crate::tokens::Theme;

pub const MAX_SCORE: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueCategory {
    Contrast,
    Consistency,
    Completeness,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Issue {
    pub fn new(severity: Severity, category: IssueCategory, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            suggestion: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Thresholds and deductions. The defaults are WCAG AA/AAA for normal text
/// and 15/5/0 points per error/warning/info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewPolicy {
    pub aa_threshold: f64,
    pub aaa_threshold: f64,
    pub error_weight: u8,
    pub warning_weight: u8,
    pub info_weight: u8,
}

impl Default for ReviewPolicy {
    fn default() -> Self {
        Self {
            aa_threshold: 4.5,
            aaa_threshold: 7.0,
            error_weight: 15,
            warning_weight: 5,
            info_weight: 0,
        }
    }
}

impl ReviewPolicy {
    pub const fn weight(&self, severity: Severity) -> u8 {
        match severity {
            Severity::Error => self.error_weight,
            Severity::Warning => self.warning_weight,
            Severity::Info => self.info_weight,
        }
    }

    /// `None` when `ratio` meets the AAA threshold.
    pub fn classify_contrast(&self, ratio: f64) -> Option<Severity> {
        if ratio < self.aa_threshold {
            Some(Severity::Error)
        } else if ratio < self.aaa_threshold {
            Some(Severity::Warning)
        } else {
            None
        }
    }

    pub fn score(&self, issues: &[Issue]) -> u8 {
        issues.iter().fold(MAX_SCORE, |score, issue| {
            score.saturating_sub(self.weight(issue.severity))
        })
    }
}

/// Outcome of one review run. Read-only once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewResult {
    score: u8,
    issues: Vec<Issue>,
}

impl ReviewResult {
    pub const fn score(&self) -> u8 {
        self.score
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.by_severity(Severity::Warning)
    }

    fn by_severity(&self, severity: Severity) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(move |issue| issue.severity == severity)
    }

    pub fn summary(&self) -> String {
        format!(
            "score {}/{MAX_SCORE}: {} error(s), {} warning(s), {} info",
            self.score,
            self.count(Severity::Error),
            self.count(Severity::Warning),
            self.count(Severity::Info)
        )
    }
}

pub fn review_theme(theme: &Theme) -> ReviewResult {
    review_theme_with(theme, &ReviewPolicy::default())
}

pub fn review_theme_with(theme: &Theme, policy: &ReviewPolicy) -> ReviewResult {
    let mut issues = Vec::new();
    checks::contrast(theme, policy, &mut issues);
    checks::consistency(theme, &mut issues);
    checks::completeness(theme, &mut issues);

    let result = ReviewResult {
        score: policy.score(&issues),
        issues,
    };
    tracing::debug!(theme = %theme.name, summary = %result.summary(), "reviewed theme");
    result
}

/// Validate first, then review; a malformed theme yields `MalformedTheme`.
pub fn try_review_theme(theme: &Theme, policy: &ReviewPolicy) -> TokenResult<ReviewResult> {
    theme.validate()?;
    Ok(review_theme_with(theme, policy))
}
