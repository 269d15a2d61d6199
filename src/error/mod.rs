use crate::config::ConfigError;
use crate::state::StoreError;
use thiserror::Error;

pub type TokenResult<T> = std::result::Result<T, TokenError>;
pub type AppResult<T> = std::result::Result<T, AppError>;

/// Failures raised by color math, theme validation and the export generators.
///
/// Out-of-range edits are not represented here: the edit layer clamps them.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid color format: {value:?} (expected #RGB or #RRGGBB)")]
    InvalidColorFormat { value: String },
    #[error("malformed theme: {field}")]
    MalformedTheme { field: String },
    #[error("failed to serialize tokens")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to format output")]
    Format(#[from] std::fmt::Error),
}

impl TokenError {
    pub(crate) fn invalid_color(value: &str) -> Self {
        Self::InvalidColorFormat {
            value: value.to_string(),
        }
    }

    pub(crate) fn malformed(field: impl Into<String>) -> Self {
        Self::MalformedTheme {
            field: field.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Token(#[from] TokenError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
