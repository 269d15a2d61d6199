//! Design-token pipeline: derive a theme from a few base colors, audit it
//! for contrast and consistency problems, and project it into CSS,
//! Tailwind, W3C JSON, React Native and Figma formats.

pub mod color;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod review;
pub mod state;
pub mod tokens;

pub use error::{AppError, AppResult, TokenError, TokenResult};
pub use export::{export, ExportFormat};
pub use review::{review_theme, review_theme_with, ReviewPolicy, ReviewResult};
pub use state::ThemeStore;
pub use tokens::Theme;
