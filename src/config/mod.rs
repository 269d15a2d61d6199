use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::TokenError;
use crate::export::ExportFormat;
use crate::review::ReviewPolicy;
use crate::tokens::Theme;

const APP_DIR: &str = "tokenkit";
const APP_CONFIG_FILE: &str = "config.json";

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing HOME environment variable")]
    MissingHomeDirectory,
    #[error("failed to read {path}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to serialize theme")]
    Serialize(#[source] serde_json::Error),
    #[error("invalid theme in {path}")]
    InvalidTheme { path: PathBuf, source: TokenError },
}

/// Where exports go when the command line does not say.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExportDefaults {
    pub formats: Vec<ExportFormat>,
    pub out_dir: Option<PathBuf>,
}

impl Default for ExportDefaults {
    fn default() -> Self {
        Self {
            formats: ExportFormat::ALL.to_vec(),
            out_dir: None,
        }
    }
}

/// Settings from `config.json`. Every field is optional in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub review: ReviewPolicy,
    pub export: ExportDefaults,
}

/// Lenient load: a missing or broken file yields defaults.
pub fn load_config() -> AppConfig {
    let (xdg_config_home, home) = config_env_dirs();
    load_config_with(xdg_config_home.as_deref(), home.as_deref())
}

pub fn load_config_with(xdg_config_home: Option<&Path>, home: Option<&Path>) -> AppConfig {
    load_config_strict_with(xdg_config_home, home).unwrap_or_else(|err| {
        tracing::warn!(%err, "failed to load config.json; using defaults");
        AppConfig::default()
    })
}

pub fn load_config_strict() -> ConfigResult<AppConfig> {
    let (xdg_config_home, home) = config_env_dirs();
    load_config_strict_with(xdg_config_home.as_deref(), home.as_deref())
}

pub fn load_config_strict_with(
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<AppConfig> {
    let path = app_config_path(APP_DIR, APP_CONFIG_FILE, xdg_config_home, home)?;
    if !path.exists() {
        tracing::debug!(?path, "no config file; using defaults");
        return Ok(AppConfig::default());
    }
    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse { path, source })
}

/// Read a theme document and check it before handing it out.
pub fn load_theme(path: &Path) -> ConfigResult<Theme> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let theme: Theme = serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    theme.validate().map_err(|source| ConfigError::InvalidTheme {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(?path, name = %theme.name, "loaded theme");
    Ok(theme)
}

pub fn save_theme(path: &Path, theme: &Theme) -> ConfigResult<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;
    }
    let mut serialized = serde_json::to_string_pretty(theme).map_err(ConfigError::Serialize)?;
    serialized.push('\n');
    fs::write(path, serialized).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn config_env_dirs() -> (Option<PathBuf>, Option<PathBuf>) {
    (
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

pub(crate) fn app_config_path(
    app_dir: &str,
    file_name: &str,
    xdg_config_home: Option<&Path>,
    home: Option<&Path>,
) -> ConfigResult<PathBuf> {
    let mut path = config_root(xdg_config_home, home)?;
    path.push(app_dir);
    path.push(file_name);
    Ok(path)
}

fn config_root(xdg_config_home: Option<&Path>, home: Option<&Path>) -> ConfigResult<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|path| !path.as_os_str().is_empty()) {
        return Ok(xdg.to_path_buf());
    }

    let home = home.ok_or(ConfigError::MissingHomeDirectory)?;
    Ok(home.join(".config"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_root() -> PathBuf {
        let mut path = std::env::temp_dir();
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::SystemTime::UNIX_EPOCH)
            .map_or(0, |d| d.as_nanos());
        let pid = std::process::id();
        path.push(format!("tokenkit-config-{pid}-{nanos}"));
        path
    }

    fn with_temp_root<F: FnOnce(&Path)>(f: F) {
        let root = fixture_root();
        fs::create_dir_all(&root).unwrap();
        f(&root);
        let _ = fs::remove_dir_all(&root);
    }

    fn write_config(root: &Path, contents: &str) {
        let path = app_config_path(APP_DIR, APP_CONFIG_FILE, Some(root), None).unwrap();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn app_config_path_prefers_xdg_config_home() {
        let path = app_config_path(
            "tokenkit",
            "config.json",
            Some(Path::new("/tmp/config-root")),
            Some(Path::new("/tmp/home")),
        )
        .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/config-root/tokenkit/config.json"));
    }

    #[test]
    fn app_config_path_falls_back_to_home_dot_config() {
        let path = app_config_path("tokenkit", "config.json", Some(Path::new("")), Some(Path::new("/tmp/home")))
            .expect("path should resolve");

        assert_eq!(path, PathBuf::from("/tmp/home/.config/tokenkit/config.json"));
    }

    #[test]
    fn app_config_path_errors_when_home_missing_and_xdg_unset() {
        let error = app_config_path("tokenkit", "config.json", None, None).unwrap_err();
        assert!(matches!(error, ConfigError::MissingHomeDirectory));
    }

    #[test]
    fn missing_config_file_yields_defaults() {
        with_temp_root(|root| {
            let config = load_config_strict_with(Some(root), None).unwrap();
            assert_eq!(config, AppConfig::default());
            assert_eq!(config.export.formats.len(), ExportFormat::ALL.len());
        });
    }

    #[test]
    fn partial_config_keeps_remaining_defaults() {
        with_temp_root(|root| {
            write_config(
                root,
                r#"{ "review": { "aa_threshold": 3.0 }, "export": { "formats": ["css", "tokens-studio"] } }"#,
            );
            let config = load_config_strict_with(Some(root), None).unwrap();
            assert_eq!(config.review.aa_threshold, 3.0);
            assert_eq!(config.review.aaa_threshold, ReviewPolicy::default().aaa_threshold);
            assert_eq!(config.export.formats, vec![ExportFormat::Css, ExportFormat::FigmaTokensStudio]);
            assert_eq!(config.export.out_dir, None);
        });
    }

    #[test]
    fn broken_config_is_strict_error_but_lenient_default() {
        with_temp_root(|root| {
            write_config(root, "{ not json");
            let err = load_config_strict_with(Some(root), None).unwrap_err();
            assert!(matches!(err, ConfigError::Parse { .. }));
            assert_eq!(load_config_with(Some(root), None), AppConfig::default());
        });
    }

    #[test]
    fn theme_save_and_load_round_trip() {
        with_temp_root(|root| {
            let path = root.join("themes").join("ocean.json");
            let theme = Theme::from_base("Ocean", "#0ea5e9", "#64748b").unwrap();
            save_theme(&path, &theme).unwrap();
            let loaded = load_theme(&path).unwrap();
            assert_eq!(loaded, theme);
        });
    }

    #[test]
    fn load_theme_rejects_invalid_documents() {
        with_temp_root(|root| {
            let path = root.join("broken.json");
            let mut theme = Theme::default();
            theme.colors.brand.clear();
            save_theme(&path, &theme).unwrap();
            let err = load_theme(&path).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidTheme { .. }));

            let missing = root.join("missing.json");
            assert!(matches!(load_theme(&missing), Err(ConfigError::Read { .. })));
        });
    }
}
