//! Runtime settings
//!
//! Settings come from an optional TOML file; anything it leaves out keeps its
//! default. The file path is taken from `PIZZA_MENU_CONFIG`, falling back to
//! `config/menu.toml`.

use crate::cart::models::OrderTemplate;
use crate::error::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "PIZZA_MENU_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/menu.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// CSV source of the menu
    pub csv_path: PathBuf,
    /// Generated menu document
    pub json_path: PathBuf,
    /// Static front-end files; located at startup when unset
    pub assets_dir: Option<PathBuf>,
    pub http: HttpCfg,
    pub order: OrderCfg,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpCfg {
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OrderCfg {
    /// Phone number the order message is addressed to
    pub recipient: String,
    pub greeting: String,
    pub footer: String,
    pub currency: String,
}

impl OrderCfg {
    pub fn template(&self) -> OrderTemplate {
        OrderTemplate {
            greeting: self.greeting.clone(),
            footer: self.footer.clone(),
            currency: self.currency.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from("result.csv"),
            json_path: PathBuf::from("menuData.json"),
            assets_dir: None,
            http: HttpCfg::default(),
            order: OrderCfg::default(),
        }
    }
}

impl Default for HttpCfg {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

impl Default for OrderCfg {
    fn default() -> Self {
        let template = OrderTemplate::default();
        Self {
            recipient: "38970945499".to_string(),
            greeting: template.greeting,
            footer: template.footer,
            currency: template.currency,
        }
    }
}

impl Settings {
    /// Loads settings from the configured path, or defaults when no file exists.
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured assets directory, or the first of `./assets` and
    /// `../assets` that exists.
    pub fn assets_dir(&self) -> PathBuf {
        if let Some(dir) = &self.assets_dir {
            return dir.clone();
        }
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        locate_assets_directory(&current_dir)
    }
}

fn locate_assets_directory(current_dir: &Path) -> PathBuf {
    if current_dir.join("assets").exists() {
        return current_dir.join("assets");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("assets").exists() {
            return parent.join("assets");
        }
    }

    PathBuf::from("assets")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.csv_path, PathBuf::from("result.csv"));
        assert_eq!(settings.json_path, PathBuf::from("menuData.json"));
        assert_eq!(settings.http.port, 8000);
        assert_eq!(settings.order.recipient, "38970945499");
        assert_eq!(settings.order.currency, "ден");
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let settings = Settings::from_toml(
            r#"
            csv_path = "data/menu.csv"

            [http]
            port = 9090

            [order]
            recipient = "38970000000"
            greeting = "Hello"
            "#,
        )
        .unwrap();
        assert_eq!(settings.csv_path, PathBuf::from("data/menu.csv"));
        assert_eq!(settings.http.port, 9090);
        assert_eq!(settings.order.recipient, "38970000000");
        assert_eq!(settings.order.template().greeting, "Hello");
        assert_eq!(settings.order.currency, "ден");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(settings.http.port, 8000);
    }

    #[test]
    fn assets_located_next_to_or_above_cwd() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("bin");
        std::fs::create_dir_all(dir.path().join("assets")).unwrap();
        std::fs::create_dir_all(&nested).unwrap();
        assert_eq!(locate_assets_directory(&nested), dir.path().join("assets"));
        assert_eq!(locate_assets_directory(dir.path()), dir.path().join("assets"));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Settings::from_toml("http = 5").is_err());
    }
}
