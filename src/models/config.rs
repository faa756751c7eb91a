// src/models/config.rs

//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Where the catalog and course list are fetched from
    #[serde(default)]
    pub loader: LoaderConfig,

    /// Card rendering settings and user-facing strings
    #[serde(default)]
    pub render: RenderConfig,

    /// Course carousel behavior
    #[serde(default)]
    pub carousel: CarouselConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.loader.base.trim().is_empty() {
            return Err(AppError::validation("loader.base is empty"));
        }
        if self.loader.candidates.is_empty() {
            return Err(AppError::validation("loader.candidates is empty"));
        }
        if self.loader.candidates.iter().any(|c| c.trim().is_empty()) {
            return Err(AppError::validation("loader.candidates has a blank entry"));
        }
        if self.loader.user_agent.trim().is_empty() {
            return Err(AppError::validation("loader.user_agent is empty"));
        }
        if self.loader.timeout_secs == Some(0) {
            return Err(AppError::validation("loader.timeout_secs must be > 0"));
        }
        if self.carousel.scroll_step <= 0.0 {
            return Err(AppError::validation("carousel.scroll_step must be > 0"));
        }
        if self.carousel.edge_epsilon < 0.0 {
            return Err(AppError::validation("carousel.edge_epsilon must be >= 0"));
        }
        if self.carousel.card_width <= 0.0 {
            return Err(AppError::validation("carousel.card_width must be > 0"));
        }
        if self.carousel.viewport_width < 0.0 {
            return Err(AppError::validation("carousel.viewport_width must be >= 0"));
        }
        self.logging.level_filter()?;
        Ok(())
    }
}

/// Catalog source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Page location candidates are resolved against (URL or directory)
    #[serde(default = "defaults::base")]
    pub base: String,

    /// Catalog locations, tried in order
    #[serde(default = "defaults::candidates")]
    pub candidates: Vec<String>,

    /// Course list location for the carousel page
    #[serde(default = "defaults::courses")]
    pub courses: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; absent keeps the transport default
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            base: defaults::base(),
            candidates: defaults::candidates(),
            courses: defaults::courses(),
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Card rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory cover images are served from
    #[serde(default = "defaults::asset_base")]
    pub asset_base: String,

    #[serde(default = "defaults::link_label")]
    pub link_label: String,

    #[serde(default = "defaults::empty_message")]
    pub empty_message: String,

    /// `{count}` is replaced by the view length
    #[serde(default = "defaults::counter_label")]
    pub counter_label: String,

    #[serde(default)]
    pub messages: Messages,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            asset_base: defaults::asset_base(),
            link_label: defaults::link_label(),
            empty_message: defaults::empty_message(),
            counter_label: defaults::counter_label(),
            messages: Messages::default(),
        }
    }
}

impl RenderConfig {
    pub fn counter(&self, count: usize) -> String {
        self.counter_label.replace("{count}", &count.to_string())
    }
}

/// User-facing error strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default = "defaults::source_unavailable")]
    pub source_unavailable: String,

    #[serde(default = "defaults::parse_failure")]
    pub parse_failure: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            source_unavailable: defaults::source_unavailable(),
            parse_failure: defaults::parse_failure(),
        }
    }
}

/// Course carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Pixels scrolled per prev/next click
    #[serde(default = "defaults::scroll_step")]
    pub scroll_step: f64,

    /// Slack before the end of the strip counts as the end
    #[serde(default = "defaults::edge_epsilon")]
    pub edge_epsilon: f64,

    /// Width of one course card, used to lay out the strip
    #[serde(default = "defaults::card_width")]
    pub card_width: f64,

    /// Visible strip width; 0 means there is no scroll container
    #[serde(default = "defaults::viewport_width")]
    pub viewport_width: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            scroll_step: defaults::scroll_step(),
            edge_epsilon: defaults::edge_epsilon(),
            card_width: defaults::card_width(),
            viewport_width: defaults::viewport_width(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "defaults::level")]
    pub level: String,
}

impl LoggingConfig {
    /// `level` as a log filter (`off`, `error` ... `trace`).
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level.trim().parse().map_err(|_| {
            AppError::validation(format!("logging.level '{}' is not a log level", self.level))
        })
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::level(),
        }
    }
}

mod defaults {
    // Loader defaults
    pub fn base() -> String {
        ".".into()
    }
    pub fn candidates() -> Vec<String> {
        vec![
            "assets/js/contenido.json".into(),
            "/contenido.json".into(),
            "/data/contenido.json".into(),
            "../../contenido.json".into(),
            "../contenido.json".into(),
            "contenido.json".into(),
        ]
    }
    pub fn courses() -> String {
        "data/Cursos.json".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; biblioteca/0.1)".into()
    }

    // Render defaults
    pub fn asset_base() -> String {
        "assets/img/".into()
    }
    pub fn link_label() -> String {
        "Ver recurso".into()
    }
    pub fn empty_message() -> String {
        "No hay elementos en esta sección.".into()
    }
    pub fn counter_label() -> String {
        "Elementos: {count}".into()
    }
    pub fn source_unavailable() -> String {
        "Error al cargar el contenido. Verifica que contenido.json exista y que estés \
         sirviendo el proyecto por HTTP. Revisa la consola para más detalles."
            .into()
    }
    pub fn parse_failure() -> String {
        "Error al procesar contenido.json. Revisa la consola para más detalles.".into()
    }

    // Carousel defaults
    pub fn scroll_step() -> f64 {
        300.0
    }
    pub fn edge_epsilon() -> f64 {
        1.0
    }
    pub fn card_width() -> f64 {
        300.0
    }
    pub fn viewport_width() -> f64 {
        1200.0
    }

    pub fn level() -> String {
        "info".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn default_candidates_match_site_layout() {
        let config = Config::default();
        assert_eq!(config.loader.candidates.len(), 6);
        assert_eq!(config.loader.candidates[0], "assets/js/contenido.json");
        assert_eq!(config.loader.timeout_secs, None);
    }

    #[test]
    fn validate_rejects_empty_candidates() {
        let mut config = Config::default();
        config.loader.candidates.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.loader.timeout_secs = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [loader]
            base = "https://example.com/biblioteca/"
            timeout_secs = 5

            [carousel]
            scroll_step = 120.0
            "#,
        )
        .unwrap();
        assert_eq!(config.loader.base, "https://example.com/biblioteca/");
        assert_eq!(config.loader.timeout_secs, Some(5));
        assert_eq!(config.loader.candidates.len(), 6);
        assert_eq!(config.carousel.scroll_step, 120.0);
        assert_eq!(config.carousel.edge_epsilon, 1.0);
        assert_eq!(config.render.asset_base, "assets/img/");
    }

    #[test]
    fn logging_level_parses_case_insensitively() {
        let logging = LoggingConfig {
            level: " Debug ".into(),
        };
        assert_eq!(logging.level_filter().unwrap(), log::LevelFilter::Debug);
        assert_eq!(
            LoggingConfig::default().level_filter().unwrap(),
            log::LevelFilter::Info
        );
    }

    #[test]
    fn validate_rejects_unknown_logging_level() {
        let mut config = Config::default();
        config.logging.level = "loud".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn counter_label_substitutes_count() {
        assert_eq!(RenderConfig::default().counter(3), "Elementos: 3");
    }
}
