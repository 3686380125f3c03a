use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::catalog::Cabin;
use crate::optimizer::recommendations::MAX_RECOMMENDATIONS;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub portfolio: PortfolioConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub optimizer: OptimizerConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioConfig {
    #[serde(default = "default_portfolio_path")]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_cabin")]
    pub default_cabin: Cabin,
    #[serde(default = "default_origin_filter")]
    pub origin_filter: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizerConfig {
    #[serde(default = "default_max_recommendations")]
    pub max_recommendations: usize,
    #[serde(default = "default_target_points")]
    pub default_target_points: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub portfolio_path: Option<String>,
    pub cabin: Option<String>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/award-oracle/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) -> Result<()> {
        if let Some(path) = overrides.portfolio_path {
            self.portfolio.path = path;
        }
        if let Some(cabin) = overrides.cabin {
            self.search.default_cabin = Cabin::from_str(&cabin)?;
        }
        Ok(())
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn resolved_portfolio_path(&self) -> PathBuf {
        expand_tilde(&self.portfolio.path)
    }

    /// Recommendation limit, never above what the generator produces.
    pub fn recommendation_limit(&self) -> usize {
        self.optimizer.max_recommendations.min(MAX_RECOMMENDATIONS)
    }

    pub fn default_template() -> String {
        let template = r#"[portfolio]
path = "~/.local/share/award-oracle/portfolio.json"

[search]
default_cabin = "business"
origin_filter = ["PHL", "EWR", "JFK", "LGA"]

[optimizer]
max_recommendations = 3
default_target_points = 170000

[server]
host = "127.0.0.1"
port = 3001
"#;
        template.to_string()
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            path: default_portfolio_path(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_cabin: default_cabin(),
            origin_filter: default_origin_filter(),
        }
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_recommendations: default_max_recommendations(),
            default_target_points: default_target_points(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_portfolio_path() -> String {
    "~/.local/share/award-oracle/portfolio.json".to_string()
}

fn default_cabin() -> Cabin {
    Cabin::Business
}

fn default_origin_filter() -> Vec<String> {
    vec![
        "PHL".to_string(),
        "EWR".to_string(),
        "JFK".to_string(),
        "LGA".to_string(),
    ]
}

fn default_max_recommendations() -> usize {
    MAX_RECOMMENDATIONS
}

fn default_target_points() -> u64 {
    170_000
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3001
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigOverrides};
    use crate::catalog::Cabin;

    #[test]
    fn template_parses_to_defaults() {
        let parsed: Config = toml::from_str(&Config::default_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(parsed.portfolio.path, defaults.portfolio.path);
        assert_eq!(parsed.search.default_cabin, Cabin::Business);
        assert_eq!(parsed.search.origin_filter, defaults.search.origin_filter);
        assert_eq!(parsed.optimizer.default_target_points, 170_000);
        assert_eq!(parsed.server.port, 3001);
    }

    #[test]
    fn partial_file_keeps_section_defaults() {
        let parsed: Config = toml::from_str("[search]\ndefault_cabin = \"economy\"\n").unwrap();
        assert_eq!(parsed.search.default_cabin, Cabin::Economy);
        assert_eq!(parsed.search.origin_filter.len(), 4);
        assert_eq!(parsed.server.host, "127.0.0.1");
    }

    #[test]
    fn overrides_replace_portfolio_and_cabin() {
        let mut config = Config::default();
        config
            .apply_overrides(ConfigOverrides {
                portfolio_path: Some("/tmp/p.json".to_string()),
                cabin: Some("economy".to_string()),
            })
            .unwrap();
        assert_eq!(config.portfolio.path, "/tmp/p.json");
        assert_eq!(config.search.default_cabin, Cabin::Economy);

        let bad = config.apply_overrides(ConfigOverrides {
            portfolio_path: None,
            cabin: Some("first".to_string()),
        });
        assert!(bad.is_err());
    }

    #[test]
    fn recommendation_limit_is_capped() {
        let mut config = Config::default();
        config.optimizer.max_recommendations = 10;
        assert_eq!(config.recommendation_limit(), 3);
        config.optimizer.max_recommendations = 1;
        assert_eq!(config.recommendation_limit(), 1);
    }
}
