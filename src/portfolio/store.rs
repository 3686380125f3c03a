use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::portfolio::Portfolio;

/// JSON file holding the user's portfolio between CLI invocations.
pub struct PortfolioStore {
    path: PathBuf,
}

impl PortfolioStore {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("failed creating portfolio directory: {}", parent.display())
                })?;
            }
        }
        Ok(Self {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Portfolio> {
        if !self.path.exists() {
            debug!("no portfolio at {}, starting empty", self.path.display());
            return Ok(Portfolio::default());
        }
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading portfolio: {}", self.path.display()))?;
        if data.trim().is_empty() {
            return Ok(Portfolio::default());
        }
        serde_json::from_str(&data)
            .with_context(|| format!("failed parsing portfolio JSON: {}", self.path.display()))
    }

    pub fn save(&self, portfolio: &Portfolio) -> Result<()> {
        let data = serde_json::to_string_pretty(portfolio)?;
        fs::write(&self.path, data)
            .with_context(|| format!("failed writing portfolio: {}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::PortfolioStore;
    use crate::catalog::credit_card;
    use crate::portfolio::Portfolio;

    fn scratch_dir(test: &str) -> PathBuf {
        std::env::temp_dir().join(format!("award-oracle-{}-{test}", std::process::id()))
    }

    #[test]
    fn missing_file_loads_empty_portfolio() {
        let dir = scratch_dir("missing");
        let store = PortfolioStore::open(&dir.join("portfolio.json")).unwrap();
        assert!(store.load().unwrap().is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn persists_portfolio_between_opens() {
        let dir = scratch_dir("persist");
        let path = dir.join("portfolio.json");
        let store = PortfolioStore::open(&path).unwrap();
        let mut portfolio = Portfolio::default();
        portfolio.add_card(credit_card("3").unwrap());
        portfolio.set_card_points("3", 55_000);
        store.save(&portfolio).unwrap();

        let reopened = PortfolioStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap(), portfolio);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn saved_items_survive_a_reload() {
        let dir = scratch_dir("saved");
        let store = PortfolioStore::open(&dir.join("portfolio.json")).unwrap();
        let mut portfolio = store.load().unwrap();
        portfolio.toggle_saved_flight("1").unwrap();
        portfolio.toggle_saved_card("7").unwrap();
        portfolio.toggle_saved_program("delta-skymiles").unwrap();
        store.save(&portfolio).unwrap();

        let mut loaded = store.load().unwrap();
        assert_eq!(loaded.saved_flights, vec!["1".to_string()]);
        assert_eq!(loaded.saved_cards, vec!["7".to_string()]);
        assert_eq!(loaded.saved_programs, vec!["delta-skymiles".to_string()]);

        loaded.toggle_saved_flight("1").unwrap();
        store.save(&loaded).unwrap();
        let cleared = store.load().unwrap();
        assert!(cleared.saved_flights.is_empty());
        assert_eq!(cleared.saved_cards.len(), 1);
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn older_files_without_saved_lists_still_load() {
        let dir = scratch_dir("legacy");
        let path = dir.join("portfolio.json");
        let store = PortfolioStore::open(&path).unwrap();
        fs::write(&path, r#"{ "cards": [], "programs": [] }"#).unwrap();
        let loaded = store.load().unwrap();
        assert!(loaded.saved_cards.is_empty());
        assert!(loaded.saved_programs.is_empty());
        fs::remove_dir_all(&dir).unwrap();
    }
}
