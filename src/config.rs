//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default back-office submission webhook
const DEFAULT_WEBHOOK_URL: &str =
    "https://n8niass.cocinandosonrisas.co/webhook/factura-electronic-Bandidos";

/// Tax-authority acquirer lookup webhook; not configurable
pub const CONSULT_WEBHOOK_URL: &str =
    "https://n8niass.cocinandosonrisas.co/webhook/consultar_adquiriente_dian";

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Submission webhook URL override
    pub webhook_url: Option<String>,
}

#[allow(dead_code)]
impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("co", "cocinandosonrisas", "factura-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Resolve the submission webhook URL. The `FACTURA_WEBHOOK_URL`
    /// environment variable wins over the config file, which wins over the
    /// built-in default.
    pub fn submission_url(&self) -> String {
        if let Ok(url) = std::env::var("FACTURA_WEBHOOK_URL") {
            let url = url.trim();
            if !url.is_empty() {
                return url.to_string();
            }
        }

        self.webhook_url
            .as_deref()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_WEBHOOK_URL)
            .to_string()
    }
}
