// File: src/config.rs
// Purpose: Configuration parsing from catalog-url.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::template::{CategoryPageWithUrlPath, ProductPageWithUrlKey};

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "catalog-url.toml";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub urls: UrlConfig,
}

/// Url template selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlConfig {
    /// Product template name or pattern (default: "ProductPageWithUrlKey")
    #[serde(default = "default_product_format")]
    pub product_page_url_format: String,

    /// Category template name or pattern (default: "CategoryPageWithUrlPath")
    #[serde(default = "default_category_format")]
    pub category_page_url_format: String,

    /// Whether product links keep the category they are rendered in (default: false)
    #[serde(default = "default_false")]
    pub context_aware_product_urls: bool,

    /// Page used for product links that carry no page
    #[serde(default)]
    pub product_page: Option<String>,

    /// Page used for category links that carry no page
    #[serde(default)]
    pub category_page: Option<String>,
}

// Default values
fn default_product_format() -> String {
    ProductPageWithUrlKey::NAME.to_string()
}

fn default_category_format() -> String {
    CategoryPageWithUrlPath::NAME.to_string()
}

fn default_false() -> bool {
    false
}

impl Default for UrlConfig {
    fn default() -> Self {
        Self {
            product_page_url_format: default_product_format(),
            category_page_url_format: default_category_format(),
            context_aware_product_urls: false,
            product_page: None,
            category_page: None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist or is empty, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./catalog-url.toml)
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_CONFIG_FILE)
    }
}
