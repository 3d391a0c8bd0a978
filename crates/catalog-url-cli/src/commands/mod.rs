pub mod format;
pub mod parse;
pub mod select;
pub mod templates;

use anyhow::{Context, Result};
use catalog_url::{Config, TemplateRegistry, UrlProvider};

use crate::LinkKind;

/// Builds a provider from the configuration, optionally overriding the
/// template of one link kind
fn provider(config: &Config, kind: LinkKind, template: Option<&str>) -> Result<UrlProvider> {
    let mut urls = config.urls.clone();
    if let Some(template) = template {
        match kind {
            LinkKind::Product => urls.product_page_url_format = template.to_string(),
            LinkKind::Category => urls.category_page_url_format = template.to_string(),
        }
    }

    UrlProvider::new(&urls, &TemplateRegistry::builtin()).context("Failed to resolve url templates")
}
