use anyhow::{Context, Result};
use catalog_url::{Config, RequestPathInfo};

use crate::LinkKind;

pub fn execute(config: &Config, kind: LinkKind, template: Option<&str>, url: &str) -> Result<()> {
    let provider = super::provider(config, kind, template)?;
    let request = RequestPathInfo::from_url(url);
    tracing::debug!(?request, "split request path");

    let json = match kind {
        LinkKind::Product => serde_json::to_string_pretty(&provider.parse_product(Some(&request))),
        LinkKind::Category => serde_json::to_string_pretty(&provider.parse_category(Some(&request))),
    }
    .context("Failed to serialize parsed parameters")?;

    println!("{}", json);
    Ok(())
}
