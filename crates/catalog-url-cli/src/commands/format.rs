use anyhow::Result;
use catalog_url::{CategoryParams, Config, ProductParams};
use clap::Args;
use colored::Colorize;

use crate::LinkKind;

/// Link parameters accepted by `format`
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Base content path of the linking page
    #[arg(long)]
    page: Option<String>,

    #[arg(long)]
    sku: Option<String>,

    #[arg(long)]
    uid: Option<String>,

    #[arg(long)]
    url_key: Option<String>,

    #[arg(long)]
    url_path: Option<String>,

    #[arg(long)]
    variant_sku: Option<String>,

    #[arg(long)]
    variant_url_key: Option<String>,

    /// Url rewrite of the product (repeatable)
    #[arg(long = "rewrite")]
    rewrites: Vec<String>,

    /// Url key of the category the link is rendered in
    #[arg(long)]
    category_url_key: Option<String>,

    /// Url path of the category the link is rendered in
    #[arg(long)]
    category_url_path: Option<String>,
}

impl ParamArgs {
    fn category_context(&self) -> CategoryParams {
        CategoryParams {
            url_key: self.category_url_key.clone(),
            url_path: self.category_url_path.clone(),
            ..CategoryParams::default()
        }
    }

    fn product(&self) -> ProductParams {
        ProductParams {
            page: self.page.clone(),
            sku: self.sku.clone(),
            url_key: self.url_key.clone(),
            url_path: self.url_path.clone(),
            variant_sku: self.variant_sku.clone(),
            variant_url_key: self.variant_url_key.clone(),
            url_rewrites: self.rewrites.clone(),
            category_url_params: self.category_context(),
        }
    }

    fn category(&self) -> CategoryParams {
        CategoryParams {
            page: self.page.clone(),
            uid: self.uid.clone(),
            url_key: self.url_key.clone(),
            url_path: self.url_path.clone(),
        }
    }
}

pub fn execute(config: &Config, kind: LinkKind, template: Option<&str>, params: &ParamArgs) -> Result<()> {
    let provider = super::provider(config, kind, template)?;

    let (name, url) = match kind {
        LinkKind::Product => (provider.product_template().name(), provider.product_url(&params.product())),
        LinkKind::Category => (
            provider.category_template().name(),
            provider.category_url(&params.category()),
        ),
    };

    tracing::info!(template = name, "formatted link");
    println!("{}", url);

    if url.contains("{{") {
        eprintln!("{}", "⚠ Some placeholders could not be resolved".yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_params_from_args() {
        let args = ParamArgs {
            sku: Some("abc".to_string()),
            rewrites: vec!["men/shirt".to_string()],
            category_url_key: Some("men".to_string()),
            ..ParamArgs::default()
        };
        let params = args.product();
        assert_eq!(params.sku.as_deref(), Some("abc"));
        assert_eq!(params.url_rewrites, vec!["men/shirt".to_string()]);
        assert_eq!(params.category_url_params.url_key.as_deref(), Some("men"));
    }

    #[test]
    fn test_category_params_ignore_product_fields() {
        let args = ParamArgs {
            uid: Some("MTI=".to_string()),
            sku: Some("abc".to_string()),
            url_path: Some("men/tops".to_string()),
            ..ParamArgs::default()
        };
        assert_eq!(
            args.category(),
            CategoryParams::new().with_uid("MTI=").with_url_path("men/tops")
        );
    }
}
