// File: src/provider.rs
// Purpose: Configured facade over the product and category templates

use crate::config::UrlConfig;
use crate::error::UrlError;
use crate::params::{CategoryParams, ProductParams, CATEGORY_URL_KEY, CATEGORY_URL_PATH};
use crate::path::{placeholder, RequestPathInfo};
use crate::registry::TemplateRegistry;
use crate::template::{CategoryTemplate, PathTemplate, ProductTemplate};

/// Renders and parses catalog links with the configured templates
///
/// Templates are resolved once at construction; the provider is immutable
/// afterwards and can be shared between threads.
///
/// # Examples
///
/// ```
/// use catalog_url::{ProductParams, TemplateRegistry, UrlConfig, UrlProvider};
///
/// let config = UrlConfig {
///     product_page: Some("/content/shop/product".to_string()),
///     ..UrlConfig::default()
/// };
/// let provider = UrlProvider::new(&config, &TemplateRegistry::builtin()).unwrap();
///
/// let url = provider.product_url(&ProductParams::new().with_url_key("shirt"));
/// assert_eq!(url, "/content/shop/product.html/shirt.html");
/// ```
#[derive(Clone)]
pub struct UrlProvider {
    product: ProductTemplate,
    category: CategoryTemplate,
    context_aware: bool,
    product_page: Option<String>,
    category_page: Option<String>,
}

impl UrlProvider {
    /// Resolves the configured templates from the registry
    pub fn new(config: &UrlConfig, registry: &TemplateRegistry) -> Result<Self, UrlError> {
        let product = registry.product_template(&config.product_page_url_format)?;
        let category = registry.category_template(&config.category_page_url_format)?;
        tracing::debug!(
            product = product.name(),
            category = category.name(),
            context_aware = config.context_aware_product_urls,
            "resolved url templates"
        );

        Ok(Self {
            product,
            category,
            context_aware: config.context_aware_product_urls,
            product_page: config.product_page.clone(),
            category_page: config.category_page.clone(),
        })
    }

    /// Configured product template
    pub fn product_template(&self) -> &ProductTemplate {
        &self.product
    }

    /// Configured category template
    pub fn category_template(&self) -> &CategoryTemplate {
        &self.category
    }

    /// Renders a product link
    pub fn product_url(&self, params: &ProductParams) -> String {
        self.product.format(&self.prepare_product(params))
    }

    /// Renders a category link
    pub fn category_url(&self, params: &CategoryParams) -> String {
        self.category.format(&self.prepare_category(params))
    }

    /// Renders a product link from the parameters a request could carry
    pub fn canonical_product_url(&self, params: &ProductParams) -> String {
        let retained = self.product.retain_parsable_parameters(&self.prepare_product(params));
        self.product.format(&retained)
    }

    /// Renders a category link from the parameters a request could carry
    pub fn canonical_category_url(&self, params: &CategoryParams) -> String {
        let retained = self.category.retain_parsable_parameters(&self.prepare_category(params));
        self.category.format(&retained)
    }

    /// Recovers product parameters from a request
    pub fn parse_product(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        self.product.parse(request)
    }

    /// Recovers category parameters from a request
    pub fn parse_category(&self, request: Option<&RequestPathInfo>) -> CategoryParams {
        self.category.parse(request)
    }

    /// Fills the default page and drops the category context unless it is used
    fn prepare_product(&self, params: &ProductParams) -> ProductParams {
        let mut prepared = params.clone();
        if prepared.page.is_none() {
            prepared.page = self.product_page.clone();
        }
        if !self.context_aware && !renders_category(&*self.product) {
            prepared.category_url_params = CategoryParams::default();
        }
        prepared
    }

    fn prepare_category(&self, params: &CategoryParams) -> CategoryParams {
        let mut prepared = params.clone();
        if prepared.page.is_none() {
            prepared.page = self.category_page.clone();
        }
        prepared
    }
}

/// True when the shape renders a category segment of its own
fn renders_category(template: &dyn PathTemplate<Params = ProductParams>) -> bool {
    let pattern = template.pattern();
    pattern.contains(&placeholder(CATEGORY_URL_KEY)) || pattern.contains(&placeholder(CATEGORY_URL_PATH))
}
