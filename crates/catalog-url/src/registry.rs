// File: src/registry.rs
// Purpose: Maps configured template identifiers to template instances

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::error::{TemplateKind, UrlError};
use crate::params::{CategoryParams, ProductParams};
use crate::template::{
    CategoryPageWithUrlKey, CategoryPageWithUrlPath, CategoryTemplate, PathTemplate, PatternTemplate,
    ProductPageWithCategoryAndUrlKey, ProductPageWithSku, ProductPageWithSkuAndUrlKey,
    ProductPageWithSkuAndUrlPath, ProductPageWithUrlKey, ProductPageWithUrlPath, ProductTemplate,
};

/// Marker that turns an unknown identifier into a pattern template
const PATTERN_MARKER: &str = "{{";

/// Registry of product and category templates
///
/// Populated once (usually from `builtin()`), then only read. Every template
/// is reachable by its name and by its pattern string.
///
/// # Examples
///
/// ```
/// use catalog_url::{PathTemplate, ProductParams, TemplateRegistry};
///
/// let registry = TemplateRegistry::builtin();
/// let template = registry.product_template("ProductPageWithSku").unwrap();
///
/// let params = ProductParams::new().with_page("/p").with_sku("abc");
/// assert_eq!(template.format(&params), "/p.html/abc.html");
/// ```
#[derive(Clone)]
pub struct TemplateRegistry {
    products: BTreeMap<String, ProductTemplate>,
    categories: BTreeMap<String, CategoryTemplate>,
}

impl TemplateRegistry {
    /// Creates a registry without any template
    pub fn empty() -> Self {
        Self {
            products: BTreeMap::new(),
            categories: BTreeMap::new(),
        }
    }

    /// Creates a registry holding every built-in shape
    pub fn builtin() -> Self {
        let mut registry = Self::empty();

        registry.register_product(Arc::new(ProductPageWithSku));
        registry.register_product(Arc::new(ProductPageWithUrlKey));
        registry.register_product(Arc::new(ProductPageWithSkuAndUrlKey));
        registry.register_product(Arc::new(ProductPageWithUrlPath));
        registry.register_product(Arc::new(ProductPageWithSkuAndUrlPath));
        registry.register_product(Arc::new(ProductPageWithCategoryAndUrlKey));

        registry.register_category(Arc::new(CategoryPageWithUrlPath));
        registry.register_category(Arc::new(CategoryPageWithUrlKey));

        registry
    }

    /// Registers a product template under its name and pattern
    pub fn register_product(&mut self, template: ProductTemplate) {
        self.products.insert(template.pattern().to_string(), template.clone());
        self.products.insert(template.name().to_string(), template);
    }

    /// Registers a category template under its name and pattern
    pub fn register_category(&mut self, template: CategoryTemplate) {
        self.categories.insert(template.pattern().to_string(), template.clone());
        self.categories.insert(template.name().to_string(), template);
    }

    /// Looks up a product template by name or pattern
    ///
    /// Unknown identifiers that look like a pattern are compiled on the fly.
    pub fn product_template(&self, id: &str) -> Result<ProductTemplate, UrlError> {
        lookup(&self.products, id, TemplateKind::Product, |pattern| {
            let template: ProductTemplate = Arc::new(PatternTemplate::<ProductParams>::new(pattern)?);
            Ok(template)
        })
    }

    /// Looks up a category template by name or pattern
    ///
    /// Unknown identifiers that look like a pattern are compiled on the fly.
    pub fn category_template(&self, id: &str) -> Result<CategoryTemplate, UrlError> {
        lookup(&self.categories, id, TemplateKind::Category, |pattern| {
            let template: CategoryTemplate = Arc::new(PatternTemplate::<CategoryParams>::new(pattern)?);
            Ok(template)
        })
    }

    /// Product templates as sorted (name, pattern) pairs, one per template
    pub fn product_names(&self) -> Vec<(&str, &str)> {
        listing(&self.products)
    }

    /// Category templates as sorted (name, pattern) pairs, one per template
    pub fn category_names(&self) -> Vec<(&str, &str)> {
        listing(&self.categories)
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lookup<P: 'static>(
    templates: &BTreeMap<String, Arc<dyn PathTemplate<Params = P>>>,
    id: &str,
    kind: TemplateKind,
    compile: impl FnOnce(&str) -> Result<Arc<dyn PathTemplate<Params = P>>, UrlError>,
) -> Result<Arc<dyn PathTemplate<Params = P>>, UrlError> {
    let id = id.trim();
    if let Some(template) = templates.get(id) {
        return Ok(Arc::clone(template));
    }
    if id.contains(PATTERN_MARKER) {
        tracing::debug!(%kind, pattern = id, "compiling url pattern template");
        return compile(id);
    }
    Err(UrlError::UnknownTemplate {
        kind,
        name: id.to_string(),
    })
}

fn listing<P: 'static>(templates: &BTreeMap<String, Arc<dyn PathTemplate<Params = P>>>) -> Vec<(&str, &str)> {
    templates
        .iter()
        .filter(|(key, template)| key.as_str() == template.name())
        .map(|(_, template)| (template.name(), template.pattern()))
        .collect()
}
