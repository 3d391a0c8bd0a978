/// Url templates: one immutable strategy per supported url shape
///
/// Every shape implements the same two-way contract:
/// - `format` renders parameters into a path ending in `.html`
/// - `parse` recovers parameters from an incoming request path
/// - `retain_parsable_parameters` projects parameters onto what `parse` can produce
///
/// All operations are pure functions of their arguments; templates hold no
/// per-call state and can be shared across threads.

use std::sync::Arc;

use crate::params::{CategoryParams, ProductParams};
use crate::path::{non_blank, placeholder, RequestPathInfo, FRAGMENT_SEPARATOR, HTML_EXTENSION};

pub mod category;
pub mod pattern;
pub mod product;

pub use category::{CategoryPageWithUrlKey, CategoryPageWithUrlPath};
pub use pattern::PatternTemplate;
pub use product::{
    ProductPageWithCategoryAndUrlKey, ProductPageWithSku, ProductPageWithSkuAndUrlKey,
    ProductPageWithSkuAndUrlPath, ProductPageWithUrlKey, ProductPageWithUrlPath,
};

/// Two-way contract shared by every url shape
pub trait PathTemplate: Send + Sync {
    /// Parameter bag this template reads and produces
    type Params;

    /// Symbolic name used in configuration, e.g. `ProductPageWithSku`
    fn name(&self) -> &str;

    /// Pattern string describing the shape, e.g. `{{page}}.html/{{sku}}.html#{{variant_sku}}`
    fn pattern(&self) -> &str;

    /// Parameter fields this template consumes
    fn parameter_names(&self) -> &[&'static str];

    /// Renders parameters into a path; unresolved fields become `{{name}}` tokens
    fn format(&self, params: &Self::Params) -> String;

    /// Recovers parameters from a request path; `None` yields empty parameters
    fn parse(&self, request: Option<&RequestPathInfo>) -> Self::Params;

    /// Keeps exactly the fields `parse` could have produced, re-deriving dependents
    fn retain_parsable_parameters(&self, params: &Self::Params) -> Self::Params;
}

/// Shared handle to a product template
pub type ProductTemplate = Arc<dyn PathTemplate<Params = ProductParams>>;

/// Shared handle to a category template
pub type CategoryTemplate = Arc<dyn PathTemplate<Params = CategoryParams>>;

// ============================================================================
// Shared Helpers
// ============================================================================

/// Value itself, or the `{{name}}` token when absent
pub(crate) fn render(value: Option<&str>, name: &str) -> String {
    value.map_or_else(|| placeholder(name), str::to_string)
}

/// Renders `{page}.html/{body}.html`, followed by `#{fragment}` when non-blank
pub(crate) fn render_url(page: Option<&str>, body: &str, fragment: Option<&str>) -> String {
    let mut url = render(page, crate::params::PAGE);
    url.push_str(HTML_EXTENSION);
    url.push('/');
    url.push_str(body);
    url.push_str(HTML_EXTENSION);
    if let Some(fragment) = non_blank(fragment) {
        url.push(FRAGMENT_SEPARATOR);
        url.push_str(fragment);
    }
    url
}

/// Non-blank copy of an optional fragment value
pub(crate) fn fragment_value(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_string)
}

/// Request path split into the pieces templates assign
pub(crate) struct RequestParts<'a> {
    pub page: &'a str,
    pub remainder: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> RequestParts<'a> {
    /// `None` for a missing request, which parses into empty parameters
    pub fn of(request: Option<&'a RequestPathInfo>) -> Option<Self> {
        let request = request?;
        Some(Self {
            page: request.page(),
            remainder: request.remainder(),
            fragment: request.fragment(),
        })
    }

    /// Product parameters holding the page and the variant fragment
    pub fn product(&self) -> ProductParams {
        ProductParams {
            page: Some(self.page.to_string()),
            variant_sku: self.fragment.map(str::to_string),
            ..ProductParams::default()
        }
    }

    /// Category parameters holding the page
    pub fn category(&self) -> CategoryParams {
        CategoryParams {
            page: Some(self.page.to_string()),
            ..CategoryParams::default()
        }
    }
}
