/// Product page url shapes
///
/// Every product shape renders `{{page}}.html/<suffix>.html` and carries the
/// selected variant as an optional `#variant_sku` fragment.

use super::{fragment_value, render, render_url, PathTemplate, RequestParts};
use crate::params::{
    CategoryParams, ProductParams, CATEGORY_URL_KEY, CATEGORY_URL_PATH, PAGE, SKU, URL_KEY, URL_PATH,
    URL_REWRITES, VARIANT_SKU,
};
use crate::path::{last_segment, parent_path, RequestPathInfo, SEGMENT_SEPARATOR};

// ============================================================================
// Shared Rendering
// ============================================================================

fn render_sku(params: &ProductParams) -> String {
    render(params.sku.as_deref(), SKU)
}

fn render_url_key(params: &ProductParams) -> String {
    render(params.url_key_label(), URL_KEY)
}

fn render_url_path(params: &ProductParams) -> String {
    params
        .resolved_url_path()
        .unwrap_or_else(|| crate::path::placeholder(URL_PATH))
}

fn render_product(params: &ProductParams, body: &str) -> String {
    render_url(params.page.as_deref(), body, params.variant_sku.as_deref())
}

/// Page and variant fragment, the fields every product shape retains
fn retained_base(params: &ProductParams) -> ProductParams {
    ProductParams {
        page: params.page.clone(),
        variant_sku: fragment_value(params.variant_sku.as_deref()),
        ..ProductParams::default()
    }
}

/// Splits `sku/rest` on the first separator; a single segment is all sku
fn split_sku(remainder: &str) -> (&str, Option<&str>) {
    match remainder.split_once(SEGMENT_SEPARATOR) {
        Some((sku, rest)) if !rest.is_empty() => (sku, Some(rest)),
        Some((sku, _)) => (sku, None),
        None => (remainder, None),
    }
}

// ============================================================================
// {{page}}.html/{{sku}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by SKU only
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithSku;

impl ProductPageWithSku {
    pub const NAME: &'static str = "ProductPageWithSku";
    pub const PATTERN: &'static str = "{{page}}.html/{{sku}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithSku {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[PAGE, SKU, VARIANT_SKU]
    }

    fn format(&self, params: &ProductParams) -> String {
        render_product(params, &render_sku(params))
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        params.sku = parts.remainder.map(str::to_string);
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        ProductParams {
            sku: params.sku.clone(),
            ..retained_base(params)
        }
    }
}

// ============================================================================
// {{page}}.html/{{url_key}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by its url key
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithUrlKey;

impl ProductPageWithUrlKey {
    pub const NAME: &'static str = "ProductPageWithUrlKey";
    pub const PATTERN: &'static str = "{{page}}.html/{{url_key}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithUrlKey {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[PAGE, URL_KEY, URL_PATH, VARIANT_SKU]
    }

    fn format(&self, params: &ProductParams) -> String {
        render_product(params, &render_url_key(params))
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        params.url_key = parts.remainder.map(|r| last_segment(r).to_string());
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        ProductParams {
            url_key: params.url_key_label().map(str::to_string),
            ..retained_base(params)
        }
    }
}

// ============================================================================
// {{page}}.html/{{sku}}/{{url_key}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by SKU followed by its url key
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithSkuAndUrlKey;

impl ProductPageWithSkuAndUrlKey {
    pub const NAME: &'static str = "ProductPageWithSkuAndUrlKey";
    pub const PATTERN: &'static str = "{{page}}.html/{{sku}}/{{url_key}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithSkuAndUrlKey {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[PAGE, SKU, URL_KEY, URL_PATH, VARIANT_SKU]
    }

    fn format(&self, params: &ProductParams) -> String {
        let body = format!("{}/{}", render_sku(params), render_url_key(params));
        render_product(params, &body)
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        if let Some(remainder) = parts.remainder {
            let (sku, rest) = split_sku(remainder);
            params.sku = Some(sku.to_string());
            params.url_key = rest.map(|r| last_segment(r).to_string());
        }
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        ProductParams {
            sku: params.sku.clone(),
            url_key: params.url_key_label().map(str::to_string),
            ..retained_base(params)
        }
    }
}

// ============================================================================
// {{page}}.html/{{url_path}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by its full url path, disambiguated among url rewrites
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithUrlPath;

impl ProductPageWithUrlPath {
    pub const NAME: &'static str = "ProductPageWithUrlPath";
    pub const PATTERN: &'static str = "{{page}}.html/{{url_path}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithUrlPath {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[
            PAGE,
            URL_PATH,
            URL_KEY,
            URL_REWRITES,
            CATEGORY_URL_KEY,
            CATEGORY_URL_PATH,
            VARIANT_SKU,
        ]
    }

    fn format(&self, params: &ProductParams) -> String {
        render_product(params, &render_url_path(params))
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        if let Some(remainder) = parts.remainder {
            params.url_path = Some(remainder.to_string());
            params.url_key = Some(last_segment(remainder).to_string());
        }
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        let url_path = params.resolved_url_path();
        ProductParams {
            url_key: url_path.as_deref().map(|p| last_segment(p).to_string()),
            url_path,
            ..retained_base(params)
        }
    }
}

// ============================================================================
// {{page}}.html/{{sku}}/{{url_path}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by SKU followed by its full url path
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithSkuAndUrlPath;

impl ProductPageWithSkuAndUrlPath {
    pub const NAME: &'static str = "ProductPageWithSkuAndUrlPath";
    pub const PATTERN: &'static str = "{{page}}.html/{{sku}}/{{url_path}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithSkuAndUrlPath {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[
            PAGE,
            SKU,
            URL_PATH,
            URL_KEY,
            URL_REWRITES,
            CATEGORY_URL_KEY,
            CATEGORY_URL_PATH,
            VARIANT_SKU,
        ]
    }

    fn format(&self, params: &ProductParams) -> String {
        let body = format!("{}/{}", render_sku(params), render_url_path(params));
        render_product(params, &body)
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        if let Some(remainder) = parts.remainder {
            let (sku, rest) = split_sku(remainder);
            params.sku = Some(sku.to_string());
            if let Some(url_path) = rest {
                params.url_path = Some(url_path.to_string());
                params.url_key = Some(last_segment(url_path).to_string());
            }
        }
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        let url_path = params.resolved_url_path();
        ProductParams {
            sku: params.sku.clone(),
            url_key: url_path.as_deref().map(|p| last_segment(p).to_string()),
            url_path,
            ..retained_base(params)
        }
    }
}

// ============================================================================
// {{page}}.html/{{category_url_key}}/{{url_key}}.html#{{variant_sku}}
// ============================================================================

/// Product addressed by its url key below the enclosing category's label
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductPageWithCategoryAndUrlKey;

impl ProductPageWithCategoryAndUrlKey {
    pub const NAME: &'static str = "ProductPageWithCategoryAndUrlKey";
    pub const PATTERN: &'static str =
        "{{page}}.html/{{category_url_key}}/{{url_key}}.html#{{variant_sku}}";
}

impl PathTemplate for ProductPageWithCategoryAndUrlKey {
    type Params = ProductParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[
            PAGE,
            CATEGORY_URL_KEY,
            CATEGORY_URL_PATH,
            URL_KEY,
            URL_PATH,
            URL_REWRITES,
            VARIANT_SKU,
        ]
    }

    fn format(&self, params: &ProductParams) -> String {
        let category = render(params.category_label().as_deref(), CATEGORY_URL_KEY);
        let body = format!("{}/{}", category, render_url_key(params));
        render_product(params, &body)
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> ProductParams {
        let Some(parts) = RequestParts::of(request) else {
            return ProductParams::default();
        };
        let mut params = parts.product();
        let Some(remainder) = parts.remainder else {
            return params;
        };
        match remainder.rsplit_once(SEGMENT_SEPARATOR) {
            Some((category_path, url_key)) => {
                params.url_key = Some(url_key.to_string());
                params.category_url_params.url_key = Some(last_segment(category_path).to_string());
                if parent_path(category_path).is_some() {
                    params.category_url_params.url_path = Some(category_path.to_string());
                }
            }
            // First placeholder takes an ambiguous single segment
            None => params.category_url_params.url_key = Some(remainder.to_string()),
        }
        params
    }

    fn retain_parsable_parameters(&self, params: &ProductParams) -> ProductParams {
        ProductParams {
            url_key: params.url_key_label().map(str::to_string),
            category_url_params: CategoryParams {
                url_key: params.category_label(),
                ..CategoryParams::default()
            },
            ..retained_base(params)
        }
    }
}
