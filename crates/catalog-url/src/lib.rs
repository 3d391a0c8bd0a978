//! # Catalog URL
//!
//! Bidirectional url templates for catalog products and categories:
//! - **Format** parameters (SKU, url key, url path, ...) into a link path
//! - **Parse** an incoming request path back into parameters
//! - **Retain** only the parameters a link can carry, for canonical links
//! - **Select** the right url rewrite when a product lives in several categories
//!
//! ## Template Shapes
//!
//! | Name | Pattern |
//! |------|---------|
//! | `ProductPageWithSku` | `{{page}}.html/{{sku}}.html#{{variant_sku}}` |
//! | `ProductPageWithUrlKey` | `{{page}}.html/{{url_key}}.html#{{variant_sku}}` |
//! | `ProductPageWithSkuAndUrlKey` | `{{page}}.html/{{sku}}/{{url_key}}.html#{{variant_sku}}` |
//! | `ProductPageWithUrlPath` | `{{page}}.html/{{url_path}}.html#{{variant_sku}}` |
//! | `ProductPageWithSkuAndUrlPath` | `{{page}}.html/{{sku}}/{{url_path}}.html#{{variant_sku}}` |
//! | `ProductPageWithCategoryAndUrlKey` | `{{page}}.html/{{category_url_key}}/{{url_key}}.html#{{variant_sku}}` |
//! | `CategoryPageWithUrlPath` | `{{page}}.html/{{url_path}}.html` |
//! | `CategoryPageWithUrlKey` | `{{page}}.html/{{url_key}}.html` |
//!
//! Any other `{{page}}.html/...` pattern string is compiled into a
//! [`PatternTemplate`] by the [`TemplateRegistry`].
//!
//! ## Never Failing
//!
//! Formatting, parsing and rewrite selection are total functions:
//! - Missing fields render as visible `{{name}}` tokens
//! - A missing request parses into empty parameters
//! - Without a matching rewrite the bare url key is used
//!
//! ## Example
//!
//! ```
//! use catalog_url::{PathTemplate, RequestPathInfo, TemplateRegistry};
//!
//! let registry = TemplateRegistry::builtin();
//! let template = registry.category_template("CategoryPageWithUrlPath").unwrap();
//!
//! let request = RequestPathInfo::new("/c").with_suffix("/men/tops.html");
//! let params = template.parse(Some(&request));
//! assert_eq!(params.url_path.as_deref(), Some("men/tops"));
//! assert_eq!(params.url_key.as_deref(), Some("tops"));
//!
//! assert_eq!(template.format(&params), "/c.html/men/tops.html");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod error;
pub mod params;
pub mod path;
pub mod provider;
pub mod registry;
pub mod select;
pub mod template;

// Re-export public types
pub use config::{Config, UrlConfig};
pub use error::{TemplateKind, UrlError};
pub use params::{CategoryParams, PlaceholderParams, ProductParams};
pub use path::RequestPathInfo;
pub use provider::UrlProvider;
pub use registry::TemplateRegistry;
pub use select::select_url_path;
pub use template::{
    CategoryPageWithUrlKey, CategoryPageWithUrlPath, CategoryTemplate, PathTemplate, PatternTemplate,
    ProductPageWithCategoryAndUrlKey, ProductPageWithSku, ProductPageWithSkuAndUrlKey,
    ProductPageWithSkuAndUrlPath, ProductPageWithUrlKey, ProductPageWithUrlPath, ProductTemplate,
};
