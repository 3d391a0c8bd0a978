// File: src/params.rs
// Purpose: Per-entity parameter bags consumed and produced by url templates

use serde::{Deserialize, Serialize};

use crate::path::{non_blank, parent_segment, resolve_label};
use crate::select::select_url_path;

// ============================================================================
// Placeholder Names
// ============================================================================

pub const PAGE: &str = "page";
pub const SKU: &str = "sku";
pub const UID: &str = "uid";
pub const URL_KEY: &str = "url_key";
pub const URL_PATH: &str = "url_path";
pub const URL_REWRITES: &str = "url_rewrites";
pub const VARIANT_SKU: &str = "variant_sku";
pub const VARIANT_URL_KEY: &str = "variant_url_key";
pub const CATEGORY_URL_KEY: &str = "category_url_key";
pub const CATEGORY_URL_PATH: &str = "category_url_path";

// ============================================================================
// Core Types
// ============================================================================

/// Parameters of a category link
///
/// Also used as the enclosing-category context of a product link, where only
/// `url_key` and `url_path` are meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryParams {
    /// Base content path of the linking page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    /// Single segment, e.g. `tops`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_key: Option<String>,
    /// Full category path without extension, e.g. `men/tops`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
}

/// Parameters of a product link
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProductParams {
    /// Base content path of the linking page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_url_key: Option<String>,
    /// Every full path the product is reachable under
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub url_rewrites: Vec<String>,
    /// Category the link is rendered for
    #[serde(skip_serializing_if = "CategoryParams::is_empty")]
    pub category_url_params: CategoryParams,
}

// ============================================================================
// CategoryParams Implementation
// ============================================================================

impl CategoryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Self {
        self.uid = Some(uid.into());
        self
    }

    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = Some(url_key.into());
        self
    }

    pub fn with_url_path(mut self, url_path: impl Into<String>) -> Self {
        self.url_path = Some(url_path.into());
        self
    }

    /// True when no field is set
    pub fn is_empty(&self) -> bool {
        self.page.is_none() && self.uid.is_none() && self.url_key.is_none() && self.url_path.is_none()
    }

    /// Single-segment label: explicit `url_key`, else last segment of `url_path`
    pub fn label(&self) -> Option<&str> {
        resolve_label(self.url_key.as_deref(), self.url_path.as_deref())
    }
}

// ============================================================================
// ProductParams Implementation
// ============================================================================

impl ProductParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = Some(sku.into());
        self
    }

    pub fn with_url_key(mut self, url_key: impl Into<String>) -> Self {
        self.url_key = Some(url_key.into());
        self
    }

    pub fn with_url_path(mut self, url_path: impl Into<String>) -> Self {
        self.url_path = Some(url_path.into());
        self
    }

    pub fn with_variant_sku(mut self, variant_sku: impl Into<String>) -> Self {
        self.variant_sku = Some(variant_sku.into());
        self
    }

    pub fn with_variant_url_key(mut self, variant_url_key: impl Into<String>) -> Self {
        self.variant_url_key = Some(variant_url_key.into());
        self
    }

    pub fn with_url_rewrites<I, S>(mut self, rewrites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.url_rewrites = rewrites.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_category(mut self, category: CategoryParams) -> Self {
        self.category_url_params = category;
        self
    }

    /// Single-segment label: explicit `url_key`, else last segment of `url_path`
    pub fn url_key_label(&self) -> Option<&str> {
        resolve_label(self.url_key.as_deref(), self.url_path.as_deref())
    }

    /// Full url path to render for this product
    ///
    /// An explicit `url_path` wins. Otherwise the url rewrites are
    /// disambiguated against the enclosing category. `None` when the product
    /// has neither a path nor a key.
    pub fn resolved_url_path(&self) -> Option<String> {
        if let Some(url_path) = non_blank(self.url_path.as_deref()) {
            return Some(url_path.to_string());
        }
        let key = self.url_key_label()?;
        Some(select_url_path(
            None,
            self.url_rewrites.iter().map(Some),
            key,
            self.category_url_params.url_key.as_deref(),
            self.category_url_params.url_path.as_deref(),
        ))
    }

    /// Label of the enclosing category segment
    ///
    /// Taken from the category context when it carries one. Without context,
    /// the parent segment of the deepest url rewrite ending in the product key.
    pub fn category_label(&self) -> Option<String> {
        if let Some(label) = self.category_url_params.label() {
            return Some(label.to_string());
        }
        let key = self.url_key_label()?;
        if self.url_rewrites.is_empty() {
            return None;
        }
        let selected = select_url_path(None, self.url_rewrites.iter().map(Some), key, None, None);
        parent_segment(&selected).map(str::to_string)
    }
}

// ============================================================================
// Placeholder Access
// ============================================================================

/// Name-based access to parameters, used by pattern-string templates
pub trait PlaceholderParams: Default + Clone + Send + Sync + 'static {
    /// Value rendered for a placeholder, derived values included
    fn value(&self, name: &str) -> Option<String>;

    /// Stores a parsed value; returns false for names this kind does not carry
    fn assign(&mut self, name: &str, value: String) -> bool;

    /// Fills fields that parsing derives from others (e.g. `url_key` from `url_path`)
    fn complete_derived(&mut self);

    /// Placeholder names this kind understands
    fn placeholder_names() -> &'static [&'static str];
}

impl PlaceholderParams for CategoryParams {
    fn value(&self, name: &str) -> Option<String> {
        match name {
            PAGE => self.page.clone(),
            UID => self.uid.clone(),
            URL_KEY => self.label().map(str::to_string),
            URL_PATH => self.url_path.clone(),
            _ => None,
        }
    }

    fn assign(&mut self, name: &str, value: String) -> bool {
        match name {
            PAGE => self.page = Some(value),
            UID => self.uid = Some(value),
            URL_KEY => self.url_key = Some(value),
            URL_PATH => self.url_path = Some(value),
            _ => return false,
        }
        true
    }

    fn complete_derived(&mut self) {
        if self.url_key.is_none() {
            self.url_key = self.label().map(str::to_string);
        }
    }

    fn placeholder_names() -> &'static [&'static str] {
        &[PAGE, UID, URL_KEY, URL_PATH]
    }
}

impl PlaceholderParams for ProductParams {
    fn value(&self, name: &str) -> Option<String> {
        match name {
            PAGE => self.page.clone(),
            SKU => self.sku.clone(),
            URL_KEY => self.url_key_label().map(str::to_string),
            URL_PATH => self.resolved_url_path(),
            VARIANT_SKU => self.variant_sku.clone(),
            VARIANT_URL_KEY => self.variant_url_key.clone(),
            CATEGORY_URL_KEY => self.category_label(),
            CATEGORY_URL_PATH => self.category_url_params.url_path.clone(),
            _ => None,
        }
    }

    fn assign(&mut self, name: &str, value: String) -> bool {
        match name {
            PAGE => self.page = Some(value),
            SKU => self.sku = Some(value),
            URL_KEY => self.url_key = Some(value),
            URL_PATH => self.url_path = Some(value),
            VARIANT_SKU => self.variant_sku = Some(value),
            VARIANT_URL_KEY => self.variant_url_key = Some(value),
            CATEGORY_URL_KEY => self.category_url_params.url_key = Some(value),
            CATEGORY_URL_PATH => self.category_url_params.url_path = Some(value),
            _ => return false,
        }
        true
    }

    fn complete_derived(&mut self) {
        if self.url_key.is_none() {
            self.url_key = self.url_key_label().map(str::to_string);
        }
        self.category_url_params.complete_derived();
    }

    fn placeholder_names() -> &'static [&'static str] {
        &[
            PAGE,
            SKU,
            URL_KEY,
            URL_PATH,
            VARIANT_SKU,
            VARIANT_URL_KEY,
            CATEGORY_URL_KEY,
            CATEGORY_URL_PATH,
        ]
    }
}
