/// Category page url shapes

use super::{render, render_url, PathTemplate, RequestParts};
use crate::params::{CategoryParams, PAGE, URL_KEY, URL_PATH};
use crate::path::{last_segment, RequestPathInfo};

/// Category addressed by its full url path
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPageWithUrlPath;

impl CategoryPageWithUrlPath {
    pub const NAME: &'static str = "CategoryPageWithUrlPath";
    pub const PATTERN: &'static str = "{{page}}.html/{{url_path}}.html";
}

impl PathTemplate for CategoryPageWithUrlPath {
    type Params = CategoryParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[PAGE, URL_PATH]
    }

    fn format(&self, params: &CategoryParams) -> String {
        let body = render(params.url_path.as_deref(), URL_PATH);
        render_url(params.page.as_deref(), &body, None)
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> CategoryParams {
        let Some(parts) = RequestParts::of(request) else {
            return CategoryParams::default();
        };
        let mut params = parts.category();
        if let Some(remainder) = parts.remainder {
            params.url_path = Some(remainder.to_string());
            params.url_key = Some(last_segment(remainder).to_string());
        }
        params
    }

    fn retain_parsable_parameters(&self, params: &CategoryParams) -> CategoryParams {
        CategoryParams {
            page: params.page.clone(),
            url_key: params.url_path.as_deref().map(|p| last_segment(p).to_string()),
            url_path: params.url_path.clone(),
            ..CategoryParams::default()
        }
    }
}

/// Category addressed by its url key
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryPageWithUrlKey;

impl CategoryPageWithUrlKey {
    pub const NAME: &'static str = "CategoryPageWithUrlKey";
    pub const PATTERN: &'static str = "{{page}}.html/{{url_key}}.html";
}

impl PathTemplate for CategoryPageWithUrlKey {
    type Params = CategoryParams;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }

    fn parameter_names(&self) -> &[&'static str] {
        &[PAGE, URL_KEY, URL_PATH]
    }

    fn format(&self, params: &CategoryParams) -> String {
        let body = render(params.label(), URL_KEY);
        render_url(params.page.as_deref(), &body, None)
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> CategoryParams {
        let Some(parts) = RequestParts::of(request) else {
            return CategoryParams::default();
        };
        let mut params = parts.category();
        params.url_key = parts.remainder.map(|r| last_segment(r).to_string());
        params
    }

    fn retain_parsable_parameters(&self, params: &CategoryParams) -> CategoryParams {
        CategoryParams {
            page: params.page.clone(),
            url_key: params.label().map(str::to_string),
            ..CategoryParams::default()
        }
    }
}
