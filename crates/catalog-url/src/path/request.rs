/// Request path descriptor handed to `PathTemplate::parse`
///
/// Mirrors what the hosting request layer knows about an incoming request:
/// the resource path of the page and the suffix that follows the page's own
/// extension. Templates treat it as opaque input.

use super::{non_blank, remove_content_node, strip_extension, FRAGMENT_SEPARATOR, HTML_EXTENSION, SEGMENT_SEPARATOR};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPathInfo {
    /// Resource path of the linking page, e.g. `/content/site/product`
    pub resource_path: String,
    /// Suffix after the page extension, e.g. `/men/tops.html`
    pub suffix: Option<String>,
    /// Trailing fragment without the `#`, only known for links parsed client-side
    pub fragment: Option<String>,
}

impl RequestPathInfo {
    /// Creates a descriptor without suffix and fragment
    pub fn new(resource_path: impl Into<String>) -> Self {
        Self {
            resource_path: resource_path.into(),
            suffix: None,
            fragment: None,
        }
    }

    /// Sets the suffix (builder style)
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    /// Sets the fragment (builder style)
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    /// Splits a rendered link back into a descriptor
    ///
    /// The query string and `#fragment` are split off first. The resource path
    /// ends at the first `.html` extension, with selectors dropped; the suffix
    /// is whatever follows that extension when it starts with `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_url::path::RequestPathInfo;
    ///
    /// let info = RequestPathInfo::from_url("/p.html/men/tops.html#red");
    /// assert_eq!(info.resource_path, "/p");
    /// assert_eq!(info.suffix.as_deref(), Some("/men/tops.html"));
    /// assert_eq!(info.fragment.as_deref(), Some("red"));
    ///
    /// let info = RequestPathInfo::from_url("/p.preview.html");
    /// assert_eq!(info.resource_path, "/p");
    /// assert_eq!(info.suffix, None);
    /// ```
    pub fn from_url(url: &str) -> Self {
        let (url, fragment) = match url.split_once(FRAGMENT_SEPARATOR) {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (url, None),
        };
        let url = url.split_once('?').map_or(url, |(path, _query)| path);

        let (resource, suffix) = match url.find(HTML_EXTENSION) {
            Some(pos) => {
                let rest = &url[pos + HTML_EXTENSION.len()..];
                if rest.is_empty() {
                    (&url[..pos], None)
                } else if rest.starts_with(SEGMENT_SEPARATOR) {
                    (&url[..pos], Some(rest))
                } else {
                    (url, None)
                }
            }
            None => (url, None),
        };

        Self {
            resource_path: strip_selectors(resource).to_string(),
            suffix: suffix.map(str::to_string),
            fragment: non_blank(fragment).map(str::to_string),
        }
    }

    /// Page path: the resource path without a trailing content node
    pub fn page(&self) -> &str {
        remove_content_node(&self.resource_path)
    }

    /// Suffix without leading separators, extension and trailing separators
    ///
    /// Returns `None` when no suffix is present or nothing is left of it.
    pub fn remainder(&self) -> Option<&str> {
        let suffix = self.suffix.as_deref()?;
        let trimmed = strip_extension(suffix.trim().trim_start_matches(SEGMENT_SEPARATOR))
            .trim_end_matches(SEGMENT_SEPARATOR);
        non_blank(Some(trimmed))
    }

    /// Non-blank fragment, if any
    pub fn fragment(&self) -> Option<&str> {
        non_blank(self.fragment.as_deref())
    }
}

/// Drops selectors (`/page.sel1.sel2` → `/page`) from the last path element
fn strip_selectors(resource: &str) -> &str {
    let name_start = resource.rfind(SEGMENT_SEPARATOR).map_or(0, |pos| pos + 1);
    match resource[name_start..].find('.') {
        Some(dot) => &resource[..name_start + dot],
        None => resource,
    }
}
