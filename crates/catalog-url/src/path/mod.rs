/// Path utilities shared by every template shape
///
/// All functions are **pure**: given same input, always produce same output with no side effects.
/// They operate on `/`-separated catalog paths such as `men/tops/shirt`, never on filesystem paths.

pub mod request;
pub use request::RequestPathInfo;

/// Extension appended to the page and to every formatted suffix
pub const HTML_EXTENSION: &str = ".html";

/// Trailing content-node element stripped from resource paths
pub const CONTENT_NODE: &str = "/jcr:content";

/// Separator in front of an optional trailing fragment
pub const FRAGMENT_SEPARATOR: char = '#';

/// Segment separator of catalog paths
pub const SEGMENT_SEPARATOR: char = '/';

/// Returns true when the value is absent or only whitespace
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

/// Keeps the value only when it is not blank
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Renders the literal `{{name}}` token used for unresolved placeholders
///
/// # Examples
///
/// ```
/// use catalog_url::path::placeholder;
///
/// assert_eq!(placeholder("sku"), "{{sku}}");
/// ```
pub fn placeholder(name: &str) -> String {
    format!("{{{{{}}}}}", name)
}

/// Last segment of a path, or the whole value when it has no separator
///
/// # Examples
///
/// ```
/// use catalog_url::path::last_segment;
///
/// assert_eq!(last_segment("men/tops/shirt"), "shirt");
/// assert_eq!(last_segment("shirt"), "shirt");
/// ```
pub fn last_segment(path: &str) -> &str {
    path.rsplit(SEGMENT_SEPARATOR).next().unwrap_or(path)
}

/// Second-to-last segment of a path (the immediate parent), if any
pub fn parent_segment(path: &str) -> Option<&str> {
    let mut segments = path.rsplit(SEGMENT_SEPARATOR);
    segments.next();
    segments.next()
}

/// Everything before the last segment, if the path has more than one
pub fn parent_path(path: &str) -> Option<&str> {
    path.rfind(SEGMENT_SEPARATOR).map(|pos| &path[..pos])
}

/// Number of `/`-separated segments
pub fn segment_count(path: &str) -> usize {
    path.split(SEGMENT_SEPARATOR).count()
}

/// Resolves the single-segment label of an entity
///
/// Prefers an explicit non-blank `url_key`; falls back to the last segment of a
/// non-blank `url_path`. Returns `None` when neither is usable.
///
/// # Examples
///
/// ```
/// use catalog_url::path::resolve_label;
///
/// assert_eq!(resolve_label(Some("shirt"), Some("men/tops")), Some("shirt"));
/// assert_eq!(resolve_label(None, Some("men/tops")), Some("tops"));
/// assert_eq!(resolve_label(None, None), None);
/// ```
pub fn resolve_label<'a>(url_key: Option<&'a str>, url_path: Option<&'a str>) -> Option<&'a str> {
    non_blank(url_key).or_else(|| non_blank(url_path).map(last_segment))
}

/// Removes the trailing content-node element from a resource path
///
/// # Examples
///
/// ```
/// use catalog_url::path::remove_content_node;
///
/// assert_eq!(remove_content_node("/content/site/p/jcr:content"), "/content/site/p");
/// assert_eq!(remove_content_node("/content/site/p"), "/content/site/p");
/// ```
pub fn remove_content_node(resource_path: &str) -> &str {
    resource_path.strip_suffix(CONTENT_NODE).unwrap_or(resource_path)
}

/// Strips the `.html` extension when present
pub fn strip_extension(path: &str) -> &str {
    path.strip_suffix(HTML_EXTENSION).unwrap_or(path)
}
