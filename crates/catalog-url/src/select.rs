/// Rewrite selection for entities reachable through several catalog paths
///
/// A product listed in more than one category owns one url rewrite per
/// category it appears in. `select_url_path` picks the rewrite that matches
/// the place in the site where the link is rendered.
///
/// **Pure function**: no I/O, no shared state, total over its inputs.

use crate::path::{last_segment, non_blank, parent_segment, segment_count, SEGMENT_SEPARATOR};

/// Selects one url path among candidate rewrites
///
/// # Algorithm (evaluated in order)
///
/// 1. A non-blank explicit `url_path` is returned unchanged
/// 2. Candidates are filtered to those whose last segment equals `key`;
///    `None` entries are skipped
/// 3. Without any match the bare `key` is returned
/// 4. With a `context_path`, only the candidates sharing the longest segment
///    prefix with it are kept (a zero-length prefix still counts)
/// 5. Otherwise, with a `context_key`, only the candidates whose parent segment
///    equals it are kept, unless none does
/// 6. The candidate with the most segments wins; ties go to the earliest one
///
/// # Examples
///
/// ```
/// use catalog_url::select_url_path;
///
/// let candidates = [Some("foobar"), Some("foobar/top"), Some("bar/top"), Some("bar/foo/top")];
///
/// assert_eq!(select_url_path(None, candidates, "top", None, Some("bar/foo")), "bar/foo/top");
/// assert_eq!(select_url_path(None, candidates, "top", None, None), "bar/foo/top");
/// assert_eq!(select_url_path(None, candidates, "nope", None, None), "nope");
/// ```
pub fn select_url_path<I, S>(
    url_path: Option<&str>,
    candidates: I,
    key: &str,
    context_key: Option<&str>,
    context_path: Option<&str>,
) -> String
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    if let Some(url_path) = non_blank(url_path) {
        return url_path.to_string();
    }

    let owned: Vec<S> = candidates.into_iter().flatten().collect();
    let matching: Vec<&str> = owned
        .iter()
        .map(|candidate| candidate.as_ref())
        .filter(|candidate| last_segment(candidate) == key)
        .collect();

    if matching.is_empty() {
        tracing::trace!(key, "no rewrite ends with key, falling back to the key");
        return key.to_string();
    }

    let narrowed: Vec<&str> = match (non_blank(context_path), non_blank(context_key)) {
        (Some(context_path), _) => {
            let longest = matching
                .iter()
                .map(|candidate| shared_prefix_len(candidate, context_path))
                .max()
                .unwrap_or(0);
            matching
                .into_iter()
                .filter(|candidate| shared_prefix_len(candidate, context_path) == longest)
                .collect()
        }
        (None, Some(context_key)) => {
            let under_context: Vec<&str> = matching
                .iter()
                .copied()
                .filter(|candidate| parent_segment(candidate) == Some(context_key))
                .collect();
            if under_context.is_empty() {
                matching
            } else {
                under_context
            }
        }
        (None, None) => matching,
    };

    let selected = deepest_first(&narrowed).unwrap_or(key);
    tracing::trace!(key, selected, "selected url rewrite");
    selected.to_string()
}

/// Number of leading segments two paths have in common
fn shared_prefix_len(candidate: &str, context_path: &str) -> usize {
    candidate
        .split(SEGMENT_SEPARATOR)
        .zip(context_path.split(SEGMENT_SEPARATOR))
        .take_while(|(a, b)| a == b)
        .count()
}

/// Candidate with the most segments, earliest on ties
fn deepest_first<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .fold(None, |best: Option<&'a str>, candidate| match best {
            Some(b) if segment_count(b) >= segment_count(candidate) => Some(b),
            _ => Some(candidate),
        })
}
