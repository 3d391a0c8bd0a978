/// Templates compiled from a configured pattern string
///
/// Lets configuration describe shapes the built-in templates do not cover,
/// e.g. `{{page}}.html/{{sku}}-{{url_key}}.html#{{variant_url_key}}`.
///
/// # Pattern Rules
///
/// - Must start with `{{page}}.html` followed by a `/`-led suffix section
/// - An optional `#` starts the fragment section
/// - Placeholders are `{{name}}` with names the parameter kind understands
/// - `url_path` and `category_url_path` match across `/`, all others match one segment

use std::marker::PhantomData;

use once_cell::sync::Lazy;
use regex::Regex;

use super::PathTemplate;
use crate::error::UrlError;
use crate::params::{PlaceholderParams, CATEGORY_URL_PATH, PAGE, URL_PATH};
use crate::path::{is_blank, placeholder, RequestPathInfo, FRAGMENT_SEPARATOR, HTML_EXTENSION, SEGMENT_SEPARATOR};

static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").unwrap());

/// Piece of a pattern section
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Literal(String),
    Placeholder(&'static str),
}

/// Template backed by a pattern string, generic over the parameter kind
pub struct PatternTemplate<P> {
    name: String,
    pattern: String,
    suffix: Vec<Token>,
    fragment: Vec<Token>,
    names: Vec<&'static str>,
    suffix_regex: Regex,
    fragment_regex: Option<Regex>,
    _params: PhantomData<fn() -> P>,
}

impl<P> std::fmt::Debug for PatternTemplate<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternTemplate")
            .field("name", &self.name)
            .field("pattern", &self.pattern)
            .finish()
    }
}

impl<P: PlaceholderParams> PatternTemplate<P> {
    /// Compiles a pattern; the pattern doubles as the template name
    ///
    /// # Examples
    ///
    /// ```
    /// use catalog_url::{PathTemplate, PatternTemplate, ProductParams};
    ///
    /// let template = PatternTemplate::<ProductParams>::new("{{page}}.html/{{sku}}-{{url_key}}.html").unwrap();
    /// let params = ProductParams::new().with_page("/p").with_sku("abc").with_url_key("shirt");
    /// assert_eq!(template.format(&params), "/p.html/abc-shirt.html");
    /// ```
    pub fn new(pattern: &str) -> Result<Self, UrlError> {
        let page_prefix = format!("{}{}", placeholder(PAGE), HTML_EXTENSION);
        let rest = pattern
            .strip_prefix(page_prefix.as_str())
            .ok_or_else(|| UrlError::invalid_pattern(pattern, format!("must start with {}", page_prefix)))?;

        let (suffix_src, fragment_src) = match rest.split_once(FRAGMENT_SEPARATOR) {
            Some((suffix, fragment)) => (suffix, Some(fragment)),
            None => (rest, None),
        };
        if !suffix_src.starts_with(SEGMENT_SEPARATOR) {
            return Err(UrlError::invalid_pattern(
                pattern,
                format!("expected '{}' after {}", SEGMENT_SEPARATOR, page_prefix),
            ));
        }

        let suffix = tokenize::<P>(pattern, suffix_src)?;
        let fragment = match fragment_src {
            Some(src) => tokenize::<P>(pattern, src)?,
            None => Vec::new(),
        };

        if !suffix.iter().any(|t| matches!(t, Token::Placeholder(_))) {
            return Err(UrlError::invalid_pattern(pattern, "suffix has no placeholder"));
        }

        let mut names = vec![PAGE];
        for token in suffix.iter().chain(fragment.iter()) {
            if let Token::Placeholder(name) = token {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
        }

        let suffix_regex = compile(pattern, &suffix)?;
        let fragment_regex = if fragment.is_empty() {
            None
        } else {
            Some(compile(pattern, &fragment)?)
        };

        Ok(Self {
            name: pattern.to_string(),
            pattern: pattern.to_string(),
            suffix,
            fragment,
            names,
            suffix_regex,
            fragment_regex,
            _params: PhantomData,
        })
    }

    /// Gives the template a symbolic name (builder style)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Gives an unmatched single-segment remainder to the leading placeholder
    fn assign_single_segment(&self, request: &RequestPathInfo, params: &mut P) {
        let (Some(name), Some(remainder)) = (leading_placeholder(&self.suffix), request.remainder()) else {
            return;
        };
        if !remainder.contains(SEGMENT_SEPARATOR) {
            params.assign(name, remainder.to_string());
        }
    }

    /// Values of the fragment placeholders, or `None` unless all are non-blank
    fn fragment_values(&self, params: &P) -> Option<Vec<(&'static str, String)>> {
        placeholders(&self.fragment)
            .map(|name| {
                params
                    .value(name)
                    .filter(|v| !is_blank(Some(v.as_str())))
                    .map(|v| (name, v))
            })
            .collect()
    }
}

impl<P: PlaceholderParams> PathTemplate for PatternTemplate<P> {
    type Params = P;

    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn parameter_names(&self) -> &[&'static str] {
        &self.names
    }

    fn format(&self, params: &P) -> String {
        let mut url = params.value(PAGE).unwrap_or_else(|| placeholder(PAGE));
        url.push_str(HTML_EXTENSION);
        url.push_str(&render_tokens(&self.suffix, params));

        if !self.fragment.is_empty() && self.fragment_values(params).is_some() {
            url.push(FRAGMENT_SEPARATOR);
            url.push_str(&render_tokens(&self.fragment, params));
        }
        url
    }

    fn parse(&self, request: Option<&RequestPathInfo>) -> P {
        let mut params = P::default();
        let Some(request) = request else {
            return params;
        };
        params.assign(PAGE, request.page().to_string());

        if let Some(suffix) = request.suffix.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            let suffix = if suffix.starts_with(SEGMENT_SEPARATOR) {
                suffix.to_string()
            } else {
                format!("{}{}", SEGMENT_SEPARATOR, suffix)
            };
            if !capture_into(&self.suffix_regex, &self.suffix, &suffix, &mut params) {
                self.assign_single_segment(request, &mut params);
            }
        }

        if let (Some(regex), Some(fragment)) = (&self.fragment_regex, request.fragment()) {
            capture_into(regex, &self.fragment, fragment, &mut params);
        }

        params.complete_derived();
        params
    }

    fn retain_parsable_parameters(&self, params: &P) -> P {
        let mut retained = P::default();
        if let Some(page) = params.value(PAGE) {
            retained.assign(PAGE, page);
        }
        for name in placeholders(&self.suffix) {
            if let Some(value) = params.value(name) {
                retained.assign(name, value);
            }
        }
        for (name, value) in self.fragment_values(params).unwrap_or_default() {
            retained.assign(name, value);
        }
        retained.complete_derived();
        retained
    }
}

// ============================================================================
// Pattern Compilation
// ============================================================================

/// Splits a pattern section into literals and known placeholders
fn tokenize<P: PlaceholderParams>(pattern: &str, src: &str) -> Result<Vec<Token>, UrlError> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in PLACEHOLDER_REGEX.captures_iter(src) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            tokens.push(Token::Literal(src[last..whole.start()].to_string()));
        }
        let known = P::placeholder_names()
            .iter()
            .copied()
            .filter(|known| *known != PAGE)
            .find(|known| *known == name.as_str())
            .ok_or_else(|| {
                UrlError::invalid_pattern(pattern, format!("unknown placeholder {}", whole.as_str()))
            })?;
        tokens.push(Token::Placeholder(known));
        last = whole.end();
    }

    if last < src.len() {
        tokens.push(Token::Literal(src[last..].to_string()));
    }
    Ok(tokens)
}

/// Anchored regular expression capturing every placeholder in order
///
/// A single-segment placeholder that is the last one and follows a `/`
/// takes the last segment; the segments before it are skipped.
fn compile(pattern: &str, tokens: &[Token]) -> Result<Regex, UrlError> {
    let last_placeholder = tokens.iter().rposition(|t| matches!(t, Token::Placeholder(_)));
    let mut source = String::from("^");
    for (index, token) in tokens.iter().enumerate() {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(text)),
            Token::Placeholder(name) if *name == URL_PATH || *name == CATEGORY_URL_PATH => {
                source.push_str("(.+)")
            }
            Token::Placeholder(_) => {
                if Some(index) == last_placeholder && follows_separator(tokens, index) {
                    source.push_str("(?:.*/)?");
                }
                source.push_str("([^/]+)");
            }
        }
    }
    source.push('$');
    Regex::new(&source).map_err(|e| UrlError::invalid_pattern(pattern, e.to_string()))
}

fn placeholders(tokens: &[Token]) -> impl Iterator<Item = &'static str> + '_ {
    tokens.iter().filter_map(|token| match token {
        Token::Placeholder(name) => Some(*name),
        Token::Literal(_) => None,
    })
}

fn render_tokens<P: PlaceholderParams>(tokens: &[Token], params: &P) -> String {
    tokens
        .iter()
        .map(|token| match token {
            Token::Literal(text) => text.clone(),
            Token::Placeholder(name) => params.value(name).unwrap_or_else(|| placeholder(name)),
        })
        .collect()
}

fn follows_separator(tokens: &[Token], index: usize) -> bool {
    index
        .checked_sub(1)
        .and_then(|prev| tokens.get(prev))
        .map_or(false, |token| matches!(token, Token::Literal(text) if text.ends_with(SEGMENT_SEPARATOR)))
}

/// Placeholder directly after the leading `/`, e.g. `sku` in `/{{sku}}/{{url_key}}.html`
fn leading_placeholder(tokens: &[Token]) -> Option<&'static str> {
    match tokens {
        [Token::Literal(text), Token::Placeholder(name), ..] if text.as_str() == "/" => Some(*name),
        _ => None,
    }
}

/// Assigns every captured placeholder; false when the input does not match
fn capture_into<P: PlaceholderParams>(regex: &Regex, tokens: &[Token], input: &str, params: &mut P) -> bool {
    let Some(caps) = regex.captures(input) else {
        tracing::trace!(input, "request does not match url pattern");
        return false;
    };
    for (index, name) in placeholders(tokens).enumerate() {
        if let Some(value) = caps.get(index + 1) {
            params.assign(name, value.as_str().to_string());
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{CategoryParams, ProductParams};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize() {
        let tokens = tokenize::<ProductParams>("p", "/{{sku}}-{{url_key}}.html").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::Literal("/".to_string()),
                Token::Placeholder("sku"),
                Token::Literal("-".to_string()),
                Token::Placeholder("url_key"),
                Token::Literal(".html".to_string()),
            ]
        );
    }

    #[test]
    fn test_rejects_unknown_placeholder() {
        let err = PatternTemplate::<CategoryParams>::new("{{page}}.html/{{sku}}.html").unwrap_err();
        assert!(err.to_string().contains("unknown placeholder {{sku}}"));
    }

    #[test]
    fn test_rejects_missing_page_prefix() {
        assert!(PatternTemplate::<ProductParams>::new("/shop/{{sku}}.html").is_err());
        assert!(PatternTemplate::<ProductParams>::new("{{page}}.html{{sku}}.html").is_err());
        assert!(PatternTemplate::<ProductParams>::new("{{page}}.html/static.html").is_err());
    }

    #[test]
    fn test_parameter_names() {
        let template =
            PatternTemplate::<ProductParams>::new("{{page}}.html/{{sku}}/{{url_key}}.html#{{variant_sku}}")
                .unwrap();
        assert_eq!(template.parameter_names(), &["page", "sku", "url_key", "variant_sku"]);
    }

    #[test]
    fn test_fragment_requires_all_values() {
        let template = PatternTemplate::<ProductParams>::new(
            "{{page}}.html/{{url_key}}.html#{{variant_sku}}-{{variant_url_key}}",
        )
        .unwrap();
        let params = ProductParams::new()
            .with_page("/p")
            .with_url_key("shirt")
            .with_variant_sku("shirt-red");
        assert_eq!(template.format(&params), "/p.html/shirt.html");

        let params = params.with_variant_url_key("red");
        assert_eq!(template.format(&params), "/p.html/shirt.html#shirt-red-red");
    }

    #[test]
    fn test_compile_last_segment_placeholder() {
        let tokens = tokenize::<ProductParams>("p", "/{{sku}}/{{url_key}}.html").unwrap();
        let regex = compile("p", &tokens).unwrap();
        assert_eq!(regex.as_str(), r"^/([^/]+)/(?:.*/)?([^/]+)\.html$");

        let tokens = tokenize::<ProductParams>("p", "/{{sku}}-{{url_key}}.html").unwrap();
        let regex = compile("p", &tokens).unwrap();
        assert_eq!(regex.as_str(), r"^/([^/]+)\-([^/]+)\.html$");
    }

    #[test]
    fn test_leading_placeholder() {
        let tokens = tokenize::<ProductParams>("p", "/{{sku}}/{{url_key}}.html").unwrap();
        assert_eq!(leading_placeholder(&tokens), Some("sku"));

        let tokens = tokenize::<ProductParams>("p", "/p/{{sku}}.html").unwrap();
        assert_eq!(leading_placeholder(&tokens), None);
    }

    #[test]
    fn test_parse_without_leading_separator() {
        let template = PatternTemplate::<CategoryParams>::new("{{page}}.html/{{url_path}}.html").unwrap();
        let request = RequestPathInfo::new("/c").with_suffix("men/tops.html");
        let params = template.parse(Some(&request));
        assert_eq!(params.url_path.as_deref(), Some("men/tops"));
        assert_eq!(params.url_key.as_deref(), Some("tops"));
    }
}
