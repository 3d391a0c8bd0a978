//! Integration tests for template lookup and the configured provider

use std::sync::Arc;
use std::thread;

use catalog_url::{
    CategoryParams, Config, PathTemplate, PatternTemplate, ProductPageWithSku,
    ProductPageWithSkuAndUrlKey, ProductParams, ProductTemplate, RequestPathInfo, TemplateKind,
    TemplateRegistry, UrlConfig, UrlError, UrlProvider,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

// ============================================================================
// Lookup
// ============================================================================

#[rstest]
#[case("ProductPageWithSku")]
#[case("ProductPageWithUrlKey")]
#[case("ProductPageWithSkuAndUrlKey")]
#[case("ProductPageWithUrlPath")]
#[case("ProductPageWithSkuAndUrlPath")]
#[case("ProductPageWithCategoryAndUrlKey")]
fn test_product_lookup_by_name_and_pattern(#[case] name: &str) {
    let registry = TemplateRegistry::builtin();
    let by_name = registry.product_template(name).unwrap();
    assert_eq!(by_name.name(), name);

    let by_pattern = registry.product_template(by_name.pattern()).unwrap();
    assert_eq!(by_pattern.name(), name);
}

#[rstest]
#[case("CategoryPageWithUrlPath", "{{page}}.html/{{url_path}}.html")]
#[case("CategoryPageWithUrlKey", "{{page}}.html/{{url_key}}.html")]
fn test_category_lookup(#[case] name: &str, #[case] pattern: &str) {
    let registry = TemplateRegistry::builtin();
    assert_eq!(registry.category_template(name).unwrap().pattern(), pattern);
    assert_eq!(registry.category_template(pattern).unwrap().name(), name);
}

#[test]
fn test_lookup_trims_identifier() {
    let registry = TemplateRegistry::builtin();
    let template = registry.product_template("  ProductPageWithSku \n").unwrap();
    assert_eq!(template.name(), ProductPageWithSku::NAME);
}

#[test]
fn test_unknown_name() {
    let registry = TemplateRegistry::builtin();
    let err = registry.product_template("ProductPageWithColor").err().unwrap();
    assert_eq!(
        err,
        UrlError::UnknownTemplate {
            kind: TemplateKind::Product,
            name: "ProductPageWithColor".to_string(),
        }
    );
}

#[test]
fn test_kinds_are_separate() {
    let registry = TemplateRegistry::builtin();
    assert!(registry.category_template("ProductPageWithSku").is_err());
    assert!(registry.product_template("CategoryPageWithUrlKey").is_err());
}

#[test]
fn test_custom_pattern_compiled() {
    let registry = TemplateRegistry::builtin();
    let template = registry
        .product_template("{{page}}.html/p/{{sku}}.html")
        .unwrap();
    let params = ProductParams::new().with_page("/shop").with_sku("abc");
    assert_eq!(template.format(&params), "/shop.html/p/abc.html");
}

#[rstest]
#[case::missing_page("{{sku}}.html")]
#[case::unknown_placeholder("{{page}}.html/{{color}}.html")]
#[case::no_suffix_placeholder("{{page}}.html/static.html")]
fn test_invalid_pattern(#[case] pattern: &str) {
    let registry = TemplateRegistry::builtin();
    let err = registry.product_template(pattern).err().unwrap();
    assert!(matches!(err, UrlError::InvalidPattern { .. }), "{:?}", err);
}

#[test]
fn test_register_custom_template() {
    let mut registry = TemplateRegistry::empty();
    registry.register_product(Arc::new(ProductPageWithSku));
    assert_eq!(
        registry.product_names(),
        vec![(ProductPageWithSku::NAME, ProductPageWithSku::PATTERN)]
    );
    assert!(registry.product_template(ProductPageWithSku::PATTERN).is_ok());
    assert!(registry.category_names().is_empty());
}

#[test]
fn test_register_named_pattern() {
    let mut registry = TemplateRegistry::builtin();
    let template = PatternTemplate::<ProductParams>::new("{{page}}.html/p/{{sku}}.html")
        .unwrap()
        .with_name("ProductPageWithPrefixedSku");
    registry.register_product(Arc::new(template));

    let by_name = registry.product_template("ProductPageWithPrefixedSku").unwrap();
    assert_eq!(by_name.pattern(), "{{page}}.html/p/{{sku}}.html");
    assert!(registry
        .product_names()
        .contains(&("ProductPageWithPrefixedSku", "{{page}}.html/p/{{sku}}.html")));

    let params = ProductParams::new().with_page("/shop").with_sku("abc");
    assert_eq!(by_name.format(&params), "/shop.html/p/abc.html");
}

// ============================================================================
// Compiled Pattern Parsing
// ============================================================================

#[rstest]
#[case::sku_and_key("/abc/shirt.html")]
#[case::single_segment("/abc.html")]
#[case::nested_key("/abc/men/shirt.html")]
#[case::empty("/.html")]
fn test_compiled_pattern_parses_like_builtin(#[case] suffix: &str) {
    let registry = TemplateRegistry::builtin();
    let compiled = registry
        .product_template("{{page}}.html/{{sku}}/{{url_key}}.html")
        .unwrap();
    let request = RequestPathInfo::new("/page").with_suffix(suffix);

    assert_eq!(
        compiled.parse(Some(&request)),
        ProductPageWithSkuAndUrlKey.parse(Some(&request))
    );
}

#[test]
fn test_compiled_pattern_single_segment_goes_to_first_placeholder() {
    let registry = TemplateRegistry::builtin();
    let compiled = registry
        .product_template("{{page}}.html/{{sku}}/{{url_key}}.html")
        .unwrap();
    let request = RequestPathInfo::new("/page").with_suffix("/abc.html");

    assert_eq!(
        compiled.parse(Some(&request)),
        ProductParams::new().with_page("/page").with_sku("abc")
    );
}

#[test]
fn test_compiled_pattern_url_key_takes_last_segment() {
    let registry = TemplateRegistry::builtin();
    let compiled = registry.product_template("{{page}}.html/{{url_key}}.html").unwrap();
    let request = RequestPathInfo::new("/page").with_suffix("/men/shirt.html");

    assert_eq!(
        compiled.parse(Some(&request)),
        ProductParams::new().with_page("/page").with_url_key("shirt")
    );
}

#[test]
fn test_compiled_pattern_with_prefix_ignores_unmatched_segment() {
    let registry = TemplateRegistry::builtin();
    let compiled = registry.product_template("{{page}}.html/p/{{sku}}.html").unwrap();
    let request = RequestPathInfo::new("/page").with_suffix("/abc.html");

    assert_eq!(compiled.parse(Some(&request)), ProductParams::new().with_page("/page"));
}

// ============================================================================
// Sharing
// ============================================================================

#[test]
fn test_templates_shared_across_threads() {
    let template: ProductTemplate = TemplateRegistry::builtin()
        .product_template("ProductPageWithSkuAndUrlKey")
        .unwrap();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let template = Arc::clone(&template);
                scope.spawn(move || {
                    let params = ProductParams::new()
                        .with_page("/p")
                        .with_sku(format!("sku-{}", i))
                        .with_url_key("shirt");
                    let url = template.format(&params);
                    let parsed = template.parse(Some(&RequestPathInfo::from_url(&url)));
                    (url, parsed)
                })
            })
            .collect();

        for (i, handle) in handles.into_iter().enumerate() {
            let (url, parsed) = handle.join().unwrap();
            assert_eq!(url, format!("/p.html/sku-{}/shirt.html", i));
            assert_eq!(parsed.sku, Some(format!("sku-{}", i)));
        }
    });
}

// ============================================================================
// Provider
// ============================================================================

#[test]
fn test_provider_from_toml() {
    let config: Config = toml::from_str(
        r#"
        [urls]
        product_page_url_format = "ProductPageWithSkuAndUrlPath"
        category_page_url_format = "CategoryPageWithUrlKey"
        product_page = "/content/shop/product"
        category_page = "/content/shop/category"
        "#,
    )
    .unwrap();
    let provider = UrlProvider::new(&config.urls, &TemplateRegistry::builtin()).unwrap();

    let product = ProductParams::new()
        .with_sku("abc")
        .with_url_key("shirt")
        .with_url_rewrites(["men/shirt"]);
    assert_eq!(
        provider.product_url(&product),
        "/content/shop/product.html/abc/men/shirt.html"
    );

    let category = CategoryParams::new().with_url_path("men/tops");
    assert_eq!(
        provider.category_url(&category),
        "/content/shop/category.html/tops.html"
    );
}

#[test]
fn test_provider_canonical_urls_drop_unparsable_fields() {
    let config = UrlConfig {
        product_page_url_format: "ProductPageWithSku".to_string(),
        ..UrlConfig::default()
    };
    let provider = UrlProvider::new(&config, &TemplateRegistry::builtin()).unwrap();

    let params = ProductParams::new()
        .with_page("/p")
        .with_sku("abc")
        .with_url_key("shirt")
        .with_variant_sku(" ");
    assert_eq!(provider.canonical_product_url(&params), "/p.html/abc.html");
}

#[test]
fn test_provider_parses_with_configured_shapes() {
    let provider = UrlProvider::new(&UrlConfig::default(), &TemplateRegistry::builtin()).unwrap();

    let product = provider.parse_product(Some(&RequestPathInfo::from_url("/p.html/shirt.html")));
    assert_eq!(product, ProductParams::new().with_page("/p").with_url_key("shirt"));

    let category = provider.parse_category(Some(&RequestPathInfo::from_url("/c.html/men/tops.html")));
    assert_eq!(
        category,
        CategoryParams::new()
            .with_page("/c")
            .with_url_path("men/tops")
            .with_url_key("tops")
    );
    assert_eq!(provider.parse_category(None), CategoryParams::default());
}
