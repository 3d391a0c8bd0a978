use anyhow::Result;
use catalog_url::{Config, TemplateRegistry};
use colored::Colorize;

pub fn execute(config: &Config) -> Result<()> {
    let registry = TemplateRegistry::builtin();

    println!("{}", "Product templates".green().bold());
    for (name, pattern) in registry.product_names() {
        print_entry(name, pattern, is_configured(name, pattern, &config.urls.product_page_url_format));
    }

    println!();
    println!("{}", "Category templates".green().bold());
    for (name, pattern) in registry.category_names() {
        print_entry(name, pattern, is_configured(name, pattern, &config.urls.category_page_url_format));
    }

    Ok(())
}

/// A template is configured by its name or by its pattern string
fn is_configured(name: &str, pattern: &str, format: &str) -> bool {
    let format = format.trim();
    format == name || format == pattern
}

fn print_entry(name: &str, pattern: &str, configured: bool) {
    let marker = if configured { "*".green().bold().to_string() } else { " ".to_string() };
    println!("{} {:<34} {}", marker, name.cyan(), pattern.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_by_name_or_pattern() {
        let name = "ProductPageWithSku";
        let pattern = "{{page}}.html/{{sku}}.html#{{variant_sku}}";
        assert!(is_configured(name, pattern, "ProductPageWithSku"));
        assert!(is_configured(name, pattern, " {{page}}.html/{{sku}}.html#{{variant_sku}} "));
        assert!(!is_configured(name, pattern, "ProductPageWithUrlKey"));
        assert!(!is_configured(name, pattern, "{{page}}.html/{{sku}}.html"));
    }
}
