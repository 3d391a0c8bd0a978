use anyhow::Result;
use catalog_url::path::non_blank;
use catalog_url::select_url_path;
use colored::Colorize;

pub fn execute(
    key: &str,
    url_path: Option<&str>,
    context_key: Option<&str>,
    context_path: Option<&str>,
    candidates: &[String],
) -> Result<()> {
    let selected = select_url_path(
        url_path,
        candidates.iter().map(Some),
        key,
        context_key,
        context_path,
    );

    if non_blank(url_path).is_none() && !candidates.iter().any(|c| c == &selected) {
        eprintln!("{}", format!("⚠ No candidate ends in '{}', using the key", key).yellow());
    }

    println!("{}", selected);
    Ok(())
}
