mod commands;

use std::path::PathBuf;

use anyhow::Result;
use catalog_url::Config;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::format::ParamArgs;

#[derive(Parser)]
#[command(name = "catalog-url")]
#[command(version, about = "Catalog URL CLI - format, parse and disambiguate catalog links", long_about = None)]
struct Cli {
    /// Configuration file (default: ./catalog-url.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log template resolution and rewrite selection
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a link from parameters
    Format {
        /// Kind of link to render
        kind: LinkKind,

        /// Template name or pattern (default: the configured one)
        #[arg(short, long)]
        template: Option<String>,

        #[command(flatten)]
        params: ParamArgs,
    },

    /// Parse a link back into parameters, printed as JSON
    Parse {
        /// Kind of link to parse
        kind: LinkKind,

        /// Template name or pattern (default: the configured one)
        #[arg(short, long)]
        template: Option<String>,

        /// Link to parse, e.g. /content/shop/product.html/abc/shirt.html#abc-red
        url: String,
    },

    /// Pick the url rewrite a product link should use
    Select {
        /// Product url key the rewrites must end in
        #[arg(short, long)]
        key: String,

        /// Explicit url path, returned as is when set
        #[arg(long)]
        url_path: Option<String>,

        /// Url key of the category the link is rendered in
        #[arg(long)]
        context_key: Option<String>,

        /// Url path of the category the link is rendered in
        #[arg(long)]
        context_path: Option<String>,

        /// Candidate url rewrites
        candidates: Vec<String>,
    },

    /// List registered templates
    Templates,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LinkKind {
    /// Product page link
    Product,
    /// Category page link
    Category,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default()?,
    };

    // Execute command
    match cli.command {
        Commands::Format { kind, template, params } => {
            commands::format::execute(&config, kind, template.as_deref(), &params)?;
        }
        Commands::Parse { kind, template, url } => {
            commands::parse::execute(&config, kind, template.as_deref(), &url)?;
        }
        Commands::Select {
            key,
            url_path,
            context_key,
            context_path,
            candidates,
        } => {
            commands::select::execute(
                &key,
                url_path.as_deref(),
                context_key.as_deref(),
                context_path.as_deref(),
                &candidates,
            )?;
        }
        Commands::Templates => {
            commands::templates::execute(&config)?;
        }
    }

    Ok(())
}

/// Logs go to stderr so command output stays pipeable
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
