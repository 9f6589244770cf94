//! Turn a GPX route into a Google Maps directions link.

use anyhow::Result;
use clap::Parser;
use maplink_cli::{log_filter, render_json, render_text};
use maplink_core::{generate_link_from_file, LinkConfig, LinkMode};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build a length-limited directions link from a GPX route
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GPX file to read
    file: PathBuf,

    /// Maximum URL length (overrides MAPLINK_CHAR_LIMIT)
    #[arg(long)]
    char_limit: Option<usize>,

    /// Directions URL prefix (overrides MAPLINK_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Only use route waypoints, skip detailed path points
    #[arg(long)]
    basic: bool,

    /// Print the link and stats as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(std::env::var("RUST_LOG").ok().as_deref()))
        .init();

    let args = Args::parse();

    let mut config = LinkConfig::from_env();
    if let Some(limit) = args.char_limit {
        config = config.with_char_limit(limit);
    }
    if let Some(base_url) = args.base_url {
        config = config.with_base_url(base_url);
    }
    if args.basic {
        config = config.with_mode(LinkMode::Basic);
    }
    tracing::debug!("Reading {} with {:?}", args.file.display(), config);

    let link = match generate_link_from_file(&args.file, &config) {
        Ok(link) => link,
        Err(e) => {
            println!("Error: {}", e);
            return Ok(());
        }
    };

    if args.json {
        println!("{}", render_json(&link)?);
    } else {
        println!("{}", render_text(&link));
    }

    Ok(())
}
