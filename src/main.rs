mod cli;

use std::fmt::Write as _;
use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use patreon_crawler::prelude::*;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut body = String::new();
    std::io::stdin()
        .read_to_string(&mut body)
        .context("failed to read response body from stdin")?;
    let page = parse_page(&body).context("failed to map page")?;

    match cli.command {
        Commands::Inspect { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                print!("{}", render_summary(&page)?);
            }
        }
        Commands::Urls => {
            for url in page.media_urls() {
                println!("{}", url);
            }
        }
    }
    Ok(())
}

// Logs go to stderr so stdout stays pipeable; RUST_LOG overrides the default level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn render_summary(page: &Page) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    for post in &page.posts {
        let access = if post.current_user_can_view { "viewable" } else { "locked" };
        writeln!(out, "{} {:?} [{}] {} media", post.id, post.title, access, post.media.len())?;
        for m in &post.media {
            writeln!(out, "    {}", m.url.as_deref().unwrap_or("-"))?;
        }
    }
    writeln!(out, "next: {}", page.cursor_next.as_deref().unwrap_or("-"))?;
    writeln!(out, "total: {}", page.total())?;
    Ok(out)
}
