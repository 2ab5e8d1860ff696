use clap::{Parser, Subcommand};

/// CLI for debugging page mapping against captured API responses
#[derive(Debug, Parser)]
#[command(name = "patreon-crawler")]
#[command(about = "Inspect Patreon post-listing responses read from stdin", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Summarize the posts, media and pagination of one page
    Inspect {
        /// Print the normalized page as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print every downloadable media url, one per line
    Urls,
}
