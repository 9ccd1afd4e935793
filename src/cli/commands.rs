use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "spire", about = "Personal journal with text and semantic search")]
pub struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a journal entry
    Add {
        content: String,
    },
    /// List all entries, most recent first
    List,
    /// Substring search over entry content (empty text lists everything)
    Search {
        #[arg(default_value = "")]
        text: String,
    },
    /// Semantic (vector) search
    Semantic {
        query: String,
    },
}
