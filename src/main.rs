use clap::Parser;
use spire::cli::commands::{Cli, Commands};
use spire::config::Config;
use spire::domain::entities::entry::Entry;
use spire::Spire;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("spire=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("spire=info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let spire = match Config::from_env().and_then(|config| Spire::new(&config)) {
        Ok(spire) => spire,
        Err(e) => {
            eprintln!("Error initializing spire: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(spire, cli.command).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(spire: Spire, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Add { content } => {
            let entry = spire.write(&content).await?;
            print_json(&entry)?;
        }
        Commands::List => {
            print_entries(&spire.entries()?)?;
        }
        Commands::Search { text } => {
            print_entries(&spire.search(&text)?)?;
        }
        Commands::Semantic { query } => {
            print_entries(&spire.semantic_search(&query).await?)?;
        }
    }
    Ok(())
}

fn print_entries(entries: &[Entry]) -> Result<(), serde_json::Error> {
    print_json(&entries)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
