//! hstok: search dashboard over the harga/stok material sheets.

use anyhow::anyhow;
use clap::{Parser, Subcommand};
use console::style;

use hargastok::config::{self, Settings};
use hargastok::feeds::{self, FeedClient};
use hargastok::models::Dataset;
use hargastok::search;
use hargastok::server;

#[derive(Parser)]
#[command(
    name = "hstok",
    version,
    about = "Search dashboard over the harga/stok material sheets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the dashboard web server
    Serve {
        /// Bind host
        #[arg(long, env = "HSTOK_HOST")]
        host: Option<String>,
        /// Bind port
        #[arg(long, env = "HSTOK_PORT")]
        port: Option<u16>,
    },
    /// Fetch a feed once and print the matching rows
    Search {
        /// Search term, matched against every column
        query: String,
        /// Dataset to search: harga or stok
        #[arg(long, default_value = "harga")]
        mode: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let settings = config::load_settings().await;
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let host = host.unwrap_or_else(|| settings.host.clone());
            let port = port.unwrap_or(settings.port);
            server::serve(settings, &host, port).await
        }
        Command::Search { query, mode } => run_search(settings, &mode, &query).await,
    }
}

/// One-shot terminal search: fetch, parse, match, print.
async fn run_search(settings: Settings, mode: &str, query: &str) -> anyhow::Result<()> {
    let dataset: Dataset = mode.parse().map_err(|err: String| anyhow!(err))?;

    let client = FeedClient::new(&settings);
    let text = client.fetch(dataset).await?;
    let table = feeds::parse_feed(dataset, &text)?;

    let matches = search::search(&table.rows, query, settings.min_query_length);
    println!(
        "{} match(es) for {} in {}",
        style(matches.len()).green().bold(),
        style(query).bold(),
        dataset
    );
    if matches.is_empty() {
        return Ok(());
    }

    println!("{}", style(table.headers.join(" | ")).dim());
    for row in matches {
        let line: Vec<&str> = table
            .headers
            .iter()
            .map(|header| row.get(header).map(String::as_str).unwrap_or("-"))
            .collect();
        println!("{}", line.join(" | "));
    }

    Ok(())
}
