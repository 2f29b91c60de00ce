mod commands;
mod output;
mod validation;
mod xml_output;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use lobbyview_api::{Client, ClientConfig};

use crate::commands::Context;
use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "lobbyview")]
#[command(about = "Query lobbying data from the LobbyView REST API")]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    output: OutputFormat,

    /// API token (falls back to LOBBYVIEW_TOKEN)
    #[arg(long, global = true)]
    token: Option<String>,

    /// API base URL (falls back to LOBBYVIEW_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Fetch every page instead of a single one
    #[arg(long, global = true)]
    all: bool,

    /// Stop after this many records (with --all)
    #[arg(long, global = true)]
    limit: Option<usize>,

    /// Skip the token check made before the first query
    #[arg(long, global = true)]
    no_connection_test: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List legislators
    Legislators(commands::legislators::LegislatorsArgs),
    /// List bills
    Bills(commands::bills::BillsArgs),
    /// List lobbying clients
    Clients(commands::clients::ClientsArgs),
    /// List quarterly lobbying reports
    Reports(commands::reports::ReportsArgs),
    /// List issues lobbied on within reports
    Issues(commands::reports::IssuesArgs),
    /// List client-legislator networks by year
    Networks(commands::networks::NetworksArgs),
    /// Search issue texts
    Texts(commands::reports::TextsArgs),
    /// List client-legislator networks by quarter (restricted)
    QuarterLevelNetworks(commands::networks::QuarterLevelNetworksArgs),
    /// List bill-client networks (restricted)
    BillClientNetworks(commands::networks::BillClientNetworksArgs),
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("lobbyview=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let Some(token) = cli
        .token
        .clone()
        .or_else(|| std::env::var("LOBBYVIEW_TOKEN").ok())
        .filter(|t| !t.trim().is_empty())
    else {
        bail!("no API token: pass --token or set LOBBYVIEW_TOKEN");
    };

    let mut config = ClientConfig::from_env();
    if let Some(ref base_url) = cli.base_url {
        config = config.with_base_url(base_url.as_str());
    }
    if cli.no_connection_test {
        config = config.with_test_connection(false);
    }
    let client = Client::with_config(token, config)?;

    let ctx = Context {
        client: &client,
        format: cli.output,
        all: cli.all,
        limit: cli.limit,
    };

    match &cli.command {
        Commands::Legislators(args) => commands::legislators::run(args, &ctx)?,
        Commands::Bills(args) => commands::bills::run(args, &ctx)?,
        Commands::Clients(args) => commands::clients::run(args, &ctx)?,
        Commands::Reports(args) => commands::reports::run_reports(args, &ctx)?,
        Commands::Issues(args) => commands::reports::run_issues(args, &ctx)?,
        Commands::Networks(args) => commands::networks::run_networks(args, &ctx)?,
        Commands::Texts(args) => commands::reports::run_texts(args, &ctx)?,
        Commands::QuarterLevelNetworks(args) => {
            commands::networks::run_quarter_level(args, &ctx)?
        }
        Commands::BillClientNetworks(args) => commands::networks::run_bill_client(args, &ctx)?,
    }

    Ok(())
}
