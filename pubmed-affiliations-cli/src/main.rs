use anyhow::Result;
use clap::Parser;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(
    name = "get-papers-list",
    version,
    about = "List PubMed papers with pharmaceutical/biotech (or academic) authors",
    long_about = "Search PubMed, fetch the matching articles, and report every paper with at \
                  least one author from the selected kind of institution. Results go to a CSV \
                  file with --file, or to standard output as tab-separated rows."
)]
struct Cli {
    #[command(flatten)]
    search: commands::search::Search,

    /// Print debug information during execution
    #[arg(short, long)]
    debug: bool,

    /// API key for NCBI E-utilities (increases rate limit)
    #[arg(long, env = "NCBI_API_KEY")]
    api_key: Option<String>,

    /// Email for NCBI requests (recommended)
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// Tool name for NCBI requests
    #[arg(long, env = "NCBI_TOOL", default_value = "get-papers-list")]
    tool: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --debug
    let filter = if cli.debug { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(indicatif_layer.get_stderr_writer()),
        )
        .with(indicatif_layer)
        .with(env_filter)
        .init();

    cli.search
        .execute_with_config(cli.api_key.as_deref(), cli.email.as_deref(), &cli.tool)
        .await
}
