use clap::{Parser, Subcommand};
use search_dsl_cli::commands::{run_describe, run_format, run_kinds, run_validate};
use search_dsl_cli::config::CliConfig;
use search_dsl_cli::logging::init_tracing;
use starbase::{App, AppResult, AppSession};
use std::path::PathBuf;

/// search-dsl - validate, format and inspect search query DSL documents
#[derive(Parser)]
#[command(name = "search-dsl")]
#[command(about = "Validate, format and inspect search query DSL documents", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./search-dsl.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Decode a query document and report its root kind
    Validate {
        /// Path to the query JSON file (stdin when omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Decode a query document and print it in canonical form
    Format {
        /// Path to the query JSON file (stdin when omitted or `-`)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Indent the output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,
        /// Print the output on one line
        #[arg(long)]
        compact: bool,
    },
    /// List every query kind
    Kinds,
    /// Show the schema of a query kind's payload
    Describe {
        /// Query kind json key, e.g. `term` or `span_near`
        kind: String,
    },
}

/// Application session for the search-dsl CLI
#[derive(Clone)]
struct SearchDslSession {
    command: Commands,
    config: CliConfig,
}

#[async_trait::async_trait]
impl AppSession for SearchDslSession {
    async fn execute(&mut self) -> AppResult {
        match &self.command {
            Commands::Validate { input } => run_validate(input.clone(), &self.config),
            Commands::Format {
                input,
                output,
                pretty,
                compact,
            } => {
                let layout = match (*pretty, *compact) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };
                run_format(input.clone(), output.clone(), layout, &self.config)
            }
            Commands::Kinds => run_kinds(),
            Commands::Describe { kind } => run_describe(kind),
        }
    }
}

#[tokio::main]
async fn main() -> starbase::MainResult {
    let cli = Cli::parse();

    let working_dir = std::env::current_dir()
        .map_err(|e| miette::miette!("Failed to get current directory: {e}"))?;
    let config = CliConfig::resolve(cli.config.as_deref(), &working_dir)
        .map_err(|e| miette::miette!("{e:#}"))?;
    init_tracing(&config.logging).map_err(|e| miette::miette!("{e:#}"))?;
    tracing::debug!(
        config = ?cli.config,
        pretty = config.output.pretty,
        unwrap_query = config.output.unwrap_query,
        "configuration loaded"
    );

    let session = SearchDslSession {
        command: cli.command,
        config,
    };

    let exit_code = App::default()
        .run(
            session,
            |mut session| async move { session.execute().await },
        )
        .await?;

    Ok(std::process::ExitCode::from(exit_code))
}
