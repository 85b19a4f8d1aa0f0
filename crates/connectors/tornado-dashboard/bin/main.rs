use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use query_engine_translation::translation::query::QueryName;
use tornado_dashboard::{query, routes, state};
use tornado_dashboard_configuration::environment::ProcessEnvironment;
use tornado_dashboard_configuration::{
    generate_latest_schema, make_runtime_configuration, parse_configuration,
    write_parsed_configuration, ParsedConfiguration,
};

/// Backend of the tornado dashboard: serves the dashboard pages and their data.
#[derive(Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    serve: ServeArgs,
    /// How log lines are written to stdout.
    #[arg(
        long,
        value_enum,
        env = "TORNADO_DASHBOARD_LOG_FORMAT",
        default_value_t = LogFormat::Pretty,
        global = true
    )]
    log_format: LogFormat,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP server. This is the default.
    Serve(ServeArgs),
    /// Write a default configuration and its JSON schema into a directory.
    Initialize {
        #[arg(long)]
        dir: PathBuf,
    },
    /// Print the JSON schema of the configuration file.
    PrintSchema,
    /// Print the SQL run by every endpoint, or by one of them.
    PrintSql {
        /// A query name such as `yearly-trend`, or an endpoint name such as `linechart_data`.
        #[arg(long)]
        query: Option<String>,
    },
}

#[derive(Args)]
struct ServeArgs {
    /// Directory holding `configuration.json`.
    #[arg(long, env = "TORNADO_DASHBOARD_CONFIGURATION_DIR", default_value = ".")]
    configuration_dir: PathBuf,
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: IpAddr,
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[tokio::main]
pub async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let result = match cli.command.unwrap_or(Command::Serve(cli.serve)) {
        Command::Serve(args) => serve(args).await,
        Command::Initialize { dir } => initialize(dir).await,
        Command::PrintSchema => print_schema(),
        Command::PrintSql { query } => print_sql(query.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!("{error:#}");
            ExitCode::FAILURE
        }
    }
}

/// Log to stdout, filtered by `RUST_LOG` (`info` when unset).
fn init_logging(format: LogFormat) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json())
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty())
                .init();
        }
    }
}

async fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let parsed_configuration = parse_configuration(&args.configuration_dir).await?;
    let configuration = make_runtime_configuration(parsed_configuration, ProcessEnvironment)?;

    let mut metrics_registry = prometheus::Registry::new();
    let state = state::create_state(&configuration, &mut metrics_registry).await?;

    // The pool is lazy, so a missing database only shows up here and on each request.
    if let Err(error) = state.queries.health_check().await {
        tracing::warn!(%error, "the database is not ready");
    }

    let router = routes::create_router(state);
    let address = SocketAddr::new(args.host, args.port);

    tracing::info!(%address, "starting server");
    axum::Server::bind(&address)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}

async fn initialize(dir: PathBuf) -> anyhow::Result<()> {
    write_parsed_configuration(ParsedConfiguration::initial(), &dir).await?;
    tracing::info!(dir = %dir.display(), "wrote the default configuration");
    Ok(())
}

fn print_schema() -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(&generate_latest_schema())?);
    Ok(())
}

fn print_sql(selected: Option<&str>) -> anyhow::Result<()> {
    let query_names: Vec<QueryName> = match selected {
        None => enum_iterator::all::<QueryName>().collect(),
        Some(name) => {
            let query_name = QueryName::from_name(name)
                .or_else(|| QueryName::from_endpoint(name))
                .ok_or_else(|| anyhow::anyhow!("unknown query: {name}"))?;
            vec![query_name]
        }
    };

    for query_name in query_names {
        let sql = query::query_sql(query_name)?;
        println!(
            "-- {query_name}: GET {}/{}",
            routes::API_PREFIX,
            query_name.endpoint()
        );
        println!(
            "{};\n",
            sqlformat::format(
                &sql,
                &sqlformat::QueryParams::None,
                sqlformat::FormatOptions::default()
            )
        );
    }
    Ok(())
}
