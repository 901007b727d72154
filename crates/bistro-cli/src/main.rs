//! CLI entry point.
//!
//! Parses arguments, sets up logging, bootstraps the context and
//! dispatches to a handler. Errors are printed and mapped to exit codes.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use bistro_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

#[tokio::main]
async fn main() {
    // Load environment variables before clap reads `env = ...` defaults
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {err:#}");
        let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
        std::process::exit(code);
    }
}

/// Logs go to stderr so they never interleave with prompts on stdout.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Order(args) => {
            let ctx = bootstrap(CliConfig::from_order_args(&args)?)?;
            handlers::order::execute(&ctx).await?;
        }
        Commands::Menu(args) => {
            let ctx = bootstrap(CliConfig::from_server_args(&args)?)?;
            handlers::menu::execute(&ctx).await?;
        }
    }

    Ok(())
}
