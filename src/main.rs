mod cli;
mod config;

use anyhow::{Error, Result};
use clap::Parser;
use cli::{ap_query, command, Cli, Commands};
use config::Config;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn run(cli: &Cli) -> Result<String> {
    let config = Config::resolve(cli.data_dir.clone(), cli.files.clone())?;

    match &cli.command {
        Commands::Kp { time } => command::kp(&config, *time).await,
        Commands::Ap {
            time,
            daily,
            window,
        } => command::ap(&config, *time, ap_query(*daily, window.as_deref())).await,
        Commands::Info {} => command::info(&config).await,
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
