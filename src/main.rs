use clap::Parser;
use statistella::cli::{Cli, Commands};
use statistella::config::AppConfig;
use statistella::error::{Result, StatistellaError};

mod main_runtime;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_from(&cli.config)?;
    if let Commands::Serve { port, host } = &cli.command {
        if let Some(port) = port {
            config.server.port = *port;
        }
        if let Some(host) = host {
            config.server.host = host.clone();
        }
    }
    config.validate().map_err(StatistellaError::InvalidConfig)?;

    match &cli.command {
        Commands::Serve { .. } => {
            main_runtime::init_logging(&config.logging);
            main_runtime::run_serve(config).await?;
        }
        Commands::Report(args) => {
            main_runtime::init_logging_simple();
            main_runtime::run_report(&config, args)?;
        }
        Commands::Options { json } => {
            main_runtime::init_logging_simple();
            main_runtime::run_options(&config, *json)?;
        }
    }

    Ok(())
}
