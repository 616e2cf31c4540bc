mod api;
mod app;
mod cli;
mod config;
mod domain;
mod infrastructure;
mod render;
mod session;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use infrastructure::{directories, logging, shutdown};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = config::load_config()?;
    if let Some(raw) = cli.api_url.as_deref() {
        config.api.base_url = Some(config::parse_base_url(raw)?);
    }
    let paths = directories::ensure_directories(&config.directories)?;
    logging::init_tracing(&config, &paths)?;

    if cli.no_color {
        render::set_color_enabled(false);
    }

    let shutdown = shutdown::Shutdown::new();
    shutdown::install_signal_handlers(shutdown.clone());

    let app = app::ToxiGuardApp::initialize(config)?;
    app.run(cli.command.unwrap_or(Command::Interactive), &shutdown)
        .await
}
