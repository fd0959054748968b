use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod generators;
mod i18n;
mod logging;
mod models;
mod ui;

use crate::cli::{Args, CliCommand, Context};
use crate::core::config::Config;
use crate::core::preferences::PreferencesStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();
    let config = Config::load();

    logging::init(&config)?;
    config.log_warnings();
    log::debug!("Command line args: {:?}", args);
    log::debug!("Loaded config: {:?}", config);

    let store = match &config.preferences_file {
        Some(path) => Some(PreferencesStore::new(path)),
        None => match PreferencesStore::default_location() {
            Ok(store) => Some(store),
            Err(e) => {
                log::warn!("Preferences will not be saved: {}", e);
                None
            }
        },
    };

    let ctx = Context::new(&args, config, store);

    match args.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::Generate(options) => cli::handlers::handle_generate(&ctx, &options)?,
        CliCommand::Interactive => {
            log::info!("Opening interactive form");
            tokio::task::spawn_blocking(move || cli::menu::run_form(ctx)).await??;
        }
        CliCommand::Serve { port, address } => {
            let port = port.unwrap_or(ctx.config.web_port);
            let address = address.unwrap_or_else(|| ctx.config.web_address.clone());
            let state = api::AppState::new(ctx.config.clone(), ctx.store.clone())
                .with_preferences(ctx.preferences);

            println!("🚀 API server listening on http://{}:{}", address, port);
            println!("📖 API docs at http://{}:{}/swagger-ui/", address, port);
            api::start_server(state, &address, port).await?;
            log::info!("API server shut down gracefully");
        }
        CliCommand::DarkMode { mode } => cli::handlers::handle_dark_mode(&ctx, mode)?,
        CliCommand::Language { locale } => cli::handlers::handle_language(&ctx, locale)?,
    }

    Ok(())
}
