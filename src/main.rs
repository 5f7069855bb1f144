use clap::Parser;
use std::error::Error;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

mod api;
mod cli;
mod core;
mod generators;
mod logging;
mod models;

use crate::cli::{Args, CliCommand};
use crate::cli::handlers;
use crate::core::config::Config;
use crate::core::vault::VaultStore;
use crate::models::GenerationOptions;

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before clap reads its env fallbacks
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let (mut config, config_warnings) = Config::load();
    if let Some(path) = &args.vault {
        config.vault_file = path.clone();
    }

    if let Err(e) = logging::init(&config) {
        eprintln!("⚠️ Failed to initialize logging: {}", e);
        for warning in &config_warnings {
            eprintln!("⚠️ {}", warning);
        }
    }
    for warning in &config_warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match run(args.command, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Option<CliCommand>, mut config: Config) -> Result<(), Box<dyn Error>> {
    let command = command.unwrap_or(CliCommand::Serve { port: None, address: None });

    match command {
        CliCommand::Serve { port, address } => {
            if let Some(port) = port {
                config.web_port = port;
            }
            if let Some(address) = address {
                config.web_address = address;
            }

            let vault = Arc::new(VaultStore::open(&config.vault_file)?);
            println!("🚀 Server running on http://{}:{}", config.web_address, config.web_port);
            api::start_server(vault, config).await?;
        }

        CliCommand::Generate {
            length,
            no_uppercase,
            no_numbers,
            no_symbols,
            exclude_similar,
            no_repeat,
            symbols,
            count,
        } => {
            let options = GenerationOptions {
                length: length.unwrap_or(config.default_password_length),
                include_uppercase: !no_uppercase,
                include_numbers: !no_numbers,
                include_symbols: !no_symbols,
                exclude_similar,
                no_repeat,
                custom_symbols: symbols,
            };

            for (password, strength) in handlers::handle_generate(&options, count)? {
                println!("{}  (Strength: {})", password, strength);
            }
        }

        CliCommand::List => {
            let vault = VaultStore::open(&config.vault_file)?;
            let rendered = handlers::render_vault(&handlers::handle_list(&vault)?);
            println!("{}", rendered.trim_end());
        }

        CliCommand::Add { category, password } => {
            let vault = VaultStore::open(&config.vault_file)?;
            if handlers::handle_add(&vault, &category, &password)? {
                println!("✅ Password saved successfully!");
            } else {
                println!("⚠️ Password already exists in this category.");
            }
        }

        CliCommand::Remove { category, password, yes } => {
            let vault = VaultStore::open(&config.vault_file)?;
            match handlers::handle_remove(&vault, &category, &password, yes)? {
                Some(_) => println!("✅ Password deleted successfully!"),
                None => println!("Cancelled."),
            }
        }

        CliCommand::Export { output } => {
            let vault = VaultStore::open(&config.vault_file)?;
            let document = handlers::handle_export(&vault, output.as_deref())?;
            match output {
                Some(path) => println!("✅ Exported vault to {}", path.display()),
                None => println!("{}", document),
            }
        }
    }

    Ok(())
}
