use anyhow::Context;
use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use rust_passgen::cli::{self, Args, CliCommand};
use rust_passgen::core::config::Config;
use rust_passgen::logging;
use rust_passgen::PasswordGenerator;

fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().context("Failed to load .env file")?;
    }

    let (config, warnings) = Config::load();
    logging::init(config.log_level, config.log_file.as_deref())
        .context("Failed to initialize logging")?;
    for warning in &warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let args = Args::parse();
    log::debug!("Command line args: {:?}", args);

    let generator = PasswordGenerator::with_max_attempts(
        args.max_attempts.unwrap_or(config.max_generation_attempts),
    );

    match &args.command {
        Some(CliCommand::Generate(generate)) => {
            // The handler already reported the error in the requested format
            if let Err(e) = cli::handlers::handle_generate(generate, &config, &generator, args.json) {
                log::debug!("Generation failed: {:?}", e);
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(CliCommand::Score { password }) => {
            cli::handlers::handle_score(password, args.json);
        }
        Some(CliCommand::Menu) | None => {
            cli::menu::run_cli_menu(&config, &generator)
                .map_err(|e| anyhow::anyhow!("CLI menu error: {}", e))?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
