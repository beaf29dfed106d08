use anyhow::Context;
use clap::Parser;

use passgauge::config::{self, Config};
use passgauge::generators::PasswordGenerator;
use passgauge::strength;

mod cli;

use crate::cli::{Args, CliCommand};

fn main() -> anyhow::Result<()> {
    // Load environment variables
    let dotenv_loaded = dotenvy::dotenv().is_ok();

    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level.unwrap_or_else(config::log_level_from_env))
        .format_timestamp_secs()
        .format_module_path(true)
        .init();

    if dotenv_loaded {
        log::debug!("Loaded .env file");
    }

    let mut config = Config::load();
    if let Some(scorer) = args.scorer {
        config.scorer = scorer;
    }
    log::debug!("Loaded config: {:?}", config);

    strength::init(config.scorer);
    let generator = PasswordGenerator::new(config.default_password_length);

    match args.command {
        Some(CliCommand::Check { password, json }) => {
            cli::handlers::handle_check(password, json).context("check failed")?
        }
        Some(CliCommand::Generate { length, json }) => {
            cli::handlers::handle_generate(&generator, length, json).context("generate failed")?
        }
        Some(CliCommand::Tips) => cli::handlers::handle_tips()?,
        None => cli::menu::run_cli_menu(&generator).context("interactive menu failed")?,
    }

    Ok(())
}
