// src/cli/mod.rs
use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

use passgauge::config;
use passgauge::strength::ScorerMode;

pub mod commands;
pub mod menu;
pub mod handlers;

pub use commands::CliCommand;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Prompt error: {0}")]
    PromptError(#[from] inquire::InquireError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Scoring backend: auto, heuristic or advanced
    #[arg(long, global = true)]
    pub scorer: Option<ScorerMode>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_parser = parse_log_level)]
    pub log_level: Option<LevelFilter>,

    /// Command to execute; the interactive menu runs when omitted
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

fn parse_log_level(level: &str) -> std::result::Result<LevelFilter, String> {
    config::parse_level(level).ok_or_else(|| format!("unknown log level '{}'", level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let args = Args::try_parse_from(["passgauge"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.scorer.is_none());
    }

    #[test]
    fn parses_check_with_password() {
        let args = Args::try_parse_from(["passgauge", "check", "Aa1!Aa1!", "--json"]).unwrap();
        match args.command {
            Some(CliCommand::Check { password, json }) => {
                assert_eq!(password.as_deref(), Some("Aa1!Aa1!"));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_generate_length_and_global_flags() {
        let args = Args::try_parse_from([
            "passgauge", "generate", "-l", "20", "--scorer", "heuristic", "--log-level", "debug",
        ])
        .unwrap();
        assert_eq!(args.scorer, Some(ScorerMode::Heuristic));
        assert_eq!(args.log_level, Some(LevelFilter::Debug));
        match args.command {
            Some(CliCommand::Generate { length, json }) => {
                assert_eq!(length, Some(20));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn errors_convert_from_prompt_and_json_failures() {
        let prompt: CliError = inquire::InquireError::OperationCanceled.into();
        assert!(matches!(prompt, CliError::PromptError(_)));
        assert!(prompt.to_string().starts_with("Prompt error:"));

        let json: CliError = serde_json::from_str::<serde_json::Value>("{").unwrap_err().into();
        assert!(matches!(json, CliError::JsonError(_)));
        assert!(json.to_string().starts_with("JSON error:"));
    }

    #[test]
    fn rejects_unknown_scorer() {
        assert!(Args::try_parse_from(["passgauge", "--scorer", "magic", "tips"]).is_err());
    }
}
