// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Analyze the strength of a password
    Check {
        /// Password to analyze (prompted for when omitted)
        password: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a strong password and analyze it
    Generate {
        /// Password length (minimum 12)
        #[arg(long, short)]
        length: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show tips for creating a good password
    Tips,
}
