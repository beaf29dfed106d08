// src/cli/menu.rs
use inquire::{InquireError, PasswordDisplayMode, Select, Text};

use passgauge::education;
use passgauge::generators::PasswordGenerator;
use passgauge::StrengthReport;

use super::handlers;
use super::{CliError, Result};

const ANALYZE: &str = "🔍  Analyze a password";
const GENERATE: &str = "🔐  Generate a password";
const TOGGLE: &str = "👁️  Show/hide typed password";
const SHOW_RESULT: &str = "📋  Show last result";
const TIPS: &str = "💡  Tips";
const FEEDBACK: &str = "✉️  Feedback";
const EXIT: &str = "❌  Exit";

// Menu state kept between actions
pub struct MenuState {
    pub display_mode: PasswordDisplayMode,
    pub last_report: Option<StrengthReport>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            display_mode: PasswordDisplayMode::Masked,
            last_report: None,
        }
    }

    pub fn toggle_visibility(&mut self) -> &'static str {
        self.display_mode = match self.display_mode {
            PasswordDisplayMode::Full => PasswordDisplayMode::Masked,
            _ => PasswordDisplayMode::Full,
        };
        match self.display_mode {
            PasswordDisplayMode::Full => "Typed passwords are now shown.",
            _ => "Typed passwords are now hidden.",
        }
    }

    // The text the result panel would put on the clipboard
    pub fn result_text(&self) -> Option<String> {
        self.last_report.as_ref().map(|report| report.to_string())
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn run_cli_menu(generator: &PasswordGenerator) -> Result<()> {
    println!("╔══════════════════════════════════════╗");
    println!("║      🔐 PASSGAUGE PASSWORD CHECK      ║");
    println!("╚══════════════════════════════════════╝");
    println!("{}\n", education::DEFAULT_ADVICE);

    let mut state = MenuState::new();

    loop {
        let options = vec![ANALYZE, GENERATE, TOGGLE, SHOW_RESULT, TIPS, FEEDBACK, EXIT];

        let selection = match Select::new("Choose an option:", options)
            .with_help_message("Use arrow keys to navigate, Enter to select. Esc to exit.")
            .prompt_skippable()
        {
            Ok(Some(selection)) => selection,
            Ok(None) => break,
            Err(InquireError::OperationInterrupted) | Err(InquireError::OperationCanceled) => break,
            Err(e) => return Err(e.into()),
        };

        match selection {
            ANALYZE => {
                let password = match handlers::prompt_password(state.display_mode) {
                    Ok(password) => password,
                    Err(CliError::PromptError(InquireError::OperationCanceled)) => continue,
                    Err(CliError::PromptError(InquireError::OperationInterrupted)) => break,
                    Err(e) => return Err(e),
                };
                match handlers::analyze(&password) {
                    Some(report) => {
                        println!("{}", handlers::render_report(&report));
                        println!("Analysis complete.");
                        state.last_report = Some(report);
                    }
                    None => println!("⚠️  {}", handlers::EMPTY_PASSWORD_WARNING),
                }
            }
            GENERATE => {
                let generated = handlers::generate_and_analyze(generator, None);
                println!("\nGenerated Password: {}", generated.password);
                println!("{}", handlers::render_report(&generated.report));
                println!("Password generated.");
                state.last_report = Some(generated.report);
            }
            TOGGLE => println!("{}", state.toggle_visibility()),
            SHOW_RESULT => match state.result_text() {
                Some(text) => println!("{}", text),
                None => println!("Nothing to show!"),
            },
            TIPS => println!("{}", education::TIPS),
            FEEDBACK => println!("{}", education::FEEDBACK),
            _ => break,
        }

        // Wait for user to press enter
        let _ = Text::new("Press enter to continue...").prompt();
    }

    log::info!("Menu closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use passgauge::StrengthClass;

    #[test]
    fn visibility_toggles_back_and_forth() {
        let mut state = MenuState::new();
        assert_eq!(state.display_mode, PasswordDisplayMode::Masked);
        state.toggle_visibility();
        assert_eq!(state.display_mode, PasswordDisplayMode::Full);
        state.toggle_visibility();
        assert_eq!(state.display_mode, PasswordDisplayMode::Masked);
    }

    #[test]
    fn result_text_follows_last_report() {
        let mut state = MenuState::new();
        assert!(state.result_text().is_none());
        state.last_report = Some(StrengthReport::new(StrengthClass::Weak));
        let text = state.result_text().unwrap();
        assert!(text.starts_with("Strength: WEAK\n"));
    }
}
