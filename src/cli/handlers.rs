// src/cli/handlers.rs
use console::style;
use inquire::{Password, PasswordDisplayMode};

use passgauge::generators::PasswordGenerator;
use passgauge::models::GeneratedPassword;
use passgauge::{education, strength, StrengthClass, StrengthReport};

use super::Result;

pub const EMPTY_PASSWORD_WARNING: &str = "Please enter a password.";

// Classify a candidate; empty input is refused before it reaches the classifier
pub fn analyze(password: &str) -> Option<StrengthReport> {
    if password.is_empty() {
        return None;
    }
    Some(StrengthReport::new(strength::classify(password)))
}

// Terminal rendering of a report, label coloured by class
pub fn render_report(report: &StrengthReport) -> String {
    let label = match report.strength {
        StrengthClass::Weak => style(report.strength.label()).red().bold(),
        StrengthClass::Medium => style(report.strength.label()).yellow().bold(),
        StrengthClass::Strong => style(report.strength.label()).green().bold(),
    };
    format!("Strength: {}\n{}", label, report.advice)
}

pub fn prompt_password(display_mode: PasswordDisplayMode) -> Result<String> {
    let password = Password::new("Enter your password:")
        .with_display_mode(display_mode)
        .without_confirmation()
        .prompt()?;
    Ok(password)
}

pub fn handle_check(password: Option<String>, json: bool) -> Result<()> {
    let password = match password {
        Some(password) => password,
        None => prompt_password(PasswordDisplayMode::Masked)?,
    };

    match analyze(&password) {
        Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
        Some(report) => println!("{}", render_report(&report)),
        None => eprintln!("⚠️  {}", EMPTY_PASSWORD_WARNING),
    }
    Ok(())
}

pub fn generate_and_analyze(generator: &PasswordGenerator, length: Option<usize>) -> GeneratedPassword {
    let password = generator.generate_password(length);
    log::debug!("Generated a {}-character password", password.len());
    let report = StrengthReport::new(strength::classify(&password));
    GeneratedPassword {
        length: password.len(),
        password,
        report,
    }
}

pub fn handle_generate(generator: &PasswordGenerator, length: Option<usize>, json: bool) -> Result<()> {
    let generated = generate_and_analyze(generator, length);
    if json {
        println!("{}", serde_json::to_string_pretty(&generated)?);
    } else {
        println!("Generated Password: {}", generated.password);
        println!("{}", render_report(&generated.report));
    }
    Ok(())
}

pub fn handle_tips() -> Result<()> {
    println!("{}", education::TIPS);
    Ok(())
}
