// src/education/mod.rs
use crate::models::StrengthClass;

const WEAK_ADVICE: &str = "Your password is WEAK.\n\
Advice: use at least 12 characters, mix letters, digits and symbols, \
and avoid obvious sequences or repetitions.";

const MEDIUM_ADVICE: &str = "Your password is MEDIUM.\n\
Advice: add more special characters and increase the length to make it more robust.";

const STRONG_ADVICE: &str = "Your password is STRONG. Well done!";

// Shown before the first analysis
pub const DEFAULT_ADVICE: &str = r#"Tips for a good password:
- Use at least 12 characters
- Mix letters, digits and symbols
- Avoid obvious sequences"#;

pub const TIPS: &str = r#"# Tips for a good password

- Use at least 12 characters.
- Mix uppercase, lowercase, digits and symbols.
- Avoid obvious sequences (abc, 123) and repetitions (aaa).
- Don't use personal information.
- Consider using a password manager.
"#;

pub const FEEDBACK: &str = "For suggestions or feedback, please open an issue on the project tracker.";

/// Fixed advisory text for a classification.
pub fn advice_for(strength: StrengthClass) -> &'static str {
    match strength {
        StrengthClass::Weak => WEAK_ADVICE,
        StrengthClass::Medium => MEDIUM_ADVICE,
        StrengthClass::Strong => STRONG_ADVICE,
    }
}
