// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};

use crate::education;

// Coarse strength classification, ordered Weak < Medium < Strong
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrengthClass {
    Weak,
    Medium,
    Strong,
}

impl StrengthClass {
    // Map a 0-4 oracle score onto the three classes
    pub fn from_ordinal(score: u8) -> Self {
        match score {
            0 | 1 => StrengthClass::Weak,
            2 => StrengthClass::Medium,
            _ => StrengthClass::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthClass::Weak => "WEAK",
            StrengthClass::Medium => "MEDIUM",
            StrengthClass::Strong => "STRONG",
        }
    }
}

impl fmt::Display for StrengthClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// What the user sees after an analysis. Never carries the password itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthReport {
    pub strength: StrengthClass,
    pub advice: String,
}

impl StrengthReport {
    pub fn new(strength: StrengthClass) -> Self {
        Self {
            strength,
            advice: education::advice_for(strength).to_string(),
        }
    }
}

impl fmt::Display for StrengthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Strength: {}\n{}", self.strength, self.advice)
    }
}

// Output of the generate command
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub length: usize,
    pub report: StrengthReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_are_totally_ordered() {
        assert!(StrengthClass::Weak < StrengthClass::Medium);
        assert!(StrengthClass::Medium < StrengthClass::Strong);
        assert_eq!(StrengthClass::Strong.max(StrengthClass::Weak), StrengthClass::Strong);
    }

    #[test]
    fn ordinal_mapping() {
        assert_eq!(StrengthClass::from_ordinal(0), StrengthClass::Weak);
        assert_eq!(StrengthClass::from_ordinal(1), StrengthClass::Weak);
        assert_eq!(StrengthClass::from_ordinal(2), StrengthClass::Medium);
        assert_eq!(StrengthClass::from_ordinal(3), StrengthClass::Strong);
        assert_eq!(StrengthClass::from_ordinal(4), StrengthClass::Strong);
        assert_eq!(StrengthClass::from_ordinal(9), StrengthClass::Strong);
    }

    #[test]
    fn report_renders_label_then_advice() {
        let report = StrengthReport::new(StrengthClass::Strong);
        let text = report.to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Strength: STRONG"));
        assert_eq!(lines.next(), Some("Your password is STRONG. Well done!"));
    }

    #[test]
    fn report_serializes_lowercase_class() {
        let report = StrengthReport::new(StrengthClass::Medium);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["strength"], "medium");
        assert!(json["advice"].as_str().unwrap().starts_with("Your password is MEDIUM."));
        assert!(json.get("password").is_none());
    }
}
