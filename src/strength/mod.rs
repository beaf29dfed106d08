// src/strength/mod.rs
use std::sync::OnceLock;

use crate::charset;
use crate::models::StrengthClass;

mod patterns;
pub mod scorer;

pub use patterns::{has_repeated_chars, has_sequential_chars, is_common_password};
pub use scorer::{Scorer, ScorerMode};

pub const MIN_LENGTH: usize = 8;

static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

pub struct Classifier {
    scorer: Box<dyn Scorer>,
}

impl Classifier {
    pub fn new(mode: ScorerMode) -> Self {
        Self::with_scorer(scorer::resolve(mode))
    }

    // Built-in heuristic only, regardless of build features
    pub fn heuristic() -> Self {
        Self::with_scorer(Box::new(scorer::HeuristicOnly))
    }

    pub fn with_scorer(scorer: Box<dyn Scorer>) -> Self {
        Self { scorer }
    }

    pub fn scorer_name(&self) -> &'static str {
        self.scorer.name()
    }

    pub fn classify(&self, password: &str) -> StrengthClass {
        if password.chars().count() < MIN_LENGTH {
            log::debug!("Classified by length check");
            return StrengthClass::Weak;
        }
        if is_common_password(password) {
            log::debug!("Classified by common-password list");
            return StrengthClass::Weak;
        }

        match self.scorer.score(password) {
            Some(score) => {
                log::debug!("Classified by {} scorer ({})", self.scorer.name(), score);
                StrengthClass::from_ordinal(score)
            }
            None => heuristic_class(password),
        }
    }
}

/// Install the process-wide classifier. Only the first call has an effect;
/// returns false if a classifier was already in place.
pub fn init(mode: ScorerMode) -> bool {
    let mut installed = false;
    let classifier = DEFAULT_CLASSIFIER.get_or_init(|| {
        installed = true;
        Classifier::new(mode)
    });
    if installed {
        log::info!("Strength scorer: {}", classifier.scorer_name());
    }
    installed
}

fn default_classifier() -> &'static Classifier {
    DEFAULT_CLASSIFIER.get_or_init(|| {
        let classifier = Classifier::new(ScorerMode::Auto);
        log::info!("Strength scorer: {}", classifier.scorer_name());
        classifier
    })
}

/// Classify with the process-wide classifier.
pub fn classify(password: &str) -> StrengthClass {
    default_classifier().classify(password)
}

// Score used when no advanced scorer is available
fn heuristic_score(password: &str) -> u32 {
    let mut score: i32 = 0;

    let length = password.chars().count();
    score += match length {
        0..=7 => 0,
        8..=11 => 1,
        12..=15 => 2,
        _ => 3,
    };

    if password.chars().any(char::is_uppercase) {
        score += 1;
    }
    if password.chars().any(char::is_lowercase) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(charset::is_symbol) {
        score += 1;
    }

    if has_sequential_chars(password) {
        score -= 1;
    }
    if has_repeated_chars(password) {
        score -= 1;
    }

    score.max(0) as u32
}

fn heuristic_class(password: &str) -> StrengthClass {
    let score = heuristic_score(password);
    log::debug!("Classified by heuristic ({})", score);
    match score {
        0..=3 => StrengthClass::Weak,
        4..=5 => StrengthClass::Medium,
        _ => StrengthClass::Strong,
    }
}
