// src/strength/scorer.rs
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An optional oracle that rates a password on a 0-4 scale.
///
/// Returning `None` means the scorer has nothing to say about this input and
/// the classifier falls back to its own heuristic.
pub trait Scorer: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, password: &str) -> Option<u8>;
}

// Null implementation: the heuristic is always authoritative
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicOnly;

impl Scorer for HeuristicOnly {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn score(&self, _password: &str) -> Option<u8> {
        None
    }
}

#[cfg(feature = "advanced")]
#[derive(Debug, Default, Clone, Copy)]
pub struct ZxcvbnScorer;

#[cfg(feature = "advanced")]
impl Scorer for ZxcvbnScorer {
    fn name(&self) -> &'static str {
        "zxcvbn"
    }

    fn score(&self, password: &str) -> Option<u8> {
        match zxcvbn::zxcvbn(password, &[]) {
            Ok(entropy) => Some(entropy.score()),
            Err(e) => {
                log::debug!("zxcvbn could not score input: {}", e);
                None
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ScorerMode {
    #[default]
    Auto,
    Heuristic,
    Advanced,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown scorer '{0}' (expected auto, heuristic or advanced)")]
pub struct UnknownScorer(pub String);

impl FromStr for ScorerMode {
    type Err = UnknownScorer;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ScorerMode::Auto),
            "heuristic" | "builtin" => Ok(ScorerMode::Heuristic),
            "advanced" | "zxcvbn" => Ok(ScorerMode::Advanced),
            other => Err(UnknownScorer(other.to_string())),
        }
    }
}

impl fmt::Display for ScorerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScorerMode::Auto => write!(f, "auto"),
            ScorerMode::Heuristic => write!(f, "heuristic"),
            ScorerMode::Advanced => write!(f, "advanced"),
        }
    }
}

/// Whether an advanced scorer was compiled into this build.
pub fn advanced_available() -> bool {
    cfg!(feature = "advanced")
}

// Pick the scorer implementation for a mode. Called once per classifier.
pub fn resolve(mode: ScorerMode) -> Box<dyn Scorer> {
    match mode {
        ScorerMode::Heuristic => Box::new(HeuristicOnly),
        ScorerMode::Auto | ScorerMode::Advanced => {
            #[cfg(feature = "advanced")]
            {
                Box::new(ZxcvbnScorer)
            }
            #[cfg(not(feature = "advanced"))]
            {
                if mode == ScorerMode::Advanced {
                    log::warn!("Advanced scorer requested but not built in, using heuristic");
                }
                Box::new(HeuristicOnly)
            }
        }
    }
}
