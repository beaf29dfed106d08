// src/lib.rs
//! Password strength classification and strong password generation.
//!
//! [`strength::classify`] maps a password onto [`StrengthClass`] and
//! [`generators::generate`] produces passwords that always contain an
//! uppercase letter, a lowercase letter, a digit and a symbol.

pub mod charset;
pub mod config;
pub mod education;
pub mod generators;
pub mod models;
pub mod strength;

pub use models::{StrengthClass, StrengthReport};
