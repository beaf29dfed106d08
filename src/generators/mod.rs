// src/generators/mod.rs
mod password;

pub use password::{generate, generate_with, PasswordGenerator, DEFAULT_LENGTH, MIN_LENGTH};
