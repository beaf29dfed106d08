// src/generators/password.rs
use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset;

pub const DEFAULT_LENGTH: usize = 16;
pub const MIN_LENGTH: usize = 12;

pub struct PasswordGenerator {
    default_length: usize,
}

impl PasswordGenerator {
    pub fn new(default_length: usize) -> Self {
        PasswordGenerator { default_length: default_length.max(MIN_LENGTH) }
    }

    pub fn default_length(&self) -> usize {
        self.default_length
    }

    pub fn generate_password(&self, length: Option<usize>) -> String {
        generate(length.unwrap_or(self.default_length))
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH)
    }
}

/// Random password of `max(length, 12)` characters with at least one
/// uppercase letter, lowercase letter, digit and symbol.
pub fn generate(length: usize) -> String {
    generate_with(&mut rand::thread_rng(), length)
}

pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    let length = length.max(MIN_LENGTH);
    let all_chars = charset::union();

    let mut chars: Vec<u8> = Vec::with_capacity(length);

    // One from each class so the coverage guarantee holds after shuffling
    for class in [charset::UPPERCASE, charset::LOWERCASE, charset::DIGITS, charset::SYMBOLS] {
        chars.push(class[rng.gen_range(0..class.len())]);
    }
    chars.extend((0..length - 4).map(|_| all_chars[rng.gen_range(0..all_chars.len())]));

    chars.shuffle(rng);
    chars.into_iter().map(char::from).collect()
}
