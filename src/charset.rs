// src/charset.rs
// Character classes shared by the classifier and the generator

pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[{]}\\|;:'\",<.>/?`~";

/// Every character the generator may draw once the per-class seeds are placed.
pub fn union() -> Vec<u8> {
    let mut chars = Vec::with_capacity(UPPERCASE.len() + LOWERCASE.len() + DIGITS.len() + SYMBOLS.len());
    chars.extend_from_slice(UPPERCASE);
    chars.extend_from_slice(LOWERCASE);
    chars.extend_from_slice(DIGITS);
    chars.extend_from_slice(SYMBOLS);
    chars
}

pub fn is_symbol(c: char) -> bool {
    c.is_ascii() && SYMBOLS.contains(&(c as u8))
}
