// src/strength/patterns.rs
// Sliding-window predicates behind the heuristic's pattern penalties.
// Both return on the first matching window.

const WINDOW: usize = 3;

// Known-weak literals, matched case-insensitively and exactly
const COMMON_PASSWORDS: [&str; 21] = [
    "password", "123456", "12345678", "qwerty", "abc123",
    "monkey", "letmein", "iloveyou", "admin", "welcome",
    "1234567", "12345", "1234", "000000", "sunshine", "princess",
    "football", "charlie", "donald", "dragon", "qwertyuiop",
];

pub fn is_common_password(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| *common == lowered)
}

/// Three consecutive digits or letters forming a step-1 run, either direction
/// ("123", "321", "abc", "CbA").
pub fn has_sequential_chars(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(WINDOW).any(|w| {
        if let (Some(a), Some(b), Some(c)) = (w[0].to_digit(10), w[1].to_digit(10), w[2].to_digit(10)) {
            if is_step_run(a, b, c) {
                return true;
            }
        }
        if w.iter().all(|c| c.is_alphabetic()) {
            let (a, b, c) = (fold(w[0]), fold(w[1]), fold(w[2]));
            if is_step_run(a, b, c) {
                return true;
            }
        }
        false
    })
}

/// Three identical characters in a row.
pub fn has_repeated_chars(s: &str) -> bool {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(WINDOW).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn fold(c: char) -> u32 {
    c.to_lowercase().next().unwrap_or(c) as u32
}

fn is_step_run(a: u32, b: u32, c: u32) -> bool {
    let (a, b, c) = (i64::from(a), i64::from(b), i64::from(c));
    (a + 1 == b && b + 1 == c) || (a - 1 == b && b - 1 == c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn common_password_matches_ignore_case() {
        assert!(is_common_password("password"));
        assert!(is_common_password("PASSWORD"));
        assert!(is_common_password("PaSsWoRd"));
        assert!(is_common_password("QwertyUIOP"));
        assert!(!is_common_password("UniquePass123!"));
    }

    #[test]
    fn common_password_is_not_a_substring_match() {
        assert!(!is_common_password("password1"));
        assert!(!is_common_password("mypassword"));
        assert!(!is_common_password(""));
    }

    #[test]
    fn sequential_runs() {
        assert!(has_sequential_chars("abc"));
        assert!(has_sequential_chars("321"));
        assert!(has_sequential_chars("xxXYZxx"));
        assert!(has_sequential_chars("CbA"));
        assert!(has_sequential_chars("q9876"));
        assert!(!has_sequential_chars("a1b2c3"));
        assert!(!has_sequential_chars("135"));
        assert!(!has_sequential_chars("aab"));
    }

    #[test]
    fn sequential_requires_same_kind() {
        // '9' and ':' are adjacent code points but ':' is not a digit
        assert!(!has_sequential_chars("89:"));
        // 'z' to '{' likewise
        assert!(!has_sequential_chars("yz{"));
    }

    #[test]
    fn repeated_runs() {
        assert!(has_repeated_chars("aaa"));
        assert!(has_repeated_chars("xy!!!z"));
        assert!(has_repeated_chars("ééé"));
        assert!(!has_repeated_chars("ababab"));
        assert!(!has_repeated_chars("aabbcc"));
        // case-sensitive
        assert!(!has_repeated_chars("aAa"));
    }

    #[test]
    fn short_inputs_never_match() {
        for s in ["", "a", "12", "é€"] {
            assert!(!has_sequential_chars(s), "sequential on {s:?}");
            assert!(!has_repeated_chars(s), "repeated on {s:?}");
        }
    }
}
