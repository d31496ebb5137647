// src/strength.rs
use std::collections::HashMap;

use serde::{Serialize, Deserialize};

/// Character class mix of a password, used for the diversity bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variations {
    pub digits: bool,
    pub lower: bool,
    pub upper: bool,
    pub non_words: bool,
}

impl Variations {
    pub fn of(password: &str) -> Self {
        Variations {
            digits: password.chars().any(|c| c.is_ascii_digit()),
            lower: password.chars().any(|c| c.is_ascii_lowercase()),
            upper: password.chars().any(|c| c.is_ascii_uppercase()),
            // Anything outside [A-Za-z0-9_]
            non_words: password.chars().any(|c| !(c.is_ascii_alphanumeric() || c == '_')),
        }
    }

    pub fn count(&self) -> i64 {
        [self.digits, self.lower, self.upper, self.non_words]
            .iter()
            .filter(|present| **present)
            .count() as i64
    }
}

/// Heuristic strength score.
///
/// Every character earns `5 / n` where `n` is how often that exact character
/// has appeared so far, so repeats are worth less each time. The number of
/// character classes present, minus one, is added on top and the sum is
/// truncated toward zero. The empty string scores 0. Characters are Unicode
/// scalar values, so an emoji counts once.
pub fn score_password(password: &str) -> i64 {
    if password.is_empty() {
        return 0;
    }

    let mut letters: HashMap<char, u32> = HashMap::new();
    let mut score = 0.0_f64;
    for c in password.chars() {
        let seen = letters.entry(c).or_insert(0);
        *seen += 1;
        score += 5.0 / f64::from(*seen);
    }

    score += (Variations::of(password).count() - 1) as f64;

    score.trunc() as i64
}

/// Estimated entropy in bits of `drawn_chars` uniform draws from an
/// alphabet of `charset_length` characters.
pub fn entropy_bits(drawn_chars: usize, charset_length: usize) -> f64 {
    if drawn_chars == 0 || charset_length == 0 {
        return 0.0;
    }
    drawn_chars as f64 * (charset_length as f64).log2()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s < 20 => StrengthLevel::VeryWeak,
            s if s < 40 => StrengthLevel::Weak,
            s if s < 60 => StrengthLevel::Moderate,
            s if s < 80 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLevel::VeryWeak => write!(f, "Very weak"),
            StrengthLevel::Weak => write!(f, "Weak"),
            StrengthLevel::Moderate => write!(f, "Moderate"),
            StrengthLevel::Strong => write!(f, "Strong"),
            StrengthLevel::VeryStrong => write!(f, "Very strong"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PasswordAnalysis {
    pub score: i64,
    pub strength: StrengthLevel,
    pub variations: Variations,
    pub feedback: Vec<String>,
}

/// Score a password and explain what would improve it.
pub fn analyze_password(password: &str) -> PasswordAnalysis {
    let score = score_password(password);
    let strength = StrengthLevel::from_score(score);
    let variations = Variations::of(password);
    let length = password.chars().count();

    let mut feedback = Vec::new();
    if !variations.lower {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !variations.upper {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !variations.digits {
        feedback.push("Add numbers for better security".to_string());
    }
    if !variations.non_words {
        feedback.push("Add symbols for better security".to_string());
    }
    if length < 12 {
        feedback.push("Increase password length to at least 12 characters".to_string());
    } else if length < 16 && strength < StrengthLevel::VeryStrong {
        feedback.push("For maximum security, consider increasing length to 16+ characters".to_string());
    }
    if let Some(message) = sequence_feedback(password) {
        feedback.push(message.to_string());
    }

    PasswordAnalysis {
        score,
        strength,
        variations,
        feedback,
    }
}

// Runs of three ascending letters ("abc") or digits ("123")
fn sequence_feedback(password: &str) -> Option<&'static str> {
    let chars: Vec<char> = password.chars().collect();
    for window in chars.windows(3) {
        let ascending = window
            .windows(2)
            .all(|pair| pair[1] as u32 == pair[0] as u32 + 1);
        if !ascending {
            continue;
        }
        if window.iter().all(|c| c.is_ascii_alphabetic()) {
            return Some("Avoid using consecutive letters (e.g., 'abc')");
        }
        if window.iter().all(|c| c.is_ascii_digit()) {
            return Some("Avoid using consecutive numbers (e.g., '123')");
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score_password(""), 0);
    }

    #[test]
    fn test_repeated_character() {
        // 5 + 2.5 + 1.666 + 1.25 + 1 = 11.41, plus (1 - 1)
        assert_eq!(score_password("aaaaa"), 11);
    }

    #[test]
    fn test_single_character_classes() {
        assert_eq!(score_password("a"), 5);
        // Non-ASCII letters are not word characters.
        assert_eq!(score_password("é"), 5);
        // Underscore is a word character, so no class at all: 5 - 1
        assert_eq!(score_password("_"), 4);
        assert_eq!(score_password("-"), 5);
    }

    #[test]
    fn test_astral_character_counts_once() {
        // One char, one repetition step: 5, plus the non-word class (1 - 1)
        assert_eq!(score_password("🦀"), 5);
        // 5 + 2.5
        assert_eq!(score_password("🦀🦀"), 7);
    }

    #[test]
    fn test_all_classes_bonus() {
        // Four distinct characters, one from each class: 20 + 3
        assert_eq!(score_password("aA1!"), 23);
    }

    #[test]
    fn test_case_sensitive_repetition() {
        // a, A, a: 5 + 5 + 2.5 = 12.5, plus (2 - 1)
        assert_eq!(score_password("aAa"), 13);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 5 + 2.5 + 1.666 = 9.166, plus 0
        assert_eq!(score_password("zzz"), 9);
    }

    #[test]
    fn test_permutation_keeps_diversity_term() {
        let password = "aab1B!";
        let permuted = "B!1baa";
        assert_eq!(Variations::of(password), Variations::of(permuted));
        assert_eq!(score_password(password), score_password(permuted));
    }

    #[test]
    fn test_idempotent() {
        let password = "Tr0ub4dor&3";
        assert_eq!(score_password(password), score_password(password));
    }

    #[test]
    fn test_entropy_bits() {
        assert_eq!(entropy_bits(0, 94), 0.0);
        assert_eq!(entropy_bits(10, 0), 0.0);
        assert!((entropy_bits(8, 2) - 8.0).abs() < 1e-9);
        assert!((entropy_bits(30, 94) - 196.64).abs() < 0.01);
    }

    #[test]
    fn test_strength_levels() {
        assert_eq!(StrengthLevel::from_score(-1), StrengthLevel::VeryWeak);
        assert_eq!(StrengthLevel::from_score(20), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(59), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Strong);
        assert_eq!(StrengthLevel::from_score(150), StrengthLevel::VeryStrong);
    }

    #[test]
    fn test_analysis_feedback() {
        let analysis = analyze_password("abc123");
        assert_eq!(analysis.score, score_password("abc123"));
        assert!(analysis.feedback.iter().any(|f| f.contains("uppercase")));
        assert!(analysis.feedback.iter().any(|f| f.contains("symbols")));
        assert!(analysis.feedback.iter().any(|f| f.contains("12 characters")));
        assert!(analysis.feedback.iter().any(|f| f.contains("consecutive letters")));
        assert!(!analysis.feedback.iter().any(|f| f.contains("lowercase")));
    }

    #[test]
    fn test_analysis_of_strong_password() {
        let analysis = analyze_password("q7#Kx!2vLp@9Zr$m4T");
        assert_eq!(analysis.strength, StrengthLevel::VeryStrong);
        assert!(analysis.feedback.is_empty());
    }
}
