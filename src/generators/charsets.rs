// src/generators/charsets.rs
//! Static character class tables used to build the generation alphabet.

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SPECIAL: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";
/// Printable Latin-1 supplement, U+00A1 to U+00FF without the soft hyphen.
pub const EXTENDED: &str = "¡¢£¤¥¦§¨©ª«¬®¯°±²³´µ¶·¸¹º»¼½¾¿ÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖ×ØÙÚÛÜÝÞßàáâãäåæçèéêëìíîïðñòóôõö÷øùúûüýþÿ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharsetKind {
    Lowercase,
    Uppercase,
    Numbers,
    Special,
    Extended,
}

impl CharsetKind {
    /// Alphabet order: every enabled class is appended in this sequence.
    pub const ALL: [CharsetKind; 5] = [
        CharsetKind::Lowercase,
        CharsetKind::Uppercase,
        CharsetKind::Numbers,
        CharsetKind::Special,
        CharsetKind::Extended,
    ];

    pub fn chars(self) -> &'static str {
        match self {
            CharsetKind::Lowercase => LOWERCASE,
            CharsetKind::Uppercase => UPPERCASE,
            CharsetKind::Numbers => NUMBERS,
            CharsetKind::Special => SPECIAL,
            CharsetKind::Extended => EXTENDED,
        }
    }

    /// Whether `password` holds at least one character of this class.
    /// Letters and digits are matched by range, the rest by list membership.
    pub fn is_represented_in(self, password: &str) -> bool {
        match self {
            CharsetKind::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            CharsetKind::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            CharsetKind::Numbers => password.chars().any(|c| c.is_ascii_digit()),
            CharsetKind::Special | CharsetKind::Extended => {
                let list = self.chars();
                password.chars().any(|c| list.contains(c))
            }
        }
    }
}

impl std::fmt::Display for CharsetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharsetKind::Lowercase => write!(f, "lowercase"),
            CharsetKind::Uppercase => write!(f, "uppercase"),
            CharsetKind::Numbers => write!(f, "numbers"),
            CharsetKind::Special => write!(f, "special"),
            CharsetKind::Extended => write!(f, "extended"),
        }
    }
}
