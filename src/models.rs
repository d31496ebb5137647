// src/models.rs
use serde::{Serialize, Deserialize};

// How the password is split into delimited segments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartsOptions {
    /// Number of segments, must be at least 1
    pub amount: usize,
    /// Characters per segment
    pub length: usize,
    /// Inserted between segments, never after the last one
    pub delimiter: String,
}

impl Default for PartsOptions {
    fn default() -> Self {
        Self {
            amount: 1,
            length: 30,
            delimiter: "-".to_string(),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordGenerationOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub special: bool,
    pub extended: bool,
    pub parts: PartsOptions,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            special: true,
            extended: false,
            parts: PartsOptions::default(),
        }
    }
}

impl PasswordGenerationOptions {
    /// Number of enabled character classes (0 to 5).
    pub fn count_active_charsets(&self) -> usize {
        [
            self.lowercase,
            self.uppercase,
            self.numbers,
            self.special,
            self.extended,
        ]
        .iter()
        .filter(|enabled| **enabled)
        .count()
    }

    /// Full password length in characters, delimiters included, or `None`
    /// when it does not fit in a `usize`.
    pub fn checked_total_length(&self) -> Option<usize> {
        let PartsOptions { amount, length, delimiter } = &self.parts;
        let delimiters = amount.saturating_sub(1).checked_mul(delimiter.chars().count())?;
        amount.checked_mul(*length)?.checked_add(delimiters)
    }

    /// Full password length in characters, delimiters included. Saturates at
    /// `usize::MAX`.
    pub fn total_length(&self) -> usize {
        self.checked_total_length().unwrap_or(usize::MAX)
    }

    /// Characters drawn from the alphabet, i.e. the length without delimiters.
    pub fn drawn_length(&self) -> usize {
        self.parts.amount.saturating_mul(self.parts.length)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub value: String,
    /// Size of the alphabet the password was drawn from
    pub charset_length: usize,
}
