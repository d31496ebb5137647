// src/generators/password.rs
use thiserror::Error;

use crate::generators::charsets::CharsetKind;
use crate::generators::random::RandomSource;
use crate::models::{GeneratedPassword, PasswordGenerationOptions};

/// Retry bound used when none is configured. Large enough that a realistic
/// configuration never reaches it.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1_000_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Cannot satisfy all enabled charset constraints within requested length ({available} characters for {required} charsets)")]
    Unsatisfiable { required: usize, available: usize },

    #[error("Password must have at least one part")]
    NoParts,

    #[error("No charset enabled, nothing to draw characters from")]
    EmptyAlphabet,

    #[error("Requested password length does not fit in memory")]
    TooLong,

    #[error("Gave up after {attempts} attempts without covering every enabled charset")]
    Exhausted { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Number of enabled character classes.
pub fn count_active_charsets(options: &PasswordGenerationOptions) -> usize {
    options.count_active_charsets()
}

/// Password length including delimiters.
pub fn total_length(options: &PasswordGenerationOptions) -> usize {
    options.total_length()
}

fn enabled_charsets(options: &PasswordGenerationOptions) -> Vec<CharsetKind> {
    CharsetKind::ALL
        .into_iter()
        .filter(|kind| match kind {
            CharsetKind::Lowercase => options.lowercase,
            CharsetKind::Uppercase => options.uppercase,
            CharsetKind::Numbers => options.numbers,
            CharsetKind::Special => options.special,
            CharsetKind::Extended => options.extended,
        })
        .collect()
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordGenerator {
    max_attempts: usize,
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Bound the coverage retry loop. A bound of zero is treated as one.
    pub fn with_max_attempts(max_attempts: usize) -> Self {
        PasswordGenerator {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generate a password whose parts are drawn from the union of the
    /// enabled charsets. Candidates that miss an enabled charset are thrown
    /// away and redrawn, up to the attempt bound.
    pub fn generate<R>(&self, options: &PasswordGenerationOptions, random: &mut R) -> Result<GeneratedPassword>
    where
        R: RandomSource + ?Sized,
    {
        if options.parts.amount == 0 {
            return Err(GeneratorError::NoParts);
        }

        let charsets = enabled_charsets(options);
        let alphabet: Vec<char> = charsets.iter().flat_map(|kind| kind.chars().chars()).collect();

        // Empty parts are a valid request whatever the enabled charsets
        if options.parts.length == 0 {
            return Ok(GeneratedPassword {
                value: String::new(),
                charset_length: alphabet.len(),
            });
        }

        let required = charsets.len();
        let available = options.checked_total_length().ok_or(GeneratorError::TooLong)?;
        if available < required {
            return Err(GeneratorError::Unsatisfiable { required, available });
        }

        if alphabet.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = draw_candidate(options, &alphabet, random);

            if let Some(missing) = charsets.iter().find(|kind| !kind.is_represented_in(&candidate)) {
                log::trace!("Attempt {} is missing a {} character, retrying", attempt, missing);
                continue;
            }

            log::debug!(
                "Generated {}-character password from {} characters in {} attempt(s)",
                available,
                alphabet.len(),
                attempt
            );
            return Ok(GeneratedPassword {
                value: candidate,
                charset_length: alphabet.len(),
            });
        }

        log::warn!("Password generation exhausted after {} attempts", self.max_attempts);
        Err(GeneratorError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}

fn draw_candidate<R>(options: &PasswordGenerationOptions, alphabet: &[char], random: &mut R) -> String
where
    R: RandomSource + ?Sized,
{
    let parts = &options.parts;
    let mut password = String::new();

    for part_index in 0..parts.amount {
        for _ in 0..parts.length {
            password.push(alphabet[random.next_index(alphabet.len())]);
        }

        // If this is not the last part, add the delimiter
        if part_index + 1 != parts.amount {
            password.push_str(&parts.delimiter);
        }
    }

    password
}
