// src/generators/mod.rs
pub mod charsets;
pub mod password;
pub mod random;

pub use charsets::CharsetKind;
pub use password::{count_active_charsets, total_length, GeneratorError, PasswordGenerator, DEFAULT_MAX_ATTEMPTS};
pub use random::RandomSource;
