// src/lib.rs
//! Random password generation with per-charset coverage, and a heuristic
//! strength score.

pub mod cli;
pub mod core;
pub mod generators;
pub mod logging;
pub mod models;
pub mod strength;

pub use crate::generators::{count_active_charsets, total_length, GeneratorError, PasswordGenerator, RandomSource};
pub use crate::models::{GeneratedPassword, PartsOptions, PasswordGenerationOptions};
pub use crate::strength::score_password;
