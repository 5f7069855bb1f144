use crate::models::GenerationOptions;
use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-_=+<>?/";

/// Characters that are easy to confuse with one another when read aloud or
/// printed in some fonts.
pub const SIMILAR_CHARACTERS: &str = "ilLI|oO0";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;

pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        PasswordGenerator
    }

    /// Generate a password using the operating system CSPRNG.
    pub fn generate_password(&self, options: &GenerationOptions) -> Result<String> {
        generate_with_rng(options, &mut OsRng)
    }
}

impl Default for PasswordGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the distinct set of characters eligible for `options`, in pool order.
///
/// Duplicates are collapsed deliberately: every distinct character is equally
/// likely, and no-repeat mode is bounded by the distinct count.
pub fn build_pool(options: &GenerationOptions) -> Vec<char> {
    let mut pool = String::from(LOWERCASE);

    if options.include_uppercase {
        pool.push_str(UPPERCASE);
    }
    if options.include_numbers {
        pool.push_str(NUMBERS);
    }
    if options.include_symbols {
        match options.custom_symbols.as_deref() {
            Some(symbols) if !symbols.is_empty() => pool.push_str(symbols),
            _ => pool.push_str(DEFAULT_SYMBOLS),
        }
    }

    let mut chars: Vec<char> = Vec::with_capacity(pool.len());
    for c in pool.chars() {
        if options.exclude_similar && SIMILAR_CHARACTERS.contains(c) {
            continue;
        }
        // Custom symbols may repeat letters already in the pool
        if !chars.contains(&c) {
            chars.push(c);
        }
    }
    chars
}

/// Generate a password drawing indices from `rng`.
pub fn generate_with_rng<R: Rng>(options: &GenerationOptions, rng: &mut R) -> Result<String> {
    if options.length == 0 {
        return Err(GeneratorError::InvalidConfiguration(
            "Password length must be at least 1".to_string(),
        ));
    }

    let mut pool = build_pool(options);
    if pool.is_empty() {
        return Err(GeneratorError::InvalidConfiguration(
            "Character pool is empty. Enable at least one character type.".to_string(),
        ));
    }

    if options.no_repeat {
        if options.length > pool.len() {
            return Err(GeneratorError::InvalidConfiguration(format!(
                "Cannot generate a password of length {} with no repeated characters. Only {} unique characters available from current selections.",
                options.length,
                pool.len()
            )));
        }

        let mut password = String::with_capacity(options.length);
        for _ in 0..options.length {
            let index = rng.gen_range(0..pool.len());
            password.push(pool.remove(index));
        }
        return Ok(password);
    }

    Ok((0..options.length)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect())
}
