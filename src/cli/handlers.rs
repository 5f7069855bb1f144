// src/cli/handlers.rs
use crate::core::vault::{VaultError, VaultStore};
use crate::generators::{analyze_strength, PasswordGenerator};
use crate::models::{GenerationOptions, Strength, VaultMap};
use std::error::Error;
use std::fs;
use std::path::Path;

// Handlers for CLI commands
pub fn handle_generate(
    options: &GenerationOptions,
    count: usize,
) -> Result<Vec<(String, Strength)>, Box<dyn Error>> {
    let generator = PasswordGenerator::new();
    let mut passwords = Vec::with_capacity(count);
    for _ in 0..count {
        let password = generator.generate_password(options)?;
        let strength = analyze_strength(&password);
        passwords.push((password, strength));
    }
    Ok(passwords)
}

pub fn handle_list(vault: &VaultStore) -> Result<VaultMap, Box<dyn Error>> {
    Ok(vault.list()?)
}

/// Returns `false` when the password was already stored in the category.
pub fn handle_add(vault: &VaultStore, category: &str, password: &str) -> Result<bool, Box<dyn Error>> {
    match vault.add(category, password) {
        Ok(()) => Ok(true),
        Err(VaultError::DuplicateEntry { .. }) => Ok(false),
        Err(e) => Err(Box::new(e)),
    }
}

/// Returns `None` when the user declined the confirmation prompt.
pub fn handle_remove(
    vault: &VaultStore,
    category: &str,
    password: &str,
    skip_confirm: bool,
) -> Result<Option<usize>, Box<dyn Error>> {
    if !skip_confirm {
        let confirmed = inquire::Confirm::new("Are you sure you want to delete this password?")
            .with_default(false)
            .prompt()?;
        if !confirmed {
            return Ok(None);
        }
    }

    Ok(Some(vault.remove(category, password)?))
}

pub fn handle_export(vault: &VaultStore, output: Option<&Path>) -> Result<String, Box<dyn Error>> {
    let document = vault.export()?;
    if let Some(path) = output {
        fs::write(path, &document)?;
    }
    Ok(document)
}

pub fn render_vault(vault: &VaultMap) -> String {
    if vault.is_empty() {
        return "Vault is empty.".to_string();
    }

    let mut out = String::new();
    for (category, passwords) in vault {
        out.push_str(&format!("📁 {} ({})\n", category, passwords.len()));
        for password in passwords {
            out.push_str(&format!("   {}\n", password));
        }
    }
    out
}
