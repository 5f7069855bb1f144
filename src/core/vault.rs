// src/core/vault.rs
use crate::models::VaultMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tempfile::NamedTempFile;
use thiserror::Error;
use log::{debug, info, warn, error};

#[derive(Debug, Error)]
pub enum VaultError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Password already exists in category '{category}'")]
    DuplicateEntry { category: String },

    #[error("Category not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, VaultError>;

/// Categorized passwords persisted as one JSON document.
///
/// Every operation reloads the file, and every mutation rewrites it whole.
/// The internal lock is held across the entire load-mutate-persist cycle so
/// concurrent callers cannot overwrite each other's changes.
pub struct VaultStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl VaultStore {
    /// Open the store at `path`, creating an empty vault file if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };

        if let Some(parent) = store.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        if !store.path.exists() {
            store.persist(&VaultMap::new())?;
            info!("Created empty vault at {}", store.path.display());
        }

        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn list(&self) -> Result<VaultMap> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let vault = self.load()?;
        debug!("Loaded vault with {} categories", vault.len());
        Ok(vault)
    }

    pub fn add(&self, category: &str, password: &str) -> Result<()> {
        let category = validate_entry(category, password)?;

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut vault = self.load()?;

        let entries = vault.entry(category.to_string()).or_default();
        if entries.iter().any(|p| p == password) {
            return Err(VaultError::DuplicateEntry { category: category.to_string() });
        }
        entries.push(password.to_string());

        self.persist(&vault)?;
        info!("Saved password to category '{}'", category);
        Ok(())
    }

    /// Remove every copy of `password` from `category`, returning how many
    /// entries were dropped. The file is rewritten even when none matched.
    pub fn remove(&self, category: &str, password: &str) -> Result<usize> {
        let category = validate_entry(category, password)?;

        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut vault = self.load()?;

        let entries = vault
            .get_mut(category)
            .ok_or_else(|| VaultError::NotFound(category.to_string()))?;

        let before = entries.len();
        entries.retain(|p| p != password);
        let removed = before - entries.len();

        if entries.is_empty() {
            vault.remove(category);
            info!("Category '{}' is empty, removing it", category);
        }

        self.persist(&vault)?;
        info!("Removed {} password(s) from category '{}'", removed, category);
        Ok(removed)
    }

    /// The vault as a pretty-printed JSON document.
    pub fn export(&self) -> Result<String> {
        let vault = self.list()?;
        Ok(serde_json::to_string_pretty(&vault)?)
    }

    // Callers must hold `self.lock`.
    fn load(&self) -> Result<VaultMap> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let vault = VaultMap::new();
                self.persist(&vault)?;
                info!("Vault file missing, initialized {}", self.path.display());
                return Ok(vault);
            }
            Err(e) => {
                error!("Failed to read vault file {}: {}", self.path.display(), e);
                return Err(e.into());
            }
        };

        match serde_json::from_str::<VaultMap>(&data) {
            Ok(mut vault) => {
                vault.retain(|_, passwords| !passwords.is_empty());
                Ok(vault)
            }
            Err(e) => {
                warn!(
                    "Vault file {} is corrupted ({}), resetting to an empty vault",
                    self.path.display(),
                    e
                );
                let vault = VaultMap::new();
                self.persist(&vault)?;
                Ok(vault)
            }
        }
    }

    // Callers must hold `self.lock`, except during `open`.
    fn persist(&self, vault: &VaultMap) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut temp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut temp, vault)?;
        temp.flush()?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| {
            error!("Failed to write vault file {}: {}", self.path.display(), e.error);
            VaultError::Io(e.error)
        })?;
        Ok(())
    }
}

/// Reject empty fields. A whitespace-only category counts as empty, but a
/// valid category is returned exactly as given.
pub fn validate_entry<'a>(category: &'a str, password: &str) -> Result<&'a str> {
    if category.trim().is_empty() || password.is_empty() {
        return Err(VaultError::Validation(
            "Category and password are required.".to_string(),
        ));
    }
    Ok(category)
}
