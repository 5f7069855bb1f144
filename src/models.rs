// src/models.rs
use serde::{Serialize, Deserialize};
use std::collections::BTreeMap;
use std::fmt;
use utoipa::ToSchema;

/// Category name -> passwords, in insertion order.
pub type VaultMap = BTreeMap<String, Vec<String>>;

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GenerationOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub exclude_similar: bool,
    pub no_repeat: bool,
    /// Replaces the default symbol set when non-empty
    pub custom_symbols: Option<String>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_uppercase: true,
            include_numbers: true,
            include_symbols: true,
            exclude_similar: false,
            no_repeat: false,
            custom_symbols: None,
        }
    }
}

/// Advisory strength label, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
pub enum Strength {
    #[serde(rename = "None")]
    None,
    #[serde(rename = "Very Weak")]
    VeryWeak,
    #[serde(rename = "Weak")]
    Weak,
    #[serde(rename = "Medium")]
    Medium,
    #[serde(rename = "Strong")]
    Strong,
    #[serde(rename = "Very Strong")]
    VeryStrong,
}

impl Strength {
    pub fn label(&self) -> &'static str {
        match self {
            Strength::None => "None",
            Strength::VeryWeak => "Very Weak",
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
            Strength::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
