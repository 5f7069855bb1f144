// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::models::{GenerationOptions, Strength};

// Vault requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct VaultEntryRequest {
    /// Category to store the password under
    #[serde(default)]
    pub category: Option<String>,
    /// Password string, stored verbatim
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human readable outcome
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error message (only present on client or server failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl MessageResponse {
    pub fn message(text: impl Into<String>) -> Self {
        Self { message: Some(text.into()), error: None }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { message: None, error: Some(text.into()) }
    }
}

// Generator requests and responses
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationRequest {
    /// Password length (defaults to the server's configured length)
    pub length: Option<usize>,
    /// Include uppercase letters (default: true)
    pub include_uppercase: Option<bool>,
    /// Include digits (default: true)
    pub include_numbers: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
    /// Drop easily confused characters `i l L I | o O 0` (default: false)
    pub exclude_similar: Option<bool>,
    /// Never use the same character twice (default: false)
    pub no_repeat: Option<bool>,
    /// Symbols to use instead of the default set
    pub custom_symbols: Option<String>,
}

impl PasswordGenerationRequest {
    pub fn into_options(self, default_length: usize) -> GenerationOptions {
        let defaults = GenerationOptions::default();
        GenerationOptions {
            length: self.length.unwrap_or(default_length),
            include_uppercase: self.include_uppercase.unwrap_or(defaults.include_uppercase),
            include_numbers: self.include_numbers.unwrap_or(defaults.include_numbers),
            include_symbols: self.include_symbols.unwrap_or(defaults.include_symbols),
            exclude_similar: self.exclude_similar.unwrap_or(defaults.exclude_similar),
            no_repeat: self.no_repeat.unwrap_or(defaults.no_repeat),
            custom_symbols: self.custom_symbols,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// The generated password
    pub password: String,
    /// Advisory strength label
    pub strength: Strength,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthRequest {
    /// Password to classify
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StrengthResponse {
    /// Advisory strength label
    pub strength: Strength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_deserialize_as_absent() {
        let req: VaultEntryRequest = serde_json::from_str(r#"{"category":"email"}"#).unwrap();
        assert_eq!(req.category.as_deref(), Some("email"));
        assert!(req.password.is_none());
    }

    #[test]
    fn message_response_omits_empty_fields() {
        let json = serde_json::to_string(&MessageResponse::message("ok")).unwrap();
        assert_eq!(json, r#"{"message":"ok"}"#);
    }

    #[test]
    fn generation_request_fills_defaults() {
        let req: PasswordGenerationRequest =
            serde_json::from_str(r#"{"include_symbols":false,"no_repeat":true}"#).unwrap();
        let options = req.into_options(16);
        assert_eq!(options.length, 16);
        assert!(options.include_uppercase);
        assert!(!options.include_symbols);
        assert!(options.no_repeat);
    }
}
