// src/api/handlers/vault.rs

use actix_web::{http::header, web, HttpResponse};
use std::sync::Arc;
use crate::core::vault::{VaultError, VaultStore};
use crate::api::types::{MessageResponse, VaultEntryRequest};
use log::{info, warn, error};

/// Map a store failure onto the status and body the client expects.
fn vault_error_response(err: VaultError, action: &str) -> HttpResponse {
    match err {
        VaultError::Validation(msg) => HttpResponse::BadRequest().json(MessageResponse::error(msg)),
        VaultError::DuplicateEntry { .. } => HttpResponse::Conflict()
            .json(MessageResponse::message("Password already exists in this category.")),
        VaultError::NotFound(_) => HttpResponse::NotFound()
            .json(MessageResponse::message("Category or password not found.")),
        VaultError::Io(_) | VaultError::Serialization(_) => {
            error!("Failed to {}: {}", action, err);
            HttpResponse::InternalServerError()
                .json(MessageResponse::error(format!("Failed to {}", action)))
        }
    }
}

fn blocking_error_response(err: actix_web::error::BlockingError, action: &str) -> HttpResponse {
    error!("Blocking task failed while trying to {}: {}", action, err);
    HttpResponse::InternalServerError().json(MessageResponse::error(format!("Failed to {}", action)))
}

/// List the vault
///
/// Returns every category with its passwords in insertion order.
#[utoipa::path(
    get,
    path = "/api/vault",
    tag = "Vault",
    responses(
        (status = 200, description = "Category to password list mapping", body = std::collections::BTreeMap<String, Vec<String>>),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn list_vault(vault: web::Data<Arc<VaultStore>>) -> HttpResponse {
    let store = Arc::clone(vault.get_ref());

    match web::block(move || store.list()).await {
        Ok(Ok(map)) => HttpResponse::Ok().json(map),
        Ok(Err(e)) => vault_error_response(e, "load vault"),
        Err(e) => blocking_error_response(e, "load vault"),
    }
}

/// Save a password
///
/// Appends the password to its category, creating the category if needed.
#[utoipa::path(
    post,
    path = "/api/vault",
    tag = "Vault",
    request_body = VaultEntryRequest,
    responses(
        (status = 201, description = "Password saved", body = MessageResponse),
        (status = 400, description = "Category or password missing", body = MessageResponse),
        (status = 409, description = "Password already in this category", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn save_password(
    vault: web::Data<Arc<VaultStore>>,
    entry: web::Json<VaultEntryRequest>,
) -> HttpResponse {
    let store = Arc::clone(vault.get_ref());
    let VaultEntryRequest { category, password } = entry.into_inner();
    let category = category.unwrap_or_default();
    let password = password.unwrap_or_default();

    match web::block(move || store.add(&category, &password)).await {
        Ok(Ok(())) => HttpResponse::Created().json(MessageResponse::message("Password saved successfully!")),
        Ok(Err(e)) => {
            if matches!(e, VaultError::DuplicateEntry { .. }) {
                info!("Rejected duplicate password: {}", e);
            }
            vault_error_response(e, "save password")
        }
        Err(e) => blocking_error_response(e, "save password"),
    }
}

/// Delete a password
///
/// Removes every copy of the password from the category. The category is
/// dropped once it has no passwords left.
#[utoipa::path(
    delete,
    path = "/api/vault",
    tag = "Vault",
    request_body = VaultEntryRequest,
    responses(
        (status = 200, description = "Password deleted", body = MessageResponse),
        (status = 400, description = "Category or password missing", body = MessageResponse),
        (status = 404, description = "Category not found", body = MessageResponse),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn delete_password(
    vault: web::Data<Arc<VaultStore>>,
    entry: web::Json<VaultEntryRequest>,
) -> HttpResponse {
    let store = Arc::clone(vault.get_ref());
    let VaultEntryRequest { category, password } = entry.into_inner();
    let category = category.unwrap_or_default();
    let password = password.unwrap_or_default();

    match web::block(move || store.remove(&category, &password)).await {
        Ok(Ok(removed)) => {
            if removed == 0 {
                warn!("Delete matched no password, vault rewritten unchanged");
            }
            HttpResponse::Ok().json(MessageResponse::message("Password deleted successfully!"))
        }
        Ok(Err(e)) => vault_error_response(e, "delete password"),
        Err(e) => blocking_error_response(e, "delete password"),
    }
}

/// Export the vault
///
/// Downloads the vault as a pretty-printed JSON document.
#[utoipa::path(
    get,
    path = "/api/vault/export",
    tag = "Vault",
    responses(
        (status = 200, description = "Vault JSON attachment", body = String, content_type = "application/json"),
        (status = 500, description = "Storage failure", body = MessageResponse)
    )
)]
pub async fn export_vault(vault: web::Data<Arc<VaultStore>>) -> HttpResponse {
    let store = Arc::clone(vault.get_ref());

    match web::block(move || store.export()).await {
        Ok(Ok(document)) => HttpResponse::Ok()
            .content_type("application/json")
            .insert_header((
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"password-vault.json\"",
            ))
            .body(document),
        Ok(Err(e)) => vault_error_response(e, "export vault"),
        Err(e) => blocking_error_response(e, "export vault"),
    }
}
