// src/api/mod.rs
use actix_web::{error, web, App, HttpResponse, HttpServer};
use actix_cors::Cors;
use std::sync::Arc;
use crate::core::config::Config;
use crate::core::vault::VaultStore;
use crate::api::types::MessageResponse;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use utoipa_redoc::{Redoc, Servable};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Vault endpoints
        crate::api::handlers::vault::list_vault,
        crate::api::handlers::vault::save_password,
        crate::api::handlers::vault::delete_password,
        crate::api::handlers::vault::export_vault,

        // Generator endpoints
        crate::api::handlers::generator::generate_password,
        crate::api::handlers::generator::check_strength
    ),
    components(
        schemas(
            crate::api::types::VaultEntryRequest,
            crate::api::types::MessageResponse,
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::StrengthRequest,
            crate::api::types::StrengthResponse,
            crate::models::GenerationOptions,
            crate::models::Strength
        )
    ),
    tags(
        (name = "Vault", description = "Categorized password storage"),
        (name = "Generator", description = "Password generation and strength hints")
    ),
    info(
        title = "PassGen Vault API",
        version = "0.1.0",
        description = "Password generator with a JSON-file backed vault",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Malformed or mistyped JSON bodies get the same `{error}` shape as every
/// other client failure.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("Rejected request body: {}", err);
        let response = HttpResponse::BadRequest().json(MessageResponse::error(err.to_string()));
        error::InternalError::from_response(err, response).into()
    })
}

/// Register shared state and API routes. Used by the server and by tests.
pub fn configure_app(cfg: &mut web::ServiceConfig, vault: Arc<VaultStore>, config: Config) {
    cfg.app_data(web::Data::new(vault))
        .app_data(web::Data::new(config))
        .app_data(json_config())
        .configure(routes::configure_routes);
}

pub async fn start_server(vault: Arc<VaultStore>, config: Config) -> std::io::Result<()> {
    let (address, port) = config.bind_address();
    log::info!("Starting vault API server on http://{}:{}", address, port);
    log::info!("Vault file: {}", vault.path().display());

    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "DELETE"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        let vault = Arc::clone(&vault);
        let config = config.clone();

        App::new()
            .wrap(cors)
            .wrap(actix_web::middleware::Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone())
            )
            .service(Redoc::with_url("/redoc", openapi.clone()))
            .configure(move |cfg| configure_app(cfg, vault, config))
    })
    .bind((address.as_str(), port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use crate::api::types::{PasswordGenerationResponse, StrengthResponse};
    use crate::models::{Strength, VaultMap};
    use serde_json::json;
    use tempfile::TempDir;

    fn vault_store() -> (TempDir, Arc<VaultStore>) {
        let dir = TempDir::new().unwrap();
        let store = VaultStore::open(dir.path().join("vault.json")).unwrap();
        (dir, Arc::new(store))
    }

    macro_rules! app {
        ($vault:expr) => {
            actix_test::init_service(
                App::new().configure(|cfg| configure_app(cfg, Arc::clone(&$vault), Config::default())),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn empty_vault_lists_as_empty_object() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        let req = actix_test::TestRequest::get().uri("/api/vault").to_request();
        let body: VaultMap = actix_test::call_and_read_body_json(&app, req).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn add_duplicate_remove_round_trip() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);
        let entry = json!({"category": "email", "password": "Xy7!kLmQ"});

        let req = actix_test::TestRequest::post().uri("/api/vault").set_json(&entry).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({"message": "Password saved successfully!"}));

        let req = actix_test::TestRequest::get().uri("/api/vault").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"email": ["Xy7!kLmQ"]}));

        let req = actix_test::TestRequest::post().uri("/api/vault").set_json(&entry).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(body["message"].is_string());
        assert_eq!(vault.list().unwrap()["email"].len(), 1);

        let req = actix_test::TestRequest::delete().uri("/api/vault").set_json(&entry).to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = actix_test::TestRequest::get().uri("/api/vault").to_request();
        let body: serde_json::Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn missing_or_empty_fields_are_bad_requests() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        for body in [
            json!({"category": "email"}),
            json!({"password": "pw"}),
            json!({"category": "", "password": "pw"}),
            json!({"category": "email", "password": ""}),
            json!({}),
        ] {
            let req = actix_test::TestRequest::post().uri("/api/vault").set_json(&body).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "POST {}", body);
            let payload: serde_json::Value = actix_test::read_body_json(resp).await;
            assert!(payload["error"].is_string());

            let req = actix_test::TestRequest::delete().uri("/api/vault").set_json(&body).to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "DELETE {}", body);
        }

        assert!(vault.list().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn unreadable_vault_is_a_server_error() {
        let (_dir, vault) = vault_store();
        std::fs::remove_file(vault.path()).unwrap();
        std::fs::create_dir(vault.path()).unwrap();
        let app = app!(vault);
        let entry = json!({"category": "email", "password": "pw"});

        let requests = [
            actix_test::TestRequest::get().uri("/api/vault").to_request(),
            actix_test::TestRequest::post().uri("/api/vault").set_json(&entry).to_request(),
            actix_test::TestRequest::delete().uri("/api/vault").set_json(&entry).to_request(),
        ];
        for req in requests {
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
            let payload: serde_json::Value = actix_test::read_body_json(resp).await;
            assert!(payload["error"].is_string());
            assert!(payload.get("message").is_none());
        }

        assert!(vault.path().is_dir());
    }

    #[actix_web::test]
    async fn malformed_json_is_a_bad_request() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        let req = actix_test::TestRequest::post()
            .uri("/api/vault")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let payload: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(payload["error"].is_string());
    }

    #[actix_web::test]
    async fn delete_from_unknown_category_is_not_found() {
        let (_dir, vault) = vault_store();
        vault.add("email", "pw").unwrap();
        let before = std::fs::read_to_string(vault.path()).unwrap();
        let app = app!(vault);

        let req = actix_test::TestRequest::delete()
            .uri("/api/vault")
            .set_json(json!({"category": "bank", "password": "pw"}))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let payload: serde_json::Value = actix_test::read_body_json(resp).await;
        assert!(payload["message"].is_string());
        assert_eq!(std::fs::read_to_string(vault.path()).unwrap(), before);
    }

    #[actix_web::test]
    async fn corrupted_vault_lists_as_empty() {
        let (_dir, vault) = vault_store();
        std::fs::write(vault.path(), "garbage").unwrap();
        let app = app!(vault);

        let req = actix_test::TestRequest::get().uri("/api/vault").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = actix_test::read_body_json(resp).await;
        assert_eq!(body, json!({}));
    }

    #[actix_web::test]
    async fn export_is_a_json_attachment() {
        let (_dir, vault) = vault_store();
        vault.add("email", "pw").unwrap();
        let app = app!(vault);

        let req = actix_test::TestRequest::get().uri("/api/vault/export").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let disposition = resp
            .headers()
            .get(actix_web::http::header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("password-vault.json"));
        let body = actix_test::read_body(resp).await;
        assert_eq!(body, "{\n  \"email\": [\n    \"pw\"\n  ]\n}");
    }

    #[actix_web::test]
    async fn generates_password_with_defaults() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        let req = actix_test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({}))
            .to_request();
        let body: PasswordGenerationResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.password.chars().count(), Config::default().default_password_length);
    }

    #[actix_web::test]
    async fn generated_password_respects_exclusions() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        let req = actix_test::TestRequest::post()
            .uri("/api/generator/password")
            .set_json(json!({"length": 12, "exclude_similar": true}))
            .to_request();
        let body: PasswordGenerationResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.password.chars().count(), 12);
        assert!(body.password.chars().all(|c| !"ilLI|oO0".contains(c)));
    }

    #[actix_web::test]
    async fn invalid_generation_requests_are_rejected() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        for body in [
            json!({"length": 0}),
            json!({"length": 100, "no_repeat": true}),
            json!({"length": 10_000}),
        ] {
            let req = actix_test::TestRequest::post()
                .uri("/api/generator/password")
                .set_json(&body)
                .to_request();
            let resp = actix_test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", body);
        }
    }

    #[actix_web::test]
    async fn strength_endpoint_classifies() {
        let (_dir, vault) = vault_store();
        let app = app!(vault);

        let req = actix_test::TestRequest::post()
            .uri("/api/generator/strength")
            .set_json(json!({"password": "Xy7!kLmQ"}))
            .to_request();
        let body: StrengthResponse = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body.strength, Strength::VeryStrong);
    }

    #[test]
    fn openapi_lists_vault_and_generator_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/vault"));
        assert!(doc.paths.paths.contains_key("/api/vault/export"));
        assert!(doc.paths.paths.contains_key("/api/generator/password"));
    }
}
