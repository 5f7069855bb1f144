// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::core::config::Config;
use crate::generators::{analyze_strength, GeneratorError, PasswordGenerator};
use crate::api::types::{
    MessageResponse, PasswordGenerationRequest, PasswordGenerationResponse,
    StrengthRequest, StrengthResponse,
};
use log::debug;

/// Generate a password
///
/// Generates a password from the supplied options. Absent options fall back
/// to the defaults.
#[utoipa::path(
    post,
    path = "/api/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid configuration", body = MessageResponse)
    )
)]
pub async fn generate_password(
    config: web::Data<Config>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let options = generation_req.into_inner().into_options(config.default_password_length);

    if options.length > config.max_password_length {
        return HttpResponse::BadRequest().json(MessageResponse::error(format!(
            "Password length must be at most {} characters",
            config.max_password_length
        )));
    }

    match PasswordGenerator::new().generate_password(&options) {
        Ok(password) => {
            let strength = analyze_strength(&password);
            debug!("Generated {}-character password ({})", options.length, strength);
            HttpResponse::Ok().json(PasswordGenerationResponse { password, strength })
        }
        Err(GeneratorError::InvalidConfiguration(msg)) => {
            HttpResponse::BadRequest().json(MessageResponse::error(msg))
        }
    }
}

/// Classify password strength
///
/// Advisory only: counts length, uppercase, digit and symbol predicates.
#[utoipa::path(
    post,
    path = "/api/generator/strength",
    tag = "Generator",
    request_body = StrengthRequest,
    responses(
        (status = 200, description = "Strength label", body = StrengthResponse)
    )
)]
pub async fn check_strength(strength_req: web::Json<StrengthRequest>) -> HttpResponse {
    HttpResponse::Ok().json(StrengthResponse {
        strength: analyze_strength(&strength_req.password),
    })
}
