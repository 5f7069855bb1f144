// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Vault persistence
            .service(
                web::scope("/vault")
                    .route("", web::get().to(handlers::vault::list_vault))
                    .route("", web::post().to(handlers::vault::save_password))
                    .route("", web::delete().to(handlers::vault::delete_password))
                    .route("/export", web::get().to(handlers::vault::export_vault))
            )
            // Password generator
            .service(
                web::scope("/generator")
                    .route("/password", web::post().to(handlers::generator::generate_password))
                    .route("/strength", web::post().to(handlers::generator::check_strength))
            )
    );
}
