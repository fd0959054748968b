// src/api/routes.rs
use super::handlers;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    // Generator routes
    cfg.service(
        web::scope("/generator")
            .route("/password", web::post().to(handlers::generator::generate_password))
    );

    // Message routes
    cfg.service(
        web::scope("/i18n")
            .route("/{locale}", web::get().to(handlers::i18n::get_messages))
    );

    // Preference routes
    cfg.service(
        web::resource("/preferences")
            .route(web::get().to(handlers::preferences::get_preferences))
            .route(web::put().to(handlers::preferences::update_preferences))
    );
}
