// src/api/handlers/preferences.rs

use actix_web::{web, HttpResponse};
use crate::api::types::{ErrorResponse, UpdatePreferencesRequest};
use crate::api::AppState;
use crate::core::preferences::Preferences;

/// Get display preferences
#[utoipa::path(
    get,
    path = "/preferences",
    tag = "Preferences",
    responses(
        (status = 200, description = "Current preferences", body = Preferences)
    )
)]
pub async fn get_preferences(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.preferences())
}

/// Update display preferences
///
/// Fields left out keep their value. Changes are saved when a preferences
/// file is configured.
#[utoipa::path(
    put,
    path = "/preferences",
    tag = "Preferences",
    request_body = UpdatePreferencesRequest,
    responses(
        (status = 200, description = "Updated preferences", body = Preferences),
        (status = 500, description = "Preferences could not be saved", body = ErrorResponse)
    )
)]
pub async fn update_preferences(
    state: web::Data<AppState>,
    update: web::Json<UpdatePreferencesRequest>,
) -> HttpResponse {
    let update = update.into_inner();

    match state.update_preferences(|p| {
        if let Some(dark_mode) = update.dark_mode {
            p.dark_mode = dark_mode;
        }
        if let Some(locale) = update.locale {
            p.locale = locale;
        }
    }) {
        Ok(preferences) => HttpResponse::Ok().json(preferences),
        Err(e) => {
            log::error!("Failed to save preferences: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new(format!(
                "Failed to save preferences: {}",
                e
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use serde_json::json;
    use tempfile::tempdir;

    use crate::api::routes::configure_routes;
    use crate::api::AppState;
    use crate::core::config::Config;
    use crate::core::preferences::{Preferences, PreferencesStore};
    use crate::i18n::Locale;

    #[actix_web::test]
    async fn update_is_saved_and_served() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        let app = test::init_service(
            App::new()
                .app_data(AppState::new(Config::default(), Some(store.clone())).into_data())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/preferences")
            .set_json(json!({ "dark_mode": true }))
            .to_request();
        let updated: Preferences = test::call_and_read_body_json(&app, req).await;
        assert!(updated.dark_mode);
        assert_eq!(updated.locale, Locale::En);

        let req = test::TestRequest::get().uri("/preferences").to_request();
        let current: Preferences = test::call_and_read_body_json(&app, req).await;
        assert_eq!(current, updated);
        assert_eq!(store.load().unwrap(), updated);
    }

    #[actix_web::test]
    async fn update_without_store_stays_in_memory() {
        let app = test::init_service(
            App::new()
                .app_data(AppState::new(Config::default(), None).into_data())
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/preferences")
            .set_json(json!({ "locale": "fa" }))
            .to_request();
        let updated: Preferences = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.locale, Locale::Fa);
    }
}
