// src/api/mod.rs
use std::sync::{Mutex, MutexGuard, PoisonError};

use actix_web::{web, App, HttpServer};
use actix_cors::Cors;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::core::config::Config;
use crate::core::preferences::{self, Preferences, PreferencesStore};

// This will hold our API documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Generator endpoints
        crate::api::handlers::generator::generate_password,

        // Message endpoints
        crate::api::handlers::i18n::get_messages,

        // Preference endpoints
        crate::api::handlers::preferences::get_preferences,
        crate::api::handlers::preferences::update_preferences
    ),
    components(
        schemas(
            // Request/response schemas
            crate::api::types::PasswordGenerationRequest,
            crate::api::types::PasswordGenerationResponse,
            crate::api::types::MessagesResponse,
            crate::api::types::UpdatePreferencesRequest,
            crate::api::types::ErrorResponse,

            // Generation models
            crate::models::GenerationRequest,
            crate::models::Adjustment,
            crate::models::AdjustmentReason,

            // Preferences
            crate::core::preferences::Preferences,
            crate::i18n::Locale
        )
    ),
    tags(
        (name = "Generator", description = "Password generation endpoints"),
        (name = "Messages", description = "Localized interface strings"),
        (name = "Preferences", description = "Dark mode and language preferences")
    ),
    info(
        title = "RustPassgen API",
        version = "0.1.0",
        description = "Random password generator API",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Shared state behind every handler.
pub struct AppState {
    pub config: Config,
    preferences: Mutex<Preferences>,
    store: Option<PreferencesStore>,
}

impl AppState {
    pub fn new(config: Config, store: Option<PreferencesStore>) -> Self {
        let fallback = Preferences {
            dark_mode: config.dark_mode.unwrap_or(false),
            locale: config.default_locale,
        };

        let preferences = match &store {
            Some(store) => store.load().unwrap_or_else(|e| {
                log::warn!("Could not read preferences: {}", e);
                fallback
            }),
            None => fallback,
        };

        Self {
            config,
            preferences: Mutex::new(preferences),
            store,
        }
    }

    pub fn with_preferences(self, preferences: Preferences) -> Self {
        *self.lock() = preferences;
        self
    }

    pub fn into_data(self) -> web::Data<AppState> {
        web::Data::new(self)
    }

    pub fn preferences(&self) -> Preferences {
        *self.lock()
    }

    /// Apply `change` to the served preferences and to the stored record.
    ///
    /// The store gets the change on top of what it already holds, so
    /// overrides passed through `with_preferences` stay out of the file.
    pub fn update_preferences<F>(&self, change: F) -> preferences::Result<Preferences>
    where
        F: Fn(&mut Preferences),
    {
        let mut current = self.lock();

        if let Some(store) = &self.store {
            store.update(&change)?;
        }

        change(&mut *current);
        Ok(*current)
    }

    fn lock(&self) -> MutexGuard<'_, Preferences> {
        // Preferences are plain values, a poisoned lock still holds a usable copy
        self.preferences.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

pub async fn start_server(state: AppState, address: &str, port: u16) -> std::io::Result<()> {
    log::info!("Starting RustPassgen API server on {}:{}", address, port);

    let state = state.into_data();

    HttpServer::new(move || {
        // Configure CORS
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec!["Content-Type", "Accept"])
            .max_age(3600);

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            // Add Swagger UI
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi())
            )
            .configure(routes::configure_routes)
    })
    .bind((address, port))?
    .run()
    .await
}

pub mod types;
pub mod routes;
pub mod handlers;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;
    use tempfile::tempdir;

    #[test]
    fn openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        assert!(paths.iter().any(|p| p.as_str() == "/generator/password"));
        assert!(paths.iter().any(|p| p.as_str() == "/i18n/{locale}"));
        assert!(paths.iter().any(|p| p.as_str() == "/preferences"));
    }

    #[test]
    fn state_starts_from_config() {
        let config = Config {
            dark_mode: Some(true),
            default_locale: Locale::Fa,
            ..Config::default()
        };
        let state = AppState::new(config, None);
        assert_eq!(state.preferences(), Preferences { dark_mode: true, locale: Locale::Fa });
    }

    #[test]
    fn explicit_preferences_replace_loaded_ones() {
        let state = AppState::new(Config::default(), None)
            .with_preferences(Preferences { dark_mode: true, locale: Locale::En });
        assert!(state.preferences().dark_mode);
    }

    #[test]
    fn overrides_stay_out_of_the_store() {
        let dir = tempdir().unwrap();
        let store = PreferencesStore::new(dir.path().join("preferences.json"));
        store.save(&Preferences { dark_mode: false, locale: Locale::En }).unwrap();

        let state = AppState::new(Config::default(), Some(store.clone()))
            .with_preferences(Preferences { dark_mode: true, locale: Locale::En });
        let served = state.update_preferences(|p| p.locale = Locale::Fa).unwrap();

        assert_eq!(served, Preferences { dark_mode: true, locale: Locale::Fa });
        assert_eq!(store.load().unwrap(), Preferences { dark_mode: false, locale: Locale::Fa });
    }
}
