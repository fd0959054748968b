// src/api/handlers/i18n.rs

use actix_web::{web, HttpResponse};
use crate::api::types::{ErrorResponse, MessagesResponse};
use crate::i18n::{self, Locale};

/// List interface messages
///
/// Returns every message template for a language.
#[utoipa::path(
    get,
    path = "/i18n/{locale}",
    tag = "Messages",
    params(
        ("locale" = String, Path, description = "Language code (en, fa)")
    ),
    responses(
        (status = 200, description = "Messages for the language", body = MessagesResponse),
        (status = 404, description = "Unknown language", body = ErrorResponse)
    )
)]
pub async fn get_messages(path: web::Path<String>) -> HttpResponse {
    let locale: Locale = match path.into_inner().parse() {
        Ok(locale) => locale,
        Err(e) => return HttpResponse::NotFound().json(ErrorResponse::new(e.to_string())),
    };

    let messages = i18n::messages(locale)
        .into_iter()
        .map(|(key, text)| (key.to_string(), text.to_string()))
        .collect();

    HttpResponse::Ok().json(MessagesResponse { locale, messages })
}
