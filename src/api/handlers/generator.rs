// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse};
use crate::api::types::{PasswordGenerationRequest, PasswordGenerationResponse};
use crate::api::AppState;
use crate::generators::PasswordGenerator;
use crate::i18n;
use crate::models::{GenerationOutcome, GenerationRequest};

/// Generate a password
///
/// Generates a password from the provided options. When the options cannot
/// produce a password (no character type, or a length shorter than the number
/// of character types) nothing is generated; the response carries the
/// corrected options to send next.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password or required adjustment", body = PasswordGenerationResponse),
        (status = 400, description = "Length out of range", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> HttpResponse {
    let defaults = state.config.default_request();

    // Create options with defaults or provided values
    let request = GenerationRequest {
        length: generation_req.length.unwrap_or(defaults.length),
        include_uppercase: generation_req.include_uppercase.unwrap_or(defaults.include_uppercase),
        include_lowercase: generation_req.include_lowercase.unwrap_or(defaults.include_lowercase),
        include_numbers: generation_req.include_numbers.unwrap_or(defaults.include_numbers),
        include_symbols: generation_req.include_symbols.unwrap_or(defaults.include_symbols),
    };

    let max = state.config.max_password_length;
    if request.length == 0 || request.length > max {
        return HttpResponse::BadRequest().json(PasswordGenerationResponse::error(format!(
            "Password length must be between 1 and {} characters",
            max
        )));
    }

    let locale = match generation_req.locale {
        Some(locale) => locale,
        None => state.preferences().locale,
    };

    match PasswordGenerator::new().generate(&request) {
        GenerationOutcome::Generated(password) => HttpResponse::Ok().json(PasswordGenerationResponse {
            success: true,
            password: Some(password.into_string()),
            adjustment: None,
            notice: None,
            error: None,
        }),
        GenerationOutcome::NeedsAdjustment(adjustment) => {
            let notice = i18n::adjustment_notice(locale, &adjustment);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: false,
                password: None,
                adjustment: Some(adjustment),
                notice: Some(notice),
                error: None,
            })
        }
    }
}
