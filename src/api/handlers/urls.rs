//! Handlers for the `/api/urls` endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::urls::{Envelope, ResolvedUrl, ShortenedUrl};
use crate::api::extract::UrlInput;
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a long URL.
///
/// # Endpoint
///
/// `POST /api/urls`
///
/// # Request Body
///
/// JSON `{"url": "https://example.com"}` or form-encoded `url=...`.
///
/// # Response
///
/// `201 Created` for a new mapping, `200 OK` if the URL was already known
/// (the existing short URL is returned and no id is consumed):
///
/// ```json
/// {
///   "response": 201,
///   "content": {
///     "long_url": "https://example.com",
///     "short_url": "cnjr.lnk/1"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is missing or empty.
pub async fn create_url_handler(
    State(state): State<AppState>,
    UrlInput(payload): UrlInput,
) -> Result<(StatusCode, Json<Envelope<ShortenedUrl>>), AppError> {
    let long_url = payload.into_url()?;

    let outcome = state.mapping_service.create_or_get(&long_url).await?;

    let status = if outcome.created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    let short_url = state.mapping_service.short_url(&outcome.mapping);

    Ok((
        status,
        Json(Envelope {
            response: status.as_u16(),
            content: ShortenedUrl {
                long_url: outcome.mapping.long_url,
                short_url,
            },
        }),
    ))
}

/// Resolves a short code to its mapping.
///
/// # Endpoint
///
/// `GET /api/urls`
///
/// The code is read from `?url=` or a JSON body `{"url": "1f"}`. A full short
/// URL (`cnjr.lnk/1f`) is accepted as well.
///
/// # Response
///
/// ```json
/// {
///   "response": 200,
///   "content": {
///     "id": 31,
///     "long_url": "https://example.com",
///     "short_url": "cnjr.lnk/1f"
///   }
/// }
/// ```
///
/// # Errors
///
/// Returns 404 with `{"response": 404, "results": "Content not found."}` for
/// unknown codes, 400 if the code is missing.
pub async fn resolve_url_handler(
    State(state): State<AppState>,
    UrlInput(payload): UrlInput,
) -> Result<Json<Envelope<ResolvedUrl>>, AppError> {
    let short_code = payload.into_url()?;

    let mapping = state
        .mapping_service
        .resolve_or_not_found(&short_code)
        .await?;

    let short_url = state.mapping_service.short_url(&mapping);

    Ok(Json(Envelope {
        response: StatusCode::OK.as_u16(),
        content: ResolvedUrl {
            id: mapping.id,
            long_url: mapping.long_url,
            short_url,
        },
    }))
}
