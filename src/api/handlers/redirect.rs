//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use tracing::{debug, warn};

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect_target::location_header;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Check cache for the code
/// 2. On cache miss, query database
/// 3. Asynchronously populate cache
/// 4. Return 307 Temporary Redirect
///
/// Cache errors are logged and fall back to the database. Targets without an
/// `http(s)` scheme are prefixed with `https://`.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist, and 500 if the
/// stored URL cannot be encoded as a `Location` header.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = match state.cache.get_url(&code).await {
        Ok(Some(cached_url)) => {
            debug!(code = %code, "Cache HIT");
            cached_url
        }
        Ok(None) => {
            debug!(code = %code, "Cache MISS");

            let mapping = state.mapping_service.resolve_or_not_found(&code).await?;

            let cache = state.cache.clone();
            let short_code = mapping.short_code.clone();
            let url = mapping.long_url.clone();
            tokio::spawn(async move {
                if let Err(e) = cache.set_url(&short_code, &url, None).await {
                    warn!("Failed to cache URL: {}", e);
                }
            });

            mapping.long_url
        }
        Err(e) => {
            warn!("Cache error: {}", e);

            state
                .mapping_service
                .resolve_or_not_found(&code)
                .await?
                .long_url
        }
    };

    let location = location_header(&long_url)?;

    Ok((StatusCode::TEMPORARY_REDIRECT, [(LOCATION, location)]).into_response())
}
