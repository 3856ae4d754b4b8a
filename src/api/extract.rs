//! Request extractor for the `url` parameter of `/api/urls`.

use axum::{
    Form,
    body::Bytes,
    extract::{FromRequest, Query, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::json;

use crate::api::dto::urls::UrlRequest;
use crate::error::AppError;

/// Extracts a [`UrlRequest`] from wherever the client put it.
///
/// Sources, in order:
/// 1. `?url=` query parameter
/// 2. form-encoded body (`application/x-www-form-urlencoded`)
/// 3. JSON body, regardless of `Content-Type` (clients commonly send
///    `GET` bodies without one)
///
/// An empty body yields a request with no URL, which fails validation
/// downstream with the usual message.
#[derive(Debug)]
pub struct UrlInput(pub UrlRequest);

impl<S> FromRequest<S> for UrlInput
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if let Ok(Query(query)) = Query::<UrlRequest>::try_from_uri(req.uri())
            && query.url.is_some()
        {
            return Ok(Self(query));
        }

        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(request) = Form::<UrlRequest>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    AppError::bad_request(rejection.body_text(), json!({ "source": "form" }))
                })?;
            return Ok(Self(request));
        }

        let body = Bytes::from_request(req, state).await.map_err(|rejection| {
            AppError::bad_request(rejection.body_text(), json!({ "source": "body" }))
        })?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(UrlRequest::default()));
        }

        let request = serde_json::from_slice(&body).map_err(|e| {
            AppError::bad_request(
                r#"Request body must be JSON of the form {"url": "..."}"#,
                json!({ "reason": e.to_string() }),
            )
        })?;

        Ok(Self(request))
    }
}
