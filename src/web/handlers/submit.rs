//! Form submission handler wrapping shorten and resolve.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_with::{NoneAsEmptyString, serde_as};

use crate::application::services::mapping_service::URL_REQUIRED_MESSAGE;
use crate::error::NOT_FOUND_MESSAGE;
use crate::state::AppState;
use crate::utils::redirect_target::location_header;

/// Fields posted by the form on the landing page.
///
/// The submit button pressed determines the action: `shorten_url` creates a
/// mapping, `redirect_url` resolves one.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde_as(as = "NoneAsEmptyString")]
    #[serde(default)]
    pub url: Option<String>,
    pub shorten_url: Option<String>,
    pub redirect_url: Option<String>,
}

/// Outcome shown below the form.
#[derive(Debug, Clone)]
pub struct SubmitResult {
    pub response: u16,
    pub long_url: String,
    pub short_url: String,
    pub message: String,
}

/// Template for the submission page.
///
/// Renders `templates/submit.html` with the form, an optional flashed error
/// and an optional result.
#[derive(Template, WebTemplate, Default)]
#[template(path = "submit.html")]
pub struct SubmitTemplate {
    pub error: Option<String>,
    pub result: Option<SubmitResult>,
}

impl SubmitTemplate {
    fn with_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            result: None,
        }
    }

    fn with_result(result: SubmitResult) -> Self {
        Self {
            error: None,
            result: Some(result),
        }
    }
}

/// Renders the empty submission page.
///
/// # Endpoint
///
/// `GET /submit`
pub async fn submit_page_handler() -> impl IntoResponse {
    SubmitTemplate::default()
}

/// Handles a form submission.
///
/// # Endpoint
///
/// `POST /submit`
///
/// - `redirect_url` pressed: redirects to the long URL, or re-renders the
///   page with "Content not found."
/// - `shorten_url` pressed: re-renders the page with the short URL
///
/// An empty `url` field re-renders the page with an error message.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Response {
    if form.redirect_url.is_some() {
        return handle_redirect(&state, form.url).await;
    }

    if form.shorten_url.is_some() {
        return handle_submission(&state, form.url).await.into_response();
    }

    SubmitTemplate::default().into_response()
}

async fn handle_submission(state: &AppState, url: Option<String>) -> SubmitTemplate {
    let Some(long_url) = url else {
        return SubmitTemplate::with_error(URL_REQUIRED_MESSAGE);
    };

    match state.mapping_service.create_or_get(&long_url).await {
        Ok(outcome) => {
            let short_url = state.mapping_service.short_url(&outcome.mapping);
            SubmitTemplate::with_result(SubmitResult {
                response: if outcome.created { 201 } else { 200 },
                long_url: outcome.mapping.long_url,
                short_url,
                message: String::new(),
            })
        }
        Err(e) => SubmitTemplate::with_error(e.to_string()),
    }
}

async fn handle_redirect(state: &AppState, url: Option<String>) -> Response {
    let Some(short_url) = url else {
        return SubmitTemplate::with_error(URL_REQUIRED_MESSAGE).into_response();
    };

    match state.mapping_service.resolve(&short_url).await {
        Ok(Some(mapping)) => match location_header(&mapping.long_url) {
            Ok(location) => (StatusCode::SEE_OTHER, [(LOCATION, location)]).into_response(),
            Err(e) => SubmitTemplate::with_error(e.to_string()).into_response(),
        },
        Ok(None) => SubmitTemplate::with_result(SubmitResult {
            response: 404,
            long_url: String::new(),
            short_url,
            message: NOT_FOUND_MESSAGE.to_string(),
        })
        .into_response(),
        Err(e) => SubmitTemplate::with_error(e.to_string()).into_response(),
    }
}
