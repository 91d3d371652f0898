//! Axum route handlers for the contact form.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::Serialize;

use crate::contact::form::{ContactForm, SubmitOutcome};
use crate::contact::validation::ContactFormValues;
use crate::errors::AppError;
use crate::render::{render_page, PageView};
use crate::shell::{Toast, Toaster};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub status: &'static str,
    pub notification: Option<Toast>,
}

/// Where a browser lands after a successful send. The page raises the
/// success toast when it sees `sent=1`, and a refresh does not re-post.
pub const SENT_REDIRECT: &str = "/?sent=1#contact";

/// POST /contact
///
/// Browser form post. Success redirects to the page; anything else
/// re-renders it with inline field errors or the failure toast, keeping
/// the values.
pub async fn handle_contact_form(
    State(state): State<AppState>,
    Form(values): Form<ContactFormValues>,
) -> Response {
    let mut shell = state.mount_shell();
    let mut form = ContactForm::with_values(values);

    let status = match form
        .submit(state.delivery.clone(), &state.inflight, &mut shell.toaster)
        .await
    {
        SubmitOutcome::Sent => return Redirect::to(SENT_REDIRECT).into_response(),
        SubmitOutcome::AlreadySending => StatusCode::CONFLICT,
        SubmitOutcome::Invalid | SubmitOutcome::Failed(_) => StatusCode::OK,
    };

    let page = render_page(&state.portfolio, &PageView::new(shell).with_form(form));
    (status, page).into_response()
}

/// POST /api/v1/contact
///
/// JSON variant of the contact form for script clients.
pub async fn handle_contact_api(
    State(state): State<AppState>,
    Json(values): Json<ContactFormValues>,
) -> Result<Json<ContactResponse>, AppError> {
    let mut toaster = Toaster::new(state.config.toast_duration_ms);
    let mut form = ContactForm::with_values(values);

    match form
        .submit(state.delivery.clone(), &state.inflight, &mut toaster)
        .await
    {
        SubmitOutcome::Sent => Ok(Json(ContactResponse {
            status: "sent",
            notification: toaster.latest().cloned(),
        })),
        SubmitOutcome::Invalid => Err(AppError::Validation(form.errors().clone())),
        SubmitOutcome::AlreadySending => Err(AppError::Conflict),
        SubmitOutcome::Failed(e) => Err(AppError::Delivery(e)),
    }
}
