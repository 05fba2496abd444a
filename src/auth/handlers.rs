use axum::{
    extract::{Form, State},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;
use tracing::{error, info, instrument, warn};

use crate::auth::dto::{SigninForm, SignupForm};
use crate::auth::services;
use crate::auth::session::{MaybeUser, SESSION_USER_KEY};
use crate::error::AppError;
use crate::state::AppState;
use crate::views;

pub async fn signup_form(MaybeUser(user): MaybeUser) -> Response {
    views::signup_page(user.as_ref(), None).into_response()
}

pub async fn signin_form(MaybeUser(user): MaybeUser) -> Response {
    views::signin_page(user.as_ref(), None).into_response()
}

#[instrument(skip_all)]
pub async fn signup(
    State(state): State<AppState>,
    MaybeUser(user): MaybeUser,
    Form(form): Form<SignupForm>,
) -> Response {
    match services::signup(&state.db, &form).await {
        Ok(()) => {
            info!(user_id = %form.user_id, "user registered");
            // No auto-login: the new user signs in on their own.
            Redirect::to("/signin").into_response()
        }
        Err(e) => {
            log_failure("signup", &e);
            views::signup_page(user.as_ref(), Some(&e.to_string())).into_response()
        }
    }
}

#[instrument(skip_all)]
pub async fn signin(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SigninForm>,
) -> Response {
    match services::signin(&state.db, &form).await {
        Ok(identity) => {
            if let Err(e) = session.insert(SESSION_USER_KEY, identity.clone()).await {
                error!(error = %e, "session write failed");
                let msg = AppError::Storage(e.into()).to_string();
                return views::signin_page(None, Some(&msg)).into_response();
            }
            info!(user_id = %identity.user_id, "user signed in");
            Redirect::to("/").into_response()
        }
        Err(e) => {
            log_failure("signin", &e);
            views::signin_page(None, Some(&e.to_string())).into_response()
        }
    }
}

/// Destroying an already-absent session is fine; the redirect is the same
/// either way.
#[instrument(skip_all)]
pub async fn logout(session: Session) -> Response {
    if let Err(e) = session.flush().await {
        error!(error = %e, "session destroy failed");
    }
    Redirect::to("/signin").into_response()
}

fn log_failure(op: &str, e: &AppError) {
    match e {
        AppError::Storage(source) => error!(%op, error = %source, "storage failure"),
        other => warn!(%op, reason = %other, "request rejected"),
    }
}
