use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

mod dto;
pub mod handlers;
pub mod password;
pub mod repo;
pub mod repo_types;
pub mod services;
pub mod session;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/signup",
            get(handlers::signup_form).post(handlers::signup),
        )
        .route(
            "/signin",
            get(handlers::signin_form).post(handlers::signin),
        )
        .route("/logout", post(handlers::logout))
}
