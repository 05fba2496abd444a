use axum::extract::State;
use axum::response::Html;
use tracing::{error, instrument};

use crate::auth::session::MaybeUser;
use crate::error::AppError;
use crate::feed::repo_types::Blog;
use crate::state::AppState;
use crate::views;

/// The feed never hard-fails: a storage outage renders an empty page with
/// the error message instead of a 5xx.
#[instrument(skip_all)]
pub async fn feed(State(state): State<AppState>, MaybeUser(user): MaybeUser) -> Html<String> {
    match Blog::list_all(&state.db).await {
        Ok(blogs) => views::feed_page(user.as_ref(), &blogs, None),
        Err(e) => {
            let e = AppError::from(e);
            if let AppError::Storage(source) = &e {
                error!(error = %source, "feed query failed");
            }
            views::feed_page(user.as_ref(), &[], Some(&e.to_string()))
        }
    }
}
