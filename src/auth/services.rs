use sqlx::PgPool;
use tracing::warn;

use crate::auth::dto::{SigninForm, SignupForm};
use crate::auth::password::{hash_password, verify_password};
use crate::auth::repo_types::User;
use crate::auth::session::SessionUser;
use crate::error::AppError;

/// Register a new user. Validation runs before any storage access; the
/// existence lookup is a fast path and the primary key on `users` is what
/// actually wins a concurrent-signup race.
pub async fn signup(db: &PgPool, form: &SignupForm) -> Result<(), AppError> {
    if form.user_id.is_empty() || form.password.is_empty() || form.name.is_empty() {
        return Err(AppError::Validation("All fields required"));
    }

    if User::find(db, &form.user_id).await?.is_some() {
        warn!(user_id = %form.user_id, "signup for existing user id");
        return Err(AppError::Conflict);
    }

    let hash = hash_password(&form.password)?;
    User::create(db, &form.user_id, &hash, &form.name).await?;
    Ok(())
}

/// Check credentials and hand back the identity to store in the session.
/// Unknown user and wrong password are indistinguishable to the caller.
pub async fn signin(db: &PgPool, form: &SigninForm) -> Result<SessionUser, AppError> {
    let Some(user) = User::find(db, &form.user_id).await? else {
        warn!(user_id = %form.user_id, "signin for unknown user id");
        return Err(AppError::InvalidCredentials);
    };

    if !verify_password(&form.password, &user.password_hash)? {
        warn!(user_id = %user.user_id, "signin with invalid password");
        return Err(AppError::InvalidCredentials);
    }

    Ok(SessionUser {
        user_id: user.user_id,
        name: user.name,
    })
}
