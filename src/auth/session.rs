use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::warn;

/// Key under which the authenticated identity is stored in the session.
pub const SESSION_USER_KEY: &str = "user";

/// The identity a session proves: the user's id and display name, and
/// nothing else. The password hash never goes near the session store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub user_id: String,
    pub name: String,
}

/// Extracts the current identity, if the client has signed in.
///
/// Every page handler takes this; an unreadable session record is treated
/// as anonymous rather than failing the request.
pub struct MaybeUser(pub Option<SessionUser>);

#[async_trait]
impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state).await?;
        let user = match session.get::<SessionUser>(SESSION_USER_KEY).await {
            Ok(u) => u,
            Err(e) => {
                warn!(error = %e, "session read failed; treating request as anonymous");
                None
            }
        };
        Ok(MaybeUser(user))
    }
}
