use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// User record in the database. `user_id` is chosen at signup and is the
/// primary key; the column holds the argon2 hash, never a plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: String,
    #[serde(skip_serializing)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    pub name: String,
}
