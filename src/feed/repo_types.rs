use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// A published blog entry. The feed only ever reads these; nothing in the
/// auth flow writes them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub author: String,
    pub title: String,
    pub content: String,
    pub date_created: OffsetDateTime,
}
