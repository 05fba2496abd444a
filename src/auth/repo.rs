use sqlx::PgPool;

use crate::auth::repo_types::User;

impl User {
    /// Find a user by their chosen id.
    pub async fn find(db: &PgPool, user_id: &str) -> sqlx::Result<Option<User>> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, password, name
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(db)
        .await
    }

    /// Create a new user with hashed password. A duplicate id surfaces as
    /// a unique-violation database error from the primary key.
    pub async fn create(
        db: &PgPool,
        user_id: &str,
        password_hash: &str,
        name: &str,
    ) -> sqlx::Result<User> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (user_id, password, name)
            VALUES ($1, $2, $3)
            RETURNING user_id, password, name
            "#,
        )
        .bind(user_id)
        .bind(password_hash)
        .bind(name)
        .fetch_one(db)
        .await
    }
}
