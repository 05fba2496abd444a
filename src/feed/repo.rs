use sqlx::PgPool;

use crate::feed::repo_types::Blog;

impl Blog {
    /// All entries, newest first. Rows sharing a `date_created` come back
    /// in storage order, which is not defined.
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Blog>> {
        sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, author, title, content, date_created
            FROM blogs
            ORDER BY date_created DESC
            "#,
        )
        .fetch_all(db)
        .await
    }
}
