use sqlx::FromRow;

/// The columns of a `users` row that a withdrawal reads.
#[derive(Debug, FromRow)]
pub struct User {
    pub id: String,
    pub password_hash: String,
    pub delete_pending: bool,
}
