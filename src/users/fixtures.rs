use sqlx::PgPool;

use crate::app::util::{hasher, time};

pub async fn insert_user_with_hash(
    pool: &PgPool,
    id: &str,
    password_hash: &str,
    delete_pending: bool,
) {
    let current_time = time::current_time_in_secs() as i64;

    sqlx::query(
        "
        INSERT INTO users (
            id, username, email, password_hash, delete_pending, updated_at, created_at
        )
        VALUES ($1, $2, $3, $4, $5, $6, $6)
        ",
    )
    .bind(id)
    .bind(id)
    .bind(format!("{}@example.com", id))
    .bind(password_hash)
    .bind(delete_pending)
    .bind(current_time)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn insert_user(pool: &PgPool, id: &str, password: &str) {
    let hash = hasher::hash(password.to_string()).await.unwrap();
    insert_user_with_hash(pool, id, &hash, false).await;
}

pub async fn insert_device(pool: &PgPool, id: &str, user_id: &str) {
    let current_time = time::current_time_in_secs() as i64;

    sqlx::query(
        "
        INSERT INTO devices (id, user_id, refresh_token, updated_at, created_at)
        VALUES ($1, $2, $3, $4, $4)
        ",
    )
    .bind(id)
    .bind(user_id)
    .bind(format!("refresh-{}", id))
    .bind(current_time)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn is_delete_pending(pool: &PgPool, id: &str) -> bool {
    sqlx::query_scalar::<_, bool>("SELECT delete_pending FROM users WHERE id = $1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_devices(pool: &PgPool, user_id: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM devices WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
