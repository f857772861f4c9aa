use sqlx::PgPool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::time},
    auth::errors::AuthApiError,
};

use super::{errors::UsersApiError, models::user::User};

pub async fn get_user_by_id_as_admin(id: &str, pool: &PgPool) -> Result<User, ApiError> {
    let sqlx_result = sqlx::query_as::<_, User>(
        "
        SELECT id, password_hash, delete_pending FROM users WHERE id = $1
        ",
    )
    .bind(id)
    .fetch_optional(pool)
    .await;

    match sqlx_result {
        Ok(user) => match user {
            Some(user) => Ok(user),
            None => Err(UsersApiError::UserNotFound.value()),
        },
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}

/// Marks the user for deletion and drops every device session they hold.
pub async fn withdraw_user_by_id_as_admin(id: &str, pool: &PgPool) -> Result<(), ApiError> {
    let mut tx = match pool.begin().await {
        Ok(tx) => tx,
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    let sqlx_result = sqlx::query(
        "
        UPDATE users SET delete_pending = TRUE, updated_at = $1
        WHERE id = $2 AND delete_pending = FALSE
        ",
    )
    .bind(time::current_time_in_secs() as i64)
    .bind(id)
    .execute(&mut tx)
    .await;

    match sqlx_result {
        Ok(result) => {
            // Either gone or already withdrawn by a concurrent request.
            if result.rows_affected() == 0 {
                return Err(AuthApiError::UserDeletePending.value());
            }
        }
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    let sqlx_result = sqlx::query(
        "
        DELETE FROM devices WHERE user_id = $1
        ",
    )
    .bind(id)
    .execute(&mut tx)
    .await;

    match sqlx_result {
        Ok(result) => {
            tracing::debug!(user_id = %id, devices = result.rows_affected(), "devices removed");
        }
        Err(e) => {
            tracing::error!(%e);
            return Err(DefaultApiError::InternalServerError.value());
        }
    }

    match tx.commit().await {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(%e);
            Err(DefaultApiError::InternalServerError.value())
        }
    }
}
