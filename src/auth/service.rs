use sqlx::PgPool;

use crate::{
    app::{errors::DefaultApiError, models::api_error::ApiError, util::hasher},
    users,
};

use super::{dtos::withdraw_dto::WithdrawDto, errors::AuthApiError, jwt::models::claims::Claims};

/// Confirms the password of the signed-in user and schedules their account
/// for deletion. `dto` must already have passed validation.
pub async fn withdraw(dto: &WithdrawDto, claims: &Claims, pool: &PgPool) -> Result<(), ApiError> {
    let Some(password) = dto.password()
    else {
        return Err(AuthApiError::InvalidPassword.value());
    };

    let user = users::service::get_user_by_id_as_admin(&claims.id, pool).await?;

    if user.delete_pending {
        return Err(AuthApiError::UserDeletePending.value());
    }

    let matches = match hasher::verify(password.to_string(), user.password_hash.to_string()).await {
        Ok(matches) => matches,
        Err(e) => {
            tracing::error!(%e, user_id = %user.id, "failed to verify password");
            return Err(DefaultApiError::InternalServerError.value());
        }
    };

    if !matches {
        tracing::info!(user_id = %user.id, "withdrawal rejected, invalid password");
        return Err(AuthApiError::InvalidPassword.value());
    }

    users::service::withdraw_user_by_id_as_admin(&user.id, pool).await?;

    tracing::info!(user_id = %user.id, "withdrawal accepted");

    Ok(())
}
