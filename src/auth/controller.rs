use axum::{extract::State, http::StatusCode};
use validator::Validate;

use crate::{
    app::models::{api_error::ApiError, json_from_request::JsonFromRequest},
    AppState,
};

use super::{dtos::withdraw_dto::WithdrawDto, jwt::models::claims::Claims, service};

pub async fn withdraw(
    State(state): State<AppState>,
    claims: Claims,
    JsonFromRequest(dto): JsonFromRequest<WithdrawDto>,
) -> Result<(), ApiError> {
    match dto.validate() {
        Ok(_) => service::withdraw(&dto, &claims, &state.pool).await,
        Err(e) => Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        }),
    }
}
