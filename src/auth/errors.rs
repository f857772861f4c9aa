use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum AuthApiError {
    InvalidToken,
    ExpiredToken,
    InvalidPassword,
    UserDeletePending,
}

impl AuthApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid token.".to_string(),
            },
            Self::ExpiredToken => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Token has expired.".to_string(),
            },
            Self::InvalidPassword => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Invalid password.".to_string(),
            },
            Self::UserDeletePending => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "This user is being deleted.".to_string(),
            },
        }
    }
}
