use std::fmt;

use serde::Deserialize;
use validator::Validate;

/// Payload of `POST /auth/withdraw`: the account password, re-entered to
/// confirm the withdrawal.
///
/// Deserialization accepts a missing `password`; blank values are only
/// rejected by [`Validate::validate`].
#[derive(Default, Deserialize, Validate)]
pub struct WithdrawDto {
    #[validate(
        required(message = "password is a required input"),
        custom = "super::validate_not_blank"
    )]
    password: Option<String>,
}

impl WithdrawDto {
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }
}

impl fmt::Debug for WithdrawDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithdrawDto")
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
