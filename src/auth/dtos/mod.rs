use std::borrow::Cow;

use validator::ValidationError;

pub mod withdraw_dto;

pub const PASSWORD_REQUIRED_MESSAGE: &str = "password is a required input";

/// Rejects values that are empty or consist only of whitespace.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if !value.trim().is_empty() {
        return Ok(());
    }

    let mut error = ValidationError::new("not_blank");
    error.message = Some(Cow::from(PASSWORD_REQUIRED_MESSAGE));

    Err(error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("abc123").is_ok());
        assert!(validate_not_blank(" a ").is_ok());
        assert!(validate_not_blank("비밀번호").is_ok());
    }

    #[test]
    fn test_validate_not_blank_error() {
        for value in ["", " ", "   ", "\t\n", "\u{3000}"] {
            let error = validate_not_blank(value).unwrap_err();
            assert_eq!(error.code, "not_blank");
            assert_eq!(error.message.as_deref(), Some(PASSWORD_REQUIRED_MESSAGE));
        }
    }
}
