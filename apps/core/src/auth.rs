//! Mock authentication gate. Credentials are shape-checked and anything
//! well formed is accepted; there is no account system behind this.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::resume::validation::{is_required, is_valid_email, FieldError};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub email: String,
}

pub fn validate_credentials(email: &str, password: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if !is_required(email) {
        errors.push(FieldError {
            field: "email",
            message: "Email is required".into(),
        });
    } else if !is_valid_email(email) {
        errors.push(FieldError {
            field: "email",
            message: "Invalid email address".into(),
        });
    }
    if !is_required(password) {
        errors.push(FieldError {
            field: "password",
            message: "Password is required".into(),
        });
    } else if password.len() < MIN_PASSWORD_LEN {
        errors.push(FieldError {
            field: "password",
            message: "Password must be at least 6 characters long".into(),
        });
    }
    errors
}

/// Accept-any-credential login: every well-formed email/password pair gets
/// a session user.
pub fn login(email: &str, password: &str) -> Result<SessionUser, Vec<FieldError>> {
    let errors = validate_credentials(email, password);
    if !errors.is_empty() {
        return Err(errors);
    }
    info!(%email, "mock login accepted");
    Ok(SessionUser {
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_wellformed_credentials_are_accepted() {
        let user = login("rider@example.com", "letmein").expect("accepted");
        assert_eq!(user.email, "rider@example.com");
        // a different password for the same email also works: mock gate
        assert!(login("rider@example.com", "something-else").is_ok());
    }

    #[test]
    fn test_short_password_rejected_with_message() {
        let errors = login("rider@example.com", "abc12").expect_err("rejected");
        assert_eq!(errors[0].field, "password");
        assert_eq!(
            errors[0].message,
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        let errors = validate_credentials("", "");
        assert!(errors.iter().any(|e| e.message == "Email is required"));
        assert!(errors.iter().any(|e| e.message == "Password is required"));
    }

    #[test]
    fn test_malformed_email_rejected() {
        let errors = validate_credentials("rider@nowhere", "letmein");
        assert_eq!(errors[0].message, "Invalid email address");
    }
}
