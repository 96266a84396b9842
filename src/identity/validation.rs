//! Form checks performed before any provider call.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const MIN_PASSWORD_LEN: usize = 6;

/// Form field a validation error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your email and password.")]
    MissingCredentials { field: Field },

    #[error("Please fill in all fields.")]
    MissingFields { field: Field },

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Password must be at least 6 characters.")]
    PasswordTooShort,
}

impl ValidationError {
    /// Field to flag next to the message
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingCredentials { field } | ValidationError::MissingFields { field } => *field,
            ValidationError::InvalidEmail => Field::Email,
            ValidationError::PasswordTooShort => Field::Password,
        }
    }
}

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static regex compiles"));

/// Loose `local@domain.tld` shape anywhere in the input
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Trimmed sign-in form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Trimmed sign-up form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_sign_in(email: &str, password: &str) -> Result<SignInForm, ValidationError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingCredentials { field: Field::Email });
    }
    if password.is_empty() {
        return Err(ValidationError::MissingCredentials { field: Field::Password });
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(SignInForm {
        email: email.to_string(),
        password: password.to_string(),
    })
}

pub fn validate_sign_up(name: &str, email: &str, password: &str) -> Result<SignUpForm, ValidationError> {
    let name = name.trim();
    let email = email.trim();
    for (value, field) in [(name, Field::Name), (email, Field::Email), (password, Field::Password)] {
        if value.is_empty() {
            return Err(ValidationError::MissingFields { field });
        }
    }
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(SignUpForm {
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("farmer.one@agri.example.in"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@b.co"));
        assert!(!is_valid_email("a@.co"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a @b.co"));
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        assert_eq!(
            validate_sign_in("", "secret").unwrap_err(),
            ValidationError::MissingCredentials { field: Field::Email }
        );
        assert_eq!(validate_sign_in("a@b.co", "").unwrap_err().field(), Field::Password);
        assert_eq!(validate_sign_in("nope", "secret").unwrap_err(), ValidationError::InvalidEmail);
    }

    #[test]
    fn test_sign_in_trims_email_only() {
        let form = validate_sign_in("  a@b.co ", " pw ").unwrap();
        assert_eq!(form.email, "a@b.co");
        assert_eq!(form.password, " pw ");
    }

    #[test]
    fn test_sign_up_password_length() {
        assert_eq!(
            validate_sign_up("Asha", "a@b.co", "abc12").unwrap_err(),
            ValidationError::PasswordTooShort
        );
        assert!(validate_sign_up("Asha", "a@b.co", "abc123").is_ok());
        // length is counted in UTF-16 units, so a surrogate pair counts twice
        assert!(validate_sign_up("Asha", "a@b.co", "abcd😀").is_ok());
        assert!(validate_sign_up("Asha", "a@b.co", "abc😀").is_err());
    }

    #[test]
    fn test_sign_up_missing_fields() {
        let err = validate_sign_up("   ", "a@b.co", "abc123").unwrap_err();
        assert_eq!(err, ValidationError::MissingFields { field: Field::Name });
        assert_eq!(err.to_string(), "Please fill in all fields.");
    }
}
