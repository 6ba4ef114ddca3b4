use validator::ValidateEmail;

use crate::app_error::{AppError, AppResult};

/// Validates that the input looks like a valid email address
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    !email.is_empty() && email.validate_email()
}

/// Checks a submitted waitlist email and returns it trimmed.
pub fn validate_waitlist_email(email: &str) -> AppResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AppError::InvalidInput("Email is required".into()));
    }
    if !is_valid_email(email) || !has_dotted_domain(email) {
        return Err(AppError::InvalidInput("Please enter a valid email".into()));
    }
    Ok(email)
}

/// Requires a domain like `example.com`: bare hosts such as `localhost`
/// and `[...]` address literals are rejected.
fn has_dotted_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    !domain.starts_with('[')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("test@example.com"));
        assert!(is_valid_email("user.name@domain.co.uk"));
        assert!(is_valid_email("user+tag@example.org"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("   "));
        assert!(!is_valid_email("notanemail"));
        assert!(!is_valid_email("@nodomain.com"));
        assert!(!is_valid_email("spaces in@email.com"));
    }

    #[test]
    fn waitlist_email_is_trimmed() {
        let email = validate_waitlist_email("  someone@example.com\n").unwrap();
        assert_eq!(email, "someone@example.com");
    }

    #[test]
    fn waitlist_email_without_tld_is_rejected() {
        for email in ["user@localhost", "a@b", "x@[127.0.0.1]", "x@.com", "x@example."] {
            let err = validate_waitlist_email(email).unwrap_err();
            assert!(
                matches!(&err, AppError::InvalidInput(msg) if msg == "Please enter a valid email"),
                "{email} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn waitlist_email_with_dotted_domain_is_accepted() {
        assert!(validate_waitlist_email("user@mail.example.co.uk").is_ok());
        assert!(validate_waitlist_email("user+tag@example.org").is_ok());
    }

    #[test]
    fn waitlist_email_blank_is_required_error() {
        let err = validate_waitlist_email("  ").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "Email is required"));
    }

    #[test]
    fn waitlist_email_malformed_is_rejected() {
        let err = validate_waitlist_email("not-an-email").unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(msg) if msg == "Please enter a valid email"));
    }
}
