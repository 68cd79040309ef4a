//! Newsletter signup validation.
//!
//! Addresses are only checked locally; nothing is stored or sent.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsletterError {
    #[error("Please enter your email")]
    Empty,
    #[error("\"{0}\" is not a valid email address")]
    Invalid(String),
}

/// Validate and normalize (trim) an email address
pub fn validate_email(input: &str) -> Result<String, NewsletterError> {
    let email = input.trim();
    if email.is_empty() {
        return Err(NewsletterError::Empty);
    }
    let invalid = || NewsletterError::Invalid(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    let dot_inside = domain
        .find('.')
        .is_some_and(|_| !domain.starts_with('.') && !domain.ends_with('.'));
    if !dot_inside {
        return Err(invalid());
    }
    Ok(email.to_string())
}

/// Feedback shown under the signup form
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SignupStatus {
    #[default]
    Idle,
    /// Confirmation number `n` of this session
    Subscribed(u32),
    Rejected(NewsletterError),
}

impl SignupStatus {
    /// Clear confirmation `ticket` once its timer fires; newer states stay
    pub fn expire(&mut self, ticket: u32) {
        if *self == SignupStatus::Subscribed(ticket) {
            *self = SignupStatus::Idle;
        }
    }

    /// CSS class and text to display, if any
    pub fn message(&self) -> Option<(&'static str, String)> {
        match self {
            SignupStatus::Idle => None,
            SignupStatus::Subscribed(_) => Some(("text-white font-semibold", "Thanks for subscribing!".to_string())),
            SignupStatus::Rejected(err) => Some(("text-yellow-200 font-medium", err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_and_trims() {
        assert_eq!(validate_email("  ali@solezza.pk ").unwrap(), "ali@solezza.pk");
        assert!(validate_email("a.b+news@mail.example.com").is_ok());
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_email(""), Err(NewsletterError::Empty));
        assert_eq!(validate_email("   "), Err(NewsletterError::Empty));
    }

    #[test]
    fn test_rejects_malformed() {
        for bad in ["ali", "@solezza.pk", "ali@", "ali@pk", "ali@.pk", "ali@solezza.", "a@b@c.pk", "ali @x.pk"] {
            assert_eq!(
                validate_email(bad),
                Err(NewsletterError::Invalid(bad.to_string())),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_status_messages() {
        assert_eq!(SignupStatus::default().message(), None);
        let (_, text) = SignupStatus::Subscribed(1).message().unwrap();
        assert_eq!(text, "Thanks for subscribing!");
        let (_, text) = SignupStatus::Rejected(NewsletterError::Empty).message().unwrap();
        assert_eq!(text, "Please enter your email");
    }

    #[test]
    fn test_expire_ignores_superseded_confirmation() {
        // Second confirmation shown before the first timer fires
        let mut status = SignupStatus::Subscribed(2);
        status.expire(1);
        assert_eq!(status, SignupStatus::Subscribed(2));
        status.expire(2);
        assert_eq!(status, SignupStatus::Idle);
    }

    #[test]
    fn test_expire_keeps_rejection() {
        let mut status = SignupStatus::Rejected(NewsletterError::Empty);
        status.expire(1);
        assert_eq!(status, SignupStatus::Rejected(NewsletterError::Empty));
    }

    #[test]
    fn test_error_message() {
        let err = validate_email("nope").unwrap_err();
        assert_eq!(err.to_string(), "\"nope\" is not a valid email address");
    }
}
