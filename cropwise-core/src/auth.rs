//! Simulated sign-in and registration.
//!
//! There is no identity provider: any non-empty email/password signs in. The
//! result is an explicit [`Session`] that the view layer keeps in context and
//! the navigation guard consults.

use crate::config::MIN_PASSWORD_STRENGTH;
use crate::error::AuthError;
use crate::metrics::PasswordStrength;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registration {
    pub full_name: String,
    pub email: String,
    pub location: String,
    pub password: String,
    pub confirm_password: String,
}

/// Identity shown in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub display_name: String,
    pub email: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Session {
    #[default]
    Anonymous,
    SignedIn(UserProfile),
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Session::SignedIn(_))
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match self {
            Session::SignedIn(user) => Some(user),
            Session::Anonymous => None,
        }
    }
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::MissingFields);
        }
        Ok(())
    }
}

impl Registration {
    /// `true` once a confirmation has been typed and it equals the password.
    pub fn passwords_match(&self) -> bool {
        !self.confirm_password.is_empty() && self.password == self.confirm_password
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::of(&self.password)
    }

    /// Checks run before the simulated registration call.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.full_name.trim().is_empty() || self.email.trim().is_empty() {
            return Err(AuthError::MissingFields);
        }
        if self.password != self.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }
        let strength = self.strength().strength;
        if strength < MIN_PASSWORD_STRENGTH {
            return Err(AuthError::WeakPassword { strength });
        }
        Ok(())
    }
}

/// Name shown for a user who signed in with only an email.
fn display_name_from_email(email: &str) -> String {
    let local = email.trim().split('@').next().unwrap_or_default();
    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => email.trim().to_string(),
    }
}

/// Sign in. Any non-empty email/password pair is accepted.
pub fn login(credentials: &Credentials) -> Result<Session, AuthError> {
    credentials.validate()?;
    let email = credentials.email.trim().to_string();
    log::info!("signed in as {email}");
    Ok(Session::SignedIn(UserProfile {
        display_name: display_name_from_email(&email),
        email,
        location: None,
    }))
}

/// Create an account and sign it in.
pub fn register(registration: &Registration) -> Result<Session, AuthError> {
    registration.validate()?;
    let location = registration.location.trim();
    log::info!("registered {}", registration.email.trim());
    Ok(Session::SignedIn(UserProfile {
        display_name: registration.full_name.trim().to_string(),
        email: registration.email.trim().to_string(),
        location: (!location.is_empty()).then(|| location.to_string()),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration(password: &str, confirm: &str) -> Registration {
        Registration {
            full_name: "Ana Ruiz".into(),
            email: "ana@farm.example".into(),
            location: "Fresno, CA".into(),
            password: password.into(),
            confirm_password: confirm.into(),
        }
    }

    #[test]
    fn login_requires_both_fields() {
        assert_eq!(login(&Credentials::new("", "secret")), Err(AuthError::MissingFields));
        assert_eq!(login(&Credentials::new("a@b.c", "")), Err(AuthError::MissingFields));
        let session = login(&Credentials::new(" farmer@example.com ", "x")).unwrap();
        let user = session.user().unwrap();
        assert_eq!(user.email, "farmer@example.com");
        assert_eq!(user.display_name, "Farmer");
        assert!(session.is_signed_in());
    }

    #[test]
    fn registration_rejects_mismatch_before_strength() {
        assert_eq!(
            register(&registration("abc", "abd")),
            Err(AuthError::PasswordMismatch)
        );
        assert_eq!(
            register(&registration("abc", "abc")),
            Err(AuthError::WeakPassword { strength: 1 })
        );
    }

    #[test]
    fn registration_accepts_medium_passwords() {
        let session = register(&registration("Abc1", "Abc1")).unwrap();
        let user = session.user().unwrap();
        assert_eq!(user.display_name, "Ana Ruiz");
        assert_eq!(user.location.as_deref(), Some("Fresno, CA"));
    }

    #[test]
    fn passwords_match_needs_a_confirmation() {
        assert!(!registration("", "").passwords_match());
        assert!(!registration("Abc1", "Abc").passwords_match());
        assert!(registration("Abc1", "Abc1").passwords_match());
    }

    #[test]
    fn default_session_is_anonymous() {
        assert_eq!(Session::default(), Session::Anonymous);
        assert!(Session::default().user().is_none());
    }
}
