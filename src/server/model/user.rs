//! User domain models and credential parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::auth::{AuthUserDto, CredentialsDto, ProfileUserDto},
    server::{
        error::AppError,
        util::validate::{is_valid_email, Validator},
    },
};

/// The only role that passes the admin guard. Registration always assigns it.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            role: entity.role,
            created_at: entity.created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }

    pub fn into_auth_dto(self) -> AuthUserDto {
        AuthUserDto {
            id: self.id,
            email: self.email,
            role: self.role,
        }
    }

    pub fn into_profile_dto(self) -> ProfileUserDto {
        ProfileUserDto {
            id: self.id,
            email: self.email,
            role: self.role,
            created_at: self.created_at,
        }
    }
}

/// Validated login or registration credentials.
#[derive(Clone, PartialEq)]
pub struct Credentials {
    /// Trimmed, lowercased email.
    pub email: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

impl Credentials {
    /// Normalizes the email and checks both fields.
    ///
    /// The password must be 6 to 128 characters with at least one lowercase letter,
    /// one uppercase letter and one digit.
    ///
    /// # Returns
    /// - `Ok(Credentials)` - Normalized credentials
    /// - `Err(AppError::Validation)` - Every failed rule
    pub fn from_dto(dto: CredentialsDto) -> Result<Self, AppError> {
        let email = dto.email.trim().to_lowercase();
        let password = dto.password;

        let mut v = Validator::new();
        v.check(is_valid_email(&email), "Please provide a valid email");
        let len = password.chars().count();
        v.check(
            (6..=128).contains(&len),
            "Password must be between 6 and 128 characters",
        );
        v.check(
            password.chars().any(|c| c.is_ascii_lowercase())
                && password.chars().any(|c| c.is_ascii_uppercase())
                && password.chars().any(|c| c.is_ascii_digit()),
            "Password must contain at least one lowercase letter, one uppercase letter, and one number",
        );
        v.finish()?;

        Ok(Self { email, password })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials(email: &str, password: &str) -> Result<Credentials, AppError> {
        Credentials::from_dto(CredentialsDto {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    /// Tests email normalization.
    ///
    /// Expected: Surrounding spaces removed and email lowercased
    #[test]
    fn normalizes_email() {
        let creds = credentials("  Admin@BlogHok.com ", "Password1").unwrap();

        assert_eq!(creds.email, "admin@bloghok.com");
    }

    /// Tests the password strength rules.
    ///
    /// Expected: Short or single-class passwords are rejected
    #[test]
    fn enforces_password_rules() {
        let Err(AppError::Validation(details)) = credentials("a@b.co", "Ab1") else {
            panic!("expected validation error");
        };
        assert_eq!(details, vec!["Password must be between 6 and 128 characters"]);

        let Err(AppError::Validation(details)) = credentials("a@b.co", "password") else {
            panic!("expected validation error");
        };
        assert_eq!(details.len(), 1);
        assert!(details[0].starts_with("Password must contain"));
    }

    /// Tests that the password never appears in debug output.
    ///
    /// Expected: Debug output has the email and no password
    #[test]
    fn debug_hides_password() {
        let creds = credentials("a@b.co", "Secret123").unwrap();

        let debug = format!("{:?}", creds);
        assert!(debug.contains("a@b.co"));
        assert!(!debug.contains("Secret123"));
    }
}
