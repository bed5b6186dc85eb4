pub mod extractors;
pub mod middleware;
pub mod password;
pub mod token;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

// Re-export necessary items
pub use extractors::AuthenticatedUserId;
pub use middleware::AuthMiddleware;
pub use password::{hash_password, verify_password};
pub use token::{generate_token, verify_token, Claims};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// Represents the payload for a new user signup request.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    /// Desired username for the new account.
    /// Must be between 3 and 32 characters, alphanumeric, and can include underscores or hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    /// Password for the new account. Required, non-empty; it is hashed before
    /// the account is stored.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Represents the payload for a user login request.
///
/// Deliberately unvalidated beyond deserialization: any (username, password)
/// pair goes through the credential check, so the response is always the same
/// undifferentiated `Unauthorized` when it fails.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response structure after a successful login.
/// The token is returned in the body and nowhere else.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The JWT (JSON Web Token) for session authentication.
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_signup_request_validation() {
        let valid_signup = SignupRequest {
            username: "test_user-123".to_string(),
            password: "pw123".to_string(),
        };
        assert!(valid_signup.validate().is_ok());

        let invalid_username_signup = SignupRequest {
            username: "test user!".to_string(), // Contains space and exclamation
            password: "pw123".to_string(),
        };
        assert!(invalid_username_signup.validate().is_err());

        let short_username_signup = SignupRequest {
            username: "tu".to_string(),
            password: "pw123".to_string(),
        };
        assert!(short_username_signup.validate().is_err());

        let empty_password_signup = SignupRequest {
            username: "testuser".to_string(),
            password: "".to_string(),
        };
        assert!(empty_password_signup.validate().is_err());
    }
}
