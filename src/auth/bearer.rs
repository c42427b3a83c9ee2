use crate::auth::{AuthRejection, AuthenticatedUser, CredentialValidator};
use secrecy::{ExposeSecret, SecretString};

const MISSING_TOKEN: &str = "Missing or invalid token";
const INVALID_TOKEN: &str = "Unauthorized: Invalid token";

/// Checks `Authorization: Bearer <token>` against a single shared secret.
/// Every caller presenting the right token is the same "Authorized User".
#[derive(Debug)]
pub struct BearerValidator {
    token: SecretString,
}

impl BearerValidator {
    pub fn new(token: SecretString) -> Self {
        Self { token }
    }
}

impl CredentialValidator for BearerValidator {
    fn validate(&self, header: Option<&str>) -> Result<AuthenticatedUser, AuthRejection> {
        let Some(supplied) = header.and_then(|header| header.strip_prefix("Bearer ")) else {
            return Err(AuthRejection::new(MISSING_TOKEN));
        };

        if supplied != self.token.expose_secret() {
            return Err(AuthRejection::new(INVALID_TOKEN));
        }

        Ok(AuthenticatedUser {
            display_name: "Authorized User".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> BearerValidator {
        BearerValidator::new(SecretString::from("sesame"))
    }

    #[test]
    fn accepts_the_configured_token() {
        let user = validator().validate(Some("Bearer sesame")).unwrap();
        assert_eq!(user.display_name, "Authorized User");
    }

    #[test]
    fn rejects_a_missing_header() {
        assert_eq!(
            validator().validate(None).unwrap_err(),
            AuthRejection::new(MISSING_TOKEN)
        );
    }

    #[test]
    fn rejects_the_wrong_scheme() {
        assert_eq!(
            validator().validate(Some("Basic sesame")).unwrap_err(),
            AuthRejection::new(MISSING_TOKEN)
        );
    }

    #[test]
    fn rejects_the_wrong_token() {
        assert_eq!(
            validator().validate(Some("Bearer knock-knock")).unwrap_err(),
            AuthRejection::new(INVALID_TOKEN)
        );
    }

    #[test]
    fn token_comparison_is_exact() {
        assert!(validator().validate(Some("Bearer sesame ")).is_err());
        assert!(validator().validate(Some("Bearer Sesame")).is_err());
    }
}
