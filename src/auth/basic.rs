use crate::auth::{AuthRejection, AuthenticatedUser, CredentialValidator};
use base64::{Engine, engine::general_purpose::STANDARD};
use secrecy::{ExposeSecret, SecretString};

const MISSING_AUTH: &str = "Missing or invalid authentication";
const INVALID_CREDENTIALS: &str = "Unauthorized: Invalid credentials";
const CHALLENGE: &str = "Basic realm=\"Login Required\"";

/// Checks `Authorization: Basic <base64(user:pass)>` against one configured
/// pair. The supplied username doubles as the caller's display name.
#[derive(Debug)]
pub struct BasicValidator {
    username: String,
    password: SecretString,
}

impl BasicValidator {
    pub fn new(username: String, password: SecretString) -> Self {
        Self { username, password }
    }
}

impl CredentialValidator for BasicValidator {
    fn validate(&self, header: Option<&str>) -> Result<AuthenticatedUser, AuthRejection> {
        let Some(encoded) = header.and_then(|header| header.strip_prefix("Basic ")) else {
            return Err(AuthRejection::with_challenge(MISSING_AUTH, CHALLENGE));
        };

        let invalid = || AuthRejection::with_challenge(INVALID_CREDENTIALS, CHALLENGE);

        let decoded = STANDARD.decode(encoded).map_err(|_| invalid())?;
        let decoded = String::from_utf8(decoded).map_err(|_| invalid())?;

        //split on the first colon only - passwords are allowed to contain colons
        let Some((username, password)) = decoded.split_once(':') else {
            return Err(invalid());
        };

        if username != self.username || password != self.password.expose_secret() {
            return Err(invalid());
        }

        Ok(AuthenticatedUser {
            display_name: username.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> BasicValidator {
        BasicValidator::new("aziz".to_string(), SecretString::from("light"))
    }

    fn encode(credentials: &str) -> String {
        format!("Basic {}", STANDARD.encode(credentials))
    }

    #[test]
    fn accepts_the_configured_pair() {
        let user = validator().validate(Some(&encode("aziz:light"))).unwrap();
        assert_eq!(user.display_name, "aziz");
    }

    #[test]
    fn rejects_a_missing_header_with_a_challenge() {
        assert_eq!(
            validator().validate(None).unwrap_err(),
            AuthRejection::with_challenge(MISSING_AUTH, CHALLENGE)
        );
    }

    #[test]
    fn rejects_the_wrong_password_with_a_challenge() {
        assert_eq!(
            validator().validate(Some(&encode("aziz:dark"))).unwrap_err(),
            AuthRejection::with_challenge(INVALID_CREDENTIALS, CHALLENGE)
        );
    }

    #[test]
    fn rejects_garbage_base64() {
        assert_eq!(
            validator().validate(Some("Basic %%%")).unwrap_err(),
            AuthRejection::with_challenge(INVALID_CREDENTIALS, CHALLENGE)
        );
    }

    #[test]
    fn rejects_a_payload_without_a_colon() {
        assert!(validator().validate(Some(&encode("azizlight"))).is_err());
    }

    #[test]
    fn splits_on_the_first_colon_only() {
        let validator = BasicValidator::new("aziz".to_string(), SecretString::from("li:ght"));
        let user = validator.validate(Some(&encode("aziz:li:ght"))).unwrap();
        assert_eq!(user.display_name, "aziz");
    }
}
