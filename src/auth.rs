use crate::state::RollcallState;
use axum::{
    extract::{Request, State},
    http::{HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::fmt::Debug;

pub mod basic;
pub mod bearer;

/// Attached to the request extensions once the credential check passes.
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub display_name: String,
}

/// A 401 produced before any route logic runs. Plain-text body, optional
/// `WWW-Authenticate` challenge.
#[derive(Debug, PartialEq, Eq)]
pub struct AuthRejection {
    message: &'static str,
    challenge: Option<&'static str>,
}

impl AuthRejection {
    pub const fn new(message: &'static str) -> Self {
        Self {
            message,
            challenge: None,
        }
    }

    pub const fn with_challenge(message: &'static str, challenge: &'static str) -> Self {
        Self {
            message,
            challenge: Some(challenge),
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::UNAUTHORIZED, self.message).into_response();
        if let Some(challenge) = self.challenge {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static(challenge));
        }
        response
    }
}

/// One credential scheme guarding every route. Implementations get the raw
/// `Authorization` header (if any) and either name the caller or reject them.
pub trait CredentialValidator: Send + Sync + Debug {
    fn validate(&self, header: Option<&str>) -> Result<AuthenticatedUser, AuthRejection>;
}

pub async fn require_auth(
    State(state): State<RollcallState>,
    mut request: Request,
    next: Next,
) -> Response {
    let header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    match state.validator().validate(header) {
        Ok(user) => {
            request.extensions_mut().insert(user);
            next.run(request).await
        }
        Err(rejection) => rejection.into_response(),
    }
}
