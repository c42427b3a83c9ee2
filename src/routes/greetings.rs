use crate::{auth::AuthenticatedUser, config::AuthMode, state::RollcallState};
use axum::{
    Extension, Json,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Serialize;

#[derive(Serialize)]
pub struct Greeting {
    message: String,
}

impl Greeting {
    fn new(message: String) -> Json<Self> {
        Json(Self { message })
    }
}

pub async fn get_index(
    State(state): State<RollcallState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Response {
    match state.auth_mode() {
        AuthMode::Bearer => {
            Greeting::new(format!("Welcome, {}!", user.display_name)).into_response()
        }
        AuthMode::Basic => Redirect::to("/students/").into_response(),
    }
}

pub async fn get_hello(Extension(user): Extension<AuthenticatedUser>) -> Json<Greeting> {
    Greeting::new(format!(
        "Hello, {}! Hope you're doing great!",
        user.display_name
    ))
}

pub async fn get_goodbye(
    State(state): State<RollcallState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Response {
    match state.auth_mode() {
        AuthMode::Bearer => {
            Greeting::new(format!("Goodbye, {}! Take care!", user.display_name)).into_response()
        }
        AuthMode::Basic => Redirect::to("/students/").into_response(),
    }
}
