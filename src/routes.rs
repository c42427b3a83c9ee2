use crate::{
    auth::require_auth,
    routes::{
        all_students::{get_students, post_delete_student},
        edit_student::{get_edit_student_form, post_edit_student},
        greetings::{get_goodbye, get_hello, get_index},
        new_student::{get_new_student_form, post_new_student},
        student_in_detail::get_student,
    },
    state::RollcallState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub mod all_students;
pub mod edit_student;
pub mod greetings;
pub mod new_student;
pub mod student_in_detail;

/// Every route sits behind the credential check, so the auth layer wraps the
/// whole router rather than individual handlers.
pub fn router(state: RollcallState) -> Router {
    Router::new()
        .route("/", get(get_index))
        .route("/hello", get(get_hello))
        .route("/goodbye", get(get_goodbye))
        .route("/students/", get(get_students))
        .route(
            "/create/",
            get(get_new_student_form).post(post_new_student),
        )
        .route("/{id}/", get(get_student))
        .route(
            "/{id}/edit/",
            get(get_edit_student_form).post(post_edit_student),
        )
        .route("/{id}/delete/", post(post_delete_student))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state)
}
