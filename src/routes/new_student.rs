use crate::{
    data::student::{Student, StudentForm},
    error::RollcallResult,
    maud_conveniences::{form_element, form_submit_button, simple_form_element, title},
    state::RollcallState,
};
use axum::{
    Form,
    extract::State,
    response::Redirect,
};
use maud::{Markup, html};

pub async fn get_new_student_form(State(state): State<RollcallState>) -> Markup {
    state.render(html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-md" {
            (title("Add New Student"))

            form method="post" {
                (simple_form_element("firstname", "First Name", true, None, None))
                (simple_form_element("lastname", "Last Name", true, None, None))
                (simple_form_element("email", "Email", true, Some("email"), None))
                (simple_form_element("age", "Age", false, Some("number"), None))
                (form_element("bio", "Bio", html! {
                    textarea name="bio" id="bio" rows="4" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {}
                }))
                (form_submit_button(Some("Add Student")))
            }
        }
    })
}

pub async fn post_new_student(
    State(state): State<RollcallState>,
    Form(form): Form<StudentForm>,
) -> RollcallResult<Redirect> {
    let draft = form.validate()?;
    Student::insert(draft, &mut *state.get_connection().await?).await?;

    Ok(Redirect::to("/students/"))
}
