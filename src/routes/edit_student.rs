use crate::{
    data::student::{Student, StudentForm},
    error::{MissingStudentSnafu, RollcallResult},
    maud_conveniences::{form_element, form_submit_button, simple_form_element, title},
    state::RollcallState,
};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use maud::{Markup, html};
use snafu::OptionExt;

pub async fn get_edit_student_form(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
) -> RollcallResult<Markup> {
    let student = Student::get_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;

    let age = student.age.map(|age| age.to_string());

    Ok(state.render(html! {
        div class="bg-gray-800 shadow-md rounded px-8 pt-6 pb-8 mb-4 w-full max-w-md" {
            (title(format!("Edit {}", student.full_name())))

            form method="post" {
                (simple_form_element("firstname", "First Name", true, None, Some(&student.firstname)))
                (simple_form_element("lastname", "Last Name", true, None, Some(&student.lastname)))
                (simple_form_element("email", "Email", true, Some("email"), Some(&student.email)))
                (simple_form_element("age", "Age", false, Some("number"), age.as_deref()))
                (form_element("bio", "Bio", html! {
                    textarea name="bio" id="bio" rows="4" class="shadow appearance-none border rounded w-full py-2 px-3 leading-tight focus:outline-none focus:shadow-outline bg-gray-700 border-gray-600" {
                        @if let Some(bio) = &student.bio {
                            (bio)
                        }
                    }
                }))
                (form_submit_button(Some("Save Changes")))
            }
        }
    }))
}

pub async fn post_edit_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
    Form(form): Form<StudentForm>,
) -> RollcallResult<Redirect> {
    let draft = form.validate()?;
    Student::update(id, draft, &mut *state.get_connection().await?).await?;

    Ok(Redirect::to("/students/"))
}
