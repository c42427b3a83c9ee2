use crate::{
    data::student::Student,
    error::RollcallResult,
    maud_conveniences::render_table,
    state::RollcallState,
};
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use maud::{Markup, html};

#[axum::debug_handler]
pub async fn get_students(State(state): State<RollcallState>) -> RollcallResult<Markup> {
    let students = Student::get_all(&mut *state.get_connection().await?).await?;

    let rows = students
        .iter()
        .map(|student| {
            [
                html! {
                    a href={"/" (student.id) "/"} class="text-blue-400 hover:text-blue-300" {
                        (student.full_name())
                    }
                },
                html! {(student.email)},
                html! {
                    @if let Some(age) = student.age {
                        (age)
                    } @else {
                        span class="text-gray-500 italic" {"Not given"}
                    }
                },
                html! {(student.created_display())},
            ]
        })
        .collect();

    Ok(state.render(html! {
        div class="mx-auto bg-gray-800 p-8 rounded shadow-md max-w-4xl w-full flex flex-col space-y-4" {
            (render_table("Students", ["Name", "Email", "Age", "Added"], rows))
            div {
                a href="/create/" class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {
                    "Add New Student"
                }
            }
        }
    }))
}

pub async fn post_delete_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
) -> RollcallResult<Redirect> {
    Student::remove(id, &mut *state.get_connection().await?).await?;

    Ok(Redirect::to("/students/"))
}
