use crate::{
    data::student::Student,
    error::{MissingStudentSnafu, RollcallResult},
    maud_conveniences::title,
    state::RollcallState,
};
use axum::extract::{Path, State};
use maud::{Markup, html};
use snafu::OptionExt;

pub async fn get_student(
    State(state): State<RollcallState>,
    Path(id): Path<i64>,
) -> RollcallResult<Markup> {
    let student = Student::get_by_id(id, &mut *state.get_connection().await?)
        .await?
        .context(MissingStudentSnafu { id })?;

    let bio = student.bio.as_ref().map(|bio| {
        html! {
            div {
                @for line in bio.lines() {
                    (line)
                    br;
                }
            }
        }
    });

    Ok(state.render(html! {
        div class="container mx-auto px-4 py-8" {
            div class="bg-gray-800 p-6 md:p-8 rounded-lg shadow-xl max-w-2xl mx-auto" {
                (title(student.full_name()))

                div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-8" {
                    div {
                        p class="text-gray-300 text-sm" {"Email:"}
                        p class="text-gray-100 text-lg" {(student.email)}
                    }
                    div {
                        p class="text-gray-300 text-sm" {"Age:"}
                        @if let Some(age) = student.age {
                            p class="text-gray-100 text-lg" {(age)}
                        } @else {
                            p class="text-gray-500 text-lg" {"Not given"}
                        }
                    }
                    div {
                        p class="text-gray-300 text-sm" {"Added:"}
                        p class="text-gray-100 text-lg" {(student.created_display())}
                    }
                }

                div class="mb-8" {
                    p class="text-gray-300 text-sm mb-2" {"Bio:"}
                    @if let Some(bio) = bio {
                        p class="text-gray-100 leading-relaxed" {(bio)}
                    } @else {
                        p class="text-gray-500 italic" {"No bio provided."}
                    }
                }

                div class="flex flex-row space-x-4" {
                    a href={"/" (student.id) "/edit/"} class="bg-blue-600 hover:bg-blue-800 font-bold py-2 px-4 rounded" {
                        "Edit"
                    }
                    form method="post" action={"/" (student.id) "/delete/"} {
                        button type="submit" class="bg-red-600 hover:bg-red-800 font-bold py-2 px-4 rounded" {
                            "Delete"
                        }
                    }
                }
            }
        }
    }))
}
