use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use snafu::Snafu;
use std::num::ParseIntError;

pub type RollcallResult<T> = Result<T, RollcallError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum RollcallError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unknown auth mode {:?}, expected \"bearer\" or \"basic\"", mode))]
    UnknownAuthMode { mode: String },
    #[snafu(display("Unable to find student with ID: {}", id))]
    MissingStudent { id: i64 },
    #[snafu(display("A student with email {:?} already exists", email))]
    DuplicateEmail { email: String },
    #[snafu(display("Unable to parse age {:?}", original))]
    InvalidAge {
        source: ParseIntError,
        original: String,
    },
    #[snafu(display("Required field `{}` was left blank", field))]
    BlankField { field: &'static str },
}

impl IntoResponse for RollcallError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR; //internal server error
        const NF: StatusCode = StatusCode::NOT_FOUND; //not found
        const BI: StatusCode = StatusCode::BAD_REQUEST; //bad input

        let basic_error = |desc| {
            html! {
                div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                    strong class="font-bold" {"Rollcall Error"}
                    span {(desc)}
                }
            }
        };

        let status_code = match &self {
            Self::OpenDatabase { .. } | Self::GetDatabaseConnection { .. } => ISE,
            Self::MigrateError { .. } => ISE,
            Self::MakeQuery { source } => match source {
                sqlx::Error::RowNotFound => NF,
                _ => ISE,
            },
            Self::BadEnvVar { .. } => ISE,
            Self::UnknownAuthMode { .. } => ISE,
            Self::MissingStudent { .. } => NF,
            Self::DuplicateEmail { .. } => StatusCode::CONFLICT,
            Self::InvalidAge { .. } => BI,
            Self::BlankField { .. } => BI,
        };

        error!(?self, "Error!");
        (status_code, Html(basic_error(self.to_string()))).into_response()
    }
}
