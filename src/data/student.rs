use crate::error::{
    BlankFieldSnafu, InvalidAgeSnafu, MakeQuerySnafu, MissingStudentSnafu, RollcallError,
    RollcallResult,
};
use serde::Deserialize;
use snafu::{ResultExt, ensure};
use sqlx::{FromRow, SqliteConnection};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

const CREATED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");

#[derive(Debug, Clone, FromRow)]
pub struct Student {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: Option<i64>,
    pub created_at: OffsetDateTime,
    pub bio: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.lastname)
    }

    pub fn created_display(&self) -> String {
        self.created_at.format(CREATED_FORMAT).unwrap_or_default()
    }

    pub async fn get_all(conn: &mut SqliteConnection) -> RollcallResult<Vec<Self>> {
        sqlx::query_as(
            "SELECT id, firstname, lastname, email, age, created_at, bio FROM students ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn get_by_id(id: i64, conn: &mut SqliteConnection) -> RollcallResult<Option<Self>> {
        sqlx::query_as(
            "SELECT id, firstname, lastname, email, age, created_at, bio FROM students WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .context(MakeQuerySnafu)
    }

    pub async fn insert(draft: StudentDraft, conn: &mut SqliteConnection) -> RollcallResult<i64> {
        let result = sqlx::query(
            "INSERT INTO students (firstname, lastname, email, age, created_at, bio) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )
        .bind(&draft.firstname)
        .bind(&draft.lastname)
        .bind(&draft.email)
        .bind(draft.age)
        .bind(OffsetDateTime::now_utc())
        .bind(&draft.bio)
        .execute(&mut *conn)
        .await
        .map_err(|source| map_unique_violation(source, &draft.email))?;

        Ok(result.last_insert_rowid())
    }

    /// Overwrites every field except `id` and `created_at`.
    pub async fn update(
        id: i64,
        draft: StudentDraft,
        conn: &mut SqliteConnection,
    ) -> RollcallResult<()> {
        let result = sqlx::query(
            "UPDATE students SET firstname = ?1, lastname = ?2, email = ?3, age = ?4, bio = ?5 WHERE id = ?6",
        )
        .bind(&draft.firstname)
        .bind(&draft.lastname)
        .bind(&draft.email)
        .bind(draft.age)
        .bind(&draft.bio)
        .bind(id)
        .execute(&mut *conn)
        .await
        .map_err(|source| map_unique_violation(source, &draft.email))?;

        ensure!(result.rows_affected() > 0, MissingStudentSnafu { id });
        Ok(())
    }

    pub async fn remove(id: i64, conn: &mut SqliteConnection) -> RollcallResult<()> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .context(MakeQuerySnafu)?;

        ensure!(result.rows_affected() > 0, MissingStudentSnafu { id });
        Ok(())
    }
}

fn map_unique_violation(source: sqlx::Error, email: &str) -> RollcallError {
    match &source {
        sqlx::Error::Database(db) if db.is_unique_violation() => RollcallError::DuplicateEmail {
            email: email.to_owned(),
        },
        _ => RollcallError::MakeQuery { source },
    }
}

/// Raw form input, exactly as the browser submits it.
#[derive(Deserialize)]
pub struct StudentForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: String,
    pub bio: String,
}

impl StudentForm {
    pub fn validate(self) -> RollcallResult<StudentDraft> {
        ensure!(!self.firstname.trim().is_empty(), BlankFieldSnafu { field: "firstname" });
        ensure!(!self.lastname.trim().is_empty(), BlankFieldSnafu { field: "lastname" });
        ensure!(!self.email.trim().is_empty(), BlankFieldSnafu { field: "email" });

        let age = match self.age.trim() {
            "" => None,
            original => Some(original.parse().context(InvalidAgeSnafu { original })?),
        };

        let bio = if self.bio.trim().is_empty() {
            None
        } else {
            Some(self.bio)
        };

        Ok(StudentDraft {
            firstname: self.firstname,
            lastname: self.lastname,
            email: self.email,
            age,
            bio,
        })
    }
}

/// A validated `StudentForm`, ready for the store.
#[derive(Debug, Clone)]
pub struct StudentDraft {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub age: Option<i64>,
    pub bio: Option<String>,
}
