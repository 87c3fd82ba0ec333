use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request {0}")]
    BadRequest(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Referenced row does not exist: {0}")]
    InvalidReference(String),

    #[error("Duplicate value: {0}")]
    Conflict(String),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Database error")]
    DbError(#[source] sqlx::Error),

    #[error("ORM error")]
    OrmError(#[source] DbErr),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// True for the variants produced by a rejected write at the store level.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            AppError::MissingField(_)
                | AppError::InvalidReference(_)
                | AppError::Conflict(_)
                | AppError::ConstraintViolation(_)
                | AppError::InvalidValue(_)
        )
    }
}

fn classify(err: &(dyn DatabaseError + 'static)) -> Option<AppError> {
    let detail = err
        .constraint()
        .map(str::to_owned)
        .unwrap_or_else(|| err.message().to_owned());
    match err.kind() {
        ErrorKind::UniqueViolation => Some(AppError::Conflict(detail)),
        ErrorKind::ForeignKeyViolation => Some(AppError::InvalidReference(detail)),
        ErrorKind::NotNullViolation => Some(AppError::MissingField(detail)),
        ErrorKind::CheckViolation => Some(AppError::ConstraintViolation(detail)),
        // SQLSTATE class 22: data exceptions such as numeric overflow.
        _ => match err.code() {
            Some(code) if code.starts_with("22") => Some(AppError::InvalidValue(detail)),
            _ => None,
        },
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let Some(classified) = err.as_database_error().and_then(classify) {
            return classified;
        }
        AppError::DbError(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        let classified = match &err {
            DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
                e.as_database_error().and_then(classify)
            }
            DbErr::RecordNotFound(_) | DbErr::RecordNotUpdated => Some(AppError::NotFound),
            _ => None,
        };
        classified.unwrap_or(AppError::OrmError(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
