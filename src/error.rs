use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::ErrorKind;
use sqlx::sqlite::SqliteError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("no inventory record for product {0}")]
    InventoryNotFound(Uuid),

    #[error("insufficient stock for product {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: Uuid,
        requested: i32,
        available: i32,
    },

    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("reference violation: {0}")]
    ReferenceViolation(String),

    #[error("invalid {entity} status transition from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        from: String,
        to: String,
    },

    #[error("ORM error: {0}")]
    OrmError(#[source] DbErr),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match classify(&err) {
            Some((ErrorKind::UniqueViolation, message))
            | Some((ErrorKind::CheckViolation, message))
            | Some((ErrorKind::NotNullViolation, message)) => AppError::ConstraintViolation(message),
            Some((ErrorKind::ForeignKeyViolation, message)) => AppError::ReferenceViolation(message),
            _ => AppError::OrmError(err),
        }
    }
}

/// Pull the driver-level error kind out of a SeaORM error, if the database rejected the statement.
fn classify(err: &DbErr) -> Option<(ErrorKind, String)> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => {
            e.as_database_error().map(|db| {
                let sqlite_reference = db.try_downcast_ref::<SqliteError>().is_some()
                    && db.code().is_some_and(|code| is_sqlite_reference_code(&code));
                let kind = if sqlite_reference {
                    ErrorKind::ForeignKeyViolation
                } else {
                    db.kind()
                };
                (kind, db.message().to_string())
            })
        }
        _ => None,
    }
}

/// SQLite reports `ON DELETE RESTRICT` as SQLITE_CONSTRAINT_TRIGGER (1811), which sqlx maps to
/// `ErrorKind::Other`; plain foreign key failures are SQLITE_CONSTRAINT_FOREIGNKEY (787).
fn is_sqlite_reference_code(code: &str) -> bool {
    matches!(code, "787" | "1811")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_stay_orm_errors() {
        let err: AppError = DbErr::RecordNotFound("orders".into()).into();
        assert!(matches!(err, AppError::OrmError(_)));
    }

    #[test]
    fn sqlite_restrict_and_foreign_key_codes_are_references() {
        assert!(is_sqlite_reference_code("1811"));
        assert!(is_sqlite_reference_code("787"));
        assert!(!is_sqlite_reference_code("2067"));
        assert!(!is_sqlite_reference_code("23503"));
    }

    #[test]
    fn insufficient_stock_message_names_quantities() {
        let err = AppError::InsufficientStock {
            product_id: Uuid::nil(),
            requested: 5,
            available: 2,
        };
        let message = err.to_string();
        assert!(message.contains("requested 5"));
        assert!(message.contains("available 2"));
    }
}
