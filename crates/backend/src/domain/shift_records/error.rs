use chrono::NaiveDate;
use contracts::records::FieldError;
use thiserror::Error;

/// Failures of the record store, one variant per way a caller can be told
/// apart from a plain transport error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The (account, date) pair already has a record. Concurrent inserts for
    /// the same day race on the unique index and the loser lands here.
    #[error("A record for {0} already exists")]
    DuplicateDate(NaiveDate),

    /// The row does not exist under this account's visibility. Rows owned by
    /// other accounts are deliberately indistinguishable from missing ones.
    #[error("Record not found")]
    NotFound,

    /// The draft failed field validation; rejected before touching the store.
    #[error("Validation failed")]
    Validation(Vec<FieldError>),

    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
