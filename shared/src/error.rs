use sea_orm::DbErr;
use thiserror::Error;

/// Failures a store operation can surface. The only distinguished kind is a
/// symbol collision on add; every other persistence fault carries the
/// underlying driver text.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Stock already exists")]
    DuplicateSymbol,
    #[error("{0}")]
    Database(#[from] DbErr),
}
