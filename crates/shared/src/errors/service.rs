use crate::errors::RepositoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Repo(#[from] RepositoryError),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}
