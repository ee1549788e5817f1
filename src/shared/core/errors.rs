use thiserror::Error;

use crate::shared::infrastructure::repository::RepositoryError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("domain rejected: {0}")]
    Domain(String),
}

impl ApplicationError {
    pub fn domain(reason: impl std::fmt::Display) -> Self {
        Self::Domain(reason.to_string())
    }
}
