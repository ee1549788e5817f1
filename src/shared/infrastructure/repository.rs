// Error shape shared by every repository port.
//
// Purpose
// - Let handlers tell a missing record and a uniqueness clash apart from a backend failure,
//   without knowing which storage sits behind the port.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("backend error: {0}")]
    Backend(String),
}
