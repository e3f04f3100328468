//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Validates raw input before touching the database
//! - Uses JOINs for counts (no N+1)
//! - Expresses every mutation as a single statement (no read-then-write)
//! - Checks parent existence before child operations so that "no such
//!   article" and "article has no comments" stay distinguishable

pub mod topics;
pub mod articles;
pub mod comments;
pub mod users;

pub use topics::{Topic, TopicRepo};
pub use articles::{Article, ArticleRepo, ArticleSummary};
pub use comments::{Comment, CommentRepo};
pub use users::{User, UserRepo};

use crate::models::{QueryError, ValidationError};

/// Repository error type
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

impl From<QueryError> for RepoError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Invalid(v) => Self::Validation(v),
            QueryError::SortNotFound { .. } => Self::NotFound("Sort query not found".to_owned()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_becomes_not_found() {
        let err = RepoError::from(QueryError::SortNotFound {
            value: "colour".into(),
        });
        assert!(matches!(err, RepoError::NotFound(ref msg) if msg == "Sort query not found"));
    }

    #[test]
    fn invalid_query_stays_validation() {
        let err = RepoError::from(QueryError::Invalid(ValidationError::InvalidSortAndOrder));
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidSortAndOrder)
        ));
    }
}
