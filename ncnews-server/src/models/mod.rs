//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod id;
pub mod article_query;
pub mod vote;
pub mod comment;

pub use validation::{is_numeric, storable_text, ValidationError};
pub use id::parse_id;
pub use article_query::{ArticleQuery, QueryError, ResolvedArticleQuery, SortBy, SortOrder};
pub use vote::VoteDelta;
pub use comment::NewComment;
