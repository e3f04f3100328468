//! Article listing query: sort column, direction and topic filter
//!
//! Caller-supplied text never reaches the SQL string. Sort keys resolve to an
//! enum, and the enum owns the column reference.

use std::fmt;

use super::validation::{is_numeric, storable_text, ValidationError};

/// Columns an article list may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    Author,
    Title,
    ArticleId,
    Topic,
    Body,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl SortBy {
    pub const ALL: [SortBy; 8] = [
        Self::Author,
        Self::Title,
        Self::ArticleId,
        Self::Topic,
        Self::Body,
        Self::CreatedAt,
        Self::Votes,
        Self::CommentCount,
    ];

    /// Query-string name of this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Title => "title",
            Self::ArticleId => "article_id",
            Self::Topic => "topic",
            Self::Body => "body",
            Self::CreatedAt => "created_at",
            Self::Votes => "votes",
            Self::CommentCount => "comment_count",
        }
    }

    /// Column reference used in ORDER BY. `a` aliases `articles`.
    pub fn column(&self) -> &'static str {
        match self {
            Self::Author => "a.author",
            Self::Title => "a.title",
            Self::ArticleId => "a.article_id",
            Self::Topic => "a.topic",
            Self::Body => "a.body",
            Self::CreatedAt => "a.created_at",
            Self::Votes => "a.votes",
            Self::CommentCount => "comment_count",
        }
    }

    /// Exact-match lookup against the allow-list.
    pub fn from_name(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Case-insensitive parse of `asc`/`desc`.
    pub fn from_name(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("asc") {
            Some(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// Why a listing query was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Malformed input (400)
    Invalid(ValidationError),
    /// Sort key that is not a column (404)
    SortNotFound { value: String },
}

impl From<ValidationError> for QueryError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

/// Raw listing parameters as they arrive in the query string.
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery<'a> {
    pub sort_by: Option<&'a str>,
    pub order_by: Option<&'a str>,
    pub topic: Option<&'a str>,
}

/// Listing parameters after validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolvedArticleQuery {
    pub sort: SortBy,
    pub order: SortOrder,
    pub topic: Option<String>,
}

impl ArticleQuery<'_> {
    /// Validate in a fixed order: the combined sort+order failure first, then
    /// the sort key on its own, then the order, then the topic.
    ///
    /// Topic existence is a database question and is left to the repository.
    pub fn resolve(&self) -> Result<ResolvedArticleQuery, QueryError> {
        let sort = self.sort_by.map(SortBy::from_name);
        let order = self.order_by.map(SortOrder::from_name);

        if matches!(sort, Some(None)) && matches!(order, Some(None)) {
            return Err(ValidationError::InvalidSortAndOrder.into());
        }

        let sort = match (self.sort_by, sort) {
            (Some(raw), Some(None)) if is_numeric(raw) => {
                return Err(ValidationError::NumericQuery { field: "sort" }.into());
            }
            (Some(raw), Some(None)) => {
                return Err(QueryError::SortNotFound {
                    value: raw.to_owned(),
                });
            }
            (_, Some(Some(key))) => key,
            _ => SortBy::default(),
        };

        let order = match (self.order_by, order) {
            (Some(raw), Some(None)) => {
                return Err(ValidationError::InvalidOrder {
                    value: raw.to_owned(),
                }
                .into());
            }
            (_, Some(Some(o))) => o,
            _ => SortOrder::default(),
        };

        let topic = match self.topic {
            Some(t) if is_numeric(t) => {
                return Err(ValidationError::NumericQuery { field: "topic" }.into());
            }
            Some(t) => {
                storable_text("topic", t)?;
                Some(t.to_owned())
            }
            None => None,
        };

        Ok(ResolvedArticleQuery { sort, order, topic })
    }
}
