//! New comment validation

use super::validation::{storable_text, ValidationError};

/// A comment ready to insert: author and body both present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    author: String,
    body: String,
}

impl NewComment {
    /// Username is checked before body.
    ///
    /// # Example
    /// ```
    /// use ncnews_server::models::NewComment;
    ///
    /// assert!(NewComment::new(Some("butter_bridge"), Some("Amazing news!")).is_ok());
    /// assert!(NewComment::new(None, Some("Amazing news!")).is_err());
    /// assert!(NewComment::new(Some("butter_bridge"), Some("   ")).is_err());
    /// ```
    pub fn new(author: Option<&str>, body: Option<&str>) -> Result<Self, ValidationError> {
        let author = non_blank(author).ok_or(ValidationError::MissingField { field: "username" })?;
        let body = non_blank(body).ok_or(ValidationError::MissingField { field: "body" })?;
        storable_text("username", author)?;
        storable_text("body", body)?;

        Ok(Self {
            author: author.to_owned(),
            body: body.to_owned(),
        })
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn body(&self) -> &str {
        &self.body
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.trim().is_empty())
}
