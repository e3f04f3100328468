//! Validation error types

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Integer or decimal, optionally negative. Used to reject query values that
/// can never name a column or a topic.
static NUMERIC_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("invalid numeric regex"));

/// Returns true when `s` is purely numeric.
pub fn is_numeric(s: &str) -> bool {
    NUMERIC_RE.is_match(s)
}

/// Reject text Postgres would refuse to store.
pub fn storable_text(field: &'static str, s: &str) -> Result<(), ValidationError> {
    if s.contains('\0') {
        return Err(ValidationError::InvalidCharacter { field });
    }
    Ok(())
}

/// Validation error for client input. Always maps to a 400 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path id that is not a 32-bit integer
    InvalidId { field: &'static str, value: String },

    /// Query parameter that must name something but was a number
    NumericQuery { field: &'static str },

    /// `order_by` outside {asc, desc}
    InvalidOrder { value: String },

    /// Both `sort_by` and `order_by` unusable
    InvalidSortAndOrder,

    /// Required body field missing, null or blank
    MissingField { field: &'static str },

    /// `inc_votes` missing or not an integer
    InvalidVotes,

    /// Request body is not the expected JSON document
    MalformedBody { reason: String },

    /// Path segment that could not be decoded
    MalformedPath { reason: String },

    /// Query string that could not be decoded, e.g. a repeated key
    MalformedQuery { reason: String },

    /// Text containing a NUL character, which Postgres cannot store
    InvalidCharacter { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { .. } => write!(f, "Bad request: Invalid input"),
            Self::NumericQuery { field } => {
                write!(f, "Bad request: {} query should not be a number", field)
            }
            Self::InvalidOrder { .. } => write!(f, "Bad request: invalid order query"),
            Self::InvalidSortAndOrder => {
                write!(f, "Bad request: invalid sort and order queries")
            }
            Self::MissingField { field } => write!(f, "Bad request: Invalid input in {}", field),
            Self::InvalidVotes => write!(f, "Bad request: inc_votes must be an integer"),
            Self::MalformedBody { .. } => write!(f, "Bad request: Invalid JSON body"),
            Self::MalformedPath { .. } => write!(f, "Bad request: Invalid input"),
            Self::MalformedQuery { .. } => write!(f, "Bad request: Invalid query"),
            Self::InvalidCharacter { field } => write!(f, "Bad request: Invalid input in {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
