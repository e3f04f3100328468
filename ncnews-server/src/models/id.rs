//! Numeric identifiers taken from request paths

use super::ValidationError;

/// Parse a path segment as a row id.
///
/// Anything that is not a base-10 `i32` is rejected before it reaches the
/// database, so "hello" and "99999999999" both fail here.
pub fn parse_id(field: &'static str, raw: &str) -> Result<i32, ValidationError> {
    raw.trim().parse::<i32>().map_err(|_| ValidationError::InvalidId {
        field,
        value: raw.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_integers() {
        assert_eq!(parse_id("article_id", "1").unwrap(), 1);
        assert_eq!(parse_id("article_id", "30000000").unwrap(), 30_000_000);
        assert_eq!(parse_id("comment_id", "-4").unwrap(), -4);
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["hello", "1.5", "", "1e3", "99999999999"] {
            let err = parse_id("article_id", raw).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidId { field: "article_id", .. }));
        }
    }
}
