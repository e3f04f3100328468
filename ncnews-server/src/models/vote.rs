//! Vote increment parsing

use serde_json::Value;

use super::ValidationError;

/// Signed change applied to an article's vote count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteDelta(i32);

impl VoteDelta {
    pub fn new(delta: i32) -> Self {
        Self(delta)
    }

    /// Read `inc_votes` from a request body.
    ///
    /// Accepts a JSON integer, or a string holding one. Floats, booleans,
    /// null and a missing field are all rejected.
    pub fn from_json(value: Option<&Value>) -> Result<Self, ValidationError> {
        let delta = match value {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse::<i32>().ok(),
            _ => None,
        };

        delta.map(Self).ok_or(ValidationError::InvalidVotes)
    }

    pub fn get(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_signed_integers() {
        assert_eq!(VoteDelta::from_json(Some(&json!(1))).unwrap().get(), 1);
        assert_eq!(VoteDelta::from_json(Some(&json!(-10))).unwrap().get(), -10);
        assert_eq!(VoteDelta::from_json(Some(&json!("5"))).unwrap().get(), 5);
    }

    #[test]
    fn rejects_missing_null_and_non_numeric() {
        for value in [
            None,
            Some(json!(null)),
            Some(json!("cat")),
            Some(json!(1.5)),
            Some(json!(true)),
            Some(json!(i64::MAX)),
        ] {
            let err = VoteDelta::from_json(value.as_ref()).unwrap_err();
            assert_eq!(err, ValidationError::InvalidVotes);
        }
    }
}
