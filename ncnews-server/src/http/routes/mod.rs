//! Route handlers organized by resource

pub mod api;
pub mod topics;
pub mod articles;
pub mod comments;
pub mod users;

use chrono::{DateTime, SecondsFormat, Utc};

/// RFC 3339 with milliseconds and a `Z` suffix, e.g. `2020-11-07T06:03:00.000Z`.
pub(crate) fn timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}
