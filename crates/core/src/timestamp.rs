//! Wall-clock timestamps and their textual forms.
//!
//! All models share one precision (microseconds) and one naive local-time
//! convention, so serialized timestamps compare equal after a round-trip.

use chrono::{Local, NaiveDateTime, SubsecRound};

use crate::error::{ModelError, ModelResult};

/// Naive local timestamp, truncated to microseconds.
pub type Timestamp = NaiveDateTime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
// `%.f` also accepts text without a fractional part.
const ISO_PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const NATIVE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Current local time at microsecond precision.
pub fn now() -> Timestamp {
    Local::now().naive_local().trunc_subsecs(6)
}

/// ISO-8601 text used in records, e.g. `2024-05-01T09:30:00.000125`.
pub fn to_iso(ts: &Timestamp) -> String {
    ts.format(ISO_FORMAT).to_string()
}

/// Parse ISO-8601 text produced by [`to_iso`] (or without fraction).
///
/// `field` names the record key, for the error.
pub fn parse_iso(field: &str, value: &str) -> ModelResult<Timestamp> {
    NaiveDateTime::parse_from_str(value, ISO_PARSE_FORMAT)
        .map(|ts| ts.trunc_subsecs(6))
        .map_err(|_| ModelError::malformed_timestamp(field, value))
}

/// Human-readable form used by `Display`, e.g. `2024-05-01 09:30:00.000125`.
pub fn to_native(ts: &Timestamp) -> String {
    ts.format(NATIVE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Timelike};

    fn sample() -> Timestamp {
        NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 125)
            .unwrap()
    }

    #[test]
    fn iso_text_has_microseconds() {
        assert_eq!(to_iso(&sample()), "2024-05-01T09:30:00.000125");
    }

    #[test]
    fn native_text_uses_space_separator() {
        assert_eq!(to_native(&sample()), "2024-05-01 09:30:00.000125");
    }

    #[test]
    fn parse_accepts_iso_text() {
        assert_eq!(parse_iso("created_at", "2024-05-01T09:30:00.000125").unwrap(), sample());
    }

    #[test]
    fn parse_accepts_missing_fraction() {
        let ts = parse_iso("created_at", "2024-05-01T09:30:00").unwrap();
        assert_eq!(ts, sample().with_nanosecond(0).unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = parse_iso("created_at", "not-a-date").unwrap_err();
        assert_eq!(err, ModelError::malformed_timestamp("created_at", "not-a-date"));
    }

    #[test]
    fn now_has_no_sub_microsecond_digits() {
        let ts = now();
        assert_eq!(parse_iso("updated_at", &to_iso(&ts)).unwrap(), ts);
    }
}
