use chrono::{DateTime, Local, TimeZone};

use crate::addressbook::contacts::config::BirthdayZone;
use crate::addressbook::contacts::error::{ExportError, Result};
use crate::addressbook::contacts::model::{BirthdayRaw, PersonKey};

/// Seconds between the Unix epoch and the store's reference epoch
/// (2001-01-01T00:00:00Z).
pub const REFERENCE_EPOCH_OFFSET: i64 = 978_307_200;

const DATE_FORMAT: &str = "%m/%d/%Y";

/// Renders a stored birthday as `MM/DD/YYYY` in `zone`. Absent birthdays
/// render as an empty string.
pub fn format_birthday(
    key: PersonKey,
    raw: Option<&BirthdayRaw>,
    zone: BirthdayZone,
) -> Result<String> {
    let seconds = match raw {
        None => return Ok(String::new()),
        Some(BirthdayRaw::Seconds(seconds)) => *seconds,
        Some(BirthdayRaw::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(String::new());
            }
            trimmed
                .parse::<f64>()
                .map_err(|err| invalid(key, format!("'{text}' is not numeric: {err}")))?
        }
    };

    let instant = to_instant(seconds).ok_or_else(|| {
        invalid(key, format!("{seconds} seconds is outside the supported date range"))
    })?;

    Ok(match zone {
        BirthdayZone::Local => render(&instant, &Local),
        BirthdayZone::Fixed(offset) => render(&instant, &offset),
    })
}

fn to_instant(seconds: f64) -> Option<DateTime<chrono::Utc>> {
    if !seconds.is_finite() {
        return None;
    }
    let floored = seconds.floor();
    if floored < i64::MIN as f64 || floored > i64::MAX as f64 {
        return None;
    }
    let unix_seconds = (floored as i64).checked_add(REFERENCE_EPOCH_OFFSET)?;
    DateTime::from_timestamp(unix_seconds, 0)
}

fn render<Tz: TimeZone>(instant: &DateTime<chrono::Utc>, zone: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    instant.with_timezone(zone).format(DATE_FORMAT).to_string()
}

fn invalid(key: PersonKey, reason: String) -> ExportError {
    ExportError::Transform {
        person: key,
        column: "Birthday",
        reason,
    }
}

#[cfg(test)]
mod tests {
    use chrono::FixedOffset;

    use super::*;

    fn utc() -> BirthdayZone {
        BirthdayZone::Fixed(FixedOffset::east_opt(0).unwrap())
    }

    #[test]
    fn zero_is_the_reference_epoch() {
        let raw = BirthdayRaw::Seconds(0.0);
        assert_eq!(format_birthday(1, Some(&raw), utc()).unwrap(), "01/01/2001");
    }

    #[test]
    fn negative_offsets_shift_to_previous_day() {
        let raw = BirthdayRaw::Seconds(0.0);
        let zone = BirthdayZone::Fixed(FixedOffset::west_opt(5 * 3600).unwrap());
        assert_eq!(format_birthday(1, Some(&raw), zone).unwrap(), "12/31/2000");
    }

    #[test]
    fn text_seconds_are_parsed() {
        // 1980-06-15T12:00:00Z
        let raw = BirthdayRaw::Text("-648388800.0".into());
        assert_eq!(format_birthday(1, Some(&raw), utc()).unwrap(), "06/15/1980");
    }

    #[test]
    fn absent_or_blank_is_empty() {
        assert_eq!(format_birthday(1, None, utc()).unwrap(), "");
        let blank = BirthdayRaw::Text("  ".into());
        assert_eq!(format_birthday(1, Some(&blank), utc()).unwrap(), "");
    }

    #[test]
    fn garbage_is_a_transform_error() {
        let raw = BirthdayRaw::Text("June".into());
        let err = format_birthday(42, Some(&raw), utc()).unwrap_err();
        assert!(matches!(
            err,
            ExportError::Transform { person: 42, column: "Birthday", .. }
        ));

        let raw = BirthdayRaw::Seconds(f64::NAN);
        assert!(format_birthday(42, Some(&raw), utc()).is_err());
    }
}
