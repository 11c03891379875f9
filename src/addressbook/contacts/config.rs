use std::path::PathBuf;
use std::str::FromStr;

use chrono::FixedOffset;

use crate::addressbook::contacts::error::{ExportError, Result};

/// Store location used when none is configured.
pub const DEFAULT_STORE_PATH: &str = "./AddressBook.sqlitedb";
/// Spreadsheet output used when none is configured.
pub const DEFAULT_XLSX_PATH: &str = "contact-list.xlsx";
/// Delimited text output used when none is configured.
pub const DEFAULT_CSV_PATH: &str = "contact-list.csv";

/// Time zone birthdays are rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BirthdayZone {
    /// Zone of the executing process.
    #[default]
    Local,
    /// Explicit offset from UTC.
    Fixed(FixedOffset),
}

impl FromStr for BirthdayZone {
    type Err = ExportError;

    /// Parses `local`, `Z`/`UTC`, or a `+HH:MM`/`-HH:MM` offset.
    fn from_str(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("local") {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
            return FixedOffset::east_opt(0)
                .map(Self::Fixed)
                .ok_or_else(|| ExportError::InvalidOption("UTC offset".into()));
        }

        let invalid = || ExportError::InvalidOption(format!("UTC offset '{raw}'"));
        let (sign, rest) = match trimmed.as_bytes().first() {
            Some(b'+') => (1, &trimmed[1..]),
            Some(b'-') => (-1, &trimmed[1..]),
            _ => return Err(invalid()),
        };
        let (hours, minutes) = rest.split_once(':').ok_or_else(invalid)?;
        let hours = parse_digits(hours).ok_or_else(invalid)?;
        let minutes = parse_digits(minutes).ok_or_else(invalid)?;
        if !(0..60).contains(&minutes) {
            return Err(invalid());
        }

        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
            .map(Self::Fixed)
            .ok_or_else(invalid)
    }
}

/// Parses a field of one or two ASCII digits. Signs are not accepted.
fn parse_digits(field: &str) -> Option<i32> {
    if field.is_empty() || field.len() > 2 || !field.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Knobs of the transform pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Zone used when turning birthdays into calendar dates.
    pub zone: BirthdayZone,
    /// Drops the trailing space left after the last name part.
    pub trim_names: bool,
}

/// Everything a single export run needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub store_path: PathBuf,
    pub xlsx_path: PathBuf,
    pub csv_path: PathBuf,
    pub pipeline: PipelineOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            xlsx_path: PathBuf::from(DEFAULT_XLSX_PATH),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            pipeline: PipelineOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_offsets() {
        let zone: BirthdayZone = "-05:30".parse().unwrap();
        assert_eq!(
            zone,
            BirthdayZone::Fixed(FixedOffset::west_opt(5 * 3600 + 30 * 60).unwrap())
        );
        assert_eq!(
            "Z".parse::<BirthdayZone>().unwrap(),
            BirthdayZone::Fixed(FixedOffset::east_opt(0).unwrap())
        );
        assert_eq!("local".parse::<BirthdayZone>().unwrap(), BirthdayZone::Local);
    }

    #[test]
    fn rejects_malformed_offsets() {
        for raw in [
            "0500", "+5", "+05:75", "+25:00", "EST", "+-05:00", "-+05:00", "+05:-30", "+05:+3",
            "+:30", "+005:00",
        ] {
            assert!(raw.parse::<BirthdayZone>().is_err(), "{raw} accepted");
        }
    }
}
