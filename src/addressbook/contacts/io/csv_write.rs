use std::path::Path;

use csv::{QuoteStyle, WriterBuilder};

use crate::addressbook::contacts::error::SinkError;
use crate::addressbook::contacts::model::{COLUMNS, NormalizedContact};

/// Writes the contacts as comma-separated text with a header row.
pub fn write_csv(path: &Path, contacts: &[NormalizedContact]) -> Result<(), SinkError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .from_path(path)?;

    // Written by hand so an empty list still carries the header.
    writer.write_record(COLUMNS)?;
    for contact in contacts {
        writer.serialize(contact)?;
    }
    writer.flush()?;
    Ok(())
}
