use tracing::{info, instrument};

use crate::addressbook::contacts::config::ExportConfig;
use crate::addressbook::contacts::error::Result;
use crate::addressbook::contacts::io;
use crate::addressbook::contacts::pipeline::{self, PipelineReport};
use crate::addressbook::contacts::store;

/// Loads the address book store, builds the contact list, and writes both
/// output files. Any failure aborts the run before output is committed.
#[instrument(
    level = "info",
    skip_all,
    fields(
        store = %config.store_path.display(),
        xlsx = %config.xlsx_path.display(),
        csv = %config.csv_path.display()
    )
)]
pub fn export_contacts(config: &ExportConfig) -> Result<PipelineReport> {
    let rows = store::load_rows(&config.store_path)?;
    let list = pipeline::build_contact_list(rows, &config.pipeline)?;
    io::write_outputs(&list.contacts, &config.xlsx_path, &config.csv_path)?;
    info!(contact_count = list.report.contacts, "export finished");
    Ok(list.report)
}
