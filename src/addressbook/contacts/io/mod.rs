//! Output sinks for the finished contact list.
//!
//! Both files are staged next to their final location and only renamed into
//! place once every write has succeeded. Files from an earlier run are moved
//! aside first and put back if any rename fails, so a failed run leaves the
//! previous output exactly as it was.

pub mod csv_write;
pub mod excel_write;

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::addressbook::contacts::error::{ExportError, Result};
use crate::addressbook::contacts::model::{NormalizedContact, SheetTable};

const STAGING_SUFFIX: &str = ".partial";
const BACKUP_SUFFIX: &str = ".bak";

/// Writes the spreadsheet and the CSV file, committing both or neither.
#[instrument(
    level = "info",
    skip_all,
    fields(xlsx = %xlsx_path.display(), csv = %csv_path.display())
)]
pub fn write_outputs(
    contacts: &[NormalizedContact],
    xlsx_path: &Path,
    csv_path: &Path,
) -> Result<()> {
    let mut outputs = [PendingOutput::new(xlsx_path), PendingOutput::new(csv_path)];

    if let Err(err) = stage(contacts, &outputs[0].stage, &outputs[1].stage) {
        rollback(&mut outputs);
        return Err(err);
    }

    for idx in 0..outputs.len() {
        if let Err(err) = outputs[idx].commit() {
            rollback(&mut outputs);
            return Err(err);
        }
    }
    for output in &outputs {
        output.release_backup();
    }

    info!(contact_count = contacts.len(), "contact list written");
    Ok(())
}

/// One output file on its way from the staging path to its target.
struct PendingOutput<'a> {
    target: &'a Path,
    stage: PathBuf,
    backup: Option<PathBuf>,
    committed: bool,
}

impl<'a> PendingOutput<'a> {
    fn new(target: &'a Path) -> Self {
        Self {
            target,
            stage: sibling_path(target, STAGING_SUFFIX),
            backup: None,
            committed: false,
        }
    }

    /// Moves an existing target file aside, then renames the staged file
    /// into place.
    fn commit(&mut self) -> Result<()> {
        if self.target.is_file() {
            let backup = sibling_path(self.target, BACKUP_SUFFIX);
            fs::rename(self.target, &backup)
                .map_err(|source| ExportError::sink(self.target, source))?;
            debug!(path = %backup.display(), "previous output moved aside");
            self.backup = Some(backup);
        }

        fs::rename(&self.stage, self.target)
            .map_err(|source| ExportError::sink(self.target, source))?;
        self.committed = true;
        Ok(())
    }

    /// Undoes whatever `commit` got through and removes the staged file.
    fn revert(&mut self) {
        if self.committed {
            remove_if_present(self.target);
            self.committed = false;
        }
        if let Some(backup) = self.backup.take() {
            match fs::rename(&backup, self.target) {
                Ok(()) => debug!(path = %self.target.display(), "previous output restored"),
                Err(err) => warn!(
                    path = %backup.display(),
                    error = %err,
                    "could not restore previous output"
                ),
            }
        }
        remove_if_present(&self.stage);
    }

    fn release_backup(&self) {
        if let Some(backup) = &self.backup {
            remove_if_present(backup);
        }
    }
}

fn rollback(outputs: &mut [PendingOutput<'_>]) {
    for output in outputs.iter_mut().rev() {
        output.revert();
    }
}

fn stage(contacts: &[NormalizedContact], xlsx_stage: &Path, csv_stage: &Path) -> Result<()> {
    let table = SheetTable::from_contacts(contacts);
    excel_write::write_workbook(xlsx_stage, &table)
        .map_err(|source| ExportError::sink(xlsx_stage, source))?;
    debug!(path = %xlsx_stage.display(), "spreadsheet staged");

    csv_write::write_csv(csv_stage, contacts)
        .map_err(|source| ExportError::sink(csv_stage, source))?;
    debug!(path = %csv_stage.display(), "csv staged");
    Ok(())
}

/// Sibling of `path` used while the file is being written.
pub fn staging_path(path: &Path) -> PathBuf {
    sibling_path(path, STAGING_SUFFIX)
}

fn sibling_path(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("output"));
    name.push(suffix);
    path.with_file_name(name)
}

fn remove_if_present(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed file"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "could not remove file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addressbook::contacts::error::SinkError;

    #[test]
    fn staging_path_is_a_sibling() {
        assert_eq!(
            staging_path(Path::new("out/contact-list.csv")),
            PathBuf::from("out/contact-list.csv.partial")
        );
    }

    #[test]
    fn failed_second_commit_restores_both_previous_files() {
        let temp_dir = tempfile::tempdir().expect("temporary directory");
        let first = temp_dir.path().join("first.txt");
        let second = temp_dir.path().join("second");
        fs::write(&first, "previous first").expect("previous file");
        fs::create_dir(&second).expect("blocking directory");
        fs::write(second.join("keep.txt"), "kept").expect("directory content");

        let mut outputs = [PendingOutput::new(&first), PendingOutput::new(&second)];
        fs::write(&outputs[0].stage, "new first").expect("first staged");
        fs::write(&outputs[1].stage, "new second").expect("second staged");

        outputs[0].commit().expect("first commit");
        assert_eq!(fs::read_to_string(&first).unwrap(), "new first");
        assert!(outputs[1].commit().is_err());
        rollback(&mut outputs);

        assert_eq!(fs::read_to_string(&first).unwrap(), "previous first");
        assert!(second.join("keep.txt").exists());
        assert!(!staging_path(&first).exists());
        assert!(!staging_path(&second).exists());
        assert!(!sibling_path(&first, BACKUP_SUFFIX).exists());
    }

    #[test]
    fn sink_errors_name_the_path() {
        let err = ExportError::sink("x.csv", SinkError::Io(std::io::Error::other("disk full")));
        assert!(err.to_string().contains("x.csv"));
    }
}
