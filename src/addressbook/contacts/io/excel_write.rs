use std::path::Path;

use rust_xlsxwriter::{Table, TableColumn, Workbook};

use crate::addressbook::contacts::error::SinkError;
use crate::addressbook::contacts::model::SheetTable;

/// Longest string Excel stores in a single cell, in characters.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Writes the table as the single worksheet of a new workbook at `path`.
///
/// Cells longer than [`MAX_CELL_CHARS`] are rejected with
/// [`SinkError::CellTooLong`] before anything is saved.
pub fn write_workbook(path: &Path, table: &SheetTable) -> Result<(), SinkError> {
    check_cell_lengths(table)?;

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&table.sheet_name)?;

    for (col_idx, header) in table.columns.iter().enumerate() {
        worksheet.write_string(0, col_idx as u16, header)?;
    }

    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            worksheet.write_string((row_idx + 1) as u32, col_idx as u16, cell)?;
        }
    }

    // A worksheet table needs at least one data row.
    if !table.rows.is_empty() {
        let columns: Vec<TableColumn> = table
            .columns
            .iter()
            .map(|header| TableColumn::new().set_header(header))
            .collect();
        let mut excel_table = Table::new();
        excel_table.set_autofilter(true).set_columns(&columns);
        let col_end = (table.columns.len() as u16).saturating_sub(1);
        worksheet.add_table(0, 0, table.rows.len() as u32, col_end, &excel_table)?;
    }

    workbook.save(path)?;
    Ok(())
}

fn check_cell_lengths(table: &SheetTable) -> Result<(), SinkError> {
    for (row_idx, row) in table.rows.iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            let length = cell.chars().count();
            if length > MAX_CELL_CHARS {
                return Err(SinkError::CellTooLong {
                    row: row_idx + 1,
                    column: table.columns.get(col_idx).cloned().unwrap_or_default(),
                    length,
                });
            }
        }
    }
    Ok(())
}
