//! Workbook writer — one `Tickets` sheet, bold headers, one row per entry.

use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook};

use tombola_core::{DeskConfig, Registrant};

use crate::error::ExportError;
use crate::rows::{self, EXPORT_FILE_NAME, SHEET_NAME};

/// Write `<dir>/tickets_generados.xlsx` and return its path.
///
/// An empty roster still produces a workbook with the header row; the
/// operator gets a well-formed file either way.
pub fn export_to_dir(
    dir: &Path,
    roster: &[Registrant],
    config: &DeskConfig,
) -> Result<PathBuf, ExportError> {
    let path = dir.join(EXPORT_FILE_NAME);
    write_workbook(&path, roster, config)?;
    Ok(path)
}

/// Write the roster spreadsheet to an explicit path.
pub fn write_workbook(
    path: &Path,
    roster: &[Registrant],
    config: &DeskConfig,
) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in rows::headers(config).iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &bold)?;
    }
    for (col, width) in rows::column_widths(config).iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    for (idx, entry) in roster.iter().enumerate() {
        let row_nr = (idx + 1) as u32;
        for (col, cell) in rows::row(entry, config).iter().enumerate() {
            worksheet.write_string(row_nr, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}
