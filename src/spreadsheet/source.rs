use std::io::Read;
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};
use tracing::info;

use crate::error::{Error, Result};

use super::{Decoded, decode_rows};

/// Spreadsheet flavours the decoder understands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SheetKind {
    /// Comma-delimited UTF-8; the first row is a header.
    Csv,
    /// Workbook; every row of every sheet is data.
    Xlsx,
}

impl SheetKind {
    /// Pick the flavour from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("xlsx") => Ok(Self::Xlsx),
            _ => Err(Error::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Data rows of a CSV document, header row excluded.
pub fn csv_rows<R: Read>(reader: R) -> std::result::Result<Vec<Vec<String>>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    rdr.records()
        .map(|rec| rec.map(|r| r.iter().map(str::to_string).collect()))
        .collect()
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        // `Display` renders whole floats without a fractional part.
        other => other.to_string().trim().to_string(),
    }
}

/// Rows of every sheet in workbook order.
///
/// A worksheet range starts at its first used cell, so each row is padded on
/// the left to keep column offsets absolute.
pub fn xlsx_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let mut workbook =
        open_workbook::<Xlsx<_>, _>(path).map_err(|e| Error::spreadsheet(path, e))?;

    let mut rows = Vec::new();
    for name in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&name)
            .map_err(|e| Error::spreadsheet(path, e))?;
        let lead = range.start().map(|(_, col)| col as usize).unwrap_or(0);

        info!(sheet = %name, rows = range.height(), "reading sheet");
        for row in range.rows() {
            let mut cells = vec![String::new(); lead];
            cells.extend(row.iter().map(cell_text));
            rows.push(cells);
        }
    }
    Ok(rows)
}

/// Read and decode a `.csv` or `.xlsx` export.
///
/// Any read or parse failure is reported once for the whole file, with the
/// underlying cause attached.
pub fn parse_spreadsheet(path: &Path) -> Result<Decoded> {
    let kind = SheetKind::from_path(path)?;

    let rows = match kind {
        SheetKind::Csv => {
            let file = std::fs::File::open(path).map_err(|e| Error::spreadsheet(path, e))?;
            csv_rows(file).map_err(|e| Error::spreadsheet(path, e))?
        }
        SheetKind::Xlsx => xlsx_rows(path)?,
    };

    let decoded = decode_rows(rows);
    info!(
        path = %path.display(),
        tracks = decoded.records.len(),
        rejected = decoded.rejected,
        "parsed spreadsheet"
    );
    Ok(decoded)
}
