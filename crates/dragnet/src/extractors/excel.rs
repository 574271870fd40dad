//! Spreadsheet (XLSX/XLS) extraction.
//!
//! calamine opens both the OOXML and legacy binary formats behind one
//! auto-detecting entry point. Traversal order is sheets in workbook
//! order, then strict column-major within a sheet: column ascending, row
//! ascending within a column. The first matching cell ends the search;
//! later sheets, columns, and rows are never visited.
use std::fmt::Write as FmtWrite;

use calamine::{Data, Range, Reader, open_workbook_auto};

use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub struct ExcelExtractor;

impl TextExtractor for ExcelExtractor {
    fn name(&self) -> &'static str {
        "excel"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let mut workbook = open_workbook_auto(&target.path)?;

        for name in workbook.sheet_names() {
            let range = workbook.worksheet_range(&name)?;
            if let Some(found) = search_range(&range, pattern) {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

/// Column-major search over one sheet's used range.
fn search_range(range: &Range<Data>, pattern: &KeywordPattern) -> Option<String> {
    let rows: Vec<&[Data]> = range.rows().collect();
    let mut cell_text = String::new();

    for col in 0..range.width() {
        for row in &rows {
            let Some(cell) = row.get(col) else { continue };
            cell_text.clear();
            append_cell_text(&mut cell_text, cell);
            if let Some(found) = pattern.find(&cell_text) {
                return Some(found.to_owned());
            }
        }
    }

    None
}

/// Coerce one cell to its textual representation.
fn append_cell_text(buffer: &mut String, data: &Data) {
    match data {
        Data::Empty => {}
        Data::String(s) => buffer.push_str(s),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                write!(buffer, "{:.1}", f).unwrap()
            } else {
                write!(buffer, "{}", f).unwrap()
            }
        }
        Data::Int(i) => write!(buffer, "{}", i).unwrap(),
        Data::Bool(b) => buffer.push_str(if *b { "true" } else { "false" }),
        Data::DateTime(dt) => {
            if let Some(datetime) = dt.as_datetime() {
                write!(buffer, "{}", datetime.format("%Y-%m-%d %H:%M:%S")).unwrap()
            } else {
                write!(buffer, "{:?}", dt).unwrap()
            }
        }
        Data::Error(e) => write!(buffer, "#ERR: {:?}", e).unwrap(),
        Data::DateTimeIso(s) => buffer.push_str(s),
        Data::DurationIso(s) => buffer.push_str(s),
    }
}
