//! Report writers.
//!
//! Both formats open with a UTF-8 byte-order mark so the files load
//! cleanly in the spreadsheet tools common on examiner workstations. A
//! scan with zero matches still writes the report (BOM, and the header
//! row for CSV).
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::types::MatchRecord;

const BOM: &str = "\u{FEFF}";

/// Selectable report layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    /// Pipe-delimited text, one `MATCH | keyword | EXT | sha1 | path`
    /// line per record.
    Txt,
    /// CSV with a `Status,Keyword,Extension,SHA1,Path` header row.
    Csv,
}

/// Write all records to `path` in the requested format.
pub fn write_report(path: &Path, format: ReportFormat, records: &[MatchRecord]) -> Result<()> {
    match format {
        ReportFormat::Txt => write_txt(path, records),
        ReportFormat::Csv => write_csv(path, records),
    }
}

fn write_txt(path: &Path, records: &[MatchRecord]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(BOM.as_bytes())?;
    for r in records {
        writeln!(
            out,
            "{} | {} | {} | {} | {}",
            r.status, r.keyword, r.extension, r.sha1, r.path
        )?;
    }
    out.flush()?;
    Ok(())
}

fn write_csv(path: &Path, records: &[MatchRecord]) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(BOM.as_bytes())?;

    let mut writer = csv::Writer::from_writer(file);
    if records.is_empty() {
        // serialize() derives the header from the first record; with no
        // records the header must be written explicitly.
        writer.write_record(["Status", "Keyword", "Extension", "SHA1", "Path"])
            .map_err(csv_io)?;
    }
    for record in records {
        writer.serialize(record).map_err(csv_io)?;
    }
    writer.flush()?;
    Ok(())
}

fn csv_io(err: csv::Error) -> crate::error::ScanError {
    crate::error::ScanError::Io(std::io::Error::other(err))
}
