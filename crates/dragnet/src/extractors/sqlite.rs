//! Embedded-database (SQLite) extraction.
//!
//! The file opens read-only; table names come from the `sqlite_master`
//! catalog in catalog order, and every row of every table is rendered to
//! one line of text and searched. The first matching row ends the search.
//! The connection lives inside this function's scope, so it is released
//! on every exit path, including errors and the early return on a match.
//!
//! Access databases (`accdb`/`mdb`) classify into this family for the
//! size-skip policy but are not SQLite files; the catalog query fails on
//! them and the engine handles that like any other unreadable database.
use rusqlite::{Connection, OpenFlags};
use rusqlite::types::ValueRef;

use crate::error::ExtractionError;
use crate::extractors::TextExtractor;
use crate::pattern::KeywordPattern;
use crate::types::ScanTarget;

pub struct SqliteExtractor;

impl TextExtractor for SqliteExtractor {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn search(
        &self,
        target: &ScanTarget,
        pattern: &KeywordPattern,
    ) -> Result<Option<String>, ExtractionError> {
        let conn = Connection::open_with_flags(
            &target.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let tables: Vec<String> = {
            let mut stmt =
                conn.prepare("SELECT name FROM sqlite_master WHERE type = 'table'")?;
            let names = stmt.query_map([], |row| row.get::<_, String>(0))?;
            names.collect::<Result<_, _>>()?
        };

        for table in &tables {
            if let Some(found) = search_table(&conn, table, pattern)? {
                return Ok(Some(found));
            }
        }

        Ok(None)
    }
}

fn search_table(
    conn: &Connection,
    table: &str,
    pattern: &KeywordPattern,
) -> Result<Option<String>, ExtractionError> {
    // Table names come from the catalog, not from user input, but they can
    // still contain quotes and must be escaped as identifiers.
    let quoted = format!("\"{}\"", table.replace('"', "\"\""));
    let mut stmt = conn.prepare(&format!("SELECT * FROM {quoted}"))?;
    let column_count = stmt.column_count();

    let mut rows = stmt.query([])?;
    let mut values = Vec::with_capacity(column_count);

    while let Some(row) = rows.next()? {
        values.clear();
        for index in 0..column_count {
            values.push(value_text(row.get_ref(index)?));
        }
        let line = format!("{values:?}");
        if let Some(found) = pattern.find(&line) {
            return Ok(Some(found.to_owned()));
        }
    }

    Ok(None)
}

/// Textual form of one column value.
///
/// Blobs decode lossily so keyword bytes embedded in binary columns stay
/// searchable.
fn value_text(value: ValueRef<'_>) -> String {
    match value {
        ValueRef::Null => "NULL".to_string(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Text(t) => String::from_utf8_lossy(t).into_owned(),
        ValueRef::Blob(b) => String::from_utf8_lossy(b).into_owned(),
    }
}
