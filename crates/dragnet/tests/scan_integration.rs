//! End-to-end scans over a synthetic evidence tree.
use std::io::Write;
use std::path::Path;

use dragnet::{KeywordPattern, ReportFormat, ScanMode, Scanner, write_report};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;

fn scanner(keywords: &[&str], mode: ScanMode) -> Scanner {
    Scanner::new(
        KeywordPattern::compile(keywords.iter().copied()).unwrap(),
        mode,
    )
}

fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let document = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body></w:document>"#
    );
    let content_types = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
</Types>"#;
    let file = std::fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(content_types.as_bytes()).unwrap();
    zip.start_file("word/document.xml", options).unwrap();
    zip.write_all(document.as_bytes()).unwrap();
    zip.finish().unwrap();
}

fn write_sqlite(path: &Path) {
    let conn = rusqlite::Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE contacts (name TEXT, account TEXT);
         INSERT INTO contacts VALUES ('Jane Doe', 'acct-9981');",
    )
    .unwrap();
}

#[test]
fn mixed_evidence_tree_end_to_end() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    std::fs::create_dir(root.join("mail")).unwrap();
    std::fs::write(root.join("mail/archive"), b"To: j.doe\nacct-5555 noted\n").unwrap();
    write_docx(&root.join("memo.docx"), &["internal memo", "pay acct-9981 now"]);
    write_sqlite(&root.join("crm.sqlite"));
    std::fs::write(root.join("noise.bin"), b"acct-0000").unwrap();
    std::fs::write(root.join("clean.docx"), b"").unwrap();

    let (records, stats) = scanner(&["acct*"], ScanMode::Normal).scan(root);

    assert_eq!(stats.files_seen, 5);
    // crm.sqlite, mail/archive, memo.docx match; noise.bin has a
    // recognized-unknown extension so normal mode never raw-searches it;
    // the empty docx fails extraction and is contained.
    let names: Vec<&str> = records
        .iter()
        .map(|r| Path::new(&r.path).file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["crm.sqlite", "archive", "memo.docx"]);

    for record in &records {
        assert_eq!(record.status, "MATCH");
        assert_eq!(record.sha1.len(), 40);
    }

    let docx_record = records.iter().find(|r| r.path.ends_with("memo.docx")).unwrap();
    assert_eq!(docx_record.extension, "DOCX");
    assert!(docx_record.keyword.starts_with("acct-9981"));

    let mbox_record = records.iter().find(|r| r.path.ends_with("archive")).unwrap();
    assert_eq!(mbox_record.extension, "DATA");
}

#[test]
fn deep_mode_widens_coverage() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    std::fs::write(root.join("notes.txt"), b"acct-1111").unwrap();
    std::fs::write(root.join("broken.xlsx"), b"not a workbook acct-2222").unwrap();

    let (normal, _) = scanner(&["acct*"], ScanMode::Normal).scan(root);
    assert!(normal.is_empty());

    let (deep, stats) = scanner(&["acct*"], ScanMode::Deep).scan(root);
    assert_eq!(stats.matches, 2);
    let keywords: Vec<&str> = deep.iter().map(|r| r.keyword.as_str()).collect();
    assert!(keywords.contains(&"acct-2222"));
    assert!(keywords.contains(&"acct-1111"));
}

#[test]
fn repeated_scans_produce_identical_reports() {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    std::fs::write(root.join("one"), b"acct-1").unwrap();
    std::fs::write(root.join("two"), b"acct-2").unwrap();
    write_sqlite(&root.join("crm.db"));

    let scanner = scanner(&["acct*"], ScanMode::Normal);

    let out_a = dir.path().join("report-a.csv");
    let out_b = dir.path().join("report-b.csv");
    let (records_a, _) = scanner.scan(root);
    write_report(&out_a, ReportFormat::Csv, &records_a).unwrap();
    let (records_b, _) = scanner.scan(root);
    write_report(&out_b, ReportFormat::Csv, &records_b).unwrap();

    assert_eq!(
        std::fs::read(&out_a).unwrap(),
        std::fs::read(&out_b).unwrap()
    );
}

#[test]
fn sqlite_connection_leaves_no_lock_behind() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("case.sqlite");
    write_sqlite(&db);

    let (records, _) = scanner(&["acct*"], ScanMode::Normal).scan(dir.path());
    assert_eq!(records.len(), 1);

    // An immediate write transaction fails if the scan left a reader open.
    let conn = rusqlite::Connection::open(&db).unwrap();
    conn.execute_batch("BEGIN IMMEDIATE; INSERT INTO contacts VALUES ('a', 'b'); COMMIT;")
        .unwrap();
}

#[test]
fn first_match_wins_within_a_document() {
    let dir = TempDir::new().unwrap();
    write_docx(
        &dir.path().join("memo.docx"),
        &["first invoice mention", "second invoice mention"],
    );

    let (records, _) = scanner(&["invoice"], ScanMode::Normal).scan(dir.path());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].keyword, "invoice");
}

#[test]
fn hash_failure_degrades_to_sentinel_not_a_dropped_match() {
    // Covered at the unit level in hash.rs; here the record shape is
    // checked through the public API with a real file.
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("hit"), b"acct-9981").unwrap();
    let (records, _) = scanner(&["acct*"], ScanMode::Normal).scan(dir.path());
    assert_eq!(records.len(), 1);
    assert_ne!(records[0].sha1, dragnet::hash::HASH_UNAVAILABLE);
}
