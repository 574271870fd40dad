//! Black-box tests against the built binary.
use std::process::Command;

use tempfile::TempDir;

fn dragnet() -> Command {
    Command::new(env!("CARGO_BIN_EXE_dragnet"))
}

#[test]
fn conflicting_flags_exit_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let keywords = dir.path().join("keywords.txt");
    std::fs::write(&keywords, "acct*\n").unwrap();
    let out = dir.path().join("report.txt");

    let output = dragnet()
        .args(["-d"])
        .arg(dir.path())
        .args(["-f"])
        .arg(&keywords)
        .args(["--out"])
        .arg(&out)
        .args(["--fast", "--deep"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
}

#[test]
fn missing_keyword_file_exits_nonzero_without_output() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.txt");

    let output = dragnet()
        .args(["-d"])
        .arg(dir.path())
        .args(["-f"])
        .arg(dir.path().join("absent.txt"))
        .args(["--out"])
        .arg(&out)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(!out.exists());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("keyword"));
}

#[test]
fn empty_keyword_file_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let keywords = dir.path().join("keywords.txt");
    std::fs::write(&keywords, "\n\n  \n").unwrap();

    let output = dragnet()
        .args(["-d"])
        .arg(dir.path())
        .args(["-f"])
        .arg(&keywords)
        .args(["--out"])
        .arg(dir.path().join("report.txt"))
        .output()
        .unwrap();

    assert!(!output.status.success());
}

#[test]
fn scan_writes_report_and_prints_match_lines() {
    let dir = TempDir::new().unwrap();
    let evidence = dir.path().join("evidence");
    std::fs::create_dir(&evidence).unwrap();
    std::fs::write(evidence.join("mbox"), b"forwarded acct-9981\n").unwrap();

    let keywords = dir.path().join("keywords.txt");
    std::fs::write(&keywords, "acct*\n").unwrap();
    let out = dir.path().join("report.csv");

    let output = dragnet()
        .args(["-d"])
        .arg(&evidence)
        .args(["-f"])
        .arg(&keywords)
        .args(["-o", "csv", "--out"])
        .arg(&out)
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("MATCH | acct-9981"));
    assert!(stdout.contains("Results saved to"));

    let report = std::fs::read(&out).unwrap();
    assert!(report.starts_with("\u{FEFF}".as_bytes()));
    let text = String::from_utf8_lossy(&report);
    assert!(text.contains("Status,Keyword,Extension,SHA1,Path"));
    assert!(text.contains("MATCH,acct-9981,DATA,"));
}
