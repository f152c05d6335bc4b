//! Integration tests that lock main-binary startup behavior for the inert
//! catalog flags, which must print and exit without entering the TUI.

use std::process::Command;

#[test]
fn main_lists_timezones() {
    let bin = env!("CARGO_BIN_EXE_formdeck");
    let output = Command::new(bin)
        .arg("--list-timezones")
        .output()
        .expect("run formdeck");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available timezones:"));
    assert!(stdout.contains("Pacific Standard Time"));
    // The empty sentinel row is not a selectable timezone.
    assert!(!stdout.contains("Select Timezone"));
}

#[test]
fn main_dumps_the_builtin_catalog_as_json() {
    let bin = env!("CARGO_BIN_EXE_formdeck");
    let output = Command::new(bin)
        .arg("--dump-catalog")
        .output()
        .expect("run formdeck");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"my-details\""));
    assert!(stdout.contains("\"navigation_items\""));
}

#[test]
fn main_rejects_an_unreadable_catalog_path() {
    let bin = env!("CARGO_BIN_EXE_formdeck");
    let output = Command::new(bin)
        .args(["--dump-catalog", "--catalog", "/nonexistent/catalog.json"])
        .output()
        .expect("run formdeck");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("read catalog"));
}
