use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tempfile::tempdir;
use vpat_publish::report::{most_recent_report, SelectError};

#[test]
fn errors_when_location_does_not_exist() {
    let err = most_recent_report(Path::new("/definitely/not/a/real/location")).unwrap_err();
    assert!(matches!(err, SelectError::NotADirectory(_)));
}

#[test]
fn errors_when_location_is_a_file() {
    let dir = tempdir().expect("temp dir");
    let file = dir.path().join("vpat.md");
    fs::write(&file, "# Report").expect("write file");

    let err = most_recent_report(&file).unwrap_err();
    assert!(matches!(err, SelectError::NotADirectory(_)));
    assert!(err.to_string().contains("is not a directory"));
}

#[test]
fn errors_when_directory_is_empty() {
    let dir = tempdir().expect("temp dir");
    let err = most_recent_report(dir.path()).unwrap_err();
    assert!(matches!(err, SelectError::EmptyDirectory(_)));
    assert!(err.to_string().contains("contains no files"));
}

#[test]
fn selects_the_newest_file() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("vpat-2023-q4.md"), "# Old report").expect("write old");
    thread::sleep(Duration::from_millis(25));
    fs::write(dir.path().join("vpat-2024-q1.md"), "# New report").expect("write new");

    let selected = most_recent_report(dir.path()).expect("selection succeeds");
    assert_eq!(selected, dir.path().join("vpat-2024-q1.md"));
}

#[test]
fn selection_ignores_extension_and_name_order() {
    // A newer file wins even when it is not markdown and sorts first by name.
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("zz-report.md"), "# Report").expect("write report");
    thread::sleep(Duration::from_millis(25));
    fs::write(dir.path().join("aa-notes.txt"), "notes").expect("write notes");

    let selected = most_recent_report(dir.path()).expect("selection succeeds");
    assert_eq!(selected, dir.path().join("aa-notes.txt"));
}

#[test]
fn returned_path_is_a_direct_child_of_the_location() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("report.md"), "# Report").expect("write report");

    let selected = most_recent_report(dir.path()).expect("selection succeeds");
    assert_eq!(selected.parent(), Some(dir.path()));
}
