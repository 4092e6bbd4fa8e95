use crate::logging::{LOG_FILE_NAME, LogFile};

fn numbered_lines(count: usize) -> String {
    (0..count).map(|i| format!("line {i:02}\n")).collect()
}

#[test]
fn test_default_location_and_limits() {
    let log = LogFile::in_dir(std::path::Path::new("/tmp/sweep"));
    assert_eq!(log.path(), std::path::Path::new("/tmp/sweep").join(LOG_FILE_NAME));
    assert!(log.keep_bytes < log.max_bytes);
}

#[test]
fn test_missing_log_is_left_alone() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::with_limits(dir.path().join("app.log"), 100, 10);
    assert_eq!(log.trim().unwrap(), 0);
    assert!(!log.path().exists());
}

#[test]
fn test_small_log_is_kept() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::with_limits(dir.path().join("app.log"), 100, 10);
    std::fs::write(log.path(), "one\ntwo\n").unwrap();

    assert_eq!(log.trim().unwrap(), 0);
    assert_eq!(std::fs::read_to_string(log.path()).unwrap(), "one\ntwo\n");
}

#[test]
fn test_large_log_keeps_recent_whole_lines() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::with_limits(dir.path().join("app.log"), 100, 20);
    std::fs::write(log.path(), numbered_lines(20)).unwrap();

    // 8 bytes per line; the last 20 bytes start mid-way through "line 17"
    assert_eq!(log.trim().unwrap(), 160 - 16);
    assert_eq!(
        std::fs::read_to_string(log.path()).unwrap(),
        "--- 144 bytes of older entries removed ---\nline 18\nline 19\n"
    );
}

#[test]
fn test_cut_on_line_boundary_keeps_first_line() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::with_limits(dir.path().join("app.log"), 100, 24);
    std::fs::write(log.path(), numbered_lines(20)).unwrap();

    assert_eq!(log.trim().unwrap(), 136);
    assert_eq!(
        std::fs::read_to_string(log.path()).unwrap(),
        "--- 136 bytes of older entries removed ---\nline 17\nline 18\nline 19\n"
    );
}

#[test]
fn test_open_creates_directory_and_appends() {
    let dir = tempfile::tempdir().unwrap();
    let log = LogFile::with_limits(dir.path().join("nested").join("app.log"), 100, 10);

    {
        use std::io::Write;
        let mut file = log.open().unwrap();
        writeln!(file, "first").unwrap();
    }
    {
        use std::io::Write;
        let mut file = log.open().unwrap();
        writeln!(file, "second").unwrap();
    }

    assert_eq!(std::fs::read_to_string(log.path()).unwrap(), "first\nsecond\n");
}
