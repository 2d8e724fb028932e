use crate::logging::{LogTarget, Logger};
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_log_dir() -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let uniq = COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!("lifeadmin-logs-{nanos}-{uniq}"))
}

fn logger_in_temp_dir() -> Logger {
    let logger = Logger::new();
    logger.set_log_dir(temp_log_dir());
    logger
}

#[test]
fn logger_defers_file_creation_until_needed() {
    let logger = logger_in_temp_dir();
    assert!(logger.log_path().is_none());

    logger.info("console only", LogTarget::ConsoleOnly);
    assert!(logger.log_path().is_none());

    logger.info("file line", LogTarget::FileOnly);
    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("file line"));
    assert!(contents.contains("INFO"));
}

#[test]
fn logger_writes_levels_and_combined_targets() {
    let logger = logger_in_temp_dir();

    logger.warn("warn line", LogTarget::FileOnly);
    logger.error("error line", LogTarget::ConsoleAndFile);

    let path = logger.log_path().expect("log path should be set");
    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("WARN"));
    assert!(contents.contains("warn line"));
    assert!(contents.contains("ERROR"));
    assert!(contents.contains("error line"));
}

#[test]
fn logger_skips_file_logging_when_disabled() {
    let logger = logger_in_temp_dir();
    logger.set_file_logging_enabled(false);

    logger.info("file should not exist", LogTarget::ConsoleAndFile);
    assert!(logger.log_path().is_none());

    logger.set_file_logging_enabled(true);
    logger.info("now write", LogTarget::FileOnly);
    assert!(logger.log_path().is_some());
}

#[test]
fn clones_share_one_session_file() {
    let logger = logger_in_temp_dir();
    let clone = logger.clone();

    logger.info("from original", LogTarget::FileOnly);
    clone.info("from clone", LogTarget::FileOnly);

    assert_eq!(logger.log_path(), clone.log_path());
    let contents = fs::read_to_string(logger.log_path().unwrap()).unwrap();
    assert!(contents.contains("from original"));
    assert!(contents.contains("from clone"));
}

#[test]
fn log_dir_is_frozen_after_first_file_line() {
    let logger = logger_in_temp_dir();
    logger.info("first", LogTarget::FileOnly);
    let before = logger.log_path().unwrap();

    logger.set_log_dir(temp_log_dir());
    logger.info("second", LogTarget::FileOnly);
    assert_eq!(logger.log_path().unwrap(), before);
}
