use todolist_core::{init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let log_dir = dir.path().join("logs");
    let log_dir_str = log_dir.to_str().expect("temp dir should be valid UTF-8");
    let other_dir = dir.path().join("other");
    let other_dir_str = other_dir.to_str().expect("temp dir should be valid UTF-8");

    init_logging("info", log_dir_str).expect("first init should succeed");
    init_logging("INFO", log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", log_dir_str).expect_err("level conflict should fail");
    assert!(matches!(level_error, LoggingError::Conflict(_)));

    let dir_error =
        init_logging("info", other_dir_str).expect_err("directory conflict should fail");
    assert!(matches!(dir_error, LoggingError::Conflict(_)));

    let (level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir);
    assert!(log_dir.is_dir());
}
