// Runs in its own binary: `enable_verbose_logging` installs a global logger.

use htf_int::enable_verbose_logging;
use std::fs;

#[test]
fn test_enable_verbose_logging_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("htf.log");

    enable_verbose_logging(Some(log_path.to_string_lossy().into_owned()));
    // Later calls are no-ops, including ones naming an unusable file.
    enable_verbose_logging(Some("/nonexistent/dir/htf.log".to_string()));
    enable_verbose_logging(None);

    log::info!("logger installed");
    log::debug!("below the configured level");

    let written = fs::read_to_string(&log_path).unwrap();
    assert!(written.contains("[INFO] logger installed"));
    assert!(!written.contains("below the configured level"));
}
