/*!
 * File Access Probe Tests
 * Byte-for-byte equivalence and scratch file cleanup
 */

use concurrency_probes::file_access::{
    run_file_access_probe, run_round, write_lines, FileAccessConfig, WriteMode,
};
use concurrency_probes::IoOp;
use pretty_assertions::assert_eq;
use tempfile::tempdir;

#[test]
fn test_round_writes_equal_bytes() {
    let dir = tempdir().unwrap();
    let config = FileAccessConfig::quick(dir.path());

    let round = run_round(&config).unwrap();

    assert_eq!(round.unbuffered.bytes_written, round.buffered.bytes_written);
    assert_eq!(round.unbuffered.lines, 1_000);
    assert!(round.speedup() > 0.0);
}

#[test]
fn test_scratch_files_removed_after_probe() {
    let dir = tempdir().unwrap();
    let config = FileAccessConfig::quick(dir.path());

    let summary = run_file_access_probe(&config, |_, _| {}).unwrap().unwrap();

    assert_eq!(summary.rounds.len(), 2);
    assert_eq!(summary.failed_rounds, 0);
    assert!(!config.unbuffered_path().exists());
    assert!(!config.buffered_path().exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_missing_directory_fails_every_round() {
    let dir = tempdir().unwrap();
    let config = FileAccessConfig::quick(dir.path().join("missing"));
    let mut errors = Vec::new();

    let summary = run_file_access_probe(&config, |run, outcome| {
        if let Err(e) = outcome {
            errors.push((run, e.io_op()));
        }
    })
    .unwrap();

    assert!(summary.is_none());
    assert_eq!(
        errors,
        vec![(1, Some(IoOp::Create)), (2, Some(IoOp::Create))]
    );
}

#[test]
fn test_cleanup_when_second_write_fails() {
    let dir = tempdir().unwrap();
    let config = FileAccessConfig::quick(dir.path());

    // A directory where the buffered file should go makes its creation fail
    std::fs::create_dir(config.buffered_path()).unwrap();

    let err = run_round(&config).unwrap_err();

    assert_eq!(err.io_op(), Some(IoOp::Create));
    assert!(!config.unbuffered_path().exists());
    assert!(config.buffered_path().is_dir());
}

#[test]
fn test_custom_data_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("custom");

    let outcome = write_lines(WriteMode::Buffered { capacity: 16 }, &path, 3, "x\n").unwrap();

    // "Line 0: x\n" is 10 bytes
    assert_eq!(outcome.bytes_written, 30);
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_failed_create_keeps_preexisting_entry() {
    let dir = tempdir().unwrap();
    let config = FileAccessConfig::quick(dir.path());

    // Someone else's link sits at the unbuffered path and cannot be opened
    let target = dir.path().join("absent").join("file");
    std::os::unix::fs::symlink(target, config.unbuffered_path()).unwrap();

    let err = run_round(&config).unwrap_err();

    assert_eq!(err.io_op(), Some(IoOp::Create));
    assert!(std::fs::symlink_metadata(config.unbuffered_path()).is_ok());
    assert!(!config.buffered_path().exists());
}
