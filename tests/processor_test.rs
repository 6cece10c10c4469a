use std::fs;
use std::path::PathBuf;

use rstest::{fixture, rstest};
use tempfile::tempdir;

use rsproc::errors::{AppError, AppResult};
use rsproc::processor::{transform, InputRecord};
use rsproc::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

#[fixture]
fn temp_dir() -> PathBuf {
    let tempdir = tempdir().unwrap();
    fs::write(tempdir.path().join("input.txt"), "line one\nline two\n")
        .expect("Failed to write test input");
    tempdir.keep()
}

#[rstest]
fn test_load_reads_and_transforms(temp_dir: PathBuf) -> AppResult<()> {
    let input = temp_dir.join("input.txt");
    let record = InputRecord::load(&input)?;

    assert_eq!(record.path, input);
    assert_eq!(record.contents, "line one\nline two\n");
    assert_eq!(record.transformed, record.contents);
    Ok(())
}

#[rstest]
fn test_load_missing_file() {
    let result = InputRecord::load(&PathBuf::from("does-not-exist.txt"));
    match result {
        Ok(_) => panic!("Expected an error, but got OK"),
        Err(e) => {
            assert!(matches!(e, AppError::FileNotFound(_)));
            assert!(e.to_string().contains("does-not-exist.txt"));
        }
    }
}

#[rstest]
fn test_load_directory_is_not_a_file(temp_dir: PathBuf) {
    let result = InputRecord::load(&temp_dir);
    assert!(matches!(result, Err(AppError::FileNotFound(_))));
}

#[rstest]
fn test_load_empty_file(temp_dir: PathBuf) -> AppResult<()> {
    let input = temp_dir.join("empty.txt");
    fs::write(&input, "").expect("Failed to write test input");

    let record = InputRecord::load(&input)?;
    assert_eq!(record.transformed, "");
    Ok(())
}

#[rstest]
fn test_transform_is_identity() {
    assert_eq!(transform("MiXeD CaSe\n"), "MiXeD CaSe\n");
    assert_eq!(transform(""), "");
}

#[rstest]
fn test_write_to_creates_file(temp_dir: PathBuf) -> AppResult<()> {
    let input = temp_dir.join("input.txt");
    let target = temp_dir.join("out.txt");

    let record = InputRecord::load(&input)?;
    record.write_to(&target)?;

    assert_eq!(
        fs::read_to_string(&target).expect("read output"),
        record.transformed
    );
    Ok(())
}

#[rstest]
fn test_write_to_overwrites_existing(temp_dir: PathBuf) -> AppResult<()> {
    let input = temp_dir.join("input.txt");
    let target = temp_dir.join("out.txt");
    fs::write(&target, "stale content").expect("Failed to write test file");

    let record = InputRecord::load(&input)?;
    record.write_to(&target)?;
    let first = fs::read_to_string(&target).expect("read output");

    // Second run with the same input and target yields identical content
    record.write_to(&target)?;
    let second = fs::read_to_string(&target).expect("read output");

    assert_eq!(first, "line one\nline two\n");
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn test_write_to_fails_for_missing_parent_dir(temp_dir: PathBuf) {
    let input = temp_dir.join("input.txt");
    let target = temp_dir.join("no-such-dir").join("out.txt");

    let record = InputRecord::load(&input).expect("load input");
    let result = record.write_to(&target);
    match result {
        Ok(_) => panic!("Expected an error, but got OK"),
        Err(e) => assert!(matches!(e, AppError::FileWrite { .. })),
    }
}
