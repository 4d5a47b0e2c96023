// icongen - tests/e2e_emit.rs
//
// End-to-end tests for icon emission. These exercise the real filesystem
// (scratch directories via tempfile) and validate the written document with
// the same SVG parser the downstream icon pipeline uses (resvg/usvg) —
// no mocks, no stubs.

use icongen::app::emit;
use icongen::core::svg;
use resvg::usvg;
use std::fs;

/// A missing nested output directory is created and the run succeeds.
#[test]
fn e2e_creates_missing_directory_and_writes_icon() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out").join("icons");
    assert!(!out.exists());

    let written = emit::run(&out).unwrap();

    assert_eq!(written, out.join("icon.svg"));
    assert!(written.is_file());

    let content = fs::read_to_string(&written).unwrap();
    assert!(!content.is_empty());
    assert_eq!(
        content.lines().next(),
        Some(r#"<?xml version="1.0" encoding="UTF-8"?>"#)
    );
    assert!(content.contains(r#"id="bgGrad""#));
    assert!(content.contains(r#"id="iconGrad""#));
}

/// Running twice against the same location succeeds both times and leaves
/// identical content (overwrite idempotence).
#[test]
fn e2e_second_run_overwrites_identically() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("icons");

    let first = emit::run(&out).unwrap();
    let first_content = fs::read(&first).unwrap();

    let second = emit::run(&out).unwrap();
    let second_content = fs::read(&second).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_content, second_content);
}

/// The emitted file matches the pure generator's output byte for byte.
#[test]
fn e2e_written_content_matches_generator() {
    let dir = tempfile::tempdir().unwrap();
    let written = emit::run(dir.path()).unwrap();
    assert_eq!(fs::read_to_string(&written).unwrap(), svg::generate());
}

/// The written document parses as well-formed SVG with a 1024x1024 canvas.
#[test]
fn e2e_output_parses_as_svg() {
    let dir = tempfile::tempdir().unwrap();
    let written = emit::run(dir.path()).unwrap();

    let data = fs::read(&written).unwrap();
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default()).unwrap();

    assert_eq!(tree.size().width(), 1024.0);
    assert_eq!(tree.size().height(), 1024.0);
}

/// An inaccessible output location makes the run fail instead of leaving a
/// truncated file behind. A regular file standing where the output directory
/// should go blocks `create_dir_all` on every platform, including when the
/// tests run with elevated privileges where permission bits are ignored.
#[test]
fn e2e_inaccessible_output_location_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("icons");
    fs::write(&blocker, "not a directory").unwrap();

    let result = emit::run(&blocker);

    assert!(result.is_err(), "expected directory failure, got {result:?}");
    assert!(!blocker.join("icon.svg").exists());
}
