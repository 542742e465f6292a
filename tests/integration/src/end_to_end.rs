//! End-to-end scenarios against the fixture documents
//!
//! Each test copies `test-fixtures/markers/sample-readme.md` into a temp
//! directory and runs the full read -> substitute -> write flow on it.

use between_core::{
    CommentSyntax, CommentType, ContentSource, Error, ReplaceConfig, replace_between,
};
use between_fs::NormalizedPath;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/markers")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixture(name)).unwrap()
}

/// Copy the sample README into a temp dir and return the copy's path.
fn setup_target() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("readme.md");
    fs::copy(fixture("sample-readme.md"), &target).unwrap();
    (temp, target)
}

fn md_config(target: &Path, source: &str) -> ReplaceConfig {
    ReplaceConfig::new(
        "API DOC",
        target,
        ContentSource::from_path(Some(fixture(source))),
        CommentType::Markdown.syntax(),
    )
}

#[tokio::test]
async fn test_replace_text_from_file() {
    let (_temp, target) = setup_target();

    replace_between(&md_config(&target, "sample-api.md")).await.unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), read_fixture("expected.md"));
}

#[tokio::test]
async fn test_replace_text_with_explicit_begin_and_end() {
    let (_temp, target) = setup_target();
    let mut config = md_config(&target, "sample-api.md");
    config.syntax = CommentSyntax::new("<!---", "--->");

    replace_between(&config).await.unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), read_fixture("expected.md"));
}

#[tokio::test]
async fn test_running_twice_matches_running_once() {
    let (_temp, target) = setup_target();
    let config = md_config(&target, "sample-api.md");

    replace_between(&config).await.unwrap();
    let outcome = replace_between(&config).await.unwrap();

    assert!(!outcome.changed);
    assert_eq!(fs::read_to_string(&target).unwrap(), read_fixture("expected.md"));
}

#[tokio::test]
async fn test_empty_source_file_keeps_target() {
    let (_temp, target) = setup_target();

    let err = replace_between(&md_config(&target, "empty.md")).await.unwrap_err();

    assert_eq!(err.to_string(), "Source content is empty.");
    assert_eq!(fs::read_to_string(&target).unwrap(), read_fixture("sample-readme.md"));
}

#[tokio::test]
async fn test_unmatched_syntax_keeps_target() {
    let (_temp, target) = setup_target();
    let mut config = md_config(&target, "sample-api.md");
    config.syntax = CommentSyntax::new("<!!!!", "!!!!>");

    let err = replace_between(&config).await.unwrap_err();

    assert!(matches!(err, Error::MissingTokens { .. }));
    assert!(
        err.to_string()
            .starts_with("Target file content does not have necessary tokens")
    );
    assert_eq!(fs::read_to_string(&target).unwrap(), read_fixture("sample-readme.md"));
}

#[test]
fn test_inferred_comment_type_matches_table() {
    let (_temp, target) = setup_target();
    let path = NormalizedPath::new(&target);

    let kind = path.extension().and_then(CommentType::from_extension).unwrap();

    assert_eq!(kind.syntax(), CommentType::Markdown.syntax());
}
