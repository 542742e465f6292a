use between_fs::NormalizedPath;
use rstest::rstest;

#[cfg(windows)]
#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("docs\\api\\README.md");
    assert_eq!(path.as_str(), "docs/api/README.md");
}

#[cfg(not(windows))]
#[test]
fn test_backslash_is_part_of_file_name() {
    let path = NormalizedPath::new("docs/api\\README.md");
    assert_eq!(path.as_str(), "docs/api\\README.md");
    assert_eq!(path.file_name(), Some("api\\README.md"));
    assert_eq!(path.to_native(), std::path::PathBuf::from("docs/api\\README.md"));
}

#[test]
fn test_to_native_returns_pathbuf() {
    let path = NormalizedPath::new("docs/README.md");
    assert!(path.to_native().to_string_lossy().contains("README.md"));
}

#[rstest]
#[case("README.md", Some("md"))]
#[case("docs/index.html", Some("html"))]
#[case("src\\lib.js", Some("js"))]
#[case("archive.tar.gz", Some("gz"))]
#[case("Makefile", None)]
#[case(".profile", None)]
#[case("trailing.", None)]
fn test_extension(#[case] input: &str, #[case] expected: Option<&str>) {
    let path = NormalizedPath::new(input);
    assert_eq!(path.extension(), expected);
}

#[test]
fn test_file_name() {
    assert_eq!(NormalizedPath::new("a/b/c.md").file_name(), Some("c.md"));
    assert_eq!(NormalizedPath::new("c.md").file_name(), Some("c.md"));
}
