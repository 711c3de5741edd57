use dircat::output::truncate_chars;
use dircat::reader::{decode, read_file, universal_newlines};
use dircat::{
    DecodePolicy, DircatBuilder, DircatError, DircatOptions, SafePrinter, console,
    dotted_extension, read_text,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_read_text_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "olá mundo").unwrap();
    assert_eq!(read_text(&path, DecodePolicy::Ignore), "olá mundo");
}
#[test]
fn test_read_text_drops_invalid_bytes() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("mixed.txt");
    fs::write(&path, b"ab\xffcd\xc3(ef").unwrap();
    assert_eq!(read_text(&path, DecodePolicy::Ignore), "abcd(ef");
}
#[test]
fn test_read_text_replace_policy() {
    assert_eq!(decode(b"ab\xffcd", DecodePolicy::Replace), "ab\u{FFFD}cd");
}
#[test]
fn test_read_missing_file_gives_placeholder() {
    let dir = tempdir().unwrap();
    let entry = read_file(&dir.path().join("nope.txt"), DecodePolicy::Ignore);
    assert!(entry.read_failed);
    assert!(entry.content.starts_with("[Error reading file: "));
    assert!(entry.content.ends_with(']'));
}
#[test]
fn test_read_directory_gives_placeholder() {
    let dir = tempdir().unwrap();
    let content = read_text(dir.path(), DecodePolicy::Ignore);
    assert!(content.starts_with("[Error reading file: "));
}
#[test]
fn test_extension_allowlist_is_case_insensitive() {
    let options = DircatOptions::default();
    assert!(options.is_allowed(Path::new("a/README.MD")));
    assert!(options.is_allowed(Path::new("main.Cpp")));
    assert!(options.is_allowed(Path::new("archive.tar.txt")));
    assert!(!options.is_allowed(Path::new("lib.rs")));
    assert!(!options.is_allowed(Path::new("Makefile")));
    assert!(!options.is_allowed(Path::new(".txt")));
}
#[test]
fn test_builder_normalizes_extensions() {
    let options = DircatBuilder::new(".").extensions(["RS", ".Toml"]).build();
    assert_eq!(options.extensions, vec![".rs", ".toml"]);
    assert!(options.is_allowed(Path::new("Cargo.toml")));
    assert!(!options.is_allowed(Path::new("notes.txt")));
}
#[test]
fn test_config_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dircat.json");
    fs::write(&path, r#"{ "extensions": ["rs"], "preview_chars": 5 }"#).unwrap();
    let options = DircatOptions::from_json_file(&path).unwrap();
    assert_eq!(options.extensions, vec![".rs"]);
    assert_eq!(options.preview_chars, Some(5));
    assert!(options.include_hidden);
    assert_eq!(options.console_encoding.as_deref(), Some("windows-1252"));
}
#[test]
fn test_config_file_malformed() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dircat.json");
    fs::write(&path, "{ not json").unwrap();
    let err = DircatOptions::from_json_file(&path).unwrap_err();
    assert!(matches!(err, DircatError::Config { .. }));
}
#[test]
fn test_truncate_chars() {
    let long = "é".repeat(2500);
    assert_eq!(truncate_chars(&long, 2000).chars().count(), 2000);
    let short = "x".repeat(2000);
    assert_eq!(truncate_chars(&short, 2000), short);
    assert_eq!(truncate_chars("abc", 0), "");
}
#[test]
fn test_safe_printer_replaces_unmappable() {
    let printer = SafePrinter::new("windows-1252", '?');
    assert_eq!(printer.sanitize("ok ✓ café 5€"), "ok ? café 5€");
    assert_eq!(printer.sanitize("日本"), "??");
}
#[test]
fn test_safe_printer_custom_replacement() {
    let printer = SafePrinter::new("latin1", '#');
    assert_eq!(printer.sanitize("a🚀b"), "a#b");
}
#[test]
fn test_safe_printer_unknown_encoding_falls_back() {
    let printer = SafePrinter::new("no-such-codepage", '?');
    assert_eq!(printer.sanitize("a✓b"), "a✓b");
    assert!(matches!(
        console::transcode("a", "no-such-codepage", '?'),
        Err(DircatError::UnknownEncoding(_))
    ));
}
#[test]
fn test_safe_printer_println() {
    let mut out = Vec::new();
    SafePrinter::new("windows-1252", '?')
        .println(&mut out, "→ done")
        .unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "? done\n");
}
#[test]
fn test_passthrough_printer() {
    assert_eq!(SafePrinter::passthrough().sanitize("✓"), "✓");
    assert_eq!(SafePrinter::new("utf-8", '?').sanitize("✓"), "✓");
}
#[test]
fn test_unrepresentable_replacement_falls_back_to_question_mark() {
    let printer = SafePrinter::new("windows-1252", '✓');
    assert_eq!(printer.sanitize("a日b"), "a?b");
    assert_eq!(printer.sanitize("x→y→z"), "x?y?z");
}
#[test]
fn test_leading_dots_do_not_start_an_extension() {
    assert_eq!(dotted_extension(Path::new("dir/..txt")), None);
    assert_eq!(dotted_extension(Path::new(".txt")), None);
    assert_eq!(dotted_extension(Path::new(".notes.MD")).as_deref(), Some(".md"));
    assert_eq!(dotted_extension(Path::new("...a.b.Txt")).as_deref(), Some(".txt"));
    let options = DircatOptions::default();
    assert!(!options.is_allowed(Path::new("..txt")));
    assert!(options.is_allowed(Path::new(".hidden.json")));
}
#[test]
fn test_universal_newlines() {
    assert_eq!(universal_newlines("x\r\ny\rz\n"), "x\ny\nz\n");
    assert!(matches!(
        universal_newlines("plain\n"),
        std::borrow::Cow::Borrowed("plain\n")
    ));
}
