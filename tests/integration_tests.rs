//! Integration tests for the javafy library
//!
//! Exercises the public API against the embedded catalog and config files on disk.

use std::io::Write;

use javafy::{
    decorate_lines, rewrite_keywords, rewrite_reference, Config, JavafyError, REFERENCE_TEXT,
};

#[test]
fn test_rewrite_reference_catalog() {
    let bare = REFERENCE_TEXT.matches("public final").count();
    assert!(bare > 100);

    let out = rewrite_reference();
    assert_eq!(out.matches("public final").count(), 0);
    assert_eq!(out.matches("public static final").count(), bare);
    assert_eq!(out.len(), REFERENCE_TEXT.len() + bare * "static ".len());

    assert!(out.contains("public static final int TONES = 12;"));
    assert!(out.contains("public static final class Modes{"));
    assert!(out.contains("public static final static String IONIAN = \"ionian\";"));
    // the typo line has no "public final" to match
    assert!(out.contains("public staticfinal String ALPHABETIC_PRECURSOR"));
}

#[test]
fn test_rewrite_reverses_cleanly() {
    let text = "public final int A = 1;\n    public final class B{\n}";
    let out = rewrite_keywords(text);
    assert_eq!(out.replace("public static final", "public final"), text);
}

#[test]
fn test_two_occurrences_end_to_end() {
    let text = "public final int X = 1; public final int Y = 2;";
    let out = rewrite_keywords(text);
    assert_eq!(out.matches("public static final").count(), 2);
    assert_eq!(out.matches("public final").count(), 0);
}

#[test]
fn test_decorate_reference_catalog() {
    let out = decorate_lines(REFERENCE_TEXT);
    let prefix = "public final static String ";
    let lines = REFERENCE_TEXT.split('\n').count();
    let declared = REFERENCE_TEXT.matches(prefix).count();
    assert_eq!(out.matches(prefix).count(), lines + declared);
    assert!(out.starts_with("public final static String  // Precursor values ;\n"));
    assert!(out.ends_with("public final static String     ;;\n"));
}

#[test]
fn test_decorate_python_constants() {
    let source = "HEMITONE: str = 'hemitone'\nTONE: str = 'tone'";
    assert_eq!(
        decorate_lines(source),
        "public final static String HEMITONE= \"hemitone\";\n\
         public final static String TONE= \"tone\";\n"
    );
}

#[test]
fn test_config_file_drives_both_rules() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "rewrite:\n  from: \"final\"\n  to: \"static final\"\ndecorate:\n  prefix: \"String \"\n  suffix: \";\\n\"\n"
    )
    .unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.rewrite.apply("public final X"), "public static final X");
    assert_eq!(
        config.rewrite.apply(&config.rewrite.apply("public final X")),
        "public static static final X"
    );
    assert_eq!(config.decorate.apply("A: str 'a'"), "String A\"a\";\n");
}

#[test]
fn test_malformed_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "rewrite: [not, a, map]").unwrap();

    let err = Config::load(file.path()).unwrap_err();
    assert!(matches!(err, JavafyError::Config(_)));
    assert!(err.to_string().starts_with("Invalid config:"));
}
