//! Line decoration: wrap each line of a block as a string constant.
//!
//! Intended for pasting Python-style `NAME: str = 'value'` lines into a Java
//! constants class. Quotes are normalized and the annotation removed before
//! the text is split, so the annotation can never straddle a line.

use serde::Deserialize;

pub const DEFAULT_PREFIX: &str = "public final static String ";
pub const DEFAULT_SUFFIX: &str = ";\n";
/// Exact substring stripped before splitting. Not a general annotation matcher.
pub const DEFAULT_ANNOTATION: &str = ": str ";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Decorator {
    pub prefix: String,
    pub suffix: String,
    pub annotation: String,
}

impl Default for Decorator {
    fn default() -> Self {
        Decorator {
            prefix: DEFAULT_PREFIX.to_string(),
            suffix: DEFAULT_SUFFIX.to_string(),
            annotation: DEFAULT_ANNOTATION.to_string(),
        }
    }
}

impl Decorator {
    /// Swap single quotes for double quotes and drop every annotation.
    pub fn preprocess(&self, text: &str) -> String {
        let quoted = text.replace('\'', "\"");
        if self.annotation.is_empty() {
            quoted
        } else {
            quoted.replace(self.annotation.as_str(), "")
        }
    }

    /// Decorate every line of `text`, empty lines included.
    pub fn apply(&self, text: &str) -> String {
        let cleaned = self.preprocess(text);
        let mut out = String::with_capacity(cleaned.len());
        let mut lines = 0usize;

        // split('\n') always yields at least one item, so "" becomes one line
        for line in cleaned.split('\n') {
            out.push_str(&self.prefix);
            out.push_str(line);
            out.push_str(&self.suffix);
            lines += 1;
        }

        tracing::debug!("decorated {} line(s)", lines);
        out
    }
}

/// Wrap each line as `public final static String <line>;`.
pub fn decorate_lines(text: &str) -> String {
    Decorator::default().apply(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decorate_empty() {
        assert_eq!(decorate_lines(""), "public final static String ;\n");
    }

    #[test]
    fn test_decorate_strips_annotation_before_split() {
        assert_eq!(
            decorate_lines("a: str \nb"),
            "public final static String a;\npublic final static String b;\n"
        );
        assert_eq!(
            decorate_lines("IONIAN: str = 'ionian'"),
            "public final static String IONIAN= \"ionian\";\n"
        );
    }

    #[test]
    fn test_annotation_match_is_exact() {
        // no trailing space, so nothing is stripped
        assert_eq!(
            decorate_lines("X: str= 'x'"),
            "public final static String X: str= \"x\";\n"
        );
    }

    #[test]
    fn test_decorate_keeps_empty_lines_and_order() {
        assert_eq!(
            decorate_lines("A\n\nB\n"),
            "public final static String A;\n\
             public final static String ;\n\
             public final static String B;\n\
             public final static String ;\n"
        );
    }

    #[test]
    fn test_decorate_does_not_trim() {
        assert_eq!(
            decorate_lines("  x = 1  \r"),
            "public final static String   x = 1  \r;\n"
        );
    }

    #[test]
    fn test_line_count_preserved() {
        let text = "one\ntwo: str \nthree\n\nfour";
        let cleaned = Decorator::default().preprocess(text);
        let out = decorate_lines(text);
        assert_eq!(out.matches(DEFAULT_PREFIX).count(), cleaned.split('\n').count());
        assert!(out.ends_with(";\n"));
    }

    #[test]
    fn test_custom_decorator() {
        let decorator = Decorator {
            prefix: "const ".to_string(),
            suffix: "\n".to_string(),
            annotation: String::new(),
        };
        assert_eq!(decorator.apply("a: str 'b'"), "const a: str \"b\"\n");
    }
}
