pub mod config;
pub mod decorate;
pub mod error;
pub mod reference;
pub mod rewrite;

pub use config::Config;
pub use decorate::{decorate_lines, Decorator};
pub use error::*;
pub use reference::REFERENCE_TEXT;
pub use rewrite::{rewrite_keywords, KeywordRule};

/// Rewrite the embedded catalog with the default rule.
/// This is what the binary prints when run without arguments.
pub fn rewrite_reference() -> String {
    rewrite_reference_with(&KeywordRule::default())
}

/// Rewrite the embedded catalog with `rule`.
pub fn rewrite_reference_with(rule: &KeywordRule) -> String {
    rule.apply(REFERENCE_TEXT)
}
