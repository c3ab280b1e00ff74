//! Glob matching primitive.
//!
//! The boundary checker consumes glob matching as a black-box predicate.
//! Patterns use `globset` with its default options: case-sensitive, `*`
//! and `**` wildcards, and a non-literal path separator, so patterns
//! need not start or end at a `/` boundary.

use globset::Glob;

/// Returns `true` if `value` is accepted by `pattern`.
///
/// An unparsable pattern accepts nothing.
pub(crate) fn glob_matches(value: &str, pattern: &str) -> bool {
    Glob::new(pattern)
        .ok()
        .is_some_and(|glob| glob.compile_matcher().is_match(value))
}

/// Returns `true` if `pattern` contains real wildcard syntax, as opposed
/// to a literal value spelled through the `$glob` operator.
pub(crate) fn has_glob_syntax(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}
