//! Regex specifier detection.
//!
//! Runs over the raw text regardless of whether the file parses, so it also
//! picks up `require()` calls and matches inside comments or strings.

use std::sync::LazyLock;

use regex::Regex;

static IMPORT_FROM_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"import\s+(?:[\w*\s{},]*)\s+from\s+['"]([^'"]+)['"]"#).unwrap()
});

static DYNAMIC_IMPORT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"import\(['"]([^'"]+)['"]\)"#).unwrap());

static REQUIRE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"require\(['"]([^'"]+)['"]\)"#).unwrap());

/// Specifiers matched by the import/dynamic-import/require patterns, grouped
/// by pattern and in text order within each group.
pub fn pattern_specifiers(content: &str) -> Vec<String> {
    [&*IMPORT_FROM_REGEX, &*DYNAMIC_IMPORT_REGEX, &*REQUIRE_REGEX]
        .into_iter()
        .flat_map(|re| re.captures_iter(content))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
