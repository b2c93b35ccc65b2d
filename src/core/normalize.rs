//! Comment stripping.
//!
//! Textual rules per [`FileType`]. The rules do not know about string or
//! template literals, so comment markers inside them are removed too.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::FileType;

static LINE_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)//.*$").unwrap());

static BLOCK_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").unwrap());

static HASH_COMMENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?mR)#.*$").unwrap());

static MARKUP_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());

static BLANK_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*[\r\n]").unwrap());

/// Remove comments from `content` according to `file_type`.
pub fn strip_comments(content: &str, file_type: FileType) -> String {
    match file_type {
        FileType::Script => apply(
            content,
            &[&*LINE_COMMENT_REGEX, &*BLOCK_COMMENT_REGEX, &*BLANK_LINE_REGEX],
        ),
        FileType::Python => apply(content, &[&*HASH_COMMENT_REGEX, &*BLANK_LINE_REGEX]),
        FileType::Markup => apply(content, &[&*MARKUP_COMMENT_REGEX]),
        FileType::Stylesheet => apply(content, &[&*BLOCK_COMMENT_REGEX]),
        FileType::Markdown => content.to_string(),
        FileType::Other => apply(
            content,
            &[
                &*LINE_COMMENT_REGEX,
                &*BLOCK_COMMENT_REGEX,
                &*HASH_COMMENT_REGEX,
                &*MARKUP_COMMENT_REGEX,
                &*BLANK_LINE_REGEX,
            ],
        ),
    }
}

fn apply(content: &str, rules: &[&Regex]) -> String {
    rules.iter().fold(content.to_string(), |text, re| {
        re.replace_all(&text, "").into_owned()
    })
}
