//! Import specifier resolution.
//!
//! Turns the string written in an import statement into a path on disk,
//! following the lookup order bundlers commonly use. Resolution is purely
//! lexical: package manifests (`main`, `exports`) are never consulted.

use std::path::{Path, PathBuf};

use crate::utils::normalize_path;

/// Extensions probed, in order, for extension-less specifiers.
pub const RESOLVE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

/// Whether a specifier refers to something outside the project's relative
/// file tree (a package, a scoped package or an absolute path).
pub fn is_external_specifier(specifier: &str) -> bool {
    specifier.starts_with('@') || !specifier.starts_with('.') || specifier.starts_with('/')
}

/// Resolve `specifier` as written in `from_file` to an absolute path.
///
/// Returns `None` for external specifiers. For relative specifiers a path is
/// always returned, even when nothing on disk matches: the read step is the
/// one that reports missing files.
pub fn resolve_import_path(specifier: &str, from_file: &Path) -> Option<PathBuf> {
    if is_external_specifier(specifier) {
        return None;
    }

    let base_dir = from_file.parent()?;
    let candidate = normalize_path(&base_dir.join(specifier));

    if candidate.extension().is_some() {
        return Some(candidate);
    }

    for ext in RESOLVE_EXTENSIONS {
        let with_ext = append_extension(&candidate, ext);
        if with_ext.is_file() {
            return Some(with_ext);
        }
    }

    for ext in RESOLVE_EXTENSIONS {
        let index_path = candidate.join(format!("index.{}", ext));
        if index_path.is_file() {
            return Some(index_path);
        }
    }

    Some(candidate)
}

/// Append `.ext` to the file name. Unlike `Path::with_extension`, nothing
/// already in the name is replaced.
fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
