//! Common path helpers shared across the codebase.

use std::path::{Component, Path, PathBuf};

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding segment. The filesystem is never consulted.
///
/// `..` directly under the root is discarded, matching how `/..` behaves.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use context_builder::utils::normalize_path;
///
/// assert_eq!(normalize_path(Path::new("/a/b/../c/./d")), PathBuf::from("/a/c/d"));
/// assert_eq!(normalize_path(Path::new("a/../../b")), PathBuf::from("../b"));
/// ```
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            _ => parts.push(component),
        }
    }

    parts.iter().collect()
}

/// Compute the path of `target` relative to `base`, inserting `..` segments
/// when `target` lives outside `base`. Both paths are expected to be absolute.
///
/// The result always uses `/` as separator so documents look the same on
/// every platform. Identical paths produce an empty string.
pub fn relative_path(base: &Path, target: &Path) -> String {
    let base = normalize_path(base);
    let target = normalize_path(target);

    let base_parts: Vec<_> = base.components().collect();
    let target_parts: Vec<_> = target.components().collect();

    let common = base_parts
        .iter()
        .zip(target_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let ups = std::iter::repeat_n("..".to_string(), base_parts.len() - common);
    let downs = target_parts[common..]
        .iter()
        .map(|c| c.as_os_str().to_string_lossy().to_string());

    ups.chain(downs).collect::<Vec<_>>().join("/")
}
