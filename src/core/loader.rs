use std::{fs, io, path::Path};

/// Reads file contents for the traversal engine.
pub trait SourceLoader {
    fn load(&self, path: &Path) -> io::Result<String>;
}

/// Loads files from the local filesystem as UTF-8 text.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than failing the
/// read, so only real I/O errors produce a placeholder.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> io::Result<String> {
        let bytes = fs::read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
