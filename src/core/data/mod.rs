//! Core data types shared by the traversal and rendering phases.
//!
//! ## Module Structure
//!
//! - `file_record`: FileRecord (one discovered file and what it imports)
//! - `file_type`: FileType (comment-stripping family derived from the extension)

pub mod file_record;
pub mod file_type;

pub use file_record::FileRecord;
pub use file_type::FileType;
