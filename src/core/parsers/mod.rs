//! Source parsers.
//!
//! - `jsx`: JavaScript/TypeScript (with JSX) parser built on swc

pub mod jsx;
