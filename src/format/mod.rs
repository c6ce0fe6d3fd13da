//! Container format handling
//!
//! The command line tool reads and writes raw Y4M video; the filter itself
//! never touches files.

pub mod y4m;

pub use self::y4m::{Y4mHeader, Y4mReader, Y4mWriter};
