//! Line-oriented FASTA input support.
//!
//! The reader here does not build full sequence objects; it translates each
//! sequence line directly into bits so that arbitrarily large files can be
//! processed with a single line held in memory at a time.

mod consts;
pub mod reader;
