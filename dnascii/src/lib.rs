//! Finds ASCII text hidden in nucleotide sequences: maps bases to bits
//! ({A,C} to 0, {G,T} to 1), scans all eight intra-byte bit alignments in a
//! single streaming pass and ranks them by how often they decode to
//! printable characters.

pub mod decoder;
pub mod fasta;
pub mod freq;
pub mod progress;
pub mod sequence;

#[doc(hidden)]
pub mod _internal_test_data;
