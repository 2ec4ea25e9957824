use itertools::Itertools;
use lazy_static::lazy_static;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

pub const SIMPLE_FASTA_STR: &str = ">h\nAACCGGTT\n";

pub const HEADERS_ONLY_FASTA_STR: &str = ">first record\n>second record\n>third record\n";

const FASTA_LINE_WIDTH: usize = 60;

lazy_static! {
    /// 1 Mbp of deterministic pseudo-random sequence.
    pub static ref SEQ_1M_FASTA: String = random_fasta(1_000_000);
}

/// Encodes an ASCII string as bases, one base per bit, most significant bit
/// first: `A` for 0, `G` for 1.
pub fn bases_for_text(text: &str) -> String {
    text.bytes()
        .flat_map(|byte| {
            (0..8)
                .rev()
                .map(move |bit| if byte >> bit & 1 == 1 { 'G' } else { 'A' })
        })
        .collect()
}

/// Builds a single-record FASTA file whose bits spell `text` starting at
/// given bit offset (padded with `offset` zero bits).
pub fn fasta_for_text_at_offset(text: &str, offset: usize) -> String {
    let bases = "A".repeat(offset) + &bases_for_text(text);
    format!(">hidden message\n{}\n", into_lines(bases.chars()))
}

/// Builds a single-record FASTA file with `len` random bases.
pub fn random_fasta(len: usize) -> String {
    const BASES: [char; 4] = ['A', 'C', 'G', 'T'];

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(0x5EED);
    let bases = (0..len).map(|_| BASES[rng.gen_range(0..BASES.len())]);

    format!(">random sequence\n{}\n", into_lines(bases))
}

fn into_lines<I: Iterator<Item = char>>(bases: I) -> String {
    let chunks = bases.chunks(FASTA_LINE_WIDTH);
    chunks
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join("\n")
}
