use crate::sequence::Base;

pub(super) const FASTA_HEADER_PREFIX: u8 = b'>';

pub(super) const FASTA_VALID_BASE_BYTES: [bool; 256] = {
    let mut valid = [false; 256];

    valid[b'A' as usize] = true;
    valid[b'C' as usize] = true;
    valid[b'G' as usize] = true;
    valid[b'T' as usize] = true;

    valid
};

// Entries for invalid bytes are never read; FASTA_VALID_BASE_BYTES is
// consulted first.
pub(super) const FASTA_BYTE_TO_BASE: [Base; 256] = {
    let mut bases = [Base::A; 256];

    bases[b'A' as usize] = Base::A;
    bases[b'C' as usize] = Base::C;
    bases[b'G' as usize] = Base::G;
    bases[b'T' as usize] = Base::T;

    bases
};
