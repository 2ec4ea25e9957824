//! The windowed offset decoder.
//!
//! The decoder advances through the bit stream in whole bytes while
//! re-examining all eight intra-byte bit alignments of the current window,
//! so a single pass over the input covers every possible global alignment
//! of a hidden byte stream.

use std::collections::VecDeque;

use log::debug;

use crate::sequence::{Bit, BitNum, BitRecord};

/// Number of intra-byte bit alignments examined by the decoder.
pub const NUM_OFFSETS: usize = 8;

const BYTE_WIDTH: usize = 8;

// The buffer must be able to serve every offset (7 + 8 bits) before a
// decode pass; it is topped up below this threshold.
const REFILL_THRESHOLD: usize = 2 * BYTE_WIDTH;

/// A decoded byte that passed the character filter, recorded with the
/// absolute bit position its window started at.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Hit {
    position: BitNum,
    value: char,
}

impl Hit {
    #[must_use]
    pub fn new(position: BitNum, value: char) -> Self {
        Self { position, value }
    }

    /// Returns the absolute bit position of the first bit of the decoded
    /// window.
    #[must_use]
    pub fn position(&self) -> BitNum {
        self.position
    }

    /// Returns the decoded character.
    #[must_use]
    pub fn value(&self) -> char {
        self.value
    }
}

/// Per-offset record of every [`Hit`] found in one pass over the input.
///
/// All eight offsets are always present; offsets that never produced a hit
/// map to an empty list.
#[derive(Debug, Clone, Eq, PartialEq, Default)]
pub struct OffsetTable {
    hits: [Vec<Hit>; NUM_OFFSETS],
}

impl OffsetTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the hits recorded for given offset, in discovery order
    /// (which is also ascending position order).
    ///
    /// # Panics
    /// This function panics if `offset` >= [`NUM_OFFSETS`].
    #[must_use]
    pub fn hits(&self, offset: usize) -> &[Hit] {
        &self.hits[offset]
    }

    /// Iterates over `(offset, hits)` pairs, in ascending offset order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Hit])> {
        self.hits
            .iter()
            .enumerate()
            .map(|(offset, hits)| (offset, hits.as_slice()))
    }

    /// Returns the characters recorded for given offset concatenated in
    /// position order, i.e. the text the input decodes to at that
    /// alignment.
    #[must_use]
    pub fn decoded_text(&self, offset: usize) -> String {
        self.hits[offset].iter().map(|hit| hit.value()).collect()
    }

    /// Returns the total number of hits across all offsets.
    #[must_use]
    pub fn total_hits(&self) -> usize {
        self.hits.iter().map(Vec::len).sum()
    }

    fn push(&mut self, offset: usize, hit: Hit) {
        self.hits[offset].push(hit);
    }
}

/// Returns `true` if a decoded byte value is counted as a hit.
///
/// The accepted set is the printable ASCII range plus the vertical tab,
/// form feed and shift-in control codes.
///
/// # Examples
/// ```
/// use dnascii::decoder::is_accepted;
///
/// assert!(is_accepted(b'A'));
/// assert!(is_accepted(11));
/// assert!(!is_accepted(0));
/// assert!(!is_accepted(200));
/// ```
#[inline]
#[must_use]
pub fn is_accepted(value: u8) -> bool {
    (32..=127).contains(&value) || matches!(value, 11 | 12 | 15)
}

/// Scans a stream of bit records for bytes in the accepted character set at
/// all eight bit alignments.
///
/// Records are pulled lazily, at most one per 8-bit advance, so the memory
/// footprint stays bounded by the longest input line. A source error ends
/// the scan immediately. Trailing bits that cannot fill a whole window at a
/// given offset are dropped, not padded.
///
/// # Examples
/// ```
/// use dnascii::fasta::reader::FastaBitReader;
/// use dnascii::{decoder, sequence::BitNum};
///
/// let reader = FastaBitReader::new(">x\nAACCGGTT\n".as_bytes());
/// let table = decoder::decode(reader).unwrap();
///
/// assert_eq!(table.hits(0).len(), 1);
/// assert_eq!(table.hits(0)[0].position(), BitNum::new(0));
/// assert_eq!(table.hits(0)[0].value(), '\x0f');
/// ```
pub fn decode<I, E>(records: I) -> Result<OffsetTable, E>
where
    I: IntoIterator<Item = Result<BitRecord, E>>,
{
    let mut records = records.into_iter();
    let mut table = OffsetTable::new();
    let mut buffer: VecDeque<Bit> = VecDeque::with_capacity(2 * REFILL_THRESHOLD);
    let mut bits_parsed = BitNum::ZERO;

    loop {
        if buffer.len() < REFILL_THRESHOLD {
            if let Some(record) = records.next() {
                buffer.extend(record?.into_bits());
            }
        }
        if buffer.is_empty() {
            break;
        }

        for offset in 0..NUM_OFFSETS {
            if buffer.len() < offset + BYTE_WIDTH {
                break;
            }

            let value = window_value(&buffer, offset);
            if is_accepted(value) {
                let position = bits_parsed + BitNum::new(offset as u64);
                table.push(offset, Hit::new(position, value as char));
            }
        }

        buffer.drain(..BYTE_WIDTH.min(buffer.len()));
        bits_parsed += BitNum::new(BYTE_WIDTH as u64);
    }

    debug!(
        "scanned {} bits, {} hits across {} offsets",
        bits_parsed,
        table.total_hits(),
        NUM_OFFSETS
    );

    Ok(table)
}

/// Interprets the 8 bits starting at `offset` as a big-endian byte.
fn window_value(buffer: &VecDeque<Bit>, offset: usize) -> u8 {
    buffer
        .iter()
        .skip(offset)
        .take(BYTE_WIDTH)
        .fold(0, |acc, bit| (acc << 1) | bit.value())
}

#[cfg(test)]
mod tests {
    use crate::decoder::{decode, is_accepted, Hit, OffsetTable, NUM_OFFSETS};
    use crate::fasta::reader::{FastaBitReader, FastaReaderError};
    use crate::sequence::{Bit, BitNum, BitRecord};

    fn decode_bits(bits: Vec<Bit>) -> OffsetTable {
        let records: Vec<Result<BitRecord, FastaReaderError>> = vec![Ok(BitRecord::new(bits))];
        decode(records).unwrap()
    }

    fn bits_of(s: &str) -> Vec<Bit> {
        s.chars()
            .map(|ch| if ch == '1' { Bit::One } else { Bit::Zero })
            .collect()
    }

    #[test]
    fn test_accepted_value_set() {
        for value in 0..=u8::MAX {
            let expected = (32..=127).contains(&value) || value == 11 || value == 12 || value == 15;
            assert_eq!(is_accepted(value), expected, "value {}", value);
        }
    }

    #[test]
    fn decodes_single_byte_at_offset_zero() {
        let table = decode_bits(bits_of("00001111"));

        assert_eq!(table.hits(0), &[Hit::new(BitNum::new(0), '\x0f')]);
        for offset in 1..NUM_OFFSETS {
            assert!(table.hits(offset).is_empty());
        }
    }

    #[test]
    fn table_always_has_eight_offsets() {
        let table = decode_bits(vec![]);

        assert_eq!(table.iter().count(), NUM_OFFSETS);
        assert_eq!(table.total_hits(), 0);
    }

    #[test]
    fn never_reads_past_end_of_stream() {
        // 12 bits: the first pass can serve offsets 0..=4 only, the second
        // pass has 4 bits left and must not decode at all.
        let table = decode_bits(bits_of("000011110011"));

        assert_eq!(table.hits(0), &[Hit::new(BitNum::new(0), '\x0f')]);
        assert!(table.hits(1).is_empty());
        assert_eq!(table.hits(2), &[Hit::new(BitNum::new(2), '<')]);
        assert_eq!(table.hits(3), &[Hit::new(BitNum::new(3), 'x')]);
        for offset in 4..NUM_OFFSETS {
            assert!(table.hits(offset).is_empty());
        }
    }

    #[test]
    fn hit_positions_match_their_offset() {
        let reader = FastaBitReader::new(
            ">r\nGATTACAGATTACAGATTACA\nTTGGCCAATTGGCCAA\nACGTACGTACGT\n".as_bytes(),
        );
        let table = decode(reader).unwrap();

        for (offset, hits) in table.iter() {
            for hit in hits {
                assert_eq!((hit.position().get() - offset as u64) % 8, 0);
            }
        }
    }

    #[test]
    fn merges_residual_bits_across_record_boundaries() {
        // "HI" split mid-byte over two records; the second byte only becomes
        // decodable once the residual bits of the first record are extended
        // with the second one.
        let records: Vec<Result<BitRecord, FastaReaderError>> = vec![
            Ok(BitRecord::new(bits_of("01001000010"))),
            Ok(BitRecord::new(bits_of("01001"))),
        ];
        let table = decode(records).unwrap();

        assert_eq!(
            table.hits(0),
            &[
                Hit::new(BitNum::new(0), 'H'),
                Hit::new(BitNum::new(8), 'I')
            ]
        );
        assert_eq!(table.decoded_text(0), "HI");
    }

    #[test]
    fn propagates_source_errors() {
        let records: Vec<Result<BitRecord, FastaReaderError>> =
            vec![Err(FastaReaderError::InvalidBase('x'))];
        let result = decode(records);

        assert!(matches!(result, Err(FastaReaderError::InvalidBase('x'))));
    }

    #[test]
    fn decode_is_idempotent() {
        let input = ">r\nGATTACAGATTACAGATTACA\nACGTACGTACGTACGTACGT\n";

        let table_1 = decode(FastaBitReader::new(input.as_bytes())).unwrap();
        let table_2 = decode(FastaBitReader::new(input.as_bytes())).unwrap();

        assert_eq!(table_1, table_2);
    }

    #[test]
    fn decoded_text_concatenates_hits_in_order() {
        let table = decode_bits(bits_of("0100100001001001"));

        assert_eq!(table.decoded_text(0), "HI");
        assert_eq!(
            table.hits(0),
            &[
                Hit::new(BitNum::new(0), 'H'),
                Hit::new(BitNum::new(8), 'I')
            ]
        );
    }
}
