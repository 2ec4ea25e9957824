//! Frequency analysis of the decoded hits.

use std::cmp::Reverse;
use std::collections::HashMap;

use itertools::Itertools;

use crate::decoder::OffsetTable;

/// Number of most frequent characters reported per offset.
pub const TOP_CHAR_NUM: usize = 5;

/// Hit statistics for a single bit offset.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct OffsetScore {
    offset: usize,
    hit_count: usize,
    top_chars: Vec<(char, usize)>,
}

impl OffsetScore {
    #[must_use]
    pub fn new(offset: usize, hit_count: usize, top_chars: Vec<(char, usize)>) -> Self {
        Self {
            offset,
            hit_count,
            top_chars,
        }
    }

    /// Returns the bit offset this score describes.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Returns the total number of hits at this offset.
    #[must_use]
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Returns up to [`TOP_CHAR_NUM`] most frequent characters with their
    /// counts, most frequent first. Frequency ties keep the order in which
    /// the characters were first decoded.
    #[must_use]
    pub fn top_chars(&self) -> &[(char, usize)] {
        &self.top_chars
    }
}

/// A character counter that remembers first-seen order, so that frequency
/// ties resolve to the earliest character.
#[derive(Debug, Default)]
struct CharCounter {
    counts: HashMap<char, usize>,
    order: Vec<char>,
}

impl CharCounter {
    fn add(&mut self, ch: char) {
        let count = self.counts.entry(ch).or_insert(0);
        if *count == 0 {
            self.order.push(ch);
        }
        *count += 1;
    }

    fn most_common(&self, n: usize) -> Vec<(char, usize)> {
        self.order
            .iter()
            .map(|&ch| (ch, self.counts[&ch]))
            .sorted_by_key(|&(_, count)| Reverse(count))
            .take(n)
            .collect()
    }
}

/// Computes hit statistics for every offset of the table, in ascending
/// offset order. Pure function; offsets without hits get zero-count
/// entries.
#[must_use]
pub fn score_offsets(table: &OffsetTable) -> Vec<OffsetScore> {
    table
        .iter()
        .map(|(offset, hits)| {
            let mut counter = CharCounter::default();
            for hit in hits {
                counter.add(hit.value());
            }

            OffsetScore::new(offset, hits.len(), counter.most_common(TOP_CHAR_NUM))
        })
        .collect()
}

/// Like [`score_offsets`], but sorted by hit count descending. The sort is
/// stable, so offsets with equal hit counts stay in ascending offset order.
#[must_use]
pub fn ranked_scores(table: &OffsetTable) -> Vec<OffsetScore> {
    let mut scores = score_offsets(table);
    scores.sort_by_key(|score| Reverse(score.hit_count()));
    scores
}

#[cfg(test)]
mod tests {
    use crate::decoder::{decode, OffsetTable, NUM_OFFSETS};
    use crate::fasta::reader::{FastaBitReader, FastaReaderError};
    use crate::freq::{ranked_scores, score_offsets, CharCounter, TOP_CHAR_NUM};
    use crate::sequence::BitRecord;

    fn table_for(input: &str) -> OffsetTable {
        decode(FastaBitReader::new(input.as_bytes())).unwrap()
    }

    #[test]
    fn counter_breaks_ties_by_first_seen_order() {
        let mut counter = CharCounter::default();
        for ch in "baabcc".chars() {
            counter.add(ch);
        }

        // All three characters occur twice; 'b' was seen first.
        assert_eq!(
            counter.most_common(TOP_CHAR_NUM),
            vec![('b', 2), ('a', 2), ('c', 2)]
        );
    }

    #[test]
    fn counter_sorts_by_count_descending() {
        let mut counter = CharCounter::default();
        for ch in "xyzzzy".chars() {
            counter.add(ch);
        }

        assert_eq!(
            counter.most_common(2),
            vec![('z', 3), ('y', 2)]
        );
    }

    #[test]
    fn scores_empty_table_without_failing() {
        let table = OffsetTable::new();
        let scores = score_offsets(&table);

        assert_eq!(scores.len(), NUM_OFFSETS);
        for (offset, score) in scores.iter().enumerate() {
            assert_eq!(score.offset(), offset);
            assert_eq!(score.hit_count(), 0);
            assert!(score.top_chars().is_empty());
        }
    }

    #[test]
    fn scores_follow_table_order() {
        let table = table_for(">r\nGATTACAGATTACAGATTACAGATTACA\n");
        let scores = score_offsets(&table);

        assert_eq!(scores.len(), NUM_OFFSETS);
        for (offset, score) in scores.iter().enumerate() {
            assert_eq!(score.offset(), offset);
            assert_eq!(score.hit_count(), table.hits(offset).len());
        }
    }

    #[test]
    fn top_chars_never_exceed_limit() {
        let table = table_for(">r\nACGTACGTTGCATGCAGATTACAGGATCCAGGATCCATTGGCCAATT\n");

        for score in score_offsets(&table) {
            assert!(score.top_chars().len() <= TOP_CHAR_NUM);
            assert!(score.top_chars().len() <= score.hit_count());
        }
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let table = table_for(">r\nGATTACAGATTACAGATTACAGATTACAGATTACA\n");
        let ranked = ranked_scores(&table);

        assert_eq!(ranked.len(), NUM_OFFSETS);
        for pair in ranked.windows(2) {
            assert!(pair[0].hit_count() >= pair[1].hit_count());
            if pair[0].hit_count() == pair[1].hit_count() {
                assert!(pair[0].offset() < pair[1].offset());
            }
        }
    }

    #[test]
    fn ranking_of_empty_table_keeps_offset_order() {
        let records: Vec<Result<BitRecord, FastaReaderError>> = vec![];
        let table = decode(records).unwrap();
        let ranked = ranked_scores(&table);

        let offsets: Vec<usize> = ranked.iter().map(|score| score.offset()).collect();
        assert_eq!(offsets, (0..NUM_OFFSETS).collect::<Vec<_>>());
    }
}
