use std::io::{BufReader, Read};

use anyhow::{bail, Context};
use dnascii::decoder;
use dnascii::fasta::reader::FastaBitReader;
use dnascii::freq::{ranked_scores, OffsetScore};
use dnascii::progress::ProgressNotifier;
use itertools::Itertools;
use log::info;

use crate::PROGRESS_BAR;

pub(crate) fn analyze<R: Read>(reader: R) -> anyhow::Result<()> {
    let fasta_reader = FastaBitReader::new(BufReader::new(reader));
    let records = fasta_reader.into_iter().inspect(|record| {
        if let Ok(record) = record {
            PROGRESS_BAR.processed_bytes(record.size());
        }
    });

    let table = decoder::decode(records).context("Could not parse the sequence file")?;
    let scores = ranked_scores(&table);

    PROGRESS_BAR.finish();

    let top = match scores.first() {
        Some(score) if score.hit_count() > 0 => score,
        _ => bail!("No printable bytes found at any bit offset"),
    };
    info!(
        "Best alignment: bit offset {} with {} hits",
        top.offset(),
        top.hit_count()
    );

    println!("Frequency analysis of bit offsets");
    for score in &scores {
        print_score(score);
    }
    println!();

    println!("Decoded text at bit offset {}:", top.offset());
    println!("{}", table.decoded_text(top.offset()));

    Ok(())
}

fn print_score(score: &OffsetScore) {
    let top_chars = score
        .top_chars()
        .iter()
        .map(|&(ch, count)| format!("{:?} x{}", ch, count))
        .join(", ");

    println!(
        "offset {}: {} hits [{}]",
        score.offset(),
        score.hit_count(),
        top_chars
    );
}
