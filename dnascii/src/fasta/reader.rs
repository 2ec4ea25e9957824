use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::BufRead;

use crate::fasta::consts::{FASTA_BYTE_TO_BASE, FASTA_HEADER_PREFIX, FASTA_VALID_BASE_BYTES};
use crate::progress::ByteNum;
use crate::sequence::{Bit, BitRecord};

/// Error occurring during parsing a FASTA file.
#[derive(Debug)]
pub enum FastaReaderError {
    /// I/O error occurred when reading the FASTA file.
    IoError(std::io::Error),
    /// Invalid base character on a sequence line.
    InvalidBase(char),
}

impl From<std::io::Error> for FastaReaderError {
    fn from(e: std::io::Error) -> Self {
        Self::IoError(e)
    }
}

impl Display for FastaReaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FastaReaderError::IoError(e) => write!(f, "IO error: {}", e),
            FastaReaderError::InvalidBase(ch) => write!(f, "Invalid base: `{}`", ch),
        }
    }
}

impl Error for FastaReaderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FastaReaderError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

/// The result of a FASTA reading operation.
pub type FastaResult<T> = Result<T, FastaReaderError>;

/// A builder for `FastaReaderParams`.
#[derive(Debug, Clone)]
pub struct FastaReaderParamsBuilder {
    delimiter: u8,
}

impl FastaReaderParamsBuilder {
    /// Returns a new instance of `FastaReaderParamsBuilder`.
    #[must_use]
    pub fn new() -> Self {
        Self { delimiter: b'\n' }
    }

    /// Sets the delimiter character to use instead of a newline.
    pub fn delimiter(&mut self, delimiter: u8) -> &mut Self {
        let mut new = self;
        new.delimiter = delimiter;
        new
    }

    /// Builds and returns [`FastaReaderParams`].
    pub fn build(&self) -> FastaReaderParams {
        FastaReaderParams {
            delimiter: self.delimiter,
        }
    }
}

impl Default for FastaReaderParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// FASTA reading params.
#[derive(Debug, Clone)]
pub struct FastaReaderParams {
    delimiter: u8,
}

impl FastaReaderParams {
    /// Returns new builder for `FastaReaderParams`.
    #[must_use]
    pub fn builder() -> FastaReaderParamsBuilder {
        FastaReaderParamsBuilder::new()
    }
}

impl Default for FastaReaderParams {
    fn default() -> Self {
        FastaReaderParamsBuilder::default().build()
    }
}

/// Streaming FASTA reader translating each sequence line into a
/// [`BitRecord`].
///
/// Header lines (starting with `>`) and blank lines contribute no bits and
/// are skipped. Only one line is held in memory at a time.
#[derive(Debug)]
pub struct FastaBitReader<R> {
    reader: R,
    params: FastaReaderParams,
    buffer: Vec<u8>,
}

impl<R: BufRead> FastaBitReader<R> {
    /// Creates new `FastaBitReader` instance with default parameters.
    ///
    /// # Examples
    /// ```
    /// use dnascii::fasta::reader::FastaBitReader;
    ///
    /// let buf = Vec::new();
    /// let _reader = FastaBitReader::new(buf.as_slice());
    /// ```
    #[must_use]
    pub fn new(reader: R) -> Self {
        Self::with_params(reader, FastaReaderParams::default())
    }

    /// Creates new `FastaBitReader` instance with given parameters.
    ///
    /// # Examples
    /// ```
    /// use dnascii::fasta::reader::{FastaBitReader, FastaReaderParams};
    ///
    /// let buf = Vec::new();
    /// let params = FastaReaderParams::builder().delimiter(b';').build();
    /// let _reader = FastaBitReader::with_params(buf.as_slice(), params);
    /// ```
    #[must_use]
    pub fn with_params(reader: R, params: FastaReaderParams) -> Self {
        Self {
            reader,
            params,
            buffer: Vec::with_capacity(4096),
        }
    }

    /// Reads lines until the next sequence line and returns its bits, or
    /// `Ok(None)` once the end of input is reached.
    pub fn read_record(&mut self) -> FastaResult<Option<BitRecord>> {
        loop {
            self.buffer.clear();
            let bytes_read = self
                .reader
                .read_until(self.params.delimiter, &mut self.buffer)?;
            if bytes_read == 0 {
                return Ok(None);
            }

            let line = Self::strip_line(&self.buffer, self.params.delimiter);
            if line.is_empty() || line[0] == FASTA_HEADER_PREFIX {
                continue;
            }

            let bits = Self::line_to_bits(line)?;
            return Ok(Some(BitRecord::with_size(bits, ByteNum::new(bytes_read))));
        }
    }

    fn strip_line(buffer: &[u8], delimiter: u8) -> &[u8] {
        let mut line = buffer;
        while let Some(&last) = line.last() {
            if last == delimiter || last == b'\r' {
                line = &line[..line.len() - 1];
            } else {
                break;
            }
        }

        line
    }

    fn line_to_bits(line: &[u8]) -> FastaResult<Vec<Bit>> {
        let mut bits = Vec::with_capacity(line.len());
        for &ch in line {
            if FASTA_VALID_BASE_BYTES[ch as usize] {
                bits.push(FASTA_BYTE_TO_BASE[ch as usize].bit());
            } else {
                return Err(FastaReaderError::InvalidBase(ch as char));
            }
        }

        Ok(bits)
    }
}

impl<R: BufRead> IntoIterator for FastaBitReader<R> {
    type Item = FastaResult<BitRecord>;
    type IntoIter = FastaBitReaderIterator<R>;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            reader: self,
            no_errors: true,
        }
    }
}

/// Iterator implementation for [`FastaBitReader`] which iterates over all
/// sequence lines in a file. Stops after the first error.
#[derive(Debug)]
pub struct FastaBitReaderIterator<R> {
    reader: FastaBitReader<R>,
    no_errors: bool,
}

impl<R: BufRead> Iterator for FastaBitReaderIterator<R> {
    type Item = FastaResult<BitRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.no_errors {
            return None;
        }

        match self.reader.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.no_errors = false;
                Some(Err(e))
            }
        }
    }
}
