use std::fmt::{Display, Formatter};

use derive_more::{Add, AddAssign};

use crate::progress::ByteNum;

/// A single binary digit decoded from a nucleotide base.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Bit {
    Zero = 0,
    One = 1,
}

impl Bit {
    /// Returns the numeric value of this bit.
    ///
    /// # Examples
    /// ```
    /// use dnascii::sequence::Bit;
    ///
    /// assert_eq!(Bit::Zero.value(), 0);
    /// assert_eq!(Bit::One.value(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }
}

impl Display for Bit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ch = match self {
            Bit::Zero => '0',
            Bit::One => '1',
        };

        write!(f, "{}", ch)
    }
}

/// Nucleotide base.
///
/// Only the four canonical uppercase bases are representable; input
/// validation happens at the reader level.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Base {
    /// Adenine.
    A,
    /// Cytosine.
    C,
    /// Guanine.
    G,
    /// Thymine.
    T,
}

impl Base {
    /// Maps this base to a single bit: A and C decode to `Zero`, G and T
    /// decode to `One`.
    ///
    /// # Examples
    /// ```
    /// use dnascii::sequence::{Base, Bit};
    ///
    /// assert_eq!(Base::A.bit(), Bit::Zero);
    /// assert_eq!(Base::C.bit(), Bit::Zero);
    /// assert_eq!(Base::G.bit(), Bit::One);
    /// assert_eq!(Base::T.bit(), Bit::One);
    /// ```
    #[inline]
    #[must_use]
    pub const fn bit(&self) -> Bit {
        match self {
            Base::A | Base::C => Bit::Zero,
            Base::G | Base::T => Bit::One,
        }
    }
}

impl Display for Base {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let ch = match self {
            Base::A => 'A',
            Base::C => 'C',
            Base::G => 'G',
            Base::T => 'T',
        };

        write!(f, "{}", ch)
    }
}

/// A bit position (or bit count) within the decoded stream, counted from
/// its very first bit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Add, AddAssign)]
#[repr(transparent)]
pub struct BitNum(u64);

impl BitNum {
    pub const ZERO: BitNum = BitNum(0);

    #[inline]
    #[must_use]
    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl Display for BitNum {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bits decoded from a single sequence line, along with the number of raw
/// input bytes the line occupied.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BitRecord {
    bits: Vec<Bit>,
    size: ByteNum,
}

impl BitRecord {
    /// Creates a new `BitRecord`, approximating the raw input size as one
    /// byte per bit plus the line terminator.
    ///
    /// # Examples
    /// ```
    /// use dnascii::sequence::{Bit, BitRecord};
    ///
    /// let record = BitRecord::new([Bit::Zero, Bit::One]);
    /// assert_eq!(record.len(), 2);
    /// ```
    #[must_use]
    pub fn new<T>(bits: T) -> Self
    where
        T: Into<Vec<Bit>>,
    {
        let bits = bits.into();

        const LINE_TERMINATOR_LEN: usize = "\n".len();
        let approximate_size = bits.len() + LINE_TERMINATOR_LEN;

        Self::with_size(bits, ByteNum::new(approximate_size))
    }

    /// Creates a new `BitRecord` with an explicit raw input size.
    #[must_use]
    pub fn with_size<T>(bits: T, size: ByteNum) -> Self
    where
        T: Into<Vec<Bit>>,
    {
        Self {
            bits: bits.into(),
            size,
        }
    }

    /// Returns the bits of this record, in input order.
    #[must_use]
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Consumes this record and returns its bits.
    #[must_use]
    pub fn into_bits(self) -> Vec<Bit> {
        self.bits
    }

    /// Returns the number of bits in this record.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns `true` if the record contains no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the number of raw input bytes this record was decoded from.
    #[must_use]
    pub fn size(&self) -> ByteNum {
        self.size
    }
}
