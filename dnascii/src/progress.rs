use std::fmt::Debug;

use derive_more::{Add, AddAssign};

/// A number of raw input bytes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Add, AddAssign)]
#[repr(transparent)]
pub struct ByteNum(usize);

impl ByteNum {
    pub const ZERO: ByteNum = ByteNum(0);

    #[inline]
    #[must_use]
    pub const fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    #[inline]
    #[must_use]
    pub const fn get(&self) -> usize {
        self.0
    }
}

/// Receives byte-level progress updates while the input file is consumed.
pub trait ProgressNotifier: Debug + Send + Sync {
    fn processed_bytes(&self, bytes: ByteNum);
}

impl<T: ProgressNotifier> ProgressNotifier for &T {
    fn processed_bytes(&self, bytes: ByteNum) {
        T::processed_bytes(self, bytes)
    }
}

#[cfg(test)]
mod tests {
    use crate::progress::{ByteNum, ProgressNotifier};

    #[derive(Debug)]
    struct CountingNotifier(std::sync::atomic::AtomicUsize);

    impl ProgressNotifier for CountingNotifier {
        fn processed_bytes(&self, bytes: ByteNum) {
            self.0
                .fetch_add(bytes.get(), std::sync::atomic::Ordering::Relaxed);
        }
    }

    #[test]
    fn test_byte_num_arithmetic() {
        let mut num = ByteNum::ZERO;
        num += ByteNum::new(100);
        assert_eq!(num + ByteNum::new(37), ByteNum::new(137));
    }

    #[test]
    fn test_notifier_by_ref() {
        let notifier = CountingNotifier(std::sync::atomic::AtomicUsize::new(0));
        let by_ref = &notifier;
        by_ref.processed_bytes(ByteNum::new(1337));

        assert_eq!(notifier.0.load(std::sync::atomic::Ordering::Relaxed), 1337);
    }
}
