use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign};

/// A bit-per-square set sized for one board.
/// Stored as `ceil(len / 64)` × u64 words on the heap, so any board size works.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bitboard {
    words: Vec<u64>,
    len: usize,
}

/// Number of u64 words needed to hold `len` bits.
#[inline]
pub const fn words_for(len: usize) -> usize {
    len.div_ceil(64)
}

impl Bitboard {
    /// All `len` bits zero.
    #[inline]
    pub fn empty(len: usize) -> Self {
        Bitboard {
            words: vec![0; words_for(len)],
            len,
        }
    }

    /// Single bit set at `index`.
    #[inline]
    pub fn single(len: usize, index: usize) -> Self {
        let mut bb = Self::empty(len);
        bb.set(index);
        bb
    }

    /// Number of addressable bits.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Test whether bit `index` is set.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.words[index / 64] >> (index % 64)) & 1 != 0
    }

    /// Set bit `index` to 1.
    #[inline]
    pub fn set(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] |= 1u64 << (index % 64);
    }

    /// Clear bit `index` to 0.
    #[inline]
    pub fn clear(&mut self, index: usize) {
        debug_assert!(index < self.len);
        self.words[index / 64] &= !(1u64 << (index % 64));
    }

    /// True if no bits are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// Population count.
    #[inline]
    pub fn count(&self) -> u32 {
        self.words.iter().map(|w| w.count_ones()).sum()
    }

    /// True if any bit is set in both boards.
    #[inline]
    pub fn intersects(&self, other: &Bitboard) -> bool {
        debug_assert_eq!(self.len, other.len);
        self.words
            .iter()
            .zip(&other.words)
            .any(|(a, b)| a & b != 0)
    }

    /// Bitwise OR of every board in `boards`; all clear when `boards` is empty.
    pub fn union_all<'a, I>(len: usize, boards: I) -> Self
    where
        I: IntoIterator<Item = &'a Bitboard>,
    {
        let mut out = Self::empty(len);
        for bb in boards {
            out |= bb;
        }
        out
    }

    /// Iterate over indices of set bits.
    #[inline]
    pub fn iter_ones(&self) -> BitIterator<'_> {
        BitIterator {
            words: &self.words,
            current: self.words.first().copied().unwrap_or(0),
            word_index: 0,
        }
    }
}

impl BitAnd for &Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitand(self, rhs: &Bitboard) -> Bitboard {
        let mut out = self.clone();
        out &= rhs;
        out
    }
}

impl BitAndAssign<&Bitboard> for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: &Bitboard) {
        debug_assert_eq!(self.len, rhs.len);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w &= r;
        }
    }
}

impl BitOr for &Bitboard {
    type Output = Bitboard;
    #[inline]
    fn bitor(self, rhs: &Bitboard) -> Bitboard {
        let mut out = self.clone();
        out |= rhs;
        out
    }
}

impl BitOrAssign<&Bitboard> for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: &Bitboard) {
        debug_assert_eq!(self.len, rhs.len);
        for (w, r) in self.words.iter_mut().zip(&rhs.words) {
            *w |= r;
        }
    }
}

/// Iterator over set-bit indices in a `Bitboard`.
pub struct BitIterator<'a> {
    words: &'a [u64],
    current: u64,
    word_index: usize,
}

impl Iterator for BitIterator<'_> {
    type Item = usize;
    #[inline]
    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                // Clear lowest set bit
                self.current &= self.current - 1;
                return Some(self.word_index * 64 + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}
