//! The set of characters that pass through the encoder unescaped.

use std::fmt;
use std::iter::FromIterator;
use std::ops::RangeInclusive;

const WORDS: usize = (1 << 16) / 64;

/// A set of safe characters, indexed by UTF-16 code unit value.
///
/// Characters in the set are emitted by the encoder verbatim; everything
/// else is transcoded to bytes and percent-escaped. Membership is stored as
/// a bitset over the Basic Multilingual Plane (code unit values
/// `0..=0xFFFF`). Characters outside the BMP occupy two code units in the
/// input and therefore can never be safe; they are always escaped.
///
/// The set is built up by the caller and never mutated by the encoder.
/// Wrap it in an [`Arc`](std::sync::Arc) to share one set between many
/// encoder instances or threads.
#[derive(Clone)]
pub struct SafeChars {
    bits: [u64; WORDS],
}

impl SafeChars {
    /// Creates an empty set.
    pub fn new() -> Self {
        SafeChars { bits: [0; WORDS] }
    }

    /// Marks a character as safe.
    ///
    /// # Panics
    ///
    /// Panics if `c` is outside the Basic Multilingual Plane. Such a
    /// character is represented by a surrogate pair and cannot match a
    /// single code unit.
    pub fn insert(&mut self, c: char) {
        let unit = c as u32;
        assert!(
            unit <= 0xFFFF,
            "safe characters must be in the Basic Multilingual Plane"
        );
        self.bits[(unit / 64) as usize] |= 1 << (unit % 64);
    }

    /// Marks every character in the range as safe.
    ///
    /// # Panics
    ///
    /// Panics if the range reaches outside the Basic Multilingual Plane.
    pub fn insert_range(&mut self, range: RangeInclusive<char>) {
        for c in range {
            self.insert(c);
        }
    }

    /// Returns true if the code unit is a member of the set.
    ///
    /// Surrogate code units are never members, since insertion goes by
    /// `char`.
    #[inline]
    pub fn contains(&self, unit: u16) -> bool {
        self.bits[(unit / 64) as usize] & (1 << (unit % 64)) != 0
    }

    /// The number of characters in the set.
    pub fn len(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns true if no characters have been marked safe.
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&w| w == 0)
    }
}

impl Default for SafeChars {
    fn default() -> Self {
        SafeChars::new()
    }
}

impl fmt::Debug for SafeChars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SafeChars").field("len", &self.len()).finish()
    }
}

impl Extend<char> for SafeChars {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}

impl FromIterator<char> for SafeChars {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = SafeChars::new();
        set.extend(iter);
        set
    }
}
