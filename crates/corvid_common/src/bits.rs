//! Extensible bit vectors with an explicit reset state for flow analysis.

use std::fmt;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};

/// Number of bits stored per word.
const WORD_BITS: usize = 64;

/// Lifecycle state of a [`Bits`] vector.
#[derive(Clone)]
enum State {
    /// Never written. Reads behave like the empty set.
    Uninitialized,
    /// Contents discarded. Only `reset`, `assign` and state queries are legal.
    Reset,
    /// Live contents, one bit per member.
    Normal(Vec<u64>),
}

/// A growable set of non-negative integers packed into 64-bit words.
///
/// Flow analysis keeps one vector per tracked property (e.g. "definitely
/// assigned") and snapshots, merges and restores them at every branch. The
/// vector therefore distinguishes three states:
///
/// - *uninitialized*: freshly created, equivalent to an empty set of size zero;
/// - *reset*: logically dead, waiting to be re-assigned; touching its contents is
///   a bug in the calling pass and panics;
/// - *normal*: holds members.
///
/// Storage only grows. Every mutation keeps a copy of the words it replaced,
/// available through [`previous_words`](Self::previous_words) when debugging a
/// pass.
#[derive(Clone)]
pub struct Bits {
    state: State,
    previous: Option<Vec<u64>>,
}

impl Bits {
    /// Creates an empty, uninitialized vector.
    pub fn new() -> Self {
        Self {
            state: State::Uninitialized,
            previous: None,
        }
    }

    /// Returns `true` if the vector is in the reset state.
    pub fn is_reset(&self) -> bool {
        matches!(self.state, State::Reset)
    }

    /// Returns `true` if the vector has never been written.
    pub fn is_uninitialized(&self) -> bool {
        matches!(self.state, State::Uninitialized)
    }

    /// Discards the contents and moves the vector to the reset state.
    pub fn reset(&mut self) {
        if let State::Normal(words) = std::mem::replace(&mut self.state, State::Reset) {
            self.previous = Some(words);
        }
    }

    /// Replaces the contents with a copy of `other`, leaving `self` in the normal
    /// state. Legal on a reset vector.
    ///
    /// # Panics
    ///
    /// Panics if `other` is in the reset state.
    pub fn assign(&mut self, other: &Bits) -> &mut Self {
        let src = other.words();
        match &mut self.state {
            State::Normal(words) => {
                match &mut self.previous {
                    Some(prev) => prev.clone_from(words),
                    None => self.previous = Some(words.clone()),
                }
                words.clear();
                words.extend_from_slice(src);
            }
            _ => self.state = State::Normal(src.to_vec()),
        }
        self
    }

    /// Adds `x` to the set.
    pub fn include(&mut self, x: usize) -> &mut Self {
        let words = self.begin_mutation(x / WORD_BITS + 1);
        words[x / WORD_BITS] |= bit(x);
        self
    }

    /// Removes `x` from the set.
    pub fn exclude(&mut self, x: usize) -> &mut Self {
        let words = self.begin_mutation(x / WORD_BITS + 1);
        words[x / WORD_BITS] &= !bit(x);
        self
    }

    /// Adds every integer in `start..limit` to the set.
    pub fn incl_range(&mut self, start: usize, limit: usize) -> &mut Self {
        let words = self.begin_mutation(words_for(limit));
        for x in start..limit {
            words[x / WORD_BITS] |= bit(x);
        }
        self
    }

    /// Removes every member greater than or equal to `start`.
    pub fn exclude_from(&mut self, start: usize) -> &mut Self {
        let words = self.begin_mutation(0);
        let first = start / WORD_BITS;
        if let Some(word) = words.get_mut(first) {
            *word &= bit(start) - 1;
        }
        for word in words.iter_mut().skip(first + 1) {
            *word = 0;
        }
        self
    }

    /// Removes all members, keeping the current storage.
    pub fn clear(&mut self) -> &mut Self {
        let words = self.begin_mutation(0);
        words.iter_mut().for_each(|w| *w = 0);
        self
    }

    /// Returns `true` if `x` is a member of the set.
    pub fn is_member(&self, x: usize) -> bool {
        self.words()
            .get(x / WORD_BITS)
            .is_some_and(|w| w & bit(x) != 0)
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words().iter().all(|&w| w == 0)
    }

    /// Intersects with `other`. Words missing from `other` count as zero.
    pub fn and(&mut self, other: &Bits) -> &mut Self {
        let rhs = other.words();
        let words = self.begin_mutation(0);
        for (i, word) in words.iter_mut().enumerate() {
            *word &= rhs.get(i).copied().unwrap_or(0);
        }
        self
    }

    /// Unites with `other`, growing to its length first.
    pub fn or(&mut self, other: &Bits) -> &mut Self {
        let rhs = other.words();
        let words = self.begin_mutation(rhs.len());
        for (word, &r) in words.iter_mut().zip(rhs) {
            *word |= r;
        }
        self
    }

    /// Removes every member of `other`.
    pub fn diff(&mut self, other: &Bits) -> &mut Self {
        let rhs = other.words();
        let words = self.begin_mutation(0);
        for (word, &r) in words.iter_mut().zip(rhs) {
            *word &= !r;
        }
        self
    }

    /// Symmetric difference with `other`, growing to its length first.
    pub fn xor(&mut self, other: &Bits) -> &mut Self {
        let rhs = other.words();
        let words = self.begin_mutation(rhs.len());
        for (word, &r) in words.iter_mut().zip(rhs) {
            *word ^= r;
        }
        self
    }

    /// Returns the smallest member greater than or equal to `from`, or `None` if
    /// no such member exists within the current storage.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        let words = self.words();
        let mut index = from / WORD_BITS;
        let mut word = *words.get(index)? & !(bit(from) - 1);
        loop {
            if word != 0 {
                return Some(index * WORD_BITS + word.trailing_zeros() as usize);
            }
            index += 1;
            word = *words.get(index)?;
        }
    }

    /// Iterates over the members in ascending order.
    pub fn iter(&self) -> Ones<'_> {
        Ones {
            bits: self,
            next: 0,
        }
    }

    /// Returns the backing words.
    ///
    /// # Panics
    ///
    /// Panics if the vector is in the reset state.
    pub fn words(&self) -> &[u64] {
        match &self.state {
            State::Normal(words) => words,
            State::Uninitialized => &[],
            State::Reset => panic!("bit vector accessed while in the reset state"),
        }
    }

    /// Returns the words as they were before the most recent mutation or reset.
    pub fn previous_words(&self) -> Option<&[u64]> {
        self.previous.as_deref()
    }

    /// Checks the state, snapshots the current words and grows storage to at least
    /// `min_words` before a mutation.
    fn begin_mutation(&mut self, min_words: usize) -> &mut Vec<u64> {
        match self.state {
            State::Reset => panic!("bit vector mutated while in the reset state"),
            State::Uninitialized => self.state = State::Normal(Vec::new()),
            State::Normal(_) => {}
        }
        let State::Normal(words) = &mut self.state else {
            unreachable!()
        };
        match &mut self.previous {
            Some(prev) => prev.clone_from(words),
            None => self.previous = Some(words.clone()),
        }
        if words.len() < min_words {
            words.resize(min_words, 0);
        }
        words
    }
}

impl Default for Bits {
    fn default() -> Self {
        Self::new()
    }
}

/// Single-bit mask for `x` within its word.
fn bit(x: usize) -> u64 {
    1u64 << (x % WORD_BITS)
}

/// Number of words needed to hold indices below `limit`.
fn words_for(limit: usize) -> usize {
    limit.div_ceil(WORD_BITS)
}

/// Iterator over the members of a [`Bits`] vector, built on
/// [`Bits::next_set_bit`].
pub struct Ones<'a> {
    bits: &'a Bits,
    next: usize,
}

impl Iterator for Ones<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let found = self.bits.next_set_bit(self.next)?;
        self.next = found + 1;
        Some(found)
    }
}

impl<'a> IntoIterator for &'a Bits {
    type Item = usize;
    type IntoIter = Ones<'a>;

    fn into_iter(self) -> Ones<'a> {
        self.iter()
    }
}

impl BitAndAssign<&Bits> for Bits {
    fn bitand_assign(&mut self, rhs: &Bits) {
        self.and(rhs);
    }
}

impl BitOrAssign<&Bits> for Bits {
    fn bitor_assign(&mut self, rhs: &Bits) {
        self.or(rhs);
    }
}

impl BitXorAssign<&Bits> for Bits {
    fn bitxor_assign(&mut self, rhs: &Bits) {
        self.xor(rhs);
    }
}

impl SubAssign<&Bits> for Bits {
    fn sub_assign(&mut self, rhs: &Bits) {
        self.diff(rhs);
    }
}

impl fmt::Debug for Bits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.state {
            State::Reset => write!(f, "Bits(reset)"),
            _ => f.debug_set().entries(self.iter()).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn members(bits: &Bits) -> Vec<usize> {
        bits.iter().collect()
    }

    fn of(xs: &[usize]) -> Bits {
        let mut b = Bits::new();
        for &x in xs {
            b.include(x);
        }
        b
    }

    #[test]
    fn new_is_uninitialized_and_empty() {
        let b = Bits::new();
        assert!(b.is_uninitialized());
        assert!(!b.is_reset());
        assert!(!b.is_member(0));
        assert!(b.is_empty());
        assert_eq!(b.next_set_bit(0), None);
    }

    #[test]
    fn include_then_member() {
        let mut b = Bits::new();
        for x in [0, 1, 63, 64, 200] {
            b.include(x);
            assert!(b.is_member(x));
        }
        assert!(!b.is_uninitialized());
        assert!(!b.is_member(2));
        assert_eq!(members(&b), vec![0, 1, 63, 64, 200]);
    }

    #[test]
    fn exclude_never_shrinks_storage() {
        let mut b = Bits::new();
        b.include(130);
        let len = b.words().len();
        b.exclude(130);
        assert!(!b.is_member(130));
        assert_eq!(b.words().len(), len);
        b.exclude(500);
        assert!(b.words().len() >= len);
    }

    #[test]
    fn disjoint_or_then_and_is_empty() {
        let mut a = of(&[1, 3, 70]);
        let b = of(&[2, 4, 140]);
        a.or(&b);
        assert_eq!(members(&a), vec![1, 2, 3, 4, 70, 140]);
        let mut a = of(&[1, 3, 70]);
        a.and(&b);
        assert!(a.is_empty());
    }

    #[test]
    fn and_treats_missing_words_as_zero() {
        let mut a = of(&[1, 100]);
        let b = of(&[1]);
        a.and(&b);
        assert_eq!(members(&a), vec![1]);
        assert_eq!(a.words().len(), 2);
    }

    #[test]
    fn or_and_xor_grow_to_operand() {
        let mut a = of(&[1]);
        let b = of(&[1, 190]);
        a.xor(&b);
        assert_eq!(members(&a), vec![190]);
        assert_eq!(a.words().len(), 3);
    }

    #[test]
    fn diff_removes_members() {
        let mut a = of(&[1, 2, 3, 65]);
        a.diff(&of(&[2, 65]));
        assert_eq!(members(&a), vec![1, 3]);
    }

    #[test]
    fn incl_range_and_exclude_from() {
        let mut b = Bits::new();
        b.incl_range(60, 70);
        assert_eq!(members(&b), (60..70).collect::<Vec<_>>());
        b.exclude_from(64);
        assert_eq!(members(&b), vec![60, 61, 62, 63]);
        b.exclude_from(0);
        assert!(b.is_empty());
        assert_eq!(b.words().len(), 2);
    }

    #[test]
    fn exclude_from_beyond_storage_is_noop() {
        let mut b = of(&[5]);
        b.exclude_from(1000);
        assert_eq!(members(&b), vec![5]);
    }

    #[test]
    fn next_set_bit_scans_forward() {
        let b = of(&[3, 64, 65, 300]);
        assert_eq!(b.next_set_bit(0), Some(3));
        assert_eq!(b.next_set_bit(4), Some(64));
        assert_eq!(b.next_set_bit(66), Some(300));
        assert_eq!(b.next_set_bit(301), None);
        assert_eq!(b.next_set_bit(10_000), None);
    }

    #[test]
    fn clear_keeps_storage() {
        let mut b = of(&[10, 100]);
        b.clear();
        assert!(b.is_empty());
        assert_eq!(b.words().len(), 2);
    }

    #[test]
    fn reset_then_assign_restores_normal_state() {
        let mut b = of(&[7]);
        b.reset();
        assert!(b.is_reset());
        b.assign(&of(&[9]));
        assert!(!b.is_reset());
        assert_eq!(members(&b), vec![9]);
    }

    #[test]
    #[should_panic(expected = "reset state")]
    fn include_on_reset_panics() {
        let mut b = Bits::new();
        b.reset();
        b.include(1);
    }

    #[test]
    #[should_panic(expected = "reset state")]
    fn member_query_on_reset_panics() {
        let mut b = of(&[1]);
        b.reset();
        b.is_member(1);
    }

    #[test]
    #[should_panic(expected = "reset state")]
    fn reset_operand_panics() {
        let mut a = of(&[1]);
        let mut b = of(&[2]);
        b.reset();
        a.or(&b);
    }

    #[test]
    fn previous_words_track_last_mutation() {
        let mut b = of(&[1]);
        b.include(2);
        assert_eq!(b.previous_words(), Some(&[0b10u64][..]));
        b.reset();
        assert_eq!(b.previous_words(), Some(&[0b110u64][..]));
    }

    #[test]
    fn operator_assign_forms() {
        let mut a = of(&[1, 2]);
        a |= &of(&[3]);
        a &= &of(&[2, 3]);
        a ^= &of(&[4]);
        a -= &of(&[3]);
        assert_eq!(members(&a), vec![2, 4]);
    }

    #[test]
    fn debug_lists_members() {
        assert_eq!(format!("{:?}", of(&[1, 65])), "{1, 65}");
        let mut b = Bits::new();
        b.reset();
        assert_eq!(format!("{b:?}"), "Bits(reset)");
    }
}
