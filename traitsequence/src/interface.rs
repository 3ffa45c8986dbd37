use crate::comparable::Comparable;
use std::ops::{Index, Range};

/// A type behaving like a random-access sequence over the type `Item`.
pub trait Sequence<'a, Item: 'a, Subsequence: Sequence<'a, Item, Subsequence> + ?Sized>:
    Index<usize, Output = Item> + Index<Range<usize>, Output = Subsequence>
{
    /// The iterator type of the sequence.
    type Iterator: DoubleEndedIterator<Item = &'a Item>;

    /// Returns a prefix with length `len` of this sequence.
    /// Panics if `len > self.len()`.
    fn prefix(&'a self, len: usize) -> &Subsequence {
        debug_assert!(len <= self.len());
        &self[0..len]
    }

    /// Returns a suffix with length `len` of this sequence.
    /// Panics if `len > self.len()`.
    fn suffix(&'a self, len: usize) -> &Subsequence {
        debug_assert!(len <= self.len());
        &self[self.len() - len..self.len()]
    }

    /// Returns an iterator over the sequence.
    fn iter(&'a self) -> Self::Iterator;

    /// Returns the length of the sequence.
    fn len(&self) -> usize;

    /// Returns true if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the first item of the sequence.
    fn first(&'a self) -> Option<&Item> {
        self.iter().next()
    }

    /// Returns the last item of the sequence.
    fn last(&'a self) -> Option<&Item> {
        self.iter().next_back()
    }

    /// Returns true if this sequence contains the given item.
    /// This makes no assumption about the order of the sequence and hence runs in linear time.
    fn contains(&'a self, item: &Item) -> bool
    where
        Item: Eq,
    {
        crate::search::linear_contains(self.iter(), item)
    }

    /// Returns true if this sequence is sorted ascending, i.e. no item is [greater](Comparable::is_greater) than its successor.
    /// Ordered search such as [binary_contains](crate::search::binary_contains) requires this, but never checks it.
    fn is_ascending(&'a self) -> bool
    where
        Item: Comparable,
    {
        let mut iter = self.iter();
        let mut previous = match iter.next() {
            Some(item) => item,
            None => return true,
        };
        for item in iter {
            if previous.is_greater(item) {
                return false;
            }
            previous = item;
        }
        true
    }
}
