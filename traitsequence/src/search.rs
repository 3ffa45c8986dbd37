use crate::comparable::Comparable;
use crate::interface::Sequence;
use log::trace;
use std::borrow::Borrow;

/// Gets notified about each element comparison a search performs.
///
/// Linear search reports one comparison per visited element,
/// binary search reports one three-way comparison per narrowing step.
pub trait ComparisonObserver {
    /// Called once per comparison.
    fn observe_comparison(&mut self);
}

/// Ignores all comparisons.
impl ComparisonObserver for () {
    fn observe_comparison(&mut self) {}
}

impl<Observer: ComparisonObserver + ?Sized> ComparisonObserver for &mut Observer {
    fn observe_comparison(&mut self) {
        (**self).observe_comparison()
    }
}

/// Counts the comparisons it observes.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ComparisonCounter {
    comparisons: usize,
}

impl ComparisonCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of comparisons observed so far.
    pub fn comparisons(&self) -> usize {
        self.comparisons
    }
}

impl ComparisonObserver for ComparisonCounter {
    fn observe_comparison(&mut self) {
        self.comparisons += 1;
    }
}

/// Returns true if some element of `iterable` equals `target`.
///
/// Visits the elements in iteration order and stops at the first match.
/// Makes no assumption about the order of the elements, so it is correct on unsorted input and runs in `O(n)`.
///
/// ```rust
/// use traitsequence::search::linear_contains;
///
/// assert!(linear_contains(&[5, 1, 4], &1));
/// assert!(!linear_contains(&[5, 1, 4], &2));
/// assert!(!linear_contains(Vec::<u8>::new(), &0u8));
/// ```
pub fn linear_contains<Item, Iterable>(iterable: Iterable, target: &Item) -> bool
where
    Item: PartialEq + ?Sized,
    Iterable: IntoIterator,
    Iterable::Item: Borrow<Item>,
{
    linear_contains_observed(iterable, target, ())
}

/// Like [linear_contains], but reports every element comparison to `observer`.
pub fn linear_contains_observed<Item, Iterable, Observer>(
    iterable: Iterable,
    target: &Item,
    mut observer: Observer,
) -> bool
where
    Item: PartialEq + ?Sized,
    Iterable: IntoIterator,
    Iterable::Item: Borrow<Item>,
    Observer: ComparisonObserver,
{
    for item in iterable {
        observer.observe_comparison();
        if item.borrow() == target {
            return true;
        }
    }
    false
}

/// Returns true if the ascending sorted `sequence` contains `target`.
///
/// The sequence must be sorted ascending with respect to [Comparable].
/// This is not checked, and if it does not hold the result is unspecified.
/// Runs in `O(log n)`.
///
/// ```rust
/// use traitsequence::search::binary_contains;
///
/// let sequence = vec![1, 3, 5, 7, 9];
/// assert!(binary_contains(&sequence, &7));
/// assert!(!binary_contains(&sequence, &4));
/// assert!(!binary_contains(&Vec::<u32>::new(), &4));
/// ```
pub fn binary_contains<'a, Item, Subsequence, SequenceType>(
    sequence: &'a SequenceType,
    target: &Item,
) -> bool
where
    Item: Comparable + 'a,
    Subsequence: Sequence<'a, Item, Subsequence> + ?Sized,
    SequenceType: Sequence<'a, Item, Subsequence> + ?Sized,
{
    binary_contains_observed(sequence, target, ())
}

/// Like [binary_contains], but reports each narrowing step to `observer`.
/// Each step performs a single three-way comparison between the middle element and the target.
pub fn binary_contains_observed<'a, Item, Subsequence, SequenceType, Observer>(
    sequence: &'a SequenceType,
    target: &Item,
    mut observer: Observer,
) -> bool
where
    Item: Comparable + 'a,
    Subsequence: Sequence<'a, Item, Subsequence> + ?Sized,
    SequenceType: Sequence<'a, Item, Subsequence> + ?Sized,
    Observer: ComparisonObserver,
{
    if sequence.is_empty() {
        return false;
    }

    // Both bounds are inclusive.
    let mut low = 0;
    let mut high = sequence.len() - 1;
    while low <= high {
        let mid = (low + high) / 2;
        trace!("Binary search step: low = {}, mid = {}, high = {}", low, mid, high);
        observer.observe_comparison();

        let item = &sequence[mid];
        if item.is_less(target) {
            low = mid + 1;
        } else if item.is_greater(target) {
            match mid.checked_sub(1) {
                Some(new_high) => high = new_high,
                // The target is smaller than the first element.
                None => return false,
            }
        } else {
            return true;
        }
    }
    false
}
