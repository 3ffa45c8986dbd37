use std::cmp::Ordering;

/// A type whose values are totally ordered.
///
/// Implementers provide equality (through [Eq]) and a strict ordering through [is_less](Comparable::is_less).
/// All other relations are derived from these two, so for any two values exactly one of
/// `a.is_less(b)`, `a == b` and `a.is_greater(b)` holds, as long as the implementation of `is_less` is
/// transitive and antisymmetric.
///
/// Violating the contract is not detected by anything using it.
/// In particular, [binary_contains](crate::search::binary_contains) returns unspecified results on such types.
///
/// ```rust
/// use traitsequence::comparable::Comparable;
/// use std::cmp::Ordering;
///
/// assert!(1u32.is_less(&2));
/// assert!(2u32.is_greater(&1));
/// assert!(2u32.is_less_or_equal(&2));
/// assert_eq!(3u32.compare(&2), Ordering::Greater);
/// ```
pub trait Comparable: Eq {
    /// Returns true if `self` is strictly smaller than `other`.
    fn is_less(&self, other: &Self) -> bool;

    /// Returns true if `self` is strictly greater than `other`.
    /// Derived as `!(self < other) && self != other`.
    fn is_greater(&self, other: &Self) -> bool {
        !self.is_less(other) && self != other
    }

    /// Returns true if `self` is smaller than or equal to `other`.
    /// Derived as the complement of [is_greater](Comparable::is_greater).
    fn is_less_or_equal(&self, other: &Self) -> bool {
        !self.is_greater(other)
    }

    /// Returns true if `self` is greater than or equal to `other`.
    /// Derived as the complement of [is_less](Comparable::is_less).
    fn is_greater_or_equal(&self, other: &Self) -> bool {
        !self.is_less(other)
    }

    /// Three-way comparison derived from [is_less](Comparable::is_less) and [is_greater](Comparable::is_greater).
    /// Checks `<` first, then `>`, and concludes equality otherwise.
    fn compare(&self, other: &Self) -> Ordering {
        if self.is_less(other) {
            Ordering::Less
        } else if self.is_greater(other) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T: Comparable + ?Sized> Comparable for &T {
    fn is_less(&self, other: &Self) -> bool {
        T::is_less(*self, *other)
    }
}

/// Implements [Comparable] for types whose [Ord] implementation is a total order.
#[macro_export]
macro_rules! impl_comparable_via_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl $crate::comparable::Comparable for $t {
                fn is_less(&self, other: &Self) -> bool {
                    ::std::cmp::Ord::cmp(self, other) == ::std::cmp::Ordering::Less
                }
            }
        )*
    };
}

impl_comparable_via_ord!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char, String, str, (),
);
