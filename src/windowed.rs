//! Popcount reductions over sliced windows of word arrays.
//!
//! Every function here sums the popcount of a per-element combination over
//! the window `[start, start + count)` of its input slices. The inputs are
//! never mutated and nothing outside the window is read. A zero-length
//! window is valid for any `start` and yields 0 without touching the
//! slices; a nonzero window that does not fit in either slice panics via
//! the slice bounds check.
//!
//! The two slices of a pairwise reduction are combined element-for-element
//! within the window. They do not need equal total length, only enough
//! length to cover the window.

use crate::broadword;

/// Sums the popcount of each word in the window `[start, start + count)`
/// of `a`.
///
/// # Examples
///
/// ```
/// use bitwords::windowed::pop_array;
///
/// let a = [0b1011, 0b0001, u64::MAX];
/// assert_eq!(pop_array(&a, 0, 2), 4);
/// assert_eq!(pop_array(&a, 2, 1), 64);
/// assert_eq!(pop_array(&a, 1, 0), 0);
/// ```
pub fn pop_array(a: &[u64], start: usize, count: usize) -> u64 {
    if count == 0 {
        return 0;
    }
    a[start..start + count]
        .iter()
        .map(|&x| broadword::popcount(x) as u64)
        .sum()
}

macro_rules! pop_op {
    ($(#[$meta:meta])* $name:ident, $($op:tt)*) => {
        $(#[$meta])*
        pub fn $name(a: &[u64], b: &[u64], start: usize, count: usize) -> u64 {
            if count == 0 {
                return 0;
            }
            a[start..start + count]
                .iter()
                .zip(&b[start..start + count])
                .map(|(&x, &y)| broadword::popcount(x $($op)* y) as u64)
                .sum()
        }
    };
}

pop_op!(
    /// Sums `popcount(a[i] & !b[i])` over the window: the number of bits
    /// set in `a` but not in `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitwords::windowed::pop_andnot;
    ///
    /// assert_eq!(pop_andnot(&[0b1110], &[0b0110], 0, 1), 1);
    /// ```
    pop_andnot, & !
);

pop_op!(
    /// Sums `popcount(a[i] & b[i])` over the window: the number of bits
    /// set in both `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitwords::windowed::pop_intersect;
    ///
    /// assert_eq!(pop_intersect(&[0b1110], &[0b0110], 0, 1), 2);
    /// ```
    pop_intersect, &
);

pop_op!(
    /// Sums `popcount(a[i] | b[i])` over the window: the number of bits
    /// set in either `a` or `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitwords::windowed::pop_union;
    ///
    /// assert_eq!(pop_union(&[0b1110], &[0b0111], 0, 1), 4);
    /// ```
    pop_union, |
);

pop_op!(
    /// Sums `popcount(a[i] ^ b[i])` over the window: the number of bits
    /// set in exactly one of `a` and `b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bitwords::windowed::pop_xor;
    ///
    /// assert_eq!(pop_xor(&[0b1110], &[0b0111], 0, 1), 2);
    /// ```
    pop_xor, ^
);
