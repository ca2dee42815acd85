//! Width-generic power-of-two helpers.

use num_traits::{PrimInt, WrappingAdd, WrappingSub};

/// Checks if `x` is a power of two, i.e., strictly positive with exactly
/// one set bit. Zero and negative values are not powers of two.
///
/// # Examples
///
/// ```
/// use bitwords::utils::is_power_of_two;
///
/// assert!(is_power_of_two(2));
/// assert!(!is_power_of_two(3));
/// assert!(!is_power_of_two(0u64));
/// assert!(!is_power_of_two(-4i64));
/// ```
#[inline(always)]
pub fn is_power_of_two<T: PrimInt>(x: T) -> bool {
    x > T::zero() && x & (x - T::one()) == T::zero()
}

/// Returns the smallest power of two that is greater than or equal to `x`.
///
/// Decrements, fills the bits below the highest set bit by OR-ing in right
/// shifts of 1, 2, 4, … up to half the type width, then increments. The
/// decrement makes `next_highest_power_of_two(0) == 0`, a documented edge
/// case rather than a general power-of-two successor. Negative input is
/// unsupported and the result for it is unspecified.
///
/// # Examples
///
/// ```
/// use bitwords::utils::next_highest_power_of_two;
///
/// assert_eq!(next_highest_power_of_two(0), 0);
/// assert_eq!(next_highest_power_of_two(3), 4);
/// assert_eq!(next_highest_power_of_two(4096u64), 4096);
/// ```
#[inline]
pub fn next_highest_power_of_two<T: PrimInt + WrappingAdd + WrappingSub>(x: T) -> T {
    let mut v = x.wrapping_sub(&T::one());
    let width = T::zero().count_zeros() as usize;
    let mut shift = 1;
    while shift < width {
        v = v | (v >> shift);
        shift <<= 1;
    }
    v.wrapping_add(&T::one())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_power_of_two_i32() {
        assert!(is_power_of_two(2_i32));
        assert!(!is_power_of_two(3_i32));
    }

    #[test]
    fn is_power_of_two_i64() {
        assert!(is_power_of_two(2_i64));
        assert!(!is_power_of_two(3_i64));
    }

    #[test]
    fn is_power_of_two_every_single_bit() {
        for i in 0..31 {
            assert!(is_power_of_two(1_i32 << i));
        }
        for i in 0..63 {
            assert!(is_power_of_two(1_i64 << i));
        }
    }

    #[test]
    fn is_power_of_two_rejects_zero_and_negatives() {
        assert!(!is_power_of_two(0_i32));
        assert!(!is_power_of_two(0_i64));
        assert!(!is_power_of_two(-1_i64));
        assert!(!is_power_of_two(-2_i64));
        assert!(!is_power_of_two(i32::MIN));
        assert!(!is_power_of_two(i64::MIN));
    }

    #[test]
    fn next_highest_power_of_two_i32() {
        assert_eq!(next_highest_power_of_two(0_i32), 0);
        assert_eq!(next_highest_power_of_two(3_i32), 4);
    }

    #[test]
    fn next_highest_power_of_two_i64() {
        assert_eq!(next_highest_power_of_two(0_i64), 0);
        assert_eq!(next_highest_power_of_two(3_i64), 4);
    }

    #[test]
    fn next_highest_power_of_two_fixes_powers_of_two() {
        for i in 0..62 {
            let p = 1_i64 << i;
            assert_eq!(next_highest_power_of_two(p), p);
        }
    }

    #[test]
    fn next_highest_power_of_two_rounds_up() {
        for x in 1_i64..=1024 {
            let p = next_highest_power_of_two(x);
            assert!(is_power_of_two(p));
            assert!(p >= x);
            if p > 1 {
                assert!(p / 2 < x);
            }
        }
    }

    #[test]
    fn next_highest_power_of_two_unsigned() {
        assert_eq!(next_highest_power_of_two(0_u64), 0);
        assert_eq!(next_highest_power_of_two(3_u32), 4);
        assert_eq!(next_highest_power_of_two(4097_u64), 8192);
    }
}
