//! Broadword operations on 64-bit words.
//!
//! The trailing-zero family comes in three variants because call sites in a
//! bitset engine know different invariants about the word they are scanning:
//! [`ntz`] is correct for every word, while [`ntz2`] and [`ntz3`] trade that
//! generality for shorter dependency chains and are only guaranteed on words
//! with at least one set bit. They are deliberately three independently
//! named functions rather than an abstraction; the choice between them is a
//! static one made at the call site.

/// De Bruijn sequence driving the multiply-and-shift lookup in [`ntz3`].
const NTZ3_DEBRUIJN: u64 = 0x03f7_9d71_b4cb_0a89;

/// Bit index of `1 << i` keyed by `((1 << i) * NTZ3_DEBRUIJN) >> 58`.
const NTZ3_TABLE: [usize; 64] = [
    0, 1, 48, 2, 57, 49, 28, 3, //
    61, 58, 50, 42, 38, 29, 17, 4, //
    62, 55, 59, 36, 53, 51, 43, 22, //
    45, 39, 33, 30, 24, 18, 12, 5, //
    63, 47, 56, 27, 60, 41, 37, 16, //
    54, 35, 52, 21, 44, 32, 23, 11, //
    46, 26, 40, 15, 34, 20, 31, 10, //
    25, 14, 19, 9, 13, 8, 7, 6, //
];

/// Counts the set bits in `x`.
///
/// # Examples
///
/// ```
/// use bitwords::broadword::popcount;
///
/// assert_eq!(popcount(0), 0);
/// assert_eq!(popcount(3), 2);
/// assert_eq!(popcount(u64::MAX), 64);
/// ```
#[inline(always)]
pub fn popcount(x: u64) -> usize {
    x.count_ones() as usize
}

/// Returns the bit index of the lowest set bit in `x`, or 0 if `x == 0`.
///
/// Correct for every nonzero word, including patterns with the high bit
/// set. The all-zero word returns 0 by convention, not 64; callers that
/// cannot rule out zero must treat 0 as a sentinel.
///
/// # Examples
///
/// ```
/// use bitwords::broadword::ntz;
///
/// assert_eq!(ntz(0), 0);
/// assert_eq!(ntz(1), 0);
/// assert_eq!(ntz(0b10100), 2);
/// assert_eq!(ntz(1 << 63), 63);
/// ```
#[inline(always)]
pub fn ntz(x: u64) -> usize {
    if x == 0 {
        0
    } else {
        x.trailing_zeros() as usize
    }
}

/// Trailing-zero count computed as the popcount of the mask below the
/// lowest set bit.
///
/// Only meaningful for words with at least one set bit; passing 0 yields
/// 64. Within that domain it agrees with [`ntz`] for every input.
///
/// # Examples
///
/// ```
/// use bitwords::broadword::ntz2;
///
/// assert_eq!(ntz2(1), 0);
/// assert_eq!(ntz2(0b1100_0000), 6);
/// ```
#[inline(always)]
pub fn ntz2(x: u64) -> usize {
    popcount((x & x.wrapping_neg()).wrapping_sub(1))
}

/// Trailing-zero count via a De Bruijn multiply-and-shift table lookup on
/// the isolated lowest bit.
///
/// Only meaningful for words with at least one set bit; passing 0 yields
/// 0, which collides with `ntz3(1)`. Within the nonzero domain it agrees
/// with [`ntz`] for every input.
///
/// # Examples
///
/// ```
/// use bitwords::broadword::ntz3;
///
/// assert_eq!(ntz3(8), 3);
/// assert_eq!(ntz3(1 << 62), 62);
/// ```
#[inline(always)]
pub fn ntz3(x: u64) -> usize {
    let lsb = x & x.wrapping_neg();
    NTZ3_TABLE[(lsb.wrapping_mul(NTZ3_DEBRUIJN) >> 58) as usize]
}
