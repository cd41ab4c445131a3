#![allow(clippy::needless_range_loop)]
#![no_std]

extern crate alloc;

use alloc::vec::Vec;

pub fn bits_u64(n: u64) -> usize {
    (64 - n.leading_zeros()) as usize
}

/// Computes `ceil(log_2(n))`.
#[must_use]
pub fn log2_ceil(n: usize) -> usize {
    (usize::BITS - n.saturating_sub(1).leading_zeros()) as usize
}

/// Computes `log_2(n)`, or `None` if `n` is not a power of two.
#[must_use]
pub fn try_log2(n: usize) -> Option<usize> {
    n.is_power_of_two().then(|| n.trailing_zeros() as usize)
}

/// Computes `log_2(n)`, panicking if `n` is not a power of two.
pub fn log2_strict(n: usize) -> usize {
    try_log2(n).unwrap_or_else(|| panic!("Not a power of two: {}", n))
}

/// Reverses the low `bits` bits of `i`.
#[inline]
pub fn reverse_bits(i: usize, bits: usize) -> usize {
    if bits == 0 {
        0
    } else {
        i.reverse_bits() >> (usize::BITS as usize - bits)
    }
}

/// Permutes `arr` such that each index is mapped to its reverse in binary.
///
/// The length of `arr` must be a power of two.
pub fn reverse_index_bits<T: Copy>(arr: &[T]) -> Vec<T> {
    let n = arr.len();
    let lg_n = log2_strict(n);

    // BIT_REVERSE_6BIT holds 6-bit reverses; small inputs use it directly.
    if lg_n <= 6 {
        let shr = 6 - lg_n;
        (0..n)
            .map(|i| arr[(BIT_REVERSE_6BIT[i] as usize) >> shr])
            .collect()
    } else {
        (0..n).map(|i| arr[reverse_bits(i, lg_n)]).collect()
    }
}

// Lookup table of 6-bit reverses.
#[rustfmt::skip]
const BIT_REVERSE_6BIT: &[u8] = &[
    0o00, 0o40, 0o20, 0o60, 0o10, 0o50, 0o30, 0o70,
    0o04, 0o44, 0o24, 0o64, 0o14, 0o54, 0o34, 0o74,
    0o02, 0o42, 0o22, 0o62, 0o12, 0o52, 0o32, 0o72,
    0o06, 0o46, 0o26, 0o66, 0o16, 0o56, 0o36, 0o76,
    0o01, 0o41, 0o21, 0o61, 0o11, 0o51, 0o31, 0o71,
    0o05, 0o45, 0o25, 0o65, 0o15, 0o55, 0o35, 0o75,
    0o03, 0o43, 0o23, 0o63, 0o13, 0o53, 0o33, 0o73,
    0o07, 0o47, 0o27, 0o67, 0o17, 0o57, 0o37, 0o77,
];
