// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Single pixel-pair arithmetic: the fall-off-boundary check and the
//! embed/extract codec.
//!
//! A pair `(a, b)` carries data in its difference `b - a`. Embedding moves
//! the difference to `lower + S` inside its band (keeping the original
//! sign), and splits the required adjustment `m` between the two samples as
//! `floor(m/2)` / `ceil(m/2)`, with the split arrangement chosen by the
//! parity of the original difference. Extraction inverts this by reading
//! `|difference| - lower` back out of the band.
//!
//! [`is_safe`] must approve a pair before it enters [`embed`] or
//! [`extract`]; unsafe pairs are skipped by the scan drivers and never
//! modified, which is what prevents 8-bit overflow in the worst case.

use super::bits::{BitSource, Chunk};
use super::error::StegoError;
use super::range::classify;

/// Split `m` into `(floor(m/2), ceil(m/2))`. Holds for negative `m` too.
fn half_split(m: i32) -> (i32, i32) {
    let floored = m.div_euclid(2);
    (floored, m - floored)
}

/// Bits this pair can carry, from its band classification.
pub fn capacity_bits(a: u8, b: u8) -> u32 {
    classify(a.abs_diff(b)).capacity
}

/// Fall-off-boundary check: would the worst-case embedding for this pair's
/// band keep both samples within 0..=255?
///
/// The slack `m` is measured against the band's upper limit using the
/// *signed* difference. For a negative difference this overshoots the
/// largest adjustment any real embedding performs, which is the deliberate
/// worst case.
pub fn is_safe(a: u8, b: u8) -> bool {
    let (a, b) = (i32::from(a), i32::from(b));
    let diff = b - a;
    let range = classify(diff.unsigned_abs() as u8);

    let m = range.upper - diff;
    let (floored, ceiled) = half_split(m);

    let (candidate_a, candidate_b) = if diff % 2 == 0 {
        (a - ceiled, b + floored)
    } else {
        (a - floored, b + ceiled)
    };

    (0..=255).contains(&candidate_a) && (0..=255).contains(&candidate_b)
}

/// Embed the next sub-secret from `source` into the pair `(a, b)`.
///
/// Consumes exactly the band's capacity in bits (zero-padded if the source
/// drains mid-chunk) and returns the adjusted pair.
///
/// # Errors
/// Returns [`StegoError::PixelOutOfRange`] if an adjusted sample falls
/// outside 0..=255. For a pair approved by [`is_safe`] this cannot happen;
/// reaching it indicates a broken boundary check, so it is also asserted
/// in debug builds.
pub fn embed(a: u8, b: u8, source: &mut BitSource) -> Result<(u8, u8), StegoError> {
    debug_assert!(is_safe(a, b), "embed called on unsafe pair ({a}, {b})");

    let (a, b) = (i32::from(a), i32::from(b));
    let diff = b - a;
    let range = classify(diff.unsigned_abs() as u8);

    let sub_secret = source.take_chunk(range.capacity) as i32;
    let signum = if diff < 0 { -1 } else { 1 };
    let new_diff = (range.lower + sub_secret) * signum;

    let m = new_diff - diff;
    let (floored, ceiled) = half_split(m);

    let (stego_a, stego_b) = if diff % 2 == 0 {
        (a - ceiled, b + floored)
    } else {
        (a - floored, b + ceiled)
    };
    debug_assert_eq!(stego_b - stego_a, new_diff);

    let stego_a = u8::try_from(stego_a).map_err(|_| StegoError::PixelOutOfRange)?;
    let stego_b = u8::try_from(stego_b).map_err(|_| StegoError::PixelOutOfRange)?;
    Ok((stego_a, stego_b))
}

/// Extract the sub-secret carried by the pair `(a, b)`.
///
/// The chunk value is `|b - a| - lower` and its width is the band capacity.
pub fn extract(a: u8, b: u8) -> Chunk {
    let d = a.abs_diff(b);
    let range = classify(d);
    Chunk {
        value: u32::from(d) - range.lower as u32,
        width: range.capacity,
    }
}
