// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! RGB triple codec: two sub-secrets per pixel.
//!
//! The (R, G) and (G, B) channel pairs each run the two-sample codec
//! independently, which yields two competing proposals for the shared Green
//! channel. Embedding reconciles them to their rounded average and shifts
//! Red and Blue by the same delta Green moved, so each pair's intended
//! signed difference survives exactly. Extraction simply reads both pairs
//! and concatenates the chunks, (R, G) first.
//!
//! The reconciliation is lossy by construction whenever the two proposals
//! disagree: the averaged Green is an accepted approximation, and the shift
//! it forces onto Red or Blue can leave 0..=255 on pixels near the edges of
//! the sample range. That surfaces as [`StegoError::PixelOutOfRange`].

use super::bits::{BitSource, Chunk};
use super::error::StegoError;
use super::pair;

/// A pixel takes part only if *both* channel pairs pass the boundary check.
pub fn is_safe(r: u8, g: u8, b: u8) -> bool {
    pair::is_safe(r, g) && pair::is_safe(g, b)
}

/// Embed the next two sub-secrets from `source` into one pixel.
///
/// # Errors
/// Returns [`StegoError::PixelOutOfRange`] if reconciling the two Green
/// proposals pushes Red or Blue outside 0..=255.
pub fn embed(r: u8, g: u8, b: u8, source: &mut BitSource) -> Result<(u8, u8, u8), StegoError> {
    let (stego_r, green_from_rg) = pair::embed(r, g, source)?;
    let (green_from_gb, stego_b) = pair::embed(g, b, source)?;

    // Round-half-up average of the two Green proposals.
    let final_g = (i32::from(green_from_rg) + i32::from(green_from_gb) + 1) / 2;

    // Shift each outer channel by the delta its own Green proposal moved,
    // preserving both pairs' intended differences exactly.
    let final_r = i32::from(stego_r) - (i32::from(green_from_rg) - final_g);
    let final_b = i32::from(stego_b) - (i32::from(green_from_gb) - final_g);

    let final_r = u8::try_from(final_r).map_err(|_| StegoError::PixelOutOfRange)?;
    let final_b = u8::try_from(final_b).map_err(|_| StegoError::PixelOutOfRange)?;
    // The average of two in-range samples is always in range itself.
    Ok((final_r, final_g as u8, final_b))
}

/// Extract both sub-secrets carried by one pixel, (R, G) chunk first.
pub fn extract(r: u8, g: u8, b: u8) -> (Chunk, Chunk) {
    (pair::extract(r, g), pair::extract(g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bit buffer holding `value` in exactly `width` bits, MSB first.
    fn bits_of(chunks: &[(u32, u32)]) -> Vec<u8> {
        let mut bits = Vec::new();
        for &(value, width) in chunks {
            for pos in (0..width).rev() {
                bits.push(((value >> pos) & 1) as u8);
            }
        }
        bits
    }

    #[test]
    fn pixel_safety_requires_both_pairs() {
        assert!(is_safe(128, 128, 128));
        // (2, 2) fails the boundary check, so the whole pixel is out.
        assert!(!is_safe(2, 2, 128));
        assert!(!is_safe(128, 2, 2));
    }

    #[test]
    fn chunks_roundtrip_in_embedding_order() {
        // Mid-gray pixel: both pairs sit in band r1 (capacity 3).
        let mut source = BitSource::from_bits(bits_of(&[(0b101, 3), (0b110, 3)]));
        let (r, g, b) = embed(128, 128, 128, &mut source).unwrap();
        assert!(source.is_empty());

        let (first, second) = extract(r, g, b);
        assert_eq!((first.value, first.width), (0b101, 3));
        assert_eq!((second.value, second.width), (0b110, 3));
    }

    #[test]
    fn differences_survive_green_reconciliation() {
        let mut source = BitSource::from_bits(bits_of(&[(0b011, 3), (0b001, 3)]));
        let (r, g, b) = embed(130, 135, 140, &mut source).unwrap();
        // Intended differences: (0 + 3) for (R, G), (0 + 1) for (G, B);
        // both had positive sign.
        assert_eq!(i32::from(g) - i32::from(r), 3);
        assert_eq!(i32::from(b) - i32::from(g), 1);
    }

    #[test]
    fn reconciliation_can_fall_off_the_boundary() {
        // (4, 4, 4): both pairs pass the check (worst case lands on (0, 7)),
        // but embedding 111 twice proposes Greens 7 and 0. Averaging to 4
        // shifts Red to -3.
        assert!(is_safe(4, 4, 4));
        let mut source = BitSource::from_bits(bits_of(&[(0b111, 3), (0b111, 3)]));
        assert!(matches!(
            embed(4, 4, 4, &mut source),
            Err(StegoError::PixelOutOfRange)
        ));
    }
}
