// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! The PVD range table.
//!
//! Pixel-pair differences are classified into six contiguous bands. Smooth
//! areas (small differences) carry fewer bits than edges (large differences),
//! which is what keeps the distortion visually unnoticeable.

/// One band of the range table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Inclusive lower limit of the band.
    pub lower: i32,
    /// Inclusive upper limit of the band.
    pub upper: i32,
    /// Bits embeddable in a pair whose difference falls in this band.
    /// Always `floor(log2(upper - lower + 1))`.
    pub capacity: u32,
}

/// The six bands, partitioning 0..=255 with no gaps or overlaps.
pub const RANGES: [Range; 6] = [
    Range { lower: 0, upper: 7, capacity: 3 },
    Range { lower: 8, upper: 15, capacity: 3 },
    Range { lower: 16, upper: 31, capacity: 4 },
    Range { lower: 32, upper: 63, capacity: 5 },
    Range { lower: 64, upper: 127, capacity: 6 },
    Range { lower: 128, upper: 255, capacity: 7 },
];

/// Classify an absolute pixel-pair difference into its band.
///
/// Total over `u8`, so there is no out-of-table case to fall back from.
pub fn classify(d: u8) -> Range {
    match d {
        0..=7 => RANGES[0],
        8..=15 => RANGES[1],
        16..=31 => RANGES[2],
        32..=63 => RANGES[3],
        64..=127 => RANGES[4],
        128..=255 => RANGES[5],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_difference_domain() {
        for d in 0..=255u8 {
            let r = classify(d);
            assert!(r.lower <= i32::from(d) && i32::from(d) <= r.upper, "d={d} outside its band");
            // Exactly one band contains d.
            let containing = RANGES
                .iter()
                .filter(|band| band.lower <= i32::from(d) && i32::from(d) <= band.upper)
                .count();
            assert_eq!(containing, 1, "d={d} matched {containing} bands");
        }
    }

    #[test]
    fn capacity_matches_band_width() {
        for band in RANGES {
            let width = (band.upper - band.lower + 1) as u32;
            assert_eq!(band.capacity, width.ilog2());
        }
    }

    #[test]
    fn band_edges() {
        assert_eq!(classify(0), RANGES[0]);
        assert_eq!(classify(7), RANGES[0]);
        assert_eq!(classify(8), RANGES[1]);
        assert_eq!(classify(15), RANGES[1]);
        assert_eq!(classify(16), RANGES[2]);
        assert_eq!(classify(31), RANGES[2]);
        assert_eq!(classify(32), RANGES[3]);
        assert_eq!(classify(63), RANGES[3]);
        assert_eq!(classify(64), RANGES[4]);
        assert_eq!(classify(127), RANGES[4]);
        assert_eq!(classify(128), RANGES[5]);
        assert_eq!(classify(255), RANGES[5]);
    }
}
