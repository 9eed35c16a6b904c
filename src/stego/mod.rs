// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Pixel Value Differencing (PVD) embedding and extraction.
//!
//! This module provides two embedding modes over raw 8-bit sample grids:
//!
//! - **Grayscale pair mode** (`pair_encode` / `pair_decode`): horizontally
//!   adjacent pixel pairs in a single-channel buffer, one sub-secret per
//!   pair.
//! - **RGB triple mode** (`triple_encode` / `triple_decode`): one pixel's
//!   (R, G) and (G, B) channel pairs at once, sharing the Green channel,
//!   two sub-secrets per pixel.
//!
//! Both modes share the range table, the fall-off-boundary check, the pair
//! codec and the delimiter protocol. The secret is concealed, not
//! encrypted: anyone who knows the scheme can extract it.

pub mod bits;
pub mod capacity;
pub mod error;
pub mod pair;
mod pipeline;
pub mod progress;
pub mod range;
pub mod triple;

pub use capacity::{pair_capacity, triple_capacity};
pub use error::StegoError;
pub use pipeline::{pair_decode, pair_encode, triple_decode, triple_encode};

/// End-of-secret marker, appended once after the payload bits.
///
/// Build-wide constant: changing it invalidates every previously encoded
/// image. It is a sentinel only and never counts against payload capacity.
pub const DELIMITER: &str = "/|#AMR!";

/// Delimiter length in bits once serialized (7 ASCII characters x 8 bits).
pub const DELIMITER_BITS: usize = DELIMITER.len() * 8;

#[cfg(test)]
mod delimiter_tests {
    use super::*;

    #[test]
    fn delimiter_shape() {
        assert_eq!(DELIMITER.len(), 7);
        assert!(DELIMITER.is_ascii());
        assert_eq!(DELIMITER_BITS, 56);
    }
}
