// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Payload capacity estimation.
//!
//! Walks the same scan order as the embedding pass and sums the band
//! capacities of the pairs that pass the boundary check. Because embedding
//! reads each pair's band from the unmodified cover values, the bit total
//! is exact; the byte figure subtracts the delimiter overhead.

use super::pair;
use super::triple;
use super::DELIMITER;
use crate::grid::{LumaGrid, RgbGrid};

/// Payload bytes embeddable in `grid` using grayscale pair mode.
pub fn pair_capacity(grid: &LumaGrid) -> usize {
    let mut bits = 0usize;
    for row in 0..grid.height() {
        for col in (0..grid.width().saturating_sub(1)).step_by(2) {
            let a = grid.get(row, col);
            let b = grid.get(row, col + 1);
            if pair::is_safe(a, b) {
                bits += pair::capacity_bits(a, b) as usize;
            }
        }
    }
    (bits / 8).saturating_sub(DELIMITER.len())
}

/// Payload bytes embeddable in `grid` using RGB triple mode.
pub fn triple_capacity(grid: &RgbGrid) -> usize {
    let mut bits = 0usize;
    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let (r, g, b) = grid.pixel(row, col);
            if triple::is_safe(r, g, b) {
                bits += (pair::capacity_bits(r, g) + pair::capacity_bits(g, b)) as usize;
            }
        }
    }
    (bits / 8).saturating_sub(DELIMITER.len())
}
