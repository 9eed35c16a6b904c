// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Pixel sample storage.
//!
//! Provides [`LumaGrid`] for single-channel (grayscale) images and
//! [`RgbGrid`] for three-channel images, both storing 8-bit samples in flat
//! row-major order. The engine consumes and mutates these buffers directly;
//! file decoding and color-space conversion happen on the host side.

use crate::stego::error::StegoError;

/// Grid of 8-bit luminance samples for one grayscale image.
#[derive(Debug, Clone)]
pub struct LumaGrid {
    width: usize,
    height: usize,
    /// Flat storage: height * width samples, row-major.
    samples: Vec<u8>,
}

impl LumaGrid {
    /// Wrap a raw sample buffer.
    ///
    /// # Errors
    /// Returns [`StegoError::InvalidGrid`] if `samples.len()` does not equal
    /// `width * height`.
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, StegoError> {
        if samples.len() != width * height {
            return Err(StegoError::InvalidGrid);
        }
        Ok(Self { width, height, samples })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the sample at (row, col).
    pub fn get(&self, row: usize, col: usize) -> u8 {
        self.samples[self.index(row, col)]
    }

    /// Set the sample at (row, col).
    pub fn set(&mut self, row: usize, col: usize, val: u8) {
        let idx = self.index(row, col);
        self.samples[idx] = val;
    }

    /// Raw read-only access to all samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the grid and return the raw sample buffer.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height, "row {row} >= {}", self.height);
        debug_assert!(col < self.width, "col {col} >= {}", self.width);
        row * self.width + col
    }
}

/// Grid of interleaved 8-bit RGB samples for one color image.
#[derive(Debug, Clone)]
pub struct RgbGrid {
    width: usize,
    height: usize,
    /// Flat storage: height * width * 3 samples, row-major, R G B interleaved.
    samples: Vec<u8>,
}

impl RgbGrid {
    /// Wrap a raw interleaved RGB buffer.
    ///
    /// # Errors
    /// Returns [`StegoError::InvalidGrid`] if `samples.len()` does not equal
    /// `width * height * 3`.
    pub fn from_raw(width: usize, height: usize, samples: Vec<u8>) -> Result<Self, StegoError> {
        if samples.len() != width * height * 3 {
            return Err(StegoError::InvalidGrid);
        }
        Ok(Self { width, height, samples })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the (R, G, B) channels of the pixel at (row, col).
    pub fn pixel(&self, row: usize, col: usize) -> (u8, u8, u8) {
        let idx = self.index(row, col);
        (self.samples[idx], self.samples[idx + 1], self.samples[idx + 2])
    }

    /// Overwrite the pixel at (row, col).
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: (u8, u8, u8)) {
        let idx = self.index(row, col);
        self.samples[idx] = rgb.0;
        self.samples[idx + 1] = rgb.1;
        self.samples[idx + 2] = rgb.2;
    }

    /// Raw read-only access to all samples.
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    /// Consume the grid and return the raw interleaved buffer.
    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.height, "row {row} >= {}", self.height);
        debug_assert!(col < self.width, "col {col} >= {}", self.width);
        (row * self.width + col) * 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luma_get_set() {
        let mut grid = LumaGrid::from_raw(3, 2, vec![0; 6]).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);

        grid.set(1, 2, 42);
        assert_eq!(grid.get(1, 2), 42);
        assert_eq!(grid.get(1, 1), 0);
        assert_eq!(grid.samples(), &[0, 0, 0, 0, 0, 42]);
    }

    #[test]
    fn luma_length_mismatch_rejected() {
        assert!(matches!(
            LumaGrid::from_raw(3, 2, vec![0; 5]),
            Err(StegoError::InvalidGrid)
        ));
        assert!(matches!(
            LumaGrid::from_raw(3, 2, vec![0; 7]),
            Err(StegoError::InvalidGrid)
        ));
    }

    #[test]
    fn rgb_pixel_access() {
        let mut grid = RgbGrid::from_raw(2, 2, vec![0; 12]).unwrap();
        grid.set_pixel(1, 0, (10, 20, 30));
        assert_eq!(grid.pixel(1, 0), (10, 20, 30));
        assert_eq!(grid.pixel(0, 0), (0, 0, 0));
        // Interleaved layout: pixel (1, 0) starts at (1*2 + 0) * 3 = 6.
        assert_eq!(&grid.samples()[6..9], &[10, 20, 30]);
    }

    #[test]
    fn rgb_length_mismatch_rejected() {
        assert!(matches!(
            RgbGrid::from_raw(2, 2, vec![0; 11]),
            Err(StegoError::InvalidGrid)
        ));
    }
}
