// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Scan drivers: row-major traversal orchestrating the boundary check, the
//! pair/triple codec and the bitstream per visited pair or pixel.
//!
//! Grayscale pair mode walks each row in steps of two columns, one
//! sub-secret per pair; an odd trailing column stays unpaired. RGB triple
//! mode visits every pixel, two sub-secrets per pixel. Both traversals are
//! strictly sequential: the secret is a single ordered queue and delimiter
//! detection assumes extraction order equals scan order.

use super::bits::{BitSink, BitSource};
use super::error::StegoError;
use super::pair;
use super::progress;
use super::triple;
use crate::grid::{LumaGrid, RgbGrid};

/// Embed `payload` into a grayscale grid, mutating it in place.
///
/// # Errors
/// - [`StegoError::EmptySecret`] if `payload` is empty (grid untouched).
/// - [`StegoError::SecretTooLarge`] if the grid is exhausted before the
///   bitstream drains. The grid keeps the partial embedding; the caller
///   decides whether to deliver it.
/// - [`StegoError::PixelOutOfRange`] on a violated embedding invariant.
pub fn pair_encode(grid: &mut LumaGrid, payload: &[u8]) -> Result<(), StegoError> {
    if payload.is_empty() {
        return Err(StegoError::EmptySecret);
    }
    let mut source = BitSource::from_payload(payload);
    progress::init(grid.height() as u32);

    'rows: for row in 0..grid.height() {
        for col in (0..grid.width().saturating_sub(1)).step_by(2) {
            if source.is_empty() {
                break 'rows;
            }
            let a = grid.get(row, col);
            let b = grid.get(row, col + 1);
            if !pair::is_safe(a, b) {
                continue;
            }
            let (stego_a, stego_b) = pair::embed(a, b, &mut source)?;
            grid.set(row, col, stego_a);
            grid.set(row, col + 1, stego_b);
        }
        progress::advance();
    }
    progress::finish();

    if source.is_empty() {
        Ok(())
    } else {
        Err(StegoError::SecretTooLarge)
    }
}

/// Recover a payload from a grayscale grid.
///
/// Returns as soon as the delimiter is detected; the payload is everything
/// decoded before its first occurrence.
///
/// # Errors
/// Returns [`StegoError::NoSecretFound`] if the grid is exhausted without
/// a delimiter match.
pub fn pair_decode(grid: &LumaGrid) -> Result<Vec<u8>, StegoError> {
    let mut sink = BitSink::new();
    progress::init(grid.height() as u32);

    for row in 0..grid.height() {
        for col in (0..grid.width().saturating_sub(1)).step_by(2) {
            let a = grid.get(row, col);
            let b = grid.get(row, col + 1);
            if !pair::is_safe(a, b) {
                continue;
            }
            sink.push(pair::extract(a, b));
            if let Some(payload) = sink.check_delimiter() {
                progress::finish();
                return Ok(payload);
            }
        }
        progress::advance();
    }
    progress::finish();
    Err(StegoError::NoSecretFound)
}

/// Embed `payload` into an RGB grid, mutating it in place.
///
/// Every pixel whose (R, G) and (G, B) pairs both pass the boundary check
/// carries two sub-secrets; pixels failing either check are skipped whole.
///
/// # Errors
/// Same taxonomy as [`pair_encode`]; [`StegoError::PixelOutOfRange`] is
/// additionally reachable through Green reconciliation.
pub fn triple_encode(grid: &mut RgbGrid, payload: &[u8]) -> Result<(), StegoError> {
    if payload.is_empty() {
        return Err(StegoError::EmptySecret);
    }
    let mut source = BitSource::from_payload(payload);
    progress::init(grid.height() as u32);

    'rows: for row in 0..grid.height() {
        for col in 0..grid.width() {
            if source.is_empty() {
                break 'rows;
            }
            let (r, g, b) = grid.pixel(row, col);
            if !triple::is_safe(r, g, b) {
                continue;
            }
            let stego = triple::embed(r, g, b, &mut source)?;
            grid.set_pixel(row, col, stego);
        }
        progress::advance();
    }
    progress::finish();

    if source.is_empty() {
        Ok(())
    } else {
        Err(StegoError::SecretTooLarge)
    }
}

/// Recover a payload from an RGB grid.
///
/// Both chunks of a pixel are appended before the delimiter is checked, so
/// detection granularity is one pixel.
///
/// # Errors
/// Returns [`StegoError::NoSecretFound`] if the grid is exhausted without
/// a delimiter match.
pub fn triple_decode(grid: &RgbGrid) -> Result<Vec<u8>, StegoError> {
    let mut sink = BitSink::new();
    progress::init(grid.height() as u32);

    for row in 0..grid.height() {
        for col in 0..grid.width() {
            let (r, g, b) = grid.pixel(row, col);
            if !triple::is_safe(r, g, b) {
                continue;
            }
            let (first, second) = triple::extract(r, g, b);
            sink.push(first);
            sink.push(second);
            if let Some(payload) = sink.check_delimiter() {
                progress::finish();
                return Ok(payload);
            }
        }
        progress::advance();
    }
    progress::finish();
    Err(StegoError::NoSecretFound)
}
