// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Round-trip integration tests for grayscale pair mode.

use pvd_core::{pair_capacity, pair_decode, pair_encode, LumaGrid, StegoError, DELIMITER};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Deterministic mid-range noise cover. Samples in 96..160 keep every pair
/// inside the boundary check's safe region on both sides of the trip.
fn noise_grid(width: usize, height: usize, seed: u64) -> LumaGrid {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    let samples = (0..width * height).map(|_| rng.random_range(96..160u8)).collect();
    LumaGrid::from_raw(width, height, samples).unwrap()
}

#[test]
fn pair_roundtrip_basic() {
    let mut grid = noise_grid(32, 32, 1);
    pair_encode(&mut grid, b"hi").unwrap();
    assert_eq!(pair_decode(&grid).unwrap(), b"hi");
}

#[test]
fn pair_roundtrip_various_lengths() {
    for len in [1usize, 10, 50, 200] {
        let mut grid = noise_grid(64, 64, len as u64);
        let message: Vec<u8> = (0..len).map(|i| b'A' + (i % 26) as u8).collect();
        pair_encode(&mut grid, &message).unwrap();
        assert_eq!(pair_decode(&grid).unwrap(), message, "failed for length {len}");
    }
}

#[test]
fn pair_roundtrip_unicode_text() {
    let message = "Héllo wörld! 日本語テスト 🔏";
    let mut grid = noise_grid(64, 64, 9);
    pair_encode(&mut grid, message.as_bytes()).unwrap();
    let recovered = pair_decode(&grid).unwrap();
    assert_eq!(String::from_utf8(recovered).unwrap(), message);
}

#[test]
fn pair_roundtrip_raw_bytes() {
    // Full byte range, including zeros and delimiter-adjacent values.
    let message: Vec<u8> = (0u16..=255).map(|v| v as u8).collect();
    let mut grid = noise_grid(96, 96, 11);
    pair_encode(&mut grid, &message).unwrap();
    assert_eq!(pair_decode(&grid).unwrap(), message);
}

#[test]
fn empty_secret_rejected_before_touching_the_grid() {
    let mut grid = noise_grid(32, 32, 3);
    let before = grid.samples().to_vec();
    assert!(matches!(pair_encode(&mut grid, b""), Err(StegoError::EmptySecret)));
    assert_eq!(grid.samples(), &before[..]);
}

#[test]
fn oversized_secret_keeps_the_partial_embedding() {
    // 8x8 mid-gray: 32 safe pairs * 3 bits = 96 bits, far below the
    // 56-bit delimiter plus a 30-byte payload.
    let mut grid = LumaGrid::from_raw(8, 8, vec![128; 64]).unwrap();
    let before = grid.samples().to_vec();
    let result = pair_encode(&mut grid, b"this secret will never fit here");
    assert!(matches!(result, Err(StegoError::SecretTooLarge)));
    // The grid was still mutated: the partial stego image is deliverable.
    assert_ne!(grid.samples(), &before[..]);
}

#[test]
fn unencoded_grid_yields_no_secret_found() {
    // Uniform cover: every pair extracts zero bits, the delimiter never
    // appears, and the scan exhausts the grid.
    let grid = LumaGrid::from_raw(64, 64, vec![200; 64 * 64]).unwrap();
    assert!(matches!(pair_decode(&grid), Err(StegoError::NoSecretFound)));
}

#[test]
fn all_unsafe_grid_is_left_untouched() {
    // Near-black samples fail the boundary check everywhere: nothing is
    // embedded and nothing can be extracted.
    let mut grid = LumaGrid::from_raw(16, 16, vec![2; 256]).unwrap();
    let before = grid.samples().to_vec();
    assert!(matches!(pair_encode(&mut grid, b"x"), Err(StegoError::SecretTooLarge)));
    assert_eq!(grid.samples(), &before[..]);
    assert!(matches!(pair_decode(&grid), Err(StegoError::NoSecretFound)));
}

#[test]
fn payload_containing_the_delimiter_truncates_early() {
    let mut payload = b"kept".to_vec();
    payload.extend_from_slice(DELIMITER.as_bytes());
    payload.extend_from_slice(b"lost");

    let mut grid = noise_grid(64, 64, 17);
    pair_encode(&mut grid, &payload).unwrap();
    assert_eq!(pair_decode(&grid).unwrap(), b"kept");
}

#[test]
fn capacity_estimate_is_exact() {
    let cover = noise_grid(64, 64, 23);
    let capacity = pair_capacity(&cover);
    assert!(capacity > 0);

    // A payload of exactly the estimated size fits...
    let payload: Vec<u8> = (0..capacity).map(|i| b'a' + (i % 26) as u8).collect();
    let mut grid = cover.clone();
    pair_encode(&mut grid, &payload).unwrap();
    assert_eq!(pair_decode(&grid).unwrap(), payload);

    // ...and one more byte does not.
    let mut payload = payload;
    payload.push(b'!');
    let mut grid = cover.clone();
    assert!(matches!(
        pair_encode(&mut grid, &payload),
        Err(StegoError::SecretTooLarge)
    ));
}

#[test]
fn odd_width_leaves_the_trailing_column_unpaired() {
    // Width 9: the last column never participates; 4 pairs per row.
    let mut grid = noise_grid(9, 64, 29);
    let trailing_before: Vec<u8> = (0..64).map(|row| grid.get(row, 8)).collect();

    pair_encode(&mut grid, b"odd width cover").unwrap();
    let trailing_after: Vec<u8> = (0..64).map(|row| grid.get(row, 8)).collect();
    assert_eq!(trailing_before, trailing_after);
    assert_eq!(pair_decode(&grid).unwrap(), b"odd width cover");
}
