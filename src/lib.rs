// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! # pvd-core
//!
//! Pixel Value Differencing (PVD) steganography engine for lossless images.
//! Hides an arbitrary secret payload (text or raw bytes) in the differences
//! between neighboring pixel values and recovers it exactly. Two modes:
//!
//! - **Grayscale pair mode**: one sub-secret per horizontally adjacent
//!   pixel pair in a single-channel buffer.
//! - **RGB triple mode**: two sub-secrets per pixel, carried by the (R, G)
//!   and (G, B) channel pairs with a shared, reconciled Green.
//!
//! The engine works on raw sample grids only; image file I/O lives in the
//! CLI host. The payload is concealed, not encrypted, and a stego image
//! does not survive lossy recompression.
//!
//! # Quick start
//!
//! ```rust
//! use pvd_core::{pair_decode, pair_encode, LumaGrid};
//!
//! let cover = vec![128u8; 64 * 64];
//! let mut grid = LumaGrid::from_raw(64, 64, cover).unwrap();
//! pair_encode(&mut grid, b"hi").unwrap();
//! assert_eq!(pair_decode(&grid).unwrap(), b"hi");
//! ```

pub mod cli;
pub mod grid;
pub mod handler;
pub mod stego;

pub use grid::{LumaGrid, RgbGrid};
pub use stego::progress;
pub use stego::{pair_capacity, triple_capacity};
pub use stego::{pair_decode, pair_encode, triple_decode, triple_encode};
pub use stego::{StegoError, DELIMITER, DELIMITER_BITS};
