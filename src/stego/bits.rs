// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Secret bitstream packing and the delimiter protocol.
//!
//! On the embedding side, [`BitSource`] serializes the payload bytes to an
//! MSB-first bit buffer, appends the fixed [`DELIMITER`](super::DELIMITER)
//! and hands out capacity-sized chunks behind an advancing cursor. On the
//! extraction side, [`BitSink`] accumulates decoded chunks, regroups them
//! into bytes and watches the decoded byte stream for the delimiter.
//!
//! There is no escaping: a payload that happens to contain the delimiter's
//! byte sequence truncates extraction at its first occurrence.

use super::DELIMITER;

/// One sub-secret: the bits embedded in or extracted from a single pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    /// Unsigned value of the bits, MSB first.
    pub value: u32,
    /// Number of bits; equals the band capacity of the carrying pair.
    pub width: u32,
}

/// Convert bytes to a bit vector (MSB first within each byte).
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for bit_pos in (0..8).rev() {
            bits.push((byte >> bit_pos) & 1);
        }
    }
    bits
}

/// Convert a bit vector (MSB first) back to bytes.
/// Pads the last byte with zero bits if `bits.len()` is not a multiple of 8.
pub fn bits_to_bytes(bits: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(bits.len().div_ceil(8));
    for chunk in bits.chunks(8) {
        let mut byte = 0u8;
        for (i, &bit) in chunk.iter().enumerate() {
            byte |= (bit & 1) << (7 - i);
        }
        bytes.push(byte);
    }
    bytes
}

/// Immutable bit buffer with an advancing cursor, drained left to right
/// during one embedding pass.
#[derive(Debug)]
pub struct BitSource {
    bits: Vec<u8>,
    cursor: usize,
}

impl BitSource {
    /// Build the full embedding bitstream: payload bytes followed by the
    /// delimiter, both MSB first.
    pub fn from_payload(payload: &[u8]) -> Self {
        let mut bits = bytes_to_bits(payload);
        bits.extend(bytes_to_bits(DELIMITER.as_bytes()));
        Self { bits, cursor: 0 }
    }

    /// Wrap a raw bit buffer (no delimiter appended).
    pub fn from_bits(bits: Vec<u8>) -> Self {
        Self { bits, cursor: 0 }
    }

    /// True once every bit has been consumed.
    pub fn is_empty(&self) -> bool {
        self.cursor >= self.bits.len()
    }

    /// Bits not yet consumed.
    pub fn remaining(&self) -> usize {
        self.bits.len().saturating_sub(self.cursor)
    }

    /// Consume the next `width` bits and return their unsigned value.
    ///
    /// If fewer than `width` bits remain, the chunk is right-padded with
    /// zero bits and the source is drained (the final block of a pass).
    pub fn take_chunk(&mut self, width: u32) -> u32 {
        let mut value = 0u32;
        for _ in 0..width {
            let bit = self.bits.get(self.cursor).copied().unwrap_or(0);
            value = (value << 1) | u32::from(bit);
            self.cursor += 1;
        }
        value
    }
}

/// Accumulator for extracted chunks with incremental delimiter detection.
#[derive(Debug, Default)]
pub struct BitSink {
    /// Bits of the byte currently being assembled.
    current: u8,
    filled: u32,
    /// Completed bytes, in extraction order.
    decoded: Vec<u8>,
    /// First index of `decoded` the next delimiter search starts from.
    /// Already-cleared prefixes are never rescanned.
    scan_from: usize,
}

impl BitSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one extracted chunk, MSB first.
    pub fn push(&mut self, chunk: Chunk) {
        for bit_pos in (0..chunk.width).rev() {
            self.push_bit(((chunk.value >> bit_pos) & 1) as u8);
        }
    }

    fn push_bit(&mut self, bit: u8) {
        self.current = (self.current << 1) | (bit & 1);
        self.filled += 1;
        if self.filled == 8 {
            self.decoded.push(self.current);
            self.current = 0;
            self.filled = 0;
        }
    }

    /// Check whether the decoded byte stream now contains the delimiter.
    ///
    /// Returns the payload (everything before the first occurrence) on a
    /// match, `None` otherwise. The search is byte-aligned over completed
    /// bytes only; trailing unfinished bits stay in the accumulator.
    pub fn check_delimiter(&mut self) -> Option<Vec<u8>> {
        let delim = DELIMITER.as_bytes();
        if self.decoded.len() < delim.len() {
            return None;
        }
        let last = self.decoded.len() - delim.len();
        for i in self.scan_from..=last {
            if self.decoded[i..i + delim.len()] == *delim {
                return Some(self.decoded[..i].to_vec());
            }
        }
        // Nothing before this point can start a future match.
        self.scan_from = last + 1;
        None
    }
}
