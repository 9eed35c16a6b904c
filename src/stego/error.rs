// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Error types for the embedding and extraction pipelines.
//!
//! [`StegoError`] covers all failure modes from grid construction through
//! embedding, extraction and payload decoding.

use core::fmt;

/// Errors that can occur during steganographic encoding or decoding.
#[derive(Debug)]
pub enum StegoError {
    /// The sample buffer length does not match the declared grid dimensions.
    InvalidGrid,
    /// No secret (or an all-whitespace one) was supplied for embedding.
    EmptySecret,
    /// The grid ran out of safe pixel pairs before the secret bitstream was
    /// drained. The grid keeps the partially embedded result.
    SecretTooLarge,
    /// The grid was fully scanned without finding the delimiter.
    NoSecretFound,
    /// The extracted payload is not valid UTF-8.
    InvalidUtf8,
    /// An embedding step produced a sample outside 0..=255. The boundary
    /// check is supposed to make this unreachable for two-sample embedding;
    /// green reconciliation in RGB mode can still trigger it.
    PixelOutOfRange,
}

impl fmt::Display for StegoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGrid => write!(f, "sample buffer does not match grid dimensions"),
            Self::EmptySecret => write!(f, "no secret supplied for embedding"),
            Self::SecretTooLarge => write!(f, "secret too large for this image"),
            Self::NoSecretFound => write!(f, "no secret found in this image"),
            Self::InvalidUtf8 => write!(f, "extracted secret is not valid UTF-8"),
            Self::PixelOutOfRange => write!(f, "stego sample fell outside the 0-255 range"),
        }
    }
}

impl std::error::Error for StegoError {}
