// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Command-line interface definition.
//!
//! Defines the `encode`, `decode` and `capacity` subcommands and their
//! arguments. All user interaction with the binary enters through here.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// A PVD (Pixel Value Differencing) steganography tool for hiding secrets
/// in lossless images.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Parser, Debug)]
pub enum Commands {
    /// Hide a secret (text or image) inside a cover image.
    Encode(EncodeArgs),

    /// Recover a hidden secret from a stego image.
    Decode(DecodeArgs),

    /// Estimate how many payload bytes a cover image can hold.
    Capacity(CapacityArgs),
}

/// Embedding mode. Must match between encode and decode.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Grayscale pair mode: one sub-secret per adjacent pixel pair.
    Gray,
    /// RGB triple mode: two sub-secrets per pixel.
    Rgb,
}

/// Arguments for the 'encode' command.
#[derive(Parser, Debug)]
pub struct EncodeArgs {
    /// Cover image the secret is embedded into.
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Output path for the stego image (always written as PNG).
    #[arg(short, long)]
    pub out: PathBuf,

    /// Embedding mode.
    #[arg(short, long, value_enum, default_value_t = Mode::Gray)]
    pub mode: Mode,

    /// Secret text to hide.
    #[arg(short, long, conflicts_with = "secret_image")]
    pub text: Option<String>,

    /// Secret image to hide (re-encoded to its most compressed JPEG form
    /// before embedding).
    #[arg(short = 's', long)]
    pub secret_image: Option<PathBuf>,
}

/// Arguments for the 'decode' command.
#[derive(Parser, Debug)]
pub struct DecodeArgs {
    /// Stego image holding the hidden secret.
    #[arg(short, long)]
    pub image: PathBuf,

    /// Embedding mode used when the secret was encoded.
    #[arg(short, long, value_enum, default_value_t = Mode::Gray)]
    pub mode: Mode,

    /// Write the raw recovered bytes to this file instead of printing text.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Interpret the recovered bytes as an image and save it here as PNG.
    #[arg(short = 'a', long)]
    pub as_image: Option<PathBuf>,
}

/// Arguments for the 'capacity' command.
#[derive(Parser, Debug)]
pub struct CapacityArgs {
    /// Cover image to estimate.
    #[arg(short, long)]
    pub cover: PathBuf,

    /// Embedding mode the estimate is for.
    #[arg(short, long, value_enum, default_value_t = Mode::Gray)]
    pub mode: Mode,
}
