// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Subcommand handlers.
//!
//! Coordinates image file I/O, grid construction and the engine passes,
//! and maps each engine outcome to user-facing messaging. The one special
//! case is a too-large secret: the partially encoded image is still saved
//! before the error is reported.

use crate::cli::{CapacityArgs, DecodeArgs, EncodeArgs, Mode};
use crate::grid::{LumaGrid, RgbGrid};
use crate::stego::{
    pair_capacity, pair_decode, pair_encode, triple_capacity, triple_decode, triple_encode,
    StegoError,
};
use anyhow::{Context, Result};
use colored::Colorize;
use image::ImageFormat;
use std::fs;
use std::path::Path;

/// Handle the 'encode' command.
///
/// # Errors
///
/// Returns an error if:
/// * The cover or secret image cannot be read.
/// * No secret (or a whitespace-only one) was supplied.
/// * The secret exceeds the cover's capacity (the partial stego image is
///   still written first).
/// * The stego image cannot be written.
pub fn handle_encode(args: EncodeArgs) -> Result<()> {
    let cover = image::open(&args.cover).with_context(|| {
        format!(
            "Unable to read cover image: {}",
            args.cover.to_string_lossy().red().bold()
        )
    })?;

    let payload = secret_payload(&args)?;

    let outcome = match args.mode {
        Mode::Gray => {
            let luma = cover.to_luma8();
            let (width, height) = luma.dimensions();
            let mut grid = LumaGrid::from_raw(width as usize, height as usize, luma.into_raw())?;
            let outcome = pair_encode(&mut grid, &payload);
            save_luma(grid, &args.out)?;
            outcome
        }
        Mode::Rgb => {
            let rgb = cover.to_rgb8();
            let (width, height) = rgb.dimensions();
            let mut grid = RgbGrid::from_raw(width as usize, height as usize, rgb.into_raw())?;
            let outcome = triple_encode(&mut grid, &payload);
            save_rgb(grid, &args.out)?;
            outcome
        }
    };

    match outcome {
        Ok(()) => {
            println!(
                "The secret has been successfully hidden and saved: {}",
                args.out.to_string_lossy().green().bold()
            );
            Ok(())
        }
        Err(StegoError::SecretTooLarge) => {
            eprintln!(
                "{} only part of the secret fit; the partially encoded image was saved: {}",
                "warning:".yellow().bold(),
                args.out.to_string_lossy().yellow().bold()
            );
            anyhow::bail!("The secret is too large and cannot be embedded into the uploaded image.")
        }
        Err(e) => Err(e).context("Failed to embed the secret."),
    }
}

/// Handle the 'decode' command.
///
/// Prints the recovered text by default; `--out` writes the raw payload
/// bytes and `--as-image` additionally re-decodes the payload as an image.
///
/// # Errors
///
/// Returns an error if:
/// * The stego image cannot be read.
/// * No delimiter is found in the image.
/// * The recovered payload is not what the output option expects (valid
///   UTF-8 text, or a decodable image).
pub fn handle_decode(args: DecodeArgs) -> Result<()> {
    let stego = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read stego image: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = match args.mode {
        Mode::Gray => {
            let luma = stego.to_luma8();
            let (width, height) = luma.dimensions();
            let grid = LumaGrid::from_raw(width as usize, height as usize, luma.into_raw())?;
            pair_decode(&grid)
        }
        Mode::Rgb => {
            let rgb = stego.to_rgb8();
            let (width, height) = rgb.dimensions();
            let grid = RgbGrid::from_raw(width as usize, height as usize, rgb.into_raw())?;
            triple_decode(&grid)
        }
    }
    .context("Found no secret in this image.")?;

    if let Some(path) = &args.as_image {
        let secret = image::load_from_memory(&payload).context(
            "An unexpected error happened: the recovered data is not a valid image.",
        )?;
        secret.save_with_format(path, ImageFormat::Png).with_context(|| {
            format!(
                "Unable to write secret image: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The secret image has been successfully recovered and saved: {}",
            path.to_string_lossy().green().bold()
        );
    } else if let Some(path) = &args.out {
        fs::write(path, &payload).with_context(|| {
            format!(
                "Unable to write recovered secret: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        println!(
            "The secret has been successfully recovered and saved: {}",
            path.to_string_lossy().green().bold()
        );
    } else {
        let text = String::from_utf8(payload).map_err(|_| StegoError::InvalidUtf8)?;
        println!("{text}");
    }
    Ok(())
}

/// Handle the 'capacity' command.
pub fn handle_capacity(args: CapacityArgs) -> Result<()> {
    let cover = image::open(&args.cover).with_context(|| {
        format!(
            "Unable to read cover image: {}",
            args.cover.to_string_lossy().red().bold()
        )
    })?;

    let bytes = match args.mode {
        Mode::Gray => {
            let luma = cover.to_luma8();
            let (width, height) = luma.dimensions();
            let grid = LumaGrid::from_raw(width as usize, height as usize, luma.into_raw())?;
            pair_capacity(&grid)
        }
        Mode::Rgb => {
            let rgb = cover.to_rgb8();
            let (width, height) = rgb.dimensions();
            let grid = RgbGrid::from_raw(width as usize, height as usize, rgb.into_raw())?;
            triple_capacity(&grid)
        }
    };

    println!(
        "Estimated capacity of {}: {} bytes",
        args.cover.to_string_lossy().bold(),
        bytes.to_string().green().bold()
    );
    Ok(())
}

/// Build the payload bytes from the secret arguments.
///
/// Text is trimmed first; a whitespace-only secret counts as none. A
/// secret image is re-encoded to its most compressed JPEG form so the
/// embedded byte stream stays as small as possible.
fn secret_payload(args: &EncodeArgs) -> Result<Vec<u8>> {
    if let Some(text) = &args.text {
        let trimmed = text.trim();
        anyhow::ensure!(!trimmed.is_empty(), "Enter a secret to be encoded.");
        Ok(trimmed.as_bytes().to_vec())
    } else if let Some(path) = &args.secret_image {
        let secret = image::open(path).with_context(|| {
            format!(
                "Unable to read secret image: {}",
                path.to_string_lossy().red().bold()
            )
        })?;
        let mut jpeg = Vec::new();
        let encoder = image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg, 1);
        secret
            .write_with_encoder(encoder)
            .context("Failed to compress the secret image.")?;
        Ok(jpeg)
    } else {
        anyhow::bail!("Enter a secret to be encoded (use --text or --secret-image).")
    }
}

fn save_luma(grid: LumaGrid, out: &Path) -> Result<()> {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let img = image::GrayImage::from_raw(width, height, grid.into_samples())
        .context("An unexpected error happened: stego buffer lost its shape.")?;
    img.save_with_format(out, ImageFormat::Png).with_context(|| {
        format!(
            "Unable to write stego image: {}",
            out.to_string_lossy().red().bold()
        )
    })
}

fn save_rgb(grid: RgbGrid, out: &Path) -> Result<()> {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let img = image::RgbImage::from_raw(width, height, grid.into_samples())
        .context("An unexpected error happened: stego buffer lost its shape.")?;
    img.save_with_format(out, ImageFormat::Png).with_context(|| {
        format!(
            "Unable to write stego image: {}",
            out.to_string_lossy().red().bold()
        )
    })
}
