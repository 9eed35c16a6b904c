// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

use clap::Parser;

use pvd_core::{
    cli::{Cli, Commands},
    handler::{handle_capacity, handle_decode, handle_encode},
};

/// Parse the command line and dispatch to the matching handler.
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => handle_encode(args),
        Commands::Decode(args) => handle_decode(args),
        Commands::Capacity(args) => handle_capacity(args),
    }
}
