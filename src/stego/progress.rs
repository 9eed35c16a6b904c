// Copyright (c) 2026 Amr Hassan
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/amrhassan/pvd-core

//! Global scan progress tracking.
//!
//! The scan itself is strictly sequential; atomics let a host poll progress
//! from another thread while the pass runs. One step is one grid row.
//! There is no cancellation: once started, a pass runs to completion.

use core::sync::atomic::{AtomicU32, Ordering};

static STEP: AtomicU32 = AtomicU32::new(0);
static TOTAL: AtomicU32 = AtomicU32::new(0);

/// Reset progress to 0 and set the total step count.
pub fn init(total: u32) {
    STEP.store(0, Ordering::Relaxed);
    TOTAL.store(total, Ordering::Relaxed);
}

/// Advance progress by one step.
/// Step is capped at total-1 so a poll never reads 100% before `finish()`.
pub fn advance() {
    let total = TOTAL.load(Ordering::Relaxed);
    let _ = STEP.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |s| {
        if s + 1 < total { Some(s + 1) } else { Some(s) }
    });
}

/// Read the current (step, total) progress.
pub fn get() -> (u32, u32) {
    (STEP.load(Ordering::Relaxed), TOTAL.load(Ordering::Relaxed))
}

/// Mark progress as complete (step = total).
pub fn finish() {
    let t = TOTAL.load(Ordering::Relaxed);
    STEP.store(t, Ordering::Relaxed);
}
