//! Demo: scripted signal batches, no external analyzer required.
//!
//! What it demonstrates
//! - Wiring a `ScriptedSource` through `FetchController` into the scope UI.
//! - The three display states: a populated chart, a batch with invalid
//!   tokens (skipped with their indices preserved), and a no-data state.
//!
//! How to run
//! ```bash
//! cargo run --example scripted
//! ```
//! Press "Fetch signals" repeatedly to step through the scripted batches.

use std::sync::{Arc, Mutex};

use brainscope::{
    channel_chart, run_scope_with_fetch, spawn_fetch, ChartConfig, FetchController, ScriptedSource,
};

fn main() -> eframe::Result<()> {
    env_logger::init();

    // First fetch: a clean waveform. Second: the same waveform with two
    // unparseable tokens in the middle. Third and later: nothing.
    let clean: Vec<String> = (0..64)
        .map(|i| format!("{:.4}", (i as f64 / 6.0).sin() * 40.0 + (i as f64 / 17.0).cos() * 9.0))
        .collect();
    let mut noisy = clean.clone();
    noisy[20] = "artifact".to_string();
    noisy[41] = "--".to_string();
    let source = ScriptedSource::new(vec![clean, noisy, Vec::new()]);
    let source = Arc::new(Mutex::new(source));

    let (sink, rx) = channel_chart();
    let controller = FetchController::new();
    let cfg = ChartConfig::default();

    let fetch_cfg = cfg.clone();
    run_scope_with_fetch(rx, cfg, move || {
        spawn_fetch(&controller, &source, &sink, &fetch_cfg);
    })
}
