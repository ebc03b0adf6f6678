//! Demo: fetch signals from a real external analyzer command.
//!
//! What it demonstrates
//! - Starting the process-wide analyzer runtime once with `ensure_started`.
//! - Running blocking fetch cycles on a worker thread via `spawn_fetch`.
//!
//! How to run
//! ```bash
//! # Any command that prints whitespace-separated numbers works:
//! BRAINSCOPE_ANALYZER=seq BRAINSCOPE_ANALYZER_ARGS='1 32' \
//!     cargo run --example analyzer
//! ```
//! Without the environment overrides the default `eeg-analyzer
//! get-brain-signal` command is used.

use std::sync::{Arc, Mutex};

use brainscope::{
    channel_chart, run_scope_with_fetch, spawn_fetch, AnalyzerRuntime, ChartConfig,
    FetchController,
};

fn main() -> eframe::Result<()> {
    env_logger::init();

    let mut cfg = ChartConfig::default();
    if let Ok(program) = std::env::var("BRAINSCOPE_ANALYZER") {
        cfg.analyzer.program = program;
        cfg.analyzer.args = std::env::var("BRAINSCOPE_ANALYZER_ARGS")
            .map(|args| args.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default();
    }

    let runtime = match AnalyzerRuntime::ensure_started(&cfg.analyzer) {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("cannot start analyzer runtime: {err}");
            std::process::exit(1);
        }
    };
    let source = Arc::new(Mutex::new(runtime.source()));

    let (sink, rx) = channel_chart();
    let controller = FetchController::new();

    let fetch_cfg = cfg.clone();
    run_scope_with_fetch(rx, cfg, move || {
        spawn_fetch(&controller, &source, &sink, &fetch_cfg);
    })
}
