//! The fetch cycle: acquire a batch, project it, publish the result.
//!
//! Per trigger the controller walks `Idle -> Fetching -> {Empty, Error,
//! Populated} -> Idle`. A trigger that arrives while a cycle is already in
//! flight is ignored; the display state is replaced wholesale anyway, so a
//! queued duplicate could only overwrite fresh data with stale data.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use crate::config::ChartConfig;
use crate::project::{project, Projection};
use crate::sink::ChartSink;
use crate::source::{RawSignalToken, SignalSource};

/// What one trigger resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A cycle was already in flight; this trigger was dropped.
    Skipped,
    /// The fetch call itself failed; the error state was published.
    Error,
    /// Nothing displayable came back; the no-data state was published.
    Empty,
    /// A fresh series was published.
    Populated { samples: usize },
}

/// Runs fetch cycles and enforces the one-in-flight policy.
#[derive(Clone, Default)]
pub struct FetchController {
    busy: Arc<AtomicBool>,
}

impl FetchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a cycle is currently in flight.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run one complete fetch cycle synchronously.
    ///
    /// Source failures never escape: they resolve to the error display
    /// state and [`FetchOutcome::Error`].
    pub fn run_cycle<S: SignalSource>(
        &self,
        source: &mut S,
        sink: &ChartSink,
        cfg: &ChartConfig,
    ) -> FetchOutcome {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            log::debug!("fetch trigger ignored, a cycle is already in flight");
            return FetchOutcome::Skipped;
        }
        let outcome = self.fetch_and_publish(source, sink, cfg);
        self.busy.store(false, Ordering::Release);
        outcome
    }

    fn fetch_and_publish<S: SignalSource>(
        &self,
        source: &mut S,
        sink: &ChartSink,
        cfg: &ChartConfig,
    ) -> FetchOutcome {
        let tokens = match source.fetch_raw_signals() {
            Ok(tokens) => tokens,
            Err(err) => {
                log::error!("error fetching signals: {err}");
                let _ = sink.show_error(&cfg.messages.error);
                return FetchOutcome::Error;
            }
        };

        if cfg.show_readout {
            let _ = sink.set_readout(format_readout(&tokens));
        }

        match project(&tokens) {
            Projection::Empty => {
                let _ = sink.show_no_data(&cfg.messages.no_data);
                FetchOutcome::Empty
            }
            Projection::Populated(series) => {
                let samples = series.len();
                let _ = sink.set_series(&cfg.series_label, series.points().to_vec());
                FetchOutcome::Populated { samples }
            }
        }
    }
}

/// Run one fetch cycle on a worker thread.
///
/// Keeps the UI thread responsive while the blocking analyzer call runs.
/// The controller's in-flight guard still applies, so rapid repeated
/// triggers collapse into one running cycle.
pub fn spawn_fetch<S>(
    controller: &FetchController,
    source: &Arc<Mutex<S>>,
    sink: &ChartSink,
    cfg: &ChartConfig,
) where
    S: SignalSource + Send + 'static,
{
    let controller = controller.clone();
    let source = Arc::clone(source);
    let sink = sink.clone();
    let cfg = cfg.clone();
    thread::spawn(move || {
        let mut source = match source.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        controller.run_cycle(&mut *source, &sink, &cfg);
    });
}

/// Human-readable summary of a raw batch, mirroring its textual list form.
fn format_readout(tokens: &[RawSignalToken]) -> String {
    let body = tokens
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{body}]")
}
