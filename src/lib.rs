//! BrainScope crate root: re-exports and module wiring.
//!
//! A fetch-on-demand signal viewer built on egui/eframe. One button press
//! runs one acquisition cycle: the external analyzer is invoked, its raw
//! tokens are parsed into an indexed sample series, and the chart is
//! replaced with the result (or with an explicit no-data / error state).
//!
//! The crate is split into cohesive modules:
//! - `source`: the analyzer boundary (raw tokens and source adapters)
//! - `error`: the whole-call failure type for that boundary
//! - `runtime`: process-wide analyzer bootstrap with idempotent start
//! - `project`: token batch to sample series projection
//! - `fetch`: the per-trigger fetch cycle and its in-flight policy
//! - `sink`: display commands and the channel that feeds the UI
//! - `config`: chart, styling, message, and analyzer configuration
//! - `persistence`: JSON save/load of the configuration
//! - `scope`: the chart UI and run helpers

pub mod config;
pub mod error;
pub mod fetch;
pub mod persistence;
pub mod project;
pub mod runtime;
pub mod scope;
pub mod sink;
pub mod source;

// Public re-exports for a compact external API
pub use config::{AnalyzerConfig, ChartConfig, Messages, SeriesLook};
pub use error::SourceError;
pub use fetch::{spawn_fetch, FetchController, FetchOutcome};
pub use project::{project, Projection, SamplePoint, SignalSeries};
pub use runtime::AnalyzerRuntime;
pub use scope::{run_scope, run_scope_with_fetch, SignalScopeApp};
pub use sink::{channel_chart, ChartCommand, ChartSink};
pub use source::{AnalyzerProcessSource, RawSignalToken, ScriptedSource, SignalSource};
