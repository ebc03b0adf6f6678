use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use brainscope::{
    channel_chart, ChartCommand, ChartConfig, FetchController, FetchOutcome, RawSignalToken,
    ScriptedSource, SignalSource, SourceError,
};

/// Source whose fetch always fails with a whole-call error.
struct FailingSource;

impl SignalSource for FailingSource {
    fn fetch_raw_signals(&mut self) -> Result<Vec<RawSignalToken>, SourceError> {
        Err(SourceError::AnalyzerFailed {
            status: "exit status: 1".to_string(),
            detail: "electrode bus offline".to_string(),
        })
    }
}

/// Source that blocks inside the fetch until released, to hold a cycle
/// in flight from another thread.
struct BlockingSource {
    release: Receiver<()>,
}

impl SignalSource for BlockingSource {
    fn fetch_raw_signals(&mut self) -> Result<Vec<RawSignalToken>, SourceError> {
        let _ = self.release.recv();
        Ok(vec![RawSignalToken::from("1.0")])
    }
}

fn drain(rx: &Receiver<ChartCommand>) -> Vec<ChartCommand> {
    let mut cmds = Vec::new();
    loop {
        match rx.try_recv() {
            Ok(cmd) => cmds.push(cmd),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => return cmds,
        }
    }
}

#[test]
fn populated_cycle_publishes_readout_then_series() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();
    let mut source = ScriptedSource::repeating(["1.0", "x", "3.5"]);

    let outcome = controller.run_cycle(&mut source, &sink, &cfg);
    assert_eq!(outcome, FetchOutcome::Populated { samples: 2 });

    let cmds = drain(&rx);
    assert_eq!(cmds.len(), 2);
    match &cmds[0] {
        ChartCommand::SetReadout { text } => assert_eq!(text, "[1.0, x, 3.5]"),
        _ => panic!("expected the raw readout first"),
    }
    match &cmds[1] {
        ChartCommand::SetSeries { label, points } => {
            assert_eq!(label, &cfg.series_label);
            assert_eq!(points.len(), 2);
            assert_eq!((points[0].index, points[0].value), (0, 1.0));
            assert_eq!((points[1].index, points[1].value), (2, 3.5));
        }
        _ => panic!("expected the series after the readout"),
    }
}

#[test]
fn empty_fetch_publishes_the_no_data_state() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();
    let mut source = ScriptedSource::repeating(Vec::<String>::new());

    assert_eq!(controller.run_cycle(&mut source, &sink, &cfg), FetchOutcome::Empty);

    let no_data = drain(&rx)
        .into_iter()
        .find_map(|cmd| match cmd {
            ChartCommand::ShowNoData { text } => Some(text),
            _ => None,
        })
        .expect("empty fetch must show the no-data state");
    assert_eq!(no_data, cfg.messages.no_data);
}

#[test]
fn all_invalid_fetch_matches_the_empty_fetch_state() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();
    let mut source = ScriptedSource::repeating(["abc"]);

    assert_eq!(controller.run_cycle(&mut source, &sink, &cfg), FetchOutcome::Empty);

    let shown = drain(&rx)
        .into_iter()
        .find_map(|cmd| match cmd {
            ChartCommand::ShowNoData { text } => Some(text),
            _ => None,
        })
        .expect("all-invalid fetch must show the no-data state");
    assert_eq!(shown, cfg.messages.no_data);
}

#[test]
fn source_failure_resolves_to_the_error_state() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();

    assert_eq!(
        controller.run_cycle(&mut FailingSource, &sink, &cfg),
        FetchOutcome::Error
    );

    let cmds = drain(&rx);
    assert_eq!(cmds.len(), 1, "a failed fetch publishes only the error state");
    match &cmds[0] {
        ChartCommand::ShowError { text } => {
            assert_eq!(text, &cfg.messages.error);
            assert_ne!(
                text, &cfg.messages.no_data,
                "error and no-data states must be distinguishable"
            );
        }
        _ => panic!("expected the error state"),
    }
}

#[test]
fn each_cycle_replaces_the_series_wholesale() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();
    let mut source = ScriptedSource::new(vec![vec!["1.0", "2.0", "3.0"], vec!["9.5"]]);

    controller.run_cycle(&mut source, &sink, &cfg);
    controller.run_cycle(&mut source, &sink, &cfg);

    let series: Vec<Vec<(usize, f64)>> = drain(&rx)
        .into_iter()
        .filter_map(|cmd| match cmd {
            ChartCommand::SetSeries { points, .. } => {
                Some(points.iter().map(|p| (p.index, p.value)).collect())
            }
            _ => None,
        })
        .collect();
    assert_eq!(series.len(), 2);
    assert_eq!(series[0], vec![(0, 1.0), (1, 2.0), (2, 3.0)]);
    assert_eq!(series[1], vec![(0, 9.5)], "the prior series is fully replaced");
}

#[test]
fn reentrant_trigger_is_skipped_while_in_flight() {
    let (sink, rx) = channel_chart();
    let cfg = ChartConfig::default();
    let controller = FetchController::new();

    let (release_tx, release_rx) = std::sync::mpsc::channel();
    let worker = {
        let controller = controller.clone();
        let sink = sink.clone();
        let cfg = cfg.clone();
        std::thread::spawn(move || {
            let mut source = BlockingSource { release: release_rx };
            controller.run_cycle(&mut source, &sink, &cfg)
        })
    };

    // Wait for the worker to enter the cycle.
    while !controller.is_busy() {
        std::thread::sleep(Duration::from_millis(1));
    }

    let mut second = ScriptedSource::repeating(["2.0"]);
    assert_eq!(
        controller.run_cycle(&mut second, &sink, &cfg),
        FetchOutcome::Skipped
    );

    release_tx.send(()).unwrap();
    let first = worker.join().unwrap();
    assert_eq!(first, FetchOutcome::Populated { samples: 1 });

    // Only the first cycle published anything.
    let series_count = drain(&rx)
        .iter()
        .filter(|cmd| matches!(cmd, ChartCommand::SetSeries { .. }))
        .count();
    assert_eq!(series_count, 1);

    // The controller is idle again afterwards.
    assert!(!controller.is_busy());
    assert_eq!(
        controller.run_cycle(&mut second, &sink, &cfg),
        FetchOutcome::Populated { samples: 1 }
    );
}
