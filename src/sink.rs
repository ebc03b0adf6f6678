//! Display surface commands and the channel that carries them.
//!
//! The chart UI owns no fetch logic; it consumes [`ChartCommand`]s sent by
//! the fetch side through a [`ChartSink`]. Each command replaces the
//! corresponding display state wholesale.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::project::SamplePoint;

/// Messages sent over the channel to drive the chart UI.
pub enum ChartCommand {
    /// Replace the displayed series with a fresh, fully-populated one.
    SetSeries {
        label: String,
        points: Vec<SamplePoint>,
    },
    /// Clear the chart and show the "no data" message.
    ShowNoData { text: String },
    /// Clear the chart and show the fetch-error message.
    ShowError { text: String },
    /// Update the raw-output readout line below the chart.
    SetReadout { text: String },
}

/// Convenience sender for pushing display updates to the chart UI.
#[derive(Clone)]
pub struct ChartSink {
    tx: Sender<ChartCommand>,
}

impl ChartSink {
    /// Replace the chart contents with a labeled series.
    pub fn set_series<S, I>(&self, label: S, points: I) -> Result<(), SendError<ChartCommand>>
    where
        S: Into<String>,
        I: Into<Vec<SamplePoint>>,
    {
        self.tx.send(ChartCommand::SetSeries {
            label: label.into(),
            points: points.into(),
        })
    }

    /// Clear the chart and show a "no data" message.
    pub fn show_no_data<S: Into<String>>(&self, text: S) -> Result<(), SendError<ChartCommand>> {
        self.tx.send(ChartCommand::ShowNoData { text: text.into() })
    }

    /// Clear the chart and show an error message.
    pub fn show_error<S: Into<String>>(&self, text: S) -> Result<(), SendError<ChartCommand>> {
        self.tx.send(ChartCommand::ShowError { text: text.into() })
    }

    /// Update the raw-output readout line.
    pub fn set_readout<S: Into<String>>(&self, text: S) -> Result<(), SendError<ChartCommand>> {
        self.tx.send(ChartCommand::SetReadout { text: text.into() })
    }
}

/// Create a new channel pair for the chart: `(ChartSink, Receiver<ChartCommand>)`.
pub fn channel_chart() -> (ChartSink, Receiver<ChartCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (ChartSink { tx }, rx)
}
