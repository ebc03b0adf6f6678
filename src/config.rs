//! Configuration types for the signal scope.

use eframe::egui;

// ─────────────────────────────────────────────────────────────────────────────
// SeriesLook – visual styling for the signal series
// ─────────────────────────────────────────────────────────────────────────────

/// The visual presentation of the plotted series (color, line width, markers).
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLook {
    pub color: egui::Color32,
    pub width: f32,
    pub show_points: bool,
    pub point_size: f32,
    pub point_color: egui::Color32,
}

impl Default for SeriesLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::from_rgb(0, 102, 204),
            width: 2.5,
            show_points: true,
            point_size: 4.5,
            point_color: egui::Color32::from_rgb(51, 153, 255),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Messages – user-facing status strings
// ─────────────────────────────────────────────────────────────────────────────

/// The status strings shown in place of the chart body.
///
/// `no_data` and `error` are deliberately distinct: an empty result is not
/// an error and the user should be able to tell the two apart.
#[derive(Debug, Clone, PartialEq)]
pub struct Messages {
    /// Shown before the first fetch.
    pub idle: String,
    /// Shown when a fetch produced no displayable samples.
    pub no_data: String,
    /// Shown when the fetch call itself failed.
    pub error: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            idle: "Press the button to fetch signals.".to_string(),
            no_data: "No signals available.".to_string(),
            error: "Error fetching data.".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// AnalyzerConfig – the external analyzer command
// ─────────────────────────────────────────────────────────────────────────────

/// Which command to run to obtain a signal batch.
///
/// The analyzer takes no per-fetch parameters; program and arguments are
/// fixed at configuration time.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    pub program: String,
    pub args: Vec<String>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            program: "eeg-analyzer".to_string(),
            args: vec!["get-brain-signal".to_string()],
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the signal scope.
#[derive(Clone)]
pub struct ChartConfig {
    /// Native window title.
    pub title: String,
    /// Headline rendered above the chart.
    pub description: String,
    /// Label of the plotted series.
    pub series_label: String,
    /// Optional unit label for the Y axis (e.g. "µV").
    pub y_unit: Option<String>,
    /// Visual styling of the series.
    pub look: SeriesLook,
    /// User-facing status strings.
    pub messages: Messages,
    /// The external analyzer command.
    pub analyzer: AnalyzerConfig,
    /// Show the raw-output readout line below the chart.
    pub show_readout: bool,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "BrainScope".to_string(),
            description: "Brain Signal Chart".to_string(),
            series_label: "EEG Signals".to_string(),
            y_unit: None,
            look: SeriesLook::default(),
            messages: Messages::default(),
            analyzer: AnalyzerConfig::default(),
            show_readout: true,
            native_options: None,
        }
    }
}
