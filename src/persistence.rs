//! Config persistence: save and load the chart configuration as JSON.
//!
//! Mirror types exist because the egui color type inside [`SeriesLook`]
//! does not derive serde traits. `native_options` is runtime-only and is
//! not persisted.

use std::io;
use std::path::Path;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::config::{AnalyzerConfig, ChartConfig, Messages, SeriesLook};

/// Serializable version of SeriesLook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesLookSerde {
    pub color_rgba: [u8; 4],
    pub width: f32,
    pub show_points: bool,
    pub point_size: f32,
    pub point_color_rgba: [u8; 4],
}

impl From<&SeriesLook> for SeriesLookSerde {
    fn from(l: &SeriesLook) -> Self {
        Self {
            color_rgba: l.color.to_array(),
            width: l.width,
            show_points: l.show_points,
            point_size: l.point_size,
            point_color_rgba: l.point_color.to_array(),
        }
    }
}

impl SeriesLookSerde {
    pub fn apply_to(self, l: &mut SeriesLook) {
        let [r, g, b, a] = self.color_rgba;
        l.color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
        l.width = self.width;
        l.show_points = self.show_points;
        l.point_size = self.point_size;
        let [r, g, b, a] = self.point_color_rgba;
        l.point_color = egui::Color32::from_rgba_unmultiplied(r, g, b, a);
    }
}

/// Serializable version of ChartConfig.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartConfigSerde {
    pub title: String,
    pub description: String,
    pub series_label: String,
    pub y_unit: Option<String>,
    pub look: SeriesLookSerde,
    pub idle_text: String,
    pub no_data_text: String,
    pub error_text: String,
    pub analyzer_program: String,
    pub analyzer_args: Vec<String>,
    pub show_readout: bool,
}

impl From<&ChartConfig> for ChartConfigSerde {
    fn from(c: &ChartConfig) -> Self {
        Self {
            title: c.title.clone(),
            description: c.description.clone(),
            series_label: c.series_label.clone(),
            y_unit: c.y_unit.clone(),
            look: (&c.look).into(),
            idle_text: c.messages.idle.clone(),
            no_data_text: c.messages.no_data.clone(),
            error_text: c.messages.error.clone(),
            analyzer_program: c.analyzer.program.clone(),
            analyzer_args: c.analyzer.args.clone(),
            show_readout: c.show_readout,
        }
    }
}

impl ChartConfigSerde {
    /// Apply stored settings to a ChartConfig instance.
    pub fn apply_to(self, c: &mut ChartConfig) {
        c.title = self.title;
        c.description = self.description;
        c.series_label = self.series_label;
        c.y_unit = self.y_unit;
        self.look.apply_to(&mut c.look);
        c.messages = Messages {
            idle: self.idle_text,
            no_data: self.no_data_text,
            error: self.error_text,
        };
        c.analyzer = AnalyzerConfig {
            program: self.analyzer_program,
            args: self.analyzer_args,
        };
        c.show_readout = self.show_readout;
    }
}

/// Save a chart configuration to a JSON file.
pub fn save_config<P: AsRef<Path>>(cfg: &ChartConfig, path: P) -> io::Result<()> {
    let serde: ChartConfigSerde = cfg.into();
    let json = serde_json::to_string_pretty(&serde)?;
    std::fs::write(path, json)
}

/// Load a chart configuration from a JSON file, starting from defaults for
/// anything the stored form does not carry.
pub fn load_config<P: AsRef<Path>>(path: P) -> io::Result<ChartConfig> {
    let json = std::fs::read_to_string(path)?;
    let serde: ChartConfigSerde = serde_json::from_str(&json)?;
    let mut cfg = ChartConfig::default();
    serde.apply_to(&mut cfg);
    Ok(cfg)
}
