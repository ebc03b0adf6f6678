//! Signal scope UI: one line chart, one fetch button, and the status
//! states that replace the chart body when there is nothing to draw.

use std::sync::mpsc::Receiver;
use std::time::Duration;

use chrono::{DateTime, Local};
use eframe::egui;
use egui_plot::{Line, Plot, Points};

use crate::config::ChartConfig;
use crate::sink::ChartCommand;

/// What currently fills the chart area.
enum Display {
    /// A centered status message (idle, no data, or error).
    Message(String),
    /// A populated series, replaced wholesale on every fetch.
    Series {
        label: String,
        points: Vec<[f64; 2]>,
    },
}

/// The eframe application driving the signal scope window.
pub struct SignalScopeApp {
    rx: Receiver<ChartCommand>,
    cfg: ChartConfig,
    display: Display,
    readout: Option<String>,
    last_update: Option<DateTime<Local>>,
    on_fetch: Option<Box<dyn FnMut() + 'static>>,
}

impl SignalScopeApp {
    pub fn new(rx: Receiver<ChartCommand>, cfg: ChartConfig) -> Self {
        let idle = cfg.messages.idle.clone();
        Self {
            rx,
            cfg,
            display: Display::Message(idle),
            readout: None,
            last_update: None,
            on_fetch: None,
        }
    }

    /// Install the callback invoked by the fetch button.
    pub fn set_fetch_handler(&mut self, handler: Box<dyn FnMut() + 'static>) {
        self.on_fetch = Some(handler);
    }

    /// Drain pending display commands. Each command replaces its slice of
    /// the display state; nothing is merged.
    fn drain_rx(&mut self) {
        while let Ok(cmd) = self.rx.try_recv() {
            match cmd {
                ChartCommand::SetSeries { label, points } => {
                    let points = points
                        .iter()
                        .map(|p| [p.index as f64, p.value])
                        .collect();
                    self.display = Display::Series { label, points };
                    self.last_update = Some(Local::now());
                }
                ChartCommand::ShowNoData { text } | ChartCommand::ShowError { text } => {
                    self.display = Display::Message(text);
                    self.last_update = Some(Local::now());
                }
                ChartCommand::SetReadout { text } => {
                    self.readout = Some(text);
                }
            }
        }
    }

    fn controls_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.heading(&self.cfg.description);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Fetch signals").clicked() {
                    log::debug!("fetch button clicked");
                    if let Some(handler) = self.on_fetch.as_mut() {
                        handler();
                    }
                }
            });
        });
    }

    fn chart_ui(&self, ui: &mut egui::Ui) {
        match &self.display {
            Display::Message(text) => {
                ui.centered_and_justified(|ui| {
                    ui.label(egui::RichText::new(text).size(16.0).weak());
                });
            }
            Display::Series { label, points } => {
                let y_unit = self.cfg.y_unit.clone();
                let plot = Plot::new("signal_scope")
                    .allow_scroll(false)
                    .allow_zoom(true)
                    .allow_boxed_zoom(true)
                    .x_axis_formatter(|x, _range| format!("{:.0}", x.value))
                    .y_axis_formatter(move |y, _range| {
                        if let Some(unit) = &y_unit {
                            format!("{:.3} {}", y.value, unit)
                        } else {
                            format!("{:.3}", y.value)
                        }
                    });
                let look = &self.cfg.look;
                plot.show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(label.as_str(), points.clone())
                            .color(look.color)
                            .width(look.width),
                    );
                    if look.show_points {
                        plot_ui.points(
                            Points::new("", points.clone())
                                .radius(look.point_size)
                                .color(look.point_color),
                        );
                    }
                });
            }
        }
    }

    fn readout_ui(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(text) = &self.readout {
                ui.monospace(text);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(at) = &self.last_update {
                    ui.weak(format!("Last fetch {}", at.format("%H:%M:%S")));
                }
            });
        });
    }
}

impl eframe::App for SignalScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_rx();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls_ui(ui);
        });

        if self.cfg.show_readout {
            egui::TopBottomPanel::bottom("readout").show(ctx, |ui| {
                self.readout_ui(ui);
            });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_ui(ui);
        });

        // Poll for commands arriving from worker threads.
        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

/// Run the scope UI until the window is closed. Display-only: commands
/// arrive on `rx` from wiring the caller owns.
pub fn run_scope(rx: Receiver<ChartCommand>, cfg: ChartConfig) -> eframe::Result<()> {
    run_scope_inner(rx, cfg, None)
}

/// Run the scope UI with a fetch-button handler installed.
pub fn run_scope_with_fetch(
    rx: Receiver<ChartCommand>,
    cfg: ChartConfig,
    on_fetch: impl FnMut() + 'static,
) -> eframe::Result<()> {
    run_scope_inner(rx, cfg, Some(Box::new(on_fetch)))
}

fn run_scope_inner(
    rx: Receiver<ChartCommand>,
    cfg: ChartConfig,
    on_fetch: Option<Box<dyn FnMut() + 'static>>,
) -> eframe::Result<()> {
    let mut options = cfg
        .native_options
        .clone()
        .unwrap_or_else(eframe::NativeOptions::default);
    options.viewport = egui::ViewportBuilder::default().with_inner_size([900.0, 600.0]);
    let title = cfg.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| {
            Ok(Box::new({
                let mut app = SignalScopeApp::new(rx, cfg);
                if let Some(handler) = on_fetch {
                    app.set_fetch_handler(handler);
                }
                app
            }))
        }),
    )
}
