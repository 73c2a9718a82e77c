// src/viewer.rs

use eframe::egui;
use egui::{Color32, RichText};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use plotters::style::RGBColor;

use crate::constants::{VIEWER_HEIGHT, VIEWER_TITLE, VIEWER_WIDTH};
use crate::data_input::data_source::{DataSource, LoadedData};
use crate::error::RenderError;
use crate::plot_framework::{MarkerShape, PlotConfig, PlotSeries};
use crate::plot_functions::plot_binned_concentration::concentration_panel;
use crate::plot_functions::plot_binned_measurements::PANEL_NAMES;
use crate::plot_functions::plot_binned_voltage::voltage_panel;

/// Interactive window showing the same two binned panels as the PNG.
pub struct BinnedViewer {
    source: DataSource,
    data: LoadedData,
    pub show_voltage: bool,
    pub show_concentration: bool,
    pub show_experimental: bool,
    status: String,
}

impl BinnedViewer {
    pub fn new(source: DataSource, data: LoadedData) -> Self {
        let status = loaded_status(&data);
        Self {
            source,
            data,
            show_voltage: true,
            show_concentration: true,
            show_experimental: true,
            status,
        }
    }

    pub fn data(&self) -> &LoadedData {
        &self.data
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Reloads and re-bins the source files. On failure the previous data stays.
    pub fn refresh(&mut self) -> Result<(), RenderError> {
        log::info!("Refreshing data from '{}'.", self.source.measurements.display());
        match self.source.load() {
            Ok(data) => {
                self.status = loaded_status(&data);
                self.data = data;
                Ok(())
            }
            Err(err) => {
                self.status = format!("Refresh failed: {err}");
                Err(err)
            }
        }
    }

    /// Panels enabled by the toggles, in display order. `None` marks a panel with no bins.
    pub fn visible_panels(&self) -> Vec<(&'static str, Option<PlotConfig>)> {
        let experimental = self
            .data
            .experimental
            .as_ref()
            .filter(|_| self.show_experimental);
        let mut panels = Vec::new();
        if self.show_voltage {
            panels.push((PANEL_NAMES[0], voltage_panel(&self.data.binned, experimental)));
        }
        if self.show_concentration {
            panels.push((PANEL_NAMES[1], concentration_panel(&self.data.binned)));
        }
        panels
    }
}

fn loaded_status(data: &LoadedData) -> String {
    let mut status = format!(
        "{} bins of {} rows",
        data.binned.num_bins(),
        data.binned.bin_size
    );
    if data.binned.dropped_rows > 0 {
        status.push_str(&format!(", {} trailing row(s) dropped", data.binned.dropped_rows));
    }
    if let Some(trace) = &data.experimental {
        status.push_str(&format!(", {} experimental samples", trace.len()));
    }
    status
}

pub(crate) fn egui_color(color: RGBColor) -> Color32 {
    Color32::from_rgb(color.0, color.1, color.2)
}

pub(crate) fn egui_marker(shape: MarkerShape) -> egui_plot::MarkerShape {
    match shape {
        MarkerShape::Circle => egui_plot::MarkerShape::Circle,
        MarkerShape::Square => egui_plot::MarkerShape::Square,
        MarkerShape::Cross => egui_plot::MarkerShape::Cross,
        MarkerShape::TriangleUp => egui_plot::MarkerShape::Up,
        MarkerShape::TriangleDown => egui_plot::MarkerShape::Down,
        MarkerShape::Diamond => egui_plot::MarkerShape::Diamond,
    }
}

pub(crate) fn plot_points(series: &PlotSeries) -> Vec<[f64; 2]> {
    series.data.iter().map(|&(x, y)| [x, y]).collect()
}

fn show_panel(ui: &mut egui::Ui, panel_name: &str, config: Option<&PlotConfig>) {
    let Some(config) = config else {
        ui.colored_label(
            Color32::RED,
            format!("{panel_name} Data Unavailable:\nNo complete bins"),
        );
        return;
    };

    ui.label(RichText::new(&config.title).strong());
    Plot::new(panel_name)
        .legend(Legend::default())
        .x_axis_label(config.x_label.clone())
        .y_axis_label(config.y_label.clone())
        .include_x(config.x_range.start)
        .include_x(config.x_range.end)
        .include_y(config.y_range.start)
        .include_y(config.y_range.end)
        .show(ui, |plot_ui| {
            for series in config.series.iter().filter(|s| !s.data.is_empty()) {
                let color = egui_color(series.color);
                plot_ui.line(
                    Line::new(PlotPoints::new(plot_points(series)))
                        .name(&series.label)
                        .color(color)
                        .width(series.stroke_width as f32),
                );
                if let Some(shape) = series.marker {
                    plot_ui.points(
                        Points::new(PlotPoints::new(plot_points(series)))
                            .name(&series.label)
                            .shape(egui_marker(shape))
                            .radius(series.marker_size as f32)
                            .filled(true)
                            .color(color),
                    );
                }
            }
        });
}

impl eframe::App for BinnedViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_voltage, "Voltage");
                ui.checkbox(&mut self.show_concentration, "Concentration");
                ui.add_enabled(
                    self.data.experimental.is_some(),
                    egui::Checkbox::new(&mut self.show_experimental, "Experimental Data"),
                );
                if ui.button("Refresh Data").clicked() {
                    if let Err(err) = self.refresh() {
                        log::error!("Refresh failed: {err}");
                    }
                }
                ui.separator();
                ui.label(&self.status);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let panels = self.visible_panels();
            if panels.is_empty() {
                ui.label("No panel selected.");
                return;
            }
            ui.columns(panels.len(), |columns| {
                for (column, (panel_name, config)) in columns.iter_mut().zip(&panels) {
                    show_panel(column, panel_name, config.as_ref());
                }
            });
        });
    }
}

/// Opens the viewer window and blocks until it is closed.
pub fn run_viewer(source: DataSource, data: LoadedData, window_title: &str) -> Result<(), RenderError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([VIEWER_WIDTH, VIEWER_HEIGHT])
            .with_title(format!("{VIEWER_TITLE} - {window_title}")),
        ..Default::default()
    };
    let app = BinnedViewer::new(source, data);
    log::info!("Opening viewer window.");
    eframe::run_native(
        VIEWER_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Box::new(app)
        }),
    )
    .map_err(|err| RenderError::Viewer(err.to_string()))
}


// src/viewer.rs
