// src/constants.rs

use plotters::style::colors::{BLACK, RED};
use plotters::style::RGBColor;

// Input defaults.
pub const DEFAULT_INPUT_FILE: &str = "output.csv";
pub const DEFAULT_BIN_SIZE: usize = 5; // Rows averaged into one bin
pub const OUTPUT_FILE_SUFFIX: &str = "_binned.png";
pub const DEFAULT_EXPERIMENTAL_FILE: &str = "data.csv"; // Taken by a bare --overlay

// Column names, matched after header whitespace is stripped.
pub const COLUMN_TIME: &str = "Time";
pub const COLUMN_REAL_VOLTAGE: &str = "Real Voltage";
pub const COLUMN_SIMULATED_VOLTAGE: &str = "Simulated Voltage";
pub const CONCENTRATION_COLUMNS: [&str; 4] = ["c1c", "c0c", "c1a", "c2a"];

// Plot dimensions (two panels side by side).
pub const PLOT_WIDTH: u32 = 1400;
pub const PLOT_HEIGHT: u32 = 600;

// Viewer window.
pub const VIEWER_TITLE: &str = "Binned Trace Viewer";
pub const VIEWER_WIDTH: f32 = 1400.0;
pub const VIEWER_HEIGHT: f32 = 700.0;

// --- Plot Color Assignments ---
pub const COLOR_SERIES_LINE: &RGBColor = &BLACK;
pub const COLOR_EXPERIMENTAL_LINE: &RGBColor = &RED;

// Stroke widths for lines
pub const LINE_WIDTH_PLOT: u32 = 1;
pub const LINE_WIDTH_LEGEND: u32 = 2;

// Marker radius in pixels.
pub const MARKER_SIZE: i32 = 4;
pub const LEGEND_SAMPLE_HALF_WIDTH: i32 = 10;

// Axis padding
pub const RANGE_PADDING_FRACTION: f64 = 0.15;
pub const MIN_RANGE_SPAN: f64 = 1e-9;
pub const FLAT_RANGE_PADDING: f64 = 0.5;

// Font sizes
pub const FONT_SIZE_MAIN_TITLE: i32 = 22;
pub const FONT_SIZE_CHART_TITLE: i32 = 18;
pub const FONT_SIZE_AXIS_LABEL: i32 = 14;
pub const FONT_SIZE_LEGEND: i32 = 14;
pub const FONT_SIZE_MESSAGE: i32 = 18;

// Axis labels
pub const X_LABEL_TIME: &str = "Time (s)";
pub const Y_LABEL_VOLTAGE: &str = "Voltage (V)";
pub const Y_LABEL_CONCENTRATION: &str = "Concentration (mol/m³)";

// src/constants.rs
