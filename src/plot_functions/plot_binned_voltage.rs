// src/plot_functions/plot_binned_voltage.rs

use crate::constants::{
    COLOR_EXPERIMENTAL_LINE, COLOR_SERIES_LINE, LINE_WIDTH_PLOT, MARKER_SIZE, X_LABEL_TIME,
    Y_LABEL_VOLTAGE,
};
use crate::data_analysis::binning::BinnedMeasurements;
use crate::data_input::measurement_data::ExperimentalTrace;
use crate::plot_framework::{MarkerShape, PlotConfig, PlotSeries};
use crate::plot_functions::plot_binned_measurements::{
    series_points, time_axis_range, value_axis_range,
};

/// Real vs. simulated voltage against binned time, optionally overlaid with the
/// unbinned experimental trace.
pub fn voltage_panel(
    binned: &BinnedMeasurements,
    experimental: Option<&ExperimentalTrace>,
) -> Option<PlotConfig> {
    if binned.is_empty() {
        return None;
    }

    let mut series: Vec<PlotSeries> = [
        ("Real Voltage", &binned.real_voltage, MarkerShape::Circle),
        ("Simulated Voltage", &binned.simulated_voltage, MarkerShape::Square),
    ]
    .into_iter()
    .map(|(label, values, marker)| PlotSeries {
        data: series_points(&binned.time, values),
        label: label.to_string(),
        color: *COLOR_SERIES_LINE,
        stroke_width: LINE_WIDTH_PLOT,
        marker: Some(marker),
        marker_size: MARKER_SIZE,
    })
    .collect();

    if let Some(trace) = experimental.filter(|trace| !trace.is_empty()) {
        series.push(PlotSeries {
            data: series_points(&trace.time, &trace.voltage),
            label: "Experimental".to_string(),
            color: *COLOR_EXPERIMENTAL_LINE,
            stroke_width: LINE_WIDTH_PLOT,
            marker: None,
            marker_size: 0,
        });
    }

    Some(PlotConfig {
        title: format!("Binned Voltage (bin size {})", binned.bin_size),
        x_range: time_axis_range(&series)?,
        y_range: value_axis_range(&series)?,
        series,
        x_label: X_LABEL_TIME.to_string(),
        y_label: Y_LABEL_VOLTAGE.to_string(),
    })
}


// src/plot_functions/plot_binned_voltage.rs
