// src/plot_functions/plot_binned_concentration.rs

use crate::constants::{
    COLOR_SERIES_LINE, LINE_WIDTH_PLOT, MARKER_SIZE, X_LABEL_TIME, Y_LABEL_CONCENTRATION,
};
use crate::data_analysis::binning::BinnedMeasurements;
use crate::plot_framework::{MarkerShape, PlotConfig, PlotSeries};
use crate::plot_functions::plot_binned_measurements::{
    series_points, time_axis_range, value_axis_range,
};

/// One marker per concentration column, in CONCENTRATION_COLUMNS order.
pub const CONCENTRATION_MARKERS: [MarkerShape; 4] = [
    MarkerShape::Cross,
    MarkerShape::TriangleUp,
    MarkerShape::TriangleDown,
    MarkerShape::Diamond,
];

/// The four binned concentration series against binned time.
pub fn concentration_panel(binned: &BinnedMeasurements) -> Option<PlotConfig> {
    if binned.is_empty() {
        return None;
    }
    let series: Vec<PlotSeries> = binned
        .concentration_series()
        .zip(CONCENTRATION_MARKERS)
        .map(|((name, values), marker)| PlotSeries {
            data: series_points(&binned.time, values),
            label: name.to_string(),
            color: *COLOR_SERIES_LINE,
            stroke_width: LINE_WIDTH_PLOT,
            marker: Some(marker),
            marker_size: MARKER_SIZE,
        })
        .collect();

    Some(PlotConfig {
        title: format!("Binned Concentration (bin size {})", binned.bin_size),
        x_range: time_axis_range(&series)?,
        y_range: value_axis_range(&series)?,
        series,
        x_label: X_LABEL_TIME.to_string(),
        y_label: Y_LABEL_CONCENTRATION.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_concentration_panel_labels_follow_columns() {
        let data = BinnedMeasurements {
            bin_size: 2,
            dropped_rows: 1,
            time: array![0.5, 2.5, 4.5],
            real_voltage: array![1.0, 1.0, 1.0],
            simulated_voltage: array![1.0, 1.0, 1.0],
            concentrations: [
                array![1000.0, 1010.0, 1020.0],
                array![900.0, 905.0, f64::NAN],
                array![10.0, 11.0, 12.0],
                array![0.0, 0.5, 1.0],
            ],
        };
        let config = concentration_panel(&data).unwrap();

        let labels: Vec<&str> = config.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["c1c", "c0c", "c1a", "c2a"]);
        let markers: Vec<MarkerShape> = config.series.iter().filter_map(|s| s.marker).collect();
        assert_eq!(markers, CONCENTRATION_MARKERS.to_vec());
        assert_eq!(config.x_range, 0.5..4.5);
        assert_eq!(config.series[1].data.len(), 2);
        assert!(config.y_range.start < 0.0 && config.y_range.end > 1020.0);
        assert_eq!(config.y_label, "Concentration (mol/m³)");
    }

    #[test]
    fn test_concentration_panel_empty_bins() {
        let empty = Array1::<f64>::zeros(0);
        let data = BinnedMeasurements {
            bin_size: 5,
            dropped_rows: 3,
            time: empty.clone(),
            real_voltage: empty.clone(),
            simulated_voltage: empty,
            concentrations: Default::default(),
        };
        assert!(concentration_panel(&data).is_none());
    }
}

// src/plot_functions/plot_binned_concentration.rs
