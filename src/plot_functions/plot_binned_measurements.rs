// src/plot_functions/plot_binned_measurements.rs

use ndarray::Array1;
use ndarray_stats::QuantileExt; // min_skipnan / max_skipnan on Array1
use std::ops::Range;
use std::path::Path;

use crate::data_analysis::binning::BinnedMeasurements;
use crate::data_input::measurement_data::ExperimentalTrace;
use crate::error::RenderError;
use crate::plot_framework::{calculate_time_range, draw_side_by_side_plot, padded_range, PlotSeries};
use crate::plot_functions::plot_binned_concentration::concentration_panel;
use crate::plot_functions::plot_binned_voltage::voltage_panel;

pub const PANEL_NAMES: [&str; 2] = ["Voltage", "Concentration"];

/// Renders the voltage and concentration panels side by side into `output_path`.
/// `experimental`, when given, is drawn unbinned over the voltage panel.
/// Returns whether at least one panel had data to draw.
pub fn plot_binned_measurements(
    binned: &BinnedMeasurements,
    experimental: Option<&ExperimentalTrace>,
    root_name: &str,
    output_path: &Path,
) -> Result<bool, RenderError> {
    log::info!("--- Generating Binned Voltage/Concentration Plot ---");
    draw_side_by_side_plot(output_path, root_name, &PANEL_NAMES, |panel_index| {
        match panel_index {
            0 => voltage_panel(binned, experimental),
            1 => concentration_panel(binned),
            _ => None,
        }
    })
}

/// Pairs `time` with `values`, skipping samples where either is not finite.
pub(crate) fn series_points<'a, T, V>(time: T, values: V) -> Vec<(f64, f64)>
where
    T: IntoIterator<Item = &'a f64>,
    V: IntoIterator<Item = &'a f64>,
{
    time.into_iter()
        .zip(values)
        .filter(|(t, v)| t.is_finite() && v.is_finite())
        .map(|(&t, &v)| (t, v))
        .collect()
}

fn extent(values: Array1<f64>) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (low, high) = (*values.min_skipnan(), *values.max_skipnan());
    (low.is_finite() && high.is_finite()).then_some((low, high))
}

/// X range over every plotted point: the time extent, padded only when flat.
pub(crate) fn time_axis_range(series: &[PlotSeries]) -> Option<Range<f64>> {
    let times: Array1<f64> = series.iter().flat_map(|s| s.data.iter().map(|p| p.0)).collect();
    let (low, high) = extent(times)?;
    let (start, end) = calculate_time_range(low, high);
    Some(start..end)
}

/// Padded y range over every plotted point.
pub(crate) fn value_axis_range(series: &[PlotSeries]) -> Option<Range<f64>> {
    let values: Array1<f64> = series.iter().flat_map(|s| s.data.iter().map(|p| p.1)).collect();
    let (low, high) = extent(values)?;
    let (start, end) = padded_range(low, high);
    Some(start..end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::COLOR_SERIES_LINE;
    use ndarray::array;

    fn points(data: Vec<(f64, f64)>) -> PlotSeries {
        PlotSeries {
            data,
            label: String::new(),
            color: *COLOR_SERIES_LINE,
            stroke_width: 1,
            marker: None,
            marker_size: 4,
        }
    }

    #[test]
    fn test_series_points_skips_nan() {
        let time = array![0.0, 1.0, f64::NAN, 3.0];
        let values = array![5.0, f64::NAN, 7.0, 8.0];
        assert_eq!(series_points(&time, &values), vec![(0.0, 5.0), (3.0, 8.0)]);
    }

    #[test]
    fn test_series_points_accepts_plain_vectors() {
        let time = vec![0.0, f64::INFINITY, 2.0];
        let values = vec![1.0, 1.0, 3.0];
        assert_eq!(series_points(&time, &values), vec![(0.0, 1.0), (2.0, 3.0)]);
    }

    #[test]
    fn test_time_axis_range() {
        let spread = [points(vec![(1.0, 0.0), (2.0, 0.0)]), points(vec![(4.0, 0.0)])];
        assert_eq!(time_axis_range(&spread), Some(1.0..4.0));
        assert_eq!(time_axis_range(&[points(vec![(2.0, 0.0)])]), Some(1.5..2.5));
        assert_eq!(time_axis_range(&[points(Vec::new())]), None);
        assert_eq!(time_axis_range(&[]), None);
    }

    #[test]
    fn test_value_axis_range_spans_all_series() {
        let series = [
            points(vec![(0.0, 1.0), (2.0, 3.0)]),
            points(vec![(0.0, -2.0), (1.0, 0.0)]),
        ];
        let range = value_axis_range(&series).unwrap();
        // Extent -2..3 padded by 15% of 5.
        assert!((range.start + 2.75).abs() < 1e-12);
        assert!((range.end - 3.75).abs() < 1e-12);
    }

    #[test]
    fn test_value_axis_range_without_points() {
        assert_eq!(value_axis_range(&[points(Vec::new()), points(Vec::new())]), None);
    }
}

// src/plot_functions/plot_binned_measurements.rs
