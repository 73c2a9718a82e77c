// src/plot_framework.rs

use plotters::backend::BitMapBackend;
use plotters::chart::{ChartBuilder, ChartContext, SeriesLabelPosition};
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, IntoDrawingArea};
use plotters::element::{
    Circle, Cross, Drawable, EmptyElement, PathElement, PointCollection, Polygon, Rectangle, Text,
    TriangleMarker,
};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, RED, WHITE};
use plotters::style::{Color, IntoFont, RGBColor, ShapeStyle};

use std::ops::Range;
use std::path::Path;

use crate::constants::{
    FLAT_RANGE_PADDING, FONT_SIZE_MESSAGE, LEGEND_SAMPLE_HALF_WIDTH, LINE_WIDTH_LEGEND,
    MIN_RANGE_SPAN, PLOT_HEIGHT, PLOT_WIDTH, RANGE_PADDING_FRACTION,
};
use crate::error::RenderError;
use crate::font_config::{
    FONT_TUPLE_AXIS_LABEL, FONT_TUPLE_CHART_TITLE, FONT_TUPLE_LEGEND, FONT_TUPLE_MAIN_TITLE,
    FONT_TUPLE_MESSAGE,
};

type PanelChart<'c, 'b> =
    ChartContext<'c, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Widens `[a, b]` (in either order) so the extreme points do not sit on the frame.
/// A flat span gets a fixed margin instead of a proportional one.
pub fn padded_range(a: f64, b: f64) -> (f64, f64) {
    let (low, high) = (a.min(b), a.max(b));
    let span = high - low;
    let margin = if span < MIN_RANGE_SPAN {
        FLAT_RANGE_PADDING
    } else {
        span * RANGE_PADDING_FRACTION
    };
    (low - margin, high + margin)
}

/// Time axis range: the data extent, padded only when it collapses to a point.
pub fn calculate_time_range(min_val: f64, max_val: f64) -> (f64, f64) {
    if (max_val - min_val).abs() < 1e-12 {
        padded_range(min_val, max_val)
    } else {
        (min_val.min(max_val), min_val.max(max_val))
    }
}

/// Marker drawn at every binned point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerShape {
    Circle,
    Square,
    Cross,
    TriangleUp,
    TriangleDown,
    Diamond,
}

/// Top-left pixel at which a block of text in `font_px` lands roughly centred in `area_px`.
/// Glyphs are assumed to be 0.6 em wide and lines 4 px apart.
fn centred_text_origin(area_px: (i32, i32), message: &str, font_px: i32) -> (i32, i32) {
    let columns = message.lines().map(|line| line.chars().count()).max().unwrap_or(0) as i32;
    let rows = message.lines().count() as i32;
    let text_width = columns * (font_px * 3 / 5);
    let text_height = rows * (font_px + 4);
    ((area_px.0 - text_width) / 2, (area_px.1 - text_height) / 2)
}

/// Draw a "Data Unavailable" message on a plot area.
pub fn draw_unavailable_message(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    plot_type: &str,
    reason: &str,
) -> Result<(), RenderError> {
    let (x_pixels, y_pixels) = area.get_pixel_range();
    let message = format!("{plot_type} Data Unavailable:\n{reason}");
    let origin = centred_text_origin(
        (x_pixels.end - x_pixels.start, y_pixels.end - y_pixels.start),
        &message,
        FONT_SIZE_MESSAGE,
    );

    let text_style = FONT_TUPLE_MESSAGE.into_font().color(&RED);
    area.draw(&Text::new(message, origin, text_style))?;
    Ok(())
}

#[derive(Clone)]
pub struct PlotSeries {
    pub data: Vec<(f64, f64)>,
    pub label: String,
    pub color: RGBColor,
    pub stroke_width: u32,
    pub marker: Option<MarkerShape>, // None draws the line only
    pub marker_size: i32,
}

#[derive(Clone)]
pub struct PlotConfig {
    pub title: String,
    pub x_range: Range<f64>,
    pub y_range: Range<f64>,
    pub series: Vec<PlotSeries>,
    pub x_label: String,
    pub y_label: String,
}

/// Line sample for a legend entry, centered on `center`.
fn legend_line_sample<'b>(
    center: (i32, i32),
    style: ShapeStyle,
) -> <EmptyElement<(i32, i32), BitMapBackend<'b>> as std::ops::Add<PathElement<(i32, i32)>>>::Output
{
    EmptyElement::at(center)
        + PathElement::new(
            vec![(-LEGEND_SAMPLE_HALF_WIDTH, 0), (LEGEND_SAMPLE_HALF_WIDTH, 0)],
            style,
        )
}

/// Draws `glyph()` at every point of `series` and gives the series a legend entry
/// showing a line sample with the same glyph on top.
///
/// `glyph` builds an element in pixel offsets around (0, 0).
fn draw_marker_series<'c, 'b: 'c, E, F>(
    chart: &mut PanelChart<'c, 'b>,
    series: &PlotSeries,
    glyph: F,
) -> Result<(), RenderError>
where
    E: Drawable<BitMapBackend<'b>> + 'c,
    for<'x> &'x E: PointCollection<'x, (i32, i32)>,
    F: Fn() -> E + Clone + 'c,
{
    let legend_glyph = glyph.clone();
    let anno = chart.draw_series(
        series
            .data
            .iter()
            .map(|&point| EmptyElement::at(point) + glyph()),
    )?;

    if !series.label.is_empty() {
        let legend_line = series.color.stroke_width(LINE_WIDTH_LEGEND);
        anno.label(&series.label).legend(move |(x, y)| {
            legend_line_sample::<'b>((x + LEGEND_SAMPLE_HALF_WIDTH, y), legend_line)
                + legend_glyph()
        });
    }
    Ok(())
}

fn draw_series_markers<'c, 'b: 'c>(
    chart: &mut PanelChart<'c, 'b>,
    series: &PlotSeries,
    shape: MarkerShape,
) -> Result<(), RenderError> {
    let size = series.marker_size;
    let style: ShapeStyle = series.color.filled();
    match shape {
        MarkerShape::Circle => draw_marker_series(chart, series, move || {
            Circle::new((0, 0), size, style)
        }),
        MarkerShape::Square => draw_marker_series(chart, series, move || {
            Rectangle::new([(-size, -size), (size, size)], style)
        }),
        MarkerShape::Cross => draw_marker_series(chart, series, move || {
            Cross::new((0, 0), size, style)
        }),
        MarkerShape::TriangleUp => draw_marker_series(chart, series, move || {
            TriangleMarker::new((0, 0), size, style)
        }),
        // Pixel y grows downwards, so the apex sits at +size.
        MarkerShape::TriangleDown => draw_marker_series(chart, series, move || {
            Polygon::new(vec![(-size, -size), (size, -size), (0, size)], style)
        }),
        MarkerShape::Diamond => draw_marker_series(chart, series, move || {
            Polygon::new(vec![(0, -size), (size, 0), (0, size), (-size, 0)], style)
        }),
    }
}

/// Draws one line-and-marker chart with a grid and a legend.
fn draw_single_panel_chart(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    plot_config: &PlotConfig,
) -> Result<(), RenderError> {
    let mut chart = ChartBuilder::on(area)
        .caption(&plot_config.title, FONT_TUPLE_CHART_TITLE)
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(plot_config.x_range.clone(), plot_config.y_range.clone())?;

    chart
        .configure_mesh()
        .x_desc(&plot_config.x_label)
        .y_desc(&plot_config.y_label)
        .x_labels(10)
        .y_labels(10)
        .light_line_style(WHITE.mix(0.7))
        .label_style(FONT_TUPLE_AXIS_LABEL)
        .draw()?;

    let mut legend_series_count = 0;
    for s in plot_config.series.iter().filter(|s| !s.data.is_empty()) {
        let line_style = s.color.stroke_width(s.stroke_width);
        let line = chart.draw_series(LineSeries::new(s.data.iter().cloned(), line_style))?;

        match s.marker {
            Some(shape) => draw_series_markers(&mut chart, s, shape)?,
            None if !s.label.is_empty() => {
                let legend_line = s.color.stroke_width(LINE_WIDTH_LEGEND);
                line.label(&s.label).legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 2 * LEGEND_SAMPLE_HALF_WIDTH, y)],
                        legend_line,
                    )
                });
            }
            None => {}
        }
        if !s.label.is_empty() {
            legend_series_count += 1;
        }
    }

    if legend_series_count > 0 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font(FONT_TUPLE_LEGEND)
            .draw()?;
    }
    Ok(())
}

/// Renders `panel_names.len()` panels side by side into one PNG.
///
/// `get_panel_plot_data` is called once per panel index; `None`, an empty series
/// list or a collapsed range draws a placeholder message for that panel instead.
/// Returns whether any real chart was drawn.
pub fn draw_side_by_side_plot<F>(
    output_path: &Path,
    root_name: &str,
    panel_names: &[&str],
    mut get_panel_plot_data: F,
) -> Result<bool, RenderError>
where
    F: FnMut(usize) -> Option<PlotConfig>,
{
    let root_area = BitMapBackend::new(output_path, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root_area.fill(&WHITE)?;
    root_area.draw(&Text::new(
        root_name,
        (10, 10),
        FONT_TUPLE_MAIN_TITLE.into_font().color(&BLACK),
    ))?;
    let margined_root_area = root_area.margin(50, 5, 5, 5);
    let sub_plot_areas = margined_root_area.split_evenly((1, panel_names.len().max(1)));
    let mut any_plot_drawn = false;

    for (panel_index, (area, panel_name)) in sub_plot_areas.iter().zip(panel_names).enumerate() {
        match get_panel_plot_data(panel_index) {
            Some(plot_config) => {
                let has_data = plot_config.series.iter().any(|s| !s.data.is_empty());
                let valid_ranges = plot_config.x_range.end > plot_config.x_range.start
                    && plot_config.y_range.end > plot_config.y_range.start;

                if has_data && valid_ranges {
                    draw_single_panel_chart(area, &plot_config)?;
                    any_plot_drawn = true;
                } else {
                    let reason = if !has_data {
                        "No data points"
                    } else {
                        "Invalid ranges"
                    };
                    log::warn!("{panel_name} panel: {reason}. Drawing placeholder.");
                    draw_unavailable_message(area, panel_name, reason)?;
                }
            }
            None => {
                log::warn!("{panel_name} panel: no binned data. Drawing placeholder.");
                draw_unavailable_message(area, panel_name, "No complete bins")?;
            }
        }
    }

    root_area.present()?;
    if any_plot_drawn {
        log::info!("Plot saved as '{}'.", output_path.display());
    } else {
        log::warn!(
            "Plot saved as '{}' with placeholder messages only: no data available for any panel.",
            output_path.display()
        );
    }
    Ok(any_plot_drawn)
}


// src/plot_framework.rs
