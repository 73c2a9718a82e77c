// src/lib.rs - Library interface for internal module access

pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod error;
pub mod font_config;
pub mod plot_framework;
pub mod plot_functions;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use data_analysis::binning::{bin_average, BinnedMeasurements};
pub use data_input::csv_loader::{
    load_experimental_trace, load_measurements, normalize_column_names, parse_experimental_trace,
    parse_measurements,
};
pub use data_input::data_source::{DataSource, LoadedData};
pub use data_input::measurement_data::{ExperimentalTrace, MeasurementTable};
pub use error::RenderError;
pub use plot_functions::plot_binned_measurements::plot_binned_measurements;
