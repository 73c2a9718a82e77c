// src/main.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use binned_trace_render::constants::{
    DEFAULT_BIN_SIZE, DEFAULT_EXPERIMENTAL_FILE, DEFAULT_INPUT_FILE, OUTPUT_FILE_SUFFIX,
};
use binned_trace_render::{plot_binned_measurements, DataSource, LoadedData};

/// Bin voltage and concentration traces from a CSV file and plot them side by side.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Input CSV with Time, Real Voltage, Simulated Voltage, c1c, c0c, c1a and c2a columns.
    #[arg(default_value = DEFAULT_INPUT_FILE)]
    input: PathBuf,

    /// Number of consecutive rows averaged into one bin.
    #[arg(long, default_value_t = DEFAULT_BIN_SIZE as u64, value_parser = clap::value_parser!(u64).range(1..))]
    bin_size: u64,

    /// Output PNG path [default: <input stem>_binned.png]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Experimental time/voltage CSV drawn unbinned over the voltage panel.
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_EXPERIMENTAL_FILE)]
    overlay: Option<PathBuf>,

    /// Open an interactive window instead of writing the PNG.
    #[arg(long)]
    show: bool,
}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = Cli::parse();
    log::debug!("{args:#?}");

    let bin_size = usize::try_from(args.bin_size).context("bin size does not fit in memory")?;
    let root_name = root_name(&args.input);
    let source = DataSource {
        measurements: args.input.clone(),
        experimental: args.overlay.clone(),
        bin_size,
    };

    let data = source.load().with_context(|| match &args.overlay {
        Some(overlay) => format!("failed to load {:?} with overlay {:?}", args.input, overlay),
        None => format!("failed to load {:?}", args.input),
    })?;

    if args.show {
        return show_window(source, data, &root_name);
    }

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{root_name}{OUTPUT_FILE_SUFFIX}")));
    plot_binned_measurements(
        &data.binned,
        data.experimental.as_ref(),
        &root_name,
        &output_path,
    )
    .with_context(|| format!("failed to render {:?}", output_path))?;

    Ok(())
}

#[cfg(feature = "viewer")]
fn show_window(source: DataSource, data: LoadedData, root_name: &str) -> Result<()> {
    binned_trace_render::viewer::run_viewer(source, data, root_name).context("viewer window failed")
}

#[cfg(not(feature = "viewer"))]
fn show_window(_source: DataSource, _data: LoadedData, _root_name: &str) -> Result<()> {
    anyhow::bail!("--show needs a build with the `viewer` feature")
}

fn root_name(input: &Path) -> String {
    input
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy()
        .into_owned()
}
