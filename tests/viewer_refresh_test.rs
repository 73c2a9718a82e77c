// tests/viewer_refresh_test.rs
#![cfg(feature = "viewer")]

use std::fs;
use std::path::{Path, PathBuf};

use binned_trace_render::viewer::BinnedViewer;
use binned_trace_render::DataSource;

fn write_rows(path: &Path, rows: usize) {
    let mut contents = String::from("Time,Real Voltage,Simulated Voltage,c1c,c0c,c1a,c2a\n");
    for i in 0..rows {
        contents.push_str(&format!("{i},4.0,4.1,1000,900,10,1\n"));
    }
    fs::write(path, contents).expect("failed to write csv");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_rebins_changed_file() {
        let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("viewer_refresh");
        fs::create_dir_all(&dir).expect("failed to create test directory");
        let input = dir.join("output.csv");
        let overlay = dir.join("data.csv");
        write_rows(&input, 10);
        fs::write(&overlay, "Time (s),Voltage\n0,4.0\n").expect("failed to write overlay");

        let source = DataSource {
            measurements: input.clone(),
            experimental: Some(overlay.clone()),
            bin_size: 5,
        };
        let data = source.load().expect("initial load failed");
        let mut viewer = BinnedViewer::new(source, data);
        assert_eq!(viewer.data().binned.num_bins(), 2);

        write_rows(&input, 17);
        fs::write(&overlay, "Time (s),Voltage\n0,4.0\n30,3.9\n").expect("failed to write overlay");
        viewer.refresh().expect("refresh failed");

        assert_eq!(viewer.data().binned.num_bins(), 3);
        assert_eq!(viewer.data().binned.dropped_rows, 2);
        let trace = viewer.data().experimental.as_ref().expect("overlay dropped");
        assert_eq!(trace.len(), 2);
        assert_eq!(
            viewer.status(),
            "3 bins of 5 rows, 2 trailing row(s) dropped, 2 experimental samples"
        );
    }
}

// tests/viewer_refresh_test.rs
