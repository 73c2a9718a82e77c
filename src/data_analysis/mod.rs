// src/data_analysis/mod.rs

pub mod binning;

// src/data_analysis/mod.rs
