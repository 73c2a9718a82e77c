// src/data_input/mod.rs

pub mod csv_loader;
pub mod data_source;
pub mod measurement_data;

// src/data_input/mod.rs
