// src/plot_functions/mod.rs

pub mod plot_binned_concentration;
pub mod plot_binned_measurements;
pub mod plot_binned_voltage;

// src/plot_functions/mod.rs
