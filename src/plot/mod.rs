//! Chart rendering over the aggregated result table.

pub mod performance;
pub mod scaling;

pub use performance::plot_performance;
pub use scaling::plot_scaling;
