#[macro_use]
extern crate log;

pub mod plot;
mod plot_gather;

pub use plot::plot;
pub use plot_gather::PlotGather;

pub type Series = Vec<(f64, f64)>;
