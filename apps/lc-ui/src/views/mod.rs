pub mod params_view;
pub mod plot_view;
pub mod results_view;

pub use params_view::ParamsView;
pub use plot_view::PlotView;
pub use results_view::ResultsView;
