// Modules
mod error;
mod history;
mod plot;
mod summary;

pub use error::PlotError;
pub use history::AccuracyHistory;
pub use plot::{
    figure_path, plot_results, render_accuracy_chart, ACCURACY_RANGE, CHART_TITLE, GRAPHS_DIR,
    TRAINING_SERIES_LABEL, VALIDATION_SERIES_LABEL, X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use summary::{format_summary, peak_scores, series_max};

pub mod prelude {
    pub use crate::plot_results;
    pub use crate::AccuracyHistory;
    pub use crate::PlotError;
}
