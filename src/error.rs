//! Error types for accuracy plotting.

use thiserror::Error;

/// Errors that can occur while plotting accuracy results
#[derive(Debug, Error)]
pub enum PlotError {
    /// Error for an accuracy series with no elements, whose maximum is undefined
    #[error("The {series} accuracy series is empty: maximum is undefined")]
    EmptySeries { series: &'static str },
    /// Wrapper for failures raised by the charting backend
    #[error("Failed to render accuracy chart: {0}")]
    Render(String),
    /// Wrapper for standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plot_error_display() {
        let err = PlotError::EmptySeries {
            series: "validation",
        };
        assert!(format!("{}", err).contains("validation"));
        assert!(format!("{}", err).contains("empty"));

        let err = PlotError::Render("backend unavailable".to_string());
        assert!(format!("{}", err).contains("backend unavailable"));
    }
}
