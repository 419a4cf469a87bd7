//! Pure accuracy computations: series maxima and the printed summary line.
//!
//! Nothing in this module touches a rendering backend, so the result pair
//! and the summary text can be tested on their own.

use crate::error::PlotError;
use std::fmt::Display;

/// Returns the maximum value of an accuracy series.
///
/// NaN elements and values outside [0, 1] are not validated; the fold skips
/// NaN unless the whole series is NaN.
///
/// # Arguments
/// * `values` - Per-epoch accuracy values
/// * `series` - Name identifying the series in error messages
///
/// # Returns
/// * `Ok(f64)` containing the largest element
/// * `Err(PlotError::EmptySeries)` if the series has no elements
pub fn series_max(values: &[f64], series: &'static str) -> Result<f64, PlotError> {
    if values.is_empty() {
        return Err(PlotError::EmptySeries { series });
    }
    Ok(values.iter().copied().fold(f64::NAN, f64::max))
}

/// Computes the highest training and validation accuracy observed.
///
/// # Example
/// ```
/// use accuracy_plot::peak_scores;
///
/// let (train, val) = peak_scores(&[0.1, 0.5, 0.9, 0.8], &[0.1, 0.4, 0.85, 0.82]).unwrap();
/// assert_eq!((train, val), (0.9, 0.85));
/// ```
pub fn peak_scores(training: &[f64], validation: &[f64]) -> Result<(f64, f64), PlotError> {
    let train_max = series_max(training, "training")?;
    let val_max = series_max(validation, "validation")?;
    Ok((train_max, val_max))
}

/// Formats the human-readable summary line for a figure.
///
/// The validation score comes before the training score and both are fixed
/// to three decimal places; callers match on the literal line, so the
/// ordering and format must stay stable.
///
/// # Example
/// ```
/// use accuracy_plot::format_summary;
///
/// let line = format_summary(1, 0.9, 0.85);
/// assert_eq!(
///     line,
///     "Fig 1. The highest validation score:0.850 | The highest training score 0.900"
/// );
/// ```
pub fn format_summary<L: Display>(figure: L, train_max: f64, val_max: f64) -> String {
    format!(
        "Fig {}. The highest validation score:{:.3} | The highest training score {:.3}",
        figure, val_max, train_max
    )
}
