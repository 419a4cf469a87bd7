//! Accuracy chart rendering and the public plotting entry point.
//!
//! Charts are drawn with `plotters` into an SVG file, one fresh file per
//! figure label. The maxima and the summary text come from the pure helpers
//! in the summary module; this module adds the rendering side effects.

use crate::error::PlotError;
use crate::summary::{format_summary, peak_scores};
use plotters::prelude::*;
use std::fmt::Display;
use std::ops::Range;
use std::path::{Path, PathBuf};

pub const CHART_TITLE: &str = "Model accuracy";
pub const X_AXIS_LABEL: &str = "Epoch";
pub const Y_AXIS_LABEL: &str = "Accuracy";
pub const TRAINING_SERIES_LABEL: &str = "Training data";
pub const VALIDATION_SERIES_LABEL: &str = "Validation data";

/// Fixed vertical display range, applied regardless of the data range
pub const ACCURACY_RANGE: Range<f64> = 0.0..1.0;

/// Directory rendered figures are written to
pub const GRAPHS_DIR: &str = "graphs";

/// Rendered chart dimensions in pixels
const CHART_SIZE: (u32, u32) = (1024, 768);

/// Returns the path a figure with the given label is rendered to.
///
/// Each distinct label gets its own file under [`GRAPHS_DIR`], so successive
/// calls do not interfere; rendering the same label again overwrites it.
pub fn figure_path<L: Display>(figure: L) -> PathBuf {
    PathBuf::from(GRAPHS_DIR).join(format!("fig_{}.svg", figure))
}

/// Draws the training and validation accuracy series as an SVG line chart.
///
/// Both series are plotted against their 0-based epoch index on shared axes,
/// with the vertical axis fixed to [`ACCURACY_RANGE`]. The legend lists the
/// training series first.
///
/// # Arguments
/// * `training` - Training accuracy per epoch
/// * `validation` - Validation accuracy per epoch
/// * `path` - Path the SVG file is written to
///
/// # Returns
/// * `Ok(())` if the chart was rendered and flushed
/// * `Err(PlotError::Render)` if a drawing call or the final write fails
pub fn render_accuracy_chart(
    training: &[f64],
    validation: &[f64],
    path: &Path,
) -> Result<(), PlotError> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    // The epoch axis spans the longer series; lengths are not required to match.
    let epochs = training.len().max(validation.len());
    let epoch_range = 0.0..epochs as f64;

    let x_formatter = |x: &f64| -> String { format!("{}", (*x).round()) };

    let mut chart = ChartBuilder::on(&root)
        .caption(CHART_TITLE, ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(epoch_range, ACCURACY_RANGE)
        .map_err(|e| PlotError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .disable_mesh()
        .x_label_formatter(&x_formatter)
        .x_desc(X_AXIS_LABEL)
        .y_desc(Y_AXIS_LABEL)
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    let training_points: Vec<(f64, f64)> = training
        .iter()
        .enumerate()
        .map(|(i, &acc)| (i as f64, acc))
        .collect();

    let validation_points: Vec<(f64, f64)> = validation
        .iter()
        .enumerate()
        .map(|(i, &acc)| (i as f64, acc))
        .collect();

    chart
        .draw_series(LineSeries::new(training_points, &BLUE))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label(TRAINING_SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &BLUE));

    chart
        .draw_series(LineSeries::new(validation_points, &RED))
        .map_err(|e| PlotError::Render(e.to_string()))?
        .label(VALIDATION_SERIES_LABEL)
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &RED));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .margin(10)
        .draw()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Render(e.to_string()))?;

    Ok(())
}

/// Plots the accuracy history of a training run and returns the peak scores.
///
/// Renders a line chart of both series to `graphs/fig_{figure}.svg`, creating
/// the directory if needed, prints a one-line summary of the highest scores,
/// and returns `(max(training), max(validation))`.
///
/// # Arguments
/// * `training` - Training accuracy per epoch, non-empty
/// * `validation` - Validation accuracy per epoch, non-empty
/// * `figure` - Label identifying this figure in the summary and file name
///
/// # Returns
/// * `Ok((f64, f64))` - The highest training and validation accuracy
/// * `Err(PlotError::EmptySeries)` if either series is empty; nothing is
///   rendered or printed in that case
///
/// # Example
/// ```no_run
/// use accuracy_plot::plot_results;
///
/// let training = vec![0.62, 0.74, 0.81, 0.88];
/// let validation = vec![0.60, 0.71, 0.78, 0.83];
///
/// let (train_max, val_max) = plot_results(&training, &validation, 1).unwrap();
/// assert_eq!((train_max, val_max), (0.88, 0.83));
/// ```
pub fn plot_results<L: Display>(
    training: &[f64],
    validation: &[f64],
    figure: L,
) -> Result<(f64, f64), PlotError> {
    // An empty series must abort before any output exists.
    let (train_max, val_max) = peak_scores(training, validation)?;

    let path = figure_path(&figure);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    render_accuracy_chart(training, validation, &path)?;

    println!("\n {}", format_summary(&figure, train_max, val_max));

    Ok((train_max, val_max))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_figure_path_convention() {
        assert_eq!(figure_path(3), PathBuf::from("graphs").join("fig_3.svg"));
        assert_eq!(
            figure_path("baseline"),
            PathBuf::from("graphs").join("fig_baseline.svg")
        );
    }

    #[test]
    fn test_render_accuracy_chart_writes_svg() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("accuracy.svg");

        render_accuracy_chart(&[0.1, 0.5, 0.9, 0.8], &[0.1, 0.4, 0.85, 0.82], &path)?;

        let svg = std::fs::read_to_string(&path)?;
        assert!(svg.contains("<svg"));
        assert!(svg.contains(CHART_TITLE));

        Ok(())
    }

    #[test]
    fn test_render_accuracy_chart_single_epoch() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("single.svg");

        render_accuracy_chart(&[0.42], &[0.37], &path)?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_render_accuracy_chart_unequal_lengths() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempdir()?;
        let path = dir.path().join("unequal.svg");

        render_accuracy_chart(&[0.2, 0.4, 0.6, 0.8, 0.9], &[0.25, 0.45], &path)?;

        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn test_plot_results_empty_series_renders_nothing() {
        let result = plot_results(&[], &[0.5], "empty_series_check");
        match result {
            Err(PlotError::EmptySeries { series }) => assert_eq!(series, "training"),
            _ => panic!("Expected EmptySeries error"),
        }
        assert!(!figure_path("empty_series_check").exists());
    }
}
