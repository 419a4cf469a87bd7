//! Accuracy history input format.
//!
//! A training run records its per-epoch accuracies as a JSON document with
//! `training` and `validation` arrays; this module loads that document for
//! plotting.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-epoch accuracy series recorded by a training run.
///
/// The two series should be the same length for a meaningful chart, but no
/// length relationship is enforced here; empty series are rejected by the
/// plotting call, not at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyHistory {
    /// Training accuracy for each epoch
    pub training: Vec<f64>,
    /// Validation accuracy for each epoch
    pub validation: Vec<f64>,
}

impl AccuracyHistory {
    /// Loads an accuracy history from a JSON file.
    ///
    /// # Arguments
    /// * `path` - Path to the JSON history file
    ///
    /// # Returns
    /// Returns a `Result` containing either the loaded `AccuracyHistory` or
    /// an error if the file cannot be read or parsed.
    ///
    /// # Example
    /// ```no_run
    /// use accuracy_plot::AccuracyHistory;
    /// use std::path::Path;
    ///
    /// let history = AccuracyHistory::load(Path::new("history.json")).unwrap();
    /// assert_eq!(history.training.len(), history.validation.len());
    /// ```
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let history_str = fs::read_to_string(path)?;
        let history: AccuracyHistory = serde_json::from_str(&history_str)?;
        Ok(history)
    }
}
