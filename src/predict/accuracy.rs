use serde::Serialize;

use crate::domain::PitchCategory;
use crate::error::{PitchError, Result};

/// Round to 4 decimal places
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Per-position equality of predicted and actual categories
pub fn correctness(predictions: &[PitchCategory], actuals: &[PitchCategory]) -> Result<Vec<bool>> {
    if predictions.len() != actuals.len() {
        return Err(PitchError::Internal(format!(
            "prediction count {} does not match pitch count {}",
            predictions.len(),
            actuals.len()
        )));
    }
    Ok(predictions
        .iter()
        .zip(actuals)
        .map(|(predicted, actual)| predicted == actual)
        .collect())
}

/// Fraction of correct predictions, rounded to 4 decimals. Errors on an empty sequence.
pub fn overall_accuracy(predictions: &[PitchCategory], actuals: &[PitchCategory]) -> Result<f64> {
    let correct = correctness(predictions, actuals)?;
    if correct.is_empty() {
        return Err(PitchError::EmptySequence);
    }
    let hits = correct.iter().filter(|c| **c).count();
    Ok(round4(hits as f64 / correct.len() as f64))
}

/// Running fraction correct: element i covers positions 0..=i
pub fn rolling_accuracy(correct: &[bool]) -> Vec<f64> {
    let mut hits = 0usize;
    correct
        .iter()
        .enumerate()
        .map(|(i, is_correct)| {
            if *is_correct {
                hits += 1;
            }
            hits as f64 / (i + 1) as f64
        })
        .collect()
}

/// Overall and rolling accuracy for the model and the baseline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccuracySummary {
    pub model_accuracy: f64,
    pub naive_accuracy: f64,
    pub model_rolling_accuracy: Vec<f64>,
    pub naive_rolling_accuracy: Vec<f64>,
}

impl AccuracySummary {
    pub fn evaluate(
        actuals: &[PitchCategory],
        model_predictions: &[PitchCategory],
        naive_predictions: &[PitchCategory],
    ) -> Result<Self> {
        let model_correct = correctness(model_predictions, actuals)?;
        let naive_correct = correctness(naive_predictions, actuals)?;

        Ok(Self {
            model_accuracy: overall_accuracy(model_predictions, actuals)?,
            naive_accuracy: overall_accuracy(naive_predictions, actuals)?,
            model_rolling_accuracy: rolling_accuracy(&model_correct),
            naive_rolling_accuracy: rolling_accuracy(&naive_correct),
        })
    }
}
