pub mod accuracy;
pub mod baseline;
pub mod ngram;

pub use accuracy::{correctness, overall_accuracy, rolling_accuracy, round4, AccuracySummary};
pub use baseline::NaiveBaseline;
pub use ngram::{
    FrequencyModel, NGramKey, SequencePredictor, SuccessorCounts, TrigramPredictor,
    PITCH_GRAM_SIZE,
};

use crate::domain::PitchCategory;

/// A pitch-type predictor driven one position at a time
pub trait PitchPredictor {
    fn name(&self) -> &str;

    /// Predict `sequence[position]` from earlier positions, then learn from it
    fn predict_and_update(&mut self, sequence: &[PitchCategory], position: usize) -> PitchCategory;

    /// Run every position in order
    fn predict_sequence(&mut self, sequence: &[PitchCategory]) -> Vec<PitchCategory> {
        (0..sequence.len())
            .map(|position| self.predict_and_update(sequence, position))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fastball_curve_scenario() {
        let actual: Vec<PitchCategory> = [
            "fast", "fast", "fast", "curve", "fast", "fast", "fast", "curve",
        ]
        .iter()
        .map(|n| PitchCategory::from(*n))
        .collect();

        let mut model_predictor = TrigramPredictor::new(PitchCategory::Fast);
        let mut naive_predictor = NaiveBaseline::new(PitchCategory::Fast);
        assert_eq!(model_predictor.name(), "ngram");
        assert_eq!(naive_predictor.name(), "naive");

        let model = model_predictor.predict_sequence(&actual);
        let naive = naive_predictor.predict_sequence(&actual);

        let mut expected = vec![PitchCategory::Fast; 7];
        expected.push(PitchCategory::Curve);
        assert_eq!(model, expected);

        let summary = AccuracySummary::evaluate(&actual, &model, &naive).unwrap();
        // only position 3 is missed: positions 0-2 and 4-6 match the default
        assert_eq!(summary.model_accuracy, 0.875);
        assert_eq!(summary.naive_accuracy, 0.75);
        assert_eq!(summary.model_rolling_accuracy[3], 0.75);
        assert_eq!(summary.model_rolling_accuracy[7], 0.875);
        assert_eq!(summary.naive_rolling_accuracy[3], 0.75);
        assert_eq!(summary.naive_rolling_accuracy[7], 0.75);
    }
}
