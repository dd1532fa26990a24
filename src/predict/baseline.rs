use super::PitchPredictor;
use crate::domain::PitchCategory;

/// Always predicts the same category. Lower bound for the n-gram model.
#[derive(Debug, Clone)]
pub struct NaiveBaseline {
    default: PitchCategory,
}

impl NaiveBaseline {
    pub fn new(default: PitchCategory) -> Self {
        Self { default }
    }

    pub fn predict(&self, _position: usize) -> PitchCategory {
        self.default.clone()
    }
}

impl PitchPredictor for NaiveBaseline {
    fn name(&self) -> &str {
        "naive"
    }

    fn predict_and_update(&mut self, _sequence: &[PitchCategory], position: usize) -> PitchCategory {
        self.predict(position)
    }
}
