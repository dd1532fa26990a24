//! Online n-gram frequency model.
//!
//! The model is keyed by the `N` simplified categories preceding a pitch and
//! counts which category followed that window. It is built while the sequence
//! is scanned: each position is predicted first and only then recorded, so a
//! prediction never sees the pitch it is predicting or anything after it.

use std::collections::HashMap;
use tracing::trace;

use super::PitchPredictor;
use crate::domain::PitchCategory;

/// Window size used by the service
pub const PITCH_GRAM_SIZE: usize = 3;

/// The `N` categories immediately preceding a position, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NGramKey<const N: usize>([PitchCategory; N]);

impl<const N: usize> NGramKey<N> {
    pub fn new(categories: [PitchCategory; N]) -> Self {
        Self(categories)
    }

    /// Key for `position`, or `None` while fewer than `N` pitches precede it.
    /// The window is contiguous by sequence index.
    pub fn at(sequence: &[PitchCategory], position: usize) -> Option<Self> {
        if position < N || position > sequence.len() {
            return None;
        }
        let start = position - N;
        Some(Self(std::array::from_fn(|i| sequence[start + i].clone())))
    }

    pub fn categories(&self) -> &[PitchCategory; N] {
        &self.0
    }
}

/// Successor counts for one key, kept in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuccessorCounts {
    counts: Vec<(PitchCategory, u32)>,
}

impl SuccessorCounts {
    pub fn record(&mut self, category: &PitchCategory) {
        match self.counts.iter_mut().find(|(seen, _)| seen == category) {
            Some((_, count)) => *count += 1,
            None => self.counts.push((category.clone(), 1)),
        }
    }

    /// Highest count wins; on a tie the earliest inserted category wins.
    pub fn most_frequent(&self) -> Option<&PitchCategory> {
        let mut best: Option<&(PitchCategory, u32)> = None;
        for entry in &self.counts {
            if best.map_or(true, |(_, top)| entry.1 > *top) {
                best = Some(entry);
            }
        }
        best.map(|(category, _)| category)
    }

    pub fn count(&self, category: &PitchCategory) -> u32 {
        self.counts
            .iter()
            .find(|(seen, _)| seen == category)
            .map_or(0, |(_, count)| *count)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, count)| count).sum()
    }
}

/// Mapping from n-gram key to the categories that followed it
#[derive(Debug, Clone, Default)]
pub struct FrequencyModel<const N: usize> {
    grams: HashMap<NGramKey<N>, SuccessorCounts>,
}

impl<const N: usize> FrequencyModel<N> {
    pub fn new() -> Self {
        Self {
            grams: HashMap::new(),
        }
    }

    pub fn predict(&self, key: &NGramKey<N>) -> Option<&PitchCategory> {
        self.grams.get(key).and_then(SuccessorCounts::most_frequent)
    }

    pub fn update(&mut self, key: NGramKey<N>, next: &PitchCategory) {
        self.grams.entry(key).or_default().record(next);
    }

    pub fn successors(&self, key: &NGramKey<N>) -> Option<&SuccessorCounts> {
        self.grams.get(key)
    }

    /// Number of distinct keys seen
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }
}

/// Predicts the most frequent historical successor of the last `N` pitches
#[derive(Debug, Clone)]
pub struct SequencePredictor<const N: usize> {
    model: FrequencyModel<N>,
    default: PitchCategory,
}

/// Predictor with the service's window size
pub type TrigramPredictor = SequencePredictor<PITCH_GRAM_SIZE>;

impl<const N: usize> SequencePredictor<N> {
    pub fn new(default: PitchCategory) -> Self {
        Self {
            model: FrequencyModel::new(),
            default,
        }
    }

    pub fn model(&self) -> &FrequencyModel<N> {
        &self.model
    }
}

impl<const N: usize> PitchPredictor for SequencePredictor<N> {
    fn name(&self) -> &str {
        "ngram"
    }

    fn predict_and_update(&mut self, sequence: &[PitchCategory], position: usize) -> PitchCategory {
        let Some(key) = NGramKey::<N>::at(sequence, position) else {
            return self.default.clone();
        };

        let prediction = self
            .model
            .predict(&key)
            .cloned()
            .unwrap_or_else(|| self.default.clone());

        if let Some(actual) = sequence.get(position) {
            trace!(position, %prediction, %actual, "ngram step");
            self.model.update(key, actual);
        }

        prediction
    }
}
