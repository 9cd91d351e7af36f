use crate::models::common::WeightMatrix;
use crate::routing::{IndexError, WeightMatrixAlgorithm};
use std::collections::HashMap;
use std::sync::Arc;

/// A scripted weight matrix collaborator.
pub struct FakeWeightMatrix {
    weights: Arc<WeightMatrix>,
    errors: HashMap<usize, IndexError>,
    failure: Option<String>,
    has_run: bool,
}

impl FakeWeightMatrix {
    pub fn new(weights: Arc<WeightMatrix>) -> Self {
        Self { weights, errors: HashMap::new(), failure: None, has_run: false }
    }

    pub fn with_index_error(mut self, index: usize, error: IndexError) -> Self {
        self.errors.insert(index, error);
        self
    }

    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }
}

impl WeightMatrixAlgorithm for FakeWeightMatrix {
    fn has_run(&self) -> bool {
        self.has_run
    }

    fn has_succeeded(&self) -> bool {
        self.has_run && self.failure.is_none()
    }

    fn error_message(&self) -> Option<String> {
        self.failure.clone()
    }

    fn run(&mut self) {
        self.has_run = true;
    }

    fn try_get_error(&self, index: usize) -> Option<IndexError> {
        self.errors.get(&index).cloned()
    }

    fn weights(&self) -> Arc<WeightMatrix> {
        self.weights.clone()
    }

    fn weight_index(&self, original: usize) -> Option<usize> {
        (original < self.weights.len() / 2).then_some(original)
    }
}
