use crate::error::ModelLoadError;
use crate::pipeline::types::{FeatureVector, FEATURE_LEN};
use serde::Deserialize;
use std::path::Path;

/// Pretrained multiclass linear scorer: one weight row and bias per class,
/// class id is the argmax score. Read-only after load.
#[derive(Debug, Deserialize)]
pub struct LinearScorer {
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

impl LinearScorer {
    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.weights.is_empty() {
            return Err(ModelLoadError::Shape("no classes in artifact".into()));
        }
        if self.bias.len() != self.weights.len() {
            return Err(ModelLoadError::Shape(format!(
                "bias length {} does not match {} classes",
                self.bias.len(),
                self.weights.len()
            )));
        }
        for (id, row) in self.weights.iter().enumerate() {
            if row.len() != FEATURE_LEN {
                return Err(ModelLoadError::Shape(format!(
                    "class {id} weight row has length {}, expected {FEATURE_LEN}",
                    row.len()
                )));
            }
        }
        Ok(())
    }

    pub fn class_count(&self) -> usize {
        self.weights.len()
    }

    /// Deterministic argmax; on ties the lowest class id wins.
    pub fn classify(&self, features: &FeatureVector) -> usize {
        let mut best = 0usize;
        let mut best_score = f32::NEG_INFINITY;
        for (id, (row, bias)) in self.weights.iter().zip(&self.bias).enumerate() {
            let score = row
                .iter()
                .zip(features.as_slice())
                .map(|(w, x)| w * x)
                .sum::<f32>()
                + bias;
            if score > best_score {
                best_score = score;
                best = id;
            }
        }
        best
    }
}

// The artifact on disk is either the bare scorer or a (scorer, labels)
// pair; both shapes normalize into ModelState::Loaded at startup.
#[derive(Deserialize)]
#[serde(untagged)]
enum Artifact {
    Pair {
        model: LinearScorer,
        labels: Vec<String>,
    },
    Bare(LinearScorer),
}

enum ModelState {
    Loaded {
        scorer: LinearScorer,
        labels: Option<Vec<String>>,
    },
    Unavailable {
        reason: String,
    },
}

/// Process-wide gesture classifier.
///
/// Loaded exactly once at startup and immutable afterward, so concurrent
/// `classify` calls need no synchronization. A failed load is permanent for
/// the process lifetime; requests fail fast instead of retrying the disk.
pub struct GestureModel {
    state: ModelState,
}

impl GestureModel {
    pub fn load(path: &Path) -> Self {
        match Self::read_artifact(path) {
            Ok((scorer, labels)) => {
                tracing::info!(
                    path = %path.display(),
                    classes = scorer.class_count(),
                    labeled = labels.is_some(),
                    "Gesture model loaded"
                );
                Self {
                    state: ModelState::Loaded { scorer, labels },
                }
            }
            Err(e) => {
                tracing::error!(path = %path.display(), "Failed to load gesture model: {e}");
                Self {
                    state: ModelState::Unavailable {
                        reason: e.to_string(),
                    },
                }
            }
        }
    }

    fn read_artifact(path: &Path) -> Result<(LinearScorer, Option<Vec<String>>), ModelLoadError> {
        let raw = std::fs::read(path).map_err(|source| ModelLoadError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let artifact: Artifact = serde_json::from_slice(&raw)?;
        let (scorer, labels) = match artifact {
            Artifact::Pair { model, labels } => (model, Some(labels)),
            Artifact::Bare(model) => (model, None),
        };
        scorer.validate()?;
        Ok((scorer, labels))
    }

    pub fn is_available(&self) -> bool {
        matches!(self.state, ModelState::Loaded { .. })
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.state {
            ModelState::Unavailable { reason } => Some(reason),
            ModelState::Loaded { .. } => None,
        }
    }

    /// Raw class id for a feature vector; `None` when unavailable.
    pub fn classify_id(&self, features: &FeatureVector) -> Option<usize> {
        match &self.state {
            ModelState::Loaded { scorer, .. } => Some(scorer.classify(features)),
            ModelState::Unavailable { .. } => None,
        }
    }

    /// Classifies and resolves the id through the label table. Ids outside
    /// the table's range, or any id when no table shipped with the artifact,
    /// fall back to the decimal form of the id.
    pub fn classify(&self, features: &FeatureVector) -> Option<String> {
        let id = self.classify_id(features)?;
        let label = match &self.state {
            ModelState::Loaded {
                labels: Some(labels),
                ..
            } if id < labels.len() => labels[id].clone(),
            _ => id.to_string(),
        };
        Some(label)
    }
}
