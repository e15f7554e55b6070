//! Self-trained logistic regression over bag-of-words name features

use crate::config::LabelerConfig;
use crate::error::ClassifierError;
use crate::labeler::{clean_name, Label, NameLabeler};
use crate::vectorizer::BagOfWords;
use linfa::prelude::*;
use linfa_logistic::{FittedLogisticRegression, LogisticRegression};
use ndarray::{Array1, Axis};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, info, warn};

/// Why training was skipped; the run continues with the keyword rule alone
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    InsufficientSamples { found: usize, required: usize },
    SingleClass { label: Label },
}

impl fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnavailableReason::InsufficientSamples { found, required } => write!(
                f,
                "not enough data to enable model training ({found} names, need {required})"
            ),
            UnavailableReason::SingleClass { label } => write!(
                f,
                "not enough classes to train the model (every name is {label})"
            ),
        }
    }
}

/// Row indices of a seeded train/held-out shuffle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoldoutSplit {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

impl HoldoutSplit {
    /// Shuffle `0..n` and hold out `ceil(test_ratio * n)` rows
    pub fn new(n_samples: usize, test_ratio: f64, seed: u64) -> Self {
        let n_test = ((n_samples as f64) * test_ratio).ceil() as usize;
        let n_test = n_test.min(n_samples);

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let train = indices.split_off(n_test);
        Self {
            train,
            test: indices,
        }
    }
}

/// Fitted vectorizer and weights, immutable once trained
pub struct TrainedClassifier {
    vectorizer: BagOfWords,
    model: FittedLogisticRegression<f64, Label>,
    split: HoldoutSplit,
    holdout_accuracy: Option<f64>,
}

impl TrainedClassifier {
    /// Predict the label of a raw name
    pub fn predict(&self, name: &str) -> Label {
        let features = self.vectorizer.transform(&[name]);
        self.model.predict(&features)[0]
    }

    pub fn vectorizer(&self) -> &BagOfWords {
        &self.vectorizer
    }

    pub fn split(&self) -> &HoldoutSplit {
        &self.split
    }

    /// Agreement with the rule labels on the held-out rows
    pub fn holdout_accuracy(&self) -> Option<f64> {
        self.holdout_accuracy
    }
}

impl fmt::Debug for TrainedClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrainedClassifier")
            .field("vocabulary", &self.vectorizer.vocabulary_len())
            .field("train_rows", &self.split.train.len())
            .field("test_rows", &self.split.test.len())
            .field("holdout_accuracy", &self.holdout_accuracy)
            .finish()
    }
}

#[derive(Debug)]
pub enum TrainingOutcome {
    Available(TrainedClassifier),
    Unavailable(UnavailableReason),
}

impl TrainingOutcome {
    pub fn classifier(&self) -> Option<&TrainedClassifier> {
        match self {
            TrainingOutcome::Available(classifier) => Some(classifier),
            TrainingOutcome::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.classifier().is_some()
    }
}

/// Train the override classifier on the keyword rule's own labels
///
/// # Arguments
/// * `names` - One entry per row; missing or blank entries are dropped
/// * `labeler` - Keyword rule providing the training labels
/// * `config` - Thresholds, split and model parameters
///
/// # Returns
/// * `TrainingOutcome::Unavailable` when the batch is too small or single-class
pub fn train_classifier<S: AsRef<str>>(
    names: &[Option<S>],
    labeler: &NameLabeler,
    config: &LabelerConfig,
) -> Result<TrainingOutcome, ClassifierError> {
    let cleaned: Vec<&str> = names
        .iter()
        .filter_map(|name| clean_name(name.as_ref().map(|n| n.as_ref())))
        .collect();

    if cleaned.is_empty() || cleaned.len() < config.min_samples {
        let reason = UnavailableReason::InsufficientSamples {
            found: cleaned.len(),
            required: config.min_samples,
        };
        warn!(%reason, "classifier disabled");
        return Ok(TrainingOutcome::Unavailable(reason));
    }

    let labels: Vec<Label> = cleaned
        .iter()
        .map(|&name| labeler.label(Some(name)))
        .collect();
    let classes: BTreeSet<Label> = labels.iter().copied().collect();
    if classes.len() < config.min_classes || classes.len() < 2 {
        let label = classes.first().copied().unwrap_or_default();
        let reason = UnavailableReason::SingleClass { label };
        warn!(%reason, "classifier disabled");
        return Ok(TrainingOutcome::Unavailable(reason));
    }

    // Vocabulary comes from every cleaned name, held-out rows included
    let vectorizer = BagOfWords::fit(&cleaned)?;
    let features = vectorizer.transform(&cleaned);
    let split = HoldoutSplit::new(cleaned.len(), config.test_ratio, config.seed);

    let train_records = features.select(Axis(0), &split.train);
    let train_targets: Array1<Label> = split.train.iter().map(|&i| labels[i]).collect();
    let dataset = Dataset::new(train_records, train_targets);

    let model = LogisticRegression::<f64>::default()
        .alpha(config.alpha)
        .max_iterations(config.max_iterations)
        .fit(&dataset)
        .map_err(|e| ClassifierError::Model(e.to_string()))?;

    let holdout_accuracy = if split.test.is_empty() {
        None
    } else {
        let test_records = features.select(Axis(0), &split.test);
        let predicted = model.predict(&test_records);
        let correct = split
            .test
            .iter()
            .zip(predicted.iter())
            .filter(|&(&i, &p)| labels[i] == p)
            .count();
        Some(correct as f64 / split.test.len() as f64)
    };

    info!(
        samples = cleaned.len(),
        vocabulary = vectorizer.vocabulary_len(),
        train_rows = split.train.len(),
        test_rows = split.test.len(),
        holdout_accuracy = ?holdout_accuracy,
        "classifier trained"
    );

    Ok(TrainingOutcome::Available(TrainedClassifier {
        vectorizer,
        model,
        split,
        holdout_accuracy,
    }))
}

/// Combined decision for one name.
///
/// The classifier only re-examines names the rule marks Commercial, so it can
/// turn Commercial into Retail but never the reverse.
pub fn classify(name: Option<&str>, labeler: &NameLabeler, outcome: &TrainingOutcome) -> Label {
    let Some(name) = name.filter(|n| !n.trim().is_empty()) else {
        return Label::Commercial;
    };

    match (labeler.label(Some(name)), outcome.classifier()) {
        (Label::Retail, _) => Label::Retail,
        (Label::Commercial, Some(classifier)) => {
            let predicted = classifier.predict(name);
            if predicted == Label::Retail {
                debug!(name, "classifier overrode keyword rule");
            }
            predicted
        }
        (Label::Commercial, None) => Label::Commercial,
    }
}

/// Label every non-missing name in input order; missing rows produce no entry
pub fn classify_batch<S: AsRef<str>>(
    names: &[Option<S>],
    labeler: &NameLabeler,
    outcome: &TrainingOutcome,
) -> Vec<Label> {
    names
        .iter()
        .filter_map(|name| name.as_ref().map(|n| n.as_ref()))
        .filter(|name| !name.trim().is_empty())
        .map(|name| classify(Some(name), labeler, outcome))
        .collect()
}
