//! Labeling configuration: keyword list, training thresholds and model parameters

use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Substrings whose presence marks a name as Commercial
pub const DEFAULT_KEYWORDS: [&str; 17] = [
    "LLC",
    "INC",
    "LTD",
    "CORPORATION",
    "CORP",
    "CO.",
    "LLP",
    "GMBH",
    "PTY",
    "AND",
    "COMPANY",
    "ENTERPRISE",
    "CONSULTING",
    "INC.",
    "TECHNOLOGIES",
    "COMPA",
    "CO",
];

/// Minimum non-empty names before the classifier is trained
pub const MIN_TRAINING_SAMPLES: usize = 10;

/// Distinct rule labels required in the training batch
pub const MIN_TRAINING_CLASSES: usize = 2;

/// Fraction of the batch held out from fitting
pub const HOLDOUT_RATIO: f64 = 0.2;

/// Seed for the train/held-out shuffle
pub const SPLIT_SEED: u64 = 42;

pub const MAX_ITERATIONS: u64 = 100;

/// L2 penalty strength for logistic regression
pub const L2_ALPHA: f64 = 1.0;

/// Settings shared by the keyword rule and the classifier
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LabelerConfig {
    /// Case-insensitive Commercial clue substrings
    pub keywords: Vec<String>,
    pub min_samples: usize,
    pub min_classes: usize,
    /// Held-out fraction in `[0, 1)`
    pub test_ratio: f64,
    pub seed: u64,
    pub max_iterations: u64,
    pub alpha: f64,
}

impl Default for LabelerConfig {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            min_samples: MIN_TRAINING_SAMPLES,
            min_classes: MIN_TRAINING_CLASSES,
            test_ratio: HOLDOUT_RATIO,
            seed: SPLIT_SEED,
            max_iterations: MAX_ITERATIONS,
            alpha: L2_ALPHA,
        }
    }
}

impl LabelerConfig {
    /// Check value ranges that would otherwise fail deep inside training
    pub fn validate(&self) -> crate::Result<()> {
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            anyhow::bail!("Keywords must not be empty strings");
        }
        if !(0.0..1.0).contains(&self.test_ratio) {
            anyhow::bail!("test_ratio must be in [0, 1), got {}", self.test_ratio);
        }
        if self.min_samples == 0 {
            anyhow::bail!("min_samples must be at least 1");
        }
        if !(1..=2).contains(&self.min_classes) {
            anyhow::bail!("min_classes must be 1 or 2 for a binary classifier");
        }
        if self.alpha < 0.0 {
            anyhow::bail!("alpha must be non-negative, got {}", self.alpha);
        }
        Ok(())
    }
}

/// Load a JSON config file; omitted fields keep their defaults
pub fn load_config(path: &Path) -> crate::Result<LabelerConfig> {
    let content = fs::read_to_string(path)?;
    let config: LabelerConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}
