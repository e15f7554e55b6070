//! Error types for the classifier core

use thiserror::Error;

/// Hard failures while fitting or using the classifier.
///
/// Too little data or a single rule class is not an error; see
/// [`crate::model::UnavailableReason`].
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// Every name reduced to stop words or one-character tokens
    #[error("empty vocabulary: names contain no usable terms after stop-word removal")]
    EmptyVocabulary,

    #[error("invalid token pattern: {0}")]
    TokenPattern(#[from] regex::Error),

    /// Logistic regression could not be fitted
    #[error("model fitting failed: {0}")]
    Model(String),
}
