//! Name Categorizer: label customer names as Commercial or Retail
//!
//! A fixed keyword rule decides first. Names the rule marks Commercial can be
//! re-examined by a bag-of-words logistic regression that is trained on the
//! rule's own labels for the batch being processed.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod labeler;
pub mod model;
pub mod vectorizer;

// Re-export public items for easier access
pub use cli::Args;
pub use config::{load_config, LabelerConfig};
pub use data::{load_names, NameSheet};
pub use error::ClassifierError;
pub use labeler::{Label, NameLabeler};
pub use model::{
    classify, classify_batch, train_classifier, TrainedClassifier, TrainingOutcome,
    UnavailableReason,
};
pub use vectorizer::BagOfWords;

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
