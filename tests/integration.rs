//! Integration tests for Name Categorizer

use name_categorizer::{
    classify_batch, load_names, train_classifier, Label, LabelerConfig, NameLabeler,
    TrainingOutcome, UnavailableReason,
};
use std::io::Write;
use tempfile::NamedTempFile;

const MIXED_NAMES: [&str; 11] = [
    "Acme LLC",
    "John Smith",
    "Beta Corp",
    "Jane Doe",
    "Retail Shop Co",
    "Mary Jones",
    "Oak Tree Inc",
    "Tom Lee",
    "Sun Valley Ltd",
    "Ann White",
    "Big Tree Farms",
];

/// Create a test CSV file with an id column and a name column
fn create_test_csv(names: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Customer Name,Account").unwrap();
    for (i, name) in names.iter().enumerate() {
        writeln!(file, "{},{}", name, 1000 + i).unwrap();
    }
    file
}

#[test]
fn test_mixed_batch_end_to_end() {
    let test_file = create_test_csv(&MIXED_NAMES);
    let file_path = test_file.path().to_str().unwrap();

    let mut sheet = load_names(file_path, Some("Customer Name")).unwrap();
    assert_eq!(sheet.names.len(), 11);

    let labeler = NameLabeler::default();
    let outcome = train_classifier(&sheet.names, &labeler, &LabelerConfig::default()).unwrap();
    assert!(outcome.is_available());

    let labels = classify_batch(&sheet.names, &labeler, &outcome);
    assert_eq!(labels.len(), 11);
    for (name, label) in MIXED_NAMES.iter().zip(&labels) {
        if ["John Smith", "Jane Doe", "Mary Jones", "Tom Lee", "Ann White"].contains(name) {
            assert_eq!(*label, Label::Retail, "{name}");
        }
    }

    // Classifying again with the same state gives the same labels
    assert_eq!(labels, classify_batch(&sheet.names, &labeler, &outcome));

    let out = NamedTempFile::new().unwrap();
    sheet.write_labels("Category", &labels, out.path()).unwrap();
    let written = load_names(out.path().to_str().unwrap(), Some("Category")).unwrap();
    let expected: Vec<Option<String>> = labels.iter().map(|l| Some(l.to_string())).collect();
    assert_eq!(written.names, expected);
}

#[test]
fn test_small_batch_uses_keyword_rule() {
    let labeler = NameLabeler::default();
    let names = [Some("Acme LLC"), Some("Beta Corp")];

    let outcome = train_classifier(&names, &labeler, &LabelerConfig::default()).unwrap();
    assert!(matches!(
        outcome,
        TrainingOutcome::Unavailable(UnavailableReason::InsufficientSamples { .. })
    ));
    assert_eq!(
        classify_batch(&names, &labeler, &outcome),
        vec![Label::Commercial, Label::Commercial]
    );
}

#[test]
fn test_missing_rows_produce_no_labels() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "Customer Name,Account").unwrap();
    writeln!(file, ",1").unwrap();
    writeln!(file, ",2").unwrap();
    writeln!(file, "Retail Shop,3").unwrap();
    writeln!(file, ",4").unwrap();

    let mut sheet = load_names(file.path().to_str().unwrap(), None).unwrap();
    let labeler = NameLabeler::default();
    let outcome = train_classifier(&sheet.names, &labeler, &LabelerConfig::default()).unwrap();
    let labels = classify_batch(&sheet.names, &labeler, &outcome);
    assert_eq!(labels, vec![Label::Retail]);

    // Packed into the first row, the rest left empty
    let out = NamedTempFile::new().unwrap();
    sheet.write_labels("Category", &labels, out.path()).unwrap();
    let written = load_names(out.path().to_str().unwrap(), Some("Category")).unwrap();
    assert_eq!(written.names, vec![Some("Retail".to_string()), None, None, None]);
}

#[test]
fn test_custom_keywords_change_training_classes() {
    let names: Vec<Option<&str>> = MIXED_NAMES.iter().copied().map(Some).collect();
    let config = LabelerConfig {
        keywords: vec!["ZZZ".to_string()],
        ..LabelerConfig::default()
    };
    let labeler = NameLabeler::from_config(&config);

    let outcome = train_classifier(&names, &labeler, &config).unwrap();
    assert!(matches!(
        outcome,
        TrainingOutcome::Unavailable(UnavailableReason::SingleClass { label: Label::Retail })
    ));
    assert!(classify_batch(&names, &labeler, &outcome)
        .iter()
        .all(|&l| l == Label::Retail));
}
