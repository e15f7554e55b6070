//! CSV name column loading and label write-back using Polars

use crate::labeler::Label;
use polars::prelude::*;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default header of the written label column
pub const DEFAULT_LABEL_HEADER: &str = "Category";

/// A loaded CSV table and the name column selected from it
#[derive(Debug)]
pub struct NameSheet {
    /// Full table, every column read as text
    pub frame: DataFrame,
    /// Header of the name column
    pub column: String,
    /// One entry per row; empty cells are `None`
    pub names: Vec<Option<String>>,
}

impl NameSheet {
    pub fn row_count(&self) -> usize {
        self.frame.height()
    }

    /// Add the label column and write the table as CSV.
    ///
    /// Labels are packed from the first row down; rows past the last label
    /// are left empty.
    pub fn write_labels(
        &mut self,
        header: &str,
        labels: &[Label],
        path: &Path,
    ) -> crate::Result<()> {
        let height = self.frame.height();
        if labels.len() > height {
            anyhow::bail!(
                "Cannot write {} labels into a table with {} rows",
                labels.len(),
                height
            );
        }

        let mut values: Vec<Option<&str>> = labels.iter().map(|l| Some(l.as_str())).collect();
        values.resize(height, None);

        let column = Series::new(header.into(), values);
        self.frame.with_column(column)?;

        let mut file = File::create(path)?;
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(&mut self.frame)?;

        info!(path = %path.display(), labels = labels.len(), "wrote label column");
        Ok(())
    }
}

/// Load a CSV file and pick out the name column
///
/// # Arguments
/// * `file_path` - Path to a CSV file with a header row
/// * `column` - Header of the name column (default: first column)
pub fn load_names(file_path: &str, column: Option<&str>) -> crate::Result<NameSheet> {
    let path = PathBuf::from(file_path);
    if !path.exists() {
        anyhow::bail!("Input file not found: {}", file_path);
    }

    // Schema inference off so every column stays text
    let frame = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path))?
        .finish()?;

    let column = match column {
        Some(name) => name.to_string(),
        None => frame
            .get_column_names()
            .first()
            .map(|name| name.to_string())
            .ok_or_else(|| anyhow::anyhow!("Input file has no columns: {}", file_path))?,
    };

    let names: Vec<Option<String>> = frame
        .column(&column)
        .map_err(|_| anyhow::anyhow!("Column '{}' not found in {}", column, file_path))?
        .as_materialized_series()
        .str()?
        .into_iter()
        .map(|cell| cell.map(str::to_string))
        .collect();

    debug!(rows = names.len(), column = %column, "loaded name column");

    Ok(NameSheet {
        frame,
        column,
        names,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_csv() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Customer,Region").unwrap();
        writeln!(file, "Acme LLC,North").unwrap();
        writeln!(file, ",South").unwrap();
        writeln!(file, "Jane Doe,East").unwrap();
        file
    }

    #[test]
    fn test_load_first_column_by_default() {
        let test_file = create_test_csv();
        let file_path = test_file.path().to_str().unwrap();

        let sheet = load_names(file_path, None).unwrap();
        assert_eq!(sheet.column, "Customer");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(
            sheet.names,
            vec![Some("Acme LLC".to_string()), None, Some("Jane Doe".to_string())]
        );
    }

    #[test]
    fn test_missing_column_and_file() {
        let test_file = create_test_csv();
        let file_path = test_file.path().to_str().unwrap();

        assert!(load_names(file_path, Some("Name")).is_err());
        assert!(load_names("does/not/exist.csv", None).is_err());
    }

    #[test]
    fn test_write_labels_packs_from_top() {
        let test_file = create_test_csv();
        let file_path = test_file.path().to_str().unwrap();
        let out = NamedTempFile::new().unwrap();

        let mut sheet = load_names(file_path, None).unwrap();
        sheet
            .write_labels(
                DEFAULT_LABEL_HEADER,
                &[Label::Commercial, Label::Retail],
                out.path(),
            )
            .unwrap();

        let written = load_names(out.path().to_str().unwrap(), Some("Category")).unwrap();
        assert_eq!(
            written.names,
            vec![Some("Commercial".to_string()), Some("Retail".to_string()), None]
        );

        let too_many = vec![Label::Retail; 4];
        assert!(sheet.write_labels("Category", &too_many, out.path()).is_err());
    }
}
