//! Sparse labeled text format
//!
//! A libsvm-style line format where the label token is an arbitrary class
//! string instead of a number:
//!
//! spam 1:0.5 3:1.2 7:0.8
//! ham 2:0.3 5:2.1
//!
//! Feature indices are 1-based in the file and converted to 0-based in
//! memory. Lines starting with `#` and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{ExampleSet, LabeledExample, Result, SvmBridgeError};

/// Example set backed by a sparse labeled text file
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    examples: Vec<LabeledExample>,
    dimensions: usize,
}

impl LabeledDataset {
    /// Load a dataset from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmBridgeError::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a dataset from a reader (for testing and flexibility)
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut examples = Vec::new();
        let mut max_dimension = 0;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(SvmBridgeError::Io)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match Self::parse_line(line) {
                Ok((example, max_idx)) => {
                    examples.push(example);
                    max_dimension = max_dimension.max(max_idx + 1);
                }
                Err(e) => {
                    return Err(SvmBridgeError::Parse(format!(
                        "Error parsing line {}: {}",
                        line_num + 1,
                        e
                    )));
                }
            }
        }

        if examples.is_empty() {
            return Err(SvmBridgeError::EmptyTrainingSet);
        }

        Ok(LabeledDataset {
            examples,
            dimensions: max_dimension,
        })
    }

    /// Parse a single `label idx:val idx:val ...` line; returns the example
    /// and the largest 0-based feature index on the line
    fn parse_line(line: &str) -> Result<(LabeledExample, usize)> {
        let mut parts = line.split_whitespace();

        let label = parts
            .next()
            .ok_or_else(|| SvmBridgeError::Parse("Empty line".to_string()))?;

        let mut indices = Vec::new();
        let mut values = Vec::new();
        let mut max_index = 0;

        for feature_str in parts {
            let (index_str, value_str) = feature_str.split_once(':').ok_or_else(|| {
                SvmBridgeError::Parse(format!("Invalid feature format: {feature_str}"))
            })?;

            let index = index_str.parse::<usize>().map_err(|_| {
                SvmBridgeError::Parse(format!("Invalid feature index: {index_str}"))
            })?;
            if index == 0 {
                return Err(SvmBridgeError::Parse(
                    "Feature index must be positive (1-based)".to_string(),
                ));
            }

            let value = value_str.parse::<f64>().map_err(|_| {
                SvmBridgeError::Parse(format!("Invalid feature value: {value_str}"))
            })?;

            // File indices are 1-based
            let zero_based = index - 1;
            max_index = max_index.max(zero_based);
            indices.push(zero_based);
            values.push(value);
        }

        Ok((LabeledExample::new(label, indices, values), max_index))
    }

    /// Distinct label strings in first-seen order
    pub fn distinct_labels(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for example in &self.examples {
            if !seen.contains(&example.label.as_str()) {
                seen.push(example.label.as_str());
            }
        }
        seen
    }
}

impl ExampleSet for LabeledDataset {
    fn len(&self) -> usize {
        self.examples.len()
    }

    fn dim(&self) -> usize {
        self.dimensions
    }

    fn example(&self, i: usize) -> LabeledExample {
        self.examples[i].clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_basic_loading() {
        let data = "spam 1:0.5 3:1.2\nham 2:0.3\n";
        let dataset = LabeledDataset::from_reader(Cursor::new(data)).unwrap();

        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dim(), 3);

        let first = dataset.example(0);
        assert_eq!(first.label, "spam");
        assert_eq!(first.indices, vec![0, 2]);
        assert_eq!(first.values, vec![0.5, 1.2]);

        let second = dataset.example(1);
        assert_eq!(second.label, "ham");
        assert_eq!(second.indices, vec![1]);
        assert_eq!(second.values, vec![0.3]);
    }

    #[test]
    fn test_label_only_line() {
        // An example with no features is legal (all-zero vector)
        let data = "neutral\n";
        let dataset = LabeledDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.len(), 1);
        assert!(dataset.example(0).indices.is_empty());
    }

    #[test]
    fn test_comments_and_blank_lines() {
        let data = "# header comment\nspam 1:1.0\n\nham 1:2.0\n";
        let dataset = LabeledDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = LabeledDataset::from_reader(Cursor::new("# only a comment\n"));
        assert!(matches!(result, Err(SvmBridgeError::EmptyTrainingSet)));
    }

    #[test]
    fn test_invalid_feature_format() {
        let result = LabeledDataset::from_reader(Cursor::new("spam 1=0.5\n"));
        match result {
            Err(SvmBridgeError::Parse(msg)) => {
                assert!(msg.contains("line 1"), "message: {msg}");
                assert!(msg.contains("Invalid feature format"), "message: {msg}");
            }
            other => panic!("Expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_index_rejected() {
        let result = LabeledDataset::from_reader(Cursor::new("spam 0:0.5\n"));
        assert!(matches!(result, Err(SvmBridgeError::Parse(_))));
    }

    #[test]
    fn test_invalid_value_rejected() {
        let result = LabeledDataset::from_reader(Cursor::new("spam 1:abc\n"));
        assert!(matches!(result, Err(SvmBridgeError::Parse(_))));
    }

    #[test]
    fn test_distinct_labels_first_seen_order() {
        let data = "b 1:1.0\na 1:2.0\nb 1:3.0\nc 1:4.0\n";
        let dataset = LabeledDataset::from_reader(Cursor::new(data)).unwrap();
        assert_eq!(dataset.distinct_labels(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_from_file() {
        use std::io::Write;
        use tempfile::NamedTempFile;

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "spam 1:0.5 2:1.0").expect("Failed to write");
        writeln!(temp_file, "ham 1:-0.5").expect("Failed to write");
        temp_file.flush().expect("Failed to flush");

        let dataset = LabeledDataset::from_file(temp_file.path()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.dim(), 2);
    }
}
