//! Dense CSV format
//!
//! Loads datasets from CSV files where:
//! - The last column is the class label (an arbitrary string)
//! - All other columns are dense feature values
//! - First row can be headers (automatically detected)
//!
//! Zero feature values are dropped during the dense-to-sparse conversion.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::{ExampleSet, LabeledExample, Result, SvmBridgeError};

/// Example set backed by a dense CSV file
#[derive(Debug, Clone)]
pub struct CsvDataset {
    examples: Vec<LabeledExample>,
    dimensions: usize,
}

impl CsvDataset {
    /// Load a dataset from a CSV file.
    ///
    /// The last column is the label; headers are automatically detected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(SvmBridgeError::Io)?;
        let reader = BufReader::new(file);
        Self::from_reader(reader)
    }

    /// Load a dataset from a reader with header auto-detection
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, true)
    }

    /// Load a dataset from a reader with explicit header option
    pub fn from_reader_with_options<R: BufRead>(
        reader: R,
        auto_detect_header: bool,
    ) -> Result<Self> {
        let mut examples = Vec::new();
        let mut dimensions = 0;
        let mut first_data_line = true;

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(SvmBridgeError::Io)?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if first_data_line {
                first_data_line = false;
                if auto_detect_header && Self::is_header_line(line) {
                    continue;
                }
            }

            let example = Self::parse_data_line(line).map_err(|e| {
                SvmBridgeError::Parse(format!("Error parsing line {}: {}", line_num + 1, e))
            })?;
            // Row width, not max non-zero index: dense rows fix the
            // dimensionality even when trailing values are zero
            dimensions = dimensions.max(line.split(',').count() - 1);
            examples.push(example);
        }

        if examples.is_empty() {
            return Err(SvmBridgeError::EmptyTrainingSet);
        }

        Ok(CsvDataset {
            examples,
            dimensions,
        })
    }

    /// Check if a line appears to be a header: most feature columns fail to
    /// parse as numbers (the label column is a string either way)
    fn is_header_line(line: &str) -> bool {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < 2 {
            return false;
        }

        let non_numeric_count = fields
            .iter()
            .take(fields.len() - 1)
            .filter(|field| field.trim().parse::<f64>().is_err())
            .count();

        non_numeric_count > (fields.len() - 1) / 2
    }

    /// Parse a CSV data line into a labeled example
    fn parse_data_line(line: &str) -> Result<LabeledExample> {
        let fields: Vec<&str> = line.split(',').map(|f| f.trim()).collect();

        if fields.len() < 2 {
            return Err(SvmBridgeError::Parse(format!(
                "Line has too few fields: {line}"
            )));
        }

        let label = fields[fields.len() - 1];
        if label.is_empty() {
            return Err(SvmBridgeError::Parse("Empty label".to_string()));
        }

        let mut indices = Vec::new();
        let mut values = Vec::new();

        for (idx, field) in fields.iter().take(fields.len() - 1).enumerate() {
            let value = field.parse::<f64>().map_err(|_| {
                SvmBridgeError::Parse(format!(
                    "Invalid feature value at column {}: {}",
                    idx + 1,
                    field
                ))
            })?;
            if value != 0.0 {
                indices.push(idx);
                values.push(value);
            }
        }

        Ok(LabeledExample::new(label, indices, values))
    }
}

impl ExampleSet for CsvDataset {
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
