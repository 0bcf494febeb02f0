use crate::error::{Result, SynchroError};
use std::collections::HashMap;
use std::io;
use std::path::Path;

/// One row of a tabular dataset, keyed by column name
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// 1-based position among the data rows (header excluded)
    row_number: usize,
    values: HashMap<String, String>,
}

impl Row {
    pub fn new(row_number: usize, values: HashMap<String, String>) -> Self {
        Self { row_number, values }
    }

    pub fn row_number(&self) -> usize {
        self.row_number
    }

    /// Raw cell value; blank cells count as missing
    pub fn get(&self, column: &str) -> Result<&str> {
        self.optional(column)
            .ok_or_else(|| SynchroError::missing_field(column, self.row_number))
    }

    /// Raw cell value for columns that may be absent
    pub fn optional(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn text(&self, column: &str) -> Result<String> {
        self.get(column).map(str::to_string)
    }

    /// Non-negative whole number; spreadsheet exports such as "25.0" are accepted
    pub fn integer(&self, column: &str) -> Result<u32> {
        let raw = self.get(column)?;
        if let Ok(value) = raw.parse::<u32>() {
            return Ok(value);
        }

        match raw.parse::<f64>() {
            Ok(value) if value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 => {
                Ok(value as u32)
            }
            _ => Err(SynchroError::invalid_value(column, self.row_number, raw)),
        }
    }

    /// Finite numeric value
    pub fn number(&self, column: &str) -> Result<f64> {
        let raw = self.get(column)?;
        raw.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| SynchroError::invalid_value(column, self.row_number, raw))
    }

    /// Indicator weight; a value above zero marks the attribute as present
    pub fn indicator(&self, column: &str) -> Result<f64> {
        self.number(column)
    }

    pub fn flag(&self, column: &str) -> Result<bool> {
        Ok(self.indicator(column)? > 0.0)
    }
}

/// Row-oriented table keyed by named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    columns: Vec<String>,
    rows: Vec<Row>,
}

impl TabularDataset {
    /// Load a CSV file with a header row
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let dataset = Self::from_reader(file)?;

        tracing::debug!(
            "Loaded {} rows ({} columns) from {}",
            dataset.len(),
            dataset.columns.len(),
            path.display()
        );

        Ok(dataset)
    }

    /// Read CSV from any reader with a header row
    ///
    /// Short rows are tolerated here; the absent cells surface as
    /// `MissingField` when a consumer asks for them.
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

        let rows = reader
            .records()
            .enumerate()
            .map(|(i, record)| -> Result<Row> {
                let record = record?;
                let values = columns
                    .iter()
                    .zip(record.iter())
                    .map(|(column, value)| (column.clone(), value.to_string()))
                    .collect();
                Ok(Row::new(i + 1, values))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { columns, rows })
    }

    /// Build a dataset from in-memory records
    pub fn from_records<S: AsRef<str>>(columns: &[S], records: &[Vec<S>]) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| c.as_ref().to_string()).collect();

        let rows = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let values = columns
                    .iter()
                    .zip(record.iter())
                    .map(|(column, value)| (column.clone(), value.as_ref().to_string()))
                    .collect();
                Row::new(i + 1, values)
            })
            .collect();

        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
