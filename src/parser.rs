//! Dataset parsing: header line followed by delimiter separated rows

use crate::error::{DatasetError, Result};
use crate::header::parse_header;
use crate::normalize::normalize;
use crate::types::{Dataset, Row};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Parser for inline dataset text
///
/// The default configuration reproduces the legacy format exactly: `,`
/// separates cells and every `.` in the input is stripped during
/// normalization. Parsing is pure, so one parser can be shared freely
/// between threads.
///
/// # Examples
///
/// ```
/// use vtl_dataset::DatasetParser;
///
/// let text = "id[I,String],population[M,Number]\nOslo,700000\nBergen,290000";
/// let dataset = DatasetParser::new().parse(text, "cities").unwrap();
///
/// assert_eq!(dataset.column_count(), 2);
/// assert_eq!(dataset.data()[1], vec!["Bergen", "290000"]);
/// ```
///
/// # Custom Delimiter
///
/// ```
/// use vtl_dataset::DatasetParser;
///
/// let parser = DatasetParser::new().delimiter(';').strip_periods(false);
/// let dataset = parser.parse("id[I,String],rate[M,Number]\na;1.5", "rates").unwrap();
///
/// assert_eq!(dataset.data()[0], vec!["a", "1.5"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetParser {
    delimiter: char,
    strip_periods: bool,
}

impl Default for DatasetParser {
    fn default() -> Self {
        DatasetParser {
            delimiter: ',',
            strip_periods: true,
        }
    }
}

impl DatasetParser {
    /// Create a parser with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the body cell separator (builder pattern)
    ///
    /// Only affects data rows; the header always separates columns with `],`.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Enable or disable stripping of `.` during normalization (builder pattern)
    ///
    /// Enabled by default. Disabling it keeps decimal points in cell values.
    pub fn strip_periods(mut self, strip: bool) -> Self {
        self.strip_periods = strip;
        self
    }

    /// Parse `text` into a dataset called `name`
    ///
    /// Fails on the first structural problem; no partial dataset is returned.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::HeaderMissing`] if the normalized text has no lines
    /// - [`DatasetError::HeaderFormatInvalid`] if a header column does not
    ///   match `Name[I|M|A,String|Number]`
    /// - [`DatasetError::RowSizeMismatch`] if a row's cell count differs from
    ///   the number of header columns
    pub fn parse(&self, text: &str, name: &str) -> Result<Dataset> {
        let normalized = normalize(text, self.strip_periods);

        let lines: Vec<&str> = if normalized.is_empty() {
            Vec::new()
        } else {
            normalized
                .split('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line))
                .collect()
        };

        let Some((header, body)) = lines.split_first() else {
            return Err(DatasetError::HeaderMissing);
        };

        let structure = parse_header(header)?;
        let data = self.parse_rows(body, structure.len())?;

        Ok(Dataset::from_parts(name.to_string(), structure, data))
    }

    /// Parse several `(text, name)` inputs independently
    ///
    /// Results keep the input order. With the `parallel` feature the inputs
    /// are parsed on rayon's thread pool.
    pub fn parse_batch(&self, inputs: &[(&str, &str)]) -> Vec<Result<Dataset>> {
        #[cfg(feature = "parallel")]
        let iter = inputs.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = inputs.iter();

        iter.map(|(text, name)| self.parse(text, name)).collect()
    }

    fn parse_rows(&self, lines: &[&str], expected: usize) -> Result<Vec<Row>> {
        let mut rows = Vec::with_capacity(lines.len());

        for (row, line) in lines.iter().enumerate() {
            let cells: Row = line
                .trim()
                .split(self.delimiter)
                .map(str::to_string)
                .collect();

            if cells.len() != expected {
                return Err(DatasetError::RowSizeMismatch {
                    row,
                    expected,
                    found: cells.len(),
                });
            }

            rows.push(cells);
        }

        Ok(rows)
    }
}

/// Parse `text` into a dataset called `name` with the default parser
///
/// Shorthand for `DatasetParser::new().parse(text, name)`.
pub fn parse(text: &str, name: &str) -> Result<Dataset> {
    DatasetParser::default().parse(text, name)
}
