//! Append-only list of parsed input datasets
//!
//! Stands in for the embedding side: whatever extracts dataset text from a
//! document hands it to [`InputRegistry::load`], which parses it and keeps the
//! result. Datasets are only ever appended, never replaced or removed.

use crate::error::Result;
use crate::parser::DatasetParser;
use crate::types::Dataset;
use tracing::{debug, warn};

/// Registry of input datasets, in registration order
#[derive(Debug, Clone, Default)]
pub struct InputRegistry {
    parser: DatasetParser,
    inputs: Vec<Dataset>,
}

impl InputRegistry {
    /// Create an empty registry using the default parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry that parses with `parser`
    pub fn with_parser(parser: DatasetParser) -> Self {
        InputRegistry {
            parser,
            inputs: Vec::new(),
        }
    }

    /// Append an already parsed dataset
    pub fn add_input(&mut self, dataset: Dataset) -> &Dataset {
        debug!(
            dataset = %dataset.name(),
            columns = dataset.column_count(),
            rows = dataset.row_count(),
            "registered input dataset"
        );
        self.inputs.push(dataset);
        &self.inputs[self.inputs.len() - 1]
    }

    /// Parse `text` as dataset `name` and append it
    ///
    /// Zero-length text is skipped and yields `Ok(None)`. Whitespace-only
    /// text is still parsed and fails with a missing header. On error the
    /// registry is left unchanged.
    pub fn load(&mut self, name: &str, text: &str) -> Result<Option<&Dataset>> {
        if text.is_empty() {
            debug!(dataset = %name, "skipping empty dataset text");
            return Ok(None);
        }

        match self.parser.parse(text, name) {
            Ok(dataset) => Ok(Some(self.add_input(dataset))),
            Err(e) => {
                warn!(dataset = %name, error = %e, "failed to parse dataset");
                Err(e)
            }
        }
    }

    /// Most recently registered dataset with this name
    pub fn get(&self, name: &str) -> Option<&Dataset> {
        self.inputs.iter().rev().find(|d| d.name() == name)
    }

    pub fn inputs(&self) -> &[Dataset] {
        &self.inputs
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Dataset> {
        self.inputs.iter()
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    /// Consume the registry, returning the datasets in registration order
    pub fn into_inputs(self) -> Vec<Dataset> {
        self.inputs
    }
}

impl<'a> IntoIterator for &'a InputRegistry {
    type Item = &'a Dataset;
    type IntoIter = std::slice::Iter<'a, Dataset>;

    fn into_iter(self) -> Self::IntoIter {
        self.inputs.iter()
    }
}
