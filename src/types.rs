//! Type definitions for parsed datasets

use crate::error::{DatasetError, Result};
use std::fmt;

/// Namespace prefix of the type tags handed to downstream consumers
pub const TYPE_TAG_NAMESPACE: &str = "java.lang.";

/// Semantic classification of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum Role {
    /// Key component (`I`)
    Identifier,
    /// Observed value (`M`)
    Measure,
    /// Descriptive metadata (`A`)
    Attribute,
}

impl Role {
    /// Map a header role code to a role
    ///
    /// Returns `None` for anything other than `I`, `M` or `A`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "I" => Some(Role::Identifier),
            "M" => Some(Role::Measure),
            "A" => Some(Role::Attribute),
            _ => None,
        }
    }

    /// Single letter code used in the header mini-language
    pub fn code(&self) -> char {
        match self {
            Role::Identifier => 'I',
            Role::Measure => 'M',
            Role::Attribute => 'A',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Identifier => "IDENTIFIER",
            Role::Measure => "MEASURE",
            Role::Attribute => "ATTRIBUTE",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Declared value type of a column
///
/// Cells are never coerced; the type is metadata for downstream consumers,
/// which expect it as a fully-qualified tag such as `java.lang.Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueType {
    #[cfg_attr(feature = "serde", serde(rename = "java.lang.String"))]
    String,
    #[cfg_attr(feature = "serde", serde(rename = "java.lang.Number"))]
    Number,
}

impl ValueType {
    /// Map a header type name (`String` or `Number`) to a value type
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "String" => Some(ValueType::String),
            "Number" => Some(ValueType::Number),
            _ => None,
        }
    }

    /// Short name as written in the header
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::String => "String",
            ValueType::Number => "Number",
        }
    }

    /// Fully-qualified type tag (`java.lang.String`, `java.lang.Number`)
    ///
    /// Opaque compatibility string; do not parse it back.
    pub fn type_tag(&self) -> &'static str {
        match self {
            ValueType::String => "java.lang.String",
            ValueType::Number => "java.lang.Number",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.type_tag())
    }
}

/// Metadata of one dataset column, immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnDescriptor {
    name: String,
    role: Role,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    value_type: ValueType,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, role: Role, value_type: ValueType) -> Self {
        ColumnDescriptor {
            name: name.into(),
            role,
            value_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn value_type(&self) -> ValueType {
        self.value_type
    }

    /// Fully-qualified type tag, see [`ValueType::type_tag`]
    pub fn type_tag(&self) -> &'static str {
        self.value_type.type_tag()
    }
}

impl fmt::Display for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{},{}]",
            self.name,
            self.role.code(),
            self.value_type.name()
        )
    }
}

/// One data row: raw cell text in header column order
pub type Row = Vec<String>;

/// A parsed dataset: ordered column descriptors plus ordered rows of raw text
///
/// Built atomically by one parse call and immutable afterwards. Every row has
/// exactly [`Dataset::column_count`] cells and the structure is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Dataset {
    name: String,
    structure: Vec<ColumnDescriptor>,
    data: Vec<Row>,
}

impl Dataset {
    /// Build a dataset from parts, checking both shape invariants
    ///
    /// Fails with [`DatasetError::HeaderFormatInvalid`] when `structure` is
    /// empty and [`DatasetError::RowSizeMismatch`] for the first row whose
    /// cell count differs from the column count.
    pub fn try_new(
        name: impl Into<String>,
        structure: Vec<ColumnDescriptor>,
        data: Vec<Row>,
    ) -> Result<Self> {
        if structure.is_empty() {
            return Err(DatasetError::HeaderFormatInvalid {
                column: 0,
                segment: String::new(),
            });
        }

        if let Some((row, cells)) = data
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != structure.len())
        {
            return Err(DatasetError::RowSizeMismatch {
                row,
                expected: structure.len(),
                found: cells.len(),
            });
        }

        Ok(Dataset::from_parts(name.into(), structure, data))
    }

    /// Assemble without validation; callers uphold the invariants
    pub(crate) fn from_parts(
        name: String,
        structure: Vec<ColumnDescriptor>,
        data: Vec<Row>,
    ) -> Self {
        Dataset {
            name,
            structure,
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Column descriptors in header order
    pub fn structure(&self) -> &[ColumnDescriptor] {
        &self.structure
    }

    /// Rows in body order
    pub fn data(&self) -> &[Row] {
        &self.data
    }

    pub fn column_count(&self) -> usize {
        self.structure.len()
    }

    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// True when the dataset has no rows (the structure is never empty)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Position of the first column with this name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.structure.iter().position(|c| c.name() == name)
    }

    /// First column with this name
    pub fn column(&self, name: &str) -> Option<&ColumnDescriptor> {
        self.structure.iter().find(|c| c.name() == name)
    }

    /// Columns carrying the given role, in header order
    pub fn columns_with_role(&self, role: Role) -> impl Iterator<Item = &ColumnDescriptor> {
        self.structure.iter().filter(move |c| c.role() == role)
    }

    /// All cells of one column, top to bottom
    ///
    /// Returns `None` if the index is out of bounds.
    pub fn column_values(&self, index: usize) -> Option<Vec<&str>> {
        if index >= self.structure.len() {
            return None;
        }
        Some(self.data.iter().map(|row| row[index].as_str()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::try_new(
            "ds1",
            vec![
                ColumnDescriptor::new("id", Role::Identifier, ValueType::String),
                ColumnDescriptor::new("value", Role::Measure, ValueType::Number),
                ColumnDescriptor::new("status", Role::Attribute, ValueType::String),
            ],
            vec![
                vec!["a".into(), "1".into(), "P".into()],
                vec!["b".into(), "2".into(), "F".into()],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_role_codes() {
        assert_eq!(Role::from_code("I"), Some(Role::Identifier));
        assert_eq!(Role::from_code("M"), Some(Role::Measure));
        assert_eq!(Role::from_code("A"), Some(Role::Attribute));
        assert_eq!(Role::from_code("X"), None);
        assert_eq!(Role::from_code("i"), None);
        assert_eq!(Role::Measure.code(), 'M');
        assert_eq!(Role::Attribute.to_string(), "ATTRIBUTE");
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(ValueType::from_name("Number"), Some(ValueType::Number));
        assert_eq!(ValueType::from_name("Integer"), None);
        assert_eq!(ValueType::String.type_tag(), "java.lang.String");
        assert_eq!(
            ValueType::Number.type_tag(),
            format!("{}{}", TYPE_TAG_NAMESPACE, ValueType::Number.name())
        );
    }

    #[test]
    fn test_column_display() {
        let col = ColumnDescriptor::new("value", Role::Measure, ValueType::Number);
        assert_eq!(col.to_string(), "value[M,Number]");
        assert_eq!(col.type_tag(), "java.lang.Number");
    }

    #[test]
    fn test_lookups() {
        let ds = sample();
        assert_eq!(ds.column_count(), 3);
        assert_eq!(ds.row_count(), 2);
        assert!(!ds.is_empty());
        assert_eq!(ds.column_index("status"), Some(2));
        assert_eq!(ds.column("value").map(|c| c.role()), Some(Role::Measure));
        assert!(ds.column("missing").is_none());

        let measures: Vec<_> = ds.columns_with_role(Role::Measure).map(|c| c.name()).collect();
        assert_eq!(measures, vec!["value"]);

        assert_eq!(ds.column_values(1), Some(vec!["1", "2"]));
        assert_eq!(ds.column_values(3), None);
    }

    #[test]
    fn test_try_new_rejects_empty_structure() {
        let err = Dataset::try_new("empty", Vec::new(), Vec::new()).unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::HeaderFormatInvalid);
    }

    #[test]
    fn test_try_new_rejects_ragged_rows() {
        let err = Dataset::try_new(
            "ragged",
            vec![
                ColumnDescriptor::new("a", Role::Identifier, ValueType::String),
                ColumnDescriptor::new("b", Role::Measure, ValueType::Number),
            ],
            vec![
                vec!["x".into(), "1".into()],
                vec!["y".into()],
            ],
        )
        .unwrap_err();

        assert_eq!(
            err,
            DatasetError::RowSizeMismatch {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }
}
