//! Header mini-language: `Name[Role,Type]` columns separated by `,`
//!
//! The separator between two columns is the literal `],`, so it consumes the
//! closing bracket of every column except the last one. The column pattern
//! treats the closing bracket as optional to accept both forms.

use crate::error::{DatasetError, Result};
use crate::types::{ColumnDescriptor, Role, ValueType};
use once_cell::sync::Lazy;
use regex::Regex;

/// Separator between two column specs
pub const COLUMN_SEPARATOR: &str = "],";

static COLUMN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^,\[]+)\[(I|M|A),(String|Number)\]?").unwrap());

/// Parse a header line into column descriptors, in header order
pub fn parse_header(line: &str) -> Result<Vec<ColumnDescriptor>> {
    let segments: Vec<&str> = line.split(COLUMN_SEPARATOR).collect();
    if segments.is_empty() {
        return Err(DatasetError::HeaderFormatInvalid {
            column: 0,
            segment: line.to_string(),
        });
    }

    segments
        .iter()
        .enumerate()
        .map(|(column, segment)| parse_column(column, segment))
        .collect()
}

/// Parse one header segment
///
/// The pattern is searched, not anchored: the first match inside the trimmed
/// segment wins and surrounding text is ignored.
pub fn parse_column(column: usize, segment: &str) -> Result<ColumnDescriptor> {
    let segment = segment.trim();
    let invalid = || DatasetError::HeaderFormatInvalid {
        column,
        segment: segment.to_string(),
    };

    let caps = COLUMN_PATTERN.captures(segment).ok_or_else(invalid)?;
    let (Some(name), Some(code), Some(type_name)) = (caps.get(1), caps.get(2), caps.get(3))
    else {
        return Err(invalid());
    };

    let role = Role::from_code(code.as_str()).ok_or_else(invalid)?;
    let value_type = ValueType::from_name(type_name.as_str()).ok_or_else(invalid)?;

    Ok(ColumnDescriptor::new(name.as_str(), role, value_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_two_columns() -> Result<()> {
        let cols = parse_header("A[I,String],B[M,Number]")?;
        assert_eq!(
            cols,
            vec![
                ColumnDescriptor::new("A", Role::Identifier, ValueType::String),
                ColumnDescriptor::new("B", Role::Measure, ValueType::Number),
            ]
        );
        Ok(())
    }

    #[test]
    fn test_last_bracket_optional() -> Result<()> {
        let cols = parse_header("A[I,String],B[A,String")?;
        assert_eq!(cols.len(), 2);
        assert_eq!(cols[1].role(), Role::Attribute);
        Ok(())
    }

    #[test]
    fn test_segments_trimmed() -> Result<()> {
        let cols = parse_header("  id[I,String],   value[M,Number]  ")?;
        assert_eq!(cols[0].name(), "id");
        assert_eq!(cols[1].name(), "value");
        Ok(())
    }

    #[test]
    fn test_inner_spaces_kept_in_name() -> Result<()> {
        let col = parse_column(0, "Folketallet 11[M,Number]")?;
        assert_eq!(col.name(), "Folketallet 11");
        Ok(())
    }

    #[test]
    fn test_missing_type() {
        let err = parse_header("A[I]").unwrap_err();
        assert_eq!(
            err,
            DatasetError::HeaderFormatInvalid {
                column: 0,
                segment: "A[I]".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_role_code() {
        let err = parse_header("A[I,String],B[X,Number]").unwrap_err();
        assert_eq!(
            err,
            DatasetError::HeaderFormatInvalid {
                column: 1,
                segment: "B[X,Number]".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_type_name() {
        let err = parse_header("A[I,Integer]").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeaderFormatInvalid);
    }

    #[test]
    fn test_plain_csv_header_rejected() {
        let err = parse_header("id,value").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeaderFormatInvalid);
    }

    #[test]
    fn test_empty_header_rejected() {
        let err = parse_header("").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::HeaderFormatInvalid);
    }
}
