//! # vtl-dataset
//!
//! Parser for small datasets written inline as text: a header line describing
//! every column as `Name[Role,Type]`, followed by comma separated data rows.
//!
//! ```text
//! id[I,String],population[M,Number],status[A,String]
//! Oslo,700000,P
//! Bergen,290000,F
//! ```
//!
//! Role codes are `I` (identifier), `M` (measure) and `A` (attribute); types
//! are `String` or `Number`. Cell values are kept as text, never coerced.
//!
//! ## Quick Start
//!
//! ```
//! use vtl_dataset::{parse, Role};
//!
//! let dataset = parse("A[I,String],B[M,Number]\nx,1\ny,2", "ds1").unwrap();
//!
//! assert_eq!(dataset.structure()[0].role(), Role::Identifier);
//! assert_eq!(dataset.structure()[1].type_tag(), "java.lang.Number");
//! assert_eq!(dataset.data()[0], vec!["x", "1"]);
//! ```
//!
//! ## Registering Inputs
//!
//! ```
//! use vtl_dataset::InputRegistry;
//!
//! let mut inputs = InputRegistry::new();
//! inputs.load("ds1", "A[I,String]\nx").unwrap();
//! assert!(inputs.get("ds1").is_some());
//! ```
//!
//! ## Features
//!
//! - `serde` - serialize datasets to the JSON shape downstream consumers expect
//! - `parallel` - parse batches of inputs on rayon's thread pool

pub mod error;
pub mod header;
pub mod normalize;
pub mod parser;
pub mod registry;
pub mod types;

pub use error::{DatasetError, ErrorKind, Result};
pub use parser::{parse, DatasetParser};
pub use registry::InputRegistry;
pub use types::{ColumnDescriptor, Dataset, Role, Row, ValueType};
