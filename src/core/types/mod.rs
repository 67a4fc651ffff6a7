//! Unified type system
//!
//! Input-side types (parameter bags, resolved items) and output-side types
//! (records emitted by a batch run).

pub mod params;
pub mod records;

pub use params::{IdType, InputItem, OperationVariant, ParameterBag, resolve_item};
pub use records::{ApiResponse, BatchRecord, ErrorRecord, OutputRecord};
