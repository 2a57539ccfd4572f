//! Metron Core - Fundamental types
//!
//! This crate provides the types shared across Metron:
//! - `UnitSymbol`, `ConversionRequest`, `ConversionResult`, `UnitInfo`
//! - `UnitCatalog`: the seam between the gateway and a unit registry
//! - `MetronError`: structured errors with codes and suggestions

mod catalog;
mod error;
mod types;

pub use catalog::UnitCatalog;
pub use error::{codes, MetronError, Severity};
pub use types::{ConversionRequest, ConversionResult, UnitInfo, UnitSymbol};
