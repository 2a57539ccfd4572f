//! Metron - Unit conversion gateway
//!
//! Thin glue between a presentation layer and the unit registry:
//! - `Gateway`: list units, list compatible units, convert
//! - `Session`: a front end's state (injected gateway + history)
//! - `History`: formatted conversion lines, saved to a flat text file
//! - `format`: value parsing and the CLI/GUI result lines

pub mod config;
pub mod format;
mod gateway;
mod history;
pub mod logging;
mod session;

pub use gateway::Gateway;
pub use history::{History, HistoryEntry, DEFAULT_HISTORY_FILE};
pub use session::Session;

pub use metron_core::{
    codes, ConversionRequest, ConversionResult, MetronError, Severity, UnitCatalog, UnitInfo,
    UnitSymbol,
};
pub use metron_units::UnitRegistry;
