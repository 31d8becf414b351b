// In: src/table/format.rs

//! Defines the on-disk structure of an HTF codebook document.
//!
//! A codebook is external data, shipped as JSON alongside the application:
//!
//! ```json
//! { "version": 3, "encodings": [ { "type": "illegal", "latin": "..", ... }, ... ] }
//! ```

use crate::error::HtfError;
use crate::types::SymbolEntry;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The index reserved for the illegal/placeholder symbol in every version.
pub const ILLEGAL_INDEX: i64 = 0;
/// Capital-open control code (version 3 onward).
pub const CAPITAL_OPEN: i64 = 1;
/// Capital-close control code (version 3 onward).
pub const CAPITAL_CLOSE: i64 = 2;

/// A codebook document exactly as it is stored on disk.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TableDocument {
    pub version: i64,
    pub encodings: Vec<SymbolEntry>,
}

impl TableDocument {
    pub fn from_json_str(json: &str) -> Result<Self, HtfError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, HtfError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
