// In: src/table/mod.rs

//! Codebook loading and indexing.
//!
//! `format` is the on-disk JSON contract, `symbol_table` turns one document into
//! a validated, indexed `SymbolTable`, and `registry` holds every loaded version
//! for the lifetime of the process.

pub mod format;
pub mod registry;
pub mod symbol_table;

pub use format::{TableDocument, CAPITAL_CLOSE, CAPITAL_OPEN, ILLEGAL_INDEX};
pub use registry::{TableRegistry, TableRegistryBuilder};
pub use symbol_table::SymbolTable;
