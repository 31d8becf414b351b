//! This module serves as the public API for the Foreign Function Interface (FFI) layer.
//!
//! Only compiled with the `python` feature. It holds the Python bridge; the
//! functions re-exported here are what `lib.rs` registers on the `htf_int` module.

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Contains all logic for interfacing with the Python/CPython ecosystem via `pyo3`.
pub mod python;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::python::{
    decode_py, enable_verbose_logging_py, encode_py, load_tables_py, to_canonical_id_py,
};
