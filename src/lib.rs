//! This file is the root of the `htf_int` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the handful of types most callers need.
//! 3.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     library is built with the `python` feature and imported into Python.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod kernels;
pub mod rekey;
pub mod table;
pub mod types;

#[cfg(feature = "python")]
mod ffi;
mod utils;

pub use bridge::HtfCodec;
pub use config::HtfConfig;
pub use error::HtfError;
pub use observability::enable_verbose_logging;
pub use table::{SymbolTable, TableRegistry};
pub use types::{EncodedForm, Script, SymbolEntry, SymbolKind, VersionId};

//==================================================================================
// 2. Python Module Definition
//==================================================================================
#[cfg(feature = "python")]
use pyo3::prelude::*;

/// The `htf_int` Python module, containing all exposed Rust functions.
#[cfg(feature = "python")]
#[pymodule]
fn htf_int(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // --- Table loading ---
    m.add_function(wrap_pyfunction!(ffi::load_tables_py, m)?)?;

    // --- Codec ---
    m.add_function(wrap_pyfunction!(ffi::encode_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::decode_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::to_canonical_id_py, m)?)?;

    // --- Expose the custom error type ---
    m.add(
        "HtfError",
        m.py().get_type_bound::<pyo3::exceptions::PyValueError>(),
    )?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
