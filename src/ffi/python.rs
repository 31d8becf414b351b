// In: src/ffi/python.rs

use pyo3::prelude::*;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::bridge::HtfCodec;
use crate::config::HtfConfig;
use crate::error::HtfError;
use crate::types::{EncodedForm, Script, VersionId};

//==================================================================================
// I. Process-Wide Codec
//==================================================================================

// Python callers have no handle to thread through, so the loaded codec lives here.
// `load_tables` swaps it wholesale; readers clone the handle and drop the lock.
static CODEC: RwLock<Option<HtfCodec>> = RwLock::new(None);

fn current_codec() -> Result<HtfCodec, HtfError> {
    let guard = CODEC
        .read()
        .map_err(|e| HtfError::FfiError(format!("codec lock poisoned: {}", e)))?;
    guard
        .clone()
        .ok_or_else(|| HtfError::Config("no tables loaded; call load_tables() first".to_string()))
}

//==================================================================================
// II. Stateless Functions
//==================================================================================

/// Loads every codebook in `encodings_dir` and makes it the active codec.
/// Returns the loaded version tags.
#[pyfunction]
#[pyo3(name = "load_tables", signature = (encodings_dir, default_version = None, default_script = "latin"))]
pub fn load_tables_py(
    py: Python,
    encodings_dir: PathBuf,
    default_version: Option<i64>,
    default_script: &str,
) -> PyResult<Vec<i64>> {
    let config = HtfConfig {
        encodings_dir,
        default_version: default_version.map(VersionId::from_tag).transpose()?,
        default_script: default_script.parse::<Script>()?,
        ..Default::default()
    };
    let codec = py.allow_threads(move || HtfCodec::from_config(config))?;
    let versions = codec.registry().versions().map(VersionId::tag).collect();

    let mut guard = CODEC
        .write()
        .map_err(|e| HtfError::FfiError(format!("codec lock poisoned: {}", e)))?;
    *guard = Some(codec);
    Ok(versions)
}

/// Encodes text into a tagged list of symbol indices.
#[pyfunction]
#[pyo3(name = "encode", signature = (text, version = None))]
pub fn encode_py(py: Python, text: &str, version: Option<i64>) -> PyResult<Vec<i64>> {
    let codec = current_codec()?;
    let version = version.map(VersionId::from_tag).transpose()?;
    let encoded = py.allow_threads(move || match version {
        Some(version) => codec.encode_with(text, version),
        None => codec.encode(text),
    })?;
    Ok(encoded.into_inner())
}

/// Decodes a tagged list of symbol indices into `script` (defaults to the configured one).
#[pyfunction]
#[pyo3(name = "decode", signature = (encoded, script = None))]
pub fn decode_py(py: Python, encoded: Vec<i64>, script: Option<&str>) -> PyResult<String> {
    let codec = current_codec()?;
    let script = match script {
        Some(name) => name.parse::<Script>()?,
        None => codec.config().default_script,
    };
    let encoded = EncodedForm::from(encoded);
    Ok(py.allow_threads(move || codec.decode_as(&encoded, script))?)
}

#[pyfunction]
#[pyo3(name = "to_canonical_id")]
pub fn to_canonical_id_py(py: Python, encoded: Vec<i64>) -> PyResult<String> {
    let codec = current_codec()?;
    let encoded = EncodedForm::from(encoded);
    Ok(py.allow_threads(move || codec.canonical_id(&encoded))?)
}

//==================================================================================
// III. Diagnostics
//==================================================================================

#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) {
    crate::observability::enable_verbose_logging(log_file);
}
