// In: src/bridge/stateless_api.rs

//! The four pure codec functions, parameterised by an injected `TableRegistry`.
//!
//! These resolve the version tag to a table, then hand off to the kernels. They
//! are safe to call from any number of threads against one shared registry.

use std::sync::Arc;

use crate::error::HtfError;
use crate::kernels;
use crate::table::{SymbolTable, TableRegistry};
use crate::types::{EncodedForm, Script, VersionId};

/// An encoded form was decoded against a different version than the caller expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionMismatch {
    /// The version the caller asked for.
    pub expected: VersionId,
    /// The version named by the form's own tag, which was used for decoding.
    pub found: VersionId,
}

/// The outcome of `decode_expecting`: the text plus any non-fatal warning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeReport {
    pub text: String,
    pub mismatch: Option<VersionMismatch>,
}

/// Returns the table registered for `version`.
pub fn load_table(
    registry: &TableRegistry,
    version: VersionId,
) -> Result<Arc<SymbolTable>, HtfError> {
    registry.load_table(version)
}

/// Encodes `text` with `version`'s codebook, or the latest registered one.
///
/// Never fails on unencodable text; those characters degrade to index 0 under
/// the version's recovery policy.
pub fn encode(
    registry: &TableRegistry,
    text: &str,
    version: Option<VersionId>,
) -> Result<EncodedForm, HtfError> {
    let version = version.unwrap_or_else(|| registry.latest());
    let table = registry.load_table(version)?;

    let mut encoded = EncodedForm::tagged(version);
    kernels::dispatch_encode(text, &table, &mut encoded);

    log_metric!(
        "event" = "encode",
        "version" = version,
        "chars" = text.chars().count(),
        "symbols" = encoded.symbols().len()
    );
    Ok(encoded)
}

/// Decodes `encoded` into `script` using the table named by its own tag.
pub fn decode(
    registry: &TableRegistry,
    encoded: &EncodedForm,
    script: Script,
) -> Result<String, HtfError> {
    let table = registry.table_for_tag(encoded.version_tag()?)?;
    Ok(kernels::render::decode_to_string(
        encoded.symbols(),
        &table,
        script,
    ))
}

/// Decodes `encoded`, checking its tag against the version the caller expected.
///
/// A mismatch is not an error: it is logged (when `warn` is set) and reported,
/// and decoding proceeds best-effort with the table the tag names.
pub fn decode_expecting(
    registry: &TableRegistry,
    encoded: &EncodedForm,
    expected: VersionId,
    script: Script,
    warn: bool,
) -> Result<DecodeReport, HtfError> {
    let found = encoded.version()?;
    let mismatch = (found != expected).then_some(VersionMismatch { expected, found });
    if let (Some(m), true) = (mismatch, warn) {
        log::warn!(
            "Mismatched HTF version. Expected {}, got {}.",
            m.expected.tag(),
            m.found.tag()
        );
    }

    let text = decode(registry, encoded, script)?;
    Ok(DecodeReport { text, mismatch })
}

/// Derives the canonical, syllabary-based ID for `encoded`.
pub fn to_canonical_id(
    registry: &TableRegistry,
    encoded: &EncodedForm,
) -> Result<String, HtfError> {
    let table = registry.table_for_tag(encoded.version_tag()?)?;
    Ok(kernels::canonical_id::canonical_id(encoded.symbols(), &table))
}
