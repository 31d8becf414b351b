// In: src/config.rs

//! The single source of truth for all HTF-INT codec configuration.
//!
//! `HtfConfig` is created once at the application boundary (from a JSON file, a
//! Python call, or `Default`) and then shared read-only as an `Arc<HtfConfig>`
//! by the `HtfCodec` facade.

use crate::error::HtfError;
use crate::types::{Script, VersionId};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The unified configuration for the codec.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case", deny_unknown_fields)]
pub struct HtfConfig {
    /// Directory holding the `HTF000N.json` codebooks.
    #[serde(default = "default_encodings_dir")]
    pub encodings_dir: PathBuf,

    /// Version new text is encoded with. `None` means the latest registered table.
    #[serde(default)]
    pub default_version: Option<VersionId>,

    /// Script used by `HtfCodec::decode` when the caller does not pick one.
    #[serde(default)]
    pub default_script: Script,

    /// If true, decoding a form whose tag differs from the expected version logs
    /// a warning. The mismatch is reported in the `DecodeReport` either way.
    #[serde(default = "default_true")]
    pub warn_on_version_mismatch: bool,
}

impl Default for HtfConfig {
    fn default() -> Self {
        Self {
            encodings_dir: default_encodings_dir(),
            default_version: None,
            default_script: Script::default(),
            warn_on_version_mismatch: true,
        }
    }
}

impl HtfConfig {
    pub fn from_json_str(json: &str) -> Result<Self, HtfError> {
        serde_json::from_str(json).map_err(|e| HtfError::Config(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, HtfError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// Helper for `serde` to default a boolean field to true.
fn default_true() -> bool {
    true
}

/// Helper for `serde` to provide a default for `encodings_dir`.
fn default_encodings_dir() -> PathBuf {
    PathBuf::from("rsc/encodings")
}
