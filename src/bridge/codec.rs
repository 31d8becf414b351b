// In: src/bridge/codec.rs

//! The stateful codec facade.
//!
//! `HtfCodec` bundles a shared registry with a shared config so collaborators
//! (submission handling, the re-keying pass, FFI) receive one injected handle
//! rather than reaching for global state. Cloning is two `Arc` bumps.

use std::sync::Arc;

use crate::bridge::stateless_api::{self, DecodeReport};
use crate::config::HtfConfig;
use crate::error::HtfError;
use crate::table::{SymbolTable, TableRegistry};
use crate::types::{EncodedForm, Script, VersionId};

#[derive(Debug, Clone)]
pub struct HtfCodec {
    registry: Arc<TableRegistry>,
    config: Arc<HtfConfig>,
}

impl HtfCodec {
    /// Wraps an existing registry and config.
    ///
    /// Fails if the configured default version has no registered table.
    pub fn new(registry: Arc<TableRegistry>, config: Arc<HtfConfig>) -> Result<Self, HtfError> {
        if let Some(version) = config.default_version {
            if !registry.contains(version) {
                return Err(HtfError::Config(format!(
                    "default_version {} has no table in the registry",
                    version
                )));
            }
        }
        Ok(Self { registry, config })
    }

    /// Loads the codebooks named by `config` and builds a codec around them.
    pub fn from_config(config: HtfConfig) -> Result<Self, HtfError> {
        let registry = TableRegistry::from_config(&config)?;
        Self::new(Arc::new(registry), Arc::new(config))
    }

    pub fn registry(&self) -> &Arc<TableRegistry> {
        &self.registry
    }

    pub fn config(&self) -> &Arc<HtfConfig> {
        &self.config
    }

    /// The version `encode` writes: the configured default, else the latest table.
    pub fn encode_version(&self) -> VersionId {
        self.config
            .default_version
            .unwrap_or_else(|| self.registry.latest())
    }

    pub fn encode(&self, text: &str) -> Result<EncodedForm, HtfError> {
        self.encode_with(text, self.encode_version())
    }

    pub fn encode_with(&self, text: &str, version: VersionId) -> Result<EncodedForm, HtfError> {
        stateless_api::encode(&self.registry, text, Some(version))
    }

    /// Decodes into the configured default script.
    pub fn decode(&self, encoded: &EncodedForm) -> Result<String, HtfError> {
        self.decode_as(encoded, self.config.default_script)
    }

    pub fn decode_as(&self, encoded: &EncodedForm, script: Script) -> Result<String, HtfError> {
        stateless_api::decode(&self.registry, encoded, script)
    }

    pub fn decode_expecting(
        &self,
        encoded: &EncodedForm,
        expected: VersionId,
        script: Script,
    ) -> Result<DecodeReport, HtfError> {
        stateless_api::decode_expecting(
            &self.registry,
            encoded,
            expected,
            script,
            self.config.warn_on_version_mismatch,
        )
    }

    pub fn canonical_id(&self, encoded: &EncodedForm) -> Result<String, HtfError> {
        stateless_api::to_canonical_id(&self.registry, encoded)
    }

    pub fn load_table(&self, version: VersionId) -> Result<Arc<SymbolTable>, HtfError> {
        stateless_api::load_table(&self.registry, version)
    }
}
