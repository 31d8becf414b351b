//! The process-wide, immutable set of loaded codebooks.
//!
//! The registry is built once at startup (from a directory, from embedded JSON,
//! or piece by piece through the builder) and then only read. Every lookup hands
//! out a cheap `Arc` clone of an already-validated table, so the registry itself
//! is the per-version memo.

use crate::config::HtfConfig;
use crate::error::HtfError;
use crate::table::format::TableDocument;
use crate::table::symbol_table::SymbolTable;
use crate::types::VersionId;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct TableRegistry {
    tables: BTreeMap<VersionId, Arc<SymbolTable>>,
}

impl TableRegistry {
    pub fn builder() -> TableRegistryBuilder {
        TableRegistryBuilder::default()
    }

    /// Loads every known codebook file (`HTF0002.json`, `HTF0003.json`, ...)
    /// present in `dir`. Missing versions are skipped; finding none is an error.
    pub fn from_dir(dir: &Path) -> Result<Self, HtfError> {
        let mut builder = Self::builder();
        for version in VersionId::ALL {
            let path = dir.join(version.file_name());
            if path.is_file() {
                builder = builder.register_file(version, &path)?;
            } else {
                log::debug!("No HTF table for {} at {}", version, path.display());
            }
        }
        builder.build()
    }

    /// Loads the codebooks from the configured `encodings_dir`.
    pub fn from_config(config: &HtfConfig) -> Result<Self, HtfError> {
        Self::from_dir(&config.encodings_dir)
    }

    /// Returns the table registered for `version`.
    pub fn load_table(&self, version: VersionId) -> Result<Arc<SymbolTable>, HtfError> {
        self.tables
            .get(&version)
            .cloned()
            .ok_or(HtfError::UnknownVersion(version.tag()))
    }

    /// Resolves a raw version tag straight to its table.
    pub fn table_for_tag(&self, tag: i64) -> Result<Arc<SymbolTable>, HtfError> {
        self.load_table(VersionId::from_tag(tag)?)
    }

    /// The newest registered version.
    pub fn latest(&self) -> VersionId {
        // A built registry is never empty.
        self.tables
            .keys()
            .next_back()
            .copied()
            .unwrap_or_else(VersionId::latest)
    }

    pub fn versions(&self) -> impl Iterator<Item = VersionId> + '_ {
        self.tables.keys().copied()
    }

    pub fn contains(&self, version: VersionId) -> bool {
        self.tables.contains_key(&version)
    }
}

/// Collects codebooks before freezing them into a `TableRegistry`.
#[derive(Debug, Default)]
pub struct TableRegistryBuilder {
    tables: BTreeMap<VersionId, Arc<SymbolTable>>,
}

impl TableRegistryBuilder {
    pub fn register_document(
        mut self,
        version: VersionId,
        doc: TableDocument,
    ) -> Result<Self, HtfError> {
        let table = SymbolTable::from_document(version, doc)?;
        log::info!(
            "Registered HTF table {} ({} entries)",
            version,
            table.len()
        );
        log_metric!("event" = "register_table", "version" = version, "entries" = table.len());
        if self.tables.insert(version, Arc::new(table)).is_some() {
            log::warn!("HTF table {} was registered twice; keeping the last one", version);
        }
        Ok(self)
    }

    pub fn register_json(self, version: VersionId, json: &str) -> Result<Self, HtfError> {
        self.register_document(version, TableDocument::from_json_str(json)?)
    }

    pub fn register_file(self, version: VersionId, path: &Path) -> Result<Self, HtfError> {
        self.register_document(version, TableDocument::from_json_file(path)?)
    }

    pub fn build(self) -> Result<TableRegistry, HtfError> {
        if self.tables.is_empty() {
            return Err(HtfError::EmptyRegistry);
        }
        Ok(TableRegistry {
            tables: self.tables,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const V2_JSON: &str = include_str!("../../fixtures/encodings/HTF0002.json");
    const V3_JSON: &str = include_str!("../../fixtures/encodings/HTF0003.json");

    fn fixture_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/encodings")
    }

    #[test]
    fn test_builder_registers_both_versions_side_by_side() {
        let registry = TableRegistry::builder()
            .register_json(VersionId::V2, V2_JSON)
            .unwrap()
            .register_json(VersionId::V3, V3_JSON)
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(registry.latest(), VersionId::V3);
        assert_eq!(
            registry.versions().collect::<Vec<_>>(),
            vec![VersionId::V2, VersionId::V3]
        );
        assert_eq!(registry.load_table(VersionId::V2).unwrap().len(), 13);
        assert_eq!(registry.table_for_tag(3).unwrap().version(), VersionId::V3);
    }

    #[test]
    fn test_load_table_is_memoized() {
        let registry = TableRegistry::builder()
            .register_json(VersionId::V3, V3_JSON)
            .unwrap()
            .build()
            .unwrap();
        let a = registry.load_table(VersionId::V3).unwrap();
        let b = registry.load_table(VersionId::V3).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_unregistered_version_is_unknown() {
        let registry = TableRegistry::builder()
            .register_json(VersionId::V3, V3_JSON)
            .unwrap()
            .build()
            .unwrap();
        assert!(matches!(
            registry.load_table(VersionId::V2),
            Err(HtfError::UnknownVersion(2))
        ));
        assert!(matches!(
            registry.table_for_tag(17),
            Err(HtfError::UnknownVersion(17))
        ));
    }

    #[test]
    fn test_empty_registry_is_rejected() {
        assert!(matches!(
            TableRegistry::builder().build(),
            Err(HtfError::EmptyRegistry)
        ));
    }

    #[test]
    fn test_from_dir_loads_fixture_codebooks() {
        let registry = TableRegistry::from_dir(&fixture_dir()).unwrap();
        assert!(registry.contains(VersionId::V2));
        assert!(registry.contains(VersionId::V3));
    }

    #[test]
    fn test_from_dir_without_tables_is_empty() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
        assert!(matches!(
            TableRegistry::from_dir(&dir),
            Err(HtfError::EmptyRegistry)
        ));
    }
}
