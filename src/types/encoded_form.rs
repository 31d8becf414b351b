//! The persisted, version-tagged integer form of a piece of text.

use crate::error::HtfError;
use crate::types::VersionId;
use serde::{Deserialize, Serialize};

/// An HTF-INT encoded string: `[version_tag, index, index, ...]`.
///
/// Serializes as a flat JSON array of integers, exactly as it is stored in
/// submission records. The indices are only meaningful against the codebook
/// named by the tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, Default)]
#[serde(transparent)]
pub struct EncodedForm(Vec<i64>);

impl EncodedForm {
    /// Starts a new form holding only the version tag.
    pub fn tagged(version: VersionId) -> Self {
        EncodedForm(vec![version.tag()])
    }

    pub(crate) fn push(&mut self, index: i64) {
        self.0.push(index);
    }

    /// The raw version tag at position 0.
    pub fn version_tag(&self) -> Result<i64, HtfError> {
        self.0.first().copied().ok_or_else(|| {
            HtfError::MalformedEncodedForm("expected a version tag at position 0".to_string())
        })
    }

    /// The codebook version named by the tag.
    pub fn version(&self) -> Result<VersionId, HtfError> {
        VersionId::from_tag(self.version_tag()?)
    }

    /// The symbol indices following the tag.
    pub fn symbols(&self) -> &[i64] {
        self.0.get(1..).unwrap_or(&[])
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<i64> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<i64>> for EncodedForm {
    fn from(raw: Vec<i64>) -> Self {
        EncodedForm(raw)
    }
}

impl From<EncodedForm> for Vec<i64> {
    fn from(form: EncodedForm) -> Vec<i64> {
        form.0
    }
}
