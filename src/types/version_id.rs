//! This module defines the canonical, type-safe representation of an HTF
//! codebook version.

use crate::error::HtfError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tokenization strategy a codebook version is encoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerStrategy {
    /// Flat longest-match over words and syllables. Stops at the first
    /// unencodable character.
    LongestMatch,
    /// Letter-run aware matching with capital regions. Skips unencodable
    /// characters and carries on.
    LetterRun,
}

/// A registered HTF codebook version.
///
/// On the wire (and in config files) a version is its bare integer tag, which is
/// also the first element of every `EncodedForm`.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(try_from = "i64", into = "i64")]
pub enum VersionId {
    /// Legacy codebook. Indices 1 and 2 are ordinary symbols.
    V2,
    /// Current codebook. Indices 1 and 2 are capital-open / capital-close.
    V3,
}

impl VersionId {
    /// Every known version, oldest first.
    pub const ALL: [VersionId; 2] = [VersionId::V2, VersionId::V3];

    /// The integer tag written at position 0 of an encoded form.
    pub fn tag(self) -> i64 {
        match self {
            VersionId::V2 => 2,
            VersionId::V3 => 3,
        }
    }

    /// Resolves a version tag, failing for tags with no known codebook.
    pub fn from_tag(tag: i64) -> Result<Self, HtfError> {
        match tag {
            2 => Ok(VersionId::V2),
            3 => Ok(VersionId::V3),
            other => Err(HtfError::UnknownVersion(other)),
        }
    }

    /// The newest version this library knows how to read and write.
    pub fn latest() -> Self {
        VersionId::V3
    }

    pub fn strategy(self) -> TokenizerStrategy {
        match self {
            VersionId::V2 => TokenizerStrategy::LongestMatch,
            VersionId::V3 => TokenizerStrategy::LetterRun,
        }
    }

    /// Returns `true` if indices 1 and 2 of this version's table are the
    /// capital-open / capital-close control codes.
    pub fn has_capital_controls(self) -> bool {
        match self {
            VersionId::V2 => false,
            VersionId::V3 => true,
        }
    }

    /// The conventional codebook file name, e.g. `HTF0003.json`.
    pub fn file_name(self) -> String {
        format!("HTF{:04}.json", self.tag())
    }
}

impl TryFrom<i64> for VersionId {
    type Error = HtfError;

    fn try_from(tag: i64) -> Result<Self, Self::Error> {
        VersionId::from_tag(tag)
    }
}

impl From<VersionId> for i64 {
    fn from(version: VersionId) -> i64 {
        version.tag()
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.tag())
    }
}
