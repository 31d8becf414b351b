// In: src/rekey/model.rs

//! Defines the submission records the re-keying pass reads and the published
//! index shapes it produces. Field names follow the stored JSON (camelCase in,
//! `$pos`/`$desc`/camelCase out).

use crate::types::EncodedForm;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

//==================================================================================
// I. Stored Submissions
//==================================================================================

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Author {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub id: String,
}

impl Author {
    /// `lowercase(system):id`, or `None` if either part is empty.
    pub fn key(&self) -> Option<String> {
        if self.system.is_empty() || self.id.is_empty() {
            return None;
        }
        Some(format!("{}:{}", self.system.to_lowercase(), self.id))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Term {
    pub id: String,
    pub pos: String,
    pub description: String,
}

/// A proposed translation of a term, carrying its HTF-INT contents.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    /// The submitter-side ID; replaced by the canonical ID when published.
    pub id: String,
    pub term_id: String,
    pub contents: EncodedForm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// The entry this one modifies, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VoteType {
    Overall,
    Minimal,
    Specific,
    Humorous,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    pub term_id: String,
    pub entry_id: String,
    pub vote_type: VoteType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voted: Option<String>,
}

/// One submission document as stored by the moderation workflow.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default)]
    pub new_terms: Vec<Term>,
    #[serde(default)]
    pub new_entries: Vec<Entry>,
    #[serde(default)]
    pub votes: Vec<Vote>,
}

/// A submission together with the file name it was stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    pub file_name: String,
    pub submission: Submission,
}

//==================================================================================
// II. Published Indexes
//==================================================================================

/// A published entry, keyed by its canonical ID inside a `TermRecord`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublishedEntry {
    pub submitter: String,
    pub created: String,
    pub contents: EncodedForm,
    pub source_file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
}

/// A term and its entries: `{ "$pos": .., "$desc": .., "<canonical id>": {..} }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TermRecord {
    #[serde(rename = "$pos")]
    pub pos: String,
    #[serde(rename = "$desc")]
    pub desc: String,
    #[serde(flatten)]
    pub entries: BTreeMap<String, PublishedEntry>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VoteRecord {
    /// Canonical ID of the entry voted for (or the raw ID if it could not be resolved).
    pub entry: String,
    pub voted: String,
}

/// `term id -> author key -> vote type -> votes`.
pub type VoteIndex = BTreeMap<String, BTreeMap<String, BTreeMap<VoteType, Vec<VoteRecord>>>>;

/// The result of a re-keying pass, ready to be written as `entries.json` / `votes.json`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AggregateOutput {
    pub entries: BTreeMap<String, TermRecord>,
    pub votes: VoteIndex,
}
