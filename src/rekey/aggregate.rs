// In: src/rekey/aggregate.rs

//! The re-keying pass: rebuilds the published entry and vote indexes from the
//! stored submissions, keying every entry by the canonical ID of its contents.
//!
//! Runs in two passes over the submissions in the order given:
//! 1. terms and entries (building the old-ID -> canonical-ID map),
//! 2. votes, resolved through that map.

use crate::bridge::HtfCodec;
use crate::error::HtfError;
use crate::rekey::model::{
    AggregateOutput, PublishedEntry, Submission, SubmissionFile, TermRecord, VoteRecord,
};
use chrono::{DateTime, NaiveDateTime, Utc};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// `sub.YYYYMMDDTHHMMSS-xxxx.json`
const FILE_STAMP_PREFIX: &str = "sub.";
const FILE_STAMP_FORMAT: &str = "%Y%m%dT%H%M%S";
const FILE_STAMP_LEN: usize = 15;
const PUBLISHED_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

//==================================================================================
// 1. Timestamps
//==================================================================================

/// Reads the submission time out of a stored file name, rendered as ISO 8601 UTC.
///
/// The stamp may appear anywhere in the name; the first well-formed one wins.
pub fn file_name_timestamp(file_name: &str) -> Option<String> {
    file_name
        .match_indices(FILE_STAMP_PREFIX)
        .find_map(|(at, _)| parse_stamp_at(file_name, at + FILE_STAMP_PREFIX.len()))
}

fn parse_stamp_at(file_name: &str, start: usize) -> Option<String> {
    let stamp = file_name.get(start..start + FILE_STAMP_LEN)?;
    if !file_name[start + FILE_STAMP_LEN..].starts_with('-') {
        return None;
    }
    // %Y alone would also accept signed or short years.
    if !stamp.bytes().all(|b| b.is_ascii_digit() || b == b'T') {
        return None;
    }
    let parsed = NaiveDateTime::parse_from_str(stamp, FILE_STAMP_FORMAT).ok()?;
    Some(parsed.format(PUBLISHED_TIME_FORMAT).to_string())
}

fn submission_timestamp(file_name: &str, fallback_time: DateTime<Utc>) -> String {
    file_name_timestamp(file_name)
        .unwrap_or_else(|| fallback_time.format(PUBLISHED_TIME_FORMAT).to_string())
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Rebuilds `entries` and `votes` from `submissions`.
///
/// `fallback_time` stamps submissions whose file name carries no timestamp.
/// A stored entry whose contents cannot be keyed (unknown version, empty form)
/// fails the whole pass, naming the submission file.
pub fn aggregate(
    codec: &HtfCodec,
    submissions: &[SubmissionFile],
    fallback_time: DateTime<Utc>,
) -> Result<AggregateOutput, HtfError> {
    let mut output = AggregateOutput::default();
    // Old entry ID -> canonical ID.
    let mut id_map: HashMap<&str, String> = HashMap::new();
    // Term ID -> entries submitted for it.
    let mut entries_by_term: HashMap<&str, Vec<&str>> = HashMap::new();

    let authored: Vec<(&SubmissionFile, String, String)> = submissions
        .iter()
        .filter_map(|file| {
            let Some(author_key) = file.submission.author.as_ref().and_then(|a| a.key()) else {
                log::info!("Skipping submission {} without an author", file.file_name);
                return None;
            };
            let timestamp = submission_timestamp(&file.file_name, fallback_time);
            Some((file, author_key, timestamp))
        })
        .collect();

    log::info!(
        "Re-keying {} of {} submission(s)",
        authored.len(),
        submissions.len()
    );

    // --- First pass: terms and entries ---
    for (file, author_key, timestamp) in &authored {
        let Submission {
            new_terms,
            new_entries,
            ..
        } = &file.submission;

        for term in new_terms {
            output
                .entries
                .entry(term.id.clone())
                .or_insert_with(|| TermRecord {
                    pos: term.pos.clone(),
                    desc: term.description.clone(),
                    entries: BTreeMap::new(),
                });
        }

        for entry in new_entries {
            let canonical = codec
                .canonical_id(&entry.contents)
                .map_err(|e| HtfError::Submission {
                    file: file.file_name.clone(),
                    source: Box::new(e),
                })?;
            id_map.insert(entry.id.as_str(), canonical.clone());
            entries_by_term
                .entry(entry.term_id.as_str())
                .or_default()
                .push(entry.id.as_str());

            match output.entries.get_mut(&entry.term_id) {
                Some(record) => {
                    record.entries.insert(
                        canonical,
                        PublishedEntry {
                            submitter: author_key.clone(),
                            created: timestamp.clone(),
                            contents: entry.contents.clone(),
                            source_file: file.file_name.clone(),
                            original: entry.original.clone(),
                        },
                    );
                }
                None => log::warn!(
                    "Dropping entry {} from {}: term {} is not known yet",
                    entry.id,
                    file.file_name,
                    entry.term_id
                ),
            }
        }
    }

    // --- Second pass: votes ---
    for (file, author_key, timestamp) in &authored {
        for vote in &file.submission.votes {
            let entry = match id_map.get(vote.entry_id.as_str()) {
                Some(canonical) => canonical.clone(),
                None => match entries_by_term.get(vote.term_id.as_str()).map(Vec::as_slice) {
                    Some([only]) => {
                        let corrected = id_map.get(only).cloned().unwrap_or_default();
                        log::info!(
                            "Correcting entryId for vote on term {}. Was {}, should be {}",
                            vote.term_id,
                            vote.entry_id,
                            corrected
                        );
                        corrected
                    }
                    _ => vote.entry_id.clone(),
                },
            };

            output
                .votes
                .entry(vote.term_id.clone())
                .or_default()
                .entry(author_key.clone())
                .or_default()
                .entry(vote.vote_type)
                .or_default()
                .push(VoteRecord {
                    entry,
                    voted: timestamp.clone(),
                });
        }
    }

    log_metric!(
        "event" = "aggregate",
        "terms" = output.entries.len(),
        "entry_ids" = id_map.len(),
        "voted_terms" = output.votes.len()
    );
    Ok(output)
}

/// Reads every `*.json` submission in `dir`, ordered by file name.
pub fn load_submission_dir(dir: &Path) -> Result<Vec<SubmissionFile>, HtfError> {
    let mut names: Vec<String> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".json"))
        .collect();
    names.sort();

    names
        .into_iter()
        .map(|file_name| {
            let raw = fs::read_to_string(dir.join(&file_name))?;
            let submission = serde_json::from_str(&raw).map_err(|e| HtfError::Submission {
                file: file_name.clone(),
                source: Box::new(e.into()),
            })?;
            Ok(SubmissionFile {
                file_name,
                submission,
            })
        })
        .collect()
}
