//! This module contains the kernel that derives a canonical, script-stable
//! identifier from symbol indices.
//!
//! The ID is the syllabary rendering with words closed by `_` and syllable runs
//! concatenated. Punctuation and control codes contribute nothing, so the same
//! words typed with different spacing, punctuation or capitalization share an ID.

use crate::table::SymbolTable;
use crate::types::SymbolKind;

const SEPARATOR: char = '_';

/// Builds the canonical ID for `symbols` (the indices after the version tag).
///
/// Indices outside the table are skipped entirely, like punctuation.
pub fn canonical_id(symbols: &[i64], table: &SymbolTable) -> String {
    let mut id = String::new();
    let mut prev_kind: Option<SymbolKind> = None;

    for &index in symbols {
        let Some(entry) = table.get(index) else {
            continue;
        };

        match entry.kind {
            SymbolKind::Punctuation | SymbolKind::Control => continue,
            SymbolKind::Word => {
                if prev_kind == Some(SymbolKind::Syllable) {
                    id.push(SEPARATOR);
                }
                id.push_str(&entry.syllabary);
                id.push(SEPARATOR);
            }
            SymbolKind::Syllable => id.push_str(&entry.syllabary),
            SymbolKind::Illegal => {}
        }
        prev_kind = Some(entry.kind);
    }

    if id.ends_with(SEPARATOR) {
        id.pop();
    }
    id
}
