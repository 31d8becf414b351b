//! This module contains the flat longest-match tokenizer used by the legacy
//! (version 2) codebook.
//!
//! Every word and syllable is a candidate; candidates are tried longest first,
//! so the first prefix hit is the longest one. Matching is case-sensitive and
//! the first unencodable character ends the encoding: an illegal index is
//! emitted and the rest of the input is dropped.

use crate::table::{SymbolTable, ILLEGAL_INDEX};
use crate::types::EncodedForm;

//==================================================================================
// 1. Core Logic
//==================================================================================

/// Finds the longest candidate that prefixes `remaining`, as `(index, byte_len)`.
fn next_match(remaining: &str, table: &SymbolTable) -> Option<(usize, usize)> {
    table
        .longest_first()
        .find(|(_, latin)| remaining.starts_with(latin))
        .map(|(index, latin)| (index, latin.len()))
}

//==================================================================================
// 2. Public API
//==================================================================================

/// Appends the indices for `text` to `output`, stopping at the first illegal symbol.
pub fn encode(text: &str, table: &SymbolTable, output: &mut EncodedForm) {
    let mut remaining = text;
    while !remaining.is_empty() {
        match next_match(remaining, table) {
            Some((index, byte_len)) => {
                output.push(index as i64);
                remaining = &remaining[byte_len..];
            }
            None => {
                log::debug!(
                    "Unencodable input for {} at {:?}; dropping {} remaining bytes",
                    table.version(),
                    remaining.chars().next(),
                    remaining.len()
                );
                output.push(ILLEGAL_INDEX);
                break;
            }
        }
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableDocument;
    use crate::types::VersionId;

    fn v2_table() -> SymbolTable {
        let doc = TableDocument::from_json_str(include_str!(
            "../../fixtures/encodings/HTF0002.json"
        ))
        .unwrap();
        SymbolTable::from_document(VersionId::V2, doc).unwrap()
    }

    fn encode_v2(text: &str) -> Vec<i64> {
        let mut out = EncodedForm::tagged(VersionId::V2);
        encode(text, &v2_table(), &mut out);
        out.into_inner()
    }

    #[test]
    fn test_longest_candidate_wins() {
        assert_eq!(encode_v2("konwo"), vec![2, 2]);
        assert_eq!(encode_v2("kon"), vec![2, 1]);
        assert_eq!(encode_v2("konko"), vec![2, 1, 9]);
        assert_eq!(encode_v2("ôsôlê"), vec![2, 7]);
        assert_eq!(encode_v2("ôsô"), vec![2, 4, 5]);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        assert_eq!(encode_v2("Fû"), vec![2, 11]);
        assert_eq!(encode_v2("Kon"), vec![2, 0]);
    }

    #[test]
    fn test_first_illegal_character_aborts() {
        assert_eq!(encode_v2("konXkonwo"), vec![2, 1, 0]);
        // Punctuation is not a longest-match candidate.
        assert_eq!(encode_v2("ôsôlê êto"), vec![2, 7, 0]);
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert_eq!(encode_v2(""), vec![2]);
    }
}
