//! This module contains the letter-run tokenizer used by the current (version 3)
//! codebook.
//!
//! Input is split into maximal runs of letters and single non-letter characters.
//! A letter run is encoded as one whole word when the codebook has it, and is
//! otherwise broken into syllables greedily (longest of 3, 2, 1 characters first).
//! Case is folded before matching; an uppercase run start is recorded instead
//! with a capital region (capital-open ... capital-close). Unencodable characters
//! become the illegal index and encoding carries on with the next character.

use crate::table::{SymbolTable, CAPITAL_CLOSE, CAPITAL_OPEN, ILLEGAL_INDEX};
use crate::types::EncodedForm;

/// Longest syllable, in characters, the greedy decomposition will try.
const MAX_SYLLABLE_CHARS: usize = 3;

//==================================================================================
// 1. Character Classification
//==================================================================================

/// Returns `true` for ASCII letters and the accented Latin letters
/// (Latin-1 Supplement through Latin Extended-B) the language spells with.
pub fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{00C0}'..='\u{024F}').contains(&c) && c != '×' && c != '÷')
}

//==================================================================================
// 2. Core Logic
//==================================================================================

/// Encodes one maximal letter run: a whole word if possible, else syllables.
fn encode_run(run: &[char], table: &SymbolTable, output: &mut EncodedForm) {
    // Lower-cased per character so positions stay aligned with `run`.
    let lowered: Vec<String> = run.iter().map(|c| c.to_lowercase().collect()).collect();

    if let Some(index) = table.word_index(&lowered.concat()) {
        output.push(index as i64);
        return;
    }

    let mut pos = 0;
    while pos < lowered.len() {
        let longest = MAX_SYLLABLE_CHARS.min(lowered.len() - pos);
        let matched = (1..=longest).rev().find_map(|len| {
            table
                .syllable_index(&lowered[pos..pos + len].concat())
                .map(|index| (index, len))
        });
        match matched {
            Some((index, len)) => {
                output.push(index as i64);
                pos += len;
            }
            None => {
                log::debug!(
                    "No {} syllable for {:?}; emitting illegal symbol",
                    table.version(),
                    run[pos]
                );
                output.push(ILLEGAL_INDEX);
                pos += 1;
            }
        }
    }
}

//==================================================================================
// 3. Public API
//==================================================================================

/// Appends the indices for `text` to `output`, including capital-region controls.
pub fn encode(text: &str, table: &SymbolTable, output: &mut EncodedForm) {
    let chars: Vec<char> = text.chars().collect();
    let mut capital_open = false;
    let mut pos = 0;

    while pos < chars.len() {
        if is_letter(chars[pos]) {
            let start = pos;
            while pos < chars.len() && is_letter(chars[pos]) {
                pos += 1;
            }
            let run = &chars[start..pos];

            if run[0].is_uppercase() && !capital_open {
                output.push(CAPITAL_OPEN);
                capital_open = true;
            }
            encode_run(run, table, output);
        } else {
            if capital_open {
                output.push(CAPITAL_CLOSE);
                capital_open = false;
            }
            let index = table
                .punctuation_index(chars[pos])
                .map_or(ILLEGAL_INDEX, |i| i as i64);
            output.push(index);
            pos += 1;
        }
    }

    if capital_open {
        output.push(CAPITAL_CLOSE);
    }
}

//==================================================================================
// 4. Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TableDocument;
    use crate::types::VersionId;

    fn v3_table() -> SymbolTable {
        let doc = TableDocument::from_json_str(include_str!(
            "../../fixtures/encodings/HTF0003.json"
        ))
        .unwrap();
        SymbolTable::from_document(VersionId::V3, doc).unwrap()
    }

    fn encode_v3(text: &str) -> Vec<i64> {
        let mut out = EncodedForm::tagged(VersionId::V3);
        encode(text, &v3_table(), &mut out);
        out.into_inner()
    }

    #[test]
    fn test_letter_classification() {
        for c in ['a', 'Z', 'î', 'Ô', 'ê', 'û', 'ŵ'] {
            assert!(is_letter(c), "{c:?} should be a letter");
        }
        for c in [' ', ',', '1', '×', '÷', '-', 'α'] {
            assert!(!is_letter(c), "{c:?} should not be a letter");
        }
    }

    #[test]
    fn test_whole_word_is_preferred() {
        // "li" is both a word (20) and a syllable (33).
        assert_eq!(encode_v3("li"), vec![3, 20]);
        assert_eq!(encode_v3("konwo"), vec![3, 24]);
    }

    #[test]
    fn test_run_falls_back_to_greedy_syllables() {
        // kul? no -> ku, lis, mus
        assert_eq!(encode_v3("kulismus"), vec![3, 26, 27, 28]);
        // môn, bil? no -> bi, li
        assert_eq!(encode_v3("mônbili"), vec![3, 31, 32, 33]);
    }

    #[test]
    fn test_capital_region_wraps_run() {
        assert_eq!(encode_v3("Kon"), vec![3, 1, 23, 2]);
        assert_eq!(encode_v3("Kon li"), vec![3, 1, 23, 2, 3, 20]);
        assert_eq!(encode_v3("li Kon,"), vec![3, 20, 3, 1, 23, 2, 4]);
    }

    #[test]
    fn test_uppercase_inside_run_does_not_open_region() {
        assert_eq!(encode_v3("kON"), vec![3, 23]);
    }

    #[test]
    fn test_illegal_characters_are_skipped() {
        // x has no syllable; the run keeps going after it.
        assert_eq!(encode_v3("xa"), vec![3, 0, 39]);
        // Unknown punctuation also degrades to 0 without stopping.
        assert_eq!(encode_v3("kon!li"), vec![3, 23, 0, 20]);
        assert_eq!(encode_v3("Xa!"), vec![3, 1, 0, 39, 2, 0]);
    }

    #[test]
    fn test_empty_input_emits_nothing() {
        assert_eq!(encode_v3(""), vec![3]);
    }
}
