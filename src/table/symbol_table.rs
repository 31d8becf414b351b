//! The validated, indexed, read-only form of one codebook version.
//!
//! A `SymbolTable` is built once from a `TableDocument` and never mutated, so a
//! single `Arc<SymbolTable>` can be shared by every encoder and decoder thread.
//! The matcher indexes for both tokenization strategies are precomputed here.

use crate::error::HtfError;
use crate::table::format::{TableDocument, CAPITAL_CLOSE, CAPITAL_OPEN, ILLEGAL_INDEX};
use crate::types::{SymbolEntry, SymbolKind, VersionId};
use std::cmp::Reverse;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SymbolTable {
    version: VersionId,
    entries: Vec<SymbolEntry>,
    /// Word and syllable indices, longest `latin` first, table order within a length.
    longest_first: Vec<usize>,
    /// Lower-cased `latin` of word entries -> index. First entry wins.
    words: HashMap<String, usize>,
    /// Lower-cased `latin` of syllable entries -> index. First entry wins.
    syllables: HashMap<String, usize>,
    /// Single-character punctuation -> index. First entry wins.
    punctuation: HashMap<char, usize>,
}

impl SymbolTable {
    /// Validates a codebook document and builds the lookup indexes for `version`.
    pub fn from_document(version: VersionId, doc: TableDocument) -> Result<Self, HtfError> {
        let fail = |reason: String| HtfError::TableFormat {
            version: doc.version,
            reason,
        };

        if doc.version != version.tag() {
            return Err(fail(format!(
                "document declares version {} but was registered as {}",
                doc.version, version
            )));
        }
        validate_reserved_entries(version, &doc.encodings).map_err(fail)?;

        let entries = doc.encodings;

        let mut longest_first: Vec<usize> = entries
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, e)| e.kind.is_lexical() && !e.latin.is_empty())
            .map(|(i, _)| i)
            .collect();
        // Stable: equal lengths keep table order.
        longest_first.sort_by_key(|&i| Reverse(entries[i].latin.chars().count()));

        let mut words = HashMap::new();
        let mut syllables = HashMap::new();
        let mut punctuation = HashMap::new();
        for (i, entry) in entries.iter().enumerate().skip(1) {
            match entry.kind {
                SymbolKind::Word if !entry.latin.is_empty() => {
                    words.entry(entry.latin.to_lowercase()).or_insert(i);
                }
                SymbolKind::Syllable if !entry.latin.is_empty() => {
                    syllables.entry(entry.latin.to_lowercase()).or_insert(i);
                }
                SymbolKind::Punctuation => {
                    let mut chars = entry.latin.chars();
                    if let (Some(c), None) = (chars.next(), chars.next()) {
                        punctuation.entry(c).or_insert(i);
                    }
                }
                _ => {}
            }
        }

        log::debug!(
            "Indexed HTF table {}: {} entries, {} words, {} syllables, {} punctuation marks",
            version,
            entries.len(),
            words.len(),
            syllables.len(),
            punctuation.len()
        );

        Ok(Self {
            version,
            entries,
            longest_first,
            words,
            syllables,
            punctuation,
        })
    }

    pub fn version(&self) -> VersionId {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated table: index 0 is mandatory.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[SymbolEntry] {
        &self.entries
    }

    /// Strict lookup: `None` for negative or out-of-range indices.
    pub fn get(&self, index: i64) -> Option<&SymbolEntry> {
        usize::try_from(index).ok().and_then(|i| self.entries.get(i))
    }

    /// Lenient lookup: anything outside the table resolves to the illegal entry.
    pub fn lookup(&self, index: i64) -> &SymbolEntry {
        self.get(index).unwrap_or_else(|| self.illegal())
    }

    /// The placeholder entry at index 0.
    pub fn illegal(&self) -> &SymbolEntry {
        &self.entries[ILLEGAL_INDEX as usize]
    }

    /// Returns `true` if `index` is a capital-open/close code in this version.
    pub fn is_capital_control(&self, index: i64) -> bool {
        self.version.has_capital_controls() && (index == CAPITAL_OPEN || index == CAPITAL_CLOSE)
    }

    //==============================================================================
    // Matcher indexes (crate-internal, used by the tokenizer kernels)
    //==============================================================================

    /// Candidates for flat longest-match, as `(index, latin)`.
    pub(crate) fn longest_first(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.longest_first
            .iter()
            .map(move |&i| (i, self.entries[i].latin.as_str()))
    }

    pub(crate) fn word_index(&self, lowercased: &str) -> Option<usize> {
        self.words.get(lowercased).copied()
    }

    pub(crate) fn syllable_index(&self, lowercased: &str) -> Option<usize> {
        self.syllables.get(lowercased).copied()
    }

    pub(crate) fn punctuation_index(&self, c: char) -> Option<usize> {
        self.punctuation.get(&c).copied()
    }
}

/// Checks the reserved slots: 0 is illegal everywhere, 1 and 2 are the only
/// control codes and only exist where the version has capital controls.
fn validate_reserved_entries(version: VersionId, entries: &[SymbolEntry]) -> Result<(), String> {
    match entries.first() {
        None => return Err("codebook has no entries".to_string()),
        Some(e) if e.kind != SymbolKind::Illegal => {
            return Err(format!("entry 0 must be illegal, found {:?}", e.kind));
        }
        Some(_) => {}
    }

    if version.has_capital_controls() {
        for reserved in [CAPITAL_OPEN, CAPITAL_CLOSE] {
            match entries.get(reserved as usize) {
                Some(e) if e.kind == SymbolKind::Control => {}
                Some(e) => {
                    return Err(format!(
                        "entry {} must be a control code, found {:?}",
                        reserved, e.kind
                    ))
                }
                None => return Err(format!("entry {} (control code) is missing", reserved)),
            }
        }
    }

    let first_free = if version.has_capital_controls() { 3 } else { 0 };
    if let Some((i, _)) = entries
        .iter()
        .enumerate()
        .skip(first_free)
        .find(|(_, e)| e.kind == SymbolKind::Control)
    {
        return Err(format!("unexpected control code at entry {}", i));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(kind: SymbolKind, latin: &str) -> SymbolEntry {
        SymbolEntry {
            kind,
            latin: latin.to_string(),
            abugida: String::new(),
            syllabary: latin.to_uppercase(),
        }
    }

    fn v3_doc(extra: Vec<SymbolEntry>) -> TableDocument {
        let mut encodings = vec![
            entry(SymbolKind::Illegal, "?"),
            entry(SymbolKind::Control, ""),
            entry(SymbolKind::Control, ""),
        ];
        encodings.extend(extra);
        TableDocument {
            version: 3,
            encodings,
        }
    }

    #[test]
    fn test_lookup_falls_back_to_illegal() {
        let table = SymbolTable::from_document(
            VersionId::V3,
            v3_doc(vec![entry(SymbolKind::Word, "kon")]),
        )
        .unwrap();
        assert_eq!(table.lookup(3).latin, "kon");
        assert_eq!(table.lookup(4).kind, SymbolKind::Illegal);
        assert_eq!(table.lookup(-1).kind, SymbolKind::Illegal);
        assert!(table.get(-1).is_none());
        assert!(table.get(99).is_none());
    }

    #[test]
    fn test_longest_first_is_stable() {
        let table = SymbolTable::from_document(
            VersionId::V3,
            v3_doc(vec![
                entry(SymbolKind::Syllable, "ab"),
                entry(SymbolKind::Word, "abc"),
                entry(SymbolKind::Punctuation, "..."),
                entry(SymbolKind::Syllable, "cd"),
                entry(SymbolKind::Syllable, "a"),
            ]),
        )
        .unwrap();
        let order: Vec<usize> = table.longest_first().map(|(i, _)| i).collect();
        assert_eq!(order, vec![4, 3, 6, 7]);
    }

    #[test]
    fn test_indexes_are_lowercased_and_first_wins() {
        let table = SymbolTable::from_document(
            VersionId::V3,
            v3_doc(vec![
                entry(SymbolKind::Word, "Fû"),
                entry(SymbolKind::Word, "fû"),
                entry(SymbolKind::Punctuation, ","),
                entry(SymbolKind::Punctuation, "--"),
            ]),
        )
        .unwrap();
        assert_eq!(table.word_index("fû"), Some(3));
        assert_eq!(table.punctuation_index(','), Some(5));
        assert_eq!(table.punctuation_index('-'), None);
    }

    #[test]
    fn test_v3_requires_control_codes() {
        let doc = TableDocument {
            version: 3,
            encodings: vec![
                entry(SymbolKind::Illegal, "?"),
                entry(SymbolKind::Word, "kon"),
                entry(SymbolKind::Control, ""),
            ],
        };
        let err = SymbolTable::from_document(VersionId::V3, doc).unwrap_err();
        assert!(err.to_string().contains("entry 1 must be a control code"));
    }

    #[test]
    fn test_v2_rejects_control_codes() {
        let doc = TableDocument {
            version: 2,
            encodings: vec![
                entry(SymbolKind::Illegal, "?"),
                entry(SymbolKind::Control, ""),
            ],
        };
        assert!(matches!(
            SymbolTable::from_document(VersionId::V2, doc),
            Err(HtfError::TableFormat { version: 2, .. })
        ));
    }

    #[test]
    fn test_rejects_missing_illegal_entry_and_version_mismatch() {
        let doc = TableDocument {
            version: 2,
            encodings: vec![entry(SymbolKind::Word, "kon")],
        };
        assert!(SymbolTable::from_document(VersionId::V2, doc).is_err());

        let doc = TableDocument {
            version: 2,
            encodings: vec![entry(SymbolKind::Illegal, "?")],
        };
        let err = SymbolTable::from_document(VersionId::V3, doc).unwrap_err();
        assert!(err.to_string().contains("registered as v3"));

        let doc = TableDocument {
            version: 2,
            encodings: vec![],
        };
        assert!(SymbolTable::from_document(VersionId::V2, doc).is_err());
    }

    #[test]
    fn test_capital_controls_only_in_v3() {
        let v3 = SymbolTable::from_document(VersionId::V3, v3_doc(vec![])).unwrap();
        assert!(v3.is_capital_control(1));
        assert!(v3.is_capital_control(2));
        assert!(!v3.is_capital_control(0));

        let v2 = SymbolTable::from_document(
            VersionId::V2,
            TableDocument {
                version: 2,
                encodings: vec![
                    entry(SymbolKind::Illegal, "?"),
                    entry(SymbolKind::Word, "kon"),
                ],
            },
        )
        .unwrap();
        assert!(!v2.is_capital_control(1));
    }
}
