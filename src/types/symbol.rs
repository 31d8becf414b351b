//! A single codebook entry and its kind.

use crate::types::Script;
use serde::{Deserialize, Serialize};

/// What a codebook entry stands for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// The placeholder at index 0, substituted for anything unencodable.
    Illegal,
    Word,
    Syllable,
    Punctuation,
    /// Capital-open / capital-close markers (version 3 onward).
    Control,
}

impl SymbolKind {
    /// Returns `true` for kinds that carry spoken content (and thus take part in
    /// capitalization and canonical IDs).
    pub fn is_lexical(self) -> bool {
        matches!(self, SymbolKind::Word | SymbolKind::Syllable)
    }
}

/// One symbol of a codebook. Its position in the table is its integer code.
///
/// The serialized shape matches the codebook documents:
/// `{ "type": "word", "latin": "..", "abugida": "..", "syllabary": ".." }`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub latin: String,
    #[serde(default)]
    pub abugida: String,
    #[serde(default)]
    pub syllabary: String,
}

impl SymbolEntry {
    /// The rendering of this symbol in `script`.
    pub fn render(&self, script: Script) -> &str {
        match script {
            Script::Latin => &self.latin,
            Script::Abugida => &self.abugida,
            Script::Syllabary => &self.syllabary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_uses_type_key() {
        let json = r#"{"type":"syllable","latin":"ku","abugida":"k-u","syllabary":"Kr"}"#;
        let entry: SymbolEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, SymbolKind::Syllable);
        assert_eq!(entry.render(Script::Latin), "ku");
        assert_eq!(entry.render(Script::Abugida), "k-u");
        assert_eq!(entry.render(Script::Syllabary), "Kr");
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let json = r#"{"type":"glyph","latin":"x"}"#;
        assert!(serde_json::from_str::<SymbolEntry>(json).is_err());
    }
}
