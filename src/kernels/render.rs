//! This module contains the pure, stateless kernel that renders symbol indices
//! back into text in one of the three scripts.
//!
//! Rendering never fails: an index outside the table renders as the illegal
//! symbol. In Latin script the version 3 capital codes are invisible and only
//! upper-case the first character of the next word or syllable; in the other
//! scripts they render as their own glyphs.

use crate::table::{SymbolTable, CAPITAL_OPEN};
use crate::types::Script;
use crate::utils::push_capitalized;

//==================================================================================
// 1. Public API
//==================================================================================

/// Renders `symbols` (the indices after the version tag) into `output`.
pub fn decode(symbols: &[i64], table: &SymbolTable, script: Script, output: &mut String) {
    let mut capitalize_next = false;

    for &index in symbols {
        if script == Script::Latin && table.is_capital_control(index) {
            capitalize_next = index == CAPITAL_OPEN;
            continue;
        }

        let entry = table.lookup(index);
        let text = entry.render(script);
        if capitalize_next && entry.kind.is_lexical() {
            push_capitalized(output, text);
            capitalize_next = false;
        } else {
            output.push_str(text);
        }
    }
}

/// Convenience wrapper returning a fresh `String`.
pub fn decode_to_string(symbols: &[i64], table: &SymbolTable, script: Script) -> String {
    let mut output = String::new();
    decode(symbols, table, script, &mut output);
    output
}
