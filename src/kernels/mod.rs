//! This module serves as the public API and dispatcher for the collection of all
//! pure, stateless codec kernels.
//!
//! It declares all kernel sub-modules and provides the unified `dispatch_encode`
//! function, which picks the tokenization strategy a table's version requires.
//! Every kernel works against an already-resolved `SymbolTable`; version-tag
//! handling and table selection belong to the `bridge`.

use crate::table::SymbolTable;
use crate::types::{EncodedForm, TokenizerStrategy};

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Tokenizers
pub mod letter_run;
pub mod longest_match;

/// Rendering
pub mod canonical_id;
pub mod render;

//==================================================================================
// 2. Public API (Unified Dispatcher)
//==================================================================================

/// Tokenizes `text` against `table` with the strategy of the table's version,
/// appending symbol indices to `output`. The version tag is the caller's job.
pub fn dispatch_encode(text: &str, table: &SymbolTable, output: &mut EncodedForm) {
    match table.version().strategy() {
        TokenizerStrategy::LongestMatch => longest_match::encode(text, table, output),
        TokenizerStrategy::LetterRun => letter_run::encode(text, table, output),
    }
}
