// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the HTF-INT library. It owns the
// version tag: it reads or writes position 0 of an `EncodedForm`, resolves the
// matching `SymbolTable` from the injected `TableRegistry`, and hands the bare
// symbol indices to the pure, table-bound `kernels`.
//
// Data Flow (Encoding):
//
//   1. [Stateful Facade (HtfCodec)]          -> Receives text, picks the version
//         |
//   2. [Stateless API (encode)]              -> Resolves the table, writes the tag
//         |
//   3. [Kernels (dispatch_encode)]           -> longest_match (v2) | letter_run (v3)
//
// Data Flow (Decoding / Canonical IDs):
//
//   1. [Stateful Facade (HtfCodec)]          -> Receives an `EncodedForm`
//         |
//   2. [Stateless API (decode / to_canonical_id)]
//         |  `-> reads the tag, resolves the table (UnknownVersion is fatal,
//         |      a caller-expected mismatch only warns)
//         |
//   3. [Kernels (render / canonical_id)]     -> Never fail; out-of-range -> illegal
//
// ====================================================================================
pub mod codec;
pub mod stateless_api;

// --- High-Level Stateful API ---
pub use codec::HtfCodec;

// --- Low-Level Stateless API ---
pub use stateless_api::{
    decode, decode_expecting, encode, load_table, to_canonical_id, DecodeReport, VersionMismatch,
};
