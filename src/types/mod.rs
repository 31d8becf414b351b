//! This module defines the core, strongly-typed data representations used
//! throughout the HTF-INT codec.
//!
//! It replaces magic numbers and free-form strings with closed enums: the
//! codebook version (`VersionId`), the output script (`Script`) and the
//! symbol kind (`SymbolKind`), plus the persisted `EncodedForm`.

pub mod encoded_form;
pub mod script;
pub mod symbol;
pub mod version_id;

// Re-export the main type(s) for easier access.
pub use encoded_form::EncodedForm;
pub use script::Script;
pub use symbol::{SymbolEntry, SymbolKind};
pub use version_id::{TokenizerStrategy, VersionId};
