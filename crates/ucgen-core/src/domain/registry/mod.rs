//! Registry store: idempotent patching of generated registry files.
//!
//! A registry file (the symbol table, the container bindings) holds named
//! regions delimited by marker comments:
//!
//! ```text
//! export const SYMBOLS = {
//!   // @ucgen-begin api-symbols
//!   PRODUCTS: Symbol.for("PRODUCTS"),
//!   // @ucgen-end api-symbols
//! };
//! ```
//!
//! The file is parsed once into a [`RegistryDocument`], entries are inserted
//! into the in-memory groups, and the document is serialised back. Text
//! outside the regions is never touched, and inserting a key a group already
//! holds does nothing.
//!
//! The marker spelling and key recognition live in [`syntax`]; the document
//! model never looks at the text of a line beyond what the syntax tells it.

mod document;
mod error;
mod kinds;
mod syntax;

pub use document::{
    EntryGroup, GroupAnchor, GroupPlacement, InsertOutcome, RegistryDocument, RegistryEntry,
};
pub use error::RegistryIssue;
pub use kinds::{
    API_SYMBOLS, IMPORTS, Insertion, PatchSummary, REGISTRATIONS, RegistryKind, USE_CASE_SYMBOLS,
};
pub use syntax::{Marker, RegistrySyntax, TsMarkerSyntax};
