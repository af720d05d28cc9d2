//! # nephra-pharma
//!
//! Drug classification and interaction detection for the NEPHRA engine.
//!
//! Both reference datasets — the class lexicon and the class-pair
//! interaction table — are TOML documents loaded once into immutable lookup
//! structures at process start and never mutated. Embedded reference copies
//! ship with the crate (`DrugLexicon::builtin`, `InteractionTable::builtin`);
//! deployments can load replacements from files instead.

pub mod interactions;
pub mod lexicon;

pub use interactions::InteractionTable;
pub use lexicon::DrugLexicon;
