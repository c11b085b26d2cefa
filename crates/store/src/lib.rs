//! In-memory record store for the Rolodex person directory
//!
//! This crate implements the authoritative record collection:
//! - RecordStore: RwLock-guarded, insertion-ordered collection with a
//!   name index, enforcing the unique-name invariant on insert
//! - seed: the fixed initial record set loaded at construction
//!
//! The store is the sole mutator and reader of the collection. Callers
//! hold it behind an `Arc` and hand it to the boundary layer explicitly;
//! there is no ambient global state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod records;
pub mod seed;

pub use records::RecordStore;
