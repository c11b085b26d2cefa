//! Rolodex - embedded in-memory person directory with a GraphQL surface
//!
//! Rolodex holds an append-only, process-lifetime collection of person
//! records and exposes it through a statically typed GraphQL
//! query/mutation schema that executes fully in-process.
//!
//! # Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use rolodex::{build_schema, RecordStore};
//!
//! // Seeded store, injected into the schema explicitly
//! let store = Arc::new(RecordStore::seeded());
//! let schema = build_schema(Arc::clone(&store));
//!
//! let response = schema.execute("{ personCount }").await;
//! ```
//!
//! # Architecture
//!
//! The [`RecordStore`] is the sole owner of the collection; the GraphQL
//! layer translates operations into store calls and never holds state of
//! its own. Transport and process bootstrap are the caller's concern.

// Re-export the public API
pub use rolodex_api::{build_schema, DirectorySchema, GraphQLAddress, GraphQLPerson};
pub use rolodex_core::{Address, Error, NewPerson, Person, PersonId, Result};
pub use rolodex_store::RecordStore;
