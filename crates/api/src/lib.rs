//! GraphQL boundary for the Rolodex person directory
//!
//! This crate translates client queries and mutations into store
//! operations:
//! - `Query.personCount` / `Query.allPersons` / `Query.findPerson`
//! - `Mutation.addPerson`
//!
//! The schema is statically typed and executable fully in-process via
//! [`async_graphql::Schema::execute`]; transport and process bootstrap
//! live outside this crate. The store is injected as schema data, never
//! reached through ambient globals.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod objects;
pub mod schema;

pub use objects::{GraphQLAddress, GraphQLPerson};
pub use schema::{build_schema, DirectorySchema, MutationRoot, QueryRoot};
