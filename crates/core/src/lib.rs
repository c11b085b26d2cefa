//! Core types and errors for the Rolodex person directory
//!
//! This crate defines the foundational types used throughout the system:
//! - PersonId: Opaque unique identifier for person records
//! - Person: One directory record
//! - Address: Derived street/city view over a record
//! - NewPerson: Validated insert arguments
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::{Address, NewPerson, Person, PersonId};
