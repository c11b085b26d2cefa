//! Core types for the Rolodex directory
//!
//! This module defines the foundational types:
//! - PersonId: Opaque unique identifier for a record
//! - Person: One directory record
//! - Address: Derived street/city view over a record
//! - NewPerson: Validated insert arguments

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{Error, Result};

/// Opaque unique identifier for a person record
///
/// A PersonId is a wrapper around a UUID v4. Ids are assigned by the
/// store at insert time, are immutable thereafter, and are never reused.
/// Callers treat the string form as an opaque token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersonId(Uuid);

impl PersonId {
    /// Create a new random PersonId using UUID v4
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a PersonId from a string representation
    ///
    /// Accepts standard UUID format (with or without hyphens).
    /// Returns None if the string is not a valid UUID.
    pub fn from_string(s: &str) -> Option<Self> {
        Uuid::parse_str(s).ok().map(Self)
    }

    /// Get the raw bytes of this PersonId
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One directory record
///
/// `phone` is the only optional field. `street` and `city` together form
/// the derived [`Address`] view; the address has no identity or lifecycle
/// of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Store-assigned identifier, immutable after insert
    pub id: PersonId,
    /// Unique display name (case-sensitive exact match)
    pub name: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Street line of the address
    pub street: String,
    /// City of the address
    pub city: String,
}

impl Person {
    /// Project the address view from this record's stored fields
    pub fn address(&self) -> Address {
        Address {
            street: self.street.clone(),
            city: self.city.clone(),
        }
    }
}

/// Derived address view: street + city
///
/// Computed from a [`Person`] at read time. Two persons living on the
/// same street compare equal here; there is no address identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    /// Street line
    pub street: String,
    /// City
    pub city: String,
}

/// Validated insert arguments for a new record
///
/// This is the only way to hand data to the store: exactly the four
/// client-suppliable fields, nothing else. The id is always generated by
/// the store, never supplied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    /// Unique display name
    pub name: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Street line of the address
    pub street: String,
    /// City of the address
    pub city: String,
}

impl NewPerson {
    /// Create insert arguments
    pub fn new(
        name: impl Into<String>,
        phone: Option<String>,
        street: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone,
            street: street.into(),
            city: city.into(),
        }
    }

    /// Check that all required fields are non-empty
    ///
    /// # Errors
    /// Returns [`Error::EmptyField`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::EmptyField { field: "name" });
        }
        if self.street.is_empty() {
            return Err(Error::EmptyField { field: "street" });
        }
        if self.city.is_empty() {
            return Err(Error::EmptyField { field: "city" });
        }
        Ok(())
    }

    /// Construct the stored record with a store-assigned id
    pub fn into_person(self, id: PersonId) -> Person {
        Person {
            id,
            name: self.name,
            phone: self.phone,
            street: self.street,
            city: self.city,
        }
    }
}
