//! RecordStore: RwLock-guarded record collection with a name index
//!
//! This module implements the record collection using:
//! - `Vec<Person>` for insertion-ordered storage
//! - `HashMap<String, usize>` as a secondary index from name to position
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **Append-only**: records are never updated or deleted within a
//!   process lifetime; the only transition is append.
//! - **Atomic insert**: the duplicate-name check, id generation, append,
//!   and index update all happen under one write lock, so concurrent
//!   inserts of the same name can never both succeed and readers never
//!   observe a partially appended record.
//! - **Copy-on-read**: `list_all` returns an owned snapshot; mutating it
//!   cannot affect store state.
//! - **Name index**: the index is updated inside the same write lock as
//!   the vector, keeping both views consistent at every observation point.

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::debug;

use rolodex_core::{Address, Error, NewPerson, Person, PersonId, Result};

/// Collection plus its name index, guarded as one unit
#[derive(Debug, Default)]
struct Inner {
    /// Records in insertion order
    records: Vec<Person>,
    /// Secondary index: name -> position in `records`
    by_name: HashMap<String, usize>,
}

/// The authoritative in-memory record collection
///
/// Holds every person record for the lifetime of the process. Reads take
/// a shared lock and may run concurrently; `insert` takes the exclusive
/// lock for the whole check-generate-append unit.
///
/// # Example
///
/// ```
/// use rolodex_core::NewPerson;
/// use rolodex_store::RecordStore;
///
/// let store = RecordStore::new();
/// let ana = store
///     .insert(NewPerson::new("Ana", None, "Calle X", "Madrid"))
///     .unwrap();
/// assert_eq!(store.count(), 1);
/// assert_eq!(store.find_by_name("Ana"), Some(ana));
/// ```
#[derive(Debug, Default)]
pub struct RecordStore {
    inner: RwLock<Inner>,
}

impl RecordStore {
    /// Create a new empty RecordStore
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Current number of records
    pub fn count(&self) -> usize {
        self.inner.read().records.len()
    }

    /// All records in insertion order, as an owned snapshot
    ///
    /// The returned vector is detached from the store; mutating it has no
    /// effect on store state.
    pub fn list_all(&self) -> Vec<Person> {
        self.inner.read().records.clone()
    }

    /// Look up a record by exact name
    ///
    /// Matching is byte-exact and case-sensitive, with no normalization.
    /// A miss is a normal outcome, not an error.
    pub fn find_by_name(&self, name: &str) -> Option<Person> {
        let inner = self.inner.read();
        inner
            .by_name
            .get(name)
            .map(|&pos| inner.records[pos].clone())
    }

    /// Insert a new record
    ///
    /// Re-validates the required fields, rejects duplicate names, assigns
    /// a fresh id, and appends preserving insertion order. The whole unit
    /// runs under one write lock; a failed insert leaves the store
    /// unchanged.
    ///
    /// # Errors
    /// - [`Error::EmptyField`] if `name`, `street`, or `city` is empty
    /// - [`Error::DuplicateName`] if a record with the same name exists
    pub fn insert(&self, args: NewPerson) -> Result<Person> {
        args.validate()?;

        let mut inner = self.inner.write();
        if inner.by_name.contains_key(&args.name) {
            return Err(Error::DuplicateName { name: args.name });
        }

        let person = args.into_person(PersonId::new());
        debug!(name = %person.name, id = %person.id, "inserted person");

        let pos = inner.records.len();
        inner.by_name.insert(person.name.clone(), pos);
        inner.records.push(person.clone());
        Ok(person)
    }

    /// Project the address view from a record
    ///
    /// Pure projection over the argument's stored fields; touches no
    /// store state and never fails.
    pub fn address_of(&self, person: &Person) -> Address {
        person.address()
    }
}
