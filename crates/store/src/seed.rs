//! Fixed initial record set
//!
//! The store ships with three seeded contacts. Ids are generated at seed
//! time like any other insert; the seed data carries no ids of its own.

use rolodex_core::NewPerson;

use crate::records::RecordStore;

/// The fixed initial contacts, in seed order
pub fn initial_records() -> Vec<NewPerson> {
    vec![
        NewPerson::new(
            "Pepe",
            Some("034-1234567".to_string()),
            "Calle Frontend",
            "Barcelona",
        ),
        NewPerson::new(
            "Antía",
            Some("044-123456".to_string()),
            "Avenida Fullstack",
            "Cuntis",
        ),
        NewPerson::new("Romain", None, "Pasaje Testing", "Marsella"),
    ]
}

impl RecordStore {
    /// Create a RecordStore preloaded with the fixed initial contacts
    ///
    /// Seed names are distinct by construction, so seeding cannot hit the
    /// duplicate-name rejection.
    pub fn seeded() -> Self {
        let store = Self::new();
        for args in initial_records() {
            // The seed table is static, valid, and duplicate-free; a
            // failure here is a bug in the table itself.
            store
                .insert(args)
                .expect("seed records are valid and distinct");
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_store_has_three_records() {
        let store = RecordStore::seeded();
        assert_eq!(store.count(), 3);
        let names: Vec<_> = store.list_all().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["Pepe", "Antía", "Romain"]);
    }

    #[test]
    fn test_seeded_romain_has_no_phone() {
        let store = RecordStore::seeded();
        let romain = store.find_by_name("Romain").unwrap();
        assert_eq!(romain.phone, None);
        assert_eq!(romain.city, "Marsella");
    }

    #[test]
    fn test_seeded_ids_are_distinct() {
        let store = RecordStore::seeded();
        let records = store.list_all();
        assert_ne!(records[0].id, records[1].id);
        assert_ne!(records[1].id, records[2].id);
        assert_ne!(records[0].id, records[2].id);
    }
}
