//! End-to-end seeded scenario
//!
//! Drives the full stack - seeded store, schema, resolvers, error
//! mapping - through the public facade, following the lifecycle of one
//! client session.

use std::sync::Arc;

use serde_json::{json, Value};

use rolodex::{build_schema, RecordStore};

#[tokio::test]
async fn test_seeded_directory_session() {
    let store = Arc::new(RecordStore::seeded());
    let schema = build_schema(Arc::clone(&store));

    // Three seeded records
    let response = schema.execute("{ personCount }").await;
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["data"]["personCount"], json!(3));

    // Romain was seeded without a phone
    let response = schema
        .execute(r#"{ findPerson(name: "Romain") { phone city } }"#)
        .await;
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(body["data"]["findPerson"]["phone"], Value::Null);
    assert_eq!(body["data"]["findPerson"]["city"], json!("Marsella"));

    // Adding Ana grows the directory to four
    let response = schema
        .execute(
            r#"mutation {
                addPerson(name: "Ana", street: "Calle X", city: "Madrid") {
                    id phone
                }
            }"#,
        )
        .await;
    let body = serde_json::to_value(&response).unwrap();
    let ana_id = body["data"]["addPerson"]["id"]
        .as_str()
        .expect("fresh id")
        .to_string();
    assert!(!ana_id.is_empty());
    assert_eq!(body["data"]["addPerson"]["phone"], Value::Null);
    assert_eq!(store.count(), 4);

    // The new id is unique across the whole directory
    let ids: Vec<_> = store
        .list_all()
        .into_iter()
        .map(|p| p.id.to_string())
        .collect();
    assert_eq!(ids.iter().filter(|id| **id == ana_id).count(), 1);

    // A second Ana is rejected as user input, with the name as context
    let response = schema
        .execute(r#"mutation { addPerson(name: "Ana", street: "Otra", city: "Vigo") { id } }"#)
        .await;
    let body = serde_json::to_value(&response).unwrap();
    assert_eq!(
        body["errors"][0]["extensions"]["invalidArgs"],
        json!("Ana")
    );
    assert_eq!(body["errors"][0]["extensions"]["code"], json!("BAD_USER_INPUT"));
    assert_eq!(store.count(), 4);

    // The directory still answers normally afterwards
    let response = schema.execute("{ allPersons { name } }").await;
    let body = serde_json::to_value(&response).unwrap();
    let names: Vec<_> = body["data"]["allPersons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Pepe", "Antía", "Romain", "Ana"]);
}
