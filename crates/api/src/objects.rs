//! GraphQL object types
//!
//! Wrapper types over the domain records, converted with `From`. The
//! wire shape is:
//!
//! ```text
//! Person  { name: String!, phone: String, street: String!, city: String!, address: Address!, id: ID! }
//! Address { street: String!, city: String! }
//! ```
//!
//! `phone` is the only optional field anywhere in the schema. `address`
//! is projected from `street`/`city` at conversion time; it has no
//! identity of its own.

use async_graphql::{SimpleObject, ID};

use rolodex_core::{Address, Person};

/// GraphQL view of one person record
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Person")]
pub struct GraphQLPerson {
    /// Unique display name
    pub name: String,
    /// Optional phone number
    pub phone: Option<String>,
    /// Street line of the address
    pub street: String,
    /// City of the address
    pub city: String,
    /// Derived street/city view
    pub address: GraphQLAddress,
    /// Opaque record identifier
    pub id: ID,
}

impl From<Person> for GraphQLPerson {
    fn from(person: Person) -> Self {
        let address = person.address().into();
        Self {
            name: person.name,
            phone: person.phone,
            street: person.street,
            city: person.city,
            address,
            id: ID(person.id.to_string()),
        }
    }
}

/// GraphQL view of the derived address
#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Address")]
pub struct GraphQLAddress {
    /// Street line
    pub street: String,
    /// City
    pub city: String,
}

impl From<Address> for GraphQLAddress {
    fn from(address: Address) -> Self {
        Self {
            street: address.street,
            city: address.city,
        }
    }
}
