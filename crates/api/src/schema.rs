//! Schema construction and resolvers
//!
//! The store is injected once at schema build time and pulled out of the
//! request context by each resolver. Resolvers are `async` only to
//! satisfy the library interface; every store call completes without
//! suspension and no lock is held across an await point.

use std::sync::Arc;

use async_graphql::{
    Context, EmptySubscription, Error as GraphQLError, ErrorExtensions, Object, Schema,
};
use tracing::debug;

use rolodex_store::RecordStore;

use crate::objects::GraphQLPerson;

/// The complete GraphQL schema for the directory
pub type DirectorySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the given store injected as context data
pub fn build_schema(store: Arc<RecordStore>) -> DirectorySchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(store)
        .finish()
}

/// Map a store validation failure to a user-input class GraphQL error
///
/// User-input failures are safe to expose: the client gets the message
/// plus `code = BAD_USER_INPUT` and the offending value under
/// `invalidArgs`, distinct from any server-fault error.
fn user_input_error(err: rolodex_core::Error) -> GraphQLError {
    err.extend_with(|err, ext| {
        ext.set("code", "BAD_USER_INPUT");
        ext.set("invalidArgs", err.invalid_value().to_string());
    })
}

/// Root type for all queries
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Current number of records in the directory
    async fn person_count(&self, ctx: &Context<'_>) -> async_graphql::Result<i32> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(store.count() as i32)
    }

    /// All records in insertion order
    async fn all_persons(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<GraphQLPerson>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(store.list_all().into_iter().map(Into::into).collect())
    }

    /// Look up one record by exact name; a miss is null, not an error
    async fn find_person(
        &self,
        ctx: &Context<'_>,
        name: String,
    ) -> async_graphql::Result<Option<GraphQLPerson>> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        Ok(store.find_by_name(&name).map(Into::into))
    }
}

/// Root type for all mutations
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Insert a new record
    ///
    /// Fails with a user-input error when the name is taken or a required
    /// field is empty; the store is left unchanged in that case.
    async fn add_person(
        &self,
        ctx: &Context<'_>,
        name: String,
        phone: Option<String>,
        street: String,
        city: String,
    ) -> async_graphql::Result<GraphQLPerson> {
        let store = ctx.data::<Arc<RecordStore>>()?;
        let args = rolodex_core::NewPerson::new(name, phone, street, city);
        match store.insert(args) {
            Ok(person) => Ok(person.into()),
            Err(err) => {
                debug!(invalid = err.invalid_value(), "addPerson rejected");
                Err(user_input_error(err))
            }
        }
    }
}
