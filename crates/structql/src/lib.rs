//! Build GraphQL queries and mutations from annotated Rust types.
//!
//! ```rust
//! use structql::Selectable;
//!
//! #[derive(Selectable)]
//! pub struct Entity {
//!     pub id: String,
//!     pub field_one: String,
//!     #[structql("@skip($hideTwo)")]
//!     pub field_two: String,
//! }
//!
//! #[derive(Selectable)]
//! pub struct GetEntity {
//!     #[structql("getEntity(id:$id<ID!>)")]
//!     pub get_entity: Entity,
//! }
//!
//! let query = structql::marshal_query::<GetEntity>(None).unwrap();
//! assert_eq!(query, concat!(
//!     "query($id: ID!, $hideTwo: Boolean!) {\n",
//!     "getEntity(id: $id) {\n",
//!     "id\n",
//!     "fieldOne\n",
//!     "fieldTwo @skip(if: $hideTwo)\n",
//!     "}\n",
//!     "}",
//! ));
//!
//! // Only render `fieldOne` (and any field that is always kept).
//! let fields = structql::Fieldset::from_url_query_param("fieldOne");
//! let query = structql::marshal_query::<GetEntity>(fields.as_ref()).unwrap();
//! assert_eq!(query, concat!(
//!     "query($id: ID!, $hideTwo: Boolean!) {\n",
//!     "getEntity(id: $id) {\n",
//!     "fieldOne\n",
//!     "}\n",
//!     "}",
//! ));
//! ```
//!
//! With the `client` feature (enabled by default), [`client::Client`] sends
//! these operations to a GraphQL server and decodes the responses.

pub use structql_core::*;

/// Derives [`Selectable`] for a struct. See the macro's documentation for
/// the supported `#[structql("...")]` tags.
#[cfg(feature = "macros")]
pub use structql_macros::Selectable;

/// An HTTP client for running marshaled operations against a GraphQL server.
#[cfg(feature = "client")]
pub mod client {
    pub use structql_client::*;
}
