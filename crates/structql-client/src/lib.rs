//! An HTTP client that sends operations marshaled from
//! [`Selectable`](structql_core::Selectable) types to a GraphQL server and
//! decodes the `data` of each response back into the same type.

mod client;
mod client_error;
mod client_options;
mod graphql_error;
mod graphql_request;
mod graphql_response;
mod operation;

pub use client::Client;
pub use client_error::ClientError;
pub use client_options::ClientOptions;
pub use client_options::ErrorMapper;
pub use graphql_error::GraphQLError;
pub use graphql_error::GraphQLErrors;
pub use graphql_error::PathSegment;
pub use graphql_request::GraphQLRequest;
pub use graphql_response::GraphQLResponse;
pub use operation::Operation;
