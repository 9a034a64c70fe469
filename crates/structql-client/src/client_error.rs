use crate::GraphQLErrors;
use reqwest::StatusCode;
use structql_core::MarshalError;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to decode the `data` of the GraphQL response: {0}")]
    DecodeData(#[source] serde_json::Error),

    /// The server responded with a non-empty `errors` list and no
    /// [`ErrorMapper`](crate::ErrorMapper) was configured.
    #[error("{0}")]
    GraphQL(GraphQLErrors),

    #[error("HTTP request to the GraphQL server failed: {0}")]
    Http(#[from] reqwest::Error),

    /// An error produced by a custom [`ErrorMapper`](crate::ErrorMapper).
    #[error(transparent)]
    Mapped(Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to marshal the operation: {0}")]
    Marshal(#[from] MarshalError),

    #[error(
        "Unknown response format with status {status} received from the \
        GraphQL server: {body}",
    )]
    UnknownResponseFormat {
        status: StatusCode,
        body: String,
    },
}
impl ClientError {
    /// The GraphQL errors carried by this error, if it is a
    /// [`ClientError::GraphQL`].
    pub fn graphql_errors(&self) -> Option<&GraphQLErrors> {
        match self {
            Self::GraphQL(errors) => Some(errors),
            _ => None,
        }
    }
}
