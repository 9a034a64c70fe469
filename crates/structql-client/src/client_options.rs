use crate::ClientError;
use crate::GraphQLErrors;
use reqwest::StatusCode;
use reqwest::header::HeaderMap;
use std::fmt;
use std::sync::Arc;

/// Maps the `errors` of a GraphQL response, along with the HTTP status of
/// the response, to the error returned to the caller.
pub type ErrorMapper =
    Arc<dyn Fn(StatusCode, GraphQLErrors) -> ClientError + Send + Sync>;

pub(crate) fn default_error_mapper() -> ErrorMapper {
    Arc::new(|_status, errors| ClientError::GraphQL(errors))
}

/// Configuration for a [`Client`](crate::Client). Every option is optional;
/// `ClientOptions::default()` uses a fresh `reqwest::Client`, no extra
/// headers, and returns GraphQL errors as [`ClientError::GraphQL`].
#[derive(Clone, Default)]
pub struct ClientOptions {
    /// Headers sent with every request. Per-request headers override these.
    pub default_headers: HeaderMap,

    pub error_mapper: Option<ErrorMapper>,

    pub http_client: Option<reqwest::Client>,
}
impl ClientOptions {
    pub fn with_default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    pub fn with_error_mapper<F>(mut self, error_mapper: F) -> Self
    where
        F: Fn(StatusCode, GraphQLErrors) -> ClientError + Send + Sync + 'static,
    {
        self.error_mapper = Some(Arc::new(error_mapper));
        self
    }

    pub fn with_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }
}
impl fmt::Debug for ClientOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientOptions")
            .field("default_headers", &self.default_headers)
            .field("error_mapper", &self.error_mapper.as_ref().map(|_| ".."))
            .field("http_client", &self.http_client)
            .finish()
    }
}
