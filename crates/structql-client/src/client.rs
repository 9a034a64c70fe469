use crate::client_options::default_error_mapper;
use crate::ClientError;
use crate::ClientOptions;
use crate::ErrorMapper;
use crate::GraphQLRequest;
use crate::GraphQLResponse;
use crate::Operation;
use reqwest::StatusCode;
use reqwest::header::ACCEPT_ENCODING;
use reqwest::header::CONTENT_TYPE;
use reqwest::header::HeaderMap;
use reqwest::header::HeaderValue;
use serde::de::DeserializeOwned;
use serde_json::Map;
use serde_json::Value;
use std::fmt;
use structql_core::marshal_operation;
use structql_core::MarshaledOperation;
use structql_core::OperationKind;
use structql_core::Selectable;

type Result<T> = std::result::Result<T, ClientError>;

/// Sends operations to the GraphQL server at a fixed URL.
///
/// Cloning a `Client` is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    default_headers: HeaderMap,
    error_mapper: ErrorMapper,
    http_client: reqwest::Client,
    url: String,
}
impl Client {
    pub fn new(url: impl Into<String>, options: ClientOptions) -> Self {
        Self {
            default_headers: options.default_headers,
            error_mapper: options.error_mapper.unwrap_or_else(default_error_mapper),
            http_client: options.http_client.unwrap_or_default(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Run `operation` as a `query` and decode the response `data` into `T`.
    ///
    /// Every non-null variable declared by `T`'s tags should have a value in
    /// the operation's variables.
    pub async fn query<T>(&self, operation: &Operation<T>) -> Result<T>
    where
        T: Selectable + DeserializeOwned + 'static,
    {
        self.query_with_headers(operation, HeaderMap::new()).await
    }

    /// Like [`Client::query`], also sending `headers` with the request.
    pub async fn query_with_headers<T>(
        &self,
        operation: &Operation<T>,
        headers: HeaderMap,
    ) -> Result<T>
    where
        T: Selectable + DeserializeOwned + 'static,
    {
        self.execute_operation(OperationKind::Query, operation, headers).await
    }

    /// Run `operation` as a `mutation` and decode the response `data` into
    /// `T`.
    pub async fn mutate<T>(&self, operation: &Operation<T>) -> Result<T>
    where
        T: Selectable + DeserializeOwned + 'static,
    {
        self.mutate_with_headers(operation, HeaderMap::new()).await
    }

    /// Like [`Client::mutate`], also sending `headers` with the request.
    pub async fn mutate_with_headers<T>(
        &self,
        operation: &Operation<T>,
        headers: HeaderMap,
    ) -> Result<T>
    where
        T: Selectable + DeserializeOwned + 'static,
    {
        self.execute_operation(OperationKind::Mutation, operation, headers).await
    }

    /// Run a hand-written operation document and decode the response `data`
    /// into `R`. Use `R = serde::de::IgnoredAny` to discard the data, or
    /// `R = serde_json::Value` to inspect it. `R = ()` only accepts a `null`
    /// (or missing) `data`.
    pub async fn custom_operation<R>(
        &self,
        query: &str,
        variables: Map<String, Value>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        self.custom_operation_with_headers(query, variables, HeaderMap::new()).await
    }

    /// Like [`Client::custom_operation`], also sending `headers` with the
    /// request.
    pub async fn custom_operation_with_headers<R>(
        &self,
        query: &str,
        variables: Map<String, Value>,
        headers: HeaderMap,
    ) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = GraphQLRequest {
            query: query.to_string(),
            variables,
        };
        self.execute(&request, headers).await
    }

    async fn execute_operation<T>(
        &self,
        kind: OperationKind,
        operation: &Operation<T>,
        headers: HeaderMap,
    ) -> Result<T>
    where
        T: Selectable + DeserializeOwned + 'static,
    {
        let marshaled = marshal_operation::<T>(kind, operation.fields())?;
        warn_on_missing_variables::<T>(&marshaled, operation.variables());

        let request = GraphQLRequest {
            query: marshaled.into_document(),
            variables: operation.variables().clone(),
        };
        self.execute(&request, headers).await
    }

    #[tracing::instrument(name = "graphql_request", skip_all, fields(url = %self.url))]
    async fn execute<R>(&self, request: &GraphQLRequest, headers: HeaderMap) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let mut request_headers = self.default_headers.clone();
        request_headers.extend(headers);
        request_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        // Leave response decompression to the transport.
        request_headers.remove(ACCEPT_ENCODING);

        tracing::debug!(query = %request.query, "Sending GraphQL request");
        let response =
            self.http_client
                .post(self.url.as_str())
                .headers(request_headers)
                .json(request)
                .send()
                .await?;

        let status = response.status();
        let body = response.bytes().await?;
        tracing::debug!(%status, body_len = body.len(), "Received GraphQL response");

        self.decode_response(status, body.as_ref())
    }

    /// Decode a response body: map any GraphQL errors, otherwise decode
    /// `data` into `R` (a missing `data` decodes as `null`).
    pub(crate) fn decode_response<R>(&self, status: StatusCode, body: &[u8]) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let mut response: GraphQLResponse = match serde_json::from_slice(body) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(%status, error = %err, "Unknown GraphQL response format");
                return Err(ClientError::UnknownResponseFormat {
                    status,
                    body: String::from_utf8_lossy(body).into_owned(),
                });
            },
        };

        if let Some(errors) = response.take_errors() {
            tracing::debug!(%status, error_count = errors.len(), "GraphQL response has errors");
            return Err((self.error_mapper)(status, errors));
        }

        let data = response.data.as_ref().map_or("null", |data| data.get());
        serde_json::from_str(data).map_err(ClientError::DecodeData)
    }
}
impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("default_headers", &self.default_headers)
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

fn warn_on_missing_variables<T>(
    marshaled: &MarshaledOperation,
    variables: &Map<String, Value>,
) {
    for variable in marshaled.variables() {
        if variable.kind().ends_with('!') && !variables.contains_key(variable.name()) {
            tracing::warn!(
                operation_type = std::any::type_name::<T>(),
                variable = %variable,
                "Non-null variable has no value",
            );
        }
    }
}
