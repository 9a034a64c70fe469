use serde_json::Map;
use serde_json::Value;

/// The JSON body of a request to a GraphQL server.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GraphQLRequest {
    pub query: String,

    #[serde(default)]
    pub variables: Map<String, Value>,
}
