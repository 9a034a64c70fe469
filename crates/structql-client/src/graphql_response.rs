use crate::GraphQLErrors;
use serde_json::value::RawValue;

/// The JSON body of a response from a GraphQL server.
///
/// `data` stays raw until the caller knows what type to decode it into.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Box<RawValue>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<GraphQLErrors>,
}
impl GraphQLResponse {
    /// Take the response's errors, if it has any.
    pub fn take_errors(&mut self) -> Option<GraphQLErrors> {
        self.errors.take().filter(|errors| !errors.is_empty())
    }
}
