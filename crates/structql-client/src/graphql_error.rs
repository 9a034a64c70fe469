use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use std::fmt;

/// One segment of the `path` of a [`GraphQLError`]: a response field name or
/// a list index.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}
impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(idx) => write!(f, "{idx}"),
        }
    }
}

/// One entry of the `errors` list of a GraphQL response.
///
/// `extensions` is kept as raw JSON so that an
/// [`ErrorMapper`](crate::ErrorMapper) can decode it into whatever type the
/// server uses (see [`GraphQLError::extensions_as`]).
#[derive(Clone, Debug, serde::Deserialize, serde::Serialize)]
pub struct GraphQLError {
    pub message: String,

    #[serde(default)]
    pub path: Vec<PathSegment>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Box<RawValue>>,
}
impl GraphQLError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: vec![],
            extensions: None,
        }
    }

    /// Decode `extensions` into `T`. Returns `None` when the error carries no
    /// extensions.
    pub fn extensions_as<T: DeserializeOwned>(
        &self,
    ) -> Option<Result<T, serde_json::Error>> {
        self.extensions
            .as_ref()
            .map(|extensions| serde_json::from_str(extensions.get()))
    }
}
impl fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message.as_str())
    }
}

/// The `errors` list of a GraphQL response. Displays as every message joined
/// with `, `.
#[derive(Clone, Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct GraphQLErrors(Vec<GraphQLError>);
impl GraphQLErrors {
    pub fn new(errors: Vec<GraphQLError>) -> Self {
        Self(errors)
    }

    pub fn into_inner(self) -> Vec<GraphQLError> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GraphQLError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}
impl fmt::Display for GraphQLErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> =
            self.0.iter()
                .map(|error| error.message.as_str())
                .collect();
        f.write_str(messages.join(", ").as_str())
    }
}
impl std::error::Error for GraphQLErrors {}
impl From<Vec<GraphQLError>> for GraphQLErrors {
    fn from(errors: Vec<GraphQLError>) -> Self {
        Self(errors)
    }
}
impl IntoIterator for GraphQLErrors {
    type Item = GraphQLError;
    type IntoIter = std::vec::IntoIter<GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
impl<'a> IntoIterator for &'a GraphQLErrors {
    type Item = &'a GraphQLError;
    type IntoIter = std::slice::Iter<'a, GraphQLError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
