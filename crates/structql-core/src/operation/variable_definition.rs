use std::fmt;

/// One entry of an operation's variable list, rendered as `$name: Kind`.
#[derive(Clone, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct VariableDefinition {
    pub(crate) kind: String,
    pub(crate) name: String,
}
impl VariableDefinition {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// The declared type annotation (e.g. `ID!` or `[String!]`).
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    /// The variable name, without the leading `$`.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
impl fmt::Display for VariableDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}: {}", self.name, self.kind)
    }
}
