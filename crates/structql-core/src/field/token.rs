/// A single `name: $arg` argument/variable pairing along with the GraphQL
/// type annotation declared for the variable (e.g. `ID!` or `[String!]`).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Token {
    pub(crate) arg: String,
    pub(crate) kind: String,
    pub(crate) name: String,
}
impl Token {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        arg: impl Into<String>,
    ) -> Self {
        Self {
            arg: arg.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// The variable name (without the leading `$`).
    pub fn arg(&self) -> &str {
        self.arg.as_str()
    }

    /// The declared GraphQL type annotation of the variable.
    pub fn kind(&self) -> &str {
        self.kind.as_str()
    }

    /// The argument (parameter) name on the field. Empty for tokens that
    /// originate from a `@skip`/`@include` directive.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
