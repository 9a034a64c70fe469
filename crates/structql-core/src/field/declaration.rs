use crate::Token;
use std::fmt;

/// The renderable head of a field or operation-level model: its name, an
/// optional alias prefix, and an optional parenthesized argument list.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Declaration {
    pub(crate) alias: Option<String>,
    pub(crate) name: String,
    pub(crate) template: Option<String>,
    pub(crate) tokens: Vec<Token>,
}
impl Declaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub(crate) fn with_tokens(name: impl Into<String>, tokens: Vec<Token>) -> Self {
        let template =
            if tokens.is_empty() {
                None
            } else {
                Some(
                    tokens.iter()
                        .map(|token| format!("{}: ${}", token.name, token.arg))
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            };

        Self {
            alias: None,
            name: name.into(),
            template,
            tokens,
        }
    }

    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The rendered argument list (e.g. `id: $id, list: $list`), if this
    /// declaration has any arguments.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    pub fn tokens(&self) -> &[Token] {
        self.tokens.as_slice()
    }
}
impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(alias) = &self.alias {
            write!(f, "{alias}: ")?;
        }
        match &self.template {
            Some(template) => write!(f, "{}({template})", self.name),
            None => f.write_str(self.name.as_str()),
        }
    }
}
