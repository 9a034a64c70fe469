use crate::Token;
use std::fmt;

/// The conditional-inclusion directives that may be attached to a field.
///
/// Aliases are written with directive syntax in tags (`@alias(name)`) but
/// they are stored on the [`Declaration`](crate::Declaration) instead.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveKind {
    Include,
    Skip,
}
impl DirectiveKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Skip => "skip",
        }
    }
}
impl fmt::Display for DirectiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Directive {
    pub(crate) kind: DirectiveKind,
    pub(crate) template: String,
    pub(crate) token: Option<Token>,
}
impl Directive {
    /// Build a directive from its raw argument text. A `$`-prefixed argument
    /// references a variable, which is always typed `Boolean!`.
    pub fn new(kind: DirectiveKind, template: impl Into<String>) -> Self {
        let template = template.into();
        let token = template.strip_prefix('$').map(|arg| Token {
            arg: arg.to_string(),
            kind: "Boolean!".to_string(),
            name: String::new(),
        });

        Self {
            kind,
            template,
            token,
        }
    }

    pub fn kind(&self) -> DirectiveKind {
        self.kind
    }

    /// The raw argument text as written in the tag (e.g. `$showEmail` or
    /// `true`).
    pub fn template(&self) -> &str {
        self.template.as_str()
    }

    pub fn token(&self) -> Option<&Token> {
        self.token.as_ref()
    }
}
impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}(if: {})", self.kind, self.template)
    }
}
