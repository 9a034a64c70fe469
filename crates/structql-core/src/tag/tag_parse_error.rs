use crate::DirectiveKind;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TagParseError {
    #[error("Found multiple `@{directive}` directives in tag `{tag}`")]
    DuplicateDirective {
        directive: DirectiveKind,
        tag: String,
    },

    #[error(
        "Failed to parse clause `{clause}` of tag `{tag}`: expected {expected} \
        at byte {offset} of the clause",
    )]
    MalformedClause {
        clause: String,
        expected: &'static str,
        offset: usize,
        tag: String,
    },

    #[error("Unbalanced parentheses in tag `{tag}`")]
    UnbalancedParentheses {
        tag: String,
    },

    #[error("Unknown directive `@{directive_name}` in tag `{tag}`")]
    UnknownDirective {
        directive_name: String,
        tag: String,
    },
}
