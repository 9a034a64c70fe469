use crate::TagParseError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TreeBuildError {
    #[error("Structural traversal of `{type_name}` produced no root field")]
    EmptyTree {
        type_name: &'static str,
    },

    #[error("Invalid tag on field `{field_name}`: {source}")]
    InvalidFieldTag {
        field_name: String,
        source: TagParseError,
    },

    #[error("Expected a struct type (or a wrapper of one), got {kind} `{type_name}`")]
    NotAStruct {
        kind: &'static str,
        type_name: &'static str,
    },

    #[error(
        "Field `{field_name}` recursively selects `{type_name}`, which is \
        already being selected by one of its ancestors",
    )]
    RecursiveType {
        field_name: String,
        type_name: &'static str,
    },
}
