use crate::Field;
use crate::VariableDefinition;
use indexmap::IndexMap;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CollectVariablesError {
    #[error(
        "Variable `${variable_name}` is declared as both `{first_kind}` and \
        `{second_kind}`",
    )]
    ConflictingVariableType {
        variable_name: String,
        first_kind: String,
        second_kind: String,
    },
}

/// Gather the variable definitions declared anywhere in a [`Field`] tree.
///
/// Tokens are visited in pre-order (see [`Field::tokens`]) and deduplicated
/// by variable name, keeping first-seen order. Reusing a variable with the
/// same type is fine; reusing it with a different type is an error.
pub fn collect_variables(
    field: &Field,
) -> Result<Vec<VariableDefinition>, CollectVariablesError> {
    let mut kinds_by_name: IndexMap<&str, &str> = IndexMap::new();

    for token in field.tokens() {
        match kinds_by_name.get(token.arg()) {
            Some(first_kind) if *first_kind != token.kind() => {
                return Err(CollectVariablesError::ConflictingVariableType {
                    variable_name: token.arg().to_string(),
                    first_kind: first_kind.to_string(),
                    second_kind: token.kind().to_string(),
                });
            },

            Some(_) => continue,

            None => {
                kinds_by_name.insert(token.arg(), token.kind());
            },
        }
    }

    Ok(
        kinds_by_name.into_iter()
            .map(|(name, kind)| VariableDefinition::new(name, kind))
            .collect()
    )
}
