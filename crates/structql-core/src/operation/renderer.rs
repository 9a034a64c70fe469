use crate::Field;
use crate::Fieldset;
use crate::OperationKind;
use crate::Selection;
use crate::VariableDefinition;

type Result<T> = std::result::Result<T, RenderError>;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error(
        "Field `{field_name}` is selected with `true` in the fieldset but has \
        child fields; select its children with a nested fieldset instead",
    )]
    LeafSelectionOnParentField {
        field_name: String,
    },

    #[error(
        "Field `{field_name}` is selected with a nested fieldset but has no \
        child fields; select it with `true` or `false` instead",
    )]
    SubSelectionOnLeafField {
        field_name: String,
    },
}

/// Render the document for an operation whose selection set is the children
/// of `root`.
///
/// The root is always rendered. Its head is the operation keyword, followed
/// by the parenthesized `variables` when there are any; the root's own
/// declaration is never written. `fieldset` filters the root's descendants:
/// `None` renders every field, while `Some` renders only the fields it
/// selects plus every field tagged `keep`.
pub fn render_operation(
    root: &Field,
    kind: OperationKind,
    variables: &[VariableDefinition],
    fieldset: Option<&Fieldset>,
) -> Result<String> {
    let mut out = String::from(kind.as_str());
    if !variables.is_empty() {
        let variables =
            variables.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
        out.push('(');
        out.push_str(variables.as_str());
        out.push(')');
    }

    render_selection_set(root, fieldset, &mut out)?;
    Ok(out)
}

/// What to do with one field given the fieldset scope of its siblings.
enum RenderDecision<'fs> {
    Omit,
    Write {
        child_scope: Option<&'fs Fieldset>,
    },
}

fn decide<'fs>(
    field: &Field,
    scope: Option<&'fs Fieldset>,
) -> Result<RenderDecision<'fs>> {
    let Some(scope) = scope else {
        return Ok(RenderDecision::Write { child_scope: None });
    };

    // Kept fields do no lookup; their children see the same scope.
    if field.keep {
        return Ok(RenderDecision::Write {
            child_scope: Some(scope),
        });
    }

    let has_children = !field.fields.is_empty();
    let selection = scope.get(field.decl.name());

    match selection {
        None | Some(Selection::Leaf(false)) => Ok(RenderDecision::Omit),

        Some(Selection::Leaf(true)) if has_children => {
            Err(RenderError::LeafSelectionOnParentField {
                field_name: field.decl.name.to_string(),
            })
        },

        Some(Selection::Leaf(true)) => Ok(RenderDecision::Write {
            child_scope: Some(scope),
        }),

        Some(Selection::SubTree(_)) if !has_children => {
            Err(RenderError::SubSelectionOnLeafField {
                field_name: field.decl.name.to_string(),
            })
        },

        Some(Selection::SubTree(nested)) => Ok(RenderDecision::Write {
            child_scope: Some(nested),
        }),
    }
}

/// Render `field` if `scope` selects it. Returns whether anything was
/// written.
fn render_field(
    field: &Field,
    scope: Option<&Fieldset>,
    out: &mut String,
) -> Result<bool> {
    let child_scope = match decide(field, scope)? {
        RenderDecision::Omit => return Ok(false),
        RenderDecision::Write { child_scope } => child_scope,
    };

    out.push_str(field.decl.to_string().as_str());
    for directive in &field.directives {
        out.push(' ');
        out.push_str(directive.to_string().as_str());
    }
    render_selection_set(field, child_scope, out)?;

    Ok(true)
}

fn render_selection_set(
    field: &Field,
    scope: Option<&Fieldset>,
    out: &mut String,
) -> Result<()> {
    if field.fields.is_empty() {
        return Ok(());
    }

    out.push_str(" {\n");
    for child in &field.fields {
        if render_field(child, scope, out)? {
            out.push('\n');
        }
    }
    out.push('}');

    Ok(())
}
