use crate::parse_tag;
use crate::to_lower_camel_case;
use crate::walk;
use crate::Field;
use crate::Shape;
use crate::ShapeNode;
use crate::TreeBuildError;

/// Build the complete [`Field`] tree for a struct [`Shape`].
///
/// Each visited node's tag is parsed into a [`Field`]; when the tag does not
/// override the name, the structural name is normalized to lower camel case.
/// Completed nodes are appended, in order, to their parent's children. The
/// returned root is always kept.
pub fn build_field_tree(root: Shape) -> Result<Field, TreeBuildError> {
    let type_name = root.type_name();
    let mut stack = FieldStack::default();

    walk(root, &mut |node: Option<&ShapeNode>| {
        match node {
            Some(node) => {
                let mut field = parse_tag(node.tag).map_err(|source| {
                    TreeBuildError::InvalidFieldTag {
                        field_name: node.name.to_string(),
                        source,
                    }
                })?;

                if field.decl.name.is_empty() {
                    field.decl.name = to_lower_camel_case(node.name);
                }
                stack.push(field);
            },

            // The root is never popped; it is what remains at the end.
            None if stack.len() == 1 => (),

            None => {
                if let Some(field) = stack.pop() {
                    stack.apply(|parent| parent.fields.push(field));
                }
            },
        }
        Ok(())
    })?;

    let mut root = stack.pop().ok_or(TreeBuildError::EmptyTree { type_name })?;
    root.keep = true;
    Ok(root)
}

/// The explicit traversal stack of in-progress [`Field`]s.
#[derive(Debug, Default)]
struct FieldStack {
    items: Vec<Field>,
}
impl FieldStack {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, field: Field) {
        self.items.push(field);
    }

    fn pop(&mut self) -> Option<Field> {
        self.items.pop()
    }

    /// Apply `f` to the field on top of the stack, if any.
    fn apply(&mut self, f: impl FnOnce(&mut Field)) {
        if let Some(top) = self.items.last_mut() {
            f(top);
        }
    }
}
