use crate::Shape;
use crate::TreeBuildError;

/// A node visited by [`walk`]: the structural name of the field, its raw tag
/// and its dereferenced [`Shape`].
#[derive(Clone, Debug)]
pub struct ShapeNode {
    pub name: &'static str,
    pub shape: Shape,
    pub tag: &'static str,
}

/// Walk a struct [`Shape`] depth-first.
///
/// `visit` is called with `Some(node)` when a node is entered (pre-order) and
/// with `None` once the node and all of its children have been visited
/// (post-order). The root node is the struct itself, with an empty tag.
///
/// Wrappers are dereferenced at every level. Fields tagged `-` are not
/// visited. Tags are not parsed here; that is the visitor's concern.
pub fn walk<V>(root: Shape, visit: &mut V) -> Result<(), TreeBuildError>
where
    V: FnMut(Option<&ShapeNode>) -> Result<(), TreeBuildError>,
{
    let root = root.deref();
    let Shape::Struct { name, .. } = &root else {
        return Err(TreeBuildError::NotAStruct {
            kind: root.kind_name(),
            type_name: root.type_name(),
        });
    };

    let node = ShapeNode {
        name: *name,
        shape: root.clone(),
        tag: "",
    };

    let mut ancestors = vec![];
    walk_node(&node, visit, &mut ancestors)
}

fn walk_node<V>(
    node: &ShapeNode,
    visit: &mut V,
    ancestors: &mut Vec<&'static str>,
) -> Result<(), TreeBuildError>
where
    V: FnMut(Option<&ShapeNode>) -> Result<(), TreeBuildError>,
{
    if let Shape::Struct { type_name, .. } = &node.shape
        && ancestors.contains(type_name) {
        return Err(TreeBuildError::RecursiveType {
            field_name: node.name.to_string(),
            type_name: *type_name,
        });
    }

    visit(Some(node))?;

    if let Shape::Struct { type_name, fields, .. } = &node.shape {
        ancestors.push(*type_name);
        for field in fields.iter().filter(|field| !field.is_skipped()) {
            let child = ShapeNode {
                name: field.name,
                shape: (field.shape)().deref(),
                tag: field.tag,
            };
            walk_node(&child, visit, ancestors)?;
        }
        ancestors.pop();
    }

    visit(None)
}
