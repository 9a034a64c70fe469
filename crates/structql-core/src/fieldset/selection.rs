use crate::Fieldset;

/// The value of one [`Fieldset`] entry.
///
/// Serializes as either a JSON boolean or a nested JSON object, matching the
/// shape of a sparse fieldset in a request body.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum Selection {
    /// `true` selects a field that has no children; `false` excludes it.
    Leaf(bool),

    /// Selects a field with children and filters those children.
    SubTree(Fieldset),
}
impl Selection {
    pub fn as_subtree(&self) -> Option<&Fieldset> {
        match self {
            Self::SubTree(fieldset) => Some(fieldset),
            Self::Leaf(_) => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Leaf(false))
    }

    /// Merge `other` into `self` as a set union.
    ///
    /// Two subtrees merge recursively and a subtree always wins over a leaf.
    /// Two leaves are combined with a logical OR, so a field selected on
    /// either side stays selected.
    pub fn merge(&mut self, other: Selection) {
        match (self, other) {
            (Selection::SubTree(ours), Selection::SubTree(theirs)) => ours.merge(theirs),
            (Selection::SubTree(_), Selection::Leaf(_)) => (),
            (ours, theirs @ Selection::SubTree(_)) => *ours = theirs,
            (Selection::Leaf(ours), Selection::Leaf(theirs)) => *ours |= theirs,
        }
    }
}
impl From<bool> for Selection {
    fn from(selected: bool) -> Self {
        Self::Leaf(selected)
    }
}
impl From<Fieldset> for Selection {
    fn from(fieldset: Fieldset) -> Self {
        Self::SubTree(fieldset)
    }
}
