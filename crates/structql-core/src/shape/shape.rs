/// Describes the structure of a [`Selectable`](crate::Selectable) type: the
/// capability the tree builder relies on in place of runtime reflection.
#[derive(Clone, Debug)]
pub enum Shape {
    /// A scalar-like type with no selectable children.
    Leaf {
        type_name: &'static str,
    },

    /// A struct whose visible fields are selected as children, in
    /// declaration order.
    Struct {
        /// The struct's identifier (e.g. `GetUser`).
        name: &'static str,
        /// The fully qualified type name, unique per type.
        type_name: &'static str,
        fields: Vec<ShapeField>,
    },

    /// A pointer, collection or optional wrapper. Only the shape of the
    /// wrapped element matters, never the cardinality.
    Wrapped {
        wrapper: &'static str,
        inner: fn() -> Shape,
    },
}
impl Shape {
    /// Dereference wrappers until the first non-wrapper shape is reached.
    pub fn deref(self) -> Shape {
        let mut shape = self;
        while let Shape::Wrapped { inner, .. } = shape {
            shape = inner();
        }
        shape
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct { .. })
    }

    /// A short description of the kind of shape, used in error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Leaf { .. } => "leaf",
            Self::Struct { .. } => "struct",
            Self::Wrapped { .. } => "wrapper",
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Leaf { type_name } => *type_name,
            Self::Struct { type_name, .. } => *type_name,
            Self::Wrapped { wrapper, .. } => *wrapper,
        }
    }
}

/// One field of a [`Shape::Struct`].
#[derive(Clone, Copy, Debug)]
pub struct ShapeField {
    /// The structural (Rust) name of the field, normalized with
    /// [`to_lower_camel_case`](crate::to_lower_camel_case) when the tag does
    /// not override it.
    pub name: &'static str,

    /// The raw annotation tag. `-` excludes the field.
    pub tag: &'static str,

    pub shape: fn() -> Shape,
}
impl ShapeField {
    pub const SKIP_TAG: &'static str = "-";

    pub const fn new(
        name: &'static str,
        tag: &'static str,
        shape: fn() -> Shape,
    ) -> Self {
        Self { name, tag, shape }
    }

    pub fn is_skipped(&self) -> bool {
        self.tag == Self::SKIP_TAG
    }
}
