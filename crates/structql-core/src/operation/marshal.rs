use crate::collect_variables;
use crate::render_operation;
use crate::Fieldset;
use crate::MarshalError;
use crate::OperationKind;
use crate::Selectable;
use crate::TreeCache;
use crate::VariableDefinition;

type Result<T> = std::result::Result<T, MarshalError>;

/// A rendered operation document along with the variables it declares.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarshaledOperation {
    pub(crate) document: String,
    pub(crate) kind: OperationKind,
    pub(crate) variables: Vec<VariableDefinition>,
}
impl MarshaledOperation {
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    pub fn into_document(self) -> String {
        self.document
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The variables declared in the document's header, in first-seen order.
    pub fn variables(&self) -> &[VariableDefinition] {
        self.variables.as_slice()
    }
}

/// Marshal `T` into an operation of the given kind using the process-wide
/// [`TreeCache`].
pub fn marshal_operation<T: Selectable + 'static>(
    kind: OperationKind,
    fieldset: Option<&Fieldset>,
) -> Result<MarshaledOperation> {
    marshal_operation_with_cache::<T>(TreeCache::global(), kind, fieldset)
}

/// Like [`marshal_operation`], but builds and looks up field trees in the
/// provided `cache`.
pub fn marshal_operation_with_cache<T: Selectable + 'static>(
    cache: &TreeCache,
    kind: OperationKind,
    fieldset: Option<&Fieldset>,
) -> Result<MarshaledOperation> {
    let tree = cache.get_or_build::<T>()?;
    let variables = collect_variables(&tree)?;
    let document = render_operation(&tree, kind, &variables, fieldset)?;

    log::trace!(
        "Marshaled `{}` as a {kind} with {} variable(s).",
        std::any::type_name::<T>(),
        variables.len(),
    );

    Ok(MarshaledOperation {
        document,
        kind,
        variables,
    })
}

/// Marshal `T` into the text of an operation of the given kind.
pub fn marshal<T: Selectable + 'static>(
    kind: OperationKind,
    fieldset: Option<&Fieldset>,
) -> Result<String> {
    Ok(marshal_operation::<T>(kind, fieldset)?.into_document())
}

/// Marshal `T` into the text of a `query` operation.
///
/// See [`render_operation`] for how `fieldset` filters the rendered fields.
pub fn marshal_query<T: Selectable + 'static>(
    fieldset: Option<&Fieldset>,
) -> Result<String> {
    marshal::<T>(OperationKind::Query, fieldset)
}

/// Marshal `T` into the text of a `mutation` operation.
pub fn marshal_mutation<T: Selectable + 'static>(
    fieldset: Option<&Fieldset>,
) -> Result<String> {
    marshal::<T>(OperationKind::Mutation, fieldset)
}
