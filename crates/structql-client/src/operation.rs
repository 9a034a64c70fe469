use serde_json::Map;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use structql_core::Fieldset;

/// A request to run the operation described by the
/// [`Selectable`](structql_core::Selectable) type `T`: an optional sparse
/// [`Fieldset`] and the values of the operation's variables.
pub struct Operation<T> {
    pub(crate) fields: Option<Fieldset>,
    pub(crate) variables: Map<String, Value>,
    _marker: PhantomData<fn() -> T>,
}
impl<T> Operation<T> {
    pub fn new() -> Self {
        Self {
            fields: None,
            variables: Map::new(),
            _marker: PhantomData,
        }
    }

    pub fn fields(&self) -> Option<&Fieldset> {
        self.fields.as_ref()
    }

    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }

    /// Only render the fields selected by `fields` (plus any field tagged
    /// `keep`).
    pub fn with_fields(mut self, fields: Fieldset) -> Self {
        self.fields = Some(fields);
        self
    }

    /// Set the value of the variable `$name`.
    pub fn with_variable(
        mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    pub fn with_variables(mut self, variables: Map<String, Value>) -> Self {
        self.variables = variables;
        self
    }
}
impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            variables: self.variables.clone(),
            _marker: PhantomData,
        }
    }
}
impl<T> Default for Operation<T> {
    fn default() -> Self {
        Self::new()
    }
}
impl<T> fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("type", &std::any::type_name::<T>())
            .field("fields", &self.fields)
            .field("variables", &self.variables)
            .finish()
    }
}
