mod marshal;
mod marshal_error;
mod operation_kind;
mod renderer;
mod variable_collector;
mod variable_definition;

pub use marshal::marshal;
pub use marshal::marshal_mutation;
pub use marshal::marshal_operation;
pub use marshal::marshal_operation_with_cache;
pub use marshal::marshal_query;
pub use marshal::MarshaledOperation;
pub use marshal_error::MarshalError;
pub use operation_kind::OperationKind;
pub use renderer::render_operation;
pub use renderer::RenderError;
pub use variable_collector::collect_variables;
pub use variable_collector::CollectVariablesError;
pub use variable_definition::VariableDefinition;

#[cfg(test)]
mod tests;
