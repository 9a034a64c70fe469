use crate::CollectVariablesError;
use crate::RenderError;
use crate::TreeBuildError;

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum MarshalError {
    #[error("Failed to build the field tree: {0}")]
    TreeBuild(#[from] TreeBuildError),

    #[error("Failed to collect operation variables: {0}")]
    CollectVariables(#[from] CollectVariablesError),

    #[error("Failed to render the operation: {0}")]
    Render(#[from] RenderError),
}
