mod field_tree_builder;
mod tree_build_error;
mod tree_cache;
mod walk;

pub use field_tree_builder::build_field_tree;
pub use tree_build_error::TreeBuildError;
pub use tree_cache::TreeCache;
pub use walk::ShapeNode;
pub use walk::walk;

#[cfg(test)]
mod tests;
