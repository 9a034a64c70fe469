use crate::build_field_tree;
use crate::Field;
use crate::Selectable;
use crate::TreeBuildError;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::OnceLock;
use std::sync::PoisonError;
use std::sync::RwLock;

fn global_tree_cache() -> &'static TreeCache {
    static GLOBAL_TREE_CACHE: OnceLock<TreeCache> = OnceLock::new();
    GLOBAL_TREE_CACHE.get_or_init(TreeCache::new)
}

/// A concurrency-safe memo of built [`Field`] trees, keyed by the
/// [`TypeId`] of the [`Selectable`] type they were built from.
///
/// Stored trees are immutable and shared through [`Arc`]; nothing is ever
/// evicted since type definitions are static. A failed build stores nothing.
#[derive(Debug, Default)]
pub struct TreeCache {
    trees: RwLock<HashMap<TypeId, Arc<Field>>>,
}
impl TreeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide cache used by [`marshal`](crate::marshal) and friends.
    pub fn global() -> &'static TreeCache {
        global_tree_cache()
    }

    /// Look up a previously built tree for `T`.
    pub fn get<T: Selectable + 'static>(&self) -> Option<Arc<Field>> {
        // Stored trees are never mutated in place, so a poisoned lock still
        // guards consistent data.
        self.trees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&TypeId::of::<T>())
            .cloned()
    }

    /// Return the cached tree for `T`, building and storing it first if
    /// necessary.
    ///
    /// The build runs without holding the lock. If several callers race to
    /// build the same type, the first stored tree wins and every caller gets
    /// that one.
    pub fn get_or_build<T: Selectable + 'static>(&self) -> Result<Arc<Field>, TreeBuildError> {
        if let Some(tree) = self.get::<T>() {
            log::trace!("Field tree cache hit for `{}`.", std::any::type_name::<T>());
            return Ok(tree);
        }

        log::debug!("Building field tree for `{}`.", std::any::type_name::<T>());
        let tree = Arc::new(build_field_tree(T::shape())?);

        let mut trees = self.trees.write().unwrap_or_else(PoisonError::into_inner);
        Ok(trees.entry(TypeId::of::<T>()).or_insert(tree).clone())
    }

    pub fn contains<T: Selectable + 'static>(&self) -> bool {
        self.trees
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&TypeId::of::<T>())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn len(&self) -> usize {
        self.trees.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
