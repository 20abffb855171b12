use std::collections::HashSet;

use uuid::Uuid;

use super::super::entities::Category;

/// A snapshot of the category tree split into roots and children.
///
/// Built once per maintenance pass from a full category load; all
/// structural checks resolve against this in-memory view rather than
/// issuing per-node queries.
#[derive(Debug, Default)]
pub struct TreePartition {
    pub roots: Vec<Category>,
    pub children: Vec<Category>,
}

impl TreePartition {
    pub fn new(categories: Vec<Category>) -> Self {
        let (roots, children) = categories.into_iter().partition(Category::is_root);
        Self { roots, children }
    }

    pub fn root_ids(&self) -> HashSet<Uuid> {
        self.roots.iter().map(|c| c.id).collect()
    }

    /// Children whose parent reference does not resolve to any root.
    /// A reference to another child counts as unresolved: the tree is
    /// two levels deep, so only roots are valid parents.
    pub fn orphans(&self) -> Vec<&Category> {
        let root_ids = self.root_ids();
        self.children
            .iter()
            .filter(|c| match c.parent_id {
                Some(parent_id) => !root_ids.contains(&parent_id),
                None => false,
            })
            .collect()
    }
}
