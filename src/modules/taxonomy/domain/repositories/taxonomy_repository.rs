use async_trait::async_trait;
use uuid::Uuid;

use super::super::entities::{Category, Chapter};
use crate::shared::errors::AppResult;

/// Which slice of the category tree a query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParentScope {
    #[default]
    Any,
    RootsOnly,
    ChildrenOf(Uuid),
}

#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub scope: ParentScope,
    pub active_only: bool,
    /// Exact match after trimming and lowercasing, scoped by `scope`.
    pub name: Option<String>,
}

impl CategoryFilter {
    /// Every category, active or not.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn active_roots() -> Self {
        Self {
            scope: ParentScope::RootsOnly,
            active_only: true,
            name: None,
        }
    }

    pub fn active_children_of(parent_id: Uuid) -> Self {
        Self {
            scope: ParentScope::ChildrenOf(parent_id),
            active_only: true,
            name: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub description: Option<String>,
    pub parent_id: Option<Uuid>,
}

/// Field-level update set for a category. `Some(None)` on `parent_id`
/// clears the reference (promotes the category to root).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryUpdate {
    pub parent_id: Option<Option<Uuid>>,
}

impl CategoryUpdate {
    pub fn clear_parent() -> Self {
        Self {
            parent_id: Some(None),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChapterFilter {
    pub category_id: Option<Uuid>,
    pub active_only: bool,
    /// Exact match after trimming and lowercasing.
    pub name: Option<String>,
}

impl ChapterFilter {
    pub fn active_in(category_id: Uuid) -> Self {
        Self {
            category_id: Some(category_id),
            active_only: true,
            name: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

#[derive(Debug, Clone)]
pub struct NewChapter {
    pub name: String,
    pub category_id: Uuid,
    pub position: i32,
}

/// Persistence gateway for the classification tree.
///
/// Passed explicitly into each operation so runs can be pointed at test
/// doubles. Implementations own storage and identity generation; the
/// services hold no state between invocations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaxonomyRepository: Send + Sync {
    async fn find_categories(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>>;

    async fn create_category(&self, data: NewCategory) -> AppResult<Category>;

    async fn update_category(&self, id: Uuid, changes: CategoryUpdate) -> AppResult<Category>;

    /// Probe whether the chapter relation exists in this deployment.
    /// Run once per maintenance pass and treated as a feature flag.
    async fn supports_chapters(&self) -> AppResult<bool>;

    async fn find_chapters(&self, filter: &ChapterFilter) -> AppResult<Vec<Chapter>>;

    async fn create_chapter(&self, data: NewChapter) -> AppResult<Chapter>;
}
