#![allow(dead_code)]
/// In-memory persistence gateway double
///
/// Mirrors the matching and ordering semantics of the Diesel
/// implementation (normalized exact-name matching, name ordering for
/// categories, position-then-name for chapters) so service behavior can
/// be exercised without a database. Switches allow disabling the
/// chapter relation and injecting per-item insert failures.
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use treekeeper::modules::taxonomy::domain::entities::{Category, Chapter};
use treekeeper::modules::taxonomy::domain::repositories::{
    CategoryFilter, CategoryUpdate, ChapterFilter, NewCategory, NewChapter, ParentScope,
    TaxonomyRepository,
};
use treekeeper::modules::taxonomy::domain::services::naming;
use treekeeper::shared::errors::{AppError, AppResult};

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    chapters: Vec<Chapter>,
}

pub struct MemoryStore {
    state: Mutex<State>,
    chapters_enabled: bool,
    fail_chapter_names: HashSet<String>,
    fail_category_names: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::default(),
            chapters_enabled: true,
            fail_chapter_names: HashSet::new(),
            fail_category_names: HashSet::new(),
        }
    }

    /// A deployment without the chapter relation.
    pub fn without_chapters() -> Self {
        Self {
            chapters_enabled: false,
            ..Self::new()
        }
    }

    /// Chapter inserts for the given names fail with a database error.
    pub fn with_failing_chapters(names: &[&str]) -> Self {
        Self {
            fail_chapter_names: names.iter().map(|n| naming::normalize(n)).collect(),
            ..Self::new()
        }
    }

    /// Category inserts for the given names fail with a database error.
    pub fn with_failing_categories(names: &[&str]) -> Self {
        Self {
            fail_category_names: names.iter().map(|n| naming::normalize(n)).collect(),
            ..Self::new()
        }
    }

    /// Insert a category row directly, bypassing the gateway contract.
    pub fn insert_category(&self, name: &str, parent_id: Option<Uuid>, is_active: bool) -> Category {
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            is_active,
            parent_id,
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .unwrap()
            .categories
            .push(category.clone());
        category
    }

    /// Full category snapshot, insertion order.
    pub fn categories(&self) -> Vec<Category> {
        self.state.lock().unwrap().categories.clone()
    }

    /// Full chapter snapshot, insertion order.
    pub fn chapters(&self) -> Vec<Chapter> {
        self.state.lock().unwrap().chapters.clone()
    }

    fn category_matches(category: &Category, filter: &CategoryFilter) -> bool {
        let scope_ok = match filter.scope {
            ParentScope::Any => true,
            ParentScope::RootsOnly => category.parent_id.is_none(),
            ParentScope::ChildrenOf(parent_id) => category.parent_id == Some(parent_id),
        };
        let active_ok = !filter.active_only || category.is_active;
        let name_ok = filter
            .name
            .as_deref()
            .map_or(true, |n| naming::normalize(&category.name) == naming::normalize(n));
        scope_ok && active_ok && name_ok
    }

    fn chapter_matches(chapter: &Chapter, filter: &ChapterFilter) -> bool {
        let category_ok = filter
            .category_id
            .map_or(true, |id| chapter.category_id == id);
        let active_ok = !filter.active_only || chapter.is_active;
        let name_ok = filter
            .name
            .as_deref()
            .map_or(true, |n| naming::normalize(&chapter.name) == naming::normalize(n));
        category_ok && active_ok && name_ok
    }

    fn missing_relation() -> AppError {
        AppError::RelationMissing("relation \"chapters\" does not exist".to_string())
    }
}

#[async_trait]
impl TaxonomyRepository for MemoryStore {
    async fn find_categories(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>> {
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Category> = state
            .categories
            .iter()
            .filter(|c| Self::category_matches(c, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn create_category(&self, data: NewCategory) -> AppResult<Category> {
        if self
            .fail_category_names
            .contains(&naming::normalize(&data.name))
        {
            return Err(AppError::DatabaseError(
                "simulated category insert failure".to_string(),
            ));
        }
        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            description: data.description,
            is_active: true,
            parent_id: data.parent_id,
            created_at: now,
            updated_at: now,
        };
        self.state
            .lock()
            .unwrap()
            .categories
            .push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: Uuid, changes: CategoryUpdate) -> AppResult<Category> {
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::NotFound(format!("category {}", id)))?;
        if let Some(parent_id) = changes.parent_id {
            category.parent_id = parent_id;
        }
        category.updated_at = Utc::now();
        Ok(category.clone())
    }

    async fn supports_chapters(&self) -> AppResult<bool> {
        Ok(self.chapters_enabled)
    }

    async fn find_chapters(&self, filter: &ChapterFilter) -> AppResult<Vec<Chapter>> {
        if !self.chapters_enabled {
            return Err(Self::missing_relation());
        }
        let state = self.state.lock().unwrap();
        let mut rows: Vec<Chapter> = state
            .chapters
            .iter()
            .filter(|c| Self::chapter_matches(c, filter))
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            a.position
                .cmp(&b.position)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(rows)
    }

    async fn create_chapter(&self, data: NewChapter) -> AppResult<Chapter> {
        if !self.chapters_enabled {
            return Err(Self::missing_relation());
        }
        if self
            .fail_chapter_names
            .contains(&naming::normalize(&data.name))
        {
            return Err(AppError::DatabaseError(
                "simulated chapter insert failure".to_string(),
            ));
        }
        let chapter = Chapter {
            id: Uuid::new_v4(),
            name: data.name.trim().to_string(),
            category_id: data.category_id,
            is_active: true,
            position: data.position,
            created_at: Utc::now(),
        };
        self.state.lock().unwrap().chapters.push(chapter.clone());
        Ok(chapter)
    }
}
