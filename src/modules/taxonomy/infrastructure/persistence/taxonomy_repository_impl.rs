use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::sql_types::Text;
use tokio::task;
use uuid::Uuid;

use super::super::models::{
    CategoryChangeset, CategoryModel, ChapterModel, NewCategoryModel, NewChapterModel,
};
use crate::log_debug;
use crate::modules::taxonomy::domain::{
    entities::{Category, Chapter},
    repositories::{
        CategoryFilter, CategoryUpdate, ChapterFilter, NewCategory, NewChapter, ParentScope,
        TaxonomyRepository,
    },
    services::naming,
};
use crate::schema::{categories, chapters};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::Database;

diesel::define_sql_function! {
    fn lower(x: Text) -> Text;
}

diesel::define_sql_function! {
    fn btrim(x: Text) -> Text;
}

/// Diesel-backed persistence gateway for the classification tree.
///
/// Name matching happens in SQL on `lower(btrim(name))` so it agrees
/// with [`naming::normalize`] on the Rust side.
pub struct TaxonomyRepositoryImpl {
    db: Arc<Database>,
}

impl TaxonomyRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaxonomyRepository for TaxonomyRepositoryImpl {
    async fn find_categories(&self, filter: &CategoryFilter) -> AppResult<Vec<Category>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        let models = task::spawn_blocking(move || -> AppResult<Vec<CategoryModel>> {
            let mut conn = db.get_connection()?;
            let mut query = categories::table.into_boxed();

            match filter.scope {
                ParentScope::Any => {}
                ParentScope::RootsOnly => {
                    query = query.filter(categories::parent_id.is_null());
                }
                ParentScope::ChildrenOf(parent_id) => {
                    query = query.filter(categories::parent_id.eq(parent_id));
                }
            }
            if filter.active_only {
                query = query.filter(categories::is_active.eq(true));
            }
            if let Some(name) = &filter.name {
                query = query.filter(lower(btrim(categories::name)).eq(naming::normalize(name)));
            }

            let rows = query
                .order(categories::name.asc())
                .load::<CategoryModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(CategoryModel::into_entity).collect())
    }

    async fn create_category(&self, data: NewCategory) -> AppResult<Category> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<CategoryModel> {
            let mut conn = db.get_connection()?;
            let now = Utc::now();
            let new_row = NewCategoryModel {
                id: Uuid::new_v4(),
                name: data.name.trim().to_string(),
                description: data.description,
                is_active: true,
                parent_id: data.parent_id,
                created_at: now,
                updated_at: now,
            };
            let row = diesel::insert_into(categories::table)
                .values(&new_row)
                .get_result::<CategoryModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log_debug!("Created category '{}' ({})", model.name, model.id);
        Ok(model.into_entity())
    }

    async fn update_category(&self, id: Uuid, changes: CategoryUpdate) -> AppResult<Category> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<CategoryModel> {
            let mut conn = db.get_connection()?;
            let changeset = CategoryChangeset {
                parent_id: changes.parent_id,
                updated_at: Utc::now(),
            };
            let row = diesel::update(categories::table.find(id))
                .set(&changeset)
                .get_result::<CategoryModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log_debug!("Updated category '{}' ({})", model.name, model.id);
        Ok(model.into_entity())
    }

    async fn supports_chapters(&self) -> AppResult<bool> {
        let db = Arc::clone(&self.db);

        let probe = task::spawn_blocking(move || -> AppResult<i64> {
            let mut conn = db.get_connection()?;
            let count = chapters::table.count().get_result::<i64>(&mut conn)?;
            Ok(count)
        })
        .await?;

        match probe {
            Ok(_) => Ok(true),
            Err(AppError::RelationMissing(message)) => {
                log_debug!("Chapter relation probe failed: {}", message);
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    async fn find_chapters(&self, filter: &ChapterFilter) -> AppResult<Vec<Chapter>> {
        let db = Arc::clone(&self.db);
        let filter = filter.clone();

        let models = task::spawn_blocking(move || -> AppResult<Vec<ChapterModel>> {
            let mut conn = db.get_connection()?;
            let mut query = chapters::table.into_boxed();

            if let Some(category_id) = filter.category_id {
                query = query.filter(chapters::category_id.eq(category_id));
            }
            if filter.active_only {
                query = query.filter(chapters::is_active.eq(true));
            }
            if let Some(name) = &filter.name {
                query = query.filter(lower(btrim(chapters::name)).eq(naming::normalize(name)));
            }

            let rows = query
                .order((chapters::position.asc(), chapters::name.asc()))
                .load::<ChapterModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        Ok(models.into_iter().map(ChapterModel::into_entity).collect())
    }

    async fn create_chapter(&self, data: NewChapter) -> AppResult<Chapter> {
        let db = Arc::clone(&self.db);

        let model = task::spawn_blocking(move || -> AppResult<ChapterModel> {
            let mut conn = db.get_connection()?;
            let new_row = NewChapterModel {
                id: Uuid::new_v4(),
                name: data.name.trim().to_string(),
                category_id: data.category_id,
                is_active: true,
                position: data.position,
                created_at: Utc::now(),
            };
            let row = diesel::insert_into(chapters::table)
                .values(&new_row)
                .get_result::<ChapterModel>(&mut conn)?;
            Ok(row)
        })
        .await??;

        log_debug!("Created chapter '{}' ({})", model.name, model.id);
        Ok(model.into_entity())
    }
}
