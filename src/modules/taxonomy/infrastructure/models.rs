/// Diesel models for the categories and chapters tables
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::taxonomy::domain::entities::{Category, Chapter};
use crate::schema::{categories, chapters};

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = categories)]
pub struct CategoryModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CategoryModel {
    pub fn into_entity(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
            description: self.description,
            is_active: self.is_active,
            parent_id: self.parent_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = categories)]
pub struct NewCategoryModel {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub parent_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Update set for repair operations. The double Option on `parent_id`
/// distinguishes "leave unchanged" (None) from "set NULL" (Some(None)).
#[derive(AsChangeset, Debug)]
#[diesel(table_name = categories)]
pub struct CategoryChangeset {
    pub parent_id: Option<Option<Uuid>>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = chapters)]
pub struct ChapterModel {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub is_active: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}

impl ChapterModel {
    pub fn into_entity(self) -> Chapter {
        Chapter {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            is_active: self.is_active,
            position: self.position,
            created_at: self.created_at,
        }
    }
}

#[derive(Insertable, Debug)]
#[diesel(table_name = chapters)]
pub struct NewChapterModel {
    pub id: Uuid,
    pub name: String,
    pub category_id: Uuid,
    pub is_active: bool,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
