use std::sync::Arc;

use serde::Serialize;

use crate::modules::taxonomy::domain::{
    entities::Category,
    repositories::{CategoryFilter, ChapterFilter, NewCategory, NewChapter, TaxonomyRepository},
};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_debug, log_error, log_info, log_warn};

/// Declarative curriculum structure: roots, their subcategories and the
/// ordered chapters under each. Seeding creates only what is missing.
#[derive(Debug, Clone)]
pub struct CurriculumSpec {
    pub domain: &'static str,
    pub roots: Vec<RootSpec>,
}

#[derive(Debug, Clone)]
pub struct RootSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub subcategories: Vec<SubcategorySpec>,
    /// Chapters declared directly on the root. Chapters cannot attach to
    /// a root, so these land in a synthesized `<root> - General`
    /// subcategory.
    pub chapters: Vec<ChapterSpec>,
}

#[derive(Debug, Clone)]
pub struct SubcategorySpec {
    pub name: &'static str,
    pub chapters: Vec<ChapterSpec>,
}

#[derive(Debug, Clone, Copy)]
pub struct ChapterSpec {
    pub name: &'static str,
    pub position: i32,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LayerCounts {
    pub created: usize,
    pub found: usize,
}

/// A node that could not be seeded. Leaf-level failures are collected
/// here instead of aborting the run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedFailure {
    pub scope: String,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SeedSummary {
    pub categories: LayerCounts,
    pub subcategories: LayerCounts,
    pub chapters: LayerCounts,
    /// Chapters not attempted because the relation is absent.
    pub chapters_skipped: usize,
    pub chapters_supported: bool,
    pub failures: Vec<SeedFailure>,
}

impl SeedSummary {
    pub fn total_created(&self) -> usize {
        self.categories.created + self.subcategories.created + self.chapters.created
    }
}

/// Idempotently materializes a [`CurriculumSpec`] in the store.
///
/// Matching is exact on the normalized name, scoped to the parent, so a
/// second run over the same spec creates nothing. Assumes a single
/// writer: two concurrent runs could both miss a lookup and create
/// duplicate nodes.
pub struct HierarchySeeder {
    repo: Arc<dyn TaxonomyRepository>,
}

impl HierarchySeeder {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn seed(&self, spec: &CurriculumSpec) -> AppResult<SeedSummary> {
        let mut summary = SeedSummary {
            chapters_supported: self.repo.supports_chapters().await?,
            ..Default::default()
        };
        if !summary.chapters_supported {
            log_warn!("Chapter relation absent in this deployment; seeding categories only");
        }

        log_info!(
            "Seeding '{}' curriculum: {} root(s)",
            spec.domain,
            spec.roots.len()
        );

        for root_spec in &spec.roots {
            // One failing root must not sink the other roots in the spec
            if let Err(err) = self.seed_root(root_spec, &mut summary).await {
                if matches!(err, AppError::StoreUnavailable(_)) {
                    return Err(err);
                }
                log_error!("Failed to seed root '{}': {}", root_spec.name, err);
                summary.failures.push(SeedFailure {
                    scope: "root".to_string(),
                    name: root_spec.name.to_string(),
                    reason: err.to_string(),
                });
            }
        }

        log_info!(
            "Seeding '{}' complete: {} created, {} failure(s)",
            spec.domain,
            summary.total_created(),
            summary.failures.len()
        );

        Ok(summary)
    }

    async fn seed_root(&self, root: &RootSpec, summary: &mut SeedSummary) -> AppResult<()> {
        let root_cat = self.find_or_create_root(root, summary).await?;

        for sub in &root.subcategories {
            let sub_cat = self
                .find_or_create_subcategory(&root_cat, sub.name, summary)
                .await?;
            self.seed_chapters(&sub_cat, &sub.chapters, summary).await?;
        }

        if !root.chapters.is_empty() {
            let general_name = format!("{} - General", root.name);
            let sub_cat = self
                .find_or_create_subcategory(&root_cat, &general_name, summary)
                .await?;
            self.seed_chapters(&sub_cat, &root.chapters, summary).await?;
        }

        Ok(())
    }

    async fn find_or_create_root(
        &self,
        root: &RootSpec,
        summary: &mut SeedSummary,
    ) -> AppResult<Category> {
        let filter = CategoryFilter::active_roots().named(root.name);
        let existing = self.repo.find_categories(&filter).await?;

        if let Some(found) = existing.into_iter().next() {
            log_debug!("Root category '{}' already present", found.name);
            summary.categories.found += 1;
            return Ok(found);
        }

        let created = self
            .repo
            .create_category(NewCategory {
                name: root.name.to_string(),
                description: Some(root.description.to_string()),
                parent_id: None,
            })
            .await?;
        log_info!("Created root category '{}'", created.name);
        summary.categories.created += 1;
        Ok(created)
    }

    async fn find_or_create_subcategory(
        &self,
        parent: &Category,
        name: &str,
        summary: &mut SeedSummary,
    ) -> AppResult<Category> {
        let filter = CategoryFilter::active_children_of(parent.id).named(name);
        let existing = self.repo.find_categories(&filter).await?;

        if let Some(found) = existing.into_iter().next() {
            log_debug!(
                "Subcategory '{}' already present under '{}'",
                found.name,
                parent.name
            );
            summary.subcategories.found += 1;
            return Ok(found);
        }

        let created = self
            .repo
            .create_category(NewCategory {
                name: name.to_string(),
                description: None,
                parent_id: Some(parent.id),
            })
            .await?;
        log_info!(
            "Created subcategory '{}' under '{}'",
            created.name,
            parent.name
        );
        summary.subcategories.created += 1;
        Ok(created)
    }

    async fn seed_chapters(
        &self,
        parent: &Category,
        chapters: &[ChapterSpec],
        summary: &mut SeedSummary,
    ) -> AppResult<()> {
        if !summary.chapters_supported {
            if !chapters.is_empty() {
                log_debug!(
                    "Skipping {} chapter(s) under '{}': relation absent",
                    chapters.len(),
                    parent.name
                );
                summary.chapters_skipped += chapters.len();
            }
            return Ok(());
        }

        for spec in chapters {
            match self.find_or_create_chapter(parent, spec).await {
                Ok(true) => summary.chapters.created += 1,
                Ok(false) => summary.chapters.found += 1,
                Err(err) => {
                    if matches!(err, AppError::StoreUnavailable(_)) {
                        return Err(err);
                    }
                    // A single bad chapter must not stop its siblings
                    log_warn!(
                        "Failed to seed chapter '{}' under '{}': {}",
                        spec.name,
                        parent.name,
                        err
                    );
                    summary.failures.push(SeedFailure {
                        scope: format!("chapter under '{}'", parent.name),
                        name: spec.name.to_string(),
                        reason: err.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Returns true when the chapter had to be created.
    async fn find_or_create_chapter(
        &self,
        parent: &Category,
        spec: &ChapterSpec,
    ) -> AppResult<bool> {
        let filter = ChapterFilter::active_in(parent.id).named(spec.name);
        let existing = self.repo.find_chapters(&filter).await?;
        if !existing.is_empty() {
            return Ok(false);
        }

        self.repo
            .create_chapter(NewChapter {
                name: spec.name.to_string(),
                category_id: parent.id,
                position: spec.position,
            })
            .await?;
        log_debug!("Created chapter '{}' under '{}'", spec.name, parent.name);
        Ok(true)
    }
}
