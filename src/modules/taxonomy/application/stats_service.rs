use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::modules::taxonomy::domain::repositories::{
    CategoryFilter, ChapterFilter, TaxonomyRepository,
};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Serialize)]
pub struct SubcategoryStats {
    pub name: String,
    /// None when the chapter relation is absent in this deployment.
    pub chapters: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RootStats {
    pub name: String,
    pub subcategories: Vec<SubcategoryStats>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TreeStats {
    pub roots: Vec<RootStats>,
    pub chapters_supported: bool,
}

impl TreeStats {
    pub fn total_roots(&self) -> usize {
        self.roots.len()
    }

    pub fn total_subcategories(&self) -> usize {
        self.roots.iter().map(|r| r.subcategories.len()).sum()
    }

    pub fn total_chapters(&self) -> Option<usize> {
        if !self.chapters_supported {
            return None;
        }
        Some(
            self.roots
                .iter()
                .flat_map(|r| &r.subcategories)
                .filter_map(|s| s.chapters)
                .sum(),
        )
    }
}

impl fmt::Display for TreeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for root in &self.roots {
            writeln!(f, "{} ({} subcategories)", root.name, root.subcategories.len())?;
            for sub in &root.subcategories {
                match sub.chapters {
                    Some(count) => writeln!(f, "  {} - {} chapters", sub.name, count)?,
                    None => writeln!(f, "  {}", sub.name)?,
                }
            }
        }
        write!(
            f,
            "Total: {} categories, {} subcategories",
            self.total_roots(),
            self.total_subcategories()
        )?;
        match self.total_chapters() {
            Some(count) => write!(f, ", {} chapters", count),
            None => write!(f, " (chapters unavailable)"),
        }
    }
}

/// Read-only nested counts over the active tree, for operator display.
pub struct TreeStatsService {
    repo: Arc<dyn TaxonomyRepository>,
}

impl TreeStatsService {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    pub async fn collect(&self) -> AppResult<TreeStats> {
        let chapters_supported = self.repo.supports_chapters().await?;

        let roots = self
            .repo
            .find_categories(&CategoryFilter::active_roots())
            .await?;

        let mut stats = TreeStats {
            roots: Vec::with_capacity(roots.len()),
            chapters_supported,
        };

        for root in roots {
            let children = self
                .repo
                .find_categories(&CategoryFilter::active_children_of(root.id))
                .await?;

            let mut subcategories = Vec::with_capacity(children.len());
            for child in children {
                let chapters = if chapters_supported {
                    Some(
                        self.repo
                            .find_chapters(&ChapterFilter::active_in(child.id))
                            .await?
                            .len(),
                    )
                } else {
                    None
                };
                subcategories.push(SubcategoryStats {
                    name: child.name,
                    chapters,
                });
            }

            stats.roots.push(RootStats {
                name: root.name,
                subcategories,
            });
        }

        Ok(stats)
    }
}
