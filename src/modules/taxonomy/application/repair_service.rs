use std::sync::Arc;

use serde::Serialize;
use uuid::Uuid;

use crate::modules::taxonomy::domain::{
    repositories::{CategoryFilter, CategoryUpdate, TaxonomyRepository},
    services::TreePartition,
};
use crate::shared::errors::AppResult;
use crate::{log_info, log_warn};

/// A child category whose parent reference resolves to nothing.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanRecord {
    pub id: Uuid,
    pub name: String,
    pub dangling_parent_id: Uuid,
    /// True once the orphan has been promoted to root in this run.
    pub promoted: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RepairReport {
    pub roots: usize,
    pub children: usize,
    pub orphans: Vec<OrphanRecord>,
    pub promoted: usize,
}

impl RepairReport {
    pub fn is_clean(&self) -> bool {
        self.orphans.is_empty()
    }
}

/// Detects and optionally corrects structural violations in the
/// category tree. The only automated fix is promoting an orphan to
/// root: any other reassignment needs human judgement about the
/// intended parent.
pub struct TreeRepairService {
    repo: Arc<dyn TaxonomyRepository>,
}

impl TreeRepairService {
    pub fn new(repo: Arc<dyn TaxonomyRepository>) -> Self {
        Self { repo }
    }

    /// Single pass over the whole tree. Read-only unless `apply_fix` is
    /// set; with the fix applied a second run reports zero orphans.
    ///
    /// Inactive categories are inspected too: a deactivated child with a
    /// dangling parent reference is still a structural violation.
    pub async fn scan_and_repair(&self, apply_fix: bool) -> AppResult<RepairReport> {
        let all = self.repo.find_categories(&CategoryFilter::all()).await?;
        let partition = TreePartition::new(all);

        let mut report = RepairReport {
            roots: partition.roots.len(),
            children: partition.children.len(),
            ..Default::default()
        };

        for orphan in partition.orphans() {
            // orphans() only yields children, so the reference is present
            let Some(dangling_parent_id) = orphan.parent_id else {
                continue;
            };
            log_warn!(
                "Orphaned category '{}' ({}): parent {} does not resolve to a root",
                orphan.name,
                orphan.id,
                dangling_parent_id
            );
            report.orphans.push(OrphanRecord {
                id: orphan.id,
                name: orphan.name.clone(),
                dangling_parent_id,
                promoted: false,
            });
        }

        if apply_fix {
            for orphan in &mut report.orphans {
                self.repo
                    .update_category(orphan.id, CategoryUpdate::clear_parent())
                    .await?;
                orphan.promoted = true;
                report.promoted += 1;
                log_info!("Promoted orphan '{}' ({}) to root", orphan.name, orphan.id);
            }
        }

        log_info!(
            "Tree scan complete: {} roots, {} children, {} orphans, {} promoted",
            report.roots,
            report.children,
            report.orphans.len(),
            report.promoted
        );

        Ok(report)
    }
}
