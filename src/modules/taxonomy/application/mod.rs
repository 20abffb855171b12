pub mod curricula;
pub mod repair_service;
pub mod seeder;
pub mod stats_service;

pub use repair_service::{OrphanRecord, RepairReport, TreeRepairService};
pub use seeder::{
    ChapterSpec, CurriculumSpec, HierarchySeeder, RootSpec, SeedFailure, SeedSummary,
    SubcategorySpec,
};
pub use stats_service::{TreeStats, TreeStatsService};
