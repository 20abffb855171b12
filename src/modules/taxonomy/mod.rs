/// Category tree maintenance module
///
/// Administrative operations over the two-level category/chapter tree:
/// - Repair: detect children with dangling parent references, optionally
///   promote them to roots
/// - Seeding: idempotently materialize the built-in curriculum structures
/// - Stats: read-only nested counts for operator display
///
/// Architecture:
/// - Domain: entities, the persistence gateway trait and tree helpers
/// - Application: the repair/seeder/stats services and seed payloads
/// - Infrastructure: Diesel-based gateway implementation
pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy access
pub use application::{
    CurriculumSpec, HierarchySeeder, RepairReport, SeedSummary, TreeRepairService, TreeStats,
    TreeStatsService,
};
pub use domain::{entities::Category, entities::Chapter, TaxonomyRepository};
pub use infrastructure::TaxonomyRepositoryImpl;
