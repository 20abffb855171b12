pub mod taxonomy_repository;

pub use taxonomy_repository::{
    CategoryFilter, CategoryUpdate, ChapterFilter, NewCategory, NewChapter, ParentScope,
    TaxonomyRepository,
};

#[cfg(test)]
pub use taxonomy_repository::MockTaxonomyRepository;
