pub mod taxonomy_repository_impl;

pub use taxonomy_repository_impl::TaxonomyRepositoryImpl;
