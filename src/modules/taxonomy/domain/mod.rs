pub mod entities;
pub mod repositories;
pub mod services;

pub use entities::{Category, Chapter};
pub use repositories::TaxonomyRepository;
