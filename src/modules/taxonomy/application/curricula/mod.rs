/// Built-in curriculum payloads, one per knowledge domain. All are
/// structurally identical; only the static data differs.
mod geography;
mod history;
mod polity;

use super::seeder::CurriculumSpec;

pub fn all() -> Vec<CurriculumSpec> {
    vec![
        geography::curriculum(),
        history::curriculum(),
        polity::curriculum(),
    ]
}

pub fn by_domain(domain: &str) -> Option<CurriculumSpec> {
    all()
        .into_iter()
        .find(|c| c.domain.eq_ignore_ascii_case(domain.trim()))
}

pub fn domain_names() -> Vec<&'static str> {
    all().into_iter().map(|c| c.domain).collect()
}
