use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use treekeeper::log_error;
use treekeeper::modules::taxonomy::{
    application::curricula, CurriculumSpec, HierarchySeeder, SeedSummary, TaxonomyRepository,
    TaxonomyRepositoryImpl,
};
use treekeeper::shared::{errors::AppResult, utils::init_logger, Database};

/// Seed the built-in curriculum structures. Idempotent: only missing
/// nodes are created, existing ones are left untouched.
#[derive(Parser, Debug)]
#[command(name = "seed-curriculum", version, about)]
struct Args {
    /// Domain to seed (repeatable). Seeds every domain when omitted.
    #[arg(long = "domain")]
    domains: Vec<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();

    let args = Args::parse();

    let specs = match resolve_specs(&args.domains) {
        Ok(specs) => specs,
        Err(unknown) => {
            log_error!(
                "Unknown domain '{}'. Available: {}",
                unknown,
                curricula::domain_names().join(", ")
            );
            return ExitCode::FAILURE;
        }
    };

    match run(&specs).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log_error!("Seeding failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn resolve_specs(domains: &[String]) -> Result<Vec<CurriculumSpec>, String> {
    if domains.is_empty() {
        return Ok(curricula::all());
    }
    domains
        .iter()
        .map(|domain| curricula::by_domain(domain).ok_or_else(|| domain.clone()))
        .collect()
}

async fn run(specs: &[CurriculumSpec]) -> AppResult<()> {
    let db = Arc::new(Database::new()?);
    let repo: Arc<dyn TaxonomyRepository> = Arc::new(TaxonomyRepositoryImpl::new(db));
    let seeder = HierarchySeeder::new(repo);

    for spec in specs {
        let summary = seeder.seed(spec).await?;
        print_summary(spec.domain, &summary);
    }

    Ok(())
}

fn print_summary(domain: &str, summary: &SeedSummary) {
    println!("[{}]", domain);
    println!(
        "  categories:    {} created, {} found",
        summary.categories.created, summary.categories.found
    );
    println!(
        "  subcategories: {} created, {} found",
        summary.subcategories.created, summary.subcategories.found
    );
    if summary.chapters_supported {
        println!(
            "  chapters:      {} created, {} found",
            summary.chapters.created, summary.chapters.found
        );
    } else {
        println!(
            "  chapters:      skipped ({} declared, table missing)",
            summary.chapters_skipped
        );
    }
    for failure in &summary.failures {
        println!(
            "  FAILED {} '{}': {}",
            failure.scope, failure.name, failure.reason
        );
    }
}
