use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use treekeeper::log_error;
use treekeeper::modules::taxonomy::{
    RepairReport, TaxonomyRepository, TaxonomyRepositoryImpl, TreeRepairService,
};
use treekeeper::shared::{errors::AppResult, utils::init_logger, Database};

/// Scan the category tree for orphaned children and optionally repair them.
#[derive(Parser, Debug)]
#[command(name = "repair-tree", version, about)]
struct Args {
    /// Clear dangling parent references (promote orphans to roots)
    /// instead of only reporting them
    #[arg(long)]
    fix: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();

    let args = Args::parse();

    match run(args.fix).await {
        Ok(report) => {
            print_report(&report, args.fix);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_error!("Tree repair failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(apply_fix: bool) -> AppResult<RepairReport> {
    let db = Arc::new(Database::new()?);
    let repo: Arc<dyn TaxonomyRepository> = Arc::new(TaxonomyRepositoryImpl::new(db));
    TreeRepairService::new(repo)
        .scan_and_repair(apply_fix)
        .await
}

fn print_report(report: &RepairReport, applied: bool) {
    println!("Roots:    {}", report.roots);
    println!("Children: {}", report.children);
    println!("Orphans:  {}", report.orphans.len());
    for orphan in &report.orphans {
        let outcome = if orphan.promoted {
            "promoted to root"
        } else {
            "left as-is"
        };
        println!(
            "  '{}' ({}) -> dangling parent {} [{}]",
            orphan.name, orphan.id, orphan.dangling_parent_id, outcome
        );
    }
    if report.is_clean() {
        println!("Tree is structurally sound.");
    } else if !applied {
        println!("Run with --fix to promote orphans to roots.");
    }
}
