use std::process::ExitCode;
use std::sync::Arc;

use treekeeper::log_error;
use treekeeper::modules::taxonomy::{
    TaxonomyRepository, TaxonomyRepositoryImpl, TreeStats, TreeStatsService,
};
use treekeeper::shared::{errors::AppResult, utils::init_logger, Database};

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logger();

    match run().await {
        Ok(stats) => {
            println!("{}", stats);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_error!("Stats collection failed: {}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> AppResult<TreeStats> {
    let db = Arc::new(Database::new()?);
    let repo: Arc<dyn TaxonomyRepository> = Arc::new(TaxonomyRepositoryImpl::new(db));
    TreeStatsService::new(repo).collect().await
}
