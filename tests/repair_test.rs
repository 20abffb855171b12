/// Tree repair tests
///
/// Covers orphan detection, read-only scans and repair convergence.
mod utils;

use std::sync::Arc;

use treekeeper::modules::taxonomy::application::repair_service::TreeRepairService;
use utils::MemoryStore;
use uuid::Uuid;

#[tokio::test]
async fn dangling_parent_reference_is_reported_once() {
    let store = Arc::new(MemoryStore::new());
    store.insert_category("Geography", None, true);
    let orphan = store.insert_category("Fake", Some(Uuid::new_v4()), true);

    let service = TreeRepairService::new(store.clone());
    let report = service.scan_and_repair(false).await.unwrap();

    assert_eq!(report.roots, 1);
    assert_eq!(report.children, 1);
    assert_eq!(report.orphans.len(), 1);
    assert_eq!(report.orphans[0].id, orphan.id);
    assert_eq!(report.orphans[0].name, "Fake");
    assert_eq!(report.promoted, 0);
}

#[tokio::test]
async fn scan_without_fix_leaves_the_store_unchanged() {
    let store = Arc::new(MemoryStore::new());
    store.insert_category("Geography", None, true);
    store.insert_category("Fake", Some(Uuid::new_v4()), true);
    let before = store.categories();

    let service = TreeRepairService::new(store.clone());
    service.scan_and_repair(false).await.unwrap();

    assert_eq!(store.categories(), before);
}

#[tokio::test]
async fn fix_promotes_orphans_and_converges() {
    let store = Arc::new(MemoryStore::new());
    store.insert_category("Geography", None, true);
    let orphan = store.insert_category("Fake", Some(Uuid::new_v4()), true);

    let service = TreeRepairService::new(store.clone());
    let first = service.scan_and_repair(true).await.unwrap();

    assert_eq!(first.promoted, 1);
    assert!(first.orphans[0].promoted);

    let fixed = store
        .categories()
        .into_iter()
        .find(|c| c.id == orphan.id)
        .unwrap();
    assert!(fixed.parent_id.is_none());

    let second = service.scan_and_repair(true).await.unwrap();
    assert!(second.is_clean());
    assert_eq!(second.roots, 2);
    assert_eq!(second.children, 0);
}

#[tokio::test]
async fn inactive_orphans_are_still_detected() {
    let store = Arc::new(MemoryStore::new());
    store.insert_category("Geography", None, true);
    let orphan = store.insert_category("Retired", Some(Uuid::new_v4()), false);

    let service = TreeRepairService::new(store.clone());
    let report = service.scan_and_repair(false).await.unwrap();

    assert_eq!(report.orphans.len(), 1);
    assert_eq!(report.orphans[0].id, orphan.id);
}

#[tokio::test]
async fn resolvable_children_are_not_reported() {
    let store = Arc::new(MemoryStore::new());
    let root = store.insert_category("Geography", None, true);
    store.insert_category("Physical Geography", Some(root.id), true);

    let service = TreeRepairService::new(store.clone());
    let report = service.scan_and_repair(true).await.unwrap();

    assert!(report.is_clean());
    assert_eq!(report.promoted, 0);
}

#[tokio::test]
async fn parent_reference_to_a_non_root_is_repaired() {
    let store = Arc::new(MemoryStore::new());
    let root = store.insert_category("Geography", None, true);
    let child = store.insert_category("Physical Geography", Some(root.id), true);
    let nested = store.insert_category("Soil", Some(child.id), true);

    let service = TreeRepairService::new(store.clone());
    let report = service.scan_and_repair(true).await.unwrap();

    assert_eq!(report.orphans.len(), 1);
    assert_eq!(report.orphans[0].id, nested.id);
    assert_eq!(report.orphans[0].dangling_parent_id, child.id);

    let second = service.scan_and_repair(false).await.unwrap();
    assert!(second.is_clean());
}
