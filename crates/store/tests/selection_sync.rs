//! Integration tests for list/detail synchronization.
//!
//! Whenever a property is open in detail view, its snapshot must match the
//! master list entry after every mutation that touches it, and deleting
//! the open property must drop the selection back to the list state.

use std::sync::Arc;

use estate_events::EventBus;
use estate_gateway::mock::{LatencyProfile, MockGateway};
use estate_gateway::models::document::FileUpload;
use estate_gateway::models::property::UpdateProperty;
use estate_store::PropertyStore;

fn setup() -> Arc<PropertyStore> {
    let gateway = Arc::new(MockGateway::seeded(LatencyProfile::zero()));
    let bus = Arc::new(EventBus::default());
    Arc::new(PropertyStore::new(gateway, bus))
}

fn pdf(name: &str) -> FileUpload {
    FileUpload::new(name, "application/pdf", b"%PDF-1.4".to_vec())
}

#[tokio::test]
async fn opening_a_property_records_its_current_snapshot() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");

    let opened = store.open_detail(list[1].id).expect("known id");
    assert_eq!(opened.id, list[1].id);
    assert_eq!(opened.documents.len(), list[1].documents.len());
    assert_eq!(store.selected().map(|p| p.id), Some(list[1].id));
}

#[tokio::test]
async fn opening_an_unknown_id_stays_in_list_state() {
    let store = setup();
    store.fetch_all().await.expect("fetch");

    assert!(store.open_detail(uuid::Uuid::now_v7()).is_none());
    assert!(store.selected().is_none());
}

#[tokio::test]
async fn back_action_clears_the_selection() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");

    store.open_detail(list[0].id);
    store.close_detail();
    assert!(store.selected().is_none());
}

#[tokio::test]
async fn upload_on_the_open_property_updates_both_views() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let target = list[3].id;

    store.open_detail(target);
    let ops = store.documents(target);
    ops.upload(vec![pdf("deed.pdf")]).await.expect("upload");

    let entry = store
        .properties()
        .into_iter()
        .find(|p| p.id == target)
        .expect("listed");
    let open = store.selected().expect("still open");

    assert_eq!(open.documents.len(), 1);
    let entry_ids: Vec<_> = entry.documents.iter().map(|d| d.id).collect();
    let open_ids: Vec<_> = open.documents.iter().map(|d| d.id).collect();
    assert_eq!(entry_ids, open_ids);
}

#[tokio::test]
async fn document_delete_on_the_open_property_updates_both_views() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let target = list[1].clone();
    let victim = target.documents[0].clone();

    store.open_detail(target.id);
    let ops = store.documents(target.id);
    assert!(ops.delete(victim.id).await.expect("delete"));

    let entry = store
        .properties()
        .into_iter()
        .find(|p| p.id == target.id)
        .expect("listed");
    let open = store.selected().expect("still open");

    assert_eq!(open.documents.len(), 2);
    assert!(!open.documents.iter().any(|d| d.id == victim.id));
    let entry_ids: Vec<_> = entry.documents.iter().map(|d| d.id).collect();
    let open_ids: Vec<_> = open.documents.iter().map(|d| d.id).collect();
    assert_eq!(entry_ids, open_ids);
}

#[tokio::test]
async fn field_update_on_the_open_property_refreshes_the_snapshot() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let target = list[0].id;

    store.open_detail(target);
    let patch = UpdateProperty {
        price: Some("$775,000".into()),
        ..Default::default()
    };
    store
        .update(target, patch)
        .await
        .expect("update")
        .expect("exists");

    assert_eq!(
        store.selected().map(|p| p.price),
        Some("$775,000".to_string())
    );
}

#[tokio::test]
async fn deleting_the_open_property_returns_to_list_state() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let target = list[0].id;

    store.open_detail(target);
    assert!(store.delete(target).await.expect("delete"));

    assert!(store.selected().is_none());
    assert_eq!(store.properties().len(), 4);
}

#[tokio::test]
async fn mutations_on_other_properties_leave_the_snapshot_intact() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let open = list[0].clone();
    let other = list[4].id;

    store.open_detail(open.id);
    let ops = store.documents(other);
    ops.upload(vec![pdf("unrelated.pdf")]).await.expect("upload");

    let snapshot = store.selected().expect("still open");
    assert_eq!(snapshot.id, open.id);
    assert_eq!(snapshot.documents.len(), open.documents.len());
}

#[tokio::test]
async fn refetch_rederives_the_open_snapshot() {
    let store = setup();
    let list = store.fetch_all().await.expect("fetch");
    let target = list[1].id;

    store.open_detail(target);
    // A second fetch replaces the list wholesale; the open reference must
    // be re-derived from the fresh entries, not kept as a stale copy.
    store.fetch_all().await.expect("refetch");

    let open = store.selected().expect("still open");
    assert_eq!(open.id, target);
    assert_eq!(open.documents.len(), 3);
}
