mod harness;
use harness::{FakeApi, project};

/// Drag-reorder persistence against the in-memory API over real HTTP.
///
/// A drop writes every position concurrently, joins the batch, and only then
/// reloads; any failed write restores the pre-drop order without a reload.
#[cfg(test)]
mod reorder_integration_tests {
    use super::*;
    use app::reorder::{OrderedCollection, ReorderOutcome, is_contiguous};
    use app::types::{EntityId, Project};
    use assert_matches::assert_matches;
    use axum::http::Method;
    use serde_json::json;

    fn ids(collection: &OrderedCollection<Project>) -> Vec<EntityId> {
        collection.items().iter().map(|project| project.id).collect()
    }

    async fn seeded(api: &FakeApi, count: i64) -> OrderedCollection<Project> {
        let records: Vec<_> = (1..=count)
            .map(|id| project(id, &format!("P{id}"), i32::try_from(id - 1).unwrap()))
            .collect();
        api.seed("/projects/", &records);
        let fetched = api.client().list::<Project>().await.unwrap();
        api.clear_requests();
        OrderedCollection::new(fetched)
    }

    #[tokio::test]
    async fn test_refresh_is_idempotent() {
        let api = FakeApi::start().await;
        seeded(&api, 4).await;
        let client = api.client();

        let first = client.list::<Project>().await.unwrap();
        let second = client.list::<Project>().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.len(), 4);
    }

    #[tokio::test]
    async fn test_move_to_front_rewrites_every_position() {
        let api = FakeApi::start().await;
        let mut collection = seeded(&api, 3).await;

        let outcome = collection.move_item(&api.client(), 3, 1).await.unwrap();

        assert_matches!(outcome, ReorderOutcome::Reconciled);
        assert_eq!(ids(&collection), [3, 1, 2]);
        assert!(is_contiguous(collection.items()));

        let mut writes = api.writes();
        writes.sort_by(|a, b| a.0.cmp(&b.0));
        assert_eq!(
            writes,
            [
                ("/projects/1".to_owned(), json!({ "order_index": 1 })),
                ("/projects/2".to_owned(), json!({ "order_index": 2 })),
                ("/projects/3".to_owned(), json!({ "order_index": 0 })),
            ]
        );

        // Exactly one reload, issued after the writes.
        let requests = api.requests();
        let last = requests.last().unwrap();
        assert_eq!((last.method.clone(), last.path.as_str()), (Method::GET, "/projects/"));
        assert_eq!(requests.iter().filter(|r| r.method == Method::GET).count(), 1);
    }

    #[tokio::test]
    async fn test_failed_write_reverts_without_reload() {
        let api = FakeApi::start().await;
        let mut collection = seeded(&api, 3).await;
        api.fail_writes_to(1);

        let outcome = collection.move_item(&api.client(), 3, 1).await.unwrap();

        assert_matches!(outcome, ReorderOutcome::Reverted(err) if err.status() == Some(500));
        assert_eq!(ids(&collection), [1, 2, 3]);
        assert!(collection.is_idle());
        // All three writes were attempted; none was a reload.
        assert_eq!(api.writes().len(), 3);
        assert!(api.requests().iter().all(|r| r.method != Method::GET));
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_optimistic_order() {
        let api = FakeApi::start().await;
        let mut collection = seeded(&api, 3).await;
        api.fail_lists_of("/projects/");

        let outcome = collection.move_item(&api.client(), 1, 3).await.unwrap();

        assert_matches!(outcome, ReorderOutcome::ReloadFailed(_));
        assert_eq!(ids(&collection), [2, 3, 1]);
        assert!(collection.is_idle());

        // The server already holds the new order; the next refresh catches up.
        api.clear_failures();
        collection.sync(api.client().list::<Project>().await.unwrap());
        assert_eq!(ids(&collection), [2, 3, 1]);
    }

    #[tokio::test]
    async fn test_self_drop_sends_nothing() {
        let api = FakeApi::start().await;
        let mut collection = seeded(&api, 3).await;

        let outcome = collection.move_item(&api.client(), 2, 2).await.unwrap();

        assert_matches!(outcome, ReorderOutcome::Unchanged);
        assert_eq!(ids(&collection), [1, 2, 3]);
        assert!(api.requests().is_empty());
    }

    #[tokio::test]
    async fn test_any_move_leaves_contiguous_positions() {
        let api = FakeApi::start().await;
        let count = 5;

        for from in 0..5_usize {
            for to in 0..5_usize {
                if from == to {
                    continue;
                }
                let mut collection = seeded(&api, count).await;
                let mut expected = ids(&collection);
                let moved = expected.remove(from);
                expected.insert(to, moved);

                let target = collection.items()[to].id;
                let outcome = collection.move_item(&api.client(), moved, target).await.unwrap();

                assert_matches!(outcome, ReorderOutcome::Reconciled);
                assert_eq!(ids(&collection), expected, "moving {from} -> {to}");
                let stored: Vec<_> = api.records("/projects/").iter().map(|r| r["order_index"].clone()).collect();
                assert_eq!(stored, [json!(0), json!(1), json!(2), json!(3), json!(4)]);
                assert!(is_contiguous(collection.items()));
            }
        }
    }
}
