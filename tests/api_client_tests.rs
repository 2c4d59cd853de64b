mod harness;
use harness::{FakeApi, project};

/// Resource client behavior over real HTTP against the in-memory API.
///
/// Covers the happy paths of every verb plus the error normalization rules:
/// non-2xx statuses, empty bodies, undecodable bodies, and dead connections.
#[cfg(test)]
mod api_client_tests {
    use super::*;
    use app::api::{ApiClient, RequestError};
    use app::types::{ContactMessage, NewContact, NewProject, Project, ProjectChanges, Skill};
    use assert_matches::assert_matches;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_returns_records_in_server_order() {
        let api = FakeApi::start().await;
        api.seed("/projects/", &[project(2, "Second", 1), project(1, "First", 0)]);

        let projects = api.client().list::<Project>().await.unwrap();

        let titles: Vec<_> = projects.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
        assert_eq!(projects[0].tag_list(), ["rust"]);
        assert_eq!(api.requests()[0].method, Method::GET);
        assert_eq!(api.requests()[0].path, "/projects/");
    }

    #[tokio::test]
    async fn test_empty_collection_is_an_empty_list() {
        let api = FakeApi::start().await;
        let skills = api.client().list::<Skill>().await.unwrap();
        assert!(skills.is_empty());
    }

    #[tokio::test]
    async fn test_create_returns_stored_record() {
        let api = FakeApi::start().await;
        let payload = NewProject {
            title: "Portfolio".to_owned(),
            description: "This site".to_owned(),
            tags: vec!["leptos".to_owned()],
            featured: "true".to_owned(),
            order_index: 0,
            ..NewProject::default()
        };

        let created = api.client().create::<Project, _>(&payload).await.unwrap();

        assert_eq!(created.title, "Portfolio");
        assert!(created.id > 0);
        assert_eq!(created.created_at.as_deref(), Some("2024-05-01T12:00:00"));
        let body = api.requests()[0].body.clone().unwrap();
        assert_eq!(body["order_index"], 0);
        assert!(body.get("live_url").is_none());
    }

    #[tokio::test]
    async fn test_partial_update_sends_only_changed_fields() {
        let api = FakeApi::start().await;
        api.seed("/projects/", &[project(5, "Old title", 0)]);

        let changes = ProjectChanges {
            title: Some("New title".to_owned()),
            ..ProjectChanges::default()
        };
        let updated = api.client().update::<Project, _>(5, &changes).await.unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description, "Old title description");
        assert_eq!(api.writes(), [("/projects/5".to_owned(), json!({ "title": "New title" }))]);
    }

    #[tokio::test]
    async fn test_delete_accepts_no_content() {
        let api = FakeApi::start().await;
        api.seed("/projects/", &[project(1, "Doomed", 0)]);

        api.client().delete::<Project>(1).await.unwrap();

        assert!(api.records("/projects/").is_empty());
        assert_eq!(api.requests()[0].method, Method::DELETE);
        assert_eq!(api.requests()[0].path, "/projects/1");
    }

    #[tokio::test]
    async fn test_non_success_status_carries_body() {
        let api = FakeApi::start().await;

        let err = api.client().delete::<Project>(404).await.unwrap_err();

        assert_eq!(err.status(), Some(404));
        assert_matches!(&err, RequestError::Status { body, .. } if body.contains("Not found"));
        assert!(err.to_string().starts_with("API error: "));
    }

    #[tokio::test]
    async fn test_empty_error_body_falls_back_to_reason() {
        let api = FakeApi::start().await;
        api.respond_raw("/contacts/", StatusCode::INTERNAL_SERVER_ERROR, "");

        let err = api.client().list::<ContactMessage>().await.unwrap_err();

        assert_matches!(err, RequestError::Status { status: 500, ref body } if body == "Internal Server Error");
    }

    #[tokio::test]
    async fn test_invalid_json_is_a_decode_error() {
        let api = FakeApi::start().await;
        api.respond_raw("/projects/", StatusCode::OK, "<html>not json</html>");

        let err = api.client().list::<Project>().await.unwrap_err();

        assert_matches!(err, RequestError::Decode(_));
    }

    #[tokio::test]
    async fn test_void_response_for_typed_result_is_empty_body() {
        let api = FakeApi::start().await;
        api.respond_raw("/contacts/", StatusCode::OK, "");
        let payload = NewContact {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            message: "Hello".to_owned(),
        };

        let err = api.client().create::<ContactMessage, _>(&payload).await.unwrap_err();

        assert_matches!(err, RequestError::EmptyBody { ref path } if path == "/contacts/");
    }

    #[tokio::test]
    async fn test_unreachable_api_is_a_transport_error() {
        let api = FakeApi::start().await;
        let base_url = api.base_url().to_owned();
        drop(api);
        tokio::task::yield_now().await;

        // The listener is gone once the server task is aborted.
        let client = ApiClient::new(&base_url);
        let mut outcome = client.list::<Project>().await;
        for _ in 0..20 {
            if outcome.is_err() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            outcome = client.list::<Project>().await;
        }

        assert_matches!(outcome, Err(RequestError::Transport(_)));
    }

    #[tokio::test]
    async fn test_latest_resume_may_be_absent() {
        let api = FakeApi::start().await;
        let client = api.client();

        assert_eq!(client.latest_resume().await.unwrap(), None);

        api.set_resume(Some(json!({
            "id": 3,
            "original_filename": "cv.pdf",
            "file_url": "https://cdn.example.dev/cv.pdf",
        })));
        let resume = client.latest_resume().await.unwrap().unwrap();
        assert_eq!(resume.original_filename, "cv.pdf");
        assert_eq!(resume.mime_type, "application/pdf");
    }

    #[tokio::test]
    async fn test_contact_round_trip() {
        let api = FakeApi::start().await;
        let client = api.client();
        let payload = NewContact {
            name: "Grace".to_owned(),
            email: "grace@example.com".to_owned(),
            message: "Let's talk".to_owned(),
        };

        let created = client.create::<ContactMessage, _>(&payload).await.unwrap();
        let inbox = client.list::<ContactMessage>().await.unwrap();

        assert_eq!(inbox, [created.clone()]);
        assert_eq!(created.status.as_deref(), Some("new"));
    }
}
