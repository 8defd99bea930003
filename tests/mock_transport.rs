//! Integration tests using a mock transport.
//!
//! Drives `UserDirectory` end-to-end without network access by answering
//! each URL with a canned envelope or error.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

use userdir::directory::UserDirectory;
use userdir::models::{ResponseEnvelope, User};
use userdir::transport::{Lookup, Transport, TransportError};

const BASE: &str = "https://api.example.com";

/// What the mock answers for a given URL.
enum Reply {
    Envelope(u16, Option<Value>),
    Fail(&'static str),
}

/// A mock transport keyed by full URL. Unknown URLs answer 404.
#[derive(Default)]
struct MockTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    fn new() -> Self {
        Self::default()
    }

    fn reply(mut self, path: &str, status: u16, payload: Option<Value>) -> Self {
        self.replies
            .insert(format!("{BASE}{path}"), Reply::Envelope(status, payload));
        self
    }

    fn fail(mut self, path: &str, reason: &'static str) -> Self {
        self.replies.insert(format!("{BASE}{path}"), Reply::Fail(reason));
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn fetch(&self, url: &str) -> Result<ResponseEnvelope<Value>, TransportError> {
        self.calls.lock().unwrap().push(url.to_string());
        match self.replies.get(url) {
            Some(Reply::Envelope(status, payload)) => {
                Ok(ResponseEnvelope::new(*status, payload.clone(), None))
            }
            Some(Reply::Fail(reason)) => Err(TransportError::Request(reason.to_string())),
            None => Ok(ResponseEnvelope::new(404, None, Some("Not Found".into()))),
        }
    }
}

/// Helper: wire-format user record.
fn user_json(id: u32, name: &str, email: &str, active: bool) -> Value {
    json!({
        "id": id,
        "name": name,
        "email": email,
        "is_active": active,
        "created_at": "2024-01-15T08:00:00Z",
    })
}

fn directory(transport: MockTransport) -> (UserDirectory, Arc<MockTransport>) {
    let transport = Arc::new(transport);
    let dir = UserDirectory::new(BASE, transport.clone());
    (dir, transport)
}

fn ids(users: &[User]) -> Vec<u32> {
    users.iter().map(User::id).collect()
}

// ---------------------------------------------------------------------------
// fetch_by_id
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_by_id_returns_user_on_200() {
    let (dir, transport) = directory(
        MockTransport::new().reply("/users/42", 200, Some(user_json(42, "Ada", "ada@x.com", true))),
    );

    let user = dir.fetch_by_id(42).await.expect("user should be found");
    assert_eq!(user.id(), 42);
    assert_eq!(user.name(), "Ada");
    let expected: DateTime<Utc> = "2024-01-15T08:00:00Z".parse().unwrap();
    assert_eq!(user.created_at(), expected);
    assert_eq!(transport.calls(), vec![format!("{BASE}/users/42")]);
}

#[tokio::test]
async fn fetch_by_id_collapses_404_empty_200_and_transport_failure() {
    let (dir, _) = directory(
        MockTransport::new()
            .reply("/users/1", 404, None)
            .reply("/users/2", 200, None)
            .fail("/users/3", "connection refused"),
    );

    // All three outcomes look the same to the caller.
    assert_eq!(dir.fetch_by_id(1).await, None);
    assert_eq!(dir.fetch_by_id(2).await, None);
    assert_eq!(dir.fetch_by_id(3).await, None);
}

#[tokio::test]
async fn lookup_by_id_keeps_outcomes_apart() {
    let (dir, _) = directory(
        MockTransport::new()
            .reply("/users/1", 404, None)
            .reply("/users/2", 200, None)
            .fail("/users/3", "connection refused")
            .reply("/users/4", 200, Some(user_json(4, "D", "d@x.com", false))),
    );

    assert!(dir.lookup_by_id(1).await.is_not_found());
    assert!(dir.lookup_by_id(2).await.is_not_found());
    match dir.lookup_by_id(3).await {
        Lookup::TransportFailed(e) => assert!(e.to_string().contains("connection refused")),
        other => panic!("expected transport failure, got {other:?}"),
    }
    assert!(dir.lookup_by_id(4).await.is_found());
}

#[tokio::test]
async fn fetch_by_id_ignores_payload_on_non_200() {
    let (dir, _) = directory(
        MockTransport::new().reply("/users/5", 500, Some(user_json(5, "E", "e@x.com", true))),
    );
    assert_eq!(dir.fetch_by_id(5).await, None);
}

#[tokio::test]
async fn fetch_by_id_treats_undecodable_payload_as_failure() {
    let (dir, _) = directory(
        MockTransport::new().reply("/users/6", 200, Some(json!({"id": 6, "name": "F"}))),
    );
    assert!(dir.lookup_by_id(6).await.is_transport_failure());
    assert_eq!(dir.fetch_by_id(6).await, None);
}

#[tokio::test]
async fn fetch_by_id_returns_inactive_users_too() {
    let (dir, _) = directory(
        MockTransport::new().reply("/users/9", 200, Some(user_json(9, "I", "i@x.com", false))),
    );
    let user = dir.fetch_by_id(9).await.unwrap();
    assert!(!user.is_active());
}

// ---------------------------------------------------------------------------
// fetch_active_users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_active_users_filters_and_sorts_stably() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([
            user_json(1, "Mia", "m1@x.com", true),
            user_json(2, "Ann", "a@x.com", false),
            user_json(3, "Leo", "l@y.com", true),
            user_json(4, "Mia", "m4@y.com", true),
            user_json(5, "bob", "b@x.com", true),
            user_json(6, "Mia", "m6@x.com", true),
        ])),
    ));

    let users = dir.fetch_active_users().await;
    assert!(users.iter().all(User::is_active));
    assert!(users.windows(2).all(|w| w[0].name() <= w[1].name()));
    // Equal names keep input order; lowercase sorts after uppercase.
    assert_eq!(ids(&users), vec![3, 1, 4, 6, 5]);
}

#[tokio::test]
async fn fetch_active_users_empty_on_failure_statuses() {
    for transport in [
        MockTransport::new().reply("/users", 503, None),
        MockTransport::new().reply("/users", 200, None),
        MockTransport::new().fail("/users", "timed out"),
        MockTransport::new().reply("/users", 200, Some(json!({"users": []}))),
    ] {
        let (dir, _) = directory(transport);
        assert!(dir.fetch_active_users().await.is_empty());
    }
}

#[tokio::test]
async fn lookup_active_users_surfaces_transport_failure() {
    let (dir, _) = directory(MockTransport::new().fail("/users", "timed out"));
    assert!(dir.lookup_active_users().await.is_transport_failure());
}

#[tokio::test]
async fn lookup_users_returns_unfiltered_collection() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([
            user_json(2, "B", "b@x.com", false),
            user_json(1, "A", "a@x.com", true),
        ])),
    ));
    match dir.lookup_users().await {
        Lookup::Found(users) => assert_eq!(ids(&users), vec![2, 1]),
        other => panic!("expected users, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// group_by_email_domain
// ---------------------------------------------------------------------------

#[tokio::test]
async fn group_by_email_domain_groups_sorted_users() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([
            user_json(1, "B", "b@x.com", true),
            user_json(2, "A", "a@x.com", true),
            user_json(3, "C", "c@y.com", true),
        ])),
    ));

    let groups = dir.group_by_email_domain().await.unwrap();
    assert_eq!(groups.len(), 2);
    let x_names: Vec<_> = groups["x.com"].iter().map(User::name).collect();
    assert_eq!(x_names, vec!["A", "B"]);
    assert_eq!(ids(&groups["y.com"]), vec![3]);
}

#[tokio::test]
async fn group_by_email_domain_empty_when_no_active_users() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([user_json(1, "A", "a@x.com", false)])),
    ));
    assert!(dir.group_by_email_domain().await.unwrap().is_empty());
}

#[tokio::test]
async fn group_by_email_domain_empty_when_fetch_fails() {
    let (dir, _) = directory(MockTransport::new().fail("/users", "refused"));
    assert!(dir.group_by_email_domain().await.unwrap().is_empty());
}

#[tokio::test]
async fn group_by_email_domain_rejects_email_without_at() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([
            user_json(1, "A", "a@x.com", true),
            user_json(2, "B", "nodomain", true),
        ])),
    ));

    let err = dir.group_by_email_domain().await.unwrap_err();
    assert_eq!(err.id, 2);
    assert_eq!(err.email, "nodomain");
}

#[tokio::test]
async fn group_by_email_domain_skips_malformed_inactive_users() {
    let (dir, _) = directory(MockTransport::new().reply(
        "/users",
        200,
        Some(json!([
            user_json(1, "A", "a@x.com", true),
            user_json(2, "B", "nodomain", false),
        ])),
    ));

    let groups = dir.group_by_email_domain().await.unwrap();
    assert_eq!(groups.len(), 1);
}

// ---------------------------------------------------------------------------
// entity identity
// ---------------------------------------------------------------------------

#[test]
fn users_with_same_id_are_equal() {
    let a: User = serde_json::from_value(user_json(7, "Ada", "ada@x.com", true)).unwrap();
    let b: User = serde_json::from_value(user_json(7, "Grace", "grace@y.org", false)).unwrap();
    assert_eq!(a, b);
}
