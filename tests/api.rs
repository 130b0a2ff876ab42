/**
 * End-to-End API Tests
 *
 * Each test boots the full application against a fresh SQLite file in a
 * temporary directory and drives it over HTTP with cookies enabled, the
 * same way a browser client would.
 */

use axum_extra::extract::cookie::Cookie;
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::TempDir;

use issuetrack::auth::sessions::SessionCodec;
use issuetrack::{create_app, AppConfig};

/// Boot the application on a fresh database. The TempDir must be kept
/// alive for the lifetime of the server.
async fn spawn_app() -> (TestServer, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        database_url: format!("sqlite:{}", dir.path().join("test.db").display()),
        jwt_secret: "test-secret".to_string(),
        port: 0,
        secure_cookies: false,
    };
    let app = create_app(config).await.unwrap();
    let server = TestServer::builder().save_cookies().build(app).unwrap();
    (server, dir)
}

async fn signup(server: &TestServer, email: &str, password: &str, role: Option<&str>) -> Value {
    let mut body = json!({ "email": email, "password": password });
    if let Some(role) = role {
        body["role"] = json!(role);
    }
    let response = server.post("/api/auth/signup").json(&body).await;
    assert_eq!(response.status_code(), 201);
    response.json::<Value>()
}

async fn create_issue(server: &TestServer, title: &str, status: &str, priority: &str) -> Value {
    let response = server
        .post("/api/issues")
        .json(&json!({
            "title": title,
            "description": "some description",
            "status": status,
            "priority": priority,
        }))
        .await;
    assert_eq!(response.status_code(), 201);
    response.json::<Value>()
}

#[tokio::test]
async fn signup_starts_a_session() {
    let (server, _db) = spawn_app().await;

    let body = signup(&server, "alice@example.com", "password123", None).await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user"]["email"], "alice@example.com");
    assert_eq!(body["user"]["role"], "user");
    assert!(body["user"].get("password_hash").is_none());

    // The session cookie from signup authenticates subsequent requests.
    let response = server.get("/api/users").await;
    assert_eq!(response.status_code(), 200);
    let users = response.json::<Value>();
    assert_eq!(users.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn signup_rejects_duplicate_email() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "email": "alice@example.com", "password": "different1" }))
        .await;
    assert_eq!(response.status_code(), 400);
    assert_eq!(response.json::<Value>()["error"], "User already exists");
}

#[tokio::test]
async fn signup_reports_every_invalid_field() {
    let (server, _db) = spawn_app().await;

    let response = server
        .post("/api/auth/signup")
        .json(&json!({ "email": "not-an-email", "password": "abc" }))
        .await;
    assert_eq!(response.status_code(), 400);

    let body = response.json::<Value>();
    assert_eq!(body["error"], "Invalid input");
    let details = body["details"].as_array().unwrap();
    let fields: Vec<&str> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap())
        .collect();
    assert!(fields.contains(&"email"));
    assert!(fields.contains(&"password"));
}

#[tokio::test]
async fn login_round_trip() {
    let (mut server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;
    server.clear_cookies();

    let response = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "password123" }))
        .await;
    assert_eq!(response.status_code(), 200);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["email"], "alice@example.com");

    let response = server.get("/api/issues").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn login_failure_does_not_reveal_which_part_was_wrong() {
    let (mut server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;
    server.clear_cookies();

    let wrong_password = server
        .post("/api/auth/login")
        .json(&json!({ "email": "alice@example.com", "password": "incorrect1" }))
        .await;
    let unknown_email = server
        .post("/api/auth/login")
        .json(&json!({ "email": "nobody@example.com", "password": "password123" }))
        .await;

    assert_eq!(wrong_password.status_code(), 401);
    assert_eq!(unknown_email.status_code(), 401);
    assert_eq!(
        wrong_password.json::<Value>()["error"],
        unknown_email.json::<Value>()["error"]
    );
}

#[tokio::test]
async fn unauthenticated_api_request_gets_401() {
    let (server, _db) = spawn_app().await;

    let response = server.get("/api/issues").await;
    assert_eq!(response.status_code(), 401);
    assert_eq!(response.json::<Value>()["error"], "Unauthorized");
}

#[tokio::test]
async fn unauthenticated_page_request_redirects_to_login() {
    let (server, _db) = spawn_app().await;

    let response = server.get("/dashboard").await;
    assert_eq!(response.status_code(), 307);
    assert_eq!(response.header("location"), "/login");
}

#[tokio::test]
async fn forged_session_cookie_is_rejected() {
    let (mut server, _db) = spawn_app().await;
    let body = signup(&server, "alice@example.com", "password123", None).await;
    let user_id = body["user"]["id"].as_str().unwrap().parse().unwrap();

    // A token signed with a different secret for a real user id.
    let forged = SessionCodec::new("attacker-secret").issue(user_id).unwrap();
    server.clear_cookies();
    server.add_cookie(Cookie::new("session", forged));

    let response = server.get("/api/issues").await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn logout_ends_the_session() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let response = server.post("/api/auth/logout").await;
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.json::<Value>()["message"], "Logout successful");

    let response = server.get("/api/issues").await;
    assert_eq!(response.status_code(), 401);
}

#[tokio::test]
async fn issue_crud_round_trip() {
    let (server, _db) = spawn_app().await;
    let me = signup(&server, "alice@example.com", "password123", None).await;

    let created = create_issue(&server, "Login page broken", "open", "high").await;
    assert_eq!(created["title"], "Login page broken");
    assert_eq!(created["status"], "open");
    assert_eq!(created["priority"], "high");
    assert_eq!(created["created_by"], me["user"]["id"]);
    assert_eq!(created["author"]["email"], "alice@example.com");
    assert_eq!(created["assignee"], Value::Null);

    let id = created["id"].as_str().unwrap();

    let fetched = server.get(&format!("/api/issues/{id}")).await;
    assert_eq!(fetched.status_code(), 200);
    assert_eq!(fetched.json::<Value>()["id"], created["id"]);

    let updated = server
        .put(&format!("/api/issues/{id}"))
        .json(&json!({
            "title": "Login page broken",
            "description": "some description",
            "status": "closed",
            "priority": "high",
        }))
        .await;
    assert_eq!(updated.status_code(), 200);
    let updated = updated.json::<Value>();
    assert_eq!(updated["status"], "closed");
    assert_eq!(updated["title"], "Login page broken");

    let deleted = server.delete(&format!("/api/issues/{id}")).await;
    assert_eq!(deleted.status_code(), 200);
    assert_eq!(
        deleted.json::<Value>()["message"],
        "Issue deleted successfully"
    );

    let gone = server.get(&format!("/api/issues/{id}")).await;
    assert_eq!(gone.status_code(), 404);
    assert_eq!(gone.json::<Value>()["error"], "Issue not found");
}

#[tokio::test]
async fn issue_defaults_and_validation() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let response = server
        .post("/api/issues")
        .json(&json!({ "title": "Untriaged", "description": "needs a look" }))
        .await;
    assert_eq!(response.status_code(), 201);
    let body = response.json::<Value>();
    assert_eq!(body["status"], "open");
    assert_eq!(body["priority"], "medium");

    let response = server
        .post("/api/issues")
        .json(&json!({ "title": "", "description": "", "status": "wontfix" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let details = response.json::<Value>()["details"].as_array().unwrap().clone();
    let fields: Vec<String> = details
        .iter()
        .map(|d| d["field"].as_str().unwrap().to_string())
        .collect();
    assert!(fields.contains(&"title".to_string()));
    assert!(fields.contains(&"description".to_string()));
    assert!(fields.contains(&"status".to_string()));
}

#[tokio::test]
async fn only_owner_or_admin_may_modify_an_issue() {
    let (mut server, _db) = spawn_app().await;
    signup(&server, "owner@example.com", "password123", None).await;
    let issue = create_issue(&server, "Owned issue", "open", "low").await;
    let id = issue["id"].as_str().unwrap().to_string();

    // Another plain user: forbidden.
    server.clear_cookies();
    signup(&server, "intruder@example.com", "password123", None).await;

    // A partial body does not matter: authorization is checked before
    // the payload is even decoded.
    let update = server
        .put(&format!("/api/issues/{id}"))
        .json(&json!({ "title": "Hijacked" }))
        .await;
    assert_eq!(update.status_code(), 403);
    assert_eq!(update.json::<Value>()["error"], "Forbidden");

    let delete = server.delete(&format!("/api/issues/{id}")).await;
    assert_eq!(delete.status_code(), 403);

    // An admin: allowed.
    server.clear_cookies();
    signup(&server, "admin@example.com", "password123", Some("admin")).await;

    let update = server
        .put(&format!("/api/issues/{id}"))
        .json(&json!({ "title": "Triaged by admin", "description": "handled" }))
        .await;
    assert_eq!(update.status_code(), 200);

    let delete = server.delete(&format!("/api/issues/{id}")).await;
    assert_eq!(delete.status_code(), 200);
}

#[tokio::test]
async fn missing_issue_wins_over_bad_permissions_and_bad_payload() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let id = uuid::Uuid::new_v4();
    let response = server
        .put(&format!("/api/issues/{id}"))
        .json(&json!({ "status": "wontfix" }))
        .await;
    assert_eq!(response.status_code(), 404);
}

#[tokio::test]
async fn issue_list_filters_and_paginates() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    create_issue(&server, "Crash on save", "open", "high").await;
    create_issue(&server, "Slow search", "open", "low").await;
    create_issue(&server, "Old crash", "closed", "high").await;

    let response = server.get("/api/issues").await;
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["issues"].as_array().unwrap().len(), 3);
    // Newest first.
    assert_eq!(body["issues"][0]["title"], "Old crash");

    let response = server.get("/api/issues?status=open&priority=high").await;
    let body = response.json::<Value>();
    assert_eq!(body["issues"].as_array().unwrap().len(), 1);
    assert_eq!(body["issues"][0]["title"], "Crash on save");
    // Total counts the filtered set, not the whole table.
    assert_eq!(body["pagination"]["total"], 1);
    assert_eq!(body["pagination"]["total_pages"], 1);

    let response = server.get("/api/issues?search=CRASH").await;
    let body = response.json::<Value>();
    assert_eq!(body["pagination"]["total"], 2);

    let response = server.get("/api/issues?page=2&page_size=2").await;
    let body = response.json::<Value>();
    assert_eq!(body["issues"].as_array().unwrap().len(), 1);
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["total"], 3);
    assert_eq!(body["pagination"]["total_pages"], 2);
}

#[tokio::test]
async fn issue_list_rejects_bad_query_parameters() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let response = server.get("/api/issues?status=nope&page=0").await;
    assert_eq!(response.status_code(), 400);
    let details = response.json::<Value>()["details"].as_array().unwrap().clone();
    assert_eq!(details.len(), 2);
}

#[tokio::test]
async fn comment_round_trip() {
    let (server, _db) = spawn_app().await;
    let me = signup(&server, "alice@example.com", "password123", None).await;
    let issue = create_issue(&server, "Needs discussion", "open", "medium").await;
    let id = issue["id"].as_str().unwrap().to_string();

    let response = server
        .post(&format!("/api/issues/{id}/comments"))
        .json(&json!({ "content": "first comment" }))
        .await;
    assert_eq!(response.status_code(), 201);
    let comment = response.json::<Value>();
    assert_eq!(comment["content"], "first comment");
    assert_eq!(comment["issue_id"], issue["id"]);
    assert_eq!(comment["user_id"], me["user"]["id"]);
    assert_eq!(comment["author"]["email"], "alice@example.com");

    server
        .post(&format!("/api/issues/{id}/comments"))
        .json(&json!({ "content": "second comment" }))
        .await;

    // Oldest first.
    let response = server.get(&format!("/api/issues/{id}/comments")).await;
    assert_eq!(response.status_code(), 200);
    let comments = response.json::<Value>();
    let comments = comments.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["content"], "first comment");
    assert_eq!(comments[1]["content"], "second comment");
}

#[tokio::test]
async fn comment_on_missing_issue_is_404_even_with_a_bad_body() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;

    let id = uuid::Uuid::new_v4();
    let response = server
        .post(&format!("/api/issues/{id}/comments"))
        .json(&json!({ "content": "" }))
        .await;
    assert_eq!(response.status_code(), 404);
    assert_eq!(response.json::<Value>()["error"], "Issue not found");
}

#[tokio::test]
async fn empty_comment_is_rejected() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;
    let issue = create_issue(&server, "Needs discussion", "open", "medium").await;
    let id = issue["id"].as_str().unwrap();

    let response = server
        .post(&format!("/api/issues/{id}/comments"))
        .json(&json!({ "content": "" }))
        .await;
    assert_eq!(response.status_code(), 400);
    let body = response.json::<Value>();
    assert_eq!(body["details"][0]["field"], "content");
    assert_eq!(body["details"][0]["message"], "Comment content is required");
}

#[tokio::test]
async fn deleting_an_issue_removes_its_comments() {
    let (server, _db) = spawn_app().await;
    signup(&server, "alice@example.com", "password123", None).await;
    let issue = create_issue(&server, "Short-lived", "open", "medium").await;
    let id = issue["id"].as_str().unwrap().to_string();

    server
        .post(&format!("/api/issues/{id}/comments"))
        .json(&json!({ "content": "soon gone" }))
        .await;

    server.delete(&format!("/api/issues/{id}")).await;

    let response = server.get(&format!("/api/issues/{id}/comments")).await;
    assert_eq!(response.status_code(), 200);
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}
