//! Typed clients against a local stand-in API server.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use clubdesk_api::models::{MemberUpdate, NewAttendance, NewMember, NewSession};
use clubdesk_api::{
    AttendanceClient, AuthClient, MembersClient, RoleSessionsClient, RolesClient, SessionsClient,
};
use clubdesk_auth::CredentialStore;
use clubdesk_gateway::{Gateway, NoopNavigator};

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

struct Harness {
    gateway: Arc<Gateway>,
    store: Arc<CredentialStore>,
    _dir: tempfile::TempDir,
}

async fn harness(base_url: &str) -> Harness {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(
        CredentialStore::load(dir.path().join("credentials.json"))
            .await
            .unwrap(),
    );
    let gateway = Arc::new(Gateway::new(
        base_url,
        reqwest::Client::new(),
        store.clone(),
        Arc::new(NoopNavigator),
    ));
    Harness {
        gateway,
        store,
        _dir: dir,
    }
}

fn member_json(id: &str, mssv: &str, name: &str, role_name: Option<&str>) -> serde_json::Value {
    let role = match role_name {
        Some(role_name) => serde_json::json!({"_id": "r1", "roleName": role_name}),
        None => serde_json::Value::Null,
    };
    let mut member = serde_json::json!({
        "_id": id,
        "mssv": mssv,
        "fullName": name,
        "className": "D21CQCN01",
        "status": "active"
    });
    if !role.is_null() {
        member["roleId"] = role;
    }
    member
}

#[tokio::test]
async fn login_persists_tokens_and_derived_profile() {
    let router = Router::new()
        .route(
            "/auth/login",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["mssv"], "B21DC001");
                assert_eq!(body["password"], "s3cret");
                Json(serde_json::json!({
                    "message": "login ok",
                    "accessToken": "at_1",
                    "refreshToken": "rt_1",
                    // Short id, bare role id: the follow-up fetch resolves it
                    "member": {"id": "m1", "mssv": "B21DC001",
                               "fullName": "An Nguyen", "roleId": "r1"}
                }))
            }),
        )
        .route(
            "/members/{id}",
            get(|Path(id): Path<String>| async move {
                assert_eq!(id, "m1");
                Json(member_json("m1", "B21DC001", "An Nguyen", Some("Admin")))
            }),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let auth = AuthClient::new(h.gateway.clone());
    let profile = auth.login("B21DC001", "s3cret").await.unwrap();

    assert_eq!(profile.role_name.as_deref(), Some("Admin"));
    assert!(profile.is_admin);

    assert_eq!(h.store.access_token().await.as_deref(), Some("at_1"));
    assert_eq!(h.store.refresh_token().await.as_deref(), Some("rt_1"));
    let cached = h.store.profile().await.unwrap();
    assert_eq!(cached, profile);
    assert_eq!(auth.current_profile().await, Some(cached));
}

#[tokio::test]
async fn login_falls_back_to_payload_role_when_detail_fetch_fails() {
    let router = Router::new()
        .route(
            "/auth/login",
            post(|| async {
                Json(serde_json::json!({
                    "accessToken": "at_1",
                    "refreshToken": "rt_1",
                    "member": {"id": "m1", "mssv": "B21DC001", "fullName": "An Nguyen",
                               "roleId": {"_id": "r2", "roleName": "Member"}}
                }))
            }),
        )
        .route(
            "/members/{id}",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let profile = AuthClient::new(h.gateway.clone())
        .login("B21DC001", "s3cret")
        .await
        .unwrap();

    assert_eq!(profile.role_name.as_deref(), Some("Member"));
    assert!(!profile.is_admin);
    // Tokens survived the failed detail fetch
    assert!(h.store.is_authenticated().await);
}

#[tokio::test]
async fn rejected_login_keeps_the_store_signed_out() {
    let router = Router::new().route(
        "/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({"message": "wrong student id or password"})),
            )
        }),
    );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let err = AuthClient::new(h.gateway.clone())
        .login("B21DC001", "nope")
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "wrong student id or password");
    assert!(!h.store.is_authenticated().await);
}

#[tokio::test]
async fn logout_clears_the_store() {
    let router = Router::new();
    let base_url = serve(router).await;
    let h = harness(&base_url).await;
    h.store
        .store_login("at_1".into(), "rt_1".into())
        .await
        .unwrap();

    AuthClient::new(h.gateway.clone()).logout().await.unwrap();

    assert!(!h.store.is_authenticated().await);
    assert!(h.store.profile().await.is_none());
}

#[tokio::test]
async fn members_list_sends_pagination_and_keyword() {
    let router = Router::new().route(
        "/members",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            assert_eq!(params.get("page").map(String::as_str), Some("2"));
            assert_eq!(params.get("limit").map(String::as_str), Some("5"));
            assert_eq!(params.get("keyword").map(String::as_str), Some("An"));
            Json(serde_json::json!({
                "members": [member_json("m1", "B21DC001", "An Nguyen", Some("Member"))],
                "totalPages": 4,
                "currentPage": 2,
                "totalMembers": 17
            }))
        }),
    );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let page = MembersClient::new(h.gateway.clone())
        .list(2, 5, Some("An"))
        .await
        .unwrap();

    assert_eq!(page.current_page, 2);
    assert_eq!(page.total_members, 17);
    assert_eq!(page.members[0].role_name(), Some("Member"));
}

#[tokio::test]
async fn member_stats_decode() {
    let router = Router::new().route(
        "/members/stats",
        get(|| async {
            Json(serde_json::json!({
                "total": 12,
                "detail": [{"_id": "active", "count": 10}, {"_id": null, "count": 2}]
            }))
        }),
    );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let stats = MembersClient::new(h.gateway.clone()).stats().await.unwrap();
    assert_eq!(stats.total, 12);
    assert_eq!(stats.detail.len(), 2);
}

#[tokio::test]
async fn member_create_and_update_roundtrip() {
    let router = Router::new()
        .route(
            "/members",
            post(|Json(body): Json<serde_json::Value>| async move {
                // Optional fields left unset must not travel at all
                assert!(body.get("email").is_none());
                assert_eq!(body["passwordHash"], "initial-pass");
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({
                        "_id": "m7",
                        "mssv": body["mssv"],
                        "fullName": body["fullName"],
                        "status": "active"
                    })),
                )
            }),
        )
        .route(
            "/members/{id}",
            axum::routing::put(
                |Path(id): Path<String>, Json(body): Json<serde_json::Value>| async move {
                    assert_eq!(body, serde_json::json!({"status": "inactive"}));
                    Json(serde_json::json!({
                        "_id": id,
                        "mssv": "B21DC007",
                        "fullName": "Giang Pham",
                        "status": "inactive"
                    }))
                },
            ),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;
    let members = MembersClient::new(h.gateway.clone());

    let created = members
        .create(&NewMember {
            mssv: "B21DC007".into(),
            full_name: "Giang Pham".into(),
            password_hash: "initial-pass".into(),
            class_name: None,
            email: None,
            role_id: None,
            status: None,
        })
        .await
        .unwrap();
    assert_eq!(created.id, "m7");

    let updated = members
        .update(
            "m7",
            &MemberUpdate {
                status: Some("inactive".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.status.as_deref(), Some("inactive"));
}

#[tokio::test]
async fn role_sessions_listing() {
    let router = Router::new().route(
        "/role-sessions",
        get(|| async {
            Json(serde_json::json!([
                {"_id": "rs1", "roleSessionName": "Host"},
                {"_id": "rs2", "roleSessionName": "Secretary"}
            ]))
        }),
    );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;

    let roles = RoleSessionsClient::new(h.gateway.clone())
        .list()
        .await
        .unwrap();
    assert_eq!(roles.len(), 2);
    assert_eq!(roles[1].role_session_name, "Secretary");
}

#[tokio::test]
async fn session_create_and_cascade_delete_roundtrip() {
    let router = Router::new()
        .route(
            "/sessions",
            post(|Json(body): Json<serde_json::Value>| async move {
                assert_eq!(body["sessionName"], "Rust basics");
                assert_eq!(body["instructors"][0]["memberId"], "m1");
                // Echo back a created document
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({
                        "_id": "s1",
                        "sessionName": body["sessionName"],
                        "location": body["location"],
                        "instructors": []
                    })),
                )
            }),
        )
        .route(
            "/sessions/{id}",
            delete(|Path(id): Path<String>| async move {
                Json(serde_json::json!({
                    "message": format!("session {id} and its attendance deleted")
                }))
            }),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;
    let sessions = SessionsClient::new(h.gateway.clone());

    let created = sessions
        .create(&NewSession {
            session_name: "Rust basics".into(),
            location: Some("Lab 3".into()),
            instructors: Some(vec![clubdesk_api::models::NewInstructor {
                member_id: "m1".into(),
                role_session_id: "rs1".into(),
            }]),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(created.id, "s1");

    let outcome = sessions.delete("s1").await.unwrap();
    assert!(outcome.message.unwrap().contains("attendance deleted"));
}

#[tokio::test]
async fn attendance_per_session_listing_decodes_populated_members() {
    let router = Router::new()
        .route(
            "/attendance/session/{id}",
            get(|Path(id): Path<String>| async move {
                assert_eq!(id, "s1");
                Json(serde_json::json!([{
                    "_id": "a1",
                    "sessionId": "s1",
                    "memberId": member_json("m1", "B21DC001", "An Nguyen", None),
                    "status": "present"
                }]))
            }),
        )
        .route(
            "/attendance",
            post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({
                        "_id": "a2",
                        "sessionId": body["sessionId"],
                        "memberId": body["memberId"],
                        "status": body.get("status").cloned()
                            .unwrap_or(serde_json::json!("absent"))
                    })),
                )
            }),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;
    let attendance = AttendanceClient::new(h.gateway.clone());

    let records = attendance.list_for_session("s1").await.unwrap();
    assert_eq!(records.len(), 1);
    match &records[0].member_id {
        Some(clubdesk_api::models::MemberRef::Populated(member)) => {
            assert_eq!(member.full_name, "An Nguyen")
        }
        other => panic!("expected populated member, got {other:?}"),
    }

    let marked = attendance
        .mark(&NewAttendance {
            session_id: "s1".into(),
            member_id: "m2".into(),
            status: None,
            note: None,
        })
        .await
        .unwrap();
    assert_eq!(marked.status.as_deref(), Some("absent"));
}

#[tokio::test]
async fn role_crud_roundtrip() {
    let router = Router::new()
        .route(
            "/roles",
            get(|| async {
                Json(serde_json::json!([
                    {"_id": "r1", "roleName": "Admin"},
                    {"_id": "r2", "roleName": "Member"}
                ]))
            })
            .post(|Json(body): Json<serde_json::Value>| async move {
                (
                    StatusCode::CREATED,
                    Json(serde_json::json!({"_id": "r3", "roleName": body["roleName"]})),
                )
            }),
        )
        .route(
            "/roles/{id}",
            delete(|Path(id): Path<String>| async move {
                Json(serde_json::json!({"message": format!("role {id} deleted")}))
            }),
        );
    let base_url = serve(router).await;
    let h = harness(&base_url).await;
    let roles = RolesClient::new(h.gateway.clone());

    let all = roles.list().await.unwrap();
    assert_eq!(all.len(), 2);

    let created = roles.create("Mentor").await.unwrap();
    assert_eq!(created.role_name, "Mentor");

    let outcome = roles.delete("r3").await.unwrap();
    assert_eq!(outcome.message.as_deref(), Some("role r3 deleted"));
}
