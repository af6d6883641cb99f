//! 集成测试公共设施
//!
//! 使用内存引擎数据库 + tower oneshot 驱动完整路由，
//! 不占用端口，每个测试一套独立状态。
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use booking_server::api::build_router;
use booking_server::auth::JwtConfig;
use booking_server::db::{DbService, seed};
use booking_server::{Config, ServerState};
use http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use tower::ServiceExt;

/// 测试配置，固定 JWT 密钥保证可重复
pub fn test_config() -> Config {
    Config {
        work_dir: "/tmp/booking-server-test".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "integration-test-secret-32-chars-min!".to_string(),
            expiration_minutes: 60,
            issuer: "booking-server".to_string(),
            audience: "booking-clients".to_string(),
        },
        environment: "test".to_string(),
        cart_ttl_minutes: 120,
    }
}

/// 构建带种子数据的内存状态和路由
pub async fn test_app() -> (Router, ServerState) {
    let db = Surreal::new::<Mem>(()).await.expect("in-memory db");
    let db_service = DbService::from_handle(db).await.expect("namespace");
    seed::seed_defaults(&db_service.db).await.expect("seed");

    let state = ServerState::with_db(test_config(), db_service.db);
    (build_router(state.clone()), state)
}

/// 发送一个请求，返回 (状态码, 响应 JSON)
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }

    let request = match body {
        Some(json_body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json_body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

/// 注册一个账号并返回它的令牌和 profile id
pub async fn register(app: &Router, full_name: &str, email: &str, role: &str) -> (String, String) {
    let (status, body) = request(
        app,
        "POST",
        "/api/auth/register",
        None,
        Some(json!({
            "full_name": full_name,
            "email": email,
            "password": "test-password-123",
            "role": role,
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "register failed: {body}");
    let token = body["token"].as_str().expect("token").to_string();
    let id = body["user"]["id"].as_str().expect("profile id").to_string();
    (token, id)
}

/// 从 GET /api/tables 找到指定展示编号的桌台
pub async fn find_table(app: &Router, table_number: i64) -> Value {
    let (status, body) = request(app, "GET", "/api/tables", None, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .expect("table list")
        .iter()
        .find(|t| t["table_number"] == json!(table_number))
        .unwrap_or_else(|| panic!("table {table_number} not seeded"))
        .clone()
}

/// 从 GET /api/menu 找到指定名称的菜单项
pub async fn find_menu_item(app: &Router, name: &str) -> Value {
    let (status, body) = request(app, "GET", "/api/menu", None, None).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .expect("menu list")
        .iter()
        .find(|item| item["name"] == json!(name))
        .unwrap_or_else(|| panic!("menu item '{name}' not seeded"))
        .clone()
}
