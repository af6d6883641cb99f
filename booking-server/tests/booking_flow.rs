//! 预订全流程集成测试
//!
//! 覆盖：创建预订 (校验、pending 初始状态)、店主审批状态机、
//! 角色边界、桌台可用标志不被联动。

mod common;

use common::{find_table, register, request, test_app};
use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_booking_lifecycle_with_owner_approval() {
    let (app, _state) = test_app().await;

    let (customer_token, _) = register(&app, "Ana Diner", "ana@example.com", "customer").await;
    let (owner_token, _) = register(&app, "Sam Owner", "sam@example.com", "owner").await;

    // 种子布局包含 table_number=5, capacity=4
    let table = find_table(&app, 5).await;
    assert_eq!(table["capacity"], json!(4));
    assert_eq!(table["is_available"], json!(true));

    // 顾客预订 2025-03-01 19:00，2 人
    let (status, booking) = request(
        &app,
        "POST",
        "/api/bookings",
        Some(&customer_token),
        Some(json!({
            "table_id": table["id"],
            "booking_date": "2025-03-01",
            "booking_time": "19:00",
            "number_of_guests": 2,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "booking failed: {booking}");
    assert_eq!(booking["status"], json!("pending"));
    assert_eq!(booking["number_of_guests"], json!(2));
    assert_eq!(booking["booking_date"], json!("2025-03-01"));

    let booking_id = booking["id"].as_str().expect("booking id");

    // 顾客不能审批自己的预订
    let (status, _) = request(
        &app,
        "PUT",
        &format!("/api/bookings/{booking_id}/status"),
        Some(&customer_token),
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // 店主审批
    let (status, updated) = request(
        &app,
        "PUT",
        &format!("/api/bookings/{booking_id}/status"),
        Some(&owner_token),
        Some(json!({"status": "approved"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], json!("approved"));

    // 审批只改这一行：桌台的可用标志不被联动
    let table_after = find_table(&app, 5).await;
    assert_eq!(table_after["is_available"], json!(true));

    // approved 是终态，再转任何状态都被拒绝
    for target in ["pending", "declined", "approved"] {
        let (status, _) = request(
            &app,
            "PUT",
            &format!("/api/bookings/{booking_id}/status"),
            Some(&owner_token),
            Some(json!({"status": target})),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY, "escaped terminal via {target}");
    }
}

#[tokio::test]
async fn test_booking_rejects_empty_date_or_time() {
    let (app, _state) = test_app().await;
    let (token, _) = register(&app, "Ana Diner", "ana@example.com", "customer").await;
    let table = find_table(&app, 1).await;

    for (date, time) in [("", "19:00"), ("2025-03-01", ""), ("", "")] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({
                "table_id": table["id"],
                "booking_date": date,
                "booking_time": time,
                "number_of_guests": 2,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    // 没有任何写库发生
    let (status, bookings) = request(&app, "GET", "/api/bookings", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bookings.as_array().expect("list").len(), 0);
}

#[tokio::test]
async fn test_booking_guest_count_bounds() {
    let (app, _state) = test_app().await;
    let (token, _) = register(&app, "Ana Diner", "ana@example.com", "customer").await;
    // table 5 seats 4
    let table = find_table(&app, 5).await;

    for guests in [0, -1, 5] {
        let (status, _) = request(
            &app,
            "POST",
            "/api/bookings",
            Some(&token),
            Some(json!({
                "table_id": table["id"],
                "booking_date": "2025-03-01",
                "booking_time": "19:00",
                "number_of_guests": guests,
            })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "guests={guests} accepted");
    }
}

#[tokio::test]
async fn test_booking_requires_login() {
    let (app, _state) = test_app().await;
    let table = find_table(&app, 1).await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/bookings",
        None,
        Some(json!({
            "table_id": table["id"],
            "booking_date": "2025-03-01",
            "booking_time": "19:00",
            "number_of_guests": 2,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_booking_unknown_table_aborts() {
    let (app, _state) = test_app().await;
    let (token, _) = register(&app, "Ana Diner", "ana@example.com", "customer").await;

    let (status, _) = request(
        &app,
        "POST",
        "/api/bookings",
        Some(&token),
        Some(json!({
            "table_id": "dining_table:nonexistent",
            "booking_date": "2025-03-01",
            "booking_time": "19:00",
            "number_of_guests": 2,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_customer_sees_only_own_bookings() {
    let (app, _state) = test_app().await;
    let (ana_token, _) = register(&app, "Ana Diner", "ana@example.com", "customer").await;
    let (bo_token, _) = register(&app, "Bo Diner", "bo@example.com", "customer").await;
    let (owner_token, _) = register(&app, "Sam Owner", "sam@example.com", "owner").await;

    let table = find_table(&app, 3).await;
    let body = json!({
        "table_id": table["id"],
        "booking_date": "2025-03-02",
        "booking_time": "20:00",
        "number_of_guests": 2,
    });

    let (status, _) = request(&app, "POST", "/api/bookings", Some(&ana_token), Some(body.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(&app, "POST", "/api/bookings", Some(&bo_token), Some(body)).await;
    assert_eq!(status, StatusCode::OK);

    // 每个顾客只看到自己的
    let (_, ana_list) = request(&app, "GET", "/api/bookings", Some(&ana_token), None).await;
    assert_eq!(ana_list.as_array().expect("list").len(), 1);
    assert_eq!(ana_list[0]["customer"]["full_name"], json!("Ana Diner"));

    // 响应里不暴露密码散列
    assert!(ana_list[0]["customer"].get("password_hash").is_none());

    // 店主看到全部
    let (_, owner_list) = request(&app, "GET", "/api/bookings", Some(&owner_token), None).await;
    assert_eq!(owner_list.as_array().expect("list").len(), 2);
}
