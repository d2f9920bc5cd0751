//! HTTP API 测试
//!
//! 通过 oneshot 驱动完整路由，覆盖响应形态与错误负载

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use inv_material::api;
use inv_material::application::ServiceHandler;
use inv_material::domain::entities::Supplier;
use inv_material::domain::value_objects::SupplierId;
use inv_material::infrastructure::persistence::{
    InMemoryMaterialRepository, InMemorySupplierRepository,
};

async fn setup_app() -> (Router, Uuid) {
    let material_repo = Arc::new(InMemoryMaterialRepository::new());
    let supplier_repo = Arc::new(InMemorySupplierRepository::new());

    let supplier_id = SupplierId::new();
    supplier_repo
        .seed(Supplier {
            id: supplier_id.clone(),
            name: "Test Supplier".to_string(),
            display_name: "Test Supplier".to_string(),
            created_at: Utc::now(),
            lang: Some("en_US".to_string()),
            website: None,
            job_title: None,
            partner_type: Some("supplier".to_string()),
            street: Some("123 Test Street".to_string()),
            street2: None,
            city: Some("Test City".to_string()),
            zip: Some("12345".to_string()),
            latitude: None,
            longitude: None,
            email: Some("test_supplier@example.com".to_string()),
            phone: Some("1234567890".to_string()),
            is_company: true,
            commercial_parent_id: None,
            commercial_company_name: None,
        })
        .await;

    let handler = Arc::new(ServiceHandler::new(material_repo, supplier_repo));
    (api::routes(handler), supplier_id.0)
}

/// 测试辅助：发送请求并解析 JSON 响应
async fn request(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

fn material_body(code: &str, material_type: &str, price: i64, supplier_id: Option<Uuid>) -> Value {
    json!({
        "material_code": code,
        "material_name": "Test Material",
        "material_type": material_type,
        "material_buy_price": price,
        "supplier_id": supplier_id,
    })
}

/// 创建物料并返回 minimal 列表形态
#[tokio::test]
async fn test_create_and_list() {
    let (app, supplier_id) = setup_app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "fabric", 150, Some(supplier_id))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Material created successfully");
    assert!(body["id"].is_string());

    let (status, body) = request(&app, Method::GET, "/api/materials", None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);

    let item = &items[0];
    assert_eq!(item["material_code"], "MAT001");
    assert_eq!(item["material_name"], "Test Material");
    assert_eq!(item["material_type"], "fabric");
    assert_eq!(item["material_buy_price"].as_f64(), Some(150.0));
    // minimal 预设：supplier_id 是显示名
    assert_eq!(item["supplier_id"], "Test Supplier");
    assert!(item.get("supplier").is_none());
}

/// 没有供应商时 supplier_id 序列化为 null
#[tokio::test]
async fn test_list_without_supplier() {
    let (app, _) = setup_app().await;

    request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "cotton", 120, None)),
    )
    .await;

    let (_, body) = request(&app, Method::GET, "/api/materials", None).await;
    let item = &body.as_array().unwrap()[0];
    assert_eq!(item["supplier_id"], Value::Null);
}

/// 单条查询返回完整供应商形态
#[tokio::test]
async fn test_get_with_full_supplier() {
    let (app, supplier_id) = setup_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "fabric", 150, Some(supplier_id))),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = request(&app, Method::GET, &format!("/api/materials/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["material_code"], "MAT001");
    assert!(body.get("supplier_id").is_none());

    let supplier = &body["supplier"];
    assert_eq!(supplier["name"], "Test Supplier");
    assert_eq!(supplier["email"], "test_supplier@example.com");
    assert_eq!(supplier["phone"], "1234567890");
    assert_eq!(supplier["is_company"], true);
    assert_eq!(supplier["city"], "Test City");
}

/// 列表的 full 预设通过 expand 参数选择
#[tokio::test]
async fn test_list_expand_supplier() {
    let (app, supplier_id) = setup_app().await;

    request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "fabric", 150, Some(supplier_id))),
    )
    .await;

    let (_, body) = request(&app, Method::GET, "/api/materials?expand=supplier", None).await;
    let item = &body.as_array().unwrap()[0];
    assert!(item.get("supplier_id").is_none());
    assert_eq!(item["supplier"]["display_name"], "Test Supplier");
}

/// 采购价低于下限的创建被拒绝
#[tokio::test]
async fn test_create_below_minimum() {
    let (app, _) = setup_app().await;

    let (status, body) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT002", "jeans", 50, None)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "material_buy_price below minimum");

    let (_, body) = request(&app, Method::GET, "/api/materials", None).await;
    assert!(body.as_array().unwrap().is_empty());
}

/// 未知物料类型的创建被拒绝
#[tokio::test]
async fn test_create_unknown_type() {
    let (app, _) = setup_app().await;

    let (status, _) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT002", "silk", 150, None)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

/// 更新流程：非法价格被拒且原值保留
#[tokio::test]
async fn test_update_flow() {
    let (app, _) = setup_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "fabric", 150, None)),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/materials/{}", id);

    let (status, body) = request(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "material_buy_price": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "material_buy_price below minimum");

    let (_, body) = request(&app, Method::GET, &uri, None).await;
    assert_eq!(body["material_buy_price"].as_f64(), Some(150.0));

    let (status, body) = request(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "material_name": "Updated Material", "material_buy_price": 250 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Material updated successfully");

    let (_, body) = request(&app, Method::GET, &uri, None).await;
    assert_eq!(body["material_name"], "Updated Material");
    assert_eq!(body["material_buy_price"].as_f64(), Some(250.0));
}

/// 更新不存在的物料
#[tokio::test]
async fn test_update_not_found() {
    let (app, _) = setup_app().await;

    let (status, body) = request(
        &app,
        Method::PUT,
        &format!("/api/materials/{}", Uuid::now_v7()),
        Some(json!({ "material_name": "Ghost" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Material not found");
}

/// 删除流程
#[tokio::test]
async fn test_delete_flow() {
    let (app, _) = setup_app().await;

    let (_, created) = request(
        &app,
        Method::POST,
        "/api/materials",
        Some(material_body("MAT001", "fabric", 150, None)),
    )
    .await;
    let id = created["id"].as_str().unwrap().to_string();
    let uri = format!("/api/materials/{}", id);

    let (status, body) = request(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Material deleted successfully");

    let (status, body) = request(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Material not found");

    let (status, _) = request(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

/// 按类型过滤
#[tokio::test]
async fn test_filter_endpoint() {
    let (app, _) = setup_app().await;

    for (code, material_type) in [("MAT001", "fabric"), ("MAT002", "jeans"), ("MAT003", "fabric")] {
        request(
            &app,
            Method::POST,
            "/api/materials",
            Some(material_body(code, material_type, 150, None)),
        )
        .await;
    }

    let (status, body) = request(
        &app,
        Method::GET,
        "/api/materials/filter",
        Some(json!({ "material_type": "fabric" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|m| m["material_type"] == "fabric"));

    // 未知类型命中空集
    let (status, body) = request(
        &app,
        Method::GET,
        "/api/materials/filter",
        Some(json!({ "material_type": "silk" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());
}

/// 健康与就绪探针
#[tokio::test]
async fn test_health_and_ready() {
    let (app, _) = setup_app().await;

    let (status, body) = request(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = request(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
}
