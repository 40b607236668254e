//! End-to-end smoke tests for the full smartfridged stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot`: no TCP port is bound. The barcode decoder
//! and product catalog are replaced by in-process stubs.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use smartfridge_adapter_http_axum::router::{self, HttpConfig};
use smartfridge_adapter_http_axum::state::AppState;
use smartfridge_adapter_storage_sqlite_sqlx::{Config, SqliteIngredientRepository};
use smartfridge_app::ports::{BarcodeDecoder, ProductCatalog};
use smartfridge_app::services::barcode_service::BarcodeService;
use smartfridge_app::services::ingredient_service::IngredientService;
use smartfridge_domain::barcode::DecodedBarcode;
use smartfridge_domain::error::{NotFoundError, SmartFridgeError};
use smartfridge_domain::product::ProductInfo;
use tower::ServiceExt;

/// Decodes the upload as UTF-8 text and reports it as one barcode.
/// An upload reading `blank` holds no barcode.
struct TextDecoder;

impl BarcodeDecoder for TextDecoder {
    async fn decode(&self, image: Vec<u8>) -> Result<Vec<DecodedBarcode>, SmartFridgeError> {
        let text = String::from_utf8(image).unwrap();
        if text == "blank" {
            return Ok(vec![]);
        }
        Ok(vec![DecodedBarcode {
            symbology: "EAN_13".to_string(),
            text,
        }])
    }
}

/// Knows a single product.
struct FetaCatalog;

impl ProductCatalog for FetaCatalog {
    async fn lookup(&self, code: &str) -> Result<ProductInfo, SmartFridgeError> {
        if code != "05201671001517" {
            return Err(NotFoundError {
                entity: "Product",
                id: code.to_string(),
            }
            .into());
        }
        Ok(ProductInfo {
            barcode: Some(code.to_string()),
            product_name: Some("Feta".to_string()),
            ..ProductInfo::default()
        })
    }
}

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let state = AppState::new(
        IngredientService::new(SqliteIngredientRepository::new(db.pool().clone())),
        BarcodeService::new(TextDecoder, FetaCatalog),
    );

    router::build(state, &HttpConfig::default())
}

async fn send(app: &axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, body)
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn upload(field: &str, content: &str) -> Request<Body> {
    let boundary = "SMARTFRIDGEBOUNDARY";
    let body = format!(
        "--{boundary}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"scan.png\"\r\n\
         Content-Type: image/png\r\n\r\n\
         {content}\r\n\
         --{boundary}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri("/api/barcode")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={boundary}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Create an ingredient and return its id.
async fn create(app: &axum::Router, body: Value) -> String {
    let (status, resp) = send(app, json_request("POST", "/api/ingredients", &body)).await;
    assert_eq!(status, StatusCode::CREATED, "{resp}");
    resp["id"].as_str().unwrap().to_string()
}

fn milk() -> Value {
    json!({
        "name": "Milk",
        "quantity": {"value": 2, "unit": "PIECES"},
        "expiryDate": "2025-01-01"
    })
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let app = app().await;
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("OK".to_string()));
}

#[tokio::test]
async fn should_greet_on_root() {
    let app = app().await;
    let (status, body) = send(&app, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Welcome to smartfridge");
}

// ---------------------------------------------------------------------------
// Ingredient CRUD
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_read_and_patch_milk() {
    let app = app().await;

    let (status, ack) = send(&app, json_request("POST", "/api/ingredients", &milk())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(ack["message"], "Ingredient added successfully");
    let id = ack["id"].as_str().unwrap().to_string();

    let (status, stored) = send(&app, get(&format!("/api/ingredients/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stored["id"], id.as_str());
    assert_eq!(stored["name"], "Milk");
    assert_eq!(stored["quantity"]["value"].as_f64(), Some(2.0));
    assert_eq!(stored["quantity"]["unit"], "PIECES");
    assert_eq!(stored["expiryDate"], "2025-01-01");
    assert_eq!(stored["tags"], json!([]));

    let (status, patched) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/ingredients/{id}"),
            &json!({"quantity": {"value": 1}}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["quantity"]["value"].as_f64(), Some(1.0));
    assert_eq!(patched["quantity"]["unit"], "PIECES");
    assert_eq!(patched["name"], "Milk");
}

#[tokio::test]
async fn should_keep_quantity_value_when_only_unit_patched() {
    let app = app().await;
    let id = create(&app, milk()).await;

    let (status, patched) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/ingredients/{id}"),
            &json!({"quantity": {"unit": "KG"}}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["quantity"]["value"].as_f64(), Some(2.0));
    assert_eq!(patched["quantity"]["unit"], "KG");
}

#[tokio::test]
async fn should_return_unchanged_record_when_patch_is_empty() {
    let app = app().await;
    let id = create(&app, milk()).await;
    let (_, before) = send(&app, get(&format!("/api/ingredients/{id}"))).await;

    let (status, after) = send(
        &app,
        json_request("PATCH", &format!("/api/ingredients/{id}"), &json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
}

#[tokio::test]
async fn should_ignore_null_fields_in_patch() {
    let app = app().await;
    let id = create(&app, milk()).await;

    let (status, patched) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/ingredients/{id}"),
            &json!({"name": null, "tags": ["dairy"]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(patched["name"], "Milk");
    assert_eq!(patched["tags"], json!(["dairy"]));
}

#[tokio::test]
async fn should_reject_unknown_patch_fields() {
    let app = app().await;
    let id = create(&app, milk()).await;

    let (status, body) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/ingredients/{id}"),
            &json!({"colour": "white"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn should_return_404_when_patching_missing_ingredient() {
    let app = app().await;
    let id = create(&app, milk()).await;
    send(&app, delete(&format!("/api/ingredients/{id}"))).await;

    let (status, _) = send(
        &app,
        json_request(
            "PATCH",
            &format!("/api/ingredients/{id}"),
            &json!({"name": "Oat milk"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_404_on_second_delete() {
    let app = app().await;
    let id = create(&app, milk()).await;

    let (status, body) = send(&app, delete(&format!("/api/ingredients/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["message"],
        format!("Ingredient with id {id} deleted successfully")
    );

    let (status, body) = send(&app, delete(&format!("/api/ingredients/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], format!("Ingredient not found: {id}"));

    let (status, _) = send(&app, get(&format!("/api/ingredients/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_blank_name() {
    let app = app().await;
    let mut body = milk();
    body["name"] = json!("   ");

    let (status, resp) = send(&app, json_request("POST", "/api/ingredients", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(resp["error"], "name must not be empty");
}

#[tokio::test]
async fn should_reject_malformed_json() {
    let app = app().await;
    let request = Request::builder()
        .method("POST")
        .uri("/api/ingredients")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("malformed payload"));
}

#[tokio::test]
async fn should_reject_unknown_unit() {
    let app = app().await;
    let mut body = milk();
    body["quantity"]["unit"] = json!("LITRES");

    let (status, _) = send(&app, json_request("POST", "/api/ingredients", &body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Listing and status filter
// ---------------------------------------------------------------------------

async fn seed_statuses(app: &axum::Router) {
    for (name, status) in [
        ("Yoghurt", "expired"),
        ("Butter", "not_expired"),
        ("Cream", "close_to_expire"),
    ] {
        create(
            app,
            json!({
                "name": name,
                "quantity": {"value": 1, "unit": "PIECES"},
                "expiryDate": "2025-03-01",
                "status": status
            }),
        )
        .await;
    }
}

fn names(body: &Value) -> Vec<String> {
    let mut names: Vec<String> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}

#[tokio::test]
async fn should_list_all_ingredients_without_filter() {
    let app = app().await;
    seed_statuses(&app).await;

    let (status, body) = send(&app, get("/api/ingredients")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Butter", "Cream", "Yoghurt"]);
}

#[tokio::test]
async fn should_filter_by_repeated_status_params() {
    let app = app().await;
    seed_statuses(&app).await;

    let (status, body) = send(
        &app,
        get("/api/ingredients?status=expired&status=close_to_expire"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&body), vec!["Cream", "Yoghurt"]);
}

#[tokio::test]
async fn should_filter_by_comma_separated_statuses() {
    let app = app().await;
    seed_statuses(&app).await;

    let (_, body) = send(&app, get("/api/ingredients?status=expired,close_to_expire")).await;

    assert_eq!(names(&body), vec!["Cream", "Yoghurt"]);
}

#[tokio::test]
async fn should_filter_by_single_status() {
    let app = app().await;
    seed_statuses(&app).await;

    let (_, body) = send(&app, get("/api/ingredients?ingredient_status=not_expired")).await;

    assert_eq!(names(&body), vec!["Butter"]);
}

#[tokio::test]
async fn should_reject_empty_status_filter() {
    let app = app().await;

    let (status, body) = send(&app, get("/api/ingredients?status=")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "status filter must contain at least one status"
    );
}

// ---------------------------------------------------------------------------
// Barcode scanning
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_scan_gs1_barcode_and_attach_product() {
    let app = app().await;

    let (status, body) = send(&app, upload("file", "(01)05201671001517(17)250101(10)ABC")).await;

    assert_eq!(status, StatusCode::OK, "{body}");
    let result = &body["results"][0];
    assert_eq!(result["type"], "EAN_13");
    assert_eq!(result["payload"]["gtin"], "05201671001517");
    assert_eq!(result["payload"]["expiry_date"], "2025-01-01");
    assert_eq!(result["payload"]["batch"], "ABC");
    assert_eq!(result["data"]["product_name"], "Feta");
    assert_eq!(result["data"]["brands"], Value::Null);
}

#[tokio::test]
async fn should_report_when_no_barcode_detected() {
    let app = app().await;

    let (status, body) = send(&app, upload("file", "blank")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "No barcode detected");
}

#[tokio::test]
async fn should_return_404_when_product_unknown() {
    let app = app().await;

    let (status, body) = send(&app, upload("file", "4006381333931")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Product not found: 4006381333931");
}

#[tokio::test]
async fn should_require_file_field() {
    let app = app().await;

    let (status, body) = send(&app, upload("image", "blank")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing upload field: file");
}
