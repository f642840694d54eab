use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chrono::{Duration, Local, Utc};
use reqwest::StatusCode;
use serde_json::{json, Value};
use service::store::memory::MemoryStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

struct TestApp {
    base_url: String,
}

// in-memory store behind the real router on an ephemeral port
async fn start_server() -> anyhow::Result<TestApp> {
    let store = Arc::new(MemoryStore::default());
    let app: Router = server::routes::build_router(store, CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn recent(days_ago: i64) -> String {
    (Local::now().date_naive() - Duration::days(days_ago)).format("%Y-%m-%d").to_string()
}

fn batch_body(code: &str) -> Value {
    json!({
        "code": code,
        "cultivation_location": "Piura",
        "harvest_date": recent(5),
        "notes": null,
    })
}

async fn register_batch(app: &TestApp, code: &str) -> anyhow::Result<()> {
    let res = reqwest::Client::new()
        .post(format!("{}/batches", app.base_url))
        .json(&batch_body(code))
        .send()
        .await?;
    anyhow::ensure!(res.status() == StatusCode::CREATED, "batch setup failed");
    Ok(())
}

#[tokio::test]
async fn health_is_public() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/health", app.base_url)).await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn batch_registration_roundtrip() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/batches", app.base_url))
        .json(&batch_body("MANGO-2024-001"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["severity"], "success");
    assert_eq!(body["message"], "batch registered successfully");
    assert_eq!(body["data"]["code"], "MANGO-2024-001");

    let res = c.get(format!("{}/batches/MANGO-2024-001", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "batch found");
    assert_eq!(body["data"]["cultivation_location"], "Piura");

    let res = c.get(format!("{}/batches", app.base_url)).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "1 batches found");
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn duplicate_batch_code_is_a_conflict() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    register_batch(&app, "LOT-400").await?;

    let res = c.post(format!("{}/batches", app.base_url)).json(&batch_body("LOT-400")).send().await?;
    assert_eq!(res.status(), StatusCode::CONFLICT);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["severity"], "error");
    assert_eq!(body["message"], "batch code 'LOT-400' already exists");
    assert_eq!(body["data"], Value::Null);
    Ok(())
}

#[tokio::test]
async fn invalid_batch_code_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::Client::new()
        .post(format!("{}/batches", app.base_url))
        .json(&batch_body("AB"))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["severity"], "error");
    assert!(body["message"].as_str().unwrap().contains("at least 3"));
    Ok(())
}

#[tokio::test]
async fn unknown_batch_is_not_found_everywhere() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/batches/GHOST-1", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "batch 'GHOST-1' not found");

    let res = c.get(format!("{}/traceability/GHOST-1", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = c
        .post(format!("{}/transformations", app.base_url))
        .json(&json!({
            "batch_code": "GHOST-1",
            "washing_process": "triple rinse",
            "washing_date": (Utc::now() - Duration::days(4)).to_rfc3339(),
            "packaging_process": "vacuum pack",
            "packaging_date": (Utc::now() - Duration::days(3)).to_rfc3339(),
            "quality_control": "APPROVED",
            "quality_notes": null,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "batch 'GHOST-1' does not exist");
    Ok(())
}

#[tokio::test]
async fn transformation_hits_the_terminal_date_pair() -> anyhow::Result<()> {
    let app = start_server().await?;
    register_batch(&app, "LOT-410").await?;

    // harvest < washing < packaging, yet the terminal packaging/delivery
    // comparison runs packaging against itself and rejects the request
    let res = reqwest::Client::new()
        .post(format!("{}/transformations", app.base_url))
        .json(&json!({
            "batch_code": "LOT-410",
            "washing_process": "triple rinse",
            "washing_date": (Utc::now() - Duration::days(3)).to_rfc3339(),
            "packaging_process": "vacuum pack",
            "packaging_date": (Utc::now() - Duration::days(1)).to_rfc3339(),
            "quality_control": "APPROVED",
            "quality_notes": null,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "delivery date must be after the packaging date");
    Ok(())
}

#[tokio::test]
async fn logistics_advisory_renders_as_warning() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    register_batch(&app, "LOT-420").await?;

    let started = Utc::now() - Duration::days(1);
    let logistics_body = |temp: &str| {
        json!({
            "batch_code": "LOT-420",
            "transport_temperature": temp,
            "transport_started_at": started.to_rfc3339(),
            "delivered_at": (started + Duration::hours(16)).to_rfc3339(),
            "retailer_name": "FreshMart",
            "retailer_address": "12 Market St",
            "notes": null,
        })
    };

    let res = c.post(format!("{}/logistics", app.base_url)).json(&logistics_body("20")).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["severity"], "warning");
    assert!(body["message"].as_str().unwrap().starts_with("WARNING:"));

    let res = c.post(format!("{}/logistics", app.base_url)).json(&logistics_body("8.5")).send().await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<Value>().await?;
    assert_eq!(body["severity"], "success");
    assert_eq!(body["message"], "logistics record registered successfully");

    let res = c.get(format!("{}/batches/LOT-420/logistics", app.base_url)).send().await?;
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "2 logistics records found");
    Ok(())
}

#[tokio::test]
async fn traceability_reports_chain_completeness() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    register_batch(&app, "LOT-430").await?;

    let started = Utc::now() - Duration::days(1);
    let res = c
        .post(format!("{}/logistics", app.base_url))
        .json(&json!({
            "batch_code": "LOT-430",
            "transport_temperature": "4",
            "transport_started_at": started.to_rfc3339(),
            "delivered_at": (started + Duration::hours(10)).to_rfc3339(),
            "retailer_name": "FreshMart",
            "retailer_address": "12 Market St",
            "notes": null,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = c.get(format!("{}/traceability/LOT-430", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["message"], "traceability retrieved successfully");
    let data = &body["data"];
    assert_eq!(data["batch"]["code"], "LOT-430");
    assert_eq!(data["has_transformations"], false);
    assert_eq!(data["has_logistics"], true);
    assert_eq!(data["is_complete"], false);
    assert_eq!(data["transformations"].as_array().unwrap().len(), 0);
    assert_eq!(data["logistics"].as_array().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn stats_counts_every_record_kind() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();
    register_batch(&app, "LOT-440").await?;
    register_batch(&app, "LOT-441").await?;

    let started = Utc::now() - Duration::days(2);
    let res = c
        .post(format!("{}/logistics", app.base_url))
        .json(&json!({
            "batch_code": "LOT-440",
            "transport_temperature": "4",
            "transport_started_at": started.to_rfc3339(),
            "delivered_at": (started + Duration::hours(8)).to_rfc3339(),
            "retailer_name": "FreshMart",
            "retailer_address": "12 Market St",
            "notes": null,
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = c.get(format!("{}/stats", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["total_batches"], 2);
    assert_eq!(body["total_transformations"], 0);
    assert_eq!(body["total_logistics"], 1);
    Ok(())
}
