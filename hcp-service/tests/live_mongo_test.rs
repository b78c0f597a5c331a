//! Runs against a real MongoDB at `mongodb://localhost:27017`.
//! Use `cargo test -- --ignored` with a server available.

use hcp_service::config::HcpConfig;
use hcp_service::startup::Application;
use mongodb::bson::doc;
use reqwest::{Client, StatusCode};
use service_core::config::{Config as CoreConfig, MongoConfig};
use service_core::store::MongoStore;
use std::sync::Arc;
use uuid::Uuid;

const MONGODB_URI: &str = "mongodb://localhost:27017";

struct TestApp {
    address: String,
    store: MongoStore,
}

impl TestApp {
    async fn spawn() -> Self {
        let database = format!("hcp_test_{}", Uuid::new_v4().simple());
        let store = MongoStore::connect(MONGODB_URI, &database)
            .await
            .expect("Failed to create MongoDB client");

        let config = HcpConfig {
            common: CoreConfig {
                port: 0,
                log_level: "info".to_string(),
                otlp_endpoint: None,
            },
            mongodb: MongoConfig {
                uri: MONGODB_URI.to_string(),
                database,
            },
        };

        let app = Application::build_with_store(config, Arc::new(store.clone()))
            .await
            .expect("Failed to build test application");
        let address = format!("http://127.0.0.1:{}", app.port());

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp { address, store }
    }

    async fn cleanup(&self) {
        let _ = self.store.database().drop(None).await;
    }
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn empty_hcp_collection_returns_empty_array() {
    let app = TestApp::spawn().await;

    let response = Client::new()
        .get(format!("{}/fetch-data", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, serde_json::json!([]));

    app.cleanup().await;
}

#[tokio::test]
#[ignore = "Requires MongoDB at localhost:27017"]
async fn seeded_referal_documents_are_returned() {
    let app = TestApp::spawn().await;
    app.store
        .collection("referal")
        .insert_many(vec![doc! { "ref_npi": "R1" }, doc! { "ref_npi": "R2" }], None)
        .await
        .expect("Failed to seed referal collection");

    let response = Client::new()
        .get(format!("{}/fetch-referal-data", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    let documents = body.as_array().expect("Expected a JSON array");
    assert_eq!(documents.len(), 2);
    assert_eq!(documents[0]["ref_npi"], "R1");
    assert_eq!(documents[1]["ref_npi"], "R2");

    app.cleanup().await;
}
