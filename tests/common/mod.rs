#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;
use tracing_subscriber::EnvFilter;
use userhub::app;
use userhub::config::{DatabaseSettings, ServerConfig, Variant};
use userhub::lifecycle::Application;

pub struct TestApp {
    dir: TempDir,
    config: ServerConfig,
    pub router: Router,
    pub application: Application,
}

impl TestApp {
    pub async fn new(variant: Variant) -> Self {
        static INIT: std::sync::Once = std::sync::Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(EnvFilter::new("userhub=debug"))
                .with_test_writer()
                .try_init();
        });

        let dir = TempDir::new().expect("tempdir");
        let config = ServerConfig {
            database: DatabaseSettings {
                url: format!("sqlite://{}?mode=rwc", dir.path().join("users.db").display()),
                max_connections: 5,
                echo: false,
            },
            variant,
            ..ServerConfig::default()
        };

        Self::start(dir, config).await
    }

    async fn start(dir: TempDir, config: ServerConfig) -> Self {
        let (application, router) = app::bootstrap(&config).await.expect("bootstrap");
        Self {
            dir,
            config,
            router,
            application,
        }
    }

    /// Boot a fresh process against the same database file
    pub async fn reopen(self) -> Self {
        Self::start(self.dir, self.config).await
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.router.clone().oneshot(request).await.expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    pub async fn json(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let (status, text) = self.request(method, uri, body).await;
        let value = if text.is_empty() {
            Value::Null
        } else {
            serde_json::from_str(&text).expect("json body")
        };
        (status, value)
    }
}
