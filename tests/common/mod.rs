#![allow(dead_code)]

use std::net::SocketAddr;

use anyhow::{Context, Result};
use reqwest::{Method, Response};
use serde_json::Value;
use tokio::net::TcpListener;

use zyarat_api::app::{self, AppState};
use zyarat_api::config::AppConfig;
use zyarat_api::store::Store;

pub use zyarat_api::store::seed::{
    ADMIN_ID, GALLERY_ID, MUSEUM_ID, PENDING_INSTITUTION_ID, SEED_PASSWORD, VISITOR_ID,
};

pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const MUSEUM_EMAIL: &str = "museum@example.com";
pub const GALLERY_EMAIL: &str = "gallery@example.com";
pub const VISITOR_EMAIL: &str = "visitor@example.com";

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// An in-process server over a freshly seeded store. Each test gets its own,
/// so mutations never leak between tests.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    client: reqwest::Client,
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = TEST_JWT_SECRET.to_string();
    config
}

impl TestServer {
    pub async fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let config = test_config();
        let store = Store::seeded(None)?;
        let state = AppState::new(&config, store)?;
        let router = app::router(state, &config);

        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], port)))
            .await
            .context("failed to bind test listener")?;
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, router).await {
                eprintln!("test server stopped: {e}");
            }
        });

        Ok(Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        })
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Log in with a seeded account and return the bearer token.
    pub async fn login(&self, email: &str) -> Result<String> {
        let res = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&serde_json::json!({ "email": email, "password": SEED_PASSWORD }))
            .send()
            .await?;
        anyhow::ensure!(res.status().is_success(), "login for {} failed: {}", email, res.status());

        let body: Value = res.json().await?;
        body["data"]["token"]
            .as_str()
            .map(str::to_string)
            .context("login response carried no token")
    }

    pub async fn request(&self, method: Method, path: &str, token: Option<&str>, body: Option<Value>) -> Result<Response> {
        let mut req = self.client.request(method, self.url(path));
        if let Some(token) = token {
            req = req.bearer_auth(token);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }
        Ok(req.send().await?)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> Result<Response> {
        self.request(Method::GET, path, token, None).await
    }

    pub async fn post(&self, path: &str, token: &str, body: Value) -> Result<Response> {
        self.request(Method::POST, path, Some(token), Some(body)).await
    }

    pub async fn put(&self, path: &str, token: &str, body: Value) -> Result<Response> {
        self.request(Method::PUT, path, Some(token), Some(body)).await
    }

    pub async fn delete(&self, path: &str, token: &str) -> Result<Response> {
        self.request(Method::DELETE, path, Some(token), None).await
    }
}
